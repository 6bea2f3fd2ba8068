//! Domain entities - the core business objects.

mod post;
mod user;

pub use post::{Comment, Post};
pub use user::User;

use uuid::Uuid;

/// A record stored as a document with a store-assigned id.
pub trait Document: Clone + Send + Sync + 'static {
    /// Collection the document lives in.
    const COLLECTION: &'static str;

    fn id(&self) -> Option<Uuid>;

    fn set_id(&mut self, id: Uuid);
}
