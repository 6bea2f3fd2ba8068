use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{Document, Post, User};
use crate::error::RepoError;

/// Generic repository trait defining standard document operations.
#[async_trait]
pub trait BaseRepository<T: Document>: Send + Sync {
    /// All documents in the collection, in store order.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Find a document by its unique ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, RepoError>;

    /// Store a new document. Any id on the input is replaced by a fresh one.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Replace the stored document that has the same id.
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete a document by its ID. Deleting a missing id is a no-op.
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;

    /// Remove every document in the collection.
    async fn delete_all(&self) -> Result<(), RepoError>;
}

/// User repository.
#[async_trait]
pub trait UserRepository: BaseRepository<User> {}

/// Post repository with the search queries.
///
/// `text` arguments are case-insensitive regular expressions; the empty
/// pattern matches everything.
#[async_trait]
pub trait PostRepository: BaseRepository<Post> {
    /// Posts with the given ids, in the order of `ids`. Unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Post>, RepoError>;

    /// Posts whose title matches `text`.
    async fn search_title(&self, text: &str) -> Result<Vec<Post>, RepoError>;

    /// Posts dated in `[min_date, max_date)` whose title, body or any comment
    /// text matches `text`.
    async fn full_search(
        &self,
        text: &str,
        min_date: DateTime<Utc>,
        max_date: DateTime<Utc>,
    ) -> Result<Vec<Post>, RepoError>;
}
