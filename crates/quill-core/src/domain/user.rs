use serde::{Deserialize, Serialize};
use uuid::Uuid;

use quill_shared::{AuthorDto, UserDto};

use super::Document;

/// User entity.
///
/// `posts` only references post documents by id. Resolving them is an
/// explicit repository call (`PostRepository::find_by_ids`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct User {
    pub id: Option<Uuid>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub posts: Vec<Uuid>,
}

impl User {
    /// Create a user that has not been stored yet.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            posts: Vec::new(),
        }
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Document for User {
    const COLLECTION: &'static str = "users";

    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn set_id(&mut self, id: Uuid) {
        self.id = Some(id);
    }
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

impl From<&User> for AuthorDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
        }
    }
}
