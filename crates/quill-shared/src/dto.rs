//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Public projection of a user: id, name and email only.
///
/// The post reference list is deliberately absent so that listing users never
/// walks the user → post graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Author snapshot embedded in posts and comments.
///
/// Captured at authoring time and never refreshed, so renaming a user leaves
/// existing posts untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorDto {
    pub id: Option<Uuid>,
    pub name: String,
}
