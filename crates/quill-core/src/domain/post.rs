use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use quill_shared::AuthorDto;

use super::Document;

/// Post entity - a dated article carrying its own comment thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Option<Uuid>,
    pub date: DateTime<Utc>,
    pub title: String,
    pub body: String,
    pub author: AuthorDto,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// Comment embedded in a post. Created and dropped with its parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub text: String,
    pub date: DateTime<Utc>,
    pub author: AuthorDto,
}

impl Post {
    /// Create a post that has not been stored yet.
    pub fn new(
        date: DateTime<Utc>,
        title: impl Into<String>,
        body: impl Into<String>,
        author: AuthorDto,
    ) -> Self {
        Self {
            id: None,
            date,
            title: title.into(),
            body: body.into(),
            author,
            comments: Vec::new(),
        }
    }
}

impl Comment {
    pub fn new(text: impl Into<String>, date: DateTime<Utc>, author: AuthorDto) -> Self {
        Self {
            text: text.into(),
            date,
            author,
        }
    }
}

impl PartialEq for Post {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Document for Post {
    const COLLECTION: &'static str = "posts";

    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn set_id(&mut self, id: Uuid) {
        self.id = Some(id);
    }
}
