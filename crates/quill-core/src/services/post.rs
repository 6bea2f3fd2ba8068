use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use uuid::Uuid;

use crate::domain::Post;
use crate::error::DomainError;
use crate::ports::PostRepository;

/// Post lookups and searches.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Post, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Post", id))
    }

    /// Case-insensitive title match. An empty `text` matches every post.
    pub async fn find_by_title(&self, text: &str) -> Result<Vec<Post>, DomainError> {
        Ok(self.repo.search_title(text).await?)
    }

    /// Search by date range and text.
    ///
    /// `max_date` is pushed forward by one day so that the whole of that
    /// calendar day is included. The ordering of the two bounds is not checked.
    pub async fn full_search(
        &self,
        text: &str,
        min_date: DateTime<Utc>,
        max_date: DateTime<Utc>,
    ) -> Result<Vec<Post>, DomainError> {
        let max_date = max_date + TimeDelta::days(1);
        Ok(self.repo.full_search(text, min_date, max_date).await?)
    }

    /// Load the posts behind a user's reference list.
    pub async fn resolve(&self, ids: &[Uuid]) -> Result<Vec<Post>, DomainError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.repo.find_by_ids(ids).await?)
    }
}
