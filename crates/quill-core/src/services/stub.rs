//! Test double for the repository ports.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{Document, Post, User};
use crate::error::RepoError;
use crate::ports::{BaseRepository, PostRepository, UserRepository};

type SearchArgs = (String, DateTime<Utc>, DateTime<Utc>);

pub struct StubRepository<T> {
    docs: Mutex<Vec<T>>,
    last_search: Mutex<Option<SearchArgs>>,
}

impl<T> Default for StubRepository<T> {
    fn default() -> Self {
        Self {
            docs: Mutex::new(Vec::new()),
            last_search: Mutex::new(None),
        }
    }
}

impl<T: Document> StubRepository<T> {
    pub fn put(&self, mut doc: T) -> T {
        doc.set_id(Uuid::new_v4());
        self.docs.lock().unwrap().push(doc.clone());
        doc
    }

    pub fn get(&self, id: Uuid) -> Option<T> {
        self.docs
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.id() == Some(id))
            .cloned()
    }

    pub fn last_search(&self) -> Option<SearchArgs> {
        self.last_search.lock().unwrap().clone()
    }
}

#[async_trait]
impl<T: Document> BaseRepository<T> for StubRepository<T> {
    async fn find_all(&self) -> Result<Vec<T>, RepoError> {
        Ok(self.docs.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, RepoError> {
        Ok(self.get(id))
    }

    async fn insert(&self, entity: T) -> Result<T, RepoError> {
        Ok(self.put(entity))
    }

    async fn save(&self, entity: T) -> Result<T, RepoError> {
        let mut docs = self.docs.lock().unwrap();
        let slot = docs
            .iter_mut()
            .find(|d| d.id().is_some() && d.id() == entity.id())
            .ok_or(RepoError::NotFound)?;
        *slot = entity.clone();
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.docs.lock().unwrap().retain(|d| d.id() != Some(id));
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), RepoError> {
        self.docs.lock().unwrap().clear();
        Ok(())
    }
}

impl UserRepository for StubRepository<User> {}

#[async_trait]
impl PostRepository for StubRepository<Post> {
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Post>, RepoError> {
        Ok(ids.iter().filter_map(|id| self.get(*id)).collect())
    }

    async fn search_title(&self, _text: &str) -> Result<Vec<Post>, RepoError> {
        Ok(self.docs.lock().unwrap().clone())
    }

    async fn full_search(
        &self,
        text: &str,
        min_date: DateTime<Utc>,
        max_date: DateTime<Utc>,
    ) -> Result<Vec<Post>, RepoError> {
        *self.last_search.lock().unwrap() = Some((text.to_string(), min_date, max_date));
        Ok(Vec::new())
    }
}
