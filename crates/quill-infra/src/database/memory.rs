//! In-memory document store - used when no database is configured and in tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use regex::{Regex, RegexBuilder};
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{Document, Post, User};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, PostRepository, UserRepository};

/// A single collection held in process memory.
///
/// Documents keep insertion order. Data is lost on process restart.
pub struct InMemoryStore<T> {
    docs: RwLock<Vec<T>>,
}

impl<T> InMemoryStore<T> {
    pub fn new() -> Self {
        Self {
            docs: RwLock::new(Vec::new()),
        }
    }
}

impl<T> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory user repository.
pub type InMemoryUserRepository = InMemoryStore<User>;

/// In-memory post repository.
pub type InMemoryPostRepository = InMemoryStore<Post>;

#[async_trait]
impl<T: Document> BaseRepository<T> for InMemoryStore<T> {
    async fn find_all(&self) -> Result<Vec<T>, RepoError> {
        Ok(self.docs.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, RepoError> {
        let docs = self.docs.read().await;
        Ok(docs.iter().find(|d| d.id() == Some(id)).cloned())
    }

    async fn insert(&self, mut entity: T) -> Result<T, RepoError> {
        entity.set_id(Uuid::new_v4());
        self.docs.write().await.push(entity.clone());
        tracing::debug!(collection = T::COLLECTION, id = ?entity.id(), "Inserted document");
        Ok(entity)
    }

    async fn save(&self, entity: T) -> Result<T, RepoError> {
        let id = entity.id().ok_or(RepoError::NotFound)?;
        let mut docs = self.docs.write().await;
        let slot = docs
            .iter_mut()
            .find(|d| d.id() == Some(id))
            .ok_or(RepoError::NotFound)?;
        *slot = entity.clone();
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.docs.write().await.retain(|d| d.id() != Some(id));
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), RepoError> {
        self.docs.write().await.clear();
        Ok(())
    }
}

impl UserRepository for InMemoryUserRepository {}

/// Compile `text` the way the search queries treat it: a case-insensitive,
/// unanchored regular expression.
fn search_pattern(text: &str) -> Result<Regex, RepoError> {
    RegexBuilder::new(text)
        .case_insensitive(true)
        .build()
        .map_err(|e| RepoError::Query(format!("invalid search pattern: {}", e)))
}

fn matches_text(post: &Post, pattern: &Regex) -> bool {
    pattern.is_match(&post.title)
        || pattern.is_match(&post.body)
        || post.comments.iter().any(|c| pattern.is_match(&c.text))
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Post>, RepoError> {
        let docs = self.docs.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| docs.iter().find(|p| p.id == Some(*id)).cloned())
            .collect())
    }

    async fn search_title(&self, text: &str) -> Result<Vec<Post>, RepoError> {
        let pattern = search_pattern(text)?;
        let docs = self.docs.read().await;
        Ok(docs
            .iter()
            .filter(|p| pattern.is_match(&p.title))
            .cloned()
            .collect())
    }

    async fn full_search(
        &self,
        text: &str,
        min_date: DateTime<Utc>,
        max_date: DateTime<Utc>,
    ) -> Result<Vec<Post>, RepoError> {
        let pattern = search_pattern(text)?;
        let docs = self.docs.read().await;
        Ok(docs
            .iter()
            .filter(|p| p.date >= min_date && p.date < max_date)
            .filter(|p| matches_text(p, &pattern))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use quill_core::domain::Comment;
    use quill_shared::AuthorDto;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2018, 3, d, 0, 0, 0).unwrap()
    }

    fn author(name: &str) -> AuthorDto {
        AuthorDto {
            id: Some(Uuid::new_v4()),
            name: name.to_string(),
        }
    }

    async fn seeded_posts() -> (InMemoryPostRepository, Post, Post) {
        let repo = InMemoryPostRepository::new();
        let mut trip = Post::new(
            day(21),
            "Partiu Viagem",
            "Vou viajar para São Paulo. Abraços!",
            author("Maria Brown"),
        );
        trip.comments
            .push(Comment::new("Boa viagem mano", day(21), author("Alex Green")));
        let morning = Post::new(day(23), "Bom dia", "Acordei Feliz hoje!", author("Maria Brown"));

        let trip = repo.insert(trip).await.unwrap();
        let morning = repo.insert(morning).await.unwrap();
        (repo, trip, morning)
    }

    #[tokio::test]
    async fn test_insert_assigns_fresh_id() {
        let repo = InMemoryUserRepository::new();
        let mut user = User::new("Maria Brown", "maria@gmail.com");
        let provided = Uuid::new_v4();
        user.id = Some(provided);

        let saved = repo.insert(user).await.unwrap();
        assert!(saved.id.is_some());
        assert_ne!(saved.id, Some(provided));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_save_replaces_existing_and_rejects_unknown() {
        let repo = InMemoryUserRepository::new();
        let mut saved = repo
            .insert(User::new("Alex Green", "alex@gmail.com"))
            .await
            .unwrap();
        saved.name = "Alex Brown".into();
        repo.save(saved.clone()).await.unwrap();

        let found = repo.find_by_id(saved.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(found.name, "Alex Brown");

        let mut ghost = User::new("Ghost", "ghost@example.com");
        ghost.id = Some(Uuid::new_v4());
        assert!(matches!(repo.save(ghost).await, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = InMemoryUserRepository::new();
        let saved = repo
            .insert(User::new("Cris Sudan", "cris@gmail.com"))
            .await
            .unwrap();
        let id = saved.id.unwrap();

        repo.delete(id).await.unwrap();
        repo.delete(id).await.unwrap();
        assert!(repo.find_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_search_title_is_case_insensitive() {
        let (repo, _, morning) = seeded_posts().await;

        let found = repo.search_title("bom").await.unwrap();
        assert_eq!(found, vec![morning]);

        assert_eq!(repo.search_title("").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_full_search_matches_comments_within_range() {
        let (repo, trip, _) = seeded_posts().await;

        let found = repo.full_search("MANO", day(1), day(31)).await.unwrap();
        assert_eq!(found, vec![trip]);
    }

    #[tokio::test]
    async fn test_full_search_upper_bound_is_exclusive() {
        let (repo, trip, morning) = seeded_posts().await;

        let found = repo.full_search("", day(21), day(23)).await.unwrap();
        assert_eq!(found, vec![trip.clone()]);

        let found = repo.full_search("", day(21), day(24)).await.unwrap();
        assert_eq!(found, vec![trip, morning]);
    }

    #[tokio::test]
    async fn test_invalid_pattern_is_a_query_error() {
        let (repo, _, _) = seeded_posts().await;
        assert!(matches!(
            repo.search_title("(").await,
            Err(RepoError::Query(_))
        ));
    }

    #[tokio::test]
    async fn test_find_by_ids_keeps_reference_order_and_skips_dangling() {
        let (repo, trip, morning) = seeded_posts().await;
        let ids = [morning.id.unwrap(), Uuid::new_v4(), trip.id.unwrap()];

        let found = repo.find_by_ids(&ids).await.unwrap();
        assert_eq!(found, vec![morning, trip]);
    }
}
