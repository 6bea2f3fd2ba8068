use std::sync::Arc;

use uuid::Uuid;

use quill_shared::UserDto;

use crate::domain::User;
use crate::error::DomainError;
use crate::ports::UserRepository;

/// User use cases.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<User, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", id))
    }

    pub async fn insert(&self, user: User) -> Result<User, DomainError> {
        Ok(self.repo.insert(user).await?)
    }

    /// Delete a user. Posts that reference the user are left as they are.
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.find_by_id(id).await?;
        Ok(self.repo.delete(id).await?)
    }

    /// Overwrite `name` and `email` on the stored user.
    ///
    /// Every other field of `user` is ignored; the stored id and post
    /// references are kept. Read and write are not atomic: the last writer wins.
    pub async fn update(&self, user: User) -> Result<User, DomainError> {
        let id = user
            .id
            .ok_or(DomainError::MissingId { entity_type: "User" })?;
        let mut stored = self.find_by_id(id).await?;
        stored.name = user.name;
        stored.email = user.email;
        Ok(self.repo.save(stored).await?)
    }

    /// Build a user from its transfer shape. No validation.
    pub fn from_dto(&self, dto: UserDto) -> User {
        User {
            id: dto.id,
            name: dto.name,
            email: dto.email,
            posts: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::stub::StubRepository;

    fn service() -> (UserService, Arc<StubRepository<User>>) {
        let repo = Arc::new(StubRepository::<User>::default());
        (UserService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn test_insert_then_find_by_id() {
        let (service, _) = service();
        let mut user = User::new("Maria Brown", "maria@gmail.com");
        user.id = Some(Uuid::new_v4());
        let provided = user.id;

        let saved = service.insert(user).await.unwrap();
        assert_ne!(saved.id, provided);

        let id = saved.id.unwrap();
        let found = service.find_by_id(id).await.unwrap();
        assert_eq!(found.id, Some(id));
        assert_eq!(found.name, "Maria Brown");
        assert_eq!(found.email, "maria@gmail.com");
    }

    #[tokio::test]
    async fn test_find_all_empty_is_ok() {
        let (service, _) = service();
        assert!(service.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_ids_are_not_found() {
        let (service, _) = service();
        let id = Uuid::new_v4();

        assert!(matches!(
            service.find_by_id(id).await,
            Err(DomainError::NotFound { entity_type: "User", id: missing }) if missing == id
        ));
        assert!(matches!(
            service.delete(id).await,
            Err(DomainError::NotFound { .. })
        ));

        let mut ghost = User::new("Ghost", "ghost@example.com");
        ghost.id = Some(id);
        assert!(matches!(
            service.update(ghost).await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_update_without_id_names_no_id() {
        let (service, repo) = service();
        let stored = service
            .insert(User::new("Maria Brown", "maria@gmail.com"))
            .await
            .unwrap();

        let err = service
            .update(User::new("No Id", "none@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::MissingId { entity_type: "User" }));
        assert_eq!(err.to_string(), "User has no id and cannot be found");
        assert!(!err.to_string().contains(&Uuid::nil().to_string()));
        let kept = repo.get(stored.id.unwrap()).unwrap();
        assert_eq!(kept.name, "Maria Brown");
    }

    #[tokio::test]
    async fn test_update_merges_only_name_and_email() {
        let (service, repo) = service();
        let mut existing = User::new("Maria Brown", "maria@gmail.com");
        existing.posts = vec![Uuid::new_v4(), Uuid::new_v4()];
        let stored = service.insert(existing).await.unwrap();

        let mut incoming = User::new("Maria Green", "maria.green@gmail.com");
        incoming.id = stored.id;
        incoming.posts = Vec::new();
        service.update(incoming).await.unwrap();

        let after = repo.get(stored.id.unwrap()).unwrap();
        assert_eq!(after.id, stored.id);
        assert_eq!(after.name, "Maria Green");
        assert_eq!(after.email, "maria.green@gmail.com");
        assert_eq!(after.posts, stored.posts);
    }

    #[tokio::test]
    async fn test_delete_removes_user() {
        let (service, _) = service();
        let stored = service
            .insert(User::new("Alex Green", "alex@gmail.com"))
            .await
            .unwrap();
        let id = stored.id.unwrap();

        service.delete(id).await.unwrap();
        assert!(matches!(
            service.find_by_id(id).await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[test]
    fn test_from_dto_keeps_id_name_email() {
        let (service, _) = service();
        let dto = UserDto {
            id: Some(Uuid::new_v4()),
            name: String::new(),
            email: "cris@gmail.com".to_string(),
        };

        let user = service.from_dto(dto.clone());
        assert_eq!(UserDto::from(&user), dto);
        assert!(user.posts.is_empty());
    }
}
