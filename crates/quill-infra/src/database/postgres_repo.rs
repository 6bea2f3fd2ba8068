//! PostgreSQL repository implementations.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::extension::postgres::PgBinOper;
use sea_orm::sea_query::{Expr, SimpleExpr};
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter};
use uuid::Uuid;

use quill_core::domain::Post;
use quill_core::error::RepoError;
use quill_core::ports::{PostRepository, UserRepository};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::Entity as UserEntity;
use super::postgres_base::{PostgresBaseRepository, repo_error};

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// Any element of the `comments` array whose text matches `$1`, case-insensitively.
const COMMENT_TEXT_MATCHES: &str = r#"EXISTS (SELECT 1 FROM jsonb_array_elements("posts"."comments") AS c WHERE c->>'text' ~* $1)"#;

/// `column ~* text`, with `text` bound as a parameter.
fn regex_match(column: post::Column, text: &str) -> SimpleExpr {
    Expr::col((PostEntity, column)).binary(PgBinOper::RegexCaseInsensitive, text)
}

#[async_trait]
impl UserRepository for PostgresUserRepository {}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Post>, RepoError> {
        let mut found: HashMap<Uuid, Post> = PostEntity::find()
            .filter(post::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
            .map_err(repo_error)?
            .into_iter()
            .map(|model| (model.id, model.into()))
            .collect();

        Ok(ids.iter().filter_map(|id| found.remove(id)).collect())
    }

    async fn search_title(&self, text: &str) -> Result<Vec<Post>, RepoError> {
        tracing::debug!(text, "Searching post titles");

        let result = PostEntity::find()
            .filter(regex_match(post::Column::Title, text))
            .all(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn full_search(
        &self,
        text: &str,
        min_date: DateTime<Utc>,
        max_date: DateTime<Utc>,
    ) -> Result<Vec<Post>, RepoError> {
        tracing::debug!(text, %min_date, %max_date, "Running full post search");

        let text_matches = Condition::any()
            .add(regex_match(post::Column::Title, text))
            .add(regex_match(post::Column::Body, text))
            .add(Expr::cust_with_values(COMMENT_TEXT_MATCHES, [text]));

        let result = PostEntity::find()
            .filter(post::Column::Date.gte(min_date))
            .filter(post::Column::Date.lt(max_date))
            .filter(text_matches)
            .all(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

