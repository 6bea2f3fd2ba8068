//! Post entity for SeaORM.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, FromJsonQueryResult, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use quill_core::domain::Comment;
use quill_shared::AuthorDto;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub date: DateTimeWithTimeZone,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub author: AuthorColumn,
    #[sea_orm(column_type = "JsonBinary")]
    pub comments: CommentsColumn,
}

/// Author snapshot as stored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct AuthorColumn {
    pub id: Option<Uuid>,
    pub name: String,
}

/// One embedded comment. Field names are what the comment search predicate reads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentColumn {
    pub text: String,
    pub date: DateTime<Utc>,
    pub author: AuthorColumn,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct CommentsColumn(pub Vec<CommentColumn>);

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<AuthorColumn> for AuthorDto {
    fn from(author: AuthorColumn) -> Self {
        Self {
            id: author.id,
            name: author.name,
        }
    }
}

impl From<AuthorDto> for AuthorColumn {
    fn from(author: AuthorDto) -> Self {
        Self {
            id: author.id,
            name: author.name,
        }
    }
}

impl From<CommentColumn> for Comment {
    fn from(comment: CommentColumn) -> Self {
        Self {
            text: comment.text,
            date: comment.date,
            author: comment.author.into(),
        }
    }
}

impl From<Comment> for CommentColumn {
    fn from(comment: Comment) -> Self {
        Self {
            text: comment.text,
            date: comment.date,
            author: comment.author.into(),
        }
    }
}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for quill_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            date: model.date.into(),
            title: model.title,
            body: model.body,
            author: model.author.into(),
            comments: model.comments.0.into_iter().map(Into::into).collect(),
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<quill_core::domain::Post> for ActiveModel {
    fn from(post: quill_core::domain::Post) -> Self {
        Self {
            id: post.id.map(Set).unwrap_or(ActiveValue::NotSet),
            date: Set(post.date.into()),
            title: Set(post.title),
            body: Set(post.body),
            author: Set(post.author.into()),
            comments: Set(CommentsColumn(
                post.comments.into_iter().map(Into::into).collect(),
            )),
        }
    }
}
