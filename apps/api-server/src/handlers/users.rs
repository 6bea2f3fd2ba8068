//! User handlers.

use actix_web::{HttpRequest, HttpResponse, http::header, web};
use uuid::Uuid;

use quill_shared::UserDto;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

use super::params::parse_id;

/// GET /users
pub async fn find_all(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.users.find_all().await?;
    let body: Vec<UserDto> = users.iter().map(UserDto::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /users/{id}
pub async fn find_by_id(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path, "User")?;
    let user = state.users.find_by_id(id).await?;
    Ok(HttpResponse::Ok().json(UserDto::from(&user)))
}

/// POST /users
pub async fn insert(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<UserDto>,
) -> AppResult<HttpResponse> {
    let user = state.users.from_dto(body.into_inner());
    let saved = state.users.insert(user).await?;
    let id = saved
        .id
        .ok_or_else(|| AppError::Internal("stored user has no id".to_string()))?;

    tracing::info!(user_id = %id, "User created");

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location(&req, id)))
        .finish())
}

/// PUT /users/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UserDto>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path, "User")?;
    let mut user = state.users.from_dto(body.into_inner());
    user.id = Some(id);
    state.users.update(user).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /users/{id}
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path, "User")?;
    state.users.delete(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// GET /users/{id}/posts
pub async fn find_posts(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path, "User")?;
    let user = state.users.find_by_id(id).await?;
    let posts = state.posts.resolve(&user.posts).await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// Absolute URL of the resource created under the current request path.
fn location(req: &HttpRequest, id: Uuid) -> String {
    let info = req.connection_info();
    format!(
        "{}://{}{}/{}",
        info.scheme(),
        info.host(),
        req.path().trim_end_matches('/'),
        id
    )
}
