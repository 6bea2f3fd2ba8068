//! Post handlers.

use actix_web::{HttpResponse, web};
use chrono::{DateTime, Utc};

use crate::middleware::error::AppResult;
use crate::state::AppState;

use super::params::{FullSearchParams, TitleSearchParams, convert_date, parse_id};

/// GET /posts/{id}
pub async fn find_by_id(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path, "Post")?;
    let post = state.posts.find_by_id(id).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// GET /posts/titlesearch?text=
pub async fn title_search(
    state: web::Data<AppState>,
    query: web::Query<TitleSearchParams>,
) -> AppResult<HttpResponse> {
    let posts = state.posts.find_by_title(&query.text).await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /posts/fullsearch?text=&minDate=&maxDate=
///
/// A missing or unreadable `minDate` means the epoch, `maxDate` means now.
pub async fn full_search(
    state: web::Data<AppState>,
    query: web::Query<FullSearchParams>,
) -> AppResult<HttpResponse> {
    let min_date = convert_date(query.min_date.as_deref(), DateTime::<Utc>::UNIX_EPOCH);
    let max_date = convert_date(query.max_date.as_deref(), Utc::now());

    let posts = state
        .posts
        .full_search(&query.text, min_date, max_date)
        .await?;
    Ok(HttpResponse::Ok().json(posts))
}
