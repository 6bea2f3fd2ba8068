//! Demo data loaded at startup when `SEED_DEMO_DATA` is enabled.

use chrono::{DateTime, NaiveDate, Utc};

use quill_core::domain::{Comment, Post, User};
use quill_core::error::RepoError;
use quill_shared::AuthorDto;

use crate::state::Repositories;

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

/// Replace the contents of both collections with the demo data set.
pub async fn run(repos: &Repositories) -> Result<(), RepoError> {
    repos.users.delete_all().await?;
    repos.posts.delete_all().await?;

    let mut maria = repos
        .users
        .insert(User::new("Maria Brown", "maria@gmail.com"))
        .await?;
    let alex = repos
        .users
        .insert(User::new("Alex Green", "alex@gmail.com"))
        .await?;
    let cris = repos
        .users
        .insert(User::new("Cris Sudan", "cris@gmail.com"))
        .await?;

    let mut trip = Post::new(
        date(2018, 3, 21),
        "Partiu Viagem",
        "Vou viajar para São Paulo. Abraços!",
        AuthorDto::from(&maria),
    );
    trip.comments = vec![
        Comment::new("Boa viagem mano", date(2018, 3, 21), AuthorDto::from(&alex)),
        Comment::new("Aproveite", date(2018, 3, 22), AuthorDto::from(&cris)),
    ];

    let mut morning = Post::new(
        date(2018, 3, 23),
        "Bom dia",
        "Acordei Feliz hoje!",
        AuthorDto::from(&maria),
    );
    morning.comments = vec![Comment::new(
        "Tenha um ótimo dia",
        date(2018, 3, 23),
        AuthorDto::from(&alex),
    )];

    let trip = repos.posts.insert(trip).await?;
    let morning = repos.posts.insert(morning).await?;

    maria.posts.extend(trip.id);
    maria.posts.extend(morning.id);
    repos.users.save(maria).await?;

    tracing::info!(users = 3, posts = 2, "Demo data seeded");
    Ok(())
}
