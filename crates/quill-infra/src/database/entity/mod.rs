//! SeaORM entities. Embedded values are stored as `jsonb`.

pub mod post;
pub mod user;
