//! Application services - thin orchestration over the repository ports.

mod post;
mod user;

pub use post::PostService;
pub use user::UserService;

#[cfg(test)]
mod stub;
