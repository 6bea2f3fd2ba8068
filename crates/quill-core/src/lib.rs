//! # Quill Core
//!
//! The domain layer of the Quill backend.
//! Entities, repository ports and the services that drive them; no
//! infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::DomainError;
pub use services::{PostService, UserService};
