//! # Quill Shared
//!
//! Transfer shapes exchanged at the API boundary.
//! Kept free of domain logic so clients can depend on it directly.

pub mod dto;
pub mod response;

pub use dto::{AuthorDto, UserDto};
pub use response::ErrorResponse;
