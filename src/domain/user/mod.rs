//! User domain
//!
//! The user entity, its externally-visible snapshot, and the repository
//! trait the lifecycle service is generic over.

mod entity;
mod repository;

pub use entity::{NewUser, User, UserSnapshot};
pub use repository::UserRepository;
