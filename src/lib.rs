//! User Registry Core
//!
//! The reusable core of a small user CRUD service:
//! - A declarative validation pipeline that accumulates per-field error lists
//! - A user lifecycle service (create/update/delete/lookup) over a pluggable
//!   storage repository, with MD5 password hashing and a derived identifier
//!
//! HTTP routing and the real storage engine are external collaborators; this
//! crate ships an in-memory repository for embedding and tests.

pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;
pub use crate::domain::DomainError;
