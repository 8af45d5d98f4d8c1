//! User infrastructure module
//!
//! Concrete pieces of the user lifecycle: MD5 digests, the in-memory
//! repository, and the service that ties them to the domain trait.

mod digest;
mod repository;
mod service;

pub use digest::{md5_hex, user_uuid};
pub use repository::InMemoryUserRepository;
pub use service::{CreateUserRequest, UpdateUserRequest, UserService};
