//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{NewUser, User};
use crate::domain::DomainError;

/// Storage collaborator for user records.
///
/// Implementations assign the surrogate id and maintain both timestamps.
/// They do NOT enforce email uniqueness; that is a pre-condition the
/// validation layer checks before inserting, and the check-then-insert gap is
/// an accepted limitation rather than an invariant of this trait.
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Insert a new record, assigning id and timestamps
    async fn insert(&self, record: NewUser) -> Result<User, DomainError>;

    /// Find a user by exact email match
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by the derived identifier
    async fn find_by_uuid(&self, uuid: &str) -> Result<Option<User>, DomainError>;

    /// All users in storage iteration order (insertion order for the
    /// in-memory backend)
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    /// Persist field changes in place, refreshing `date_modified`
    async fn update(&self, user: &User) -> Result<User, DomainError>;

    /// Delete by surrogate id; `false` when no such row exists
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;

    /// Check whether any user holds this exact email
    async fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_email(email).await?.is_some())
    }
}
