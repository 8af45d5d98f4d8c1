//! User lifecycle service

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::user::{NewUser, User, UserRepository, UserSnapshot};
use crate::domain::DomainError;

use super::digest::{md5_hex, user_uuid};

/// Request for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub first_name: String,
    pub email: String,
    pub password: String,
}

/// Request for updating a user. `None` and `""` both mean "leave the field
/// unchanged"; there is no way to clear a field to empty.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserRequest {
    pub first_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// User lifecycle service.
///
/// Performs no validation: callers run the validation pipeline first, and
/// this service trusts them. Lookup misses are `Ok(None)`, never errors.
#[derive(Debug)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new user service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create a user: hash the password, derive the uuid from the
    /// creation-time `first_name:email` pair, and insert.
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        let record = NewUser {
            uuid: user_uuid(&request.first_name, &request.email),
            password: md5_hex(&request.password),
            first_name: request.first_name,
            email: request.email,
        };

        let user = self.repository.insert(record).await?;
        info!(email = %user.email(), uuid = %user.uuid(), "user created");

        Ok(user)
    }

    /// Update the user with this uuid. Each supplied non-empty field
    /// overwrites the stored one; the password is hashed first; the uuid is
    /// never touched. `Ok(None)` when no user has this uuid.
    pub async fn update(
        &self,
        uuid: &str,
        request: UpdateUserRequest,
    ) -> Result<Option<User>, DomainError> {
        let Some(mut user) = self.repository.find_by_uuid(uuid).await? else {
            return Ok(None);
        };

        if let Some(first_name) = non_empty(request.first_name) {
            user.set_first_name(first_name);
        }
        if let Some(email) = non_empty(request.email) {
            user.set_email(email);
        }
        if let Some(password) = non_empty(request.password) {
            user.set_password_hash(md5_hex(&password));
        }

        let updated = self.repository.update(&user).await?;
        debug!(uuid = %uuid, "user updated");

        Ok(Some(updated))
    }

    /// Look up a user by the derived identifier.
    pub async fn get_by_uuid(&self, uuid: &str) -> Result<Option<User>, DomainError> {
        self.repository.find_by_uuid(uuid).await
    }

    /// Delete the user with this exact email. `Ok(None)` on miss; on hit the
    /// record is removed and its pre-deletion snapshot returned.
    pub async fn delete_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserSnapshot>, DomainError> {
        let Some(user) = self.repository.find_by_email(email).await? else {
            return Ok(None);
        };

        self.repository.delete(user.id()).await?;
        info!(email = %email, "user deleted");

        Ok(Some(user.to_snapshot()))
    }

    /// All users in storage iteration order.
    pub async fn list_all(&self) -> Result<Vec<User>, DomainError> {
        self.repository.find_all().await
    }

    /// Snapshot of every stored email, for building the uniqueness check.
    pub async fn existing_emails(&self) -> Result<HashSet<String>, DomainError> {
        let users = self.repository.find_all().await?;
        Ok(users.into_iter().map(|u| u.email().to_string()).collect())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
