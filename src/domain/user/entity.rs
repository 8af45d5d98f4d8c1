//! User entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity as persisted by the storage collaborator.
///
/// `uuid` is derived once at creation (MD5 of `first_name:email`) and is
/// never recomputed, even when the name or email later changes. Timestamps
/// belong to the storage layer; the entity's own mutators leave them alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Storage-assigned surrogate identifier
    id: i64,
    /// Display name
    first_name: String,
    /// Unique among live users (enforced by the validation layer, not here)
    email: String,
    /// MD5 hex digest of the plaintext password - never exposed in serialization
    #[serde(skip_serializing)]
    password: String,
    /// Derived identifier, immutable after creation
    uuid: String,
    /// Creation timestamp
    date_created: DateTime<Utc>,
    /// Last update timestamp
    date_modified: DateTime<Utc>,
}

/// Insert record for a user. The storage collaborator assigns the surrogate
/// id and both timestamps.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub email: String,
    /// Already hashed; plaintext never reaches the repository
    pub password: String,
    pub uuid: String,
}

/// Externally-visible projection of a user: no surrogate id, no password
/// hash, no timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSnapshot {
    pub first_name: String,
    pub email: String,
    pub uuid: String,
}

impl User {
    /// Materialize a stored row. Intended for repository implementations.
    pub fn new(id: i64, record: NewUser, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            first_name: record.first_name,
            email: record.email,
            password: record.password,
            uuid: record.uuid,
            date_created: created_at,
            date_modified: created_at,
        }
    }

    // Getters

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    pub fn date_created(&self) -> DateTime<Utc> {
        self.date_created
    }

    pub fn date_modified(&self) -> DateTime<Utc> {
        self.date_modified
    }

    // Mutators - uuid deliberately has none

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password_hash(&mut self, password_hash: impl Into<String>) {
        self.password = password_hash.into();
    }

    /// Refresh `date_modified`. Called by repositories on update.
    pub(crate) fn touch(&mut self, now: DateTime<Utc>) {
        self.date_modified = now;
    }

    /// Produce the externally-visible projection.
    pub fn to_snapshot(&self) -> UserSnapshot {
        UserSnapshot {
            first_name: self.first_name.clone(),
            email: self.email.clone(),
            uuid: self.uuid.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user() -> User {
        User::new(
            1,
            NewUser {
                first_name: "ramadan".to_string(),
                email: "ramadan@test.io".to_string(),
                password: "0123456789abcdef0123456789abcdef".to_string(),
                uuid: "feedfacefeedfacefeedfacefeedface".to_string(),
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_new_sets_both_timestamps() {
        let user = create_test_user();
        assert_eq!(user.date_created(), user.date_modified());
    }

    #[test]
    fn test_mutators_leave_timestamps_alone() {
        let mut user = create_test_user();
        let before = user.date_modified();

        user.set_first_name("ramadan1");
        user.set_email("ramadan1@test.io");
        user.set_password_hash("fedcba9876543210fedcba9876543210");

        assert_eq!(user.date_modified(), before);
        assert_eq!(user.first_name(), "ramadan1");
        assert_eq!(user.email(), "ramadan1@test.io");
    }

    #[test]
    fn test_to_snapshot_projection() {
        let user = create_test_user();
        assert_eq!(
            user.to_snapshot(),
            UserSnapshot {
                first_name: "ramadan".to_string(),
                email: "ramadan@test.io".to_string(),
                uuid: "feedfacefeedfacefeedfacefeedface".to_string(),
            }
        );
    }

    #[test]
    fn test_serialization_excludes_password() {
        let user = create_test_user();
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("0123456789abcdef"));
    }

    #[test]
    fn test_snapshot_serialization_shape() {
        let snapshot = create_test_user().to_snapshot();
        let value = serde_json::to_value(&snapshot).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert!(obj.contains_key("first_name"));
        assert!(obj.contains_key("email"));
        assert!(obj.contains_key("uuid"));
    }
}
