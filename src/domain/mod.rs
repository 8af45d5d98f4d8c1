//! Domain layer - Core entities and decision logic

pub mod error;
pub mod user;
pub mod validation;

pub use error::DomainError;
pub use user::{NewUser, User, UserRepository, UserSnapshot};
pub use validation::{
    run_validators, validate_email_format, validate_email_unique, validate_required, Check,
    CheckOutcome,
};
