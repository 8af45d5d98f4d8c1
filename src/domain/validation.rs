//! Declarative validation pipeline
//!
//! Request handlers describe their pre-conditions as an ordered list of
//! [`Check`] descriptors and hand the list to [`run_validators`], which
//! accumulates the failures into per-field message lists. Checks are plain
//! closures; no trait objects beyond the boxed function are involved.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

// Anchored at the start only, mirroring the historical matcher: anything
// shaped like `local@domain.tld` from the first character on is accepted.
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+").expect("email regex is valid"));

/// Verdict produced by a single check. Passing outcomes carry an empty
/// message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub is_valid: bool,
    pub message: String,
}

impl CheckOutcome {
    pub fn pass() -> Self {
        Self {
            is_valid: true,
            message: String::new(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
        }
    }
}

type CheckFn = Box<dyn Fn(Option<&str>) -> CheckOutcome + Send + Sync>;

/// Check descriptor: a field name, the value under test, and the check
/// function to apply. `value` is `None` when the field was absent from the
/// request.
pub struct Check {
    field: String,
    value: Option<String>,
    func: CheckFn,
}

impl Check {
    pub fn new(
        field: impl Into<String>,
        value: Option<&str>,
        func: impl Fn(Option<&str>) -> CheckOutcome + Send + Sync + 'static,
    ) -> Self {
        Self {
            field: field.into(),
            value: value.map(str::to_string),
            func: Box::new(func),
        }
    }
}

/// Run checks strictly in the order given, appending each failure message to
/// its field's list. Fields with no failures are absent from the result, so
/// an empty map means the input passed.
pub fn run_validators(checks: &[Check]) -> HashMap<String, Vec<String>> {
    let mut errors: HashMap<String, Vec<String>> = HashMap::new();

    for check in checks {
        let outcome = (check.func)(check.value.as_deref());
        if !outcome.is_valid {
            errors
                .entry(check.field.clone())
                .or_default()
                .push(outcome.message);
        }
    }

    errors
}

/// Fails on absent or empty values.
pub fn validate_required(value: Option<&str>) -> CheckOutcome {
    match value {
        None | Some("") => CheckOutcome::fail("This field is required"),
        Some(_) => CheckOutcome::pass(),
    }
}

/// Fails unless the value looks like `local@domain.tld`.
pub fn validate_email_format(value: Option<&str>) -> CheckOutcome {
    match value {
        Some(v) if EMAIL_REGEX.is_match(v) => CheckOutcome::pass(),
        _ => CheckOutcome::fail("Invalid Email format."),
    }
}

/// Builds the uniqueness check from a snapshot of the emails currently in
/// storage (see `UserService::existing_emails`). Absent and empty values
/// trivially pass: they cannot belong to a stored user.
///
/// The snapshot is taken before the insert that follows a successful run, so
/// two concurrent creates can still race past each other; that check-then-act
/// gap is an accepted limitation of this layer.
pub fn validate_email_unique(
    taken: HashSet<String>,
) -> impl Fn(Option<&str>) -> CheckOutcome + Send + Sync + 'static {
    move |value| match value {
        Some(v) if taken.contains(v) => CheckOutcome::fail("Email already exists."),
        _ => CheckOutcome::pass(),
    }
}
