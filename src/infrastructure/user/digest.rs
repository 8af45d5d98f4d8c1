//! MD5 digests for password storage and derived user identifiers

use md5::{Digest, Md5};

/// Lowercase hex MD5 digest of a string.
pub fn md5_hex(data: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(data.as_bytes());
    hex::encode(hasher.finalize())
}

/// Derived user identifier: MD5 of `first_name:email` as they were at
/// creation time. Not recomputed on later edits.
pub fn user_uuid(first_name: &str, email: &str) -> String {
    md5_hex(&format!("{}:{}", first_name, email))
}
