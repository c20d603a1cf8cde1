//! Bucket and object name validation.

use crate::config::Config;
use crate::error::{ErrorCode, TransferError, TransferResult};

fn invalid_bucket(message: String) -> TransferError {
    TransferError::with_message(ErrorCode::InvalidBucketName, message)
}

/// Validates a bucket name.
///
/// Bucket names are 3-63 characters of lowercase letters, digits and
/// hyphens, and must start and end with a letter or digit.
pub fn check_bucket_name(name: &str) -> TransferResult<()> {
    let len = name.len();
    if !(3..=63).contains(&len) {
        return Err(invalid_bucket(format!(
            "bucket name {} len is between [3-63],now is {}",
            name, len
        )));
    }

    if !name
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
    {
        return Err(invalid_bucket(format!(
            "bucket name {} can only include lowercase letters, numbers, and -",
            name
        )));
    }

    if name.starts_with('-') || name.ends_with('-') {
        return Err(invalid_bucket(format!(
            "bucket name {} must start and end with a lowercase letter or number",
            name
        )));
    }

    Ok(())
}

/// Validates an object name.
///
/// In strict mode a leading `?` is rejected, since it would be read as the
/// start of a query string once the name is placed in a URL.
pub fn check_object_name_ex(name: &str, strict: bool) -> TransferResult<()> {
    if name.is_empty() {
        return Err(TransferError::with_message(
            ErrorCode::InvalidObjectName,
            "object name is empty",
        ));
    }
    if strict && name.starts_with('?') {
        return Err(TransferError::with_message(
            ErrorCode::InvalidObjectName,
            "object name is invalid, can't start with '?'",
        ));
    }
    Ok(())
}

/// Validates an object name with the strictness `config` resolves to.
pub fn check_object_name(name: &str, config: &Config) -> TransferResult<()> {
    check_object_name_ex(name, config.resolve().verify_object_strict)
}
