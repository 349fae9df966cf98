//! Short code generation and validation utilities.
//!
//! Provides random code generation over a fixed 62-character alphabet and
//! validation for custom user-provided codes.

use crate::error::AppError;
use rand::Rng;
use serde_json::json;

/// Alphabet shared by generated short link and invite codes.
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of generated short link codes.
pub const LINK_CODE_LENGTH: usize = 5;

/// Length bounds for custom short link codes.
pub const CUSTOM_CODE_MIN: usize = 3;
pub const CUSTOM_CODE_MAX: usize = 20;

/// Generates a random code of the given length.
///
/// Each character is drawn independently and uniformly from the 62-character
/// alphanumeric alphabet (`a`-`z`, `A`-`Z`, `0`-`9`).
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Generates a random short link code.
pub fn generate_link_code() -> String {
    generate_code(LINK_CODE_LENGTH)
}

/// Generates a random invite code.
///
/// The length is chosen uniformly between 7 and 8 characters per call, which
/// slightly diversifies the shape of issued invites.
pub fn generate_invite_code() -> String {
    let length = if rand::rng().random_bool(0.5) { 7 } else { 8 };
    generate_code(length)
}

/// Validates a user-provided custom short code.
///
/// # Rules
///
/// - Length: 3-20 characters
/// - Allowed characters: letters, digits, hyphens, underscores
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated. Validation runs
/// entirely in-process; no store lookup happens here.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.len() < CUSTOM_CODE_MIN || code.len() > CUSTOM_CODE_MAX {
        return Err(AppError::bad_request(
            "Custom code must be 3-20 characters",
            json!({ "provided_length": code.len() }),
        ));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::bad_request(
            "Custom code can only contain letters, numbers, hyphens, and underscores",
            json!({ "code": code }),
        ));
    }

    Ok(())
}
