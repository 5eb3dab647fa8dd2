//! API credential shape checks
//!
//! Rejects obviously malformed keys before any network cost is incurred.
//! This is a shape check only; whether the key is actually accepted is up
//! to the upstream service.

use crate::{Error, Result};

const MIN_KEY_LENGTH: usize = 10;
const KEY_PREFIX: &str = "sk-";

pub const INVALID_KEY_MESSAGE: &str = "Invalid API key. Please check your API key.";

/// Validate the shape of an API key.
///
/// The key must be non-empty after trimming, at least [`MIN_KEY_LENGTH`]
/// characters, and carry the provider's `sk-` prefix.
pub fn validate(api_key: &str) -> Result<()> {
    let trimmed = api_key.trim();
    if trimmed.is_empty() || trimmed.len() < MIN_KEY_LENGTH || !trimmed.starts_with(KEY_PREFIX) {
        return Err(Error::InvalidCredential(INVALID_KEY_MESSAGE.to_string()));
    }
    Ok(())
}
