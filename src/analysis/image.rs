//! Image input handling
//!
//! Accepts the string the browser hands over: raw base64, optionally with a
//! `data:image/<subtype>;base64,` header from a canvas capture or file read.

use crate::{Error, Result};
use base64::Engine as _;

pub const INVALID_IMAGE_MESSAGE: &str = "Invalid image data";

const DATA_URL_SCHEME: &str = "data:image/";
const BASE64_MARKER: &str = ";base64,";

/// Decode an optionally data-URL-prefixed base64 image string.
///
/// Fails with `InvalidImage` if the payload is empty or whitespace-only
/// after prefix stripping, or is not valid base64.
pub fn decode_image(input: &str) -> Result<Vec<u8>> {
    let payload = strip_data_url_prefix(input).trim();
    if payload.is_empty() {
        return Err(Error::InvalidImage(INVALID_IMAGE_MESSAGE.to_string()));
    }

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| {
            tracing::error!("Image payload is not valid base64: {}", e);
            Error::InvalidImage(INVALID_IMAGE_MESSAGE.to_string())
        })?;

    if bytes.is_empty() {
        return Err(Error::InvalidImage(INVALID_IMAGE_MESSAGE.to_string()));
    }
    Ok(bytes)
}

fn strip_data_url_prefix(input: &str) -> &str {
    if let Some(rest) = input.strip_prefix(DATA_URL_SCHEME) {
        if let Some(idx) = rest.find(BASE64_MARKER) {
            return &rest[idx + BASE64_MARKER.len()..];
        }
    }
    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorCategory;

    // "healthy" in standard base64
    const PAYLOAD: &str = "aGVhbHRoeQ==";

    #[test]
    fn test_decodes_plain_base64() {
        assert_eq!(decode_image(PAYLOAD).unwrap(), b"healthy");
    }

    #[test]
    fn test_strips_jpeg_data_url_prefix() {
        let input = format!("data:image/jpeg;base64,{}", PAYLOAD);
        assert_eq!(decode_image(&input).unwrap(), b"healthy");
    }

    #[test]
    fn test_strips_png_data_url_prefix() {
        let input = format!("data:image/png;base64,{}", PAYLOAD);
        assert_eq!(decode_image(&input).unwrap(), b"healthy");
    }

    #[test]
    fn test_prefix_only_is_invalid_image() {
        let err = decode_image("data:image/jpeg;base64,").unwrap_err();
        assert_eq!(err.category(), Some(ErrorCategory::InvalidImage));
        assert_eq!(err.to_string(), INVALID_IMAGE_MESSAGE);
    }

    #[test]
    fn test_whitespace_payload_is_invalid_image() {
        let err = decode_image("data:image/jpeg;base64,   ").unwrap_err();
        assert_eq!(err.category(), Some(ErrorCategory::InvalidImage));
    }

    #[test]
    fn test_empty_string_is_invalid_image() {
        assert!(decode_image("").is_err());
    }

    #[test]
    fn test_malformed_base64_is_invalid_image() {
        let err = decode_image("data:image/jpeg;base64,!!not-base64!!").unwrap_err();
        assert_eq!(err.category(), Some(ErrorCategory::InvalidImage));
    }

    #[test]
    fn test_non_data_url_input_is_used_verbatim() {
        // A string that merely mentions the scheme mid-payload is not a prefix.
        let err = decode_image("xdata:image/jpeg;base64,AAAA").unwrap_err();
        assert_eq!(err.category(), Some(ErrorCategory::InvalidImage));
    }
}
