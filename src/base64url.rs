//! Unpadded base64url, as used by every segment of a compact JWS and by
//! JWK key material.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;

pub use base64::DecodeError;

/// Decodes `input`, rejecting padding, characters outside the url-safe
/// alphabet, impossible lengths and non-zero trailing bits.
pub fn decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    URL_SAFE_NO_PAD.decode(input)
}

pub fn encode(input: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(input)
}
