mod parts;
mod types;


use serde_json::{Map, Value};
use std::str::FromStr;

use crate::error::Error;
use parts::{decode_jwt_header, decode_jwt_payload, decode_jwt_signature, split_jwt};

pub use types::{Audience, JwtHeader, RegisteredClaims};

/// A JWT in compact serialization, decoded but not yet verified.
///
/// The signing input is kept exactly as it appeared in the token text:
/// re-serializing the decoded JSON is not guaranteed to reproduce the
/// signed bytes.
#[derive(Debug, Clone)]
pub struct Jwt {
    header: JwtHeader,
    payload: Map<String, Value>,
    claims: RegisteredClaims,
    signing_input: String,
    header_len: usize,
    signature: Vec<u8>,
}

impl Jwt {
    /// Parses `header.payload.signature`.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let parts = split_jwt(text)?;
        let header = decode_jwt_header(parts.header)?;
        let (payload, claims) = decode_jwt_payload(parts.payload)?;
        let signature = decode_jwt_signature(parts.signature)?;
        Ok(Self {
            header,
            payload,
            claims,
            signing_input: text[..parts.signing_input_len()].to_string(),
            header_len: parts.header.len(),
            signature,
        })
    }

    pub fn header(&self) -> &JwtHeader {
        &self.header
    }

    pub fn alg(&self) -> &str {
        &self.header.alg
    }

    pub fn kid(&self) -> Option<&str> {
        self.header.kid.as_deref()
    }

    pub fn typ(&self) -> Option<&str> {
        self.header.typ.as_deref()
    }

    pub fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }

    pub fn claims(&self) -> &RegisteredClaims {
        &self.claims
    }

    /// `header.payload` exactly as received.
    pub fn signing_input(&self) -> &str {
        &self.signing_input
    }

    /// Base64url header segment as received.
    pub fn header_segment(&self) -> &str {
        &self.signing_input[..self.header_len]
    }

    /// Base64url payload segment as received.
    pub fn payload_segment(&self) -> &str {
        &self.signing_input[self.header_len + 1..]
    }

    /// Decoded signature bytes.
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    pub fn iss(&self) -> Option<&str> {
        self.claims.iss.as_deref()
    }

    pub fn sub(&self) -> Option<&str> {
        self.claims.sub.as_deref()
    }

    /// Audiences, whether `aud` was a single string or an array.
    pub fn audiences(&self) -> Vec<&str> {
        self.claims
            .aud
            .as_ref()
            .map(|aud| aud.iter().collect())
            .unwrap_or_default()
    }

    pub fn exp(&self) -> Option<f64> {
        self.claims.exp
    }

    pub fn nbf(&self) -> Option<f64> {
        self.claims.nbf
    }

    pub fn iat(&self) -> Option<f64> {
        self.claims.iat
    }

    pub fn jti(&self) -> Option<&str> {
        self.claims.jti.as_deref()
    }
}

impl FromStr for Jwt {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
