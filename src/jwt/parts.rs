use log::debug;
use serde_json::{Map, Value};

use super::types::{JwtHeader, RegisteredClaims};
use crate::base64url;
use crate::error::Error;

pub(super) struct JwtParts<'a> {
    pub(super) header: &'a str,
    pub(super) payload: &'a str,
    pub(super) signature: &'a str,
}

impl JwtParts<'_> {
    /// Length of `header.payload`, the prefix the signature covers.
    pub(super) fn signing_input_len(&self) -> usize {
        self.header.len() + 1 + self.payload.len()
    }
}

pub(super) fn split_jwt(token: &str) -> Result<JwtParts<'_>, Error> {
    let mut iter = token.split('.');
    let header = iter.next().ok_or(Error::JwtBadFormat)?;
    let payload = iter.next().ok_or(Error::JwtBadFormat)?;
    let signature = iter.next().ok_or(Error::JwtBadFormat)?;
    if iter.next().is_some() {
        return Err(Error::JwtBadFormat);
    }
    Ok(JwtParts {
        header,
        payload,
        signature,
    })
}

pub(super) fn decode_jwt_header(encoded: &str) -> Result<JwtHeader, Error> {
    let header_bytes = base64url::decode(encoded).map_err(|err| {
        debug!("jwt header base64url decode error: {err}");
        Error::JwtHeaderParseError
    })?;
    let raw: Map<String, Value> = serde_json::from_slice(&header_bytes).map_err(|err| {
        debug!("jwt header json error: {err}");
        Error::JwtHeaderParseError
    })?;
    let alg = raw
        .get("alg")
        .and_then(Value::as_str)
        .ok_or(Error::JwtHeaderParseError)?
        .to_string();
    // An empty kid names no key.
    let kid = optional_string(&raw, "kid")?.filter(|kid| !kid.is_empty());
    let typ = optional_string(&raw, "typ")?;
    Ok(JwtHeader { alg, kid, typ, raw })
}

pub(super) fn decode_jwt_payload(
    encoded: &str,
) -> Result<(Map<String, Value>, RegisteredClaims), Error> {
    let payload_bytes = base64url::decode(encoded).map_err(|err| {
        debug!("jwt payload base64url decode error: {err}");
        Error::JwtPayloadParseError
    })?;
    let payload: Map<String, Value> = serde_json::from_slice(&payload_bytes).map_err(|err| {
        debug!("jwt payload json error: {err}");
        Error::JwtPayloadParseError
    })?;
    let claims = RegisteredClaims::from_payload(&payload);
    Ok((payload, claims))
}

pub(super) fn decode_jwt_signature(encoded: &str) -> Result<Vec<u8>, Error> {
    base64url::decode(encoded).map_err(|err| {
        debug!("jwt signature base64url decode error: {err}");
        Error::JwtSignatureBase64urlParseError
    })
}

fn optional_string(raw: &Map<String, Value>, name: &str) -> Result<Option<String>, Error> {
    match raw.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.to_string())),
        Some(_) => {
            debug!("jwt header {name} is not a string");
            Err(Error::JwtHeaderParseError)
        }
    }
}
