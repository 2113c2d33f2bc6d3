use log::debug;
use serde_json::{Map, Value};

/// Decoded JOSE header of a compact JWT.
#[derive(Debug, Clone, PartialEq)]
pub struct JwtHeader {
    pub alg: String,
    pub kid: Option<String>,
    pub typ: Option<String>,
    pub raw: Map<String, Value>,
}

/// Registered claims (RFC 7519 section 4.1) read from the payload.
///
/// These are exposed for callers that enforce claim policy; verification
/// itself never looks at them. A claim of an unexpected JSON type is left
/// out here but stays visible in the raw payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisteredClaims {
    pub iss: Option<String>,
    pub sub: Option<String>,
    pub aud: Option<Audience>,
    /// NumericDate seconds; fractional values are kept.
    pub exp: Option<f64>,
    pub nbf: Option<f64>,
    pub iat: Option<f64>,
    pub jti: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Audience {
    Single(String),
    Multiple(Vec<String>),
}

impl RegisteredClaims {
    pub(super) fn from_payload(payload: &Map<String, Value>) -> Self {
        Self {
            iss: claim(payload, "iss", string_value),
            sub: claim(payload, "sub", string_value),
            aud: claim(payload, "aud", audience_value),
            exp: claim(payload, "exp", numeric_date_value),
            nbf: claim(payload, "nbf", numeric_date_value),
            iat: claim(payload, "iat", numeric_date_value),
            jti: claim(payload, "jti", string_value),
        }
    }
}

impl Audience {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let values: &[String] = match self {
            Audience::Single(value) => std::slice::from_ref(value),
            Audience::Multiple(values) => values,
        };
        values.iter().map(String::as_str)
    }
}

fn claim<T>(payload: &Map<String, Value>, name: &str, read: fn(&Value) -> Option<T>) -> Option<T> {
    let value = payload.get(name)?;
    if value.is_null() {
        return None;
    }
    let claim = read(value);
    if claim.is_none() {
        debug!("jwt claim {name} has unexpected type; ignored");
    }
    claim
}

fn string_value(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

fn numeric_date_value(value: &Value) -> Option<f64> {
    value.as_f64().filter(|seconds| *seconds >= 0.0)
}

fn audience_value(value: &Value) -> Option<Audience> {
    match value {
        Value::String(aud) => Some(Audience::Single(aud.clone())),
        Value::Array(values) => values
            .iter()
            .map(string_value)
            .collect::<Option<Vec<_>>>()
            .map(Audience::Multiple),
        _ => None,
    }
}
