/// A key-set entry that was dropped while building a [`Jwks`](super::Jwks).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RejectedKey {
    /// Position of the entry in the source document.
    pub index: usize,
    pub kid: Option<String>,
    pub reason: RejectReason,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, thiserror::Error)]
pub enum RejectReason {
    #[error("entry is not a JSON object")]
    NotAnObject,
    #[error("entry has a member of the wrong JSON type")]
    Malformed,
    #[error("missing required member {0}")]
    MissingField(&'static str),
    #[error("unsupported kty {0}")]
    UnsupportedKty(String),
    #[error("unsupported crv {0}")]
    UnsupportedCurve(String),
    #[error("unsupported alg {0}")]
    UnsupportedAlg(String),
    #[error("alg {0} does not fit the key")]
    AlgKeyMismatch(String),
    #[error("member {0} is not valid base64url")]
    BadBase64(&'static str),
    #[error("member {0} has the wrong length for the curve")]
    BadLength(&'static str),
    #[error("pem block {0} is not a supported public key")]
    UnsupportedPem(String),
    #[error("key material does not form a usable public key")]
    InvalidKey,
}
