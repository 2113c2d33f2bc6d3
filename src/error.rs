/// Outcome of parsing or verification when it is not `Ok`.
///
/// Variants carry no payload: a verification failure never says which key
/// was tried or why a signature was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Error {
    #[error("jwt is not in the form of header.payload.signature")]
    JwtBadFormat,
    #[error("jwt header is not a base64url-encoded JSON object with a string alg")]
    JwtHeaderParseError,
    #[error("jwt payload is not a base64url-encoded JSON object")]
    JwtPayloadParseError,
    #[error("jwt signature is not valid base64url")]
    JwtSignatureBase64urlParseError,
    #[error("jwks document could not be parsed into any usable key")]
    JwksParseError,
    #[error("no jwks key matches the jwt kid and alg")]
    JwksKidAlgMismatch,
    #[error("jwt verification failed")]
    JwtVerificationFail,
    #[error("jwt algorithm is not supported")]
    JwtUnsupportedAlgorithm,
}
