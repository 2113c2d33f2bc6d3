//! Verification of compact JSON Web Tokens against JSON Web Key Sets.
//!
//! ```no_run
//! use jwt_verify::{verify_jwt, Jwks, JwksType, Jwt};
//!
//! # fn run(jwks_json: &str, token: &str) -> Result<(), jwt_verify::Error> {
//! let jwks = Jwks::create_from(jwks_json, JwksType::Jwks)?;
//! let jwt = Jwt::parse(token)?;
//! verify_jwt(&jwt, &jwks)?;
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]

mod alg;
pub mod base64url;
mod error;
mod jwks;
mod jwt;
#[cfg(test)]
mod testutil;
mod verify;

pub use alg::{Algorithm, EcCurve, KeyFamily};
pub use error::Error;
pub use jwks::{
    EcPublicKey, Jwk, Jwks, JwksType, KeyMaterial, RejectReason, RejectedKey, SymmetricKey,
};
pub use jwt::{Audience, Jwt, JwtHeader, RegisteredClaims};
pub use verify::{verify_jwt, JwtVerifier, VerifyOptions};
