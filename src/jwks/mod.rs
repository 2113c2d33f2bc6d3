mod key;
mod parse;
mod pem;
mod report;


use log::warn;
use std::str::FromStr;

use crate::error::Error;

pub use key::{EcPublicKey, Jwk, KeyMaterial, SymmetricKey};
pub use report::{RejectReason, RejectedKey};

/// Shape of the document handed to [`Jwks::create_from`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JwksType {
    /// `{"keys": [...]}`
    Jwks,
    /// A single JWK object without the `keys` wrapper.
    Jwk,
    /// One or more PEM `PUBLIC KEY` / `RSA PUBLIC KEY` blocks.
    Pem,
}

/// An ordered, immutable set of verification keys.
///
/// A value of this type always holds at least one usable key: documents
/// that yield none fail to build with [`Error::JwksParseError`].
#[derive(Debug, Clone)]
pub struct Jwks {
    keys: Vec<Jwk>,
    rejected: Vec<RejectedKey>,
}

impl Jwks {
    pub fn create_from(document: &str, kind: JwksType) -> Result<Self, Error> {
        let mut builder = KeySetBuilder::default();
        match kind {
            JwksType::Jwks => parse::parse_jwk_set(document, &mut builder)?,
            JwksType::Jwk => parse::parse_single_jwk(document, &mut builder)?,
            JwksType::Pem => pem::parse_pem_keys(document, &mut builder)?,
        }
        builder.finish()
    }

    /// Keys in document order.
    pub fn keys(&self) -> &[Jwk] {
        &self.keys
    }

    /// Entries dropped during parsing, in document order.
    pub fn rejected(&self) -> &[RejectedKey] {
        &self.rejected
    }
}

impl FromStr for Jwks {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::create_from(s, JwksType::Jwks)
    }
}

#[derive(Default)]
pub(crate) struct KeySetBuilder {
    keys: Vec<Jwk>,
    rejected: Vec<RejectedKey>,
}

impl KeySetBuilder {
    fn push(&mut self, index: usize, kid: Option<String>, result: Result<Jwk, RejectReason>) {
        match result {
            Ok(jwk) => self.keys.push(jwk),
            Err(reason) => {
                warn!(
                    "jwks key rejected; index={}, kid={}, reason={}",
                    index,
                    kid.as_deref().unwrap_or("<none>"),
                    reason
                );
                self.rejected.push(RejectedKey {
                    index,
                    kid,
                    reason,
                });
            }
        }
    }

    fn finish(self) -> Result<Jwks, Error> {
        if self.keys.is_empty() {
            warn!("jwks has no usable keys; rejected={}", self.rejected.len());
            return Err(Error::JwksParseError);
        }
        Ok(Jwks {
            keys: self.keys,
            rejected: self.rejected,
        })
    }
}
