use rsa::RsaPublicKey;
use std::fmt;

use crate::alg::{Algorithm, EcCurve, KeyFamily};

/// One public key record from a key set, with material decoded up front.
#[derive(Debug, Clone)]
pub struct Jwk {
    pub(crate) kid: Option<String>,
    pub(crate) alg: Option<Algorithm>,
    pub(crate) key_use: Option<String>,
    pub(crate) material: KeyMaterial,
}

#[derive(Debug, Clone)]
pub enum KeyMaterial {
    Ec(EcPublicKey),
    Rsa(RsaPublicKey),
    Oct(SymmetricKey),
}

#[derive(Clone)]
pub enum EcPublicKey {
    P256(p256::ecdsa::VerifyingKey),
    P384(p384::ecdsa::VerifyingKey),
    P521(p521::ecdsa::VerifyingKey),
}

/// Shared secret of an `oct` key. `Debug` never prints the bytes.
#[derive(Clone)]
pub struct SymmetricKey(Vec<u8>);

impl Jwk {
    pub fn kid(&self) -> Option<&str> {
        self.kid.as_deref()
    }

    pub fn alg(&self) -> Option<Algorithm> {
        self.alg
    }

    /// The JWK `use` member, if present.
    pub fn key_use(&self) -> Option<&str> {
        self.key_use.as_deref()
    }

    pub fn material(&self) -> &KeyMaterial {
        &self.material
    }

    pub fn family(&self) -> KeyFamily {
        self.material.family()
    }

    /// Keys published for encryption only are never used to check signatures.
    pub fn allows_signature(&self) -> bool {
        matches!(self.key_use.as_deref(), None | Some("sig"))
    }
}

impl KeyMaterial {
    pub fn family(&self) -> KeyFamily {
        match self {
            KeyMaterial::Ec(_) => KeyFamily::Ec,
            KeyMaterial::Rsa(_) => KeyFamily::Rsa,
            KeyMaterial::Oct(_) => KeyFamily::Oct,
        }
    }
}

impl EcPublicKey {
    pub fn curve(&self) -> EcCurve {
        match self {
            EcPublicKey::P256(_) => EcCurve::P256,
            EcPublicKey::P384(_) => EcCurve::P384,
            EcPublicKey::P521(_) => EcCurve::P521,
        }
    }

    /// Builds a key from an uncompressed point; `None` if it is not on the curve.
    pub(crate) fn from_coordinates(curve: EcCurve, x: &[u8], y: &[u8]) -> Option<Self> {
        let mut sec1 = Vec::with_capacity(1 + x.len() + y.len());
        sec1.push(0x04);
        sec1.extend_from_slice(x);
        sec1.extend_from_slice(y);
        match curve {
            EcCurve::P256 => p256::ecdsa::VerifyingKey::from_sec1_bytes(&sec1)
                .ok()
                .map(EcPublicKey::P256),
            EcCurve::P384 => p384::ecdsa::VerifyingKey::from_sec1_bytes(&sec1)
                .ok()
                .map(EcPublicKey::P384),
            EcCurve::P521 => p521::ecdsa::VerifyingKey::from_sec1_bytes(&sec1)
                .ok()
                .map(EcPublicKey::P521),
        }
    }
}

impl fmt::Debug for EcPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EcPublicKey").field(&self.curve()).finish()
    }
}

impl SymmetricKey {
    pub(crate) fn new(secret: Vec<u8>) -> Self {
        Self(secret)
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymmetricKey({} bytes)", self.0.len())
    }
}
