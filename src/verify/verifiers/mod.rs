mod ecdsa;
mod mac;
mod rsassa;

use crate::alg::Algorithm;
use crate::jwks::{Jwk, KeyMaterial};

/// Checks a signature with one kind of key material.
///
/// Returns `false` for any failure, malformed input included: callers must
/// not be able to tell a corrupt signature from a wrong key.
pub(crate) trait VerifySignature {
    fn verify(&self, alg: Algorithm, message: &[u8], signature: &[u8]) -> bool;
}

pub(crate) fn verify_signature(
    alg: Algorithm,
    message: &[u8],
    signature: &[u8],
    key: &Jwk,
) -> bool {
    if key.family() != alg.family() {
        return false;
    }
    match key.material() {
        KeyMaterial::Ec(key) => VerifySignature::verify(key, alg, message, signature),
        KeyMaterial::Rsa(key) => VerifySignature::verify(key, alg, message, signature),
        KeyMaterial::Oct(key) => VerifySignature::verify(key, alg, message, signature),
    }
}
