use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};
use subtle::ConstantTimeEq;

use crate::alg::{Algorithm, HashAlg};
use crate::jwks::SymmetricKey;

macro_rules! hmac_tag {
    ($digest:ty, $secret:expr, $message:expr) => {{
        match Hmac::<$digest>::new_from_slice($secret) {
            Ok(mut mac) => {
                mac.update($message);
                Some(mac.finalize().into_bytes().to_vec())
            }
            Err(_) => None,
        }
    }};
}

impl super::VerifySignature for SymmetricKey {
    fn verify(&self, alg: Algorithm, message: &[u8], signature: &[u8]) -> bool {
        let expected = match alg.hash() {
            HashAlg::Sha256 => hmac_tag!(Sha256, self.as_bytes(), message),
            HashAlg::Sha384 => hmac_tag!(Sha384, self.as_bytes(), message),
            HashAlg::Sha512 => hmac_tag!(Sha512, self.as_bytes(), message),
        };
        let Some(expected) = expected else {
            return false;
        };
        if expected.len() != signature.len() {
            return false;
        }
        expected.ct_eq(signature).into()
    }
}
