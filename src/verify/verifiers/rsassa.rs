use rsa::RsaPublicKey;
use sha2::{Sha256, Sha384, Sha512};
use signature::Verifier as _;

use crate::alg::{Algorithm, HashAlg};

macro_rules! verify_with {
    ($scheme:ident, $digest:ty, $key:expr, $message:expr, $signature:expr) => {{
        let verifier = rsa::$scheme::VerifyingKey::<$digest>::new($key.clone());
        rsa::$scheme::Signature::try_from($signature)
            .map(|sig| verifier.verify($message, &sig).is_ok())
            .unwrap_or(false)
    }};
}

impl super::VerifySignature for RsaPublicKey {
    fn verify(&self, alg: Algorithm, message: &[u8], signature: &[u8]) -> bool {
        match (alg.is_pss(), alg.hash()) {
            (false, HashAlg::Sha256) => verify_with!(pkcs1v15, Sha256, self, message, signature),
            (false, HashAlg::Sha384) => verify_with!(pkcs1v15, Sha384, self, message, signature),
            (false, HashAlg::Sha512) => verify_with!(pkcs1v15, Sha512, self, message, signature),
            (true, HashAlg::Sha256) => verify_with!(pss, Sha256, self, message, signature),
            (true, HashAlg::Sha384) => verify_with!(pss, Sha384, self, message, signature),
            (true, HashAlg::Sha512) => verify_with!(pss, Sha512, self, message, signature),
        }
    }
}
