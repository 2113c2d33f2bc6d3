mod options;
mod select;
mod verifiers;


use log::debug;

use crate::alg::Algorithm;
use crate::error::Error;
use crate::jwks::Jwks;
use crate::jwt::Jwt;
use select::select_candidates;
use verifiers::verify_signature;

pub use options::VerifyOptions;

/// Verifies `jwt` against `jwks` with [`VerifyOptions::default`].
pub fn verify_jwt(jwt: &Jwt, jwks: &Jwks) -> Result<(), Error> {
    JwtVerifier::new().verify(jwt, jwks)
}

/// Signature verifier holding its options; cheap to share across threads.
#[derive(Debug, Clone, Default)]
pub struct JwtVerifier {
    options: VerifyOptions,
}

impl JwtVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the verification options.
    pub fn with_options(mut self, options: VerifyOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &VerifyOptions {
        &self.options
    }

    /// Checks that `jwt` was signed by a key in `jwks`.
    ///
    /// Fails with `JwtUnsupportedAlgorithm` for an unknown or disallowed
    /// `alg`, with `JwksKidAlgMismatch` when the token names a `kid` that no
    /// compatible key carries, and with `JwtVerificationFail` when every
    /// candidate key rejects the signature.
    pub fn verify(&self, jwt: &Jwt, jwks: &Jwks) -> Result<(), Error> {
        let alg = self.resolve_alg(jwt)?;
        let candidates = select_candidates(jwks, jwt.kid(), alg, self.options.max_kidless_keys)
            .map_err(|err| {
                debug!("jwt kid/alg has no match in jwks; alg={alg}");
                err
            })?;
        let message = jwt.signing_input().as_bytes();
        if candidates
            .into_iter()
            .any(|key| verify_signature(alg, message, jwt.signature(), key))
        {
            return Ok(());
        }
        debug!("jwt verification failed; alg={alg}");
        Err(Error::JwtVerificationFail)
    }

    fn resolve_alg(&self, jwt: &Jwt) -> Result<Algorithm, Error> {
        let alg: Algorithm = jwt.alg().parse()?;
        if !self.options.allows(alg) {
            debug!("jwt alg not allowed; alg={alg}");
            return Err(Error::JwtUnsupportedAlgorithm);
        }
        Ok(alg)
    }
}
