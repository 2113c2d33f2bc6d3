use crate::alg::{Algorithm, KeyFamily, ALL_ALGS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyOptions {
    /// Tokens whose `alg` is not listed fail with `JwtUnsupportedAlgorithm`.
    pub allowed_algs: Vec<Algorithm>,
    /// Upper bound on keys tried for a token without `kid`; `None` tries all.
    pub max_kidless_keys: Option<usize>,
}

impl VerifyOptions {
    /// Every supported algorithm, no cap on kid-less candidates.
    pub fn all_algs() -> Self {
        Self {
            allowed_algs: ALL_ALGS.to_vec(),
            max_kidless_keys: None,
        }
    }

    pub fn ec_only() -> Self {
        Self::for_families(&[KeyFamily::Ec])
    }

    pub fn rsa_only() -> Self {
        Self::for_families(&[KeyFamily::Rsa])
    }

    pub fn hmac_only() -> Self {
        Self::for_families(&[KeyFamily::Oct])
    }

    /// EC and RSA algorithms; rejects HMAC-signed tokens outright.
    pub fn asymmetric_only() -> Self {
        Self::for_families(&[KeyFamily::Ec, KeyFamily::Rsa])
    }

    pub fn with_max_kidless_keys(mut self, max: usize) -> Self {
        self.max_kidless_keys = Some(max);
        self
    }

    pub fn allows(&self, alg: Algorithm) -> bool {
        self.allowed_algs.contains(&alg)
    }

    fn for_families(families: &[KeyFamily]) -> Self {
        let mut options = Self::all_algs();
        options
            .allowed_algs
            .retain(|alg| families.contains(&alg.family()));
        options
    }
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self::all_algs()
    }
}
