use crate::alg::Algorithm;
use crate::error::Error;
use crate::jwks::{Jwk, Jwks};

/// Keys eligible to verify a token, in key-set order.
///
/// With a token `kid`, only keys carrying that `kid` (or no `kid` at all)
/// qualify, and finding none is a trust-set error rather than a reason to
/// try unrelated keys. Without a token `kid`, every alg-compatible key
/// qualifies, up to `max_kidless`.
pub(crate) fn select_candidates<'a>(
    jwks: &'a Jwks,
    kid: Option<&str>,
    alg: Algorithm,
    max_kidless: Option<usize>,
) -> Result<Vec<&'a Jwk>, Error> {
    let compatible = jwks
        .keys()
        .iter()
        .filter(move |jwk| jwk_matches_constraints(jwk, alg));
    match kid {
        Some(kid) => {
            let candidates: Vec<&Jwk> = compatible
                .filter(|jwk| jwk.kid().map_or(true, |key_kid| key_kid == kid))
                .collect();
            if candidates.is_empty() {
                return Err(Error::JwksKidAlgMismatch);
            }
            Ok(candidates)
        }
        None => Ok(compatible.take(max_kidless.unwrap_or(usize::MAX)).collect()),
    }
}

pub(crate) fn jwk_matches_constraints(jwk: &Jwk, alg: Algorithm) -> bool {
    jwk.allows_signature() && jwk_allows_alg(jwk, alg)
}

fn jwk_allows_alg(jwk: &Jwk, alg: Algorithm) -> bool {
    match jwk.alg() {
        Some(key_alg) => key_alg == alg,
        None => jwk.family() == alg.family(),
    }
}
