use signature::Verifier as _;

use crate::alg::{Algorithm, EcCurve};
use crate::jwks::EcPublicKey;

impl super::VerifySignature for EcPublicKey {
    fn verify(&self, alg: Algorithm, message: &[u8], signature: &[u8]) -> bool {
        if alg.curve() != Some(self.curve()) {
            return false;
        }
        ecdsa_signature_candidates(signature, self.curve())
            .iter()
            .any(|raw| self.verify_raw(message, raw))
    }
}

impl EcPublicKey {
    fn verify_raw(&self, message: &[u8], raw: &[u8]) -> bool {
        match self {
            EcPublicKey::P256(key) => p256::ecdsa::Signature::from_slice(raw)
                .map(|sig| key.verify(message, &sig).is_ok())
                .unwrap_or(false),
            EcPublicKey::P384(key) => p384::ecdsa::Signature::from_slice(raw)
                .map(|sig| key.verify(message, &sig).is_ok())
                .unwrap_or(false),
            EcPublicKey::P521(key) => p521::ecdsa::Signature::from_slice(raw)
                .map(|sig| key.verify(message, &sig).is_ok())
                .unwrap_or(false),
        }
    }
}

/// Fixed-width `r || s` readings of `signature`, DER first.
///
/// A complete DER `SEQUENCE { INTEGER r, INTEGER s }` can have exactly the
/// raw width, so a buffer of that size may yield both readings.
pub(crate) fn ecdsa_signature_candidates(signature: &[u8], curve: EcCurve) -> Vec<Vec<u8>> {
    let size = curve.coordinate_size();
    let mut candidates = Vec::with_capacity(2);
    if let Some(raw) = der_to_raw(signature, size) {
        candidates.push(raw);
    }
    if signature.len() == size * 2 {
        candidates.push(signature.to_vec());
    }
    candidates
}

fn der_to_raw(signature: &[u8], size: usize) -> Option<Vec<u8>> {
    if signature.len() < 8 || signature[0] != 0x30 {
        return None;
    }
    let (seq_len, mut idx) = read_der_length(signature, 1)?;
    if idx + seq_len != signature.len() {
        return None;
    }
    let (r_bytes, next) = read_der_integer(signature, idx)?;
    idx = next;
    let (s_bytes, next) = read_der_integer(signature, idx)?;
    if next != signature.len() {
        return None;
    }

    let r = trim_leading_zero(r_bytes);
    let s = trim_leading_zero(s_bytes);
    if r.len() > size || s.len() > size {
        return None;
    }

    let mut out = vec![0u8; size * 2];
    out[size - r.len()..size].copy_from_slice(r);
    out[size * 2 - s.len()..size * 2].copy_from_slice(s);
    Some(out)
}

fn read_der_integer(data: &[u8], offset: usize) -> Option<(&[u8], usize)> {
    if *data.get(offset)? != 0x02 {
        return None;
    }
    let (len, start) = read_der_length(data, offset + 1)?;
    let end = start.checked_add(len)?;
    if len == 0 || end > data.len() {
        return None;
    }
    Some((&data[start..end], end))
}

fn read_der_length(data: &[u8], offset: usize) -> Option<(usize, usize)> {
    let first = *data.get(offset)?;
    if first & 0x80 == 0 {
        return Some((first as usize, offset + 1));
    }
    let num_bytes = (first & 0x7f) as usize;
    if num_bytes == 0 || num_bytes > 4 || offset + 1 + num_bytes > data.len() {
        return None;
    }
    let len = data[offset + 1..offset + 1 + num_bytes]
        .iter()
        .fold(0usize, |len, byte| (len << 8) | *byte as usize);
    Some((len, offset + 1 + num_bytes))
}

fn trim_leading_zero(bytes: &[u8]) -> &[u8] {
    let mut start = 0;
    while start + 1 < bytes.len() && bytes[start] == 0 {
        start += 1;
    }
    &bytes[start..]
}
