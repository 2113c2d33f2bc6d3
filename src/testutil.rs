//! Key and token fixtures shared by unit tests.

use jsonwebtoken::{Algorithm as JwtAlgorithm, EncodingKey};
use rand::thread_rng;
use rsa::pkcs1::{DecodeRsaPrivateKey, EncodeRsaPrivateKey, LineEnding};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};
use serde_json::{json, Value};
use signature::Signer;
use std::sync::OnceLock;

use crate::alg::EcCurve;
use crate::base64url;

pub(crate) const HMAC_SECRET: &[u8] = b"0123456789abcdef0123456789abcdef";

pub(crate) enum EcSigner {
    P256(p256::ecdsa::SigningKey),
    P384(p384::ecdsa::SigningKey),
    P521(p521::ecdsa::SigningKey),
}

impl EcSigner {
    pub(crate) fn random(curve: EcCurve) -> Self {
        let mut rng = thread_rng();
        match curve {
            EcCurve::P256 => EcSigner::P256(p256::ecdsa::SigningKey::random(&mut rng)),
            EcCurve::P384 => EcSigner::P384(p384::ecdsa::SigningKey::random(&mut rng)),
            EcCurve::P521 => EcSigner::P521(p521::ecdsa::SigningKey::random(&mut rng)),
        }
    }

    pub(crate) fn alg(&self) -> &'static str {
        match self {
            EcSigner::P256(_) => "ES256",
            EcSigner::P384(_) => "ES384",
            EcSigner::P521(_) => "ES512",
        }
    }

    /// Public JWK members (`kty`, `crv`, `x`, `y`) without `kid` or `alg`.
    pub(crate) fn public_jwk(&self) -> Value {
        let (crv, x, y) = match self {
            EcSigner::P256(key) => {
                let point = p256::ecdsa::VerifyingKey::from(key).to_encoded_point(false);
                let x = point.x().expect("x coord").to_vec();
                let y = point.y().expect("y coord").to_vec();
                ("P-256", x, y)
            }
            EcSigner::P384(key) => {
                let point = p384::ecdsa::VerifyingKey::from(key).to_encoded_point(false);
                let x = point.x().expect("x coord").to_vec();
                let y = point.y().expect("y coord").to_vec();
                ("P-384", x, y)
            }
            EcSigner::P521(key) => {
                let point = p521::ecdsa::VerifyingKey::from(key).to_encoded_point(false);
                let x = point.x().expect("x coord").to_vec();
                let y = point.y().expect("y coord").to_vec();
                ("P-521", x, y)
            }
        };
        json!({
            "kty": "EC",
            "crv": crv,
            "x": base64url::encode(x),
            "y": base64url::encode(y),
        })
    }

    /// Fixed-width `r || s` signature.
    pub(crate) fn sign_raw(&self, message: &[u8]) -> Vec<u8> {
        match self {
            EcSigner::P256(key) => {
                let sig: p256::ecdsa::Signature = key.sign(message);
                sig.to_bytes().to_vec()
            }
            EcSigner::P384(key) => {
                let sig: p384::ecdsa::Signature = key.sign(message);
                sig.to_bytes().to_vec()
            }
            EcSigner::P521(key) => {
                let sig: p521::ecdsa::Signature = key.sign(message);
                sig.to_bytes().to_vec()
            }
        }
    }
}

/// Re-encodes a raw `r || s` signature as DER.
pub(crate) fn raw_to_der(raw: &[u8]) -> Vec<u8> {
    let (r, s) = raw.split_at(raw.len() / 2);
    let mut body = der_integer(r);
    body.extend(der_integer(s));
    let mut out = vec![0x30];
    out.extend(der_length(body.len()));
    out.extend(body);
    out
}

fn der_integer(value: &[u8]) -> Vec<u8> {
    let start = value.iter().position(|b| *b != 0).unwrap_or(value.len() - 1);
    let mut content = value[start..].to_vec();
    if content[0] & 0x80 != 0 {
        content.insert(0, 0);
    }
    let mut out = vec![0x02];
    out.extend(der_length(content.len()));
    out.extend(content);
    out
}

fn der_length(len: usize) -> Vec<u8> {
    if len < 0x80 {
        vec![len as u8]
    } else {
        vec![0x81, len as u8]
    }
}

pub(crate) fn rsa_private_key_pem() -> &'static str {
    static PEM: OnceLock<String> = OnceLock::new();
    PEM.get_or_init(|| {
        let mut rng = thread_rng();
        let key = RsaPrivateKey::new(&mut rng, 2048).expect("private key");
        key.to_pkcs1_pem(LineEnding::LF)
            .expect("private key pem")
            .to_string()
    })
    .as_str()
}

pub(crate) fn rsa_public_key() -> RsaPublicKey {
    let private_key = RsaPrivateKey::from_pkcs1_pem(rsa_private_key_pem()).expect("private key");
    RsaPublicKey::from(&private_key)
}

pub(crate) fn rsa_encoding_key() -> EncodingKey {
    EncodingKey::from_rsa_pem(rsa_private_key_pem().as_bytes()).expect("encoding key")
}

/// Public JWK members (`kty`, `n`, `e`) without `kid` or `alg`.
pub(crate) fn rsa_public_jwk() -> Value {
    let public_key = rsa_public_key();
    json!({
        "kty": "RSA",
        "n": base64url::encode(public_key.n().to_bytes_be()),
        "e": base64url::encode(public_key.e().to_bytes_be()),
    })
}

pub(crate) fn hmac_jwk() -> Value {
    json!({
        "kty": "oct",
        "k": base64url::encode(HMAC_SECRET),
    })
}

/// Adds the members of `extra` to the JSON object `base`.
pub(crate) fn with_members(mut base: Value, extra: Value) -> Value {
    if let (Some(base), Value::Object(extra)) = (base.as_object_mut(), extra) {
        base.extend(extra);
    }
    base
}

pub(crate) fn jwks_json(keys: Vec<Value>) -> String {
    json!({ "keys": keys }).to_string()
}

pub(crate) fn default_payload() -> Value {
    json!({
        "iss": "issuer@example.com",
        "sub": "principal@example.com",
        "aud": "https://service.example.com/api",
    })
}

pub(crate) fn signing_input(header: &Value, payload: &Value) -> String {
    format!(
        "{}.{}",
        base64url::encode(serde_json::to_vec(header).expect("header json")),
        base64url::encode(serde_json::to_vec(payload).expect("payload json"))
    )
}

pub(crate) fn es_token(signer: &EcSigner, header: &Value, payload: &Value) -> String {
    let input = signing_input(header, payload);
    let signature = signer.sign_raw(input.as_bytes());
    format!("{input}.{}", base64url::encode(signature))
}

pub(crate) fn es_token_der(signer: &EcSigner, header: &Value, payload: &Value) -> String {
    let input = signing_input(header, payload);
    let signature = raw_to_der(&signer.sign_raw(input.as_bytes()));
    format!("{input}.{}", base64url::encode(signature))
}

/// Signs with `jsonwebtoken`, keeping full control over the header JSON.
pub(crate) fn jsonwebtoken_token(
    alg: JwtAlgorithm,
    key: &EncodingKey,
    header: &Value,
    payload: &Value,
) -> String {
    let input = signing_input(header, payload);
    let signature = jsonwebtoken::crypto::sign(input.as_bytes(), key, alg).expect("sign");
    format!("{input}.{signature}")
}
