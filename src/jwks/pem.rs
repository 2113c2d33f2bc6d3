use log::debug;
use p256::elliptic_curve::sec1::ToEncodedPoint;
use pkcs8::DecodePublicKey;
use rsa::pkcs1::DecodeRsaPublicKey;
use rsa::RsaPublicKey;

use super::key::{EcPublicKey, Jwk, KeyMaterial};
use super::report::RejectReason;
use super::KeySetBuilder;
use crate::error::Error;

pub(super) fn parse_pem_keys(document: &str, builder: &mut KeySetBuilder) -> Result<(), Error> {
    let blocks = pem::parse_many(document.as_bytes()).map_err(|err| {
        debug!("pem parse error: {err}");
        Error::JwksParseError
    })?;
    for (index, block) in blocks.iter().enumerate() {
        let result = load_public_key(block.tag(), block.contents()).map(|material| Jwk {
            kid: None,
            alg: None,
            key_use: None,
            material,
        });
        builder.push(index, None, result);
    }
    Ok(())
}

fn load_public_key(tag: &str, der: &[u8]) -> Result<KeyMaterial, RejectReason> {
    match tag {
        "RSA PUBLIC KEY" => RsaPublicKey::from_pkcs1_der(der)
            .map(KeyMaterial::Rsa)
            .map_err(|_| RejectReason::InvalidKey),
        "PUBLIC KEY" => load_spki(der).ok_or(RejectReason::InvalidKey),
        other => Err(RejectReason::UnsupportedPem(other.to_string())),
    }
}

fn load_spki(der: &[u8]) -> Option<KeyMaterial> {
    if let Ok(key) = RsaPublicKey::from_public_key_der(der) {
        return Some(KeyMaterial::Rsa(key));
    }
    if let Ok(key) = p256::PublicKey::from_public_key_der(der) {
        let encoded = key.to_encoded_point(false);
        let key = p256::ecdsa::VerifyingKey::from_encoded_point(&encoded).ok()?;
        return Some(KeyMaterial::Ec(EcPublicKey::P256(key)));
    }
    if let Ok(key) = p384::PublicKey::from_public_key_der(der) {
        let encoded = key.to_encoded_point(false);
        let key = p384::ecdsa::VerifyingKey::from_encoded_point(&encoded).ok()?;
        return Some(KeyMaterial::Ec(EcPublicKey::P384(key)));
    }
    if let Ok(key) = p521::PublicKey::from_public_key_der(der) {
        let encoded = key.to_encoded_point(false);
        let key = p521::ecdsa::VerifyingKey::from_encoded_point(&encoded).ok()?;
        return Some(KeyMaterial::Ec(EcPublicKey::P521(key)));
    }
    None
}
