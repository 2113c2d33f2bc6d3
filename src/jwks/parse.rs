use log::debug;
use rsa::{BigUint, RsaPublicKey};
use serde_json::Value;

use super::key::{EcPublicKey, Jwk, KeyMaterial, SymmetricKey};
use super::report::RejectReason;
use super::KeySetBuilder;
use crate::alg::{Algorithm, EcCurve, KeyFamily};
use crate::base64url;
use crate::error::Error;

#[derive(serde::Deserialize)]
struct RawJwkSet {
    keys: Vec<Value>,
}

#[derive(serde::Deserialize)]
struct RawJwk {
    kty: Option<String>,
    alg: Option<String>,
    kid: Option<String>,
    #[serde(rename = "use")]
    key_use: Option<String>,
    crv: Option<String>,
    x: Option<String>,
    y: Option<String>,
    n: Option<String>,
    e: Option<String>,
    k: Option<String>,
}

pub(super) fn parse_jwk_set(document: &str, builder: &mut KeySetBuilder) -> Result<(), Error> {
    let set: RawJwkSet = serde_json::from_str(document).map_err(|err| {
        debug!("jwks document error: {err}");
        Error::JwksParseError
    })?;
    for (index, entry) in set.keys.iter().enumerate() {
        builder.push(index, entry_kid(entry), parse_jwk(entry));
    }
    Ok(())
}

pub(super) fn parse_single_jwk(document: &str, builder: &mut KeySetBuilder) -> Result<(), Error> {
    let entry: Value = serde_json::from_str(document).map_err(|err| {
        debug!("jwk document error: {err}");
        Error::JwksParseError
    })?;
    builder.push(0, entry_kid(&entry), parse_jwk(&entry));
    Ok(())
}

fn entry_kid(entry: &Value) -> Option<String> {
    entry
        .get("kid")
        .and_then(Value::as_str)
        .map(|s| s.to_string())
}

pub(super) fn parse_jwk(entry: &Value) -> Result<Jwk, RejectReason> {
    if !entry.is_object() {
        return Err(RejectReason::NotAnObject);
    }
    let raw: RawJwk = serde::Deserialize::deserialize(entry).map_err(|err| {
        debug!("jwk member error: {err}");
        RejectReason::Malformed
    })?;
    let kty = raw.kty.as_deref().ok_or(RejectReason::MissingField("kty"))?;
    let family = match kty {
        "EC" => KeyFamily::Ec,
        "RSA" => KeyFamily::Rsa,
        "oct" => KeyFamily::Oct,
        other => return Err(RejectReason::UnsupportedKty(other.to_string())),
    };
    let alg = match raw.alg.as_deref() {
        None => None,
        Some(name) => {
            let alg: Algorithm = name
                .parse()
                .map_err(|_| RejectReason::UnsupportedAlg(name.to_string()))?;
            if alg.family() != family {
                return Err(RejectReason::AlgKeyMismatch(name.to_string()));
            }
            Some(alg)
        }
    };
    let material = match family {
        KeyFamily::Ec => KeyMaterial::Ec(parse_ec(&raw, alg)?),
        KeyFamily::Rsa => KeyMaterial::Rsa(parse_rsa(&raw)?),
        KeyFamily::Oct => KeyMaterial::Oct(parse_oct(&raw)?),
    };
    Ok(Jwk {
        kid: raw.kid.filter(|kid| !kid.is_empty()),
        alg,
        key_use: raw.key_use,
        material,
    })
}

fn parse_ec(raw: &RawJwk, alg: Option<Algorithm>) -> Result<EcPublicKey, RejectReason> {
    let crv = raw.crv.as_deref().ok_or(RejectReason::MissingField("crv"))?;
    let curve =
        EcCurve::from_crv(crv).ok_or_else(|| RejectReason::UnsupportedCurve(crv.to_string()))?;
    if let Some(alg) = alg {
        if alg.curve() != Some(curve) {
            return Err(RejectReason::AlgKeyMismatch(alg.to_string()));
        }
    }
    let x = decode_coordinate(raw.x.as_deref(), "x", curve)?;
    let y = decode_coordinate(raw.y.as_deref(), "y", curve)?;
    EcPublicKey::from_coordinates(curve, &x, &y).ok_or(RejectReason::InvalidKey)
}

fn decode_coordinate(
    value: Option<&str>,
    name: &'static str,
    curve: EcCurve,
) -> Result<Vec<u8>, RejectReason> {
    let bytes = decode_member(value, name)?;
    if bytes.len() != curve.coordinate_size() {
        return Err(RejectReason::BadLength(name));
    }
    Ok(bytes)
}

fn parse_rsa(raw: &RawJwk) -> Result<RsaPublicKey, RejectReason> {
    let n = decode_member(raw.n.as_deref(), "n")?;
    let e = decode_member(raw.e.as_deref(), "e")?;
    RsaPublicKey::new(BigUint::from_bytes_be(&n), BigUint::from_bytes_be(&e)).map_err(|err| {
        debug!("rsa jwk error: {err}");
        RejectReason::InvalidKey
    })
}

fn parse_oct(raw: &RawJwk) -> Result<SymmetricKey, RejectReason> {
    let k = decode_member(raw.k.as_deref(), "k")?;
    if k.is_empty() {
        return Err(RejectReason::InvalidKey);
    }
    Ok(SymmetricKey::new(k))
}

fn decode_member(value: Option<&str>, name: &'static str) -> Result<Vec<u8>, RejectReason> {
    let value = value.ok_or(RejectReason::MissingField(name))?;
    base64url::decode(value).map_err(|_| RejectReason::BadBase64(name))
}
