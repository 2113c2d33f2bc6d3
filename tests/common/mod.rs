#![allow(dead_code)]

use jwt_verify::{base64url, Jwt};

/// Yields copies of `jwt` with exactly one signature bit flipped, one copy
/// per bit, in byte then bit order.
pub struct SignatureFuzzer<'a> {
    jwt: &'a Jwt,
    next_bit: usize,
}

impl<'a> SignatureFuzzer<'a> {
    pub fn new(jwt: &'a Jwt) -> Self {
        Self { jwt, next_bit: 0 }
    }

    pub fn total(&self) -> usize {
        self.jwt.signature().len() * 8
    }
}

impl Iterator for SignatureFuzzer<'_> {
    type Item = Jwt;

    fn next(&mut self) -> Option<Jwt> {
        if self.next_bit >= self.total() {
            return None;
        }
        let (byte, bit) = (self.next_bit / 8, self.next_bit % 8);
        self.next_bit += 1;

        let mut signature = self.jwt.signature().to_vec();
        signature[byte] ^= 1 << bit;
        let token = format!(
            "{}.{}",
            self.jwt.signing_input(),
            base64url::encode(&signature)
        );
        Some(Jwt::parse(&token).expect("fuzzed jwt parses"))
    }
}

/// Removes every occurrence of `member` from a JSON document.
pub fn strip(document: &str, member: &str) -> String {
    document.replace(member, "")
}

/// Yields copies of `jwt` with one bit of the decoded header or payload
/// flipped, header first. Flips that no longer parse as a JWT are skipped.
pub struct SigningInputFuzzer<'a> {
    jwt: &'a Jwt,
    header: Vec<u8>,
    payload: Vec<u8>,
    next_bit: usize,
}

impl<'a> SigningInputFuzzer<'a> {
    pub fn new(jwt: &'a Jwt) -> Self {
        Self {
            jwt,
            header: base64url::decode(jwt.header_segment()).expect("header segment"),
            payload: base64url::decode(jwt.payload_segment()).expect("payload segment"),
            next_bit: 0,
        }
    }

    pub fn total(&self) -> usize {
        (self.header.len() + self.payload.len()) * 8
    }
}

impl Iterator for SigningInputFuzzer<'_> {
    type Item = Jwt;

    fn next(&mut self) -> Option<Jwt> {
        while self.next_bit < self.total() {
            let (byte, bit) = (self.next_bit / 8, self.next_bit % 8);
            self.next_bit += 1;

            let mut header = self.header.clone();
            let mut payload = self.payload.clone();
            match byte.checked_sub(header.len()) {
                None => header[byte] ^= 1 << bit,
                Some(offset) => payload[offset] ^= 1 << bit,
            }
            let token = format!(
                "{}.{}.{}",
                base64url::encode(&header),
                base64url::encode(&payload),
                base64url::encode(self.jwt.signature())
            );
            if let Ok(jwt) = Jwt::parse(&token) {
                return Some(jwt);
            }
        }
        None
    }
}

/// Re-encodes a raw `r || s` signature as DER.
pub fn raw_to_der(raw: &[u8]) -> Vec<u8> {
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
