use base64::{engine::general_purpose, Engine as _};
use sha2::{Digest, Sha256};

/// UTF-8 bytes of `s`. Non-ASCII characters take more than one byte each.
pub fn encode_bytes(s: &str) -> Vec<u8> {
    s.as_bytes().to_vec()
}

pub fn sha256_digest(bytes: &[u8]) -> [u8; 32] {
    Sha256::digest(bytes).into()
}

/// Lowercase hex, two digits per byte, high nibble first, no separators.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

pub fn sha256_hex(s: &str) -> String {
    to_hex(&sha256_digest(&encode_bytes(s)))
}

/// PKCE S256 challenge: BASE64URL-NOPAD(SHA256(verifier)).
pub fn code_challenge_s256(verifier: &str) -> String {
    general_purpose::URL_SAFE_NO_PAD.encode(sha256_digest(&encode_bytes(verifier)))
}
