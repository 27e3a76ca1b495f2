//! Transport encoding for raw signature bytes.

use base64::{engine::general_purpose, Engine as _};

use crate::error::Error;

/// Encode raw signature bytes as standard base64 (RFC 4648, padded, no line
/// wrapping). Decoding the result always yields the input unchanged.
pub fn encode_signature(signature: &[u8]) -> String {
    general_purpose::STANDARD.encode(signature)
}

/// Re-encode a hexadecimal rendering of a signature as base64.
///
/// Whitespace is stripped before decoding, so hex dumps broken across lines
/// or grouped in byte pairs are accepted.
///
/// # Errors
///
/// Returns [`Error::Hex`] when the input contains non-hex characters or an
/// odd number of digits.
pub fn hex_to_base64(hex_str: &str) -> Result<String, Error> {
    let compact: String = hex_str.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = hex::decode(compact)?;
    Ok(general_purpose::STANDARD.encode(bytes))
}
