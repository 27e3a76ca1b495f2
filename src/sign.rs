//! SHA1-with-RSA signature computation.
//!
//! Scheme parameters (mandated by the RUNT verifier, not implementation
//! choices):
//!   Signature scheme: RSASSA-PKCS1-v1_5
//!   Hash: SHA-1 (NOT SHA-256)
//!   DigestInfo: SHA-1 algorithm identifier + 20-byte digest
//!
//! The scheme is deterministic: no salt or randomness enters the padding, so
//! a fixed (key, message) pair always produces the same signature. SHA-1 is
//! weak by current standards; it is kept deliberately because the remote
//! verifier accepts nothing else. Do not substitute a stronger hash here.

use base64::{engine::general_purpose, Engine as _};
use rsa::pkcs1v15::{Signature, SigningKey, VerifyingKey};
use rsa::signature::{SignatureEncoding, Signer, Verifier};
use rsa::{RsaPrivateKey, RsaPublicKey};
use sha1::Sha1;

use crate::error::Error;

/// Sign `message` with RSASSA-PKCS1-v1_5 over SHA-1.
///
/// The returned signature is a big-endian byte sequence whose length equals
/// the byte length of the key modulus, left-padded with zeros if needed.
///
/// # Errors
///
/// Returns [`Error::Signing`] when the modulus is too small to hold the
/// padded DigestInfo (keys under 368 bits cannot carry a SHA-1 DigestInfo
/// plus the minimum 11 bytes of padding).
pub fn sign_message(private_key: &RsaPrivateKey, message: &[u8]) -> Result<Vec<u8>, Error> {
    let signing_key = SigningKey::<Sha1>::new(private_key.clone());
    let signature = signing_key.try_sign(message)?;
    Ok(signature.to_vec())
}

/// Verify a base64-encoded SHA1-with-RSA signature over `message`.
///
/// Returns `Ok(false)` when the signature is well-formed but does not match;
/// malformed base64 or signature structure is an error.
pub fn verify_signature(
    public_key: &RsaPublicKey,
    message: &[u8],
    signature_b64: &str,
) -> Result<bool, Error> {
    let signature_bytes = general_purpose::STANDARD.decode(signature_b64)?;
    let signature = Signature::try_from(signature_bytes.as_slice())?;

    let verifying_key = VerifyingKey::<Sha1>::new(public_key.clone());
    match verifying_key.verify(message, &signature) {
        Ok(()) => Ok(true),
        Err(_) => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::encode_signature;
    use rand::rngs::OsRng;
    use rsa::traits::PublicKeyParts;

    fn test_key() -> RsaPrivateKey {
        let mut rng = OsRng;
        RsaPrivateKey::new(&mut rng, 1024).unwrap()
    }

    #[test]
    fn test_signing_is_deterministic() {
        let key = test_key();
        let message = b"same message";

        let sig1 = sign_message(&key, message).unwrap();
        let sig2 = sign_message(&key, message).unwrap();
        assert_eq!(sig1, sig2);
    }

    #[test]
    fn test_signature_length_matches_modulus() {
        let key = test_key();
        let signature = sign_message(&key, b"hello").unwrap();
        assert_eq!(signature.len(), key.size());
    }

    #[test]
    fn test_sign_and_verify() {
        let key = test_key();
        let message = b"hello";

        let signature = sign_message(&key, message).unwrap();
        let signature_b64 = encode_signature(&signature);

        let public_key = key.to_public_key();
        assert!(verify_signature(&public_key, message, &signature_b64).unwrap());

        // A standard-compliant verifier rejects the signature for any other
        // message.
        assert!(!verify_signature(&public_key, b"tampered", &signature_b64).unwrap());
    }

    #[test]
    fn test_signature_verifies_under_standard_scheme() {
        let key = test_key();
        let message = b"test license request bytes";
        let sig_bytes = sign_message(&key, message).unwrap();

        let verifying_key = VerifyingKey::<Sha1>::new(key.to_public_key());
        let signature = Signature::try_from(sig_bytes.as_slice()).unwrap();
        verifying_key.verify(message, &signature).unwrap();
    }

    #[test]
    fn test_modulus_too_small() {
        let mut rng = OsRng;
        let key = RsaPrivateKey::new(&mut rng, 256).unwrap();

        let err = sign_message(&key, b"hello").unwrap_err();
        assert!(matches!(err, Error::Signing(_)));
    }

    #[test]
    fn test_verify_rejects_malformed_base64() {
        let key = test_key();
        let public_key = key.to_public_key();
        let err = verify_signature(&public_key, b"hello", "!!not base64!!").unwrap_err();
        assert!(matches!(err, Error::Base64(_)));
    }

    #[test]
    fn test_encoded_signature_round_trip() {
        let key = test_key();
        let signature = sign_message(&key, b"hello").unwrap();

        let encoded = encode_signature(&signature);
        let decoded = general_purpose::STANDARD.decode(&encoded).unwrap();
        assert_eq!(decoded, signature);
    }
}
