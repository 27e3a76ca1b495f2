//! # runtsign
//!
//! SHA1-with-RSA request signing for the RUNT "consulta ciudadana" API.
//!
//! The RUNT gateway authenticates requests with a detached signature header:
//! the request body is signed with the integrator's RSA private key under
//! RSASSA-PKCS1-v1_5 over SHA-1, and the signature travels as standard
//! base64. This crate implements that pipeline as a small library plus a
//! one-shot command-line binary.
//!
//! ## Pipeline
//!
//! - [`key`] — load the private key from a PEM-encoded PKCS#8 container
//! - [`sign`] — compute the deterministic SHA1-with-RSA signature
//! - [`encoding`] — encode the raw signature bytes for transport
//!
//! ## Quick Start
//!
//! ```no_run
//! use runtsign::{encoding, key, sign};
//!
//! let private_key = key::load_private_key(key::DEFAULT_KEY_FILE).unwrap();
//! let signature = sign::sign_message(&private_key, b"hello").unwrap();
//! println!("{}", encoding::encode_signature(&signature));
//! ```
//!
//! ## Security
//!
//! SHA-1 is cryptographically weak by current standards. The remote verifier
//! mandates SHA1-with-RSA, so this crate reproduces the scheme exactly for
//! interoperability; substituting a stronger hash would break verification.
//! Treat the signatures as an API authentication mechanism, not as a general
//! integrity primitive.
//!
//! ## Error Handling
//!
//! All fallible operations return `Result<T, Error>`; the [`Error`] enum
//! distinguishes unreadable key material, malformed key content, and failed
//! cryptographic operations.

pub mod encoding;
pub mod error;
pub mod key;
pub mod sign;

pub use error::Error;
