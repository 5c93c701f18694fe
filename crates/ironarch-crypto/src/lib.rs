//! Iron Architect fingerprint primitives
//!
//! One-way SHA-256 fingerprints used to compare a submitted passphrase with
//! the reference digest embedded in the deployed site.
//!
//! # Design
//!
//! All functions in this crate are pure. Nothing here is secret: the
//! reference fingerprint ships in the clear, so comparison is plain equality
//! and the digest is only ever used to decide which content a visitor sees.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod fingerprint;

pub use fingerprint::{FINGERPRINT_SIZE, Fingerprint, FingerprintError};
