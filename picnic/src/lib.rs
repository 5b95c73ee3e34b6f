//! # Picnic Post-Quantum Digital Signature Scheme
//!
//! This crate provides safe Rust bindings for the Picnic signature scheme,
//! a NIST Post-Quantum Cryptography alternate candidate, by linking against
//! the native libpicnic (version 3 or later).
//!
//! ## Features
//!
//! - **All twelve instances**: Picnic (FS/UR), Picnic3 and Picnic full at L1, L3 and L5
//! - **NIST encoding**: pack and unpack signed messages as used by the NIST KATs
//! - **Key hygiene**: private keys are cleared on drop and compared in constant time
//! - **Python**: an extension module with the `python` feature
//!
//! ## Quick Start
//!
//! ```no_run
//! use picnic::Parameters;
//!
//! let (sk, pk) = picnic::keygen(Parameters::PicnicL1FS).unwrap();
//!
//! let message = b"Hello, post-quantum world!";
//! let signature = picnic::sign(&sk, message).unwrap();
//!
//! assert!(picnic::verify(&pk, message, &signature).unwrap());
//! ```
//!
//! ## Parameter Sets
//!
//! | Parameter Set   | Level | Private Key | Public Key | Max Signature |
//! |-----------------|-------|-------------|------------|---------------|
//! | Picnic_L1_FS    | 1     | 49 bytes    | 33 bytes   | 34,036 bytes  |
//! | Picnic3_L1      | 1     | 52 bytes    | 35 bytes   | 14,612 bytes  |
//! | Picnic_L1_full  | 1     | 52 bytes    | 35 bytes   | 32,061 bytes  |
//! | Picnic_L3_FS    | 3     | 73 bytes    | 49 bytes   | 76,776 bytes  |
//! | Picnic_L5_FS    | 5     | 97 bytes    | 65 bytes   | 132,860 bytes |
//!
//! The `_UR` variants share key sizes with `_FS` but produce larger signatures.
//!
//! ## Linking
//!
//! `picnic-sys` finds libpicnic through `PICNIC_LIB_DIR` or `pkg-config`, and
//! links it statically if `PICNIC_STATIC=1`.

mod error;
mod keypair;
mod params;
mod signature;

/// NIST signed-message encoding.
pub mod nist;

/// NIST KAT (Known Answer Test) support.
pub mod kat;

#[cfg(feature = "python")]
mod python;

// Re-export main types
pub use error::{Error, Result};
pub use keypair::{keygen, sign, validate_keypair, verify, KeyPair, PrivateKey, PublicKey};
pub use nist::{pack_signature, sign_nist, unpack_signature, verify_nist, SignedMessage};
pub use params::Parameters;
pub use signature::Signature;

/// Re-export of the raw FFI bindings for advanced users.
pub mod sys {
    pub use picnic_sys::*;
}
