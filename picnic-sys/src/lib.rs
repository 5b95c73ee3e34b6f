//! Raw FFI bindings to the Picnic post-quantum signature library.
//!
//! This crate provides unsafe, low-level bindings to `picnic.h` (libpicnic 3.x).
//! Users should prefer the safe `picnic` crate wrapper.

#![no_std]
#![allow(non_camel_case_types, non_upper_case_globals)]

use core::ffi::{c_char, c_int};

// ============================================================================
// Parameter sets
// ============================================================================

/// Parameter set identifier (`picnic_params_t` in C).
pub type picnic_params_t = c_int;

pub const PARAMETER_SET_INVALID: picnic_params_t = 0;
/// LowMC 128/128/20 with ZKB++ and Fiat-Shamir
pub const Picnic_L1_FS: picnic_params_t = 1;
/// LowMC 128/128/20 with ZKB++ and Unruh
pub const Picnic_L1_UR: picnic_params_t = 2;
/// LowMC 192/192/30 with ZKB++ and Fiat-Shamir
pub const Picnic_L3_FS: picnic_params_t = 3;
/// LowMC 192/192/30 with ZKB++ and Unruh
pub const Picnic_L3_UR: picnic_params_t = 4;
/// LowMC 256/256/38 with ZKB++ and Fiat-Shamir
pub const Picnic_L5_FS: picnic_params_t = 5;
/// LowMC 256/256/38 with ZKB++ and Unruh
pub const Picnic_L5_UR: picnic_params_t = 6;
/// LowMC 129/129/4 with KKW and Fiat-Shamir
pub const Picnic3_L1: picnic_params_t = 7;
/// LowMC 192/192/4 with KKW and Fiat-Shamir
pub const Picnic3_L3: picnic_params_t = 8;
/// LowMC 255/255/4 with KKW and Fiat-Shamir
pub const Picnic3_L5: picnic_params_t = 9;
/// LowMC 129/129/4 (full S-box layer) with ZKB++ and Fiat-Shamir
pub const Picnic_L1_full: picnic_params_t = 10;
/// LowMC 192/192/4 (full S-box layer) with ZKB++ and Fiat-Shamir
pub const Picnic_L3_full: picnic_params_t = 11;
/// LowMC 255/255/4 (full S-box layer) with ZKB++ and Fiat-Shamir
pub const Picnic_L5_full: picnic_params_t = 12;
pub const PARAMETER_SET_MAX_INDEX: picnic_params_t = 13;

// ============================================================================
// Size constants (const fn equivalents of the C macros)
// ============================================================================

/// Largest LowMC block size in bytes over all parameter sets.
pub const PICNIC_MAX_LOWMC_BLOCK_SIZE: usize = 32;
/// Size of the public key storage in `picnic_publickey_t`.
pub const PICNIC_MAX_PUBLICKEY_SIZE: usize = 2 * PICNIC_MAX_LOWMC_BLOCK_SIZE + 1;
/// Size of the private key storage in `picnic_privatekey_t`.
pub const PICNIC_MAX_PRIVATEKEY_SIZE: usize = 3 * PICNIC_MAX_LOWMC_BLOCK_SIZE + 1;

pub const PICNIC_SIGNATURE_SIZE_Picnic_L1_FS: usize = 34036;
pub const PICNIC_SIGNATURE_SIZE_Picnic_L1_UR: usize = 53965;
pub const PICNIC_SIGNATURE_SIZE_Picnic_L3_FS: usize = 76776;
pub const PICNIC_SIGNATURE_SIZE_Picnic_L3_UR: usize = 121849;
pub const PICNIC_SIGNATURE_SIZE_Picnic_L5_FS: usize = 132860;
pub const PICNIC_SIGNATURE_SIZE_Picnic_L5_UR: usize = 209510;
pub const PICNIC_SIGNATURE_SIZE_Picnic3_L1: usize = 14612;
pub const PICNIC_SIGNATURE_SIZE_Picnic3_L3: usize = 35028;
pub const PICNIC_SIGNATURE_SIZE_Picnic3_L5: usize = 61028;
pub const PICNIC_SIGNATURE_SIZE_Picnic_L1_full: usize = 32061;
pub const PICNIC_SIGNATURE_SIZE_Picnic_L3_full: usize = 71179;
pub const PICNIC_SIGNATURE_SIZE_Picnic_L5_full: usize = 126286;

/// LowMC block size in bytes for a parameter set, 0 for unknown ids.
#[inline]
pub const fn lowmc_block_size(param: picnic_params_t) -> usize {
    match param {
        Picnic_L1_FS | Picnic_L1_UR => 16,
        Picnic3_L1 | Picnic_L1_full => 17,
        Picnic_L3_FS | Picnic_L3_UR | Picnic3_L3 | Picnic_L3_full => 24,
        Picnic_L5_FS | Picnic_L5_UR | Picnic3_L5 | Picnic_L5_full => 32,
        _ => 0,
    }
}

/// Serialized private key size: parameter byte, secret key, ciphertext and plaintext.
#[inline]
pub const fn private_key_size(param: picnic_params_t) -> usize {
    match lowmc_block_size(param) {
        0 => 0,
        block => 1 + 3 * block,
    }
}

/// Serialized public key size: parameter byte, ciphertext and plaintext.
#[inline]
pub const fn public_key_size(param: picnic_params_t) -> usize {
    match lowmc_block_size(param) {
        0 => 0,
        block => 1 + 2 * block,
    }
}

/// Maximum signature size for a parameter set, 0 for unknown ids.
#[inline]
pub const fn max_signature_size(param: picnic_params_t) -> usize {
    match param {
        Picnic_L1_FS => PICNIC_SIGNATURE_SIZE_Picnic_L1_FS,
        Picnic_L1_UR => PICNIC_SIGNATURE_SIZE_Picnic_L1_UR,
        Picnic_L3_FS => PICNIC_SIGNATURE_SIZE_Picnic_L3_FS,
        Picnic_L3_UR => PICNIC_SIGNATURE_SIZE_Picnic_L3_UR,
        Picnic_L5_FS => PICNIC_SIGNATURE_SIZE_Picnic_L5_FS,
        Picnic_L5_UR => PICNIC_SIGNATURE_SIZE_Picnic_L5_UR,
        Picnic3_L1 => PICNIC_SIGNATURE_SIZE_Picnic3_L1,
        Picnic3_L3 => PICNIC_SIGNATURE_SIZE_Picnic3_L3,
        Picnic3_L5 => PICNIC_SIGNATURE_SIZE_Picnic3_L5,
        Picnic_L1_full => PICNIC_SIGNATURE_SIZE_Picnic_L1_full,
        Picnic_L3_full => PICNIC_SIGNATURE_SIZE_Picnic_L3_full,
        Picnic_L5_full => PICNIC_SIGNATURE_SIZE_Picnic_L5_full,
        _ => 0,
    }
}

// ============================================================================
// Types
// ============================================================================

/// Public key. Opaque structure, the first byte holds the parameter set.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct picnic_publickey_t {
    pub data: [u8; PICNIC_MAX_PUBLICKEY_SIZE],
}

impl Default for picnic_publickey_t {
    fn default() -> Self {
        Self {
            data: [0u8; PICNIC_MAX_PUBLICKEY_SIZE],
        }
    }
}

/// Private key. Opaque structure, the first byte holds the parameter set.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct picnic_privatekey_t {
    pub data: [u8; PICNIC_MAX_PRIVATEKEY_SIZE],
}

impl Default for picnic_privatekey_t {
    fn default() -> Self {
        Self {
            data: [0u8; PICNIC_MAX_PRIVATEKEY_SIZE],
        }
    }
}

// ============================================================================
// FFI Functions
// ============================================================================

extern "C" {
    /// Get a NUL-terminated name for a parameter set. Never returns NULL.
    pub fn picnic_get_param_name(parameters: picnic_params_t) -> *const c_char;

    /// Generate a key pair for the given parameter set.
    ///
    /// Randomness is drawn from the library's own system RNG.
    ///
    /// # Returns
    /// 0 on success, -1 on failure (unsupported parameter set or RNG failure).
    pub fn picnic_keygen(
        parameters: picnic_params_t,
        pk: *mut picnic_publickey_t,
        sk: *mut picnic_privatekey_t,
    ) -> c_int;

    /// Sign a message.
    ///
    /// # Arguments
    /// * `sk` - Private key
    /// * `message` - Message to sign
    /// * `message_len` - Length of the message
    /// * `signature` - Buffer for the signature
    /// * `signature_len` - In: size of the buffer, out: length of the signature
    ///
    /// # Returns
    /// 0 on success, -1 on failure.
    pub fn picnic_sign(
        sk: *const picnic_privatekey_t,
        message: *const u8,
        message_len: usize,
        signature: *mut u8,
        signature_len: *mut usize,
    ) -> c_int;

    /// Maximum signature size for a parameter set.
    ///
    /// Returns 0 if the parameter set is invalid or not compiled into the library.
    pub fn picnic_signature_size(parameters: picnic_params_t) -> usize;

    /// Serialize a public key. Returns the number of bytes written or -1.
    pub fn picnic_write_public_key(
        key: *const picnic_publickey_t,
        buf: *mut u8,
        buflen: usize,
    ) -> c_int;

    /// Deserialize a public key. Returns 0 on success, -1 on failure.
    pub fn picnic_read_public_key(
        key: *mut picnic_publickey_t,
        buf: *const u8,
        buflen: usize,
    ) -> c_int;

    /// Check that a private key and a public key belong together.
    ///
    /// Returns 0 if the key pair is valid, -1 otherwise.
    pub fn picnic_validate_keypair(
        privatekey: *const picnic_privatekey_t,
        publickey: *const picnic_publickey_t,
    ) -> c_int;

    /// Clear the private key material.
    pub fn picnic_clear_private_key(key: *mut picnic_privatekey_t);

    /// Recompute the public key from the private key.
    ///
    /// Returns 0 on success, -1 on failure.
    pub fn picnic_sk_to_pk(
        privatekey: *const picnic_privatekey_t,
        publickey: *mut picnic_publickey_t,
    ) -> c_int;

    /// Serialize a private key. Returns the number of bytes written or -1.
    pub fn picnic_write_private_key(
        key: *const picnic_privatekey_t,
        buf: *mut u8,
        buflen: usize,
    ) -> c_int;

    /// Deserialize a private key. Returns 0 on success, -1 on failure.
    pub fn picnic_read_private_key(
        key: *mut picnic_privatekey_t,
        buf: *const u8,
        buflen: usize,
    ) -> c_int;

    /// Verify a signature.
    ///
    /// Returns 0 if the signature is valid, -1 otherwise.
    pub fn picnic_verify(
        pk: *const picnic_publickey_t,
        message: *const u8,
        message_len: usize,
        signature: *const u8,
        signature_len: usize,
    ) -> c_int;

    /// Parameter set of a private key, `PARAMETER_SET_INVALID` if unknown.
    pub fn picnic_get_private_key_param(privatekey: *const picnic_privatekey_t) -> picnic_params_t;

    /// Parameter set of a public key, `PARAMETER_SET_INVALID` if unknown.
    pub fn picnic_get_public_key_param(publickey: *const picnic_publickey_t) -> picnic_params_t;
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_sizes_l1() {
        assert_eq!(private_key_size(Picnic_L1_FS), 49);
        assert_eq!(public_key_size(Picnic_L1_FS), 33);
        assert_eq!(private_key_size(Picnic_L1_UR), 49);
        assert_eq!(private_key_size(Picnic3_L1), 52);
        assert_eq!(public_key_size(Picnic_L1_full), 35);
    }

    #[test]
    fn test_key_sizes_l3_l5() {
        assert_eq!(private_key_size(Picnic_L3_FS), 73);
        assert_eq!(public_key_size(Picnic3_L3), 49);
        assert_eq!(private_key_size(Picnic_L5_full), PICNIC_MAX_PRIVATEKEY_SIZE);
        assert_eq!(public_key_size(Picnic_L5_UR), PICNIC_MAX_PUBLICKEY_SIZE);
    }

    #[test]
    fn test_invalid_ids_have_no_sizes() {
        for param in [PARAMETER_SET_INVALID, PARAMETER_SET_MAX_INDEX, -1] {
            assert_eq!(private_key_size(param), 0);
            assert_eq!(public_key_size(param), 0);
            assert_eq!(max_signature_size(param), 0);
        }
    }

    #[test]
    fn test_unruh_signatures_are_larger() {
        assert!(max_signature_size(Picnic_L1_UR) > max_signature_size(Picnic_L1_FS));
        assert!(max_signature_size(Picnic_L3_UR) > max_signature_size(Picnic_L3_FS));
        assert!(max_signature_size(Picnic_L5_UR) > max_signature_size(Picnic_L5_FS));
    }
}
