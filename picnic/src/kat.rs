//! NIST KAT (Known Answer Test) support for Picnic.
//!
//! Picnic derives all signing randomness from the private key and the message,
//! so the signatures in the NIST response files can be reproduced byte for byte
//! from `sk` and `msg` alone; the DRBG `seed` is only kept for completeness.

use crate::nist::{pack_signature, unpack_signature};
use crate::{Error, Parameters, PrivateKey, PublicKey, Result};

/// A parsed KAT test vector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KatVector {
    pub count: usize,
    pub seed: Vec<u8>,
    pub mlen: usize,
    pub msg: Vec<u8>,
    pub pk: Vec<u8>,
    pub sk: Vec<u8>,
    pub smlen: usize,
    pub sm: Vec<u8>,
}

impl KatVector {
    /// Reproduce this vector with the linked libpicnic.
    ///
    /// Signs `msg` with `sk`, compares against the signature embedded in `sm`,
    /// verifies that signature with `pk`, and re-packs it into `sm`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidKey`] or [`Error::InvalidFormat`] for unusable inputs,
    /// [`Error::KatMismatch`] if any output differs.
    pub fn check(&self) -> Result<()> {
        let mismatch = Error::KatMismatch(self.count);

        let sk = PrivateKey::from_bytes(&self.sk)?;
        let pk = PublicKey::from_bytes(&self.pk)?;

        let (msg, expected_sig) = unpack_signature(&self.sm)?;
        if msg != self.msg.as_slice() || self.sm.len() != self.smlen {
            tracing::warn!(count = self.count, "signed message does not match msg/smlen");
            return Err(mismatch);
        }

        let sig = sk.sign(&self.msg)?;
        if sig.as_bytes() != expected_sig {
            tracing::warn!(
                count = self.count,
                expected_len = expected_sig.len(),
                actual_len = sig.len(),
                "signature mismatch"
            );
            return Err(mismatch);
        }

        if !pk.verify(&self.msg, &sig)? {
            tracing::warn!(count = self.count, "signature from KAT does not verify");
            return Err(mismatch);
        }

        if pack_signature(&self.msg, sig.as_bytes()) != self.sm {
            return Err(mismatch);
        }

        Ok(())
    }
}

/// Parse a KAT response file.
///
/// Lines have the form `name = value`. `count` opens a new vector, the `*len`
/// fields are decimal, all other fields are hex. A vector is complete once its
/// `sm` line has been read; trailing incomplete vectors are dropped.
///
/// # Errors
///
/// [`Error::InvalidFormat`] on malformed numbers or hex.
pub fn parse_kat(content: &str) -> Result<Vec<KatVector>> {
    let mut vectors = Vec::new();
    let mut current: Option<KatVector> = None;

    for line in content.lines() {
        let line = line.trim();

        if line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once(" = ") else {
            continue;
        };
        let (key, value) = (key.trim(), value.trim());

        if key == "count" {
            current = Some(KatVector {
                count: value.parse().map_err(|_| Error::InvalidFormat)?,
                ..KatVector::default()
            });
            continue;
        }

        let Some(v) = current.as_mut() else {
            continue;
        };

        match key {
            "mlen" => v.mlen = parse_len(value)?,
            "smlen" => v.smlen = parse_len(value)?,
            "seed" => v.seed = parse_hex(value)?,
            "msg" => v.msg = parse_hex(value)?,
            "pk" => v.pk = parse_hex(value)?,
            "sk" => v.sk = parse_hex(value)?,
            "sm" => {
                v.sm = parse_hex(value)?;
                vectors.extend(current.take());
            }
            _ => {}
        }
    }

    Ok(vectors)
}

fn parse_len(value: &str) -> Result<usize> {
    value.parse().map_err(|_| Error::InvalidFormat)
}

fn parse_hex(value: &str) -> Result<Vec<u8>> {
    hex::decode(value).map_err(|_| Error::InvalidFormat)
}

/// Conventional file name of the KAT responses for a parameter set.
pub const fn kat_file_name(params: Parameters) -> &'static str {
    match params {
        Parameters::PicnicL1FS => "kat_l1_fs.txt",
        Parameters::PicnicL1UR => "kat_l1_ur.txt",
        Parameters::PicnicL3FS => "kat_l3_fs.txt",
        Parameters::PicnicL3UR => "kat_l3_ur.txt",
        Parameters::PicnicL5FS => "kat_l5_fs.txt",
        Parameters::PicnicL5UR => "kat_l5_ur.txt",
        Parameters::Picnic3L1 => "kat_picnic3_l1.txt",
        Parameters::Picnic3L3 => "kat_picnic3_l3.txt",
        Parameters::Picnic3L5 => "kat_picnic3_l5.txt",
        Parameters::PicnicL1Full => "kat_l1_full.txt",
        Parameters::PicnicL3Full => "kat_l3_full.txt",
        Parameters::PicnicL5Full => "kat_l5_full.txt",
    }
}
