//! Integration tests for the Picnic bindings.
//!
//! ## Test Categories
//!
//! ### Parameter set tests (run by default)
//!
//! One module per parameter set covering key generation, sign/verify, and key
//! serialization. Parameter sets the linked libpicnic was built without are
//! skipped.
//!
//! ### NIST KAT tests (ignored by default)
//!
//! The `kat_*` tests reproduce the NIST known answer tests byte for byte. They
//! need the `kat_*.txt` response files shipped with libpicnic, looked up in
//! `$PICNIC_KAT_DIR` or `tests/kat/`.
//!
//! Run with `cargo test -- --ignored` to execute these tests.

use std::path::PathBuf;

use picnic::kat::{kat_file_name, parse_kat};
use picnic::{
    keygen, pack_signature, sign, unpack_signature, validate_keypair, verify, verify_nist,
    Error, Parameters, PrivateKey, PublicKey,
};

const MSG: &[u8] = b"a message to sign";
const MSG2: &[u8] = b"a message to verify";

fn check_keygen(params: Parameters) {
    let (sk, pk) = keygen(params).unwrap();
    assert_eq!(pk.parameters(), params);
    assert_eq!(sk.parameters(), params);
    assert!(validate_keypair(&sk, &pk));
    assert_eq!(sk.public_key().unwrap(), pk);
}

fn check_sign_and_verify(params: Parameters) {
    let (sk, pk) = keygen(params).unwrap();
    let sig = sign(&sk, MSG).unwrap();
    assert!(!sig.is_empty());
    assert!(verify(&pk, MSG, &sig).unwrap());
}

fn check_verify_wrong_msg(params: Parameters) {
    let (sk, pk) = keygen(params).unwrap();
    let sig = sign(&sk, MSG).unwrap();
    assert!(!verify(&pk, MSG2, &sig).unwrap());
}

fn check_key_serialization(params: Parameters) {
    let (sk, pk) = keygen(params).unwrap();
    let pk2 = PublicKey::from_bytes(&pk.to_bytes().unwrap()).unwrap();
    let sk2 = PrivateKey::from_bytes(&sk.to_bytes().unwrap()).unwrap();
    assert_eq!(pk, pk2);
    assert_eq!(sk, sk2);
    assert!(validate_keypair(&sk, &pk2));
    assert!(validate_keypair(&sk2, &pk));

    let sig = sign(&sk, MSG).unwrap();
    assert!(verify(&pk2, MSG, &sig).unwrap());
    let sig = sign(&sk2, MSG).unwrap();
    assert!(verify(&pk, MSG, &sig).unwrap());
}

fn check_truncated_signature(params: Parameters) {
    let (sk, pk) = keygen(params).unwrap();
    let sig = sign(&sk, MSG).unwrap();
    let truncated = &sig.as_bytes()[..sig.len() / 2];
    assert!(!verify(&pk, MSG, truncated).unwrap());
}

fn check_nist_encoding(params: Parameters) {
    let (sk, pk) = keygen(params).unwrap();
    let sig = sign(&sk, MSG).unwrap();

    let sm = pack_signature(MSG, sig.as_bytes());
    assert_eq!(sm.len(), 4 + MSG.len() + sig.len());
    assert_eq!(&sm[..4], &(sig.len() as u32).to_le_bytes());

    let (msg, sig2) = unpack_signature(&sm).unwrap();
    assert_eq!(msg, MSG);
    assert_eq!(sig2, sig.as_bytes());
    assert_eq!(verify_nist(&pk, &sm).unwrap(), Some(MSG));
}

macro_rules! parameter_set_tests {
    ($name:ident, $params:expr) => {
        mod $name {
            use super::*;

            fn params() -> Option<Parameters> {
                let params = $params;
                if params.is_supported() {
                    Some(params)
                } else {
                    eprintln!("{} not supported, skipping", params);
                    None
                }
            }

            #[test]
            fn keygen() {
                if let Some(params) = params() {
                    check_keygen(params);
                }
            }

            #[test]
            fn sign_and_verify() {
                if let Some(params) = params() {
                    check_sign_and_verify(params);
                }
            }

            #[test]
            fn verify_wrong_msg() {
                if let Some(params) = params() {
                    check_verify_wrong_msg(params);
                }
            }

            #[test]
            fn key_serialization() {
                if let Some(params) = params() {
                    check_key_serialization(params);
                }
            }

            #[test]
            fn truncated_signature() {
                if let Some(params) = params() {
                    check_truncated_signature(params);
                }
            }

            #[test]
            fn nist_encoding() {
                if let Some(params) = params() {
                    check_nist_encoding(params);
                }
            }
        }
    };
}

parameter_set_tests!(picnic_l1_fs, Parameters::PicnicL1FS);
parameter_set_tests!(picnic_l1_ur, Parameters::PicnicL1UR);
parameter_set_tests!(picnic_l1_full, Parameters::PicnicL1Full);
parameter_set_tests!(picnic_l3_fs, Parameters::PicnicL3FS);
parameter_set_tests!(picnic_l3_ur, Parameters::PicnicL3UR);
parameter_set_tests!(picnic_l3_full, Parameters::PicnicL3Full);
parameter_set_tests!(picnic_l5_fs, Parameters::PicnicL5FS);
parameter_set_tests!(picnic_l5_ur, Parameters::PicnicL5UR);
parameter_set_tests!(picnic_l5_full, Parameters::PicnicL5Full);
parameter_set_tests!(picnic3_l1, Parameters::Picnic3L1);
parameter_set_tests!(picnic3_l3, Parameters::Picnic3L3);
parameter_set_tests!(picnic3_l5, Parameters::Picnic3L5);

#[test]
fn test_keys_from_other_parameter_sets_do_not_validate() {
    let supported: Vec<_> = Parameters::supported().collect();
    for pair in supported.windows(2) {
        let (sk, _) = keygen(pair[0]).unwrap();
        let (_, pk) = keygen(pair[1]).unwrap();
        assert!(!validate_keypair(&sk, &pk));
    }
}

#[test]
fn test_malformed_nist_message() {
    let Some(params) = Parameters::supported().next() else { return };
    let (_, pk) = keygen(params).unwrap();

    assert_eq!(verify_nist(&pk, &[0x01, 0x02]), Err(Error::InvalidFormat));
    assert_eq!(
        verify_nist(&pk, &[0x10, 0x00, 0x00, 0x00, 0xAA]),
        Err(Error::InvalidFormat)
    );
}

// ============================================================================
// NIST KAT files
// ============================================================================

fn kat_path(params: Parameters) -> PathBuf {
    let dir = std::env::var_os("PICNIC_KAT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/kat")));
    dir.join(kat_file_name(params))
}

fn run_kat(params: Parameters) {
    if !params.is_supported() {
        eprintln!("{} not supported, skipping", params);
        return;
    }

    let path = kat_path(params);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));

    let vectors = parse_kat(&content).expect("Malformed KAT file");
    assert!(!vectors.is_empty(), "No test vectors in {}", path.display());

    let mut passed = 0;
    let mut failed = Vec::new();

    for vector in &vectors {
        match vector.check() {
            Ok(()) => passed += 1,
            Err(e) => failed.push((vector.count, e)),
        }
    }

    eprintln!("{}: passed {}/{}", params, passed, vectors.len());

    if !failed.is_empty() {
        for (count, err) in &failed {
            eprintln!("  [{}]: {}", count, err);
        }
        panic!("{} KAT tests failed for {}", failed.len(), params);
    }
}

macro_rules! kat_tests {
    ($($name:ident => $params:expr),* $(,)?) => {
        $(
            #[test]
            #[ignore]
            fn $name() {
                run_kat($params);
            }
        )*
    };
}

kat_tests! {
    kat_l1_fs => Parameters::PicnicL1FS,
    kat_l1_ur => Parameters::PicnicL1UR,
    kat_l1_full => Parameters::PicnicL1Full,
    kat_l3_fs => Parameters::PicnicL3FS,
    kat_l3_ur => Parameters::PicnicL3UR,
    kat_l3_full => Parameters::PicnicL3Full,
    kat_l5_fs => Parameters::PicnicL5FS,
    kat_l5_ur => Parameters::PicnicL5UR,
    kat_l5_full => Parameters::PicnicL5Full,
    kat_picnic3_l1 => Parameters::Picnic3L1,
    kat_picnic3_l3 => Parameters::Picnic3L3,
    kat_picnic3_l5 => Parameters::Picnic3L5,
}
