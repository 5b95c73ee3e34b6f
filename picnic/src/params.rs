//! Picnic parameter sets.
//!
//! Picnic comes in twelve instances, grouped by security level (L1, L3, L5)
//! and proof system:
//! - **Picnic (FS/UR)**: ZKB++ with the Fiat-Shamir or Unruh transform
//! - **Picnic3**: KKW with Fiat-Shamir, the smallest signatures
//! - **Picnic full**: ZKB++ over LowMC instances with a full S-box layer
//!
//! Which instances are available depends on how the linked libpicnic was built;
//! see [`Parameters::is_supported`].

use core::fmt;
use core::str::FromStr;

use picnic_sys as ffi;

use crate::{Error, Result};

/// A Picnic parameter set.
///
/// The discriminants are the `picnic_params_t` values of libpicnic, which is also
/// the first byte of every serialized key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(i32)]
pub enum Parameters {
    PicnicL1FS = ffi::Picnic_L1_FS,
    PicnicL1UR = ffi::Picnic_L1_UR,
    PicnicL3FS = ffi::Picnic_L3_FS,
    PicnicL3UR = ffi::Picnic_L3_UR,
    PicnicL5FS = ffi::Picnic_L5_FS,
    PicnicL5UR = ffi::Picnic_L5_UR,
    Picnic3L1 = ffi::Picnic3_L1,
    Picnic3L3 = ffi::Picnic3_L3,
    Picnic3L5 = ffi::Picnic3_L5,
    PicnicL1Full = ffi::Picnic_L1_full,
    PicnicL3Full = ffi::Picnic_L3_full,
    PicnicL5Full = ffi::Picnic_L5_full,
}

impl Parameters {
    /// All parameter sets, in the order of their numeric ids.
    pub const ALL: [Parameters; 12] = [
        Parameters::PicnicL1FS,
        Parameters::PicnicL1UR,
        Parameters::PicnicL3FS,
        Parameters::PicnicL3UR,
        Parameters::PicnicL5FS,
        Parameters::PicnicL5UR,
        Parameters::Picnic3L1,
        Parameters::Picnic3L3,
        Parameters::Picnic3L5,
        Parameters::PicnicL1Full,
        Parameters::PicnicL3Full,
        Parameters::PicnicL5Full,
    ];

    /// Look up a parameter set by its libpicnic id.
    pub fn from_raw(raw: i32) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.to_raw() == raw)
            .ok_or(Error::InvalidParameters)
    }

    /// The libpicnic id of this parameter set.
    #[inline]
    pub const fn to_raw(self) -> ffi::picnic_params_t {
        self as ffi::picnic_params_t
    }

    /// Canonical name, e.g. `"Picnic_L1_FS"`.
    pub const fn name(self) -> &'static str {
        match self {
            Parameters::PicnicL1FS => "Picnic_L1_FS",
            Parameters::PicnicL1UR => "Picnic_L1_UR",
            Parameters::PicnicL3FS => "Picnic_L3_FS",
            Parameters::PicnicL3UR => "Picnic_L3_UR",
            Parameters::PicnicL5FS => "Picnic_L5_FS",
            Parameters::PicnicL5UR => "Picnic_L5_UR",
            Parameters::Picnic3L1 => "Picnic3_L1",
            Parameters::Picnic3L3 => "Picnic3_L3",
            Parameters::Picnic3L5 => "Picnic3_L5",
            Parameters::PicnicL1Full => "Picnic_L1_full",
            Parameters::PicnicL3Full => "Picnic_L3_full",
            Parameters::PicnicL5Full => "Picnic_L5_full",
        }
    }

    /// NIST security level: 1, 3 or 5.
    pub const fn security_level(self) -> u8 {
        match self {
            Parameters::PicnicL1FS
            | Parameters::PicnicL1UR
            | Parameters::Picnic3L1
            | Parameters::PicnicL1Full => 1,
            Parameters::PicnicL3FS
            | Parameters::PicnicL3UR
            | Parameters::Picnic3L3
            | Parameters::PicnicL3Full => 3,
            Parameters::PicnicL5FS
            | Parameters::PicnicL5UR
            | Parameters::Picnic3L5
            | Parameters::PicnicL5Full => 5,
        }
    }

    /// Whether the instance uses the Unruh transform instead of Fiat-Shamir.
    pub const fn is_unruh(self) -> bool {
        matches!(
            self,
            Parameters::PicnicL1UR | Parameters::PicnicL3UR | Parameters::PicnicL5UR
        )
    }

    /// Serialized private key size in bytes.
    #[inline]
    pub const fn private_key_size(self) -> usize {
        ffi::private_key_size(self.to_raw())
    }

    /// Serialized public key size in bytes.
    #[inline]
    pub const fn public_key_size(self) -> usize {
        ffi::public_key_size(self.to_raw())
    }

    /// Maximum signature size in bytes.
    ///
    /// Asks the linked library first and falls back to the size from `picnic.h`
    /// if the library does not know the instance.
    pub fn max_signature_size(self) -> usize {
        match unsafe { ffi::picnic_signature_size(self.to_raw()) } {
            0 => ffi::max_signature_size(self.to_raw()),
            size => size,
        }
    }

    /// Whether the linked libpicnic was built with this parameter set.
    pub fn is_supported(self) -> bool {
        unsafe { ffi::picnic_signature_size(self.to_raw()) != 0 }
    }

    /// All parameter sets supported by the linked libpicnic.
    pub fn supported() -> impl Iterator<Item = Parameters> {
        Self::ALL.into_iter().filter(|p| p.is_supported())
    }

    /// Error out early for parameter sets the library cannot handle.
    pub(crate) fn ensure_supported(self) -> Result<()> {
        if self.is_supported() {
            Ok(())
        } else {
            tracing::warn!(parameters = self.name(), "parameter set not supported by libpicnic");
            Err(Error::UnsupportedParameters)
        }
    }
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Parameters {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.name() == s)
            .ok_or(Error::InvalidParameters)
    }
}

impl TryFrom<i32> for Parameters {
    type Error = Error;

    #[inline]
    fn try_from(raw: i32) -> Result<Self> {
        Self::from_raw(raw)
    }
}

impl From<Parameters> for i32 {
    #[inline]
    fn from(params: Parameters) -> i32 {
        params.to_raw()
    }
}
