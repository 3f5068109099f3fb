//! The 16-bit HFP version encoding and the published revisions.
//!
//! # Design
//! - Carry the SDP-record encoding (`major << 8 | minor`) rather than a
//!   string, so comparisons and wire use stay trivial.
//! - Centralize the revision constants so the resolver and tooling agree on
//!   the fallback value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A Hands-Free Profile revision in its 16-bit SDP encoding.
///
/// The high byte is the major revision, the low byte the minor, so "1.7" is
/// `0x0107`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct HfpVersion(u16);

/// HFP 1.1.
pub const HFP_1_1: HfpVersion = HfpVersion::from_raw(0x0101);
/// HFP 1.5.
pub const HFP_1_5: HfpVersion = HfpVersion::from_raw(0x0105);
/// HFP 1.6.
pub const HFP_1_6: HfpVersion = HfpVersion::from_raw(0x0106);
/// HFP 1.7.
pub const HFP_1_7: HfpVersion = HfpVersion::from_raw(0x0107);
/// HFP 1.8.
pub const HFP_1_8: HfpVersion = HfpVersion::from_raw(0x0108);
/// HFP 1.9.
pub const HFP_1_9: HfpVersion = HfpVersion::from_raw(0x0109);

/// Revision assumed when the platform supplies no override.
pub const DEFAULT_HFP_VERSION: HfpVersion = HFP_1_7;

impl HfpVersion {
    /// Wrap a raw 16-bit encoding.
    ///
    /// Overrides are honored as written, so no plausibility check is applied
    /// here; a value that reaches this point is taken at face value.
    #[must_use]
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// The raw 16-bit encoding.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Major revision (high byte).
    #[must_use]
    pub const fn major(self) -> u8 {
        self.0.to_be_bytes()[0]
    }

    /// Minor revision (low byte).
    #[must_use]
    pub const fn minor(self) -> u8 {
        self.0.to_be_bytes()[1]
    }
}

impl From<u16> for HfpVersion {
    fn from(raw: u16) -> Self {
        Self::from_raw(raw)
    }
}

impl fmt::Display for HfpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major(), self.minor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_splits_into_major_and_minor() {
        assert_eq!(HFP_1_7.major(), 1);
        assert_eq!(HFP_1_7.minor(), 7);
        assert_eq!(HFP_1_7.raw(), 0x0107);
    }

    #[test]
    fn display_matches_the_published_spelling() {
        assert_eq!(HFP_1_5.to_string(), "1.5");
        assert_eq!(HFP_1_9.to_string(), "1.9");
        assert_eq!(DEFAULT_HFP_VERSION.to_string(), "1.7");
    }

    #[test]
    fn revisions_order_by_encoding() {
        assert!(HFP_1_1 < HFP_1_5);
        assert!(HFP_1_8 < HFP_1_9);
        assert_eq!(HfpVersion::from(0x0107), HFP_1_7);
    }

    #[test]
    fn serializes_as_the_raw_integer() {
        let json = serde_json::to_string(&HFP_1_7).unwrap();
        assert_eq!(json, "263");
        let back: HfpVersion = serde_json::from_str(&json).unwrap();
        assert_eq!(back, HFP_1_7);
    }
}
