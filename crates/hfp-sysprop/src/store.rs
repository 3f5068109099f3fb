//! The property-store contract and parsing helpers.

use std::collections::HashMap;

use crate::error::PropertyParseError;

/// Read-only, string-keyed view of a platform configuration store.
///
/// Implementations must be safe to share across threads; lookups carry no
/// side effects beyond the read itself.
pub trait PropertyStore: Send + Sync {
    /// Fetch the raw value of `name`, or `None` when it is unset.
    fn get(&self, name: &str) -> Option<String>;

    /// Fetch `name` as a 16-bit unsigned integer.
    ///
    /// Returns `Ok(None)` when the property is unset and an error only when a
    /// value is present but does not parse.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyParseError`] when the stored value is non-numeric or
    /// does not fit 16 bits.
    fn get_u16(&self, name: &str) -> Result<Option<u16>, PropertyParseError> {
        match self.get(name) {
            Some(raw) => parse_u16(name, &raw).map(Some),
            None => Ok(None),
        }
    }
}

/// Parse a property value as a 16-bit unsigned integer.
///
/// Accepts decimal and `0x`-prefixed hexadecimal, the two spellings platform
/// property integers appear in. Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`PropertyParseError::NotAnInteger`] for non-numeric input and
/// [`PropertyParseError::OutOfRange`] for numeric input wider than 16 bits.
pub fn parse_u16(name: &str, raw: &str) -> Result<u16, PropertyParseError> {
    let value = raw.trim();
    let (digits, radix) = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .map_or((value, 10), |hex| (hex, 16));

    u16::from_str_radix(digits, radix).map_err(|_| {
        if u64::from_str_radix(digits, radix).is_ok() {
            PropertyParseError::OutOfRange {
                name: name.to_string(),
                value: raw.to_string(),
            }
        } else {
            PropertyParseError::NotAnInteger {
                name: name.to_string(),
                value: raw.to_string(),
            }
        }
    })
}

/// In-memory store backed by a fixed map.
///
/// Used by tests and tooling that need a store with known contents; the map
/// is immutable once built, matching the read-only contract.
#[derive(Debug, Default, Clone)]
pub struct StaticPropertyStore {
    entries: HashMap<String, String>,
}

impl StaticPropertyStore {
    /// Create an empty store; every lookup misses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property, replacing any previous value for the same name.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(name.into(), value.into());
        self
    }
}

impl PropertyStore for StaticPropertyStore {
    fn get(&self, name: &str) -> Option<String> {
        self.entries.get(name).cloned()
    }
}
