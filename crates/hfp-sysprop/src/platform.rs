//! Per-platform store implementations and one-time strategy selection.
//!
//! # Design
//! - Callers never touch `cfg` directly; [`platform_store`] hands out the one
//!   implementation the current target supports.
//! - Selection happens once per process and always yields the same instance.

use std::sync::OnceLock;

use crate::store::PropertyStore;

/// Store for targets without a platform configuration store.
///
/// Every lookup misses, so typed getters report "unset" rather than failing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPropertyStore;

impl PropertyStore for NullPropertyStore {
    fn get(&self, _name: &str) -> Option<String> {
        None
    }
}

/// Store backed by the Android system-property area.
#[cfg(target_os = "android")]
pub struct AndroidPropertyStore {
    properties: android_system_properties::AndroidSystemProperties,
}

#[cfg(target_os = "android")]
impl AndroidPropertyStore {
    /// Connect to the system-property area.
    #[must_use]
    pub fn new() -> Self {
        Self {
            properties: android_system_properties::AndroidSystemProperties::new(),
        }
    }
}

#[cfg(target_os = "android")]
impl Default for AndroidPropertyStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_os = "android")]
impl PropertyStore for AndroidPropertyStore {
    fn get(&self, name: &str) -> Option<String> {
        // Android returns empty strings for unset properties.
        self.properties.get(name).filter(|value| !value.is_empty())
    }
}

/// The configuration store for the current target, selected once.
///
/// Android targets query the real system-property area; everything else gets
/// [`NullPropertyStore`], so lookups uniformly report "unset".
#[must_use]
pub fn platform_store() -> &'static dyn PropertyStore {
    #[cfg(target_os = "android")]
    {
        static STORE: OnceLock<AndroidPropertyStore> = OnceLock::new();
        STORE.get_or_init(|| {
            tracing::debug!(store = "android", "selected platform property store");
            AndroidPropertyStore::new()
        })
    }

    #[cfg(not(target_os = "android"))]
    {
        static STORE: OnceLock<NullPropertyStore> = OnceLock::new();
        STORE.get_or_init(|| {
            tracing::debug!(store = "null", "platform has no property store");
            NullPropertyStore
        })
    }
}
