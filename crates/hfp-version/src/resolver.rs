//! Default-version resolution against the platform configuration store.
//!
//! Resolution is fail-open: an absent store, an unset property, and an
//! unparseable value all land on [`DEFAULT_HFP_VERSION`]. The resolved value
//! is memoized, so the store is consulted at most once per resolver (and at
//! most once per process through [`default_hfp_version`]).

use once_cell::sync::OnceCell;

use hfp_sysprop::{PropertyStore, platform_store};

use crate::version::{DEFAULT_HFP_VERSION, HfpVersion};

/// Platform property consulted for a version override.
pub const VERSION_PROPERTY: &str = "persist.bluetooth.hfp.version";

/// Resolver over an injected store, memoizing its first answer.
///
/// Embedders normally call [`default_hfp_version`] instead; this type exists
/// for tests and for callers that supply their own [`PropertyStore`].
pub struct VersionResolver<'a> {
    store: &'a dyn PropertyStore,
    resolved: OnceCell<HfpVersion>,
}

impl<'a> VersionResolver<'a> {
    /// Build a resolver over `store`. No lookup happens until
    /// [`resolve`](Self::resolve) is first called.
    #[must_use]
    pub const fn new(store: &'a dyn PropertyStore) -> Self {
        Self {
            store,
            resolved: OnceCell::new(),
        }
    }

    /// The default version, querying the store on the first call only.
    ///
    /// Concurrent first calls are safe: the store is consulted at most once
    /// and every caller observes the same value. Later changes to the
    /// underlying property are not observed.
    pub fn resolve(&self) -> HfpVersion {
        *self.resolved.get_or_init(|| self.query())
    }

    fn query(&self) -> HfpVersion {
        match self.store.get_u16(VERSION_PROPERTY) {
            Ok(Some(raw)) => {
                let version = HfpVersion::from_raw(raw);
                tracing::debug!(%version, property = VERSION_PROPERTY, "using version override");
                version
            }
            Ok(None) => DEFAULT_HFP_VERSION,
            Err(error) => {
                tracing::warn!(
                    %error,
                    property = VERSION_PROPERTY,
                    fallback = %DEFAULT_HFP_VERSION,
                    "ignoring unparseable version override"
                );
                DEFAULT_HFP_VERSION
            }
        }
    }
}

/// The HFP version to assume when none has been negotiated.
///
/// Resolved once per process against the platform store and cached for the
/// process lifetime; on targets without a configuration store this is always
/// [`DEFAULT_HFP_VERSION`].
#[must_use]
pub fn default_hfp_version() -> HfpVersion {
    static RESOLVED: OnceCell<HfpVersion> = OnceCell::new();
    *RESOLVED.get_or_init(|| VersionResolver::new(platform_store()).resolve())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use hfp_sysprop::{NullPropertyStore, StaticPropertyStore};

    use super::*;
    use crate::version::HFP_1_9;

    /// Store that counts lookups and can be repointed between reads.
    struct CountingStore {
        value: Mutex<Option<String>>,
        lookups: AtomicUsize,
    }

    impl CountingStore {
        fn new(value: Option<&str>) -> Self {
            Self {
                value: Mutex::new(value.map(str::to_string)),
                lookups: AtomicUsize::new(0),
            }
        }

        fn set(&self, value: &str) {
            *self.value.lock().unwrap() = Some(value.to_string());
        }

        fn lookups(&self) -> usize {
            self.lookups.load(Ordering::SeqCst)
        }
    }

    impl PropertyStore for CountingStore {
        fn get(&self, _name: &str) -> Option<String> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            self.value.lock().unwrap().clone()
        }
    }

    #[test]
    fn missing_store_capability_yields_the_default() {
        let resolver = VersionResolver::new(&NullPropertyStore);
        assert_eq!(resolver.resolve(), DEFAULT_HFP_VERSION);
        assert_eq!(resolver.resolve(), DEFAULT_HFP_VERSION);
    }

    #[test]
    fn unset_property_yields_the_default() {
        let store = StaticPropertyStore::new();
        let resolver = VersionResolver::new(&store);
        assert_eq!(resolver.resolve(), DEFAULT_HFP_VERSION);
    }

    #[test]
    fn valid_override_wins() {
        let store = StaticPropertyStore::new().with(VERSION_PROPERTY, "0x0109");
        let resolver = VersionResolver::new(&store);
        assert_eq!(resolver.resolve(), HFP_1_9);

        let decimal = StaticPropertyStore::new().with(VERSION_PROPERTY, "265");
        let resolver = VersionResolver::new(&decimal);
        assert_eq!(resolver.resolve(), HFP_1_9);
    }

    #[test]
    fn unparseable_override_fails_open() {
        let store = StaticPropertyStore::new().with(VERSION_PROPERTY, "one-point-seven");
        let resolver = VersionResolver::new(&store);
        assert_eq!(resolver.resolve(), DEFAULT_HFP_VERSION);

        let wide = StaticPropertyStore::new().with(VERSION_PROPERTY, "0x10107");
        let resolver = VersionResolver::new(&wide);
        assert_eq!(resolver.resolve(), DEFAULT_HFP_VERSION);
    }

    #[test]
    fn resolution_is_cached_not_re_read() {
        let store = CountingStore::new(Some("0x0108"));
        let resolver = VersionResolver::new(&store);

        let first = resolver.resolve();
        store.set("0x0109");
        let second = resolver.resolve();

        assert_eq!(first, second);
        assert_eq!(store.lookups(), 1);
    }

    #[test]
    fn process_wide_default_is_idempotent() {
        let first = default_hfp_version();
        for _ in 0..16 {
            assert_eq!(default_hfp_version(), first);
        }
    }
}
