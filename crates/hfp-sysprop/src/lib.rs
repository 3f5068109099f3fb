#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Read-only access to the platform configuration store.
//!
//! Layout: `store.rs` (the [`PropertyStore`] trait, typed getters, and the
//! in-memory test store), `platform.rs` (per-platform implementations and the
//! one-time strategy selection behind [`platform_store`]).

pub mod error;
pub mod platform;
pub mod store;

pub use error::PropertyParseError;
#[cfg(target_os = "android")]
pub use platform::AndroidPropertyStore;
pub use platform::{NullPropertyStore, platform_store};
pub use store::{PropertyStore, StaticPropertyStore, parse_u16};
