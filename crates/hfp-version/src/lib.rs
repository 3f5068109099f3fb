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

//! Hands-Free Profile version model and the default-version resolver.
//!
//! Session negotiation needs a version to assume before (or absent) explicit
//! negotiation. [`default_hfp_version`] answers that: an optional platform
//! property override wins, a compiled-in revision is the fallback, and the
//! answer is fixed for the process lifetime after the first call.

pub mod resolver;
pub mod version;

pub use resolver::{VERSION_PROPERTY, VersionResolver, default_hfp_version};
pub use version::{
    DEFAULT_HFP_VERSION, HFP_1_1, HFP_1_5, HFP_1_6, HFP_1_7, HFP_1_8, HFP_1_9, HfpVersion,
};
