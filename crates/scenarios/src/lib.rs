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
#![allow(clippy::module_name_repetitions)]

//! Labeled test-case values for parameterized tests.
//!
//! A [`LabeledValue`] pairs arbitrary case data with a label so that a test
//! runner shows `"only invalid skus"` instead of an opaque dump of the data.
//! Values without an explicit label fall back to the string form of their data
//! (see [`Describe`]), and keep tracking the data through transformations.
//!
//! Layout: `describe.rs` (string form of data), `label.rs` (label modes),
//! `labeled.rs` (`LabeledValue`), `wrap.rs` (construction helpers),
//! `combine.rs` (pairing helpers).

pub mod combine;
pub mod describe;
pub mod label;
pub mod labeled;
pub mod wrap;

pub use combine::{ZipCombined, combine, zip_combined};
pub use describe::Describe;
pub use label::LabelMode;
pub use labeled::LabeledValue;
pub use wrap::{AsLabeled, LabelAll, WrapAll, try_wrap_with, wrap, wrap_all, wrap_labeled, wrap_with};
