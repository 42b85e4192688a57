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

//! Runner-agnostic case tables built from labeled values.
//!
//! Parameterized-test adapters receive a sequence of
//! [`LabeledValue`](scenarios::LabeledValue)s and need named rows. This crate
//! performs that mapping once: each row carries the value's display name and
//! its data, collisions between names are handled per [`CaseConfig`], and the
//! table can be emitted as JSON for runners that read external data sources.
//!
//! Layout: `config.rs` (table policies and their sources), `error.rs`
//! (`CaseError`), `table.rs` (`CaseRow`/`CaseTable`).

pub mod config;
pub mod error;
pub mod table;

pub use config::{ALLOW_EMPTY_LABELS_ENV, CaseConfig, DUPLICATES_ENV, DuplicatePolicy};
pub use error::{CaseError, CaseResult};
pub use table::{CaseRow, CaseTable};
