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

//! Logging setup shared by scenario producers and test harnesses.
//!
//! Layout: `init.rs` (subscriber installation and logging configuration).

pub mod init;

pub use init::{
    DEFAULT_LOG_LEVEL, LOG_FORMAT_ENV, LOG_LEVEL_ENV, LogFormat, LoggingConfig, init_logging,
    init_test_logging,
};
