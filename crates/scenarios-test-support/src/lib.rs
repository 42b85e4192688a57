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

//! Shared test helpers used across integration suites.
//! Layout: fixtures.rs (player/stage case sources), assert.rs (label assertions).

pub mod assert;
pub mod fixtures;

/// Install the shared test subscriber so `tracing` output is captured per test.
pub fn init_tracing() {
    scenarios_telemetry::init_test_logging();
}
