//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources:
//! - Logger (with plain or JSON formatting)
//! - Public Suffix List extractor
//!
//! Initialization is an explicit step performed once per run; the resulting
//! instances are passed to the driver rather than living in global state.

mod logger;

// Re-export public API
pub use logger::init_logger_with;

/// Initializes the Public Suffix List extractor.
///
/// Creates a new `psl::List` instance for resolving registrable domains.
/// The suffix dataset is bundled into the `psl` crate at compile time, so
/// this cannot fail at runtime and needs no network access.
///
/// # Returns
///
/// A `psl::List` to be passed to the driver for domain resolution.
pub fn init_extractor() -> psl::List {
    psl::List
}
