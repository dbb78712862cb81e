//! IO helpers for CLI operations.
//!
//! Provides utilities for:
//! - Loading the lookup table file
//! - Writing run artifacts (report text, summary.json)

pub mod lookup_loader;
pub mod output_writer;

pub use lookup_loader::{load_lookup_table, LookupLoadError};
pub use output_writer::{OutputWriter, OutputWriterError};
