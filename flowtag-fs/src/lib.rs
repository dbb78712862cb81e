//! Filesystem abstraction for flowtag.
//!
//! This crate provides:
//! - Filesystem trait for reading inputs and atomically writing reports
//! - RealFilesystem backed by `std::fs`
//! - MockFilesystem for in-memory tests

pub mod filesystem;

pub use filesystem::{temp_path_for, Filesystem, FsError, MockFilesystem, RealFilesystem};
