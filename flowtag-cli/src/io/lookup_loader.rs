//! Lookup table file loader.

use std::path::Path;

use flowtag_core::lookup::{parse_lookup_table_with, LookupError, LookupTable};
use flowtag_fs::{Filesystem, FsError};
use thiserror::Error;

use crate::logger::Logger;

/// Errors from lookup table loading.
#[derive(Debug, Error)]
pub enum LookupLoadError {
    #[error("failed to read lookup table {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: FsError,
    },

    #[error("invalid lookup table {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: LookupError,
    },
}

/// Load a lookup table from a file.
///
/// Duplicate keys are not an error (the later row wins) but are logged at
/// verbose level.
pub fn load_lookup_table<F, L>(fs: &F, path: &Path, logger: &L) -> Result<LookupTable, LookupLoadError>
where
    F: Filesystem,
    L: Logger,
{
    let content = fs.read_file(path).map_err(|e| LookupLoadError::Read {
        path: path.display().to_string(),
        source: e,
    })?;

    let location = path.display();
    let table = parse_lookup_table_with(
        &content,
        Some(|line: usize, msg: &str| {
            logger.warn(&format!("{}:{}: {}", location, line, msg));
        }),
    )
    .map_err(|e| LookupLoadError::Parse {
        path: path.display().to_string(),
        source: e,
    })?;

    logger.verbose(&format!(
        "loaded {} lookup entries from {}",
        table.len(),
        path.display()
    ));

    Ok(table)
}
