//! Line-oriented directive loader.
//!
//! One directive per line.  Blank lines and lines whose first non-space
//! character is `#` are skipped.  Errors report the 1-based line number.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::{CoreError, CoreResult, Directive};

/// Load every directive in the file at `path`, in file order.
pub fn load_directives(path: &Path) -> CoreResult<Vec<Directive>> {
    let file = File::open(path)?;
    load_directives_reader(BufReader::new(file))
}

/// Like [`load_directives`] but accepts any `BufRead` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or reading from stdin.
pub fn load_directives_reader<R: BufRead>(reader: R) -> CoreResult<Vec<Directive>> {
    let mut directives = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let directive = trimmed.parse::<Directive>().map_err(|e| CoreError::Line {
            line:   i + 1,
            source: Box::new(e),
        })?;
        directives.push(directive);
    }
    Ok(directives)
}
