//! JSON array output.
//!
//! The whole array is serialized in one pass with two-space indentation:
//!
//! ```text
//! [
//!   {
//!     "level": "1",
//!     ...
//!   },
//!   {
//!     ...
//!   }
//! ]
//! ```

use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::OUTPUT_EXTENSION;
use crate::error::{OutputError, OutputResult};

/// Output path for an input file: the last extension is replaced with `.json`.
///
/// `spells/Wizard1.csv` → `spells/Wizard1.json`, `cleric` → `cleric.json`.
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension(OUTPUT_EXTENSION)
}

/// Serialize records as a pretty-printed JSON array with a trailing newline.
pub fn render_array<T: Serialize>(records: &[T]) -> OutputResult<String> {
    let mut text = serde_json::to_string_pretty(records)?;
    text.push('\n');
    Ok(text)
}

/// Write records as a JSON array to `path`.
///
/// The array is rendered before the file is opened, so a serialization
/// failure leaves an existing file untouched. The file is created if
/// missing and truncated if it already exists.
pub fn write_array<T: Serialize>(path: &Path, records: &[T]) -> OutputResult<()> {
    let io_err = |source| OutputError::Io { path: path.display().to_string(), source };

    let text = render_array(records)?;

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(text.as_bytes()).map_err(io_err)?;
    writer.flush().map_err(io_err)?;

    Ok(())
}
