//! Error types for the spell conversion pipeline.
//!
//! Each stage has its own error type:
//!
//! - [`CsvError`] - Reading and parsing the input file
//! - [`RecordError`] - Mapping one CSV row onto a spell record
//! - [`ValidationError`] - Schema check of an emitted record
//! - [`OutputError`] - Writing the JSON array
//! - [`ConvertError`] - Top-level orchestration errors
//!
//! Stage errors convert into [`ConvertError`] via `From`, so `?` works
//! across stage boundaries.

use thiserror::Error;

// =============================================================================
// CSV Reading Errors
// =============================================================================

/// Errors while reading the input CSV.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to read file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Input bytes could not be decoded.
    #[error("Failed to decode input as {encoding}")]
    Encoding { encoding: String },

    /// Malformed CSV syntax.
    #[error("Invalid CSV at record {row}: {message}")]
    Parse { row: usize, message: String },
}

// =============================================================================
// Record Mapping Errors
// =============================================================================

/// Errors while mapping a CSV row onto a spell record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The row does not have the fixed number of columns.
    #[error("incorrect number of fields (expected {expected}, found {found}): {row}")]
    FieldCount {
        expected: usize,
        found: usize,
        /// The original row re-joined with commas.
        row: String,
    },
}

impl RecordError {
    /// The offending row as comma-joined text.
    pub fn row(&self) -> &str {
        match self {
            RecordError::FieldCount { row, .. } => row,
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors during schema validation of emitted records.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// An embedded schema failed to load.
    #[error("Invalid embedded schema: {0}")]
    InvalidSchema(String),

    /// The record does not match its shape's schema.
    #[error("Validation failed: {errors:?}")]
    Schema { errors: Vec<String> },
}

// =============================================================================
// Output Errors
// =============================================================================

/// Errors while writing the output file.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Create, write or flush failed.
    #[error("Failed writing {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Conversion Errors (top-level)
// =============================================================================

/// Top-level conversion errors.
///
/// This is the error type returned by [`crate::transform::convert_file`].
#[derive(Debug, Error)]
pub enum ConvertError {
    /// CSV reading error.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// A row could not be mapped. `line` is the 1-based record number.
    #[error("line {line}: {source}")]
    Record {
        line: usize,
        #[source]
        source: RecordError,
    },

    /// Validation error.
    #[error("Validation error on line {line}: {source}")]
    Validation {
        line: usize,
        #[source]
        source: ValidationError,
    },

    /// Output error.
    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for record mapping.
pub type RecordResult<T> = Result<T, RecordError>;

/// Result type for output operations.
pub type OutputResult<T> = Result<T, OutputError>;

/// Result type for the whole conversion.
pub type ConvertResult<T> = Result<T, ConvertError>;
