//! # Spellbook - Spell list CSV to JSON conversion
//!
//! Spellbook turns headerless spell CSV exports into JSON arrays. A file
//! whose path starts with `W` holds wizard spells, anything else holds
//! cleric spells. The two shapes differ in one category column (`school`
//! or `sphere`) and in where the material column sits.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   CSV File  │────▶│   Parser    │────▶│   Mapper    │────▶│ JSON Array  │
//! │  (ISO/UTF8) │     │  (auto-enc) │     │ (title-case)│     │ (validated) │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use spellbook::{convert_file, ConvertOptions};
//! use std::path::Path;
//!
//! let summary = convert_file(Path::new("Wizard1.csv"), &ConvertOptions::default()).unwrap();
//! println!("Converted {} spells", summary.spells);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types per stage
//! - [`config`] - Schema constants and environment defaults
//! - [`logs`] - Progress log
//! - [`models`] - Spell kinds, fields and records
//! - [`parser`] - CSV reading with encoding detection
//! - [`transform`] - Title-casing, row mapping and the pipeline
//! - [`validation`] - JSON schema checks
//! - [`output`] - JSON array writer

// Core modules
pub mod config;
pub mod error;
pub mod logs;
pub mod models;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// Validation
pub mod validation;

// Output
pub mod output;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    ConvertError, ConvertResult, CsvError, CsvResult, OutputError, RecordError, RecordResult,
    ValidationError,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{Field, Spell, SpellKind};

// =============================================================================
// Re-exports - Parsing
// =============================================================================

pub use parser::{
    check_quoting, decode_bytes, decode_content, detect_encoding, parse_rows, read_input, read_rows,
    DecodedInput,
};

// =============================================================================
// Re-exports - Transformation
// =============================================================================

pub use transform::{
    convert_file, convert_rows, map_row, title_case, validate_spells, ConvertOptions,
    ConvertSummary, Normalization,
};

// =============================================================================
// Re-exports - Validation and output
// =============================================================================

pub use validation::{spell_schema, SpellValidator};
pub use output::{output_path, render_array, write_array};
