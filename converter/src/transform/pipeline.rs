//! High-level conversion pipeline.
//!
//! ```text
//! input path → SpellKind
//! bytes → decode → CSV rows → map_row → validate → JSON array file
//! ```
//!
//! Every failure is fatal to the run: the first bad row stops conversion
//! and no output file is written.
//!
//! # Example
//!
//! ```rust,ignore
//! use spellbook::{convert_file, ConvertOptions};
//! use std::path::Path;
//!
//! let summary = convert_file(Path::new("Wizard1.csv"), &ConvertOptions::default())?;
//! println!("File created: {}", summary.output.display());
//! ```

use std::path::{Path, PathBuf};

use super::mapper::{map_row, Normalization};
use crate::config::{env_flag, ENV_NO_VALIDATE, ENV_RAW};
use crate::error::{ConvertError, ConvertResult, CsvResult, ValidationError};
use crate::logs::{log_info, log_info_indent, log_success, log_warning};
use crate::models::{Spell, SpellKind};
use crate::output::{output_path, write_array};
use crate::parser::{read_input, read_rows};
use crate::validation::SpellValidator;

/// Options for a conversion run
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Force a record shape instead of inferring it from the input path
    pub kind: Option<SpellKind>,

    /// Text normalization policy
    pub normalization: Normalization,

    /// Write here instead of `<input-base>.json`
    pub output: Option<PathBuf>,

    /// Skip schema validation of emitted records
    pub skip_validation: bool,
}

impl ConvertOptions {
    /// Defaults overridden by `SPELLBOOK_RAW` and `SPELLBOOK_NO_VALIDATE`.
    pub fn from_env() -> Self {
        let normalization = if env_flag(ENV_RAW) {
            Normalization::Raw
        } else {
            Normalization::TitleCase
        };

        Self {
            normalization,
            skip_validation: env_flag(ENV_NO_VALIDATE),
            ..Self::default()
        }
    }

    /// The shape to use for `input`.
    pub fn resolve_kind(&self, input: &Path) -> SpellKind {
        self.kind.unwrap_or_else(|| SpellKind::from_input_path(input))
    }

    /// The file to write for `input`.
    pub fn resolve_output(&self, input: &Path) -> PathBuf {
        self.output.clone().unwrap_or_else(|| output_path(input))
    }
}

/// Result of a successful run
#[derive(Debug, Clone)]
pub struct ConvertSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub kind: SpellKind,
    pub encoding: String,
    pub spells: usize,
}

/// Convert a spell CSV file into a JSON array file.
///
/// This is the main entry point. It:
/// 1. Picks the record shape (option or input path)
/// 2. Reads and decodes the file
/// 3. Maps every row, stopping at the first error
/// 4. Validates the records
/// 5. Writes the array to the output path
pub fn convert_file(input: &Path, options: &ConvertOptions) -> ConvertResult<ConvertSummary> {
    let kind = options.resolve_kind(input);
    log_info(format!("📖 Reading {} ({} spells)", input.display(), kind));

    let decoded = read_input(input)?;
    log_success(format!("Detected encoding: {}", decoded.encoding));

    let spells = convert_rows(read_rows(&decoded.content), kind, options.normalization)?;
    log_success(format!("Converted {} rows", spells.len()));
    if spells.is_empty() {
        log_warning("Input has no rows, writing an empty array");
    }

    if options.skip_validation {
        log_info("(validation skipped)");
    } else {
        validate_spells(kind, &spells)?;
        log_success(format!("All {} records valid", spells.len()));
    }

    let output = options.resolve_output(input);
    write_array(&output, &spells)?;
    log_success(format!("💾 Wrote {}", output.display()));

    Ok(ConvertSummary {
        input: input.to_path_buf(),
        output,
        kind,
        encoding: decoded.encoding,
        spells: spells.len(),
    })
}

/// Map a stream of raw rows into spells.
///
/// Row numbers in errors are 1-based record counts.
pub fn convert_rows<I>(rows: I, kind: SpellKind, normalization: Normalization) -> ConvertResult<Vec<Spell>>
where
    I: IntoIterator<Item = CsvResult<Vec<String>>>,
{
    let mut spells = Vec::new();

    for (idx, row) in rows.into_iter().enumerate() {
        let line = idx + 1;
        let row = row?;
        let spell = map_row(kind, &row, normalization)
            .map_err(|source| ConvertError::Record { line, source })?;
        log_info_indent(format!("[{:3}] {}", line, spell.name), 1);
        spells.push(spell);
    }

    Ok(spells)
}

/// Check every record against the shape's schema.
pub fn validate_spells(kind: SpellKind, spells: &[Spell]) -> ConvertResult<()> {
    let validator = SpellValidator::new(kind)
        .map_err(|source| ConvertError::Validation { line: 0, source })?;

    for (idx, spell) in spells.iter().enumerate() {
        let line = idx + 1;
        let value = serde_json::to_value(spell).map_err(|e| ConvertError::Validation {
            line,
            source: ValidationError::Schema { errors: vec![e.to_string()] },
        })?;
        validator
            .check(&value)
            .map_err(|source| ConvertError::Validation { line, source })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CsvError, RecordError};
    use crate::parser::{parse_rows, read_rows};
    use serde_json::Value;
    use std::fs;

    const FIREBALL: &str =
        "1,Fireball,No,Evocation,150 yds,V/S/M,\"Ash, bat guano\",1,\"5 rounds\",20' radius,None\n";
    const BLESS: &str = "1,BLESS,YES,holy water,All,60 yds,\"V, S, M\",1 round,6 rounds,50' cube,None\n";

    fn rows(content: &str) -> Vec<CsvResult<Vec<String>>> {
        parse_rows(content).unwrap().into_iter().map(Ok).collect()
    }

    #[test]
    fn test_default_options() {
        let opts = ConvertOptions::default();
        assert_eq!(opts.kind, None);
        assert_eq!(opts.normalization, Normalization::TitleCase);
        assert!(!opts.skip_validation);
        assert!(opts.output.is_none());
    }

    #[test]
    fn test_resolve_kind_and_output() {
        let opts = ConvertOptions::default();
        assert_eq!(opts.resolve_kind(Path::new("Wizard1.csv")), SpellKind::Wizard);
        assert_eq!(opts.resolve_kind(Path::new("cleric_a.csv")), SpellKind::Cleric);
        assert_eq!(opts.resolve_output(Path::new("Wizard1.csv")), PathBuf::from("Wizard1.json"));

        let forced = ConvertOptions {
            kind: Some(SpellKind::Wizard),
            output: Some(PathBuf::from("out/all.json")),
            ..ConvertOptions::default()
        };
        assert_eq!(forced.resolve_kind(Path::new("cleric_a.csv")), SpellKind::Wizard);
        assert_eq!(forced.resolve_output(Path::new("cleric_a.csv")), PathBuf::from("out/all.json"));
    }

    #[test]
    fn test_convert_rows_in_order() {
        let content = format!("{}{}", FIREBALL, FIREBALL.replace("Fireball", "Lightning Bolt"));
        let spells = convert_rows(rows(&content), SpellKind::Wizard, Normalization::TitleCase).unwrap();

        assert_eq!(spells.len(), 2);
        assert_eq!(spells[0].name, "Fireball");
        assert_eq!(spells[1].name, "Lightning Bolt");
        assert_eq!(spells[0].material, "Ash, Bat Guano");
        assert_eq!(spells[0].components, "V/S/M");
    }

    #[test]
    fn test_bad_row_reports_line_number() {
        let content = format!("{}{}1,Sleep,No\n{}", FIREBALL, FIREBALL, FIREBALL);
        let err = convert_rows(rows(&content), SpellKind::Wizard, Normalization::Raw).unwrap_err();

        match err {
            ConvertError::Record { line, source } => {
                assert_eq!(line, 3);
                assert_eq!(source.row(), "1,Sleep,No");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_error_stops_run() {
        let input: Vec<CsvResult<Vec<String>>> = vec![
            Ok(vec!["1".into(); 11]),
            Err(CsvError::Parse { row: 2, message: "bad quote".into() }),
            Ok(vec!["only one".into()]),
        ];
        let err = convert_rows(input, SpellKind::Cleric, Normalization::Raw).unwrap_err();
        assert!(matches!(err, ConvertError::Csv(CsvError::Parse { row: 2, .. })));
    }

    #[test]
    fn test_malformed_quote_stops_run() {
        let content = format!("{}{}", FIREBALL, FIREBALL.replace("Fireball", "\"Fire\"ball"));
        let err = convert_rows(read_rows(&content), SpellKind::Wizard, Normalization::TitleCase).unwrap_err();
        assert!(matches!(err, ConvertError::Csv(CsvError::Parse { row: 2, .. })));
    }

    #[test]
    fn test_unclosed_quote_stops_run() {
        let content = format!("{}1,\"Sleep,No\n", FIREBALL);
        let err = convert_rows(read_rows(&content), SpellKind::Wizard, Normalization::Raw).unwrap_err();
        assert!(matches!(err, ConvertError::Csv(CsvError::Parse { row: 2, .. })));
    }

    #[test]
    fn test_earlier_bad_row_reported_before_quote_error() {
        let content = format!("1,Sleep,No\n{}", FIREBALL.replace("Fireball", "Fire\"ball"));
        let err = convert_rows(read_rows(&content), SpellKind::Wizard, Normalization::Raw).unwrap_err();
        assert!(matches!(err, ConvertError::Record { line: 1, .. }));
    }

    #[test]
    fn test_validate_spells() {
        let spells = convert_rows(rows(BLESS), SpellKind::Cleric, Normalization::TitleCase).unwrap();
        assert!(validate_spells(SpellKind::Cleric, &spells).is_ok());
    }

    #[test]
    fn test_convert_wizard_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("Wizard1.csv");
        fs::write(&input, format!("{}{}", FIREBALL, FIREBALL)).unwrap();

        let summary = convert_file(&input, &ConvertOptions::default()).unwrap();
        assert_eq!(summary.kind, SpellKind::Wizard);
        assert_eq!(summary.spells, 2);
        assert_eq!(summary.output, dir.path().join("Wizard1.json"));

        let written: Value = serde_json::from_str(&fs::read_to_string(&summary.output).unwrap()).unwrap();
        let array = written.as_array().unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array[0]["name"], "Fireball");
        assert_eq!(array[0]["school"], "Evocation");
        assert_eq!(array[0].as_object().unwrap().len(), 11);
    }

    #[test]
    fn test_convert_cleric_file_raw() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("cleric_a.csv");
        fs::write(&input, BLESS).unwrap();

        let opts = ConvertOptions { normalization: Normalization::Raw, ..ConvertOptions::default() };
        let summary = convert_file(&input, &opts).unwrap();
        assert_eq!(summary.kind, SpellKind::Cleric);

        let written: Value = serde_json::from_str(&fs::read_to_string(&summary.output).unwrap()).unwrap();
        assert_eq!(written[0]["name"], "BLESS");
        assert_eq!(written[0]["sphere"], "All");
        assert_eq!(written[0]["material"], "holy water");
        assert!(written[0].get("school").is_none());
    }

    #[test]
    fn test_bad_row_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("Wizard2.csv");
        fs::write(&input, format!("{}1,Sleep\n", FIREBALL)).unwrap();

        let err = convert_file(&input, &ConvertOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::Record { line: 2, source: RecordError::FieldCount { found: 2, .. } }
        ));
        assert!(!dir.path().join("Wizard2.json").exists());
    }

    #[test]
    fn test_utf8_apostrophe_survives() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("Wizard3.csv");
        fs::write(&input, FIREBALL.replace("Fireball", "mordenkainen’s sword")).unwrap();

        let summary = convert_file(&input, &ConvertOptions::default()).unwrap();
        assert_eq!(summary.encoding, "utf-8");

        let written: Value = serde_json::from_str(&fs::read_to_string(&summary.output).unwrap()).unwrap();
        assert_eq!(written[0]["name"], "Mordenkainen’s Sword");
    }

    #[test]
    fn test_missing_input() {
        let err = convert_file(Path::new("/no/such/Wizard.csv"), &ConvertOptions::default()).unwrap_err();
        assert!(matches!(err, ConvertError::Csv(CsvError::Io(_))));
    }
}
