//! Map raw CSV rows onto spell records.

use super::title_case::title_case;
use crate::config::EXPECTED_FIELDS;
use crate::error::{RecordError, RecordResult};
use crate::models::{Spell, SpellKind};

/// How text fields are written to the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalization {
    /// Title-case every field except components.
    #[default]
    TitleCase,
    /// Keep fields exactly as they appear in the CSV.
    Raw,
}

impl Normalization {
    pub fn apply(&self, value: &str) -> String {
        match self {
            Normalization::TitleCase => title_case(value),
            Normalization::Raw => value.to_string(),
        }
    }
}

/// Build a spell of the given shape from one CSV row.
///
/// The row must have exactly [`EXPECTED_FIELDS`] columns. On mismatch the
/// error carries the row re-joined with commas.
pub fn map_row<S: AsRef<str>>(
    kind: SpellKind,
    row: &[S],
    normalization: Normalization,
) -> RecordResult<Spell> {
    if row.len() != EXPECTED_FIELDS {
        let fields: Vec<&str> = row.iter().map(|s| s.as_ref()).collect();
        return Err(RecordError::FieldCount {
            expected: EXPECTED_FIELDS,
            found: row.len(),
            row: fields.join(","),
        });
    }

    let mut spell = Spell::empty(kind);
    for (field, raw) in kind.columns().iter().zip(row) {
        let raw: &str = raw.as_ref();
        let value = if field.is_normalized() {
            normalization.apply(raw)
        } else {
            raw.to_string()
        };
        spell.set(*field, value);
    }

    Ok(spell)
}
