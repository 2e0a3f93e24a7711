//! Domain models for spell conversion.
//!
//! - [`SpellKind`] - Which record shape a file holds (wizard or cleric)
//! - [`Field`] - One column of a spell row
//! - [`Spell`] - A converted spell record
//!
//! Both shapes share the same fields except the category column, which is
//! a `school` for wizard spells and a `sphere` for cleric spells. The two
//! shapes also order their source columns differently, so each kind carries
//! its own column table. That table drives both the CSV index of every field
//! and the key order of the emitted JSON object.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::config::{EXPECTED_FIELDS, WIZARD_PREFIX};

// =============================================================================
// Spell Kind
// =============================================================================

/// Record shape of a spell file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpellKind {
    Wizard,
    Cleric,
}

const WIZARD_COLUMNS: [Field; EXPECTED_FIELDS] = [
    Field::Level,
    Field::Name,
    Field::Reversible,
    Field::Category,
    Field::Range,
    Field::Components,
    Field::Material,
    Field::CastingTime,
    Field::Duration,
    Field::AreaOfEffect,
    Field::SavingThrow,
];

const CLERIC_COLUMNS: [Field; EXPECTED_FIELDS] = [
    Field::Level,
    Field::Name,
    Field::Reversible,
    Field::Material,
    Field::Category,
    Field::Range,
    Field::Components,
    Field::CastingTime,
    Field::Duration,
    Field::AreaOfEffect,
    Field::SavingThrow,
];

impl SpellKind {
    /// Pick the shape from an input path.
    ///
    /// Only the first character of the path exactly as given is inspected:
    /// a literal `W` means wizard, anything else means cleric. Directory
    /// prefixes count, so `./Wizard1.csv` is cleric.
    pub fn from_input_path(path: &Path) -> Self {
        match path.as_os_str().to_string_lossy().chars().next() {
            Some(c) if c == WIZARD_PREFIX => SpellKind::Wizard,
            _ => SpellKind::Cleric,
        }
    }

    /// Source columns in CSV order.
    pub fn columns(&self) -> &'static [Field; EXPECTED_FIELDS] {
        match self {
            SpellKind::Wizard => &WIZARD_COLUMNS,
            SpellKind::Cleric => &CLERIC_COLUMNS,
        }
    }

    /// JSON key of the category column.
    pub fn category_key(&self) -> &'static str {
        match self {
            SpellKind::Wizard => "school",
            SpellKind::Cleric => "sphere",
        }
    }

    /// JSON keys in emission order.
    pub fn keys(&self) -> Vec<&'static str> {
        self.columns().iter().map(|f| f.key(*self)).collect()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpellKind::Wizard => "wizard",
            SpellKind::Cleric => "cleric",
        }
    }
}

impl fmt::Display for SpellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpellKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wizard" | "w" | "mage" => Ok(SpellKind::Wizard),
            "cleric" | "c" | "priest" => Ok(SpellKind::Cleric),
            other => Err(format!("unknown spell kind '{}' (expected wizard or cleric)", other)),
        }
    }
}

// =============================================================================
// Fields
// =============================================================================

/// One column of a spell row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Level,
    Name,
    Reversible,
    /// School (wizard) or sphere (cleric).
    Category,
    Material,
    Range,
    Components,
    CastingTime,
    Duration,
    AreaOfEffect,
    SavingThrow,
}

impl Field {
    /// JSON key for this field in the given shape.
    pub fn key(&self, kind: SpellKind) -> &'static str {
        match self {
            Field::Level => "level",
            Field::Name => "name",
            Field::Reversible => "reversible",
            Field::Category => kind.category_key(),
            Field::Material => "material",
            Field::Range => "range",
            Field::Components => "components",
            Field::CastingTime => "casting_time",
            Field::Duration => "duration",
            Field::AreaOfEffect => "area_of_effect",
            Field::SavingThrow => "saving_throw",
        }
    }

    /// Whether the title-case normalizer applies to this field.
    ///
    /// Component codes (`V, S, M`) are always kept as written.
    pub fn is_normalized(&self) -> bool {
        !matches!(self, Field::Components)
    }
}

// =============================================================================
// Spell
// =============================================================================

/// A converted spell record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spell {
    pub kind: SpellKind,
    pub level: String,
    pub name: String,
    pub reversible: String,
    pub category: String,
    pub material: String,
    pub range: String,
    pub components: String,
    pub casting_time: String,
    pub duration: String,
    pub area_of_effect: String,
    pub saving_throw: String,
}

impl Spell {
    /// An empty record of the given shape.
    pub fn empty(kind: SpellKind) -> Self {
        Self {
            kind,
            level: String::new(),
            name: String::new(),
            reversible: String::new(),
            category: String::new(),
            material: String::new(),
            range: String::new(),
            components: String::new(),
            casting_time: String::new(),
            duration: String::new(),
            area_of_effect: String::new(),
            saving_throw: String::new(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Level => &self.level,
            Field::Name => &self.name,
            Field::Reversible => &self.reversible,
            Field::Category => &self.category,
            Field::Material => &self.material,
            Field::Range => &self.range,
            Field::Components => &self.components,
            Field::CastingTime => &self.casting_time,
            Field::Duration => &self.duration,
            Field::AreaOfEffect => &self.area_of_effect,
            Field::SavingThrow => &self.saving_throw,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Level => &mut self.level,
            Field::Name => &mut self.name,
            Field::Reversible => &mut self.reversible,
            Field::Category => &mut self.category,
            Field::Material => &mut self.material,
            Field::Range => &mut self.range,
            Field::Components => &mut self.components,
            Field::CastingTime => &mut self.casting_time,
            Field::Duration => &mut self.duration,
            Field::AreaOfEffect => &mut self.area_of_effect,
            Field::SavingThrow => &mut self.saving_throw,
        };
        *slot = value;
    }
}

impl Serialize for Spell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let columns = self.kind.columns();
        let mut map = serializer.serialize_map(Some(columns.len()))?;
        for field in columns {
            map.serialize_entry(field.key(self.kind), self.get(*field))?;
        }
        map.end()
    }
}
