//! JSON Schema validation for emitted spell records.
//!
//! Each record shape has a Draft 7 schema embedded at compile time from the
//! `schemas/` directory:
//! - `wizard-spell.json`
//! - `cleric-spell.json`
//!
//! Both require an object with exactly the eleven keys of the shape, every
//! value a string.
//!
//! # Example
//!
//! ```rust,ignore
//! use serde_json::json;
//! use spellbook::{SpellKind, SpellValidator};
//!
//! let validator = SpellValidator::new(SpellKind::Wizard)?;
//! let record = json!({ "level": "1", "name": "Sleep" });
//! assert!(validator.check(&record).is_err());
//! ```

use serde_json::Value;

use crate::error::ValidationError;
use crate::models::SpellKind;

const WIZARD_SCHEMA: &str = include_str!("../../schemas/wizard-spell.json");
const CLERIC_SCHEMA: &str = include_str!("../../schemas/cleric-spell.json");

/// The embedded schema for a record shape.
pub fn spell_schema(kind: SpellKind) -> Result<Value, ValidationError> {
    let raw = match kind {
        SpellKind::Wizard => WIZARD_SCHEMA,
        SpellKind::Cleric => CLERIC_SCHEMA,
    };
    serde_json::from_str(raw).map_err(|e| ValidationError::InvalidSchema(e.to_string()))
}

/// Validates many records against one compiled schema.
pub struct SpellValidator {
    validator: jsonschema::Validator,
}

impl SpellValidator {
    pub fn new(kind: SpellKind) -> Result<Self, ValidationError> {
        let schema = spell_schema(kind)?;
        let validator = jsonschema::draft7::new(&schema)
            .map_err(|e| ValidationError::InvalidSchema(e.to_string()))?;
        Ok(Self { validator })
    }

    pub fn check(&self, data: &Value) -> Result<(), ValidationError> {
        let errors: Vec<String> = self
            .validator
            .iter_errors(data)
            .map(|e| e.to_string())
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::Schema { errors })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn wizard_record() -> Value {
        json!({
            "level": "3",
            "name": "Fireball",
            "reversible": "No",
            "school": "Evocation",
            "range": "10 Yds + 10 Yds/Level",
            "components": "V,S,M",
            "material": "Bat Guano and Sulphur",
            "casting_time": "3",
            "duration": "Instantaneous",
            "area_of_effect": "20' Radius",
            "saving_throw": "1/2"
        })
    }

    #[test]
    fn test_embedded_schemas_load() {
        assert!(spell_schema(SpellKind::Wizard).is_ok());
        assert!(spell_schema(SpellKind::Cleric).is_ok());
    }

    #[test]
    fn test_valid_wizard() {
        let validator = SpellValidator::new(SpellKind::Wizard).unwrap();
        assert!(validator.check(&wizard_record()).is_ok());
    }

    #[test]
    fn test_wizard_record_is_not_cleric() {
        let validator = SpellValidator::new(SpellKind::Cleric).unwrap();
        assert!(validator.check(&wizard_record()).is_err());
    }

    #[test]
    fn test_missing_field_reported() {
        let mut record = wizard_record();
        record.as_object_mut().unwrap().remove("duration");

        let validator = SpellValidator::new(SpellKind::Wizard).unwrap();
        let err = validator.check(&record).unwrap_err();
        match err {
            ValidationError::Schema { errors } => {
                assert!(errors.iter().any(|e| e.contains("duration")));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_string_value_rejected() {
        let mut record = wizard_record();
        record["level"] = json!(3);
        let validator = SpellValidator::new(SpellKind::Wizard).unwrap();
        assert!(validator.check(&record).is_err());
    }

    #[test]
    fn test_extra_key_rejected() {
        let mut record = wizard_record();
        record["sphere"] = json!("All");
        let validator = SpellValidator::new(SpellKind::Wizard).unwrap();
        assert!(validator.check(&record).is_err());
    }
}
