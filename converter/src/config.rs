//! Converter configuration.
//!
//! Fixed schema constants plus the defaults that can be overridden from the
//! environment (or a `.env` file loaded at start-up).

use std::env;

/// Number of columns in every spell row.
pub const EXPECTED_FIELDS: usize = 11;

/// Input paths starting with this character hold wizard spells.
pub const WIZARD_PREFIX: char = 'W';

/// Extension given to the generated file.
pub const OUTPUT_EXTENSION: &str = "json";

/// Words kept lowercase by the title-case normalizer.
pub const SMALL_WORDS: [&str; 5] = ["a", "an", "on", "the", "to"];

/// Set to a truthy value to pass fields through verbatim.
pub const ENV_RAW: &str = "SPELLBOOK_RAW";

/// Set to a truthy value to skip schema validation.
pub const ENV_NO_VALIDATE: &str = "SPELLBOOK_NO_VALIDATE";

/// Read a boolean flag from the environment. Unset means `false`.
pub fn env_flag(name: &str) -> bool {
    env::var(name).map(|v| parse_flag(&v)).unwrap_or(false)
}

/// Interpret a flag value (`1`, `true`, `yes`, `on`, any case).
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
