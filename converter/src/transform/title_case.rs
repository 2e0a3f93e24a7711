//! Title-case normalization for spell text fields.
//!
//! ```text
//! "FIRE BALL & bolt"   →  "Fire Ball And Bolt"
//! "a gift to the king" →  "a Gift to the King"
//! ```

use crate::config::SMALL_WORDS;

/// Normalize a free-text field to title case.
///
/// The text is lowercased and split on whitespace. A bare `&` becomes
/// `and`, small words stay lowercase and every other word is capitalized.
/// Words are rejoined with single spaces.
pub fn title_case(input: &str) -> String {
    input
        .to_lowercase()
        .split_whitespace()
        .map(|word| {
            let word = if word == "&" { "and" } else { word };
            if is_small_word(word) {
                word.to_string()
            } else {
                capitalize(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Exact membership in the small-word list.
pub fn is_small_word(word: &str) -> bool {
    SMALL_WORDS.contains(&word)
}

/// Uppercase the first letter of a word and every letter that follows a
/// separator (`v/s/m` → `V/S/M`, `(special)` → `(Special)`).
///
/// Separators are ASCII punctuation and whitespace; `_` and non-ASCII
/// marks such as `’` are part of the word.
fn capitalize(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut at_boundary = true;

    for c in word.chars() {
        if at_boundary && c.is_alphabetic() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_boundary = is_separator(c);
    }

    out
}

fn is_separator(c: char) -> bool {
    if c.is_ascii() {
        !(c.is_ascii_alphanumeric() || c == '_')
    } else {
        c.is_whitespace()
    }
}
