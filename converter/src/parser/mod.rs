//! Spell CSV reader with encoding auto-detection.
//!
//! Spell lists carry no header row; every record is returned as an ordered
//! list of raw fields. Quoting follows the usual CSV rules, so a quoted
//! field may hold commas. Field counts are not checked here.
//!
//! The file is read into memory once so its encoding can be detected before
//! parsing; rows are then yielded one at a time from the decoded text.
//!
//! Quoting is strict: a quote inside an unquoted field, text after a closing
//! quote, or a quote left open at end of input is a parse error.

use std::iter::Peekable;
use std::path::Path;
use std::str::Chars;

use crate::error::{CsvError, CsvResult};

/// Decoded file contents with the encoding that was used.
#[derive(Debug, Clone)]
pub struct DecodedInput {
    pub content: String,
    pub encoding: String,
}

/// Detect the encoding of raw bytes using chardet
pub fn detect_encoding(bytes: &[u8]) -> String {
    let result = chardet::detect(bytes);
    let charset = result.0;

    match charset.to_lowercase().as_str() {
        "" | "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to a string using the specified encoding.
///
/// Bytes that are valid UTF-8 are always read as UTF-8; `encoding` only
/// applies otherwise. A leading byte-order mark is dropped.
pub fn decode_content(bytes: &[u8], encoding: &str) -> CsvResult<String> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Ok(strip_bom(text));
    }

    let codec = match encoding.to_lowercase().as_str() {
        "iso-8859-1" | "latin-1" | "latin1" | "windows-1252" | "cp1252" => {
            encoding_rs::WINDOWS_1252
        }
        label => encoding_rs::Encoding::for_label(label.as_bytes())
            .ok_or_else(|| CsvError::Encoding { encoding: encoding.to_string() })?,
    };

    let (text, _, had_errors) = codec.decode(bytes);
    if had_errors {
        return Err(CsvError::Encoding { encoding: encoding.to_string() });
    }
    Ok(strip_bom(&text))
}

fn strip_bom(text: &str) -> String {
    text.trim_start_matches('\u{feff}').to_string()
}

/// Read a file and decode it with the detected encoding.
pub fn read_input<P: AsRef<Path>>(path: P) -> CsvResult<DecodedInput> {
    let bytes = std::fs::read(path.as_ref())?;
    decode_bytes(&bytes)
}

/// Decode raw bytes, preferring UTF-8 and detecting a single-byte
/// encoding only when the input is not valid UTF-8.
pub fn decode_bytes(bytes: &[u8]) -> CsvResult<DecodedInput> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Ok(DecodedInput { content: strip_bom(text), encoding: "utf-8".to_string() });
    }

    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding)?;
    Ok(DecodedInput { content, encoding })
}

/// Stream raw rows from decoded text.
///
/// Blank lines are skipped. Rows before the first malformed record are
/// yielded normally, then a single `CsvError::Parse` ends the stream.
pub fn read_rows(content: &str) -> impl Iterator<Item = CsvResult<Vec<String>>> + '_ {
    let quote_error = check_quoting(content).err();
    let good_rows = match &quote_error {
        Some(CsvError::Parse { row, .. }) => row - 1,
        _ => usize::MAX,
    };

    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes())
        .into_records()
        .enumerate()
        .map(|(idx, record)| {
            record
                .map(|r| r.iter().map(str::to_string).collect())
                .map_err(|e| CsvError::Parse { row: idx + 1, message: e.to_string() })
        })
        .take(good_rows)
        .chain(quote_error.map(Err))
}

/// Parse an in-memory CSV document into rows.
pub fn parse_rows(content: &str) -> CsvResult<Vec<Vec<String>>> {
    read_rows(content).collect()
}

/// Scan the quoting of a whole document.
///
/// Returns the first offending record (1-based, blank lines not counted).
pub fn check_quoting(content: &str) -> CsvResult<()> {
    let mut scanner = QuoteScanner { chars: content.chars().peekable(), row: 0 };
    scanner.run()
}

struct QuoteScanner<'a> {
    chars: Peekable<Chars<'a>>,
    row: usize,
}

impl QuoteScanner<'_> {
    fn run(&mut self) -> CsvResult<()> {
        let mut record_start = true;
        let mut field_start = true;

        while let Some(c) = self.chars.next() {
            match c {
                '\n' | '\r' => {
                    record_start = true;
                    field_start = true;
                }
                _ => {
                    if record_start {
                        self.row += 1;
                        record_start = false;
                    }
                    match c {
                        ',' => field_start = true,
                        '"' if field_start => {
                            self.quoted_field()?;
                            field_start = false;
                        }
                        '"' => return Err(self.error("bare \" in non-quoted field")),
                        _ => field_start = false,
                    }
                }
            }
        }

        Ok(())
    }

    /// Consume a quoted field up to its closing quote and check what follows.
    fn quoted_field(&mut self) -> CsvResult<()> {
        loop {
            match self.chars.next() {
                None => return Err(self.error("quoted field not closed before end of input")),
                Some('"') if self.chars.peek() == Some(&'"') => {
                    self.chars.next();
                }
                Some('"') => {
                    return match self.chars.peek() {
                        None | Some(',') | Some('\n') | Some('\r') => Ok(()),
                        Some(_) => Err(self.error("extraneous \" in quoted field")),
                    };
                }
                Some(_) => {}
            }
        }
    }

    fn error(&self, message: &str) -> CsvError {
        CsvError::Parse { row: self.row, message: message.to_string() }
    }
}
