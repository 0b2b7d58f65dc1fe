//! Galaxy contact-export (.vcf) parser.
//!
//! This module turns `BEGIN:VCARD` / `END:VCARD` blocks of `KEY:VALUE` lines
//! into flat field maps, one JSON object per card. Base64 photo payloads are
//! replaced by a placeholder and skipped up to the next blank line;
//! quoted-printable continuation blocks are discarded line by line.
//!
//! Known gaps: `X-SAMSUNGADR` values without an ENCODING parameter pass
//! through as raw semicolon-structured text (e.g. `Washington;;;Washington`),
//! and `EMAIL` keys carrying an `X-CUSTOM(CHARSET=...,ENCODING=...)`
//! parameter block keep the whole blob inside the key.

use crate::core::{CardParsed, Parser, ParserInput};
use anyhow::{anyhow, Result};
use log::debug;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};

/// Parser implementation for Galaxy `.vcf` contact exports.
pub struct GalaxyVcfParser;

impl Default for GalaxyVcfParser {
    fn default() -> Self {
        Self
    }
}

/// Line-scanning mode, checked before line-type dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParserState {
    /// Ordinary line handling.
    Normal,
    /// Discard lines until the first empty line (base64 photo payload).
    SkipToBlank,
    /// Discard lines starting with `=` (quoted-printable continuations).
    SkipEquals,
}

/// Line prefix opening a card block.
const BEGIN_MARKER: &str = "BEGIN:VCARD";
/// Line prefix closing a card block.
const END_MARKER: &str = "END:VCARD";
/// Key prefix of an inline base64 photo payload.
const PHOTO_PREFIX: &str = "PHOTO;ENCODING=BASE64;";
/// Stored in place of a photo payload.
const PHOTO_PLACEHOLDER: &str = "Not processed";

/// Inserts separators into a long phone number.
///
/// Groups are taken from the right: four characters, three characters, then
/// the whole remainder as the leading group, joined with `-`. Callers only
/// pass values of at least ten characters.
fn punctuate_phone(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let mut groups: Vec<String> = Vec::new();
    let mut end = chars.len();
    for size in [4usize, 3] {
        if end == 0 {
            break;
        }
        let start = end.saturating_sub(size);
        groups.push(chars[start..end].iter().collect());
        end = start;
    }
    if end > 0 {
        groups.push(chars[..end].iter().collect());
    }
    groups.reverse();
    groups.join("-")
}

impl GalaxyVcfParser {
    /// Parses cards from a buffered reader and streams them into `sink`.
    ///
    /// The reader is consumed line by line in a single forward pass. A card
    /// is opened on a begin marker, populated field by field, and emitted on
    /// its end marker if it carries an `FN` field (its `VERSION` field is
    /// removed first). Cards without `FN` are dropped, as is any card still
    /// open when a new begin marker arrives.
    fn parse_reader(
        &self,
        reader: impl BufRead,
        sink: &mut dyn FnMut(CardParsed) -> Result<()>,
    ) -> Result<()> {
        let mut state = ParserState::Normal;
        let mut card: Option<Map<String, Value>> = None;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            let line_no = idx + 1;

            match state {
                ParserState::SkipToBlank => {
                    // The terminating blank line is consumed, not processed.
                    if line.is_empty() {
                        state = ParserState::Normal;
                    }
                    continue;
                }
                ParserState::SkipEquals => {
                    if line.starts_with('=') {
                        continue;
                    }
                    // First non-continuation line falls through to normal handling.
                    state = ParserState::Normal;
                }
                ParserState::Normal => {}
            }

            if line.starts_with(BEGIN_MARKER) {
                if card.is_some() {
                    debug!("line {line_no}: begin marker while a card is open, dropping the unfinished card");
                }
                card = Some(Map::new());
            } else if line.starts_with(END_MARKER) {
                if let Some(mut fields) = card.take() {
                    let full_name = fields.get("FN").and_then(Value::as_str).map(str::to_owned);
                    match full_name {
                        Some(full_name) => {
                            fields.remove("VERSION");
                            sink(CardParsed {
                                parser: self.name(),
                                kind: "contact",
                                text: format!("[contact] {full_name}"),
                                json: Value::Object(fields),
                            })?;
                        }
                        None => debug!("line {line_no}: dropping card without an FN field"),
                    }
                }
            } else if line.starts_with("X-SAMSUNGADR;ENCODING") || line.starts_with("NOTE;ENCODING")
            {
                // Continuation lines are quoted-printable and not reconstructed;
                // the field itself is not stored.
                state = ParserState::SkipEquals;
            } else {
                let (key, value) = line.split_once(':').ok_or_else(|| {
                    anyhow!("line {line_no}: field line has no ':' separator: {line:?}")
                })?;

                if key.starts_with(PHOTO_PREFIX) {
                    if let Some(fields) = card.as_mut() {
                        fields.insert(
                            key.to_string(),
                            Value::String(PHOTO_PLACEHOLDER.to_string()),
                        );
                    }
                    state = ParserState::SkipToBlank;
                    continue;
                }

                let mut value = value.trim_end_matches(';').to_string();
                if key.starts_with("TEL;") && value.chars().count() >= 10 {
                    value = punctuate_phone(&value);
                }
                if let Some(fields) = card.as_mut() {
                    fields.insert(key.to_string(), Value::String(value));
                }
            }
        }

        Ok(())
    }
}

impl Parser for GalaxyVcfParser {
    fn name(&self) -> &'static str {
        "galaxy_vcf"
    }

    fn description(&self) -> &'static str {
        "Parse vCard contact exports and emit one JSON object per card."
    }

    /// Dispatch parsing based on the input type and forward cards into `sink`.
    fn run_into(
        &self,
        input: ParserInput,
        sink: &mut dyn FnMut(CardParsed) -> Result<()>,
    ) -> Result<()> {
        match input {
            ParserInput::Path(path) => {
                let file = File::open(path)?;
                self.parse_reader(BufReader::new(file), sink)
            }
            ParserInput::Bytes(bytes) => self.parse_reader(Cursor::new(bytes), sink),
            ParserInput::Reader(reader) => self.parse_reader(BufReader::new(reader), sink),
        }
    }
}
