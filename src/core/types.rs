use serde_json::Value;
use std::io::Read;
use std::path::PathBuf;

/// Represents one parsed contact card.
///
/// This struct contains metadata about the parser and the kind of record,
/// as well as a short text summary and the structured field mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct CardParsed {
    /// Name of the parser that produced this result.
    pub parser: &'static str,
    /// Logical kind of the parsed record (e.g., "contact").
    pub kind: &'static str,
    /// One-line textual summary of the record.
    pub text: String,
    /// Field-name to field-value mapping as a JSON object.
    pub json: Value,
}

/// Basic information about an available parser.
///
/// This is typically used for discovery and documentation of parsers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserInfo {
    /// Unique name of the parser.
    pub name: &'static str,
    /// Human-readable description of what the parser does.
    pub description: &'static str,
}

/// Different ways to provide input to a parser.
///
/// This enum abstracts over several common input sources so that parsers
/// can operate over paths, in-memory data, or generic readers. Card exports
/// are consumed in a single forward pass, so plain `Read` is enough.
pub enum ParserInput<'a> {
    /// Read input from a file system path.
    Path(PathBuf),
    /// Read input from an in-memory byte buffer.
    Bytes(Vec<u8>),
    /// Read input from a generic reader.
    Reader(Box<dyn Read + 'a>),
}
