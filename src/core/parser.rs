use anyhow::Result;

use super::{CardParsed, ParserInput};

/// A trait representing a generic parser that can process input into parsed cards.
///
/// Implementors of this trait must be `Send` and `Sync` so they can be safely
/// shared and used across threads.
pub trait Parser: Send + Sync {
    /// Returns the unique, static name of this parser implementation.
    fn name(&self) -> &'static str;

    /// Returns a human-readable description of this parser.
    ///
    /// By default, this returns `"No description provided."`, but implementors
    /// are encouraged to override it with a more detailed description.
    fn description(&self) -> &'static str {
        "No description provided."
    }

    /// Runs the parser on the given `input`, sending each parsed card to `sink`.
    ///
    /// # Arguments
    ///
    /// * `input` - The parser input to be processed.
    /// * `sink` - A callback that is invoked for each `CardParsed` produced
    ///   by the parser. It should return `Ok(())` on success or an error if
    ///   processing should be aborted.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or if the `sink` callback returns an error.
    fn run_into(
        &self,
        input: ParserInput,
        sink: &mut dyn FnMut(CardParsed) -> Result<()>,
    ) -> Result<()>;
}
