pub mod parser;
pub mod types;

pub use parser::Parser;
pub use types::{CardParsed, ParserInfo, ParserInput};
