//! JOT (a jot of JSON) parser implementation.
//!
//! JOT is the scalar subset of JSON: a document holds exactly one of
//! `null`, `true`, `false`, or a number, surrounded by optional whitespace.
//!
//! # Parsing Pipeline
//!
//! The parser makes a single pass over the source:
//!
//! 1. **Cursor**: A bounds-checked byte cursor over the borrowed input,
//!    skipping whitespace and tracking the position for error messages.
//!
//! 2. **Dispatch**: The first significant byte selects the literal or
//!    number sub-parser.
//!
//! 3. **Grammar-checked conversion**: Number spellings are validated
//!    against the JSON number grammar before conversion, so the permissive
//!    float conversion routine never sees a malformed spelling.
//!
//! After the value, only trailing whitespace may remain: a JOT document
//! holds exactly one value.

mod cursor;
mod error;
mod parser;
mod value;

pub use error::{ParseError, Result};
pub use value::{Kind, Value};

/// Parse a JOT document from a string.
///
/// # Example
///
/// ```
/// use libjot::parse;
///
/// let value = parse("42").unwrap();
/// assert_eq!(value.as_number(), Some(42.0));
/// ```
pub fn parse(input: &str) -> Result<Value> {
    parse_with_filename(input, None)
}

/// Parse a JOT document from a string with a filename for error messages.
pub fn parse_with_filename(input: &str, filename: Option<&str>) -> Result<Value> {
    let ctx = error::ParseContext::new(filename);
    parser::parse_root(input, &ctx)
}
