//! Error types for JOT parsing.

use thiserror::Error;

/// Result type for JOT parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Parse context carrying filename for error reporting.
#[derive(Clone, Debug)]
pub struct ParseContext {
    pub filename: Option<String>,
}

impl ParseContext {
    /// Create a new parse context.
    pub fn new(filename: Option<&str>) -> Self {
        Self {
            filename: filename.map(String::from),
        }
    }

    /// Format a location suffix for error messages.
    pub fn loc_suffix(&self, line: usize, col: usize) -> String {
        match &self.filename {
            Some(name) => format!(" at {}:{} of <{}>", line + 1, col + 1, name),
            None => String::new(),
        }
    }
}

/// Error type for JOT parsing.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The document is empty or contains only whitespace.
    #[error("No value found{0}")]
    ExpectValue(String),

    /// No literal or number starts here, or the spelling is malformed.
    #[error("Invalid value{0}")]
    InvalidValue(String),

    /// A valid value is followed by non-whitespace content.
    #[error("Unexpected content after value{0}")]
    RootNotSingular(String),

    /// The number's magnitude exceeds the representable double range.
    #[error("Number too large to represent{0}")]
    NumberTooBig(String),
}

impl ParseError {
    /// Create an error with location information.
    pub fn with_location(self, ctx: &ParseContext, line: usize, col: usize) -> Self {
        let suffix = ctx.loc_suffix(line, col);
        match self {
            ParseError::ExpectValue(_) => ParseError::ExpectValue(suffix),
            ParseError::InvalidValue(_) => ParseError::InvalidValue(suffix),
            ParseError::RootNotSingular(_) => ParseError::RootNotSingular(suffix),
            ParseError::NumberTooBig(_) => ParseError::NumberTooBig(suffix),
        }
    }
}
