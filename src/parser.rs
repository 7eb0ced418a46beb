//! JOT value parser.
//!
//! Grammar, per RFC 4627 with the composite kinds removed:
//!
//! ```text
//! value  = ws ( null / true / false / number ) ws
//! number = [ "-" ] int [ frac ] [ exp ]
//! int    = "0" / digit1-9 *digit
//! frac   = "." 1*digit
//! exp    = ( "e" / "E" ) [ "-" / "+" ] 1*digit
//! ```
//!
//! A document holds exactly one value. No separator is required before
//! trailing content is diagnosed: `nullx` parses `null` and then rejects
//! `x` as extra content, and `0123` parses `0` (a leading zero takes no
//! further digits) and rejects `123` the same way.
//!
//! Number spellings are validated against the grammar above before the
//! float conversion runs. The conversion routine is more permissive than
//! the grammar (it would accept `+1`, `.1`, or `1.` on its own), so it only
//! ever sees the grammar-validated span.

use crate::cursor::Cursor;
use crate::error::{ParseContext, ParseError, Result};
use crate::value::Value;

/// Parse a complete document: one value surrounded by optional whitespace.
pub fn parse_root(input: &str, ctx: &ParseContext) -> Result<Value> {
    let mut cursor = Cursor::new(input);

    cursor.skip_whitespace();
    let value = parse_value(&mut cursor, ctx)?;
    cursor.skip_whitespace();

    if !cursor.is_at_end() {
        let (line, col) = cursor.location();
        return Err(ParseError::RootNotSingular(String::new()).with_location(ctx, line, col));
    }

    Ok(value)
}

/// Dispatch on the first significant byte.
fn parse_value(cursor: &mut Cursor, ctx: &ParseContext) -> Result<Value> {
    match cursor.peek() {
        None => {
            let (line, col) = cursor.location();
            Err(ParseError::ExpectValue(String::new()).with_location(ctx, line, col))
        }
        Some(b'n') => parse_literal(cursor, ctx, "null", Value::Null),
        Some(b't') => parse_literal(cursor, ctx, "true", Value::Bool(true)),
        Some(b'f') => parse_literal(cursor, ctx, "false", Value::Bool(false)),
        Some(_) => parse_number(cursor, ctx),
    }
}

/// Match a fixed literal spelling byte for byte.
///
/// The cursor advances only on a full match; a wrong byte or early end of
/// input reports the position of the first mismatch.
fn parse_literal(
    cursor: &mut Cursor,
    ctx: &ParseContext,
    spelling: &str,
    value: Value,
) -> Result<Value> {
    for (i, expected) in spelling.bytes().enumerate() {
        if cursor.peek_at(i) != Some(expected) {
            return Err(invalid_at(cursor, ctx, cursor.offset() + i));
        }
    }
    cursor.advance(spelling.len());
    Ok(value)
}

/// Validate a number spelling against the grammar, then convert it.
fn parse_number(cursor: &mut Cursor, ctx: &ParseContext) -> Result<Value> {
    let start = cursor.offset();

    cursor.eat(b'-');

    // int = "0" / digit1-9 *digit
    // A leading zero takes no further digits; whatever follows is either
    // frac, exp, or trailing content for the root check to judge.
    match cursor.peek() {
        Some(b'0') => cursor.bump(),
        Some(b'1'..=b'9') => {
            cursor.bump();
            skip_digits(cursor);
        }
        _ => return Err(invalid_at(cursor, ctx, cursor.offset())),
    }

    // frac = "." 1*digit
    if cursor.eat(b'.') {
        if !matches!(cursor.peek(), Some(b'0'..=b'9')) {
            return Err(invalid_at(cursor, ctx, cursor.offset()));
        }
        skip_digits(cursor);
    }

    // exp = ( "e" / "E" ) [ "-" / "+" ] 1*digit
    if matches!(cursor.peek(), Some(b'e' | b'E')) {
        cursor.bump();
        if matches!(cursor.peek(), Some(b'+' | b'-')) {
            cursor.bump();
        }
        if !matches!(cursor.peek(), Some(b'0'..=b'9')) {
            return Err(invalid_at(cursor, ctx, cursor.offset()));
        }
        skip_digits(cursor);
    }

    let spelling = cursor.span_since(start);
    let n: f64 = spelling.parse().map_err(|_| invalid_at(cursor, ctx, start))?;

    // The grammar admits no infinity spelling, so an infinite result can
    // only mean the magnitude overflowed the double range. Underflow parses
    // to 0.0 and is fine.
    if n.is_infinite() {
        let (line, col) = cursor.location_of(start);
        return Err(ParseError::NumberTooBig(String::new()).with_location(ctx, line, col));
    }

    Ok(Value::Number(n))
}

fn skip_digits(cursor: &mut Cursor) {
    while matches!(cursor.peek(), Some(b'0'..=b'9')) {
        cursor.bump();
    }
}

fn invalid_at(cursor: &Cursor, ctx: &ParseContext, offset: usize) -> ParseError {
    let (line, col) = cursor.location_of(offset);
    ParseError::InvalidValue(String::new()).with_location(ctx, line, col)
}
