//! Tokenizer primitives for typed CSS values.
//!
//! ## Submodules
//!
//! - [`units`]: numbers, unit suffixes and lengths
//! - [`arguments`]: parenthesized, comma-separated argument lists

pub mod arguments;
pub mod units;

use nom::IResult;

/// Runs `parser` over the trimmed input and succeeds only if it consumes all of it.
pub fn parse_complete<'a, O>(
    mut parser: impl FnMut(&'a str) -> IResult<&'a str, O>,
    input: &'a str,
) -> Option<O> {
    match parser(input.trim()) {
        Ok((remaining, value)) if remaining.is_empty() => Some(value),
        _ => None,
    }
}
