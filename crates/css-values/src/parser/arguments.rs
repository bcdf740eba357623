//! Parenthesized argument lists such as `(1px, 2px)` or `( 0 , 1 , 2 )`.
//!
//! Every argument in a list has the same [`ArgumentKind`]. Whitespace is
//! tolerated around the parentheses and on both sides of each comma.

use crate::length::LengthValue;
use crate::number::NumberValue;
use crate::parser::parse_complete;
use crate::parser::units::{parse_length, parse_number};
use nom::{
    IResult,
    character::complete::{char, multispace0},
    combinator::map,
    multi::many0,
    sequence::{preceded, tuple},
};

/// The value type expected for every argument of a function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentKind {
    Number,
    Length,
}

/// One extracted argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    Number(NumberValue),
    Length(LengthValue),
}

impl Argument {
    pub fn kind(&self) -> ArgumentKind {
        match self {
            Argument::Number(_) => ArgumentKind::Number,
            Argument::Length(_) => ArgumentKind::Length,
        }
    }

    /// The raw magnitude of a number argument.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Argument::Number(number) => Some(number.value),
            Argument::Length(_) => None,
        }
    }

    pub fn as_length(&self) -> Option<&LengthValue> {
        match self {
            Argument::Length(length) => Some(length),
            Argument::Number(_) => None,
        }
    }
}

/// Parse a single argument of the given kind.
pub fn parse_argument(kind: ArgumentKind, input: &str) -> IResult<&str, Argument> {
    match kind {
        ArgumentKind::Number => map(parse_number, |v| Argument::Number(NumberValue::new(v)))(input),
        ArgumentKind::Length => map(parse_length, Argument::Length)(input),
    }
}

/// Parse `( arg [, arg]* )` with surrounding whitespace.
pub fn parse_argument_list<'a>(
    kind: ArgumentKind,
    input: &'a str,
) -> IResult<&'a str, Vec<Argument>> {
    let (input, _) = tuple((multispace0, char('('), multispace0))(input)?;
    let (input, first) = parse_argument(kind, input)?;
    let (input, rest) = many0(preceded(
        tuple((multispace0, char(','), multispace0)),
        |i: &'a str| parse_argument(kind, i),
    ))(input)?;
    let (input, _) = tuple((multispace0, char(')'), multispace0))(input)?;

    let mut arguments = vec![first];
    arguments.extend(rest);
    Ok((input, arguments))
}

/// Extract exactly `count` arguments of `kind` from a parenthesized argument string.
///
/// Returns `None` when the text is not a well-formed list, when any argument
/// has the wrong kind, or when the list has a different length.
pub fn parse_arguments(count: usize, kind: ArgumentKind, input: &str) -> Option<Vec<Argument>> {
    parse_complete(|i| parse_argument_list(kind, i), input).filter(|args| args.len() == count)
}
