use crate::length::{LengthUnit, LengthValue};
use nom::{
    IResult,
    branch::alt,
    character::complete::{alpha1, char, digit1, one_of},
    combinator::{map, map_opt, map_res, opt, recognize},
    sequence::{pair, tuple},
};

/// Parse a CSS number: optional sign, integer and/or fractional part, optional exponent.
///
/// Accepts `5`, `-1`, `+2.5`, `.5`, `1e3`, `-3.4e-2`. Values that overflow
/// to infinity are rejected.
pub fn parse_number(input: &str) -> IResult<&str, f64> {
    map_opt(
        recognize(tuple((
            opt(one_of("+-")),
            alt((
                recognize(pair(digit1, opt(pair(char('.'), digit1)))),
                recognize(pair(char('.'), digit1)),
            )),
            opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
        ))),
        |s: &str| s.parse::<f64>().ok().filter(|v| v.is_finite()),
    )(input)
}

/// Parse a unit suffix (e.g., px, em, %).
pub fn parse_unit(input: &str) -> IResult<&str, LengthUnit> {
    alt((
        map(char('%'), |_| LengthUnit::Percent),
        map_res(alpha1, |s: &str| s.parse::<LengthUnit>()),
    ))(input)
}

/// Parse a length: a number immediately followed by a unit.
///
/// A unitless number, even zero, is not a length.
pub fn parse_length(input: &str) -> IResult<&str, LengthValue> {
    let (input, (value, unit)) = pair(parse_number, parse_unit)(input)?;
    Ok((input, LengthValue::new(value, unit)))
}
