//! The fixed table of transform functions the parser recognizes.
//!
//! Names that share a prefix (`rotate`/`rotate3d`, `scale`/`scale3d`, ...)
//! are listed longest first, and a name only counts when it stands as a
//! whole word: `rotatex` is not `rotate` followed by `x`.

use css_values::parser::arguments::ArgumentKind;
use nom::{IResult, branch::alt, bytes::complete::tag, combinator::map_opt};

use crate::component::ComponentKind;

/// One function of the transform grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrammarRule {
    pub name: &'static str,
    pub component: ComponentKind,
    pub arg_count: usize,
    pub arg_kind: ArgumentKind,
}

const fn rule(
    name: &'static str,
    component: ComponentKind,
    arg_count: usize,
    arg_kind: ArgumentKind,
) -> GrammarRule {
    GrammarRule {
        name,
        component,
        arg_count,
        arg_kind,
    }
}

pub const GRAMMAR: [GrammarRule; 10] = [
    rule("matrix3d", ComponentKind::Matrix, 16, ArgumentKind::Number),
    rule("matrix", ComponentKind::Matrix, 6, ArgumentKind::Number),
    rule("perspective", ComponentKind::Perspective, 1, ArgumentKind::Length),
    rule("rotate3d", ComponentKind::Rotation, 4, ArgumentKind::Number),
    rule("rotate", ComponentKind::Rotation, 1, ArgumentKind::Number),
    rule("scale3d", ComponentKind::Scale, 3, ArgumentKind::Number),
    rule("scale", ComponentKind::Scale, 2, ArgumentKind::Number),
    rule("skew", ComponentKind::Skew, 2, ArgumentKind::Number),
    rule("translate3d", ComponentKind::Translation, 3, ArgumentKind::Length),
    rule("translate", ComponentKind::Translation, 2, ArgumentKind::Length),
];

/// Looks up a function by its exact (lowercase) name.
pub fn lookup(name: &str) -> Option<&'static GrammarRule> {
    GRAMMAR.iter().find(|rule| rule.name == name)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

fn function_name(input: &str) -> IResult<&str, &str> {
    alt((
        tag("matrix3d"),
        tag("matrix"),
        tag("perspective"),
        tag("rotate3d"),
        tag("rotate"),
        tag("scale3d"),
        tag("scale"),
        tag("skew"),
        tag("translate3d"),
        tag("translate"),
    ))(input)
}

/// Parse a recognized function name at the start of `input`.
///
/// Fails if the name runs on into further identifier characters.
pub fn parse_function_name(input: &str) -> IResult<&str, &'static GrammarRule> {
    let (remaining, rule) = map_opt(function_name, lookup)(input)?;

    if remaining.starts_with(is_word_char) {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Tag,
        )));
    }
    Ok((remaining, rule))
}

/// Splits `input` on whole-word function names, keeping the names.
///
/// The result alternates like a capturing split: the text before the first
/// name, then name, following text, name, following text, ...
pub fn split_on_function_names(input: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut segment_start = 0;
    let mut previous: Option<char> = None;

    let mut chars = input.char_indices();
    while let Some((i, c)) = chars.next() {
        let at_word_start = !previous.is_some_and(is_word_char);
        previous = Some(c);
        if !at_word_start {
            continue;
        }
        let Ok((remaining, _)) = parse_function_name(&input[i..]) else {
            continue;
        };
        let end = input.len() - remaining.len();
        pieces.push(&input[segment_start..i]);
        pieces.push(&input[i..end]);
        segment_start = end;

        // Resume scanning after the name.
        while chars.as_str().len() > remaining.len() {
            if let Some((_, skipped)) = chars.next() {
                previous = Some(skipped);
            }
        }
    }
    pieces.push(&input[segment_start..]);
    pieces
}
