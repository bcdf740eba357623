//! Transform-list parsing: `"matrix(1,2,3,4,5,6) rotate(45deg)"` into components.
//!
//! The input is lowercased, split on whole-word function names from the
//! [grammar](crate::grammar), and each name/argument pair is checked and
//! turned into a [`Component`]. Any failure rejects the whole list.
//!
//! `rotate` and `rotate3d` are the only functions whose final argument
//! carries a unit: it must be an angle written with a `deg` suffix, which is
//! stripped before the generic number extraction.

use css_values::parser::arguments::{Argument, parse_arguments};

use crate::component::{Component, ComponentKind, RawValue};
use crate::error::{SyntaxError, TypedOmError};
use crate::grammar::{lookup, split_on_function_names};

/// Parses a transform list into its components, in source order.
///
/// # Examples
///
/// ```rust
/// use transform::parser::parse_transform_list;
/// use transform::component::{Component, Scale};
///
/// let components = parse_transform_list("scale(2, -1)").unwrap();
/// assert_eq!(components, vec![Component::Scale(Scale::new(2.0, -1.0))]);
///
/// assert!(parse_transform_list("rotate(45)").is_err());
/// ```
pub fn parse_transform_list(input: &str) -> Result<Vec<Component>, TypedOmError> {
    let normalized = input.trim().to_lowercase();
    let pieces = split_on_function_names(&normalized);

    let (leading, pairs) = match pieces.split_first() {
        Some((leading, pairs)) => (*leading, pairs),
        None => return Err(SyntaxError::Empty.into()),
    };
    if !leading.trim().is_empty() {
        return Err(SyntaxError::LeadingText(leading.to_string()).into());
    }
    if pairs.is_empty() {
        return Err(SyntaxError::Empty.into());
    }
    // Unreachable while the split yields an odd piece count.
    if pairs.len() % 2 != 0 {
        return Err(SyntaxError::UnpairedSegments(pairs.len()).into());
    }

    pairs
        .chunks_exact(2)
        .map(|pair| parse_component(pair[0], pair[1].trim()))
        .collect()
}

/// Builds one component from a function name and its argument text.
fn parse_component(name: &str, arguments: &str) -> Result<Component, TypedOmError> {
    let rule = lookup(name).ok_or_else(|| SyntaxError::UnknownFunction(name.to_string()))?;

    let stripped;
    let arguments = if rule.component == ComponentKind::Rotation {
        stripped = strip_angle_unit(arguments).ok_or_else(|| SyntaxError::MissingAngleUnit {
            function: name.to_string(),
            arguments: arguments.to_string(),
        })?;
        stripped.as_str()
    } else {
        arguments
    };

    let extracted = parse_arguments(rule.arg_count, rule.arg_kind, arguments).ok_or_else(|| {
        SyntaxError::BadArguments {
            function: name.to_string(),
            arguments: arguments.to_string(),
        }
    })?;

    let mut values: Vec<RawValue> = extracted
        .into_iter()
        .map(|argument| match argument {
            Argument::Number(number) => RawValue::Number(number.value),
            Argument::Length(length) => RawValue::Length(length),
        })
        .collect();

    // The angle is written last but the rotation is built angle-first.
    if rule.component == ComponentKind::Rotation {
        values.rotate_right(1);
    }

    let component = Component::from_values(rule.component, values).map_err(|err| match err {
        TypedOmError::InvalidArgument(source) => SyntaxError::Component {
            function: name.to_string(),
            source,
        }
        .into(),
        other => other,
    })?;
    log::trace!("parsed {} as {}", name, component);
    Ok(component)
}

/// Removes the `deg` suffix from the final argument of `(..., <n>deg)`.
///
/// Returns `None` unless the text ends with a digit, `deg`, optional
/// whitespace and the closing parenthesis.
fn strip_angle_unit(arguments: &str) -> Option<String> {
    let inner = arguments.strip_suffix(')')?.trim_end();
    let number = inner.strip_suffix("deg")?;
    if !number.ends_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    Some(format!("{})", number))
}
