//! Plain CSS numbers.

use std::fmt;
use std::str::FromStr;

use crate::error::CssValueError;
use crate::parser::parse_complete;
use crate::parser::units::parse_number;
use crate::style_value::StyleValue;

/// A unitless CSS number such as `2`, `-1` or `0.5`.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberValue {
    pub value: f64,
    css: String,
}

impl NumberValue {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            css: crate::format_number(value),
        }
    }
}

impl StyleValue for NumberValue {
    fn css_string(&self) -> &str {
        &self.css
    }
}

impl fmt::Display for NumberValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css)
    }
}

impl FromStr for NumberValue {
    type Err = CssValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_complete(parse_number, s)
            .map(Self::new)
            .ok_or_else(|| CssValueError::InvalidNumber(s.to_string()))
    }
}

impl From<f64> for NumberValue {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}
