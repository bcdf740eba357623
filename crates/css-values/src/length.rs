//! CSS lengths: a number with a unit suffix.
//!
//! Absolute units convert to pixels at the CSS reference ratio of 96px per
//! inch. Relative units (font-, viewport- and percentage-based) need layout
//! context that this crate does not have, so [`LengthValue::to_px`] reports
//! them as unresolvable.

use std::fmt;
use std::str::FromStr;

use crate::error::CssValueError;
use crate::parser::parse_complete;
use crate::parser::units::parse_length;
use crate::style_value::StyleValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    /// CSS pixels.
    Px,
    /// Inches (96px).
    In,
    /// Centimeters.
    Cm,
    /// Millimeters.
    Mm,
    /// Quarter-millimeters.
    Q,
    /// Points (1/72 in).
    Pt,
    /// Picas (12pt).
    Pc,
    /// Font size of the element.
    Em,
    /// Font size of the root element.
    Rem,
    /// x-height of the element's font.
    Ex,
    /// Advance width of `0` in the element's font.
    Ch,
    /// 1% of the viewport width.
    Vw,
    /// 1% of the viewport height.
    Vh,
    /// 1% of the smaller viewport dimension.
    Vmin,
    /// 1% of the larger viewport dimension.
    Vmax,
    /// Percentage of a reference length.
    Percent,
}

impl LengthUnit {
    /// The unit suffix as written in CSS.
    pub fn as_str(&self) -> &'static str {
        match self {
            LengthUnit::Px => "px",
            LengthUnit::In => "in",
            LengthUnit::Cm => "cm",
            LengthUnit::Mm => "mm",
            LengthUnit::Q => "q",
            LengthUnit::Pt => "pt",
            LengthUnit::Pc => "pc",
            LengthUnit::Em => "em",
            LengthUnit::Rem => "rem",
            LengthUnit::Ex => "ex",
            LengthUnit::Ch => "ch",
            LengthUnit::Vw => "vw",
            LengthUnit::Vh => "vh",
            LengthUnit::Vmin => "vmin",
            LengthUnit::Vmax => "vmax",
            LengthUnit::Percent => "%",
        }
    }

    /// Pixels per unit, or `None` for relative units.
    pub fn px_per_unit(&self) -> Option<f64> {
        match self {
            LengthUnit::Px => Some(1.0),
            LengthUnit::In => Some(96.0),
            LengthUnit::Cm => Some(96.0 / 2.54),
            LengthUnit::Mm => Some(96.0 / 25.4),
            LengthUnit::Q => Some(96.0 / 101.6),
            LengthUnit::Pt => Some(96.0 / 72.0),
            LengthUnit::Pc => Some(16.0),
            _ => None,
        }
    }

    pub fn is_absolute(&self) -> bool {
        self.px_per_unit().is_some()
    }
}

impl FromStr for LengthUnit {
    type Err = CssValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "px" => Ok(LengthUnit::Px),
            "in" => Ok(LengthUnit::In),
            "cm" => Ok(LengthUnit::Cm),
            "mm" => Ok(LengthUnit::Mm),
            "q" => Ok(LengthUnit::Q),
            "pt" => Ok(LengthUnit::Pt),
            "pc" => Ok(LengthUnit::Pc),
            "em" => Ok(LengthUnit::Em),
            "rem" => Ok(LengthUnit::Rem),
            "ex" => Ok(LengthUnit::Ex),
            "ch" => Ok(LengthUnit::Ch),
            "vw" => Ok(LengthUnit::Vw),
            "vh" => Ok(LengthUnit::Vh),
            "vmin" => Ok(LengthUnit::Vmin),
            "vmax" => Ok(LengthUnit::Vmax),
            "%" => Ok(LengthUnit::Percent),
            _ => Err(CssValueError::UnknownUnit(s.to_string())),
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A simple (non-calc) length such as `1px` or `-2.5em`.
#[derive(Debug, Clone, PartialEq)]
pub struct LengthValue {
    pub value: f64,
    pub unit: LengthUnit,
    css: String,
}

impl LengthValue {
    pub fn new(value: f64, unit: LengthUnit) -> Self {
        Self {
            value,
            unit,
            css: format!("{}{}", crate::format_number(value), unit),
        }
    }

    pub fn px(value: f64) -> Self {
        Self::new(value, LengthUnit::Px)
    }

    /// Converts to CSS pixels. Returns `None` for relative units.
    pub fn to_px(&self) -> Option<f64> {
        self.unit.px_per_unit().map(|factor| self.value * factor)
    }
}

impl StyleValue for LengthValue {
    fn css_string(&self) -> &str {
        &self.css
    }
}

impl fmt::Display for LengthValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css)
    }
}

impl FromStr for LengthValue {
    type Err = CssValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_complete(parse_length, s).ok_or_else(|| CssValueError::InvalidLength(s.to_string()))
    }
}
