// Copyright 2024 the Ellipse Progress Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dimension values that are either absolute or relative to the container.

use alloc::string::{String, ToString};
use core::{fmt, str::FromStr};

/// A length that is either absolute or a percentage of the container size.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Length {
    /// A length in user units.
    Absolute(f64),
    /// A percentage of the container size, `5.0` meaning `5%`.
    Percentage(f64),
}

impl Length {
    /// The zero length.
    pub const ZERO: Length = Length::Absolute(0.0);

    /// Resolve against the size of the container.
    ///
    /// Percentages are always relative to the container, never to a ring.
    #[inline]
    pub fn resolve(self, container_size: f64) -> f64 {
        match self {
            Length::Absolute(v) => v,
            Length::Percentage(p) => p * container_size / 100.0,
        }
    }

    /// Is this a percentage length?
    #[inline]
    pub fn is_percentage(self) -> bool {
        matches!(self, Length::Percentage(_))
    }
}

impl Default for Length {
    fn default() -> Self {
        Length::ZERO
    }
}

impl From<f64> for Length {
    #[inline]
    fn from(v: f64) -> Length {
        Length::Absolute(v)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Absolute(v) => write!(f, "{v}"),
            Length::Percentage(p) => write!(f, "{p}%"),
        }
    }
}

/// A parsed unit value: a length, optionally followed by an extra token.
///
/// `"5% red"` parses to a 5% length with `red` as the extra token, which
/// dot markers use as their color.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "PropValue", into = "PropValue")
)]
pub struct Unit {
    /// The numeric part.
    pub length: Length,
    /// Everything after the first whitespace-separated token.
    pub extra: Option<String>,
}

impl Unit {
    /// A unit with no extra token.
    #[inline]
    pub const fn new(length: Length) -> Unit {
        Unit {
            length,
            extra: None,
        }
    }

    /// Resolve the length against the container size, keeping the extra token.
    pub fn resolve(&self, container_size: f64) -> ResolvedUnit {
        ResolvedUnit {
            size: self.length.resolve(container_size),
            extra: self.extra.clone(),
        }
    }
}

#[cfg(feature = "schemars")]
impl schemars::JsonSchema for Unit {
    fn schema_name() -> String {
        "Unit".to_string()
    }

    fn json_schema(generator: &mut schemars::r#gen::SchemaGenerator) -> schemars::schema::Schema {
        PropValue::json_schema(generator)
    }
}

impl From<f64> for Unit {
    #[inline]
    fn from(v: f64) -> Unit {
        Unit::new(Length::Absolute(v))
    }
}

impl From<Length> for Unit {
    #[inline]
    fn from(length: Length) -> Unit {
        Unit::new(length)
    }
}

impl FromStr for Unit {
    type Err = InvalidUnitError;

    fn from_str(s: &str) -> Result<Unit, InvalidUnitError> {
        let s = s.trim();
        let (head, rest) = match s.find(char::is_whitespace) {
            Some(ix) => (&s[..ix], s[ix..].trim()),
            None => (s, ""),
        };
        if head.is_empty() {
            return Err(InvalidUnitError::Empty);
        }
        let (number, percent) = match head.strip_suffix('%') {
            Some(number) => (number, true),
            None => (head, false),
        };
        let v: f64 = number
            .parse()
            .map_err(|_| InvalidUnitError::InvalidNumber(head.to_string()))?;
        if !v.is_finite() {
            return Err(InvalidUnitError::NonFinite(head.to_string()));
        }
        let length = if percent {
            Length::Percentage(v)
        } else {
            Length::Absolute(v)
        };
        Ok(Unit {
            length,
            extra: (!rest.is_empty()).then(|| rest.to_string()),
        })
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.extra {
            Some(extra) => write!(f, "{} {extra}", self.length),
            None => write!(f, "{}", self.length),
        }
    }
}

/// A raw prop value, as a host hands it over: a number or a string.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum PropValue {
    /// A plain number.
    Number(f64),
    /// A string such as `"5%"` or `"2% red"`.
    Text(String),
}

impl From<f64> for PropValue {
    #[inline]
    fn from(v: f64) -> PropValue {
        PropValue::Number(v)
    }
}

impl From<i32> for PropValue {
    #[inline]
    fn from(v: i32) -> PropValue {
        PropValue::Number(v.into())
    }
}

impl From<&str> for PropValue {
    #[inline]
    fn from(s: &str) -> PropValue {
        PropValue::Text(s.to_string())
    }
}

impl From<String> for PropValue {
    #[inline]
    fn from(s: String) -> PropValue {
        PropValue::Text(s)
    }
}

impl TryFrom<PropValue> for Unit {
    type Error = InvalidUnitError;

    fn try_from(value: PropValue) -> Result<Unit, InvalidUnitError> {
        match value {
            PropValue::Number(v) if v.is_finite() => Ok(Unit::from(v)),
            PropValue::Number(v) => Err(InvalidUnitError::NonFinite(v.to_string())),
            PropValue::Text(s) => s.parse(),
        }
    }
}

impl From<Unit> for PropValue {
    fn from(unit: Unit) -> PropValue {
        match unit {
            Unit {
                length: Length::Absolute(v),
                extra: None,
            } => PropValue::Number(v),
            unit => PropValue::Text(unit.to_string()),
        }
    }
}

/// Parse a prop value, logging and returning `None` when it is malformed.
///
/// Callers substitute their default on `None`.
pub(crate) fn parse_lenient(value: PropValue, prop: &'static str) -> Option<Unit> {
    match Unit::try_from(value) {
        Ok(unit) => Some(unit),
        Err(err) => {
            tracing::debug!(prop, %err, "ignoring malformed unit value");
            None
        }
    }
}

/// A unit value resolved against a container size.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedUnit {
    /// The size in user units.
    pub size: f64,
    /// The extra token, if any.
    pub extra: Option<String>,
}

/// Parse and resolve a prop value against the container size.
///
/// # Examples
///
/// ```
/// use ellipse_progress::resolve_unit;
///
/// let dot = resolve_unit("5% red", 600.0).unwrap();
/// assert_eq!(dot.size, 30.0);
/// assert_eq!(dot.extra.as_deref(), Some("red"));
/// assert_eq!(resolve_unit(12.0, 600.0).unwrap().size, 12.0);
/// ```
///
/// # Errors
///
/// Returns [`InvalidUnitError`] when the numeric portion can't be parsed.
pub fn resolve_unit(
    value: impl Into<PropValue>,
    container_size: f64,
) -> Result<ResolvedUnit, InvalidUnitError> {
    let unit = Unit::try_from(value.into())?;
    Ok(unit.resolve(container_size))
}

/// An error which can be returned when parsing a unit value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidUnitError {
    /// The value was empty or only whitespace.
    Empty,
    /// The numeric part was not a number.
    InvalidNumber(String),
    /// The numeric part was infinite or NaN.
    NonFinite(String),
}

impl fmt::Display for InvalidUnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidUnitError::Empty => write!(f, "Empty unit value"),
            InvalidUnitError::InvalidNumber(s) => write!(f, "Unable to parse a number from \"{s}\""),
            InvalidUnitError::NonFinite(s) => write!(f, "Unit value \"{s}\" is not finite"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidUnitError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_numbers() {
        assert_eq!(resolve_unit(5.0, 200.0).unwrap().size, 5.0);
        assert_eq!(resolve_unit("7", 200.0).unwrap().size, 7.0);
        assert_eq!(resolve_unit("-1.5", 200.0).unwrap().size, -1.5);
    }

    #[test]
    fn percentages_use_container() {
        assert_eq!(resolve_unit("2%", 600.0).unwrap().size, 12.0);
        assert_eq!(resolve_unit("0%", 600.0).unwrap().size, 0.0);
        let unit: Unit = "4%".parse().unwrap();
        assert!(unit.length.is_percentage());
        assert_eq!(unit.resolve(600.0).size, 4.0 * 600.0 / 100.0);
    }

    #[test]
    fn extra_token() {
        let r = resolve_unit("5% red", 600.0).unwrap();
        assert_eq!(r.size, 30.0);
        assert_eq!(r.extra.as_deref(), Some("red"));

        let r = resolve_unit("5 red", 600.0).unwrap();
        assert_eq!(r.size, 5.0);
        assert_eq!(r.extra.as_deref(), Some("red"));

        let r = resolve_unit("  3   rgb(1, 2, 3) ", 100.0).unwrap();
        assert_eq!(r.size, 3.0);
        assert_eq!(r.extra.as_deref(), Some("rgb(1, 2, 3)"));
    }

    #[test]
    fn malformed() {
        assert_eq!(resolve_unit("", 10.0), Err(InvalidUnitError::Empty));
        assert_eq!(resolve_unit("   ", 10.0), Err(InvalidUnitError::Empty));
        assert_eq!(
            resolve_unit("abc%", 10.0),
            Err(InvalidUnitError::InvalidNumber("abc%".into()))
        );
        assert!(matches!(
            resolve_unit("inf", 10.0),
            Err(InvalidUnitError::NonFinite(_))
        ));
        assert!(resolve_unit(f64::NAN, 10.0).is_err());
        assert_eq!(parse_lenient("px".into(), "thickness"), None);
    }

    #[test]
    fn display() {
        let unit: Unit = "2.5% white".parse().unwrap();
        assert_eq!(unit.to_string(), "2.5% white");
        assert_eq!(PropValue::from(Unit::from(4.0)), PropValue::Number(4.0));
        assert_eq!(
            PropValue::from(unit),
            PropValue::Text("2.5% white".into())
        );
    }
}
