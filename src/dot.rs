// Copyright 2024 the Ellipse Progress Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dot markers drawn at the end of the progress stroke.

use alloc::string::String;

use crate::{InvalidUnitError, Length, PropValue, Unit};

/// The color used for dots that don't name one.
pub const DEFAULT_DOT_COLOR: &str = "white";

/// A dot marker: a size and an optional color.
///
/// Parsed from a single unit value such as `"2%"`, `"5 red"` or `4.0`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "PropValue", into = "PropValue")
)]
pub struct Dot {
    /// The diameter of the dot.
    pub size: Length,
    /// The fill color, if given.
    pub color: Option<String>,
}

impl Dot {
    /// A dot with no explicit color.
    #[inline]
    pub fn new(size: impl Into<Length>) -> Dot {
        Dot {
            size: size.into(),
            color: None,
        }
    }

    /// Parse a dot from a prop value, falling back to a zero dot.
    pub fn parse_lenient(value: impl Into<PropValue>) -> Dot {
        crate::unit::parse_lenient(value.into(), "dot")
            .map(Dot::from)
            .unwrap_or_default()
    }

    /// The fill color, or [`DEFAULT_DOT_COLOR`].
    pub fn color(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_DOT_COLOR)
    }
}

impl From<Unit> for Dot {
    fn from(unit: Unit) -> Dot {
        Dot {
            size: unit.length,
            color: unit.extra,
        }
    }
}

impl From<Dot> for Unit {
    fn from(dot: Dot) -> Unit {
        Unit {
            length: dot.size,
            extra: dot.color,
        }
    }
}

impl TryFrom<PropValue> for Dot {
    type Error = InvalidUnitError;

    fn try_from(value: PropValue) -> Result<Dot, InvalidUnitError> {
        Unit::try_from(value).map(Dot::from)
    }
}

impl From<Dot> for PropValue {
    fn from(dot: Dot) -> PropValue {
        Unit::from(dot).into()
    }
}

#[cfg(feature = "schemars")]
impl schemars::JsonSchema for Dot {
    fn schema_name() -> String {
        "Dot".into()
    }

    fn json_schema(generator: &mut schemars::r#gen::SchemaGenerator) -> schemars::schema::Schema {
        PropValue::json_schema(generator)
    }
}
