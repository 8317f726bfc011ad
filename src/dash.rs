// Copyright 2024 the Ellipse Progress Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dash patterns for the empty track.

use alloc::{
    format,
    string::{String, ToString},
};
use core::{convert::Infallible, fmt, str::FromStr};

use arrayvec::ArrayVec;

/// A dash pattern.
///
/// Either a raw SVG dasharray that is passed through untouched, or a
/// *strict* pattern made of an exact number of dashes spread evenly around
/// the ring.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum Dash {
    /// A native dasharray such as `"10 10"`. Empty means a solid stroke.
    Raw(String),
    /// `strict <count> <spacing>`.
    Strict {
        /// Number of dashes around the ring.
        count: u32,
        /// Fraction of each dash cycle that is empty, in `0..=1`.
        spacing: f64,
    },
}

impl Dash {
    /// A solid stroke.
    pub const fn solid() -> Dash {
        Dash::Raw(String::new())
    }

    /// Parse a dash specification.
    ///
    /// Strict specs with a malformed count or spacing fall back to raw mode.
    ///
    /// ```
    /// use ellipse_progress::Dash;
    ///
    /// assert_eq!(Dash::parse("strict 60 0.5"), Dash::Strict { count: 60, spacing: 0.5 });
    /// assert_eq!(Dash::parse("10 10"), Dash::Raw("10 10".into()));
    /// ```
    pub fn parse(spec: &str) -> Dash {
        let tokens: ArrayVec<&str, 3> = spec.split_whitespace().take(3).collect();
        if tokens.first() != Some(&"strict") {
            return Dash::Raw(spec.to_string());
        }
        match parse_strict(&tokens[1..]) {
            Some((count, spacing)) => Dash::Strict { count, spacing },
            None => {
                tracing::debug!(spec, "malformed strict dash, passing through raw");
                Dash::Raw(spec.to_string())
            }
        }
    }

    /// Is this a strict pattern?
    #[inline]
    pub fn is_strict(&self) -> bool {
        matches!(self, Dash::Strict { .. })
    }

    /// The dash count, for strict patterns.
    pub fn count(&self) -> Option<u32> {
        match self {
            Dash::Strict { count, .. } => Some(*count),
            Dash::Raw(_) => None,
        }
    }

    /// The spacing fraction, for strict patterns.
    pub fn spacing(&self) -> Option<f64> {
        match self {
            Dash::Strict { spacing, .. } => Some(*spacing),
            Dash::Raw(_) => None,
        }
    }

    /// The `stroke-dasharray` value for a ring of the given circumference.
    ///
    /// Returns `None` for a solid stroke.
    pub fn dasharray(&self, circumference: f64) -> Option<String> {
        match self {
            Dash::Raw(raw) if raw.trim().is_empty() => None,
            Dash::Raw(raw) => Some(raw.clone()),
            Dash::Strict { count, spacing } => {
                let cycle = circumference / f64::from(*count);
                Some(format!("{} {}", cycle * (1.0 - spacing), cycle * spacing))
            }
        }
    }
}

fn parse_strict(tokens: &[&str]) -> Option<(u32, f64)> {
    let count: u32 = tokens.first()?.parse().ok()?;
    let spacing: f64 = tokens.get(1)?.parse().ok()?;
    (count > 0 && (0.0..=1.0).contains(&spacing)).then_some((count, spacing))
}

impl Default for Dash {
    fn default() -> Self {
        Dash::solid()
    }
}

impl FromStr for Dash {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Dash, Infallible> {
        Ok(Dash::parse(s))
    }
}

impl From<&str> for Dash {
    fn from(s: &str) -> Dash {
        Dash::parse(s)
    }
}

impl From<String> for Dash {
    fn from(s: String) -> Dash {
        Dash::parse(&s)
    }
}

impl From<Dash> for String {
    fn from(dash: Dash) -> String {
        match dash {
            Dash::Raw(raw) => raw,
            strict => strict.to_string(),
        }
    }
}

#[cfg(feature = "schemars")]
impl schemars::JsonSchema for Dash {
    fn schema_name() -> String {
        "Dash".into()
    }

    fn json_schema(generator: &mut schemars::r#gen::SchemaGenerator) -> schemars::schema::Schema {
        String::json_schema(generator)
    }
}

impl fmt::Display for Dash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dash::Raw(raw) => f.write_str(raw),
            Dash::Strict { count, spacing } => write!(f, "strict {count} {spacing}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict() {
        let dash = Dash::parse("strict 60 0.5");
        assert!(dash.is_strict());
        assert_eq!(dash.count(), Some(60));
        assert_eq!(dash.spacing(), Some(0.5));
        assert_eq!(dash.to_string(), "strict 60 0.5");
    }

    #[test]
    fn raw_passthrough() {
        let dash = Dash::parse("10 10");
        assert_eq!(dash, Dash::Raw("10 10".into()));
        assert_eq!(dash.count(), None);
        assert_eq!(dash.dasharray(123.0).as_deref(), Some("10 10"));
        assert_eq!(Dash::solid().dasharray(123.0), None);
    }

    #[test]
    fn malformed_strict_falls_back() {
        for spec in ["strict", "strict 60", "strict x 0.5", "strict 60 y", "strict 0 0.5", "strict 10 2"] {
            assert_eq!(Dash::parse(spec), Dash::Raw(spec.into()), "{spec}");
        }
    }

    #[test]
    fn string_conversions() {
        assert_eq!(String::from(Dash::parse("strict 60 0.5")), "strict 60 0.5");
        assert_eq!(String::from(Dash::solid()), "");
        assert_eq!(Dash::from(String::from("5 5")), Dash::Raw("5 5".into()));
    }

    #[test]
    fn strict_dasharray() {
        let dash = Dash::parse("strict 4 0.25");
        // cycle of 25: 18.75 dash, 6.25 gap
        assert_eq!(dash.dasharray(100.0).as_deref(), Some("18.75 6.25"));

        let dash = Dash::parse("strict 2 0");
        assert_eq!(dash.dasharray(10.0).as_deref(), Some("5 0"));
    }
}
