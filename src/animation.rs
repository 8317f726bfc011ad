// Copyright 2024 the Ellipse Progress Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Progress sweep animation settings.

use alloc::{
    format,
    string::{String, ToString},
};
use core::{fmt, str::FromStr};

/// The class token used by indeterminate loading rings.
pub const LOADING_CLASS: &str = "animation__loading";

/// The kind of sweep animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AnimationKind {
    /// Sweep from zero to the progress value.
    #[default]
    Default,
    /// Sweep from the full ring back to the progress value.
    Rs,
    /// Sweep around once before settling.
    Loop,
    /// Sweep counter-clockwise.
    Reverse,
    /// Overshoot and bounce back.
    Bounce,
}

impl AnimationKind {
    /// The name used in specs and class tokens.
    pub fn name(self) -> &'static str {
        match self {
            AnimationKind::Default => "default",
            AnimationKind::Rs => "rs",
            AnimationKind::Loop => "loop",
            AnimationKind::Reverse => "reverse",
            AnimationKind::Bounce => "bounce",
        }
    }
}

impl FromStr for AnimationKind {
    type Err = ParseAnimationError;

    fn from_str(s: &str) -> Result<Self, ParseAnimationError> {
        match s {
            "default" => Ok(AnimationKind::Default),
            "rs" => Ok(AnimationKind::Rs),
            "loop" => Ok(AnimationKind::Loop),
            "reverse" => Ok(AnimationKind::Reverse),
            "bounce" => Ok(AnimationKind::Bounce),
            _ => Err(ParseAnimationError::UnknownKind(s.to_string())),
        }
    }
}

/// Animation settings, parsed from `"<kind> [duration] [delay]"`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Animation {
    /// The kind of sweep.
    pub kind: AnimationKind,
    /// Duration in milliseconds.
    pub duration_ms: f64,
    /// Delay before the sweep starts, in milliseconds.
    pub delay_ms: f64,
}

impl Animation {
    /// Default duration in milliseconds.
    pub const DEFAULT_DURATION_MS: f64 = 1000.0;
    /// Default delay in milliseconds.
    pub const DEFAULT_DELAY_MS: f64 = 400.0;

    /// A new animation.
    pub const fn new(kind: AnimationKind, duration_ms: f64, delay_ms: f64) -> Animation {
        Animation {
            kind,
            duration_ms,
            delay_ms,
        }
    }

    /// Parse an animation spec, using the default animation when malformed.
    pub fn parse_lenient(spec: &str) -> Animation {
        spec.parse().unwrap_or_else(|err: ParseAnimationError| {
            tracing::debug!(spec, %err, "ignoring malformed animation");
            Animation::default()
        })
    }

    /// The class token applied to an animated progress stroke.
    pub fn class(&self) -> String {
        format!("animation__{}", self.kind.name())
    }
}

impl Default for Animation {
    fn default() -> Self {
        Animation::new(
            AnimationKind::Default,
            Self::DEFAULT_DURATION_MS,
            Self::DEFAULT_DELAY_MS,
        )
    }
}

impl FromStr for Animation {
    type Err = ParseAnimationError;

    fn from_str(s: &str) -> Result<Animation, ParseAnimationError> {
        let mut tokens = s.split_whitespace();
        let kind = match tokens.next() {
            Some(kind) => kind.parse()?,
            None => AnimationKind::Default,
        };
        let duration_ms = parse_timing(tokens.next(), Self::DEFAULT_DURATION_MS)?;
        let delay_ms = parse_timing(tokens.next(), Self::DEFAULT_DELAY_MS)?;
        Ok(Animation::new(kind, duration_ms, delay_ms))
    }
}

impl TryFrom<String> for Animation {
    type Error = ParseAnimationError;

    fn try_from(s: String) -> Result<Animation, ParseAnimationError> {
        s.parse()
    }
}

impl From<Animation> for String {
    fn from(animation: Animation) -> String {
        animation.to_string()
    }
}

#[cfg(feature = "schemars")]
impl schemars::JsonSchema for Animation {
    fn schema_name() -> String {
        "Animation".into()
    }

    fn json_schema(generator: &mut schemars::r#gen::SchemaGenerator) -> schemars::schema::Schema {
        String::json_schema(generator)
    }
}

fn parse_timing(token: Option<&str>, default: f64) -> Result<f64, ParseAnimationError> {
    let Some(token) = token else {
        return Ok(default);
    };
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(ParseAnimationError::InvalidTiming(token.to_string())),
    }
}

impl fmt::Display for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.kind.name(),
            self.duration_ms,
            self.delay_ms
        )
    }
}

/// An error which can be returned when parsing an animation spec.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseAnimationError {
    /// The first token is not a known animation kind.
    UnknownKind(String),
    /// A duration or delay is not a non-negative number.
    InvalidTiming(String),
}

impl fmt::Display for ParseAnimationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAnimationError::UnknownKind(kind) => write!(f, "Unknown animation \"{kind}\""),
            ParseAnimationError::InvalidTiming(t) => write!(f, "Invalid animation timing \"{t}\""),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseAnimationError {}
