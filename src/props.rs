// Copyright 2024 the Ellipse Progress Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gauge inputs: global props and per-ring overrides.

use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use crate::{
    unit::parse_lenient, Animation, Dash, Dot, Length, PropValue, RingMetrics, RingState, Unit,
};

/// Default stroke color of the progress stroke.
pub const DEFAULT_COLOR: &str = "#3f79ff";
/// Default stroke color of the empty track.
pub const DEFAULT_EMPTY_COLOR: &str = "#e6e9f0";

/// The `stroke-linecap` of the progress stroke.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LineCap {
    /// Rounded ends.
    #[default]
    Round,
    /// Flat ends, flush with the stroke end.
    Butt,
    /// Flat ends, extended by half the stroke width.
    Square,
}

impl LineCap {
    /// The SVG attribute value.
    pub fn as_str(self) -> &'static str {
        match self {
            LineCap::Round => "round",
            LineCap::Butt => "butt",
            LineCap::Square => "square",
        }
    }
}

/// Global props of a gauge.
///
/// Every ring in [`data`](Self::data) falls back to these for the fields it
/// leaves unset. With no `data`, the gauge shows one ring built from these
/// props alone.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct GaugeProps {
    /// Width and height of the square container.
    pub size: f64,
    /// Progress in percent.
    pub progress: f64,
    /// Stroke width of the progress stroke.
    pub thickness: Unit,
    /// Stroke width of the empty track.
    pub empty_thickness: Unit,
    /// Space between stacked rings.
    pub gap: Unit,
    /// Dot marker at the end of the progress stroke.
    pub dot: Dot,
    /// Dash pattern of the empty track.
    pub dash: Dash,
    /// Rotation in degrees. `None` means -90.
    pub angle: Option<f64>,
    /// Draw half rings.
    pub half: bool,
    /// Show the empty state.
    pub no_data: bool,
    /// Show the indeterminate spinner.
    pub loading: bool,
    /// Add a determinate loading ring on top of the progress stroke.
    pub determinate: bool,
    /// Stroke color of the progress stroke.
    pub color: String,
    /// Stroke color of the empty track.
    pub empty_color: String,
    /// Line cap of the progress stroke.
    pub line: LineCap,
    /// Sweep animation.
    pub animation: Animation,
    /// Rings of a multi-ring gauge, outermost first.
    pub data: Vec<RingSpec>,
}

impl Default for GaugeProps {
    fn default() -> Self {
        GaugeProps {
            size: 200.0,
            progress: 0.0,
            thickness: Unit::new(Length::Percentage(5.0)),
            empty_thickness: Unit::new(Length::Percentage(5.0)),
            gap: Unit::from(0.0),
            dot: Dot::default(),
            dash: Dash::solid(),
            angle: None,
            half: false,
            no_data: false,
            loading: false,
            determinate: false,
            color: DEFAULT_COLOR.to_string(),
            empty_color: DEFAULT_EMPTY_COLOR.to_string(),
            line: LineCap::Round,
            animation: Animation::default(),
            data: Vec::new(),
        }
    }
}

impl GaugeProps {
    /// Default props with the given size and progress.
    pub fn new(size: f64, progress: f64) -> GaugeProps {
        GaugeProps {
            size,
            progress,
            ..GaugeProps::default()
        }
    }

    /// Set the stroke width. Malformed values leave the current one.
    #[must_use]
    pub fn with_thickness(mut self, value: impl Into<PropValue>) -> Self {
        if let Some(unit) = parse_lenient(value.into(), "thickness") {
            self.thickness = unit;
        }
        self
    }

    /// Set the empty track width. Malformed values leave the current one.
    #[must_use]
    pub fn with_empty_thickness(mut self, value: impl Into<PropValue>) -> Self {
        if let Some(unit) = parse_lenient(value.into(), "empty_thickness") {
            self.empty_thickness = unit;
        }
        self
    }

    /// Set the gap between rings. Malformed values leave the current one.
    #[must_use]
    pub fn with_gap(mut self, value: impl Into<PropValue>) -> Self {
        if let Some(unit) = parse_lenient(value.into(), "gap") {
            self.gap = unit;
        }
        self
    }

    /// Set the dot marker. Malformed values leave the current one.
    #[must_use]
    pub fn with_dot(mut self, value: impl Into<PropValue>) -> Self {
        if let Some(unit) = parse_lenient(value.into(), "dot") {
            self.dot = Dot::from(unit);
        }
        self
    }

    /// Set the dash pattern.
    #[must_use]
    pub fn with_dash(mut self, spec: &str) -> Self {
        self.dash = Dash::parse(spec);
        self
    }

    /// Set the rotation in degrees.
    #[must_use]
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = Some(angle);
        self
    }

    /// Draw half rings.
    #[must_use]
    pub fn with_half(mut self, half: bool) -> Self {
        self.half = half;
        self
    }

    /// Show the empty state.
    #[must_use]
    pub fn with_no_data(mut self, no_data: bool) -> Self {
        self.no_data = no_data;
        self
    }

    /// Show the indeterminate spinner.
    #[must_use]
    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Add the determinate loading ring.
    #[must_use]
    pub fn with_determinate(mut self, determinate: bool) -> Self {
        self.determinate = determinate;
        self
    }

    /// Set the progress stroke color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the empty track color.
    #[must_use]
    pub fn with_empty_color(mut self, color: impl Into<String>) -> Self {
        self.empty_color = color.into();
        self
    }

    /// Set the line cap.
    #[must_use]
    pub fn with_line(mut self, line: LineCap) -> Self {
        self.line = line;
        self
    }

    /// Set the animation from a spec such as `"loop 700 0"`.
    #[must_use]
    pub fn with_animation(mut self, spec: &str) -> Self {
        self.animation = Animation::parse_lenient(spec);
        self
    }

    /// Set the rings of a multi-ring gauge.
    #[must_use]
    pub fn with_data(mut self, data: impl IntoIterator<Item = RingSpec>) -> Self {
        self.data = data.into_iter().collect();
        self
    }

    /// Is this a multi-ring gauge?
    #[inline]
    pub fn is_multiple(&self) -> bool {
        !self.data.is_empty()
    }

    /// The ring described by the global props alone.
    pub fn global_ring(&self) -> ResolvedRing {
        RingSpec::new(self.progress).resolve(self)
    }

    /// All rings to render, resolved against the globals, in input order.
    pub fn resolved_rings(&self) -> Vec<ResolvedRing> {
        if self.is_multiple() {
            self.data.iter().map(|spec| spec.resolve(self)).collect()
        } else {
            let mut rings = Vec::with_capacity(1);
            rings.push(self.global_ring());
            rings
        }
    }
}

/// One ring of a multi-ring gauge. Unset fields fall back to [`GaugeProps`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct RingSpec {
    /// Progress in percent.
    pub progress: f64,
    /// Stroke width override.
    pub thickness: Option<Unit>,
    /// Empty track width override.
    pub empty_thickness: Option<Unit>,
    /// Gap override.
    pub gap: Option<Unit>,
    /// Dot override.
    pub dot: Option<Dot>,
    /// Dash override.
    pub dash: Option<Dash>,
    /// Progress color override.
    pub color: Option<String>,
    /// Empty track color override.
    pub empty_color: Option<String>,
    /// Line cap override.
    pub line: Option<LineCap>,
    /// Animation override.
    pub animation: Option<Animation>,
    /// Empty state override.
    pub no_data: Option<bool>,
    /// Spinner override.
    pub loading: Option<bool>,
}

impl RingSpec {
    /// A ring that takes everything but its progress from the globals.
    pub fn new(progress: f64) -> RingSpec {
        RingSpec {
            progress,
            ..RingSpec::default()
        }
    }

    /// Override the stroke width. Malformed values are ignored.
    #[must_use]
    pub fn with_thickness(mut self, value: impl Into<PropValue>) -> Self {
        self.thickness = parse_lenient(value.into(), "thickness").or(self.thickness);
        self
    }

    /// Override the empty track width. Malformed values are ignored.
    #[must_use]
    pub fn with_empty_thickness(mut self, value: impl Into<PropValue>) -> Self {
        self.empty_thickness = parse_lenient(value.into(), "empty_thickness").or(self.empty_thickness);
        self
    }

    /// Override the gap. Malformed values are ignored.
    #[must_use]
    pub fn with_gap(mut self, value: impl Into<PropValue>) -> Self {
        self.gap = parse_lenient(value.into(), "gap").or(self.gap);
        self
    }

    /// Override the dot. Malformed values are ignored.
    #[must_use]
    pub fn with_dot(mut self, value: impl Into<PropValue>) -> Self {
        self.dot = parse_lenient(value.into(), "dot").map(Dot::from).or(self.dot);
        self
    }

    /// Override the dash pattern.
    #[must_use]
    pub fn with_dash(mut self, spec: &str) -> Self {
        self.dash = Some(Dash::parse(spec));
        self
    }

    /// Override the progress color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Override the empty track color.
    #[must_use]
    pub fn with_empty_color(mut self, color: impl Into<String>) -> Self {
        self.empty_color = Some(color.into());
        self
    }

    /// Override the animation.
    #[must_use]
    pub fn with_animation(mut self, spec: &str) -> Self {
        self.animation = Some(Animation::parse_lenient(spec));
        self
    }

    /// Override the empty state.
    #[must_use]
    pub fn with_no_data(mut self, no_data: bool) -> Self {
        self.no_data = Some(no_data);
        self
    }

    /// Override the spinner.
    #[must_use]
    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = Some(loading);
        self
    }

    /// Fill unset fields from the globals and resolve units against the
    /// container size.
    pub fn resolve(&self, globals: &GaugeProps) -> ResolvedRing {
        let size = globals.size;
        let length = |unit: &Option<Unit>, global: &Unit| {
            unit.as_ref().unwrap_or(global).length.resolve(size)
        };
        let dot = self.dot.as_ref().unwrap_or(&globals.dot);
        ResolvedRing {
            progress: self.progress,
            thickness: length(&self.thickness, &globals.thickness),
            empty_thickness: length(&self.empty_thickness, &globals.empty_thickness),
            gap: length(&self.gap, &globals.gap),
            dot_size: dot.size.resolve(size),
            dot_color: dot.color().to_string(),
            dash: self.dash.clone().unwrap_or_else(|| globals.dash.clone()),
            color: self.color.clone().unwrap_or_else(|| globals.color.clone()),
            empty_color: self
                .empty_color
                .clone()
                .unwrap_or_else(|| globals.empty_color.clone()),
            line: self.line.unwrap_or(globals.line),
            animation: self.animation.unwrap_or(globals.animation),
            state: RingState::from_flags(
                self.no_data.unwrap_or(globals.no_data),
                self.loading.unwrap_or(globals.loading),
            ),
            half: globals.half,
            determinate: globals.determinate,
        }
    }
}

impl From<f64> for RingSpec {
    fn from(progress: f64) -> RingSpec {
        RingSpec::new(progress)
    }
}

/// A ring with every field filled and every unit resolved to user units.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedRing {
    /// Progress in percent.
    pub progress: f64,
    /// Stroke width of the progress stroke.
    pub thickness: f64,
    /// Stroke width of the empty track.
    pub empty_thickness: f64,
    /// Gap to the ring outside this one.
    pub gap: f64,
    /// Diameter of the dot.
    pub dot_size: f64,
    /// Fill color of the dot.
    pub dot_color: String,
    /// Dash pattern of the empty track.
    pub dash: Dash,
    /// Progress stroke color.
    pub color: String,
    /// Empty track color.
    pub empty_color: String,
    /// Line cap of the progress stroke.
    pub line: LineCap,
    /// Sweep animation.
    pub animation: Animation,
    /// What the ring shows.
    pub state: RingState,
    /// Half ring.
    pub half: bool,
    /// Draw the determinate loading ring.
    pub determinate: bool,
}

impl ResolvedRing {
    /// The widths this ring reserves in a stack.
    #[inline]
    pub fn metrics(&self) -> RingMetrics {
        RingMetrics::new(self.thickness, self.gap, self.dot_size)
    }
}
