// Copyright 2024 the Ellipse Progress Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG attributes, classes and markup for resolved rings.

use alloc::{
    borrow::ToOwned,
    string::{String, ToString},
    vec,
    vec::Vec,
};
use core::fmt::{self, Write};

use crate::{animation::LOADING_CLASS, ResolvedRing, RingGeometry, RingState};

/// Class of the progress stroke.
pub const PROGRESS_CLASS: &str = "ep-circle--progress";
/// Class of the empty track.
pub const EMPTY_CLASS: &str = "ep-circle--empty";
/// Class added to the empty track in the no-data state.
pub const NO_DATA_CLASS: &str = "ep-circle--nodata";
/// Class of the progress stroke of a half ring.
pub const HALF_PROGRESS_CLASS: &str = "ep-half-circle--progress";
/// Class of the empty track of a half ring.
pub const HALF_EMPTY_CLASS: &str = "ep-half-circle--empty";
/// Class of the determinate loading ring.
pub const DETERMINATE_CLASS: &str = "ep-circle--determinate";
/// Class of the dot marker.
pub const DOT_CLASS: &str = "ep-circle--dot";

/// The SVG element a shape renders as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    /// `<circle>`
    Circle,
    /// `<path>`
    Path,
}

impl ShapeKind {
    fn tag(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Path => "path",
        }
    }
}

/// Everything a host needs to draw one SVG shape.
///
/// Attributes and style declarations keep insertion order, so rendering is
/// stable.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeAttributes {
    /// The element kind.
    pub kind: ShapeKind,
    /// Class tokens.
    pub classes: Vec<String>,
    /// `(name, value)` attribute pairs.
    pub attributes: Vec<(&'static str, String)>,
    /// `(property, value)` inline style declarations.
    pub style: Vec<(&'static str, String)>,
}

impl ShapeAttributes {
    fn new(kind: ShapeKind) -> ShapeAttributes {
        ShapeAttributes {
            kind,
            classes: Vec::new(),
            attributes: Vec::new(),
            style: Vec::new(),
        }
    }

    fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    fn attr(mut self, name: &'static str, value: impl ToString) -> Self {
        self.attributes.push((name, value.to_string()));
        self
    }

    fn style(mut self, property: &'static str, value: impl ToString) -> Self {
        self.style.push((property, value.to_string()));
        self
    }

    /// The value of an attribute.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// The value of an inline style property.
    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Does the shape carry this class token?
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Write the shape as a self-closing SVG element.
    pub fn write_svg(&self, out: &mut impl Write) -> fmt::Result {
        write!(out, "<{}", self.kind.tag())?;
        if !self.classes.is_empty() {
            out.write_str(" class=\"")?;
            for (i, class) in self.classes.iter().enumerate() {
                if i > 0 {
                    out.write_char(' ')?;
                }
                write_escaped(out, class)?;
            }
            out.write_char('"')?;
        }
        for (name, value) in &self.attributes {
            write!(out, " {name}=\"")?;
            write_escaped(out, value)?;
            out.write_char('"')?;
        }
        if !self.style.is_empty() {
            out.write_str(" style=\"")?;
            for (property, value) in &self.style {
                write!(out, "{property}:")?;
                write_escaped(out, value)?;
                out.write_char(';')?;
            }
            out.write_char('"')?;
        }
        out.write_str("/>")
    }

    /// The shape as a self-closing SVG element.
    pub fn to_svg(&self) -> String {
        let mut result = String::new();
        self.write_svg(&mut result).unwrap();
        result
    }
}

pub(crate) fn write_escaped(out: &mut impl Write, s: &str) -> fmt::Result {
    for c in s.chars() {
        match c {
            '"' => out.write_str("&quot;")?,
            '&' => out.write_str("&amp;")?,
            '<' => out.write_str("&lt;")?,
            '>' => out.write_str("&gt;")?,
            c => out.write_char(c)?,
        }
    }
    Ok(())
}

/// The shapes drawn for one ring.
#[derive(Clone, Debug, PartialEq)]
pub struct RingView {
    /// The empty track, drawn first.
    pub empty: ShapeAttributes,
    /// The progress stroke.
    pub progress: ShapeAttributes,
    /// The determinate loading ring, when enabled.
    pub determinate: Option<ShapeAttributes>,
    /// The dot marker, when it has a size and the ring shows progress.
    pub dot: Option<ShapeAttributes>,
}

impl RingView {
    /// Map a resolved ring and its geometry to SVG shapes.
    pub fn new(ring: &ResolvedRing, geometry: &RingGeometry) -> RingView {
        let shape = base_shape(geometry);
        let arc_length = geometry.arc_length();

        let mut empty = shape.clone();
        if geometry.half {
            empty = empty.class(HALF_EMPTY_CLASS);
        } else {
            empty = empty.class(EMPTY_CLASS);
        }
        if geometry.state == RingState::NoData {
            empty = empty.class(NO_DATA_CLASS);
        }
        empty = empty
            .attr("stroke", &ring.empty_color)
            .attr("stroke-width", ring.empty_thickness)
            .attr("fill", "transparent");
        if let Some(dasharray) = ring.dash.dasharray(arc_length) {
            empty = empty.attr("stroke-dasharray", dasharray);
        }

        let mut progress = shape.clone();
        if geometry.half {
            progress = progress.class(HALF_PROGRESS_CLASS);
        }
        progress = progress.class(PROGRESS_CLASS);
        match geometry.state {
            RingState::Progress => progress = progress.class(ring.animation.class()),
            RingState::Loading => progress = progress.class(LOADING_CLASS),
            RingState::NoData => {}
        }
        progress = stroke(progress, ring, arc_length, geometry.progress_offset);
        if geometry.state == RingState::Progress {
            progress = progress
                .style("animation-duration", format_ms(ring.animation.duration_ms))
                .style("animation-delay", format_ms(ring.animation.delay_ms));
        }

        let determinate = ring.determinate.then(|| {
            let offset = arc_length - (geometry.progress / 100.0) * arc_length;
            stroke(shape.class(DETERMINATE_CLASS), ring, arc_length, offset)
        });

        let dot = (ring.dot_size > 0.0 && geometry.state == RingState::Progress).then(|| {
            let (cx, cy) = geometry.dot_center();
            ShapeAttributes::new(ShapeKind::Circle)
                .class(DOT_CLASS)
                .attr("r", ring.dot_size / 2.0)
                .attr("cx", cx)
                .attr("cy", cy)
                .attr("fill", &ring.dot_color)
        });

        RingView {
            empty,
            progress,
            determinate,
            dot,
        }
    }

    /// All shapes in paint order.
    pub fn shapes(&self) -> impl Iterator<Item = &ShapeAttributes> {
        [Some(&self.empty), Some(&self.progress)]
            .into_iter()
            .chain([self.determinate.as_ref(), self.dot.as_ref()])
            .flatten()
    }
}

fn base_shape(geometry: &RingGeometry) -> ShapeAttributes {
    match geometry.path() {
        Some(d) => ShapeAttributes::new(ShapeKind::Path).attr("d", d),
        None => {
            let position = geometry.position();
            ShapeAttributes::new(ShapeKind::Circle)
                .attr("r", geometry.radius)
                .attr("cx", position)
                .attr("cy", position)
        }
    }
}

// Shared by the progress stroke and the determinate ring.
fn stroke(shape: ShapeAttributes, ring: &ResolvedRing, arc_length: f64, offset: f64) -> ShapeAttributes {
    shape
        .attr("stroke", &ring.color)
        .attr("stroke-width", ring.thickness)
        .attr("fill", "transparent")
        .attr("stroke-linecap", ring.line.as_str())
        .attr("stroke-dasharray", arc_length)
        .attr("stroke-dashoffset", offset)
        .style("stroke-dashoffset", offset)
}

fn format_ms(ms: f64) -> String {
    let mut s = ms.to_string();
    s.push_str("ms");
    s
}

/// Classes of the outer `<svg>` element.
pub(crate) fn svg_classes(half: bool) -> Vec<String> {
    if half {
        vec!["ep-svg".to_owned(), "ep-svg--half".to_owned()]
    } else {
        vec!["ep-svg".to_owned()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{compute_ring_geometry, GaugeProps, RingSpec};
    use std::f64::consts::PI;

    fn ring_view(props: &GaugeProps) -> (RingGeometry, RingView) {
        let ring = props.global_ring();
        let geometry = RingGeometry::new(
            props.size,
            crate::single_ring_radius(props.size, ring.thickness, ring.empty_thickness, ring.dot_size),
            ring.progress,
            ring.half,
            ring.state,
        );
        let view = RingView::new(&ring, &geometry);
        (geometry, view)
    }

    #[test]
    fn circle_attributes() {
        let props = GaugeProps::new(200.0, 60.0).with_thickness(4).with_empty_thickness(4);
        let (geometry, view) = ring_view(&props);
        assert_eq!(geometry, compute_ring_geometry(200.0, 4.0, 4.0, 0.0, 60.0, false));

        for shape in [&view.empty, &view.progress] {
            assert_eq!(shape.kind, ShapeKind::Circle);
            assert_eq!(shape.get("cx"), Some("100"));
            assert_eq!(shape.get("cy"), Some("100"));
            assert_eq!(shape.get("r"), Some("98"));
            assert_eq!(shape.get("fill"), Some("transparent"));
        }
        let offset = geometry.progress_offset.to_string();
        assert_eq!(view.progress.get("stroke-dashoffset"), Some(offset.as_str()));
        assert_eq!(view.progress.style_value("stroke-dashoffset"), Some(offset.as_str()));
        assert!(view.progress.has_class(PROGRESS_CLASS));
        assert!(view.progress.has_class("animation__default"));
        assert!(view.empty.has_class(EMPTY_CLASS));
        assert_eq!(view.empty.get("stroke-dasharray"), None);
        assert_eq!(view.determinate, None);
        assert_eq!(view.dot, None);
    }

    #[test]
    fn half_paths() {
        let props = GaugeProps::new(200.0, 50.0)
            .with_thickness(10)
            .with_empty_thickness(10)
            .with_half(true);
        let (geometry, view) = ring_view(&props);
        let path = " M 5, 100 a 95,95 0 1,1 190,0";
        assert_eq!(view.progress.kind, ShapeKind::Path);
        assert_eq!(view.progress.get("d"), Some(path));
        assert_eq!(view.empty.get("d"), Some(path));
        assert!(view.progress.has_class(HALF_PROGRESS_CLASS));
        assert!(view.progress.has_class(PROGRESS_CLASS));
        assert!(view.empty.has_class(HALF_EMPTY_CLASS));
        let offset = geometry.progress_offset.to_string();
        assert_eq!(view.progress.style_value("stroke-dashoffset"), Some(offset.as_str()));
    }

    #[test]
    fn dash_on_empty_track() {
        let props = GaugeProps::new(200.0, 50.0).with_dash("10 10");
        let (_, view) = ring_view(&props);
        assert_eq!(view.empty.get("stroke-dasharray"), Some("10 10"));

        let props = GaugeProps::new(200.0, 50.0).with_dash("strict 60 0.5");
        let (geometry, view) = ring_view(&props);
        let cycle = geometry.circumference / 60.0;
        let expected = format!("{} {}", cycle * 0.5, cycle * 0.5);
        assert_eq!(view.empty.get("stroke-dasharray"), Some(expected.as_str()));
    }

    #[test]
    fn no_data_state() {
        let props = GaugeProps::new(200.0, 60.0).with_no_data(true);
        let (geometry, view) = ring_view(&props);
        // default thickness is 5% of the container
        assert_eq!(geometry.circumference, 2.0 * PI * (200.0 / 2.0 - 10.0 / 2.0));
        assert_eq!(geometry.progress_offset, geometry.circumference);
        let circumference = geometry.circumference.to_string();
        assert_eq!(
            view.progress.style_value("stroke-dashoffset"),
            Some(circumference.as_str())
        );
        assert!(view.empty.has_class(NO_DATA_CLASS));
        assert!(!view.progress.has_class("animation__default"));
        assert!(!view.progress.has_class(LOADING_CLASS));
    }

    #[test]
    fn loading_state() {
        let props = GaugeProps::new(200.0, 60.0).with_loading(true);
        let (geometry, view) = ring_view(&props);
        assert_eq!(geometry.circumference, 2.0 * PI * (200.0 / 2.0 - 10.0 / 2.0));
        let circumference = geometry.circumference.to_string();
        assert_eq!(
            view.progress.style_value("stroke-dashoffset"),
            Some(circumference.as_str())
        );
        assert!(view.progress.has_class(LOADING_CLASS));
        assert!(!view.empty.has_class(NO_DATA_CLASS));
    }

    #[test]
    fn determinate_matches_progress_stroke() {
        let props = GaugeProps::new(200.0, 60.0)
            .with_color("gray")
            .with_thickness(15)
            .with_determinate(true);
        let (_, view) = ring_view(&props);
        let determinate = view.determinate.unwrap();
        assert!(determinate.has_class(DETERMINATE_CLASS));
        assert_eq!(determinate.get("stroke"), Some("gray"));
        assert_eq!(determinate.get("stroke-width"), Some("15"));
        assert_eq!(determinate.get("fill"), Some("transparent"));
        for name in ["stroke", "stroke-width", "fill", "stroke-dashoffset"] {
            assert_eq!(determinate.get(name), view.progress.get(name), "{name}");
        }
        assert!(!determinate.has_class("animation__default"));
    }

    #[test]
    fn dot_marker() {
        let props = GaugeProps::new(200.0, 25.0).with_dot("10 red");
        let (_, view) = ring_view(&props);
        let dot = view.dot.unwrap();
        assert_eq!(dot.get("r"), Some("5"));
        assert_eq!(dot.get("fill"), Some("red"));

        let ring = RingSpec::new(25.0).with_dot("10 red").with_no_data(true).resolve(&props);
        let geometry = RingGeometry::new(200.0, 95.0, 25.0, false, ring.state);
        assert_eq!(RingView::new(&ring, &geometry).dot, None);
    }

    #[test]
    fn svg_markup() {
        let props = GaugeProps::new(200.0, 50.0)
            .with_thickness(4)
            .with_empty_thickness(4)
            .with_empty_color("\"x\"");
        let (_, view) = ring_view(&props);
        assert_eq!(
            view.empty.to_svg(),
            "<circle class=\"ep-circle--empty\" r=\"98\" cx=\"100\" cy=\"100\" \
             stroke=\"&quot;x&quot;\" stroke-width=\"4\" fill=\"transparent\"/>"
        );
        assert!(view.progress.to_svg().contains("style=\"stroke-dashoffset:"));
        assert_eq!(view.shapes().count(), 2);
    }
}
