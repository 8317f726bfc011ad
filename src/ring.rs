// Copyright 2024 the Ellipse Progress Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry of a single progress ring.

use alloc::{format, string::String};
use core::f64::consts::PI;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// What a ring is currently showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RingState {
    /// The stroke reveals `progress` percent of the ring.
    #[default]
    Progress,
    /// There is no value to show. The stroke is fully hidden.
    NoData,
    /// Indeterminate spinner. The offset is driven by the animation.
    Loading,
}

impl RingState {
    /// The state for the given flags. No-data wins over loading.
    pub fn from_flags(no_data: bool, loading: bool) -> RingState {
        if no_data {
            RingState::NoData
        } else if loading {
            RingState::Loading
        } else {
            RingState::Progress
        }
    }
}

/// Radius of a lone ring in a container of the given size.
///
/// The widest of the stroke, the empty track and the dot decides how far the
/// ring sits from the container edge. Never negative.
pub fn single_ring_radius(size: f64, thickness: f64, empty_thickness: f64, dot_size: f64) -> f64 {
    let widest = thickness.max(empty_thickness).max(dot_size);
    clamp_radius(size / 2.0 - widest / 2.0)
}

pub(crate) fn clamp_radius(radius: f64) -> f64 {
    if radius < 0.0 {
        tracing::debug!(radius, "ring does not fit, clamping radius to zero");
        0.0
    } else {
        radius
    }
}

/// Compute the geometry of a lone ring in the [`RingState::Progress`] state.
///
/// ```
/// use ellipse_progress::compute_ring_geometry;
/// use std::f64::consts::PI;
///
/// let ring = compute_ring_geometry(200.0, 4.0, 4.0, 0.0, 60.0, false);
/// assert_eq!(ring.radius, 98.0);
/// assert_eq!(ring.circumference, 98.0 * 2.0 * PI);
/// ```
pub fn compute_ring_geometry(
    size: f64,
    thickness: f64,
    empty_thickness: f64,
    dot_size: f64,
    progress: f64,
    half: bool,
) -> RingGeometry {
    let radius = single_ring_radius(size, thickness, empty_thickness, dot_size);
    RingGeometry::new(size, radius, progress, half, RingState::Progress)
}

/// Resolved numeric geometry of one ring.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RingGeometry {
    /// Size of the square container.
    pub size: f64,
    /// Radius of the stroke centerline.
    pub radius: f64,
    /// Whether this is a half ring.
    pub half: bool,
    /// Circumference of the full circle, even for half rings.
    pub circumference: f64,
    /// Progress in percent. Not clamped.
    pub progress: f64,
    /// The `stroke-dashoffset` of the progress stroke.
    pub progress_offset: f64,
    /// The state the offset was computed for.
    pub state: RingState,
}

impl RingGeometry {
    /// Geometry for a ring of known radius.
    ///
    /// A negative radius is clamped to zero.
    pub fn new(size: f64, radius: f64, progress: f64, half: bool, state: RingState) -> RingGeometry {
        let radius = clamp_radius(radius);
        let circumference = radius * 2.0 * PI;
        let arc_length = if half {
            circumference / 2.0
        } else {
            circumference
        };
        let progress_offset = match state {
            RingState::Progress => arc_length - (progress / 100.0) * arc_length,
            RingState::NoData | RingState::Loading => arc_length,
        };
        RingGeometry {
            size,
            radius,
            half,
            circumference,
            progress,
            progress_offset,
            state,
        }
    }

    /// The length of the drawn arc: the full circumference, or half of it.
    #[inline]
    pub fn arc_length(&self) -> f64 {
        if self.half {
            self.circumference / 2.0
        } else {
            self.circumference
        }
    }

    /// For circles, the `cx`/`cy` coordinate. For half rings, the x
    /// coordinate where the arc starts.
    #[inline]
    pub fn position(&self) -> f64 {
        if self.half {
            self.size / 2.0 - self.radius
        } else {
            self.size / 2.0
        }
    }

    /// The SVG path of a half ring, `None` for full rings.
    ///
    /// The format, spacing included, is fixed.
    pub fn path(&self) -> Option<String> {
        self.half.then(|| {
            let r = self.radius;
            format!(
                " M {}, {} a {},{} 0 1,1 {},0",
                self.position(),
                self.size / 2.0,
                r,
                r,
                r * 2.0
            )
        })
    }

    /// Degrees swept by the progress stroke.
    pub fn dot_angle(&self) -> f64 {
        let sweep = if self.half { 180.0 } else { 360.0 };
        self.progress / 100.0 * sweep
    }

    /// Center of the dot marker in unrotated SVG coordinates.
    ///
    /// Full rings start at the 3 o'clock point, half rings at the left end of
    /// the arc. Both sweep clockwise.
    pub fn dot_center(&self) -> (f64, f64) {
        let c = self.size / 2.0;
        let start = if self.half { PI } else { 0.0 };
        let (sin, cos) = (start + self.dot_angle().to_radians()).sin_cos();
        (c + self.radius * cos, c + self.radius * sin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_approx_eq(x: f64, y: f64) {
        assert!((x - y).abs() < 1e-9, "{x} != {y}");
    }

    #[test]
    fn full_ring_offset() {
        let (size, thickness, progress) = (200.0, 4.0, 60.0);
        let ring = compute_ring_geometry(size, thickness, thickness, 0.0, progress, false);

        let radius = size / 2.0 - thickness / 2.0;
        let circumference = radius * 2.0 * PI;
        assert_eq!(ring.radius, radius);
        assert_eq!(ring.circumference, circumference);
        assert_eq!(
            ring.progress_offset,
            circumference - (progress / 100.0) * circumference
        );
        assert_eq!(ring.position(), 100.0);
        assert_eq!(ring.path(), None);
    }

    #[test]
    fn offset_bounds() {
        let empty = compute_ring_geometry(100.0, 10.0, 10.0, 0.0, 0.0, false);
        assert_eq!(empty.progress_offset, empty.circumference);
        let full = compute_ring_geometry(100.0, 10.0, 10.0, 0.0, 100.0, false);
        assert_eq!(full.progress_offset, 0.0);
    }

    #[test]
    fn widest_stroke_sets_radius() {
        assert_eq!(single_ring_radius(200.0, 4.0, 10.0, 0.0), 95.0);
        assert_eq!(single_ring_radius(200.0, 4.0, 2.0, 20.0), 90.0);
        assert_eq!(single_ring_radius(10.0, 40.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn half_ring() {
        let (size, thickness, progress) = (200.0, 10.0, 50.0);
        let ring = compute_ring_geometry(size, thickness, thickness, 0.0, progress, true);

        let radius = size / 2.0 - thickness / 2.0;
        let position = size / 2.0 - radius;
        assert_eq!(ring.radius, radius);
        assert_eq!(ring.position(), position);
        assert_eq!(ring.path().unwrap(), " M 5, 100 a 95,95 0 1,1 190,0");

        let circumference = (radius * 2.0 * PI) / 2.0;
        assert_eq!(ring.arc_length(), circumference);
        assert_eq!(
            ring.progress_offset,
            circumference - (progress / 100.0) * circumference
        );
    }

    #[test]
    fn no_data_and_loading_hide_stroke() {
        for state in [RingState::NoData, RingState::Loading] {
            let ring = RingGeometry::new(200.0, 95.0, 60.0, false, state);
            assert_eq!(ring.progress_offset, ring.circumference);
            let half = RingGeometry::new(200.0, 95.0, 60.0, true, state);
            assert_eq!(half.progress_offset, half.arc_length());
        }
        assert_eq!(RingState::from_flags(true, true), RingState::NoData);
        assert_eq!(RingState::from_flags(false, true), RingState::Loading);
        assert_eq!(RingState::from_flags(false, false), RingState::Progress);
    }

    #[test]
    fn negative_radius_clamped() {
        let ring = RingGeometry::new(10.0, -3.0, 50.0, false, RingState::Progress);
        assert_eq!(ring.radius, 0.0);
        assert_eq!(ring.circumference, 0.0);
        assert_eq!(ring.progress_offset, 0.0);
    }

    #[test]
    fn dot_placement() {
        let ring = RingGeometry::new(200.0, 90.0, 25.0, false, RingState::Progress);
        assert_eq!(ring.dot_angle(), 90.0);
        let (x, y) = ring.dot_center();
        assert_approx_eq(x, 100.0);
        assert_approx_eq(y, 190.0);

        let half = RingGeometry::new(200.0, 90.0, 50.0, true, RingState::Progress);
        assert_eq!(half.dot_angle(), 90.0);
        let (x, y) = half.dot_center();
        assert_approx_eq(x, 100.0);
        assert_approx_eq(y, 10.0);
    }
}
