// Copyright 2024 the Ellipse Progress Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stacking of concentric rings.

use smallvec::SmallVec;

use crate::ring::clamp_radius;

/// Radii of stacked rings, in input order.
pub type RadiusList = SmallVec<[f64; 8]>;

/// The widths a ring reserves in a stack, resolved to user units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RingMetrics {
    /// Stroke width of the progress stroke.
    pub thickness: f64,
    /// Space between this ring and the one outside it.
    pub gap: f64,
    /// Diameter of the dot marker.
    pub dot_size: f64,
}

impl RingMetrics {
    /// New metrics.
    #[inline]
    pub const fn new(thickness: f64, gap: f64, dot_size: f64) -> RingMetrics {
        RingMetrics {
            thickness,
            gap,
            dot_size,
        }
    }

    /// The band this ring reserves: the larger of stroke and dot.
    ///
    /// Only used for spacing; the stroke is still drawn at `thickness`.
    #[inline]
    pub fn thickness_with_dot(&self) -> f64 {
        self.thickness.max(self.dot_size)
    }

    /// Radius of this ring if it were alone in the container.
    #[inline]
    pub fn base_radius(&self, size: f64) -> f64 {
        size / 2.0 - self.thickness_with_dot() / 2.0
    }
}

/// Compute the radius of every ring in a concentric stack.
///
/// The first ring sits against the container edge. Every following ring sits
/// inside all previous rings, separated from its predecessor by its own gap.
/// The gap of the first ring is ignored. Ring `i` only depends on rings
/// `0..i`.
///
/// ```
/// use ellipse_progress::{layout_rings, RingMetrics};
///
/// let rings = [RingMetrics::new(10.0, 5.0, 0.0), RingMetrics::new(10.0, 5.0, 0.0)];
/// assert_eq!(layout_rings(200.0, &rings).as_slice(), &[95.0, 80.0]);
/// ```
pub fn layout_rings(size: f64, rings: &[RingMetrics]) -> RadiusList {
    let mut radii = RadiusList::with_capacity(rings.len());
    let mut consumed = 0.0;
    for (i, ring) in rings.iter().enumerate() {
        let reserved = ring.thickness_with_dot();
        if i == 0 {
            radii.push(clamp_radius(ring.base_radius(size)));
            consumed = reserved;
        } else {
            radii.push(clamp_radius(ring.base_radius(size) - (consumed + ring.gap)));
            consumed += ring.gap + reserved;
        }
    }
    radii
}

/// The container shared by all rings of a gauge.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerGeometry {
    /// Width and height of the square container.
    pub size: f64,
    /// Center coordinate, `size / 2`.
    pub position: f64,
    /// One radius per ring, in input order.
    pub radii: RadiusList,
}

impl ContainerGeometry {
    /// Lay out a stack of rings.
    pub fn new(size: f64, rings: &[RingMetrics]) -> ContainerGeometry {
        ContainerGeometry {
            size,
            position: size / 2.0,
            radii: layout_rings(size, rings),
        }
    }

    /// A container holding a single ring of known radius.
    pub fn single(size: f64, radius: f64) -> ContainerGeometry {
        let mut radii = RadiusList::new();
        radii.push(radius);
        ContainerGeometry {
            size,
            position: size / 2.0,
            radii,
        }
    }
}
