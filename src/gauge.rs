// Copyright 2024 the Ellipse Progress Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A complete gauge: props in, geometry and SVG out.

use alloc::{string::String, vec::Vec};
use core::fmt::{self, Write};

use crate::{
    render::{svg_classes, write_escaped},
    rotation_transform, single_ring_radius, ContainerGeometry, GaugeProps, RingGeometry,
    RingMetrics, RingView,
};

/// A gauge with all of its geometry computed.
///
/// Construction is cheap and pure; hosts rebuild the gauge whenever the props
/// change and diff the resulting shapes into their rendering surface.
///
/// # Examples
///
/// ```
/// use ellipse_progress::{Gauge, GaugeProps, RingSpec};
///
/// let gauge = Gauge::new(
///     GaugeProps::new(600.0, 0.0)
///         .with_thickness(5)
///         .with_gap(5)
///         .with_data([RingSpec::new(50.0), RingSpec::new(75.0).with_thickness("2%")]),
/// );
/// assert_eq!(gauge.container().radii.as_slice(), &[297.5, 294.0 - (5.0 + 5.0)]);
/// assert_eq!(gauge.transform(), "rotate(-90deg)");
/// assert!(gauge.to_svg().starts_with("<svg"));
/// ```
#[derive(Clone, Debug)]
pub struct Gauge {
    props: GaugeProps,
    container: ContainerGeometry,
    geometries: Vec<RingGeometry>,
    rings: Vec<RingView>,
    transform: String,
}

impl Gauge {
    /// Resolve the props and compute the geometry of every ring.
    pub fn new(props: GaugeProps) -> Gauge {
        let size = props.size;
        let resolved = props.resolved_rings();
        let container = if props.is_multiple() {
            let metrics: Vec<RingMetrics> = resolved.iter().map(|ring| ring.metrics()).collect();
            ContainerGeometry::new(size, &metrics)
        } else {
            let ring = &resolved[0];
            let radius = single_ring_radius(size, ring.thickness, ring.empty_thickness, ring.dot_size);
            ContainerGeometry::single(size, radius)
        };
        let geometries: Vec<RingGeometry> = resolved
            .iter()
            .zip(&container.radii)
            .map(|(ring, &radius)| RingGeometry::new(size, radius, ring.progress, ring.half, ring.state))
            .collect();
        let rings = resolved
            .iter()
            .zip(&geometries)
            .map(|(ring, geometry)| RingView::new(ring, geometry))
            .collect();
        tracing::trace!(size, rings = geometries.len(), "gauge laid out");
        Gauge {
            transform: rotation_transform(props.angle),
            props,
            container,
            geometries,
            rings,
        }
    }

    /// The props this gauge was built from.
    pub fn props(&self) -> &GaugeProps {
        &self.props
    }

    /// The shared container and the radius of every ring.
    pub fn container(&self) -> &ContainerGeometry {
        &self.container
    }

    /// Numeric geometry per ring, in input order.
    pub fn geometries(&self) -> &[RingGeometry] {
        &self.geometries
    }

    /// Shapes per ring, in input order.
    pub fn rings(&self) -> &[RingView] {
        &self.rings
    }

    /// The CSS transform of the outer element.
    pub fn transform(&self) -> &str {
        &self.transform
    }

    /// Write the gauge as an `<svg>` element.
    pub fn write_svg(&self, out: &mut impl Write) -> fmt::Result {
        let size = self.container.size;
        out.write_str("<svg class=\"")?;
        write_escaped(out, &svg_classes(self.props.half).join(" "))?;
        write!(
            out,
            "\" xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\" \
             viewBox=\"0 0 {size} {size}\" style=\"transform:{}\">",
            self.transform
        )?;
        for ring in &self.rings {
            out.write_str("<g class=\"ep-circle--container\">")?;
            for shape in ring.shapes() {
                shape.write_svg(out)?;
            }
            out.write_str("</g>")?;
        }
        out.write_str("</svg>")
    }

    /// The gauge as an `<svg>` element.
    pub fn to_svg(&self) -> String {
        let mut result = String::new();
        self.write_svg(&mut result).unwrap();
        result
    }
}

impl From<GaugeProps> for Gauge {
    fn from(props: GaugeProps) -> Gauge {
        Gauge::new(props)
    }
}
