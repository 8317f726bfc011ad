// Copyright 2024 the Ellipse Progress Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry for SVG progress gauges.
//!
//! The ellipse-progress library turns declarative props (progress, stroke
//! widths, gaps, dot markers, dash patterns) into the numbers and strings an
//! SVG renderer needs: radii, circumferences, dash offsets, arc paths and
//! rotation transforms. It handles full circles, half circles and stacks of
//! concentric rings. Everything is a pure function of its inputs; hosts
//! recompute whenever props change.
//!
//! # Examples
//!
//! A single ring:
//! ```
//! use ellipse_progress::compute_ring_geometry;
//! use std::f64::consts::PI;
//!
//! let ring = compute_ring_geometry(200.0, 4.0, 4.0, 0.0, 60.0, false);
//! let circumference = 98.0 * 2.0 * PI;
//! assert_eq!(ring.progress_offset, circumference - 0.6 * circumference);
//! ```
//!
//! A stack of rings sharing one container, with percentage units resolved
//! against the container size:
//! ```
//! use ellipse_progress::{Gauge, GaugeProps, RingSpec};
//!
//! let props = GaugeProps::new(600.0, 0.0)
//!     .with_thickness("2%")
//!     .with_gap(5)
//!     .with_data([RingSpec::new(40.0), RingSpec::new(80.0).with_dot("5% red")]);
//! let gauge = Gauge::new(props);
//! // 12 wide outer ring; the inner ring reserves 30 for its dot
//! assert_eq!(gauge.container().radii.as_slice(), &[294.0, 285.0 - (12.0 + 5.0)]);
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. The `serde` and
//! `schemars` features derive serialization and JSON schemas for the prop and
//! geometry types, so gauges can be configured from data files.
//!
//! [`libm`]: https://docs.rs/libm

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("ellipse-progress requires either the `std` or `libm` feature");

extern crate alloc;

pub mod animation;
mod common;
mod dash;
mod dot;
mod gauge;
mod layout;
mod props;
pub mod render;
mod ring;
mod rotation;
mod unit;

pub use crate::animation::{Animation, AnimationKind, ParseAnimationError};
pub use crate::dash::*;
pub use crate::dot::*;
pub use crate::gauge::*;
pub use crate::layout::*;
pub use crate::props::*;
pub use crate::render::{RingView, ShapeAttributes, ShapeKind};
pub use crate::ring::*;
pub use crate::rotation::*;
pub use crate::unit::*;
