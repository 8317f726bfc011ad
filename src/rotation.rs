// Copyright 2024 the Ellipse Progress Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orientation of the gauge.

use alloc::{format, string::String};

/// Rotation applied when no angle is given, so that 0% starts at 12 o'clock.
pub const DEFAULT_ANGLE: f64 = -90.0;

/// The CSS transform rotating the gauge by `angle` degrees.
///
/// ```
/// use ellipse_progress::rotation_transform;
///
/// assert_eq!(rotation_transform(None), "rotate(-90deg)");
/// assert_eq!(rotation_transform(Some(0.0)), "rotate(0deg)");
/// ```
pub fn rotation_transform(angle: Option<f64>) -> String {
    format!("rotate({}deg)", angle.unwrap_or(DEFAULT_ANGLE))
}

#[cfg(test)]
mod tests {
    use super::rotation_transform;

    #[test]
    fn default_points_up() {
        assert_eq!(rotation_transform(None), "rotate(-90deg)");
    }

    #[test]
    fn explicit_angles() {
        assert_eq!(rotation_transform(Some(80.0)), "rotate(80deg)");
        assert_eq!(rotation_transform(Some(0.0)), "rotate(0deg)");
        assert_eq!(rotation_transform(Some(-12.5)), "rotate(-12.5deg)");
    }
}
