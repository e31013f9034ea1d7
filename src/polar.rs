//! Pixel-to-polar coordinate transform around a candidate zenith.
//!
//! The angle is computed with explicit sign branching on the pixel offsets
//! and one inverse cosine per quadrant, giving a continuous, unambiguous
//! angle in `[0°, 360°)` over the full circle. Angle zero points along +y
//! and increases toward -x, matching the reference camera's frame.

use crate::error::ZenithError;

/// Polar coordinates of a pixel position relative to a candidate zenith.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarCoord {
    /// Distance from the candidate zenith in pixels.
    pub radius: f64,
    /// Angle around the candidate zenith in degrees, in `[0, 360)`.
    pub angle_deg: f64,
}

/// Convert the pixel position `(x, y)` to polar coordinates around the
/// candidate zenith `(xz, yz)`.
///
/// Pure function of its inputs. Fails if the point coincides with the
/// center, where the angle is undefined.
pub fn pixel_to_polar(x: f64, y: f64, xz: f64, yz: f64) -> Result<PolarCoord, ZenithError> {
    let dx = x - xz;
    let dy = y - yz;
    let radius = (dx * dx + dy * dy).sqrt();

    let angle_deg = if dx < 0.0 && dy < 0.0 {
        (-dy / radius).acos().to_degrees()
    } else if dx < 0.0 && dy > 0.0 {
        90.0 + (-dx / radius).acos().to_degrees()
    } else if dx > 0.0 && dy > 0.0 {
        180.0 + (dy / radius).acos().to_degrees()
    } else if dx > 0.0 && dy < 0.0 {
        270.0 + (dx / radius).acos().to_degrees()
    } else if dx == 0.0 && dy > 0.0 {
        0.0
    } else if dx < 0.0 && dy == 0.0 {
        90.0
    } else if dx == 0.0 && dy < 0.0 {
        180.0
    } else if dx > 0.0 && dy == 0.0 {
        270.0
    } else {
        return Err(ZenithError::DegenerateGeometry { x, y });
    };

    Ok(PolarCoord { radius, angle_deg })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_is_exact_euclidean_distance() {
        let p = pixel_to_polar(3.0, 4.0, 0.0, 0.0).unwrap();
        assert_eq!(p.radius, 5.0);

        let p = pixel_to_polar(100.0, 250.0, 97.0, 246.0).unwrap();
        assert_eq!(p.radius, 5.0);
    }

    #[test]
    fn axis_aligned_angles() {
        let center = (10.0, 20.0);
        assert_eq!(
            pixel_to_polar(10.0, 25.0, center.0, center.1).unwrap().angle_deg,
            0.0
        );
        assert_eq!(
            pixel_to_polar(5.0, 20.0, center.0, center.1).unwrap().angle_deg,
            90.0
        );
        assert_eq!(
            pixel_to_polar(10.0, 15.0, center.0, center.1).unwrap().angle_deg,
            180.0
        );
        assert_eq!(
            pixel_to_polar(15.0, 20.0, center.0, center.1).unwrap().angle_deg,
            270.0
        );
    }

    #[test]
    fn each_quadrant_maps_to_its_sector() {
        // (dx, dy) sign pattern -> 90°-wide sector
        let cases = [
            (-1.0, -1.0, 0.0, 90.0),
            (-1.0, 1.0, 90.0, 180.0),
            (1.0, 1.0, 180.0, 270.0),
            (1.0, -1.0, 270.0, 360.0),
        ];
        for &(sx, sy, lo, hi) in &cases {
            for &(mx, my) in &[(13.0, 7.0), (2.5, 40.0), (88.0, 88.0)] {
                let p = pixel_to_polar(sx * mx, sy * my, 0.0, 0.0).unwrap();
                assert!(
                    p.angle_deg >= lo && p.angle_deg <= hi,
                    "offset ({}, {}) gave angle {} outside [{}, {}]",
                    sx * mx,
                    sy * my,
                    p.angle_deg,
                    lo,
                    hi,
                );
            }
        }
    }

    #[test]
    fn diagonal_angles_are_midsector() {
        // Equal offsets land exactly in the middle of each sector.
        let p = pixel_to_polar(-1.0, -1.0, 0.0, 0.0).unwrap();
        assert!((p.angle_deg - 45.0).abs() < 1e-12);
        let p = pixel_to_polar(1.0, 1.0, 0.0, 0.0).unwrap();
        assert!((p.angle_deg - 225.0).abs() < 1e-12);
    }

    #[test]
    fn zero_offset_is_degenerate() {
        let err = pixel_to_polar(10.0, 20.0, 10.0, 20.0).unwrap_err();
        assert!(matches!(err, ZenithError::DegenerateGeometry { .. }));
    }

    #[test]
    fn transform_is_idempotent() {
        let a = pixel_to_polar(123.456, 789.012, 50.5, 60.25).unwrap();
        let b = pixel_to_polar(123.456, 789.012, 50.5, 60.25).unwrap();
        assert_eq!(a.radius.to_bits(), b.radius.to_bits());
        assert_eq!(a.angle_deg.to_bits(), b.angle_deg.to_bits());
    }
}
