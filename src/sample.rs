//! Star sample assembly for a candidate zenith.

use tracing::debug;

use crate::error::ZenithError;
use crate::starcatalog::{Observation, StarCatalog};

/// Minimum stars needed to constrain the 3-parameter cosine model.
pub const MIN_SAMPLE_SIZE: usize = 3;

/// Collect every catalog star within `inspection_radius` pixels of the
/// candidate center `(xz, yz)`, with polar coordinates relative to that
/// center.
///
/// The radius cut discards stars near the image edge, where positions are
/// dominated by optical distortion. A star at exactly the inspection
/// radius is excluded. The cut is re-evaluated for every candidate center,
/// so a star excluded at one center may be included at another.
pub fn build_sample<'a>(
    catalog: &'a StarCatalog,
    xz: f64,
    yz: f64,
    inspection_radius: f64,
) -> Result<Vec<Observation<'a>>, ZenithError> {
    let observations = catalog.observe_from(xz, yz)?;
    let total = observations.len();

    let sample: Vec<Observation<'a>> = observations
        .into_iter()
        .filter(|obs| obs.radius < inspection_radius)
        .collect();

    if sample.is_empty() {
        return Err(ZenithError::EmptySample {
            x: xz,
            y: yz,
            radius: inspection_radius,
        });
    }
    if sample.len() < MIN_SAMPLE_SIZE {
        return Err(ZenithError::InsufficientSample {
            count: sample.len(),
        });
    }

    debug!(
        "sample at ({:.1}, {:.1}): {} of {} stars within {} px",
        xz,
        yz,
        sample.len(),
        total,
        inspection_radius
    );
    Ok(sample)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::star::Star;

    fn star(name: &str, x: f64, y: f64) -> Star {
        Star {
            name: name.into(),
            x,
            y,
            alt_deg: 45.0,
            az_deg: 0.0,
        }
    }

    fn test_catalog() -> StarCatalog {
        StarCatalog::new(vec![
            star("near", 10.0, 0.0),
            star("mid", 0.0, 50.0),
            star("mid2", -40.0, 30.0),
            star("far", 300.0, 400.0),
        ])
    }

    #[test]
    fn filters_by_inspection_radius() {
        let catalog = test_catalog();
        let sample = build_sample(&catalog, 0.0, 0.0, 100.0).unwrap();
        assert_eq!(sample.len(), 3);
        assert!(sample.iter().all(|o| o.radius < 100.0));
    }

    #[test]
    fn boundary_star_is_excluded() {
        let catalog = test_catalog();
        // "far" sits at exactly radius 500
        let sample = build_sample(&catalog, 0.0, 0.0, 500.0).unwrap();
        assert_eq!(sample.len(), 3);
        let sample = build_sample(&catalog, 0.0, 0.0, 500.1).unwrap();
        assert_eq!(sample.len(), 4);
    }

    #[test]
    fn zero_radius_yields_empty_sample() {
        let catalog = test_catalog();
        let err = build_sample(&catalog, 0.0, 0.0, 0.0).unwrap_err();
        assert!(matches!(err, ZenithError::EmptySample { .. }));
    }

    #[test]
    fn undersized_sample_is_rejected() {
        let catalog = test_catalog();
        // Only "near" is within 20 px.
        let err = build_sample(&catalog, 0.0, 0.0, 20.0).unwrap_err();
        assert!(matches!(
            err,
            ZenithError::InsufficientSample { count: 1 }
        ));
    }

    #[test]
    fn star_on_center_is_degenerate() {
        let catalog = test_catalog();
        let err = build_sample(&catalog, 10.0, 0.0, 1000.0).unwrap_err();
        assert!(matches!(err, ZenithError::DegenerateGeometry { .. }));
    }
}
