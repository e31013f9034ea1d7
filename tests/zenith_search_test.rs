//! Integration tests: synthetic catalogs with a known zenith, convergence
//! of the quadrant search, and determinism of the bundled-catalog scenario.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use zenith_finder::catalogs::reference::reference_catalog;
use zenith_finder::{
    find_zenith, CosineFitConfig, SearchConfig, SearchRegion, Star, StarCatalog, ZenithError,
};

// Ground-truth model for the synthetic sky: alt(r) = A·cos(B·r).
// B is chosen so altitudes stay well above zero out to the inspection
// radius, keeping every chi-square divisor positive.
const TRUE_AMPLITUDE: f64 = 90.0;
const TRUE_FREQUENCY: f64 = 5.0e-4;

/// Catalog whose star altitudes are an exact cosine of the distance to
/// `zenith`. Azimuths follow the placement angle.
fn synthetic_catalog(zenith: [f64; 2], n: usize, seed: u64) -> StarCatalog {
    synthetic_catalog_with_noise(zenith, n, seed, 0.0)
}

/// Same as [`synthetic_catalog`], with Gaussian noise of `sigma_deg`
/// added to each altitude.
fn synthetic_catalog_with_noise(
    zenith: [f64; 2],
    n: usize,
    seed: u64,
    sigma_deg: f64,
) -> StarCatalog {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, sigma_deg).unwrap();

    let mut stars = Vec::with_capacity(n);
    for i in 0..n {
        let angle = rng.random::<f64>() * std::f64::consts::TAU;
        let radius = 150.0 + rng.random::<f64>() * 2000.0;
        let x = zenith[0] + radius * angle.cos();
        let y = zenith[1] + radius * angle.sin();
        let mut alt = TRUE_AMPLITUDE * (TRUE_FREQUENCY * radius).cos();
        if sigma_deg > 0.0 {
            alt += noise.sample(&mut rng);
        }
        stars.push(Star {
            name: format!("syn-{i}"),
            x,
            y,
            alt_deg: alt,
            az_deg: angle.to_degrees(),
        });
    }
    StarCatalog::new(stars)
}

fn synthetic_config() -> SearchConfig {
    SearchConfig {
        fit: CosineFitConfig {
            initial_guess: [TRUE_AMPLITUDE, TRUE_FREQUENCY, 0.0],
            ..Default::default()
        },
        ..Default::default()
    }
}

fn distance(a: [f64; 2], b: [f64; 2]) -> f64 {
    ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)).sqrt()
}

#[test]
fn search_converges_on_synthetic_zenith() {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    // Off-lattice zenith so no iteration lands on it exactly.
    let zenith = [2237.4, 1161.9];
    let catalog = synthetic_catalog(zenith, 60, 7);
    let region = SearchRegion::new(0.0, 4096.0, 0.0, 2048.0).unwrap();

    let result = find_zenith(&catalog, region, &synthetic_config()).expect("search failed");
    assert_eq!(result.iterations_run, 20);

    // After 20 halvings the region is 4096/2^20 ≈ 0.004 px wide; the
    // estimate should sit within one final region width of the truth.
    let final_width = result.trace.last().unwrap().region.width();
    let err = distance(result.zenith_px, zenith);
    assert!(
        err <= final_width,
        "zenith error {} px exceeds final region width {} px",
        err,
        final_width
    );
}

#[test]
fn each_iteration_halves_the_region() {
    let zenith = [1800.0, 900.0];
    let catalog = synthetic_catalog(zenith, 50, 11);
    let region = SearchRegion::new(0.0, 4096.0, 0.0, 2048.0).unwrap();

    let result = find_zenith(&catalog, region, &synthetic_config()).expect("search failed");

    let mut prev_width = region.width();
    let mut prev_height = region.height();
    for (k, step) in result.trace.iter().enumerate() {
        let w = step.region.width();
        let h = step.region.height();
        assert!(
            (w - prev_width / 2.0).abs() < 1e-9,
            "iteration {k}: width {w} is not half of {prev_width}"
        );
        assert!(
            (h - prev_height / 2.0).abs() < 1e-9,
            "iteration {k}: height {h} is not half of {prev_height}"
        );
        prev_width = w;
        prev_height = h;
    }
    assert_eq!(result.trace.len(), 20);
}

#[test]
fn search_tolerates_small_altitude_noise() {
    let zenith = [1500.5, 1200.25];
    let catalog = synthetic_catalog_with_noise(zenith, 80, 42, 0.05);
    let region = SearchRegion::new(0.0, 4096.0, 0.0, 2048.0).unwrap();

    let result = find_zenith(&catalog, region, &synthetic_config()).expect("search failed");
    let err = distance(result.zenith_px, zenith);
    assert!(err < 5.0, "zenith error {err} px with noisy altitudes");
}

#[test]
fn early_termination_stops_at_the_requested_scale() {
    let zenith = [2000.0, 1000.0];
    let catalog = synthetic_catalog(zenith, 50, 3);
    let region = SearchRegion::new(0.0, 4096.0, 0.0, 2048.0).unwrap();

    let config = SearchConfig {
        min_region_px: Some(1.5),
        ..synthetic_config()
    };
    let result = find_zenith(&catalog, region, &config).expect("search failed");

    // Width shrinks 4096 → 2 px over 11 iterations and reaches 1 px on
    // the 12th, the first time both sides are under 1.5 px.
    assert_eq!(result.iterations_run, 12);
    let last = result.trace.last().unwrap().region;
    assert!(last.width() < 1.5 && last.height() < 1.5);

    // Fixed-depth mode keeps going on the same inputs.
    let full = find_zenith(&catalog, region, &synthetic_config()).expect("search failed");
    assert_eq!(full.iterations_run, 20);
    assert!(distance(full.zenith_px, result.zenith_px) < 1.0);
}

#[test]
fn reference_catalog_scenario_is_stable_across_runs() {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    let catalog = reference_catalog();
    let region = SearchRegion::new(0.0, 4096.0, 0.0, 2048.0).unwrap();
    let config = SearchConfig::default();

    let first = find_zenith(&catalog, region, &config).expect("search failed");
    let second = find_zenith(&catalog, region, &config).expect("search failed");

    // The exact coordinate is a regression baseline, not derivable from
    // first principles; what must hold is bit-identical repeatability.
    assert_eq!(first.zenith_px[0].to_bits(), second.zenith_px[0].to_bits());
    assert_eq!(first.zenith_px[1].to_bits(), second.zenith_px[1].to_bits());
    assert_eq!(first.trace.len(), 20);

    for (a, b) in first.trace.iter().zip(&second.trace) {
        assert_eq!(a.winning_quadrant, b.winning_quadrant);
        assert_eq!(a.chi_square.to_bits(), b.chi_square.to_bits());
    }

    // The estimate stays inside the initial region.
    let [zx, zy] = first.zenith_px;
    assert!(zx > 0.0 && zx < 4096.0, "zenith x = {zx}");
    assert!(zy > 0.0 && zy < 2048.0, "zenith y = {zy}");
}

#[test]
fn zero_inspection_radius_cannot_produce_a_sample() {
    let catalog = reference_catalog();
    let region = SearchRegion::new(0.0, 4096.0, 0.0, 2048.0).unwrap();
    let config = SearchConfig {
        inspection_radius_px: 0.0,
        ..Default::default()
    };

    let err = find_zenith(&catalog, region, &config).unwrap_err();
    assert!(matches!(err, ZenithError::NoViableQuadrant { iteration: 0 }));
}

#[test]
fn trace_regions_nest_toward_the_estimate() {
    let zenith = [2237.4, 1161.9];
    let catalog = synthetic_catalog(zenith, 60, 7);
    let region = SearchRegion::new(0.0, 4096.0, 0.0, 2048.0).unwrap();

    let result = find_zenith(&catalog, region, &synthetic_config()).expect("search failed");

    // Every traced region contains the final estimate.
    let [zx, zy] = result.zenith_px;
    for (k, step) in result.trace.iter().enumerate() {
        let r = step.region;
        assert!(
            zx >= r.x_min && zx <= r.x_max && zy >= r.y_min && zy <= r.y_max,
            "estimate escaped the region at iteration {k}"
        );
        assert!(step.winning_quadrant < 4);
        assert!(step.chi_square.is_finite() && step.chi_square >= 0.0);
    }
}
