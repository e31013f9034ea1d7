//! The optimal-quadrant step and the bounded search loop.

use tracing::debug;

use crate::error::ZenithError;
use crate::fit::{fit_cosine, CosineFit};
use crate::sample::build_sample;
use crate::starcatalog::StarCatalog;

use super::region::SearchRegion;
use super::{IterationTrace, SearchConfig, SearchResult};

/// Evaluate one candidate center: sample, fit, score.
fn evaluate_candidate(
    catalog: &StarCatalog,
    center: [f64; 2],
    config: &SearchConfig,
) -> Result<CosineFit, ZenithError> {
    let sample = build_sample(catalog, center[0], center[1], config.inspection_radius_px)?;
    let radii: Vec<f64> = sample.iter().map(|obs| obs.radius).collect();
    let altitudes: Vec<f64> = sample.iter().map(|obs| obs.star.alt_deg).collect();
    fit_cosine(&radii, &altitudes, &config.fit)
}

/// Index and score of the lowest score; earlier entries win ties.
fn select_best(scores: &[Option<f64>; 4]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, score) in scores.iter().enumerate() {
        if let Some(chi) = *score {
            let replace = match best {
                None => true,
                Some((_, incumbent)) => chi < incumbent,
            };
            if replace {
                best = Some((idx, chi));
            }
        }
    }
    best
}

/// Run one optimal-quadrant iteration: score the four candidate centers of
/// `region` and shrink it around the best one.
///
/// A failing candidate is dropped from the ranking. The iteration fails
/// only when all four candidates fail.
pub fn optimal_quadrant(
    catalog: &StarCatalog,
    region: SearchRegion,
    config: &SearchConfig,
    iteration: u32,
) -> Result<(SearchRegion, usize, f64), ZenithError> {
    let centers = region.quadrant_centers();
    let mut scores: [Option<f64>; 4] = [None; 4];

    for (idx, center) in centers.iter().enumerate() {
        match evaluate_candidate(catalog, *center, config) {
            Ok(fit) if fit.chi_square.is_finite() => {
                debug!(
                    "iteration {}: quadrant {} at ({:.2}, {:.2}) chi2 = {:.4e}",
                    iteration, idx, center[0], center[1], fit.chi_square
                );
                scores[idx] = Some(fit.chi_square);
            }
            Ok(fit) => {
                debug!(
                    "iteration {}: quadrant {} at ({:.2}, {:.2}) rejected: non-finite chi2 {}",
                    iteration, idx, center[0], center[1], fit.chi_square
                );
            }
            Err(err) => {
                debug!(
                    "iteration {}: quadrant {} at ({:.2}, {:.2}) rejected: {}",
                    iteration, idx, center[0], center[1], err
                );
            }
        }
    }

    let (winner, chi) =
        select_best(&scores).ok_or(ZenithError::NoViableQuadrant { iteration })?;
    Ok((region.shrink_around(centers[winner]), winner, chi))
}

/// Locate the zenith by repeated optimal-quadrant halving.
///
/// Runs [`SearchConfig::iterations`] iterations from `initial_region`
/// (which must contain the zenith) and returns the final region's center
/// together with the full iteration trace. With
/// [`SearchConfig::min_region_px`] set, stops as soon as both region sides
/// fall below that length.
pub fn find_zenith(
    catalog: &StarCatalog,
    initial_region: SearchRegion,
    config: &SearchConfig,
) -> Result<SearchResult, ZenithError> {
    initial_region.validate()?;

    let mut region = initial_region;
    let mut trace = Vec::with_capacity(config.iterations as usize);

    for iteration in 0..config.iterations {
        let (next, winning_quadrant, chi_square) =
            optimal_quadrant(catalog, region, config, iteration)?;
        region = next;
        trace.push(IterationTrace {
            region,
            winning_quadrant,
            chi_square,
        });

        if let Some(limit) = config.min_region_px {
            if region.width() < limit && region.height() < limit {
                debug!(
                    "region below {} px after iteration {}, stopping early",
                    limit, iteration
                );
                break;
            }
        }
    }

    let iterations_run = trace.len() as u32;
    let zenith_px = region.center();
    debug!(
        "zenith estimate ({:.3}, {:.3}) after {} iterations",
        zenith_px[0], zenith_px[1], iterations_run
    );
    Ok(SearchResult {
        zenith_px,
        trace,
        iterations_run,
    })
}
