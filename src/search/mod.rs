//! Optimal-quadrant zenith search.
//!
//! The search starts from a rectangle known to contain the zenith. Each
//! iteration:
//!
//! 1. Takes the four quadrant centers of the current rectangle as candidate
//!    zenith positions.
//! 2. For each candidate, collects the star sample around it, fits the
//!    cosine altitude model, and scores the fit by chi-square.
//! 3. Re-centers the rectangle on the best-scoring candidate at half the
//!    previous extent.
//!
//! The rectangle halves every iteration, so after the default 20 iterations
//! it has collapsed well below a pixel and its center is the zenith
//! estimate. Candidates whose sample or fit fails are dropped from the
//! ranking; an iteration fails only when all four candidates fail.

pub mod engine;
pub mod region;

pub use engine::{find_zenith, optimal_quadrant};
pub use region::SearchRegion;

use crate::fit::CosineFitConfig;

// ── Configuration ───────────────────────────────────────────────────────────

/// Parameters controlling the zenith search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Number of quadrant-halving iterations. Each halves the region
    /// extent, so the final region side is `initial / 2^iterations`.
    /// Default 20.
    pub iterations: u32,
    /// Stars farther than this from a candidate center are excluded from
    /// that candidate's fit. Default 3000 px.
    pub inspection_radius_px: f64,
    /// Cosine fit settings (initial guess, evaluation budget).
    pub fit: CosineFitConfig,
    /// Stop early once both region sides fall below this length.
    /// `None` (the default) always runs the full iteration count.
    pub min_region_px: Option<f64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            iterations: 20,
            inspection_radius_px: 3000.0,
            fit: CosineFitConfig::default(),
            min_region_px: None,
        }
    }
}

// ── Results ─────────────────────────────────────────────────────────────────

/// One completed search iteration.
#[derive(Debug, Clone)]
pub struct IterationTrace {
    /// Region selected by this iteration, at half the previous extent.
    pub region: SearchRegion,
    /// Winning quadrant in evaluation order: 0 = up-left, 1 = up-right,
    /// 2 = down-left, 3 = down-right.
    pub winning_quadrant: usize,
    /// Chi-square of the winning candidate's fit.
    pub chi_square: f64,
}

/// Outcome of a zenith search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Final zenith estimate in pixel coordinates.
    pub zenith_px: [f64; 2],
    /// Per-iteration trace, oldest first. The last entry's region center
    /// equals `zenith_px`.
    pub trace: Vec<IterationTrace>,
    /// Iterations actually run; fewer than requested only when early
    /// termination is enabled via
    /// [`min_region_px`](SearchConfig::min_region_px).
    pub iterations_run: u32,
}
