//! Error types for the zenith search.
//!
//! Failure kinds fall into two propagation classes. Per-candidate failures
//! (degenerate geometry, empty or undersized samples, fit failures) are
//! absorbed by the quadrant engine, which drops the failing candidate from
//! the ranking. Failures affecting a whole iteration or the inputs
//! ([`NoViableQuadrant`](ZenithError::NoViableQuadrant),
//! [`InvalidRegion`](ZenithError::InvalidRegion)) are fatal and propagate
//! to the caller.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZenithError {
    /// A star lies exactly on the candidate center, so its polar angle is
    /// undefined.
    #[error("star at ({x}, {y}) coincides with the candidate center")]
    DegenerateGeometry { x: f64, y: f64 },

    /// No catalog star lies within the inspection radius of the candidate
    /// center.
    #[error("no stars within {radius} px of candidate center ({x:.1}, {y:.1})")]
    EmptySample { x: f64, y: f64, radius: f64 },

    /// Too few stars to constrain the 3-parameter cosine model.
    #[error("sample of {count} stars cannot constrain a 3-parameter fit")]
    InsufficientSample { count: usize },

    /// The nonlinear fit exhausted its evaluation budget without
    /// converging.
    #[error("cosine fit did not converge within {evaluations} evaluations")]
    FitConvergence { evaluations: u32 },

    /// The fitted model predicts a non-positive altitude, which cannot
    /// serve as a chi-square divisor.
    #[error("fit predicts altitude {predicted:.3} at radius {radius:.1} px")]
    DivergentFit { predicted: f64, radius: f64 },

    /// Every quadrant candidate failed in one iteration; the search cannot
    /// narrow further.
    #[error("all four quadrant candidates failed at iteration {iteration}")]
    NoViableQuadrant { iteration: u32 },

    /// The search region is malformed: non-finite bounds or empty extent.
    #[error("invalid search region: x [{x_min}, {x_max}], y [{y_min}, {y_max}]")]
    InvalidRegion {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },
}
