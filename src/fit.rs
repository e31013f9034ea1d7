//! Cosine altitude-model fitting and goodness-of-fit scoring.
//!
//! When a candidate center is the true zenith, a star's altitude is (to
//! first order, ignoring lens distortion) a function of its pixel distance
//! from that center alone. The model fitted here is
//!
//! ```text
//! alt(r) = a·cos(b·r) + c
//! ```
//!
//! fitted by damped least squares (Levenberg–Marquardt) from a configurable
//! starting point. The fit is scored by chi-square against the sample; the
//! quadrant engine ranks candidate centers by that score.

use nalgebra::{DMatrix, DVector, Vector3};
use tracing::debug;

use crate::error::ZenithError;

/// Damping factor ceiling; past this no descent direction exists and the
/// parameters are treated as converged.
const MAX_LAMBDA: f64 = 1.0e12;

/// Configuration for the cosine fit.
#[derive(Debug, Clone)]
pub struct CosineFitConfig {
    /// Starting `(amplitude, angular frequency, offset)` for the fit.
    /// The default is tuned for the reference camera's pixel-to-degree
    /// scale; override it when fitting images at a different scale.
    pub initial_guess: [f64; 3],
    /// Maximum residual evaluations before the fit gives up. Default 50 000.
    pub max_evaluations: u32,
    /// Relative cost-decrease threshold below which an accepted step
    /// declares convergence. Default 1e-10.
    pub cost_tolerance: f64,
}

impl Default for CosineFitConfig {
    fn default() -> Self {
        Self {
            initial_guess: [90.0, 8.0e-4, 0.0],
            max_evaluations: 50_000,
            cost_tolerance: 1e-10,
        }
    }
}

/// A fitted cosine altitude model plus its goodness of fit.
#[derive(Debug, Clone)]
pub struct CosineFit {
    /// Amplitude `a` in degrees.
    pub amplitude: f64,
    /// Angular frequency `b` in radians per pixel.
    pub angular_frequency: f64,
    /// Altitude offset `c` in degrees.
    pub offset: f64,
    /// Chi-square of the fit against the sample. Lower is better.
    pub chi_square: f64,
}

impl CosineFit {
    /// Model altitude in degrees at pixel radius `r`.
    pub fn predict(&self, r: f64) -> f64 {
        self.amplitude * (self.angular_frequency * r).cos() + self.offset
    }
}

/// Fit `alt(r) = a·cos(b·r) + c` to the sample and score it by chi-square.
///
/// `radii` and `altitudes` are parallel; at least 3 points are required
/// for the 3 free parameters.
pub fn fit_cosine(
    radii: &[f64],
    altitudes: &[f64],
    config: &CosineFitConfig,
) -> Result<CosineFit, ZenithError> {
    assert_eq!(
        radii.len(),
        altitudes.len(),
        "radii and altitudes must have the same length"
    );
    if radii.len() < 3 {
        return Err(ZenithError::InsufficientSample { count: radii.len() });
    }

    let p = levenberg_marquardt(radii, altitudes, config)?;
    let mut fit = CosineFit {
        amplitude: p[0],
        angular_frequency: p[1],
        offset: p[2],
        chi_square: 0.0,
    };
    fit.chi_square = chi_square(&fit, radii, altitudes)?;

    debug!(
        "cosine fit: a={:.3}, b={:.4e}, c={:.3}, chi2={:.4e}, n={}",
        fit.amplitude,
        fit.angular_frequency,
        fit.offset,
        fit.chi_square,
        radii.len()
    );
    Ok(fit)
}

/// Chi-square of the observed altitudes against the model predictions.
///
/// Each term divides by the predicted altitude, so a prediction that is
/// not strictly positive (or not finite) fails the scoring instead of
/// producing a sign-flipped or infinite term.
pub fn chi_square(fit: &CosineFit, radii: &[f64], altitudes: &[f64]) -> Result<f64, ZenithError> {
    let mut sum = 0.0;
    for (&r, &alt) in radii.iter().zip(altitudes) {
        let predicted = fit.predict(r);
        if !(predicted > 0.0) || !predicted.is_finite() {
            return Err(ZenithError::DivergentFit {
                predicted,
                radius: r,
            });
        }
        let d = alt - predicted;
        sum += d * d / predicted;
    }
    Ok(sum)
}

// ── Levenberg–Marquardt ─────────────────────────────────────────────────────

fn model(p: &Vector3<f64>, r: f64) -> f64 {
    p[0] * (p[1] * r).cos() + p[2]
}

fn residual_vector(radii: &[f64], altitudes: &[f64], p: &Vector3<f64>) -> DVector<f64> {
    DVector::from_iterator(
        radii.len(),
        radii
            .iter()
            .zip(altitudes)
            .map(|(&r, &alt)| alt - model(p, r)),
    )
}

/// Jacobian of the model with respect to `(a, b, c)`, one row per sample.
fn jacobian(radii: &[f64], p: &Vector3<f64>) -> DMatrix<f64> {
    let mut jac = DMatrix::zeros(radii.len(), 3);
    for (i, &r) in radii.iter().enumerate() {
        let (sin_br, cos_br) = (p[1] * r).sin_cos();
        jac[(i, 0)] = cos_br;
        jac[(i, 1)] = -p[0] * r * sin_br;
        jac[(i, 2)] = 1.0;
    }
    jac
}

/// Minimize the sum of squared residuals with adaptively damped
/// Gauss-Newton steps.
///
/// Returns the parameters once an accepted step no longer decreases the
/// cost meaningfully, or once the damping saturates (no descent direction
/// left). Exhausting the evaluation budget first is a convergence failure.
fn levenberg_marquardt(
    radii: &[f64],
    altitudes: &[f64],
    config: &CosineFitConfig,
) -> Result<Vector3<f64>, ZenithError> {
    let g = &config.initial_guess;
    let mut p = Vector3::new(g[0], g[1], g[2]);
    let mut residual = residual_vector(radii, altitudes, &p);
    let mut cost = residual.norm_squared();
    let mut evaluations: u32 = 1;
    let mut lambda = 1.0e-3;

    while evaluations < config.max_evaluations {
        let jac = jacobian(radii, &p);
        let jtj = jac.transpose() * &jac;
        let gradient = jac.transpose() * &residual;

        let damped = &jtj + DMatrix::from_diagonal(&jtj.diagonal()) * lambda;
        let step = damped
            .svd(true, true)
            .solve(&gradient, 1e-12)
            .unwrap_or_else(|_| DVector::zeros(3));

        let trial = Vector3::new(p[0] + step[0], p[1] + step[1], p[2] + step[2]);
        let trial_residual = residual_vector(radii, altitudes, &trial);
        evaluations += 1;
        let trial_cost = trial_residual.norm_squared();

        if trial_cost.is_finite() && trial_cost < cost {
            let decrease = cost - trial_cost;
            let converged = decrease <= config.cost_tolerance * cost;
            p = trial;
            residual = trial_residual;
            cost = trial_cost;
            lambda = (lambda * 0.1).max(1.0e-12);
            if converged {
                return Ok(p);
            }
        } else {
            lambda *= 10.0;
            if lambda > MAX_LAMBDA {
                // No step at any damping improves the cost: a minimum.
                return Ok(p);
            }
        }
    }

    Err(ZenithError::FitConvergence { evaluations })
}
