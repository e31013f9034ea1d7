//! # zenith-finder
//!
//! Locates the **zenith point** — the pixel corresponding to straight
//! overhead — in a wide-field all-sky image, given a catalog of identified
//! stars with known pixel positions and known true altitude/azimuth. No
//! camera calibration model is required: the search uses only iterative
//! geometry plus a goodness-of-fit test at each candidate center.
//!
//! ## Features
//!
//! - **Optimal-quadrant search** — recursively halves a search rectangle
//!   toward the quadrant whose candidate center best explains the star
//!   altitudes, converging geometrically to sub-pixel precision
//! - **Calibration-free** — ranks candidates with a cosine model relating
//!   pixel radius to true altitude, fitted fresh at every candidate
//! - **Deterministic** — fixed iteration count, fixed quadrant evaluation
//!   order, bit-identical results across runs
//! - **Inspectable** — the full per-iteration region trace is returned for
//!   diagnostics or external visualization
//! - **Bundled reference catalog** — the 104-star all-sky reference table
//!   ships with the crate; custom catalogs load from plain text or rkyv
//!
//! ## Example
//!
//! ```
//! use zenith_finder::catalogs::reference::reference_catalog;
//! use zenith_finder::{find_zenith, SearchConfig, SearchRegion};
//!
//! # fn main() -> Result<(), zenith_finder::ZenithError> {
//! let catalog = reference_catalog();
//! let region = SearchRegion::new(0.0, 4096.0, 0.0, 2048.0)?;
//!
//! let result = find_zenith(&catalog, region, &SearchConfig::default())?;
//! println!(
//!     "zenith at ({:.2}, {:.2}) after {} iterations",
//!     result.zenith_px[0], result.zenith_px[1], result.iterations_run
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Algorithm overview
//!
//! 1. **Polar conversion** — each star's pixel offset from a candidate
//!    center becomes a (radius, angle) pair via a quadrant-aware inverse
//!    cosine, continuous over `[0°, 360°)`
//! 2. **Sampling** — stars beyond the inspection radius of the candidate
//!    are excluded (edge optics distort positions); the cut is re-evaluated
//!    per candidate
//! 3. **Cosine fit** — `alt(r) = a·cos(b·r) + c` is fitted to the sample by
//!    damped least squares and scored by chi-square
//! 4. **Quadrant selection** — the four quadrant centers of the current
//!    rectangle are scored; the rectangle shrinks to half extent around the
//!    winner
//! 5. **Iteration** — after the default 20 halvings the rectangle is far
//!    below a pixel wide; its center is the zenith estimate

pub mod catalogs;
pub mod error;
pub mod fit;
pub mod polar;
pub mod sample;
pub mod search;
pub mod star;
pub mod starcatalog;

pub use error::ZenithError;
pub use fit::{chi_square, fit_cosine, CosineFit, CosineFitConfig};
pub use polar::{pixel_to_polar, PolarCoord};
pub use sample::{build_sample, MIN_SAMPLE_SIZE};
pub use search::{
    find_zenith, optimal_quadrant, IterationTrace, SearchConfig, SearchRegion, SearchResult,
};
pub use star::{sexagesimal_to_deg, Star};
pub use starcatalog::{Observation, StarCatalog};
