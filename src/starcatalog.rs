//! Immutable star catalog with per-center polar queries.
//!
//! `StarCatalog` holds the reference star table in memory, loaded once at
//! startup. Every query against a candidate zenith recomputes each star's
//! polar coordinates from scratch: radius and angle depend on the query
//! center and are never cached.
//!
//! Catalogs can be built from a plain-text star list
//! ([`crate::catalogs::plaintext`]), from the bundled reference table
//! ([`crate::catalogs::reference`]), or loaded from an rkyv archive saved
//! with [`StarCatalog::save_to_file`].

use rkyv::{Archive, Deserialize, Serialize};
use tracing::info;

use crate::error::ZenithError;
use crate::polar::pixel_to_polar;
use crate::star::Star;

/// One catalog star as seen from a specific candidate zenith.
#[derive(Debug, Clone, Copy)]
pub struct Observation<'a> {
    pub star: &'a Star,
    /// Distance from the query center in pixels.
    pub radius: f64,
    /// Angle around the query center in degrees, in `[0, 360)`.
    pub angle_deg: f64,
}

/// Immutable in-memory star table.
#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
pub struct StarCatalog {
    stars: Vec<Star>,
}

impl StarCatalog {
    /// Build a catalog from owned stars.
    pub fn new(stars: Vec<Star>) -> Self {
        Self { stars }
    }

    /// Return the total number of stars in the catalog.
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    /// Return `true` when the catalog contains no stars.
    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Return all catalog stars as an immutable slice.
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Compute polar coordinates for every star relative to `(xz, yz)`.
    ///
    /// Radius and angle are recomputed on every call. A star coinciding
    /// with the query center fails the whole query with a
    /// degenerate-geometry error.
    pub fn observe_from(&self, xz: f64, yz: f64) -> Result<Vec<Observation<'_>>, ZenithError> {
        self.stars
            .iter()
            .map(|star| {
                pixel_to_polar(star.x, star.y, xz, yz).map(|p| Observation {
                    star,
                    radius: p.radius,
                    angle_deg: p.angle_deg,
                })
            })
            .collect()
    }

    /// Load a catalog from a plain-text star list file.
    ///
    /// See [`crate::catalogs::plaintext`] for the line format.
    pub fn load_plaintext_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let stars = crate::catalogs::plaintext::load_catalog_from_file(path)?;
        info!("Loaded {} catalog stars", stars.len());
        Ok(Self::new(stars))
    }
}

// ── Serialization ───────────────────────────────────────────────────────────

impl StarCatalog {
    /// Serialize the catalog to bytes using rkyv.
    pub fn to_rkyv_bytes(&self) -> Vec<u8> {
        rkyv::to_bytes::<rkyv::rancor::Error>(self)
            .expect("rkyv serialization failed")
            .to_vec()
    }

    /// Save the catalog to a file using rkyv.
    pub fn save_to_file(&self, path: &str) -> anyhow::Result<()> {
        let bytes = self.to_rkyv_bytes();
        std::fs::write(path, &bytes)?;
        info!("Saved catalog to {} ({} bytes)", path, bytes.len());
        Ok(())
    }

    /// Load a catalog from an rkyv file.
    pub fn load_from_file(path: &str) -> anyhow::Result<Self> {
        let bytes = std::fs::read(path)?;
        let catalog = rkyv::from_bytes::<Self, rkyv::rancor::Error>(&bytes)
            .map_err(|e| anyhow::anyhow!("rkyv deserialization failed: {}", e))?;
        info!("Loaded catalog with {} stars", catalog.len());
        Ok(catalog)
    }
}
