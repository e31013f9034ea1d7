use rkyv::{Archive, Deserialize, Serialize};

/// A reference star: a pixel centroid in the image paired with known true
/// horizontal coordinates.
///
/// The altitude/azimuth are the star's true sky position at the exposure
/// epoch and never change. Polar coordinates relative to a candidate zenith
/// are derived per query and never stored here.
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub struct Star {
    pub name: String,
    /// Pixel column of the star centroid.
    pub x: f64,
    /// Pixel row of the star centroid.
    pub y: f64,
    /// True altitude in decimal degrees.
    pub alt_deg: f64,
    /// True azimuth in decimal degrees.
    pub az_deg: f64,
}

/// Convert a sexagesimal angle (degrees, arcminutes, arcseconds) to decimal
/// degrees.
pub fn sexagesimal_to_deg(deg: f64, min: f64, sec: f64) -> f64 {
    deg + min / 60.0 + sec / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sexagesimal_conversion() {
        assert_eq!(sexagesimal_to_deg(45.0, 0.0, 0.0), 45.0);
        assert_eq!(sexagesimal_to_deg(0.0, 30.0, 0.0), 0.5);
        assert_eq!(sexagesimal_to_deg(0.0, 0.0, 36.0), 0.01);
        let spica = sexagesimal_to_deg(46.0, 45.0, 32.2);
        assert!((spica - 46.758_944_44).abs() < 1e-8);
    }
}
