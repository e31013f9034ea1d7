//! Plain-text star list parsing.
//!
//! One star per line, whitespace separated:
//!
//! ```text
//! name  pixel_x  pixel_y  altitude_deg  azimuth_deg
//! ```
//!
//! The name may itself contain spaces; the last four fields of a line are
//! parsed as numbers and everything before them is the name. Altitude and
//! azimuth are decimal degrees. Blank lines and lines starting with `#`
//! are skipped.

use crate::star::Star;

/// Parse a single star list line into a `Star`.
fn parse_star_line(line: &str) -> Option<Star> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 5 {
        return None;
    }

    let numeric = &fields[fields.len() - 4..];
    let name = fields[..fields.len() - 4].join(" ");

    Some(Star {
        name,
        x: numeric[0].parse().ok()?,
        y: numeric[1].parse().ok()?,
        alt_deg: numeric[2].parse().ok()?,
        az_deg: numeric[3].parse().ok()?,
    })
}

/// Parse a star list from an in-memory string.
pub fn load_catalog(data: &str) -> Vec<Star> {
    data.lines().filter_map(parse_star_line).collect()
}

pub fn load_catalog_from_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Vec<Star>> {
    let data = std::fs::read_to_string(path)?;
    Ok(load_catalog(&data))
}
