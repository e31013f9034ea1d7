//! Star catalog sources: the bundled reference table and plain-text loading.

pub mod plaintext;
pub mod reference;
