//! Seed-catalog parsing.
//!
//! Bootstrap data (the student body and course catalog) arrives as one JSON
//! document. Parsing deserializes it with Serde and fingerprints the raw
//! content so a caller can tell which catalog a registry was built from.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::checksum::sha256_hex;

/// Bootstrap document: students and courses to register, in document order.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedCatalog {
    #[serde(default)]
    pub students: Vec<SeedStudent>,
    #[serde(default)]
    pub courses: Vec<SeedCourse>,
    /// SHA-256 of the raw document, filled in by the parser.
    #[serde(skip)]
    pub checksum: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedStudent {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedCourse {
    pub id: String,
    pub title: String,
    pub instructor: String,
    pub time_slot: String,
    pub capacity: usize,
}

/// Parse a seed catalog from a JSON string.
///
/// Shape errors (missing fields, wrong types) surface here; semantic
/// validation (empty ids, capacity bounds) happens when the catalog is
/// applied to an engine.
pub fn parse_seed_json(content: &str) -> Result<SeedCatalog> {
    let mut catalog: SeedCatalog =
        serde_json::from_str(content).context("Failed to deserialize seed catalog JSON")?;
    catalog.checksum = sha256_hex(content);
    Ok(catalog)
}
