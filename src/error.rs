/*
This code is part of the region_merge geospatial utility.
Created: 23/08/2026
License: MIT
*/
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure modes of the merge pipeline. Every stage fails fast; nothing is
/// retried and no partial output is left behind.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("unable to read '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("input is not well-formed JSON: {0}")]
    Parse(serde_json::Error),

    #[error("input is not a GeoJSON FeatureCollection: {0}")]
    Schema(String),

    #[error("could not find feature(s) with admin value(s): {}", .missing.join(", "))]
    NotFound { missing: Vec<String> },

    #[error("invalid geometry: {0}")]
    Geometry(String),

    #[error("unable to write '{}': {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}
