/*
This code is part of the region_merge geospatial utility.
Created: 23/08/2026
License: MIT
*/

//! Merges the Israel and Palestine features of a GeoJSON FeatureCollection
//! into a single Palestine feature: the geometric union of their outer
//! boundaries reduced to the dominant connected component, with a reconciled
//! property set. Every other feature passes through untouched.

// The identity table's json! literal expands past rustc's default limit.
#![recursion_limit = "256"]

pub mod error;
pub mod loader;
pub mod merger;
pub mod properties;
pub mod selector;
pub mod writer;

use std::path::Path;

use tracing::info;

pub use crate::error::MergeError;

/// Runs the full pipeline: load, partition, merge, write. Strictly
/// sequential; any stage failure propagates before the destination is
/// touched.
pub fn run(input: &Path, output: &Path) -> Result<(), MergeError> {
    info!(input = %input.display(), "reading feature collection");
    let features = loader::load(input)?;

    let selection = selector::partition(
        features,
        properties::SOURCE_ADMIN,
        properties::TARGET_ADMIN,
    )?;

    let merged = merger::merge(
        &selection.source,
        &selection.target,
        &properties::IDENTITY_OVERRIDES,
    )?;

    let mut features = selection.others;
    features.push(merged);

    info!(
        output = %output.display(),
        features = features.len(),
        "writing merged collection"
    );
    writer::write(output, features)
}
