/*
This code is part of the region_merge geospatial utility.
Created: 23/08/2026
License: MIT
*/
use std::fs;
use std::path::Path;

use serde_json::Value as JsonValue;
use tracing::debug;

use crate::error::MergeError;

/// Reads a GeoJSON FeatureCollection from `path` and returns its features as
/// raw JSON values.
///
/// Features are deliberately not decoded into a typed geometry model here:
/// features that take no part in the merge must round-trip to the output
/// exactly as they appeared in the input, so only the two merge candidates
/// ever get their geometry parsed (by the merger).
///
/// An unreadable file is a `Read` error, a document that is not valid JSON is
/// a `Parse` error, and valid JSON that is not a FeatureCollection (not an
/// object, wrong `type` tag, missing or non-array `features`) is a `Schema`
/// error.
pub fn load(path: &Path) -> Result<Vec<JsonValue>, MergeError> {
    let text = fs::read_to_string(path).map_err(|source| MergeError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let document: JsonValue = serde_json::from_str(&text).map_err(MergeError::Parse)?;
    let JsonValue::Object(mut document) = document else {
        return Err(MergeError::Schema("document is not a JSON object".to_string()));
    };

    if document.get("type").and_then(JsonValue::as_str) != Some("FeatureCollection") {
        return Err(MergeError::Schema(
            "expected a \"type\" tag of \"FeatureCollection\"".to_string(),
        ));
    }

    match document.remove("features") {
        Some(JsonValue::Array(features)) => {
            debug!(features = features.len(), "read feature collection");
            Ok(features)
        }
        Some(_) => Err(MergeError::Schema(
            "\"features\" is not an array".to_string(),
        )),
        None => Err(MergeError::Schema(
            "document has no \"features\" array".to_string(),
        )),
    }
}
