/*
This code is part of the region_merge geospatial utility.
Created: 23/08/2026
License: MIT
*/
use std::io::Write;
use std::path::Path;

use serde_json::{json, Value as JsonValue};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::MergeError;

/// Serializes `features` as a pretty-printed FeatureCollection at `path`.
///
/// The features are raw JSON values and are emitted exactly as given, so
/// untouched features keep their original key order, number representations,
/// and foreign members. The document is written to a temporary file in the
/// destination directory and renamed into place, so a failure part-way never
/// leaves a truncated file that could pass for a complete result. Non-ASCII
/// text in property values is written verbatim.
pub fn write(path: &Path, features: Vec<JsonValue>) -> Result<(), MergeError> {
    let count = features.len();
    let document = json!({
        "type": "FeatureCollection",
        "features": features
    });

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(|source| write_error(path, source))?;

    serde_json::to_writer_pretty(&mut tmp, &document)
        .map_err(|e| write_error(path, e.into()))?;
    tmp.flush().map_err(|source| write_error(path, source))?;
    tmp.persist(path)
        .map_err(|persist| write_error(path, persist.error))?;

    debug!(features = count, path = %path.display(), "wrote feature collection");
    Ok(())
}

fn write_error(path: &Path, source: std::io::Error) -> MergeError {
    MergeError::Write {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod test {
    use super::write;
    use crate::error::MergeError;
    use serde_json::{json, Value};

    fn feature_with_name(name: &str) -> Value {
        json!({
            "type": "Feature",
            "properties": { "name_ar": name },
            "geometry": null
        })
    }

    #[test]
    fn writes_a_readable_collection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.geojson");
        write(&path, vec![feature_with_name("test")]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["type"], json!("FeatureCollection"));
        assert_eq!(value["features"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn features_are_emitted_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.geojson");
        let feature = json!({
            "type": "Feature",
            "properties": { "admin": "Jordan" },
            "geometry": { "type": "Polygon", "coordinates": [[[10, 0], [11, 0], [11, 1], [10, 0]]] },
            "custom_member": true
        });
        write(&path, vec![feature.clone()]).unwrap();
        let value: Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["features"][0], feature);
    }

    #[test]
    fn non_ascii_text_is_not_escaped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.geojson");
        write(&path, vec![feature_with_name("فلسطين")]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("فلسطين"));
        assert!(!text.contains("\\u"));
    }

    #[test]
    fn unwritable_destination_is_a_write_error() {
        let path = std::path::Path::new("/no/such/dir/out.geojson");
        match write(path, vec![]) {
            Err(MergeError::Write { .. }) => {}
            other => panic!("expected Write error, got {:?}", other),
        }
        assert!(!path.exists());
    }
}
