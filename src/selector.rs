/*
This code is part of the region_merge geospatial utility.
Created: 23/08/2026
License: MIT
*/
use serde_json::Value as JsonValue;

use crate::error::MergeError;

/// The outcome of partitioning a collection: the two merge candidates plus
/// every remaining feature, untouched and in its original relative order.
#[derive(Debug)]
pub struct Selection {
    pub source: JsonValue,
    pub target: JsonValue,
    pub others: Vec<JsonValue>,
}

/// Scans `features` once and classifies each one by its `properties.admin`
/// value. The first feature matching each target wins; any later match for an
/// already-filled slot falls through to `others`, as do features with no
/// properties, no `admin` key, or a non-string value.
///
/// Fails with `NotFound` naming every target that was not located.
pub fn partition(
    features: Vec<JsonValue>,
    source_admin: &str,
    target_admin: &str,
) -> Result<Selection, MergeError> {
    let mut source: Option<JsonValue> = None;
    let mut target: Option<JsonValue> = None;
    let mut others = Vec::with_capacity(features.len());

    for feature in features {
        let matches_source = admin_value(&feature) == Some(source_admin);
        let matches_target = admin_value(&feature) == Some(target_admin);
        if matches_source && source.is_none() {
            source = Some(feature);
        } else if matches_target && target.is_none() {
            target = Some(feature);
        } else {
            others.push(feature);
        }
    }

    match (source, target) {
        (Some(source), Some(target)) => Ok(Selection {
            source,
            target,
            others,
        }),
        (source, target) => {
            let mut missing = vec![];
            if source.is_none() {
                missing.push(source_admin.to_string());
            }
            if target.is_none() {
                missing.push(target_admin.to_string());
            }
            Err(MergeError::NotFound { missing })
        }
    }
}

fn admin_value(feature: &JsonValue) -> Option<&str> {
    feature.get("properties")?.get("admin")?.as_str()
}

#[cfg(test)]
mod test {
    use super::{admin_value, partition};
    use crate::error::MergeError;
    use serde_json::{json, Value};

    fn named_feature(admin: &str) -> Value {
        json!({
            "type": "Feature",
            "properties": { "admin": admin },
            "geometry": null
        })
    }

    #[test]
    fn partitions_into_three_buckets() {
        let features = vec![
            named_feature("Jordan"),
            named_feature("Israel"),
            named_feature("Egypt"),
            named_feature("Palestine"),
            named_feature("Lebanon"),
        ];
        let selection = partition(features, "Israel", "Palestine").unwrap();
        assert_eq!(admin_value(&selection.source), Some("Israel"));
        assert_eq!(admin_value(&selection.target), Some("Palestine"));
        let others: Vec<_> = selection.others.iter().map(|f| admin_value(f)).collect();
        assert_eq!(
            others,
            vec![Some("Jordan"), Some("Egypt"), Some("Lebanon")]
        );
    }

    #[test]
    fn first_match_wins_and_duplicates_become_others() {
        let features = vec![
            named_feature("Israel"),
            named_feature("Israel"),
            named_feature("Palestine"),
        ];
        let selection = partition(features, "Israel", "Palestine").unwrap();
        assert_eq!(selection.others.len(), 1);
        assert_eq!(admin_value(&selection.others[0]), Some("Israel"));
    }

    #[test]
    fn missing_targets_are_named_in_the_error() {
        let features = vec![named_feature("Jordan")];
        match partition(features, "Israel", "Palestine") {
            Err(MergeError::NotFound { missing }) => {
                assert_eq!(missing, vec!["Israel".to_string(), "Palestine".to_string()]);
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn one_missing_target_is_reported_alone() {
        let features = vec![named_feature("Israel"), named_feature("Jordan")];
        match partition(features, "Israel", "Palestine") {
            Err(MergeError::NotFound { missing }) => {
                assert_eq!(missing, vec!["Palestine".to_string()]);
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn features_without_admin_are_others() {
        let features = vec![
            json!({ "type": "Feature", "geometry": null }),
            named_feature("Israel"),
            named_feature("Palestine"),
        ];
        let selection = partition(features, "Israel", "Palestine").unwrap();
        assert_eq!(selection.others.len(), 1);
    }

    #[test]
    fn selection_debug_format_is_available() {
        let features = vec![named_feature("Israel"), named_feature("Palestine")];
        let selection = partition(features, "Israel", "Palestine").unwrap();
        let rendered = format!("{:?}", selection);
        assert!(rendered.contains("Selection"));
    }
}
