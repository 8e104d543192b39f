/*
This code is part of the region_merge geospatial utility.
Created: 23/08/2026
License: MIT
*/
use std::cmp::Ordering;

use geo::{Area, BooleanOps, Coord, LineString, MultiPolygon, Polygon};
use geojson::{Geometry, JsonObject, PolygonType, Value};
use serde_json::{json, Value as JsonValue};
use tracing::debug;

use crate::error::MergeError;
use crate::properties;

/// Merges two features into one: the geometric union of their outer
/// boundaries, reduced to the largest connected component, carrying the
/// reconciled property set.
///
/// The two candidates are the only features whose geometry is ever decoded;
/// everything else in the collection stays raw JSON. Input holes are
/// discarded when the polygons are built, and any holes in the dominant union
/// component are discarded again on output; the merged geometry is always a
/// single-ring Polygon.
pub fn merge(
    source: &JsonValue,
    target: &JsonValue,
    overrides: &JsonObject,
) -> Result<JsonValue, MergeError> {
    let mut polygons = outer_polygons(source)?;
    polygons.extend(outer_polygons(target)?);
    debug!(polygons = polygons.len(), "built input polygons");

    let unioned = union_all(&polygons);
    debug!(components = unioned.0.len(), "computed union");

    let dominant = dominant_polygon(unioned)?;
    let exterior = exterior_ring(&dominant);

    let merged_properties = properties::reconcile(
        source.get("properties").and_then(JsonValue::as_object),
        target.get("properties").and_then(JsonValue::as_object),
        overrides,
    );

    Ok(json!({
        "type": "Feature",
        "properties": merged_properties,
        "geometry": {
            "type": "Polygon",
            "coordinates": [exterior]
        }
    }))
}

/// Builds one simple polygon per component of the feature's geometry, from
/// outer rings only. A Polygon contributes one; a MultiPolygon contributes
/// one per component.
fn outer_polygons(feature: &JsonValue) -> Result<Vec<Polygon<f64>>, MergeError> {
    let member = feature
        .get("geometry")
        .filter(|g| !g.is_null())
        .ok_or_else(|| MergeError::Geometry("feature has no geometry".to_string()))?;
    let geometry =
        Geometry::try_from(member.clone()).map_err(|e| MergeError::Geometry(e.to_string()))?;

    match &geometry.value {
        Value::Polygon(rings) => Ok(vec![outer_ring_to_polygon(rings)?]),
        Value::MultiPolygon(components) => {
            components.iter().map(outer_ring_to_polygon).collect()
        }
        other => Err(MergeError::Geometry(format!(
            "unsupported geometry type '{}', expected Polygon or MultiPolygon",
            type_name(other)
        ))),
    }
}

fn outer_ring_to_polygon(rings: &PolygonType) -> Result<Polygon<f64>, MergeError> {
    let outer = rings
        .first()
        .ok_or_else(|| MergeError::Geometry("polygon has no rings".to_string()))?;

    let mut coords = Vec::with_capacity(outer.len());
    for position in outer {
        if position.len() < 2 {
            return Err(MergeError::Geometry(format!(
                "coordinate with {} ordinate(s), expected at least 2",
                position.len()
            )));
        }
        coords.push(Coord {
            x: position[0],
            y: position[1],
        });
    }

    let mut ring = LineString::new(coords);
    ring.close();
    // A closed ring needs three distinct vertices plus the closing point.
    if ring.0.len() < 4 {
        return Err(MergeError::Geometry(format!(
            "ring with {} point(s) cannot bound an area",
            ring.0.len()
        )));
    }
    Ok(Polygon::new(ring, vec![]))
}

fn union_all(polygons: &[Polygon<f64>]) -> MultiPolygon<f64> {
    let Some((first, rest)) = polygons.split_first() else {
        return MultiPolygon::new(vec![]);
    };
    let mut merged = MultiPolygon::new(vec![first.clone()]);
    for polygon in rest {
        merged = merged.union(&MultiPolygon::new(vec![polygon.clone()]));
    }
    merged
}

/// Picks the largest-area component of a union result; smaller disjoint
/// components are dropped silently.
fn dominant_polygon(unioned: MultiPolygon<f64>) -> Result<Polygon<f64>, MergeError> {
    unioned
        .0
        .into_iter()
        .max_by(|a, b| {
            a.unsigned_area()
                .partial_cmp(&b.unsigned_area())
                .unwrap_or(Ordering::Equal)
        })
        .ok_or_else(|| MergeError::Geometry("union produced no polygons".to_string()))
}

fn exterior_ring(polygon: &Polygon<f64>) -> Vec<Vec<f64>> {
    polygon
        .exterior()
        .coords()
        .map(|c| vec![c.x, c.y])
        .collect()
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}
