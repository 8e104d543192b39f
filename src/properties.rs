/*
This code is part of the region_merge geospatial utility.
Created: 23/08/2026
License: MIT
*/
use geojson::JsonObject;
use once_cell::sync::Lazy;
use serde_json::{json, Value as JsonValue};

/// The `properties.admin` value of the feature merged away.
pub const SOURCE_ADMIN: &str = "Israel";

/// The `properties.admin` value of the feature whose property set seeds the
/// merged result.
pub const TARGET_ADMIN: &str = "Palestine";

/// Numeric fields recomputed as the sum of both inputs, an absent or
/// non-numeric value counting as zero.
pub const AGGREGATE_FIELDS: [&str; 2] = ["pop_est", "gdp_md"];

/// The canonical identity of the merged entity: administrative codes,
/// classification fields, and multilingual names, written over the target
/// feature's property set. Immutable; the aggregate fields are computed
/// separately in `reconcile`.
pub static IDENTITY_OVERRIDES: Lazy<JsonObject> = Lazy::new(|| {
    let table = json!({
        "featurecla": "Admin-0 country",
        "scalerank": 1,
        "labelrank": 5,
        "sovereignt": "Palestine",
        "sov_a3": "PSE",
        "adm0_dif": 0,
        "level": 2,
        "type": "Sovereign country",
        "admin": "Palestine",
        "adm0_a3": "PSE",
        "geou_dif": 0,
        "geounit": "Palestine",
        "gu_a3": "PSE",
        "su_dif": 0,
        "subunit": "Palestine",
        "su_a3": "PSE",
        "brk_diff": 0,
        "name": "Palestine",
        "name_long": "Palestine",
        "brk_a3": "PSE",
        "brk_name": "Palestine",
        "formal_en": "State of Palestine",
        "formal_fr": null,
        "name_sort": "Palestine",
        "mapcolor7": 3,
        "mapcolor8": 2,
        "mapcolor9": 5,
        "mapcolor13": 8,
        "economy": "6. Developing region",
        "income_grp": "4. Lower middle income",
        "iso_a2": "PS",
        "iso_a3": "PSE",
        "iso_n3": "275",
        "un_a3": "275",
        "wb_a2": "PS",
        "wb_a3": "PSE",
        "continent": "Asia",
        "region_un": "Asia",
        "subregion": "Western Asia",
        "region_wb": "Middle East & North Africa",
        "name_ar": "فلسطين",
        "name_bn": "ফিলিস্তিন",
        "name_de": "Palästina",
        "name_en": "Palestine",
        "name_es": "Palestina",
        "name_fr": "Palestine",
        "name_el": "Παλαιστίνη",
        "name_hi": "फ़िलस्तीन",
        "name_it": "Palestina",
        "name_ja": "パレスチナ",
        "name_ko": "팔레스타인",
        "name_nl": "Palestina",
        "name_pl": "Palestyna",
        "name_pt": "Palestina",
        "name_ru": "Палестина",
        "name_tr": "Filistin",
        "name_vi": "Palestine",
        "name_zh": "巴勒斯坦"
    });
    match table {
        JsonValue::Object(map) => map,
        _ => unreachable!(),
    }
});

/// Builds the merged property set: a copy of the target's properties,
/// overwritten by the identity table, then the aggregate fields set to the
/// sum of both inputs. Never fails on a missing field.
pub fn reconcile(
    source: Option<&JsonObject>,
    target: Option<&JsonObject>,
    overrides: &JsonObject,
) -> JsonObject {
    let mut merged = target.cloned().unwrap_or_default();
    for (key, value) in overrides {
        merged.insert(key.clone(), value.clone());
    }
    for field in AGGREGATE_FIELDS {
        let total = numeric_field(source, field) + numeric_field(target, field);
        merged.insert(field.to_string(), as_json_number(total));
    }
    merged
}

fn numeric_field(properties: Option<&JsonObject>, key: &str) -> f64 {
    properties
        .and_then(|p| p.get(key))
        .and_then(JsonValue::as_f64)
        .unwrap_or(0.0)
}

// Integral sums stay integers in the output; int + int inputs must not come
// back as "7000000.0".
fn as_json_number(total: f64) -> JsonValue {
    if total.fract() == 0.0 && total.abs() < i64::MAX as f64 {
        JsonValue::from(total as i64)
    } else {
        JsonValue::from(total)
    }
}
