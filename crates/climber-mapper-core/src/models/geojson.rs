//! GeoJSON output types.
//!
//! Properties follow the simplestyle marker keys understood by CalTopo and
//! similar mapping tools.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::ResultRow;

pub const MARKER_SYMBOL: &str = "point";

// TODO: color by discipline (trad/sport/boulder) once the route `type` field is read
pub const MARKER_COLOR: &str = "FF0000";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn from_rows(rows: &[ResultRow]) -> Self {
        Self {
            kind: "FeatureCollection".to_string(),
            features: rows.iter().map(Feature::from_row).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: String,
    pub geometry: Geometry,
    pub properties: Properties,
}

impl Feature {
    pub fn from_row(row: &ResultRow) -> Self {
        Self {
            kind: "Feature".to_string(),
            geometry: Geometry {
                kind: "Point".to_string(),
                coordinates: row.lnglat.clone(),
            },
            properties: Properties {
                marker_symbol: MARKER_SYMBOL.to_string(),
                description: row.description(),
                title: row.area.clone(),
                marker_color: MARKER_COLOR.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
    /// Raw `parent_lnglat` from the dataset; null when the route had none
    pub coordinates: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Properties {
    #[serde(rename = "marker-symbol")]
    pub marker_symbol: String,
    pub description: String,
    pub title: String,
    #[serde(rename = "marker-color")]
    pub marker_color: String,
}
