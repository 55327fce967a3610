//! Route records as they appear in `<state>-routes.jsonlines`, and the
//! flattened form the filters work on.
//!
//! Nested fields are read leniently: a value of the wrong type becomes an
//! absent value instead of failing the whole file.

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Nested `metadata` object of a route line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteMetadata {
    #[serde(default, deserialize_with = "string_or_none")]
    pub parent_sector: Option<String>,
    /// Kept as raw JSON; normally `[longitude, latitude]`
    #[serde(default)]
    pub parent_lnglat: Option<Value>,
}

/// Nested `grade` object of a route line.
///
/// `YDS` carries the Yosemite Decimal grade for roped routes and the
/// V-scale grade for boulder problems.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteGrade {
    #[serde(rename = "YDS", default, deserialize_with = "string_or_none")]
    pub yds: Option<String>,
}

/// Raw route line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteRecord {
    #[serde(default, deserialize_with = "string_or_none")]
    pub route_name: Option<String>,
    #[serde(default, deserialize_with = "object_or_none")]
    pub metadata: Option<RouteMetadata>,
    #[serde(default, deserialize_with = "object_or_none")]
    pub grade: Option<RouteGrade>,
}

/// Route with its nested fields pulled up to the top level.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Route {
    pub route_name: Option<String>,
    /// Owning area name (`metadata.parent_sector`)
    pub area: Option<String>,
    /// `metadata.parent_lnglat`, untouched
    pub lnglat: Option<Value>,
    /// `grade.YDS`
    pub us_grade: Option<String>,
}

impl From<RouteRecord> for Route {
    fn from(record: RouteRecord) -> Self {
        let metadata = record.metadata.unwrap_or_default();
        Self {
            route_name: record.route_name,
            area: metadata.parent_sector,
            lnglat: metadata.parent_lnglat,
            us_grade: record.grade.and_then(|g| g.yds),
        }
    }
}

impl Route {
    pub fn name_contains(&self, needle: &str) -> bool {
        self.route_name
            .as_deref()
            .map(|name| name.contains(needle))
            .unwrap_or(false)
    }
}

/// Any JSON value; strings come through, everything else is None.
pub(crate) fn string_or_none<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

/// Any JSON value; values that don't fit `T` are None.
fn object_or_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}
