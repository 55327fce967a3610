use serde_json::Value;

/// One matched route, ready for the table and the GeoJSON export.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub route_name: String,
    pub area: String,
    /// Raw `parent_lnglat`
    pub lnglat: Option<Value>,
    pub grade: Option<String>,
}

impl ResultRow {
    /// Route name and grade separated by a space.
    pub fn description(&self) -> String {
        match self.grade.as_deref() {
            Some(grade) => format!("{} {}", self.route_name, grade),
            None => self.route_name.clone(),
        }
    }
}
