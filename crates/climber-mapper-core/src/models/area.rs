use serde::{Deserialize, Serialize};

use crate::models::route::string_or_none;

/// One line of `<state>-areas.jsonlines`.
///
/// `path` is the hierarchical location string, e.g.
/// `"Colorado > Boulder > Eldorado Canyon SP > Redgarden Wall"`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Area {
    #[serde(default, deserialize_with = "string_or_none")]
    pub area_name: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub path: Option<String>,
}

impl Area {
    /// Case-sensitive, unanchored substring match against the area path.
    /// Areas without a path never match.
    pub fn path_contains(&self, needle: &str) -> bool {
        self.path
            .as_deref()
            .map(|path| path.contains(needle))
            .unwrap_or(false)
    }
}
