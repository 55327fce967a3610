//! Positional argument resolution.
//!
//! `climber_mapper [state] [parent_area] [route_query ...]`
//!
//! Quote area or route names that contain spaces.

use climber_mapper_core::Query;

pub const DEFAULT_STATE: &str = "co";
pub const DEFAULT_PARENT_AREA: &str = "Eldorado";
pub const DEFAULT_ROUTE_QUERIES: [&str; 3] = ["Rewritten", "Bastille", "Rebuffat's Arete"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// Lowercase state abbreviation naming the dataset files
    pub state: String,
    pub parent_area: String,
    pub route_queries: Vec<String>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            state: DEFAULT_STATE.to_string(),
            parent_area: DEFAULT_PARENT_AREA.to_string(),
            route_queries: DEFAULT_ROUTE_QUERIES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Args {
    /// Resolve from the process arguments, program name excluded.
    pub fn from_env() -> Self {
        Self::from_values(std::env::args().skip(1))
    }

    /// Anything not given keeps its default. Route queries are replaced as a
    /// whole, never merged with the defaults.
    pub fn from_values(values: impl IntoIterator<Item = String>) -> Self {
        let mut args = Self::default();
        let mut values = values.into_iter();

        if let Some(state) = values.next() {
            args.state = state;
        }
        if let Some(parent_area) = values.next() {
            args.parent_area = parent_area;
        }
        let route_queries: Vec<String> = values.collect();
        if !route_queries.is_empty() {
            args.route_queries = route_queries;
        }

        args
    }

    pub fn query(&self) -> Query {
        Query {
            parent_area: self.parent_area.clone(),
            route_queries: self.route_queries.clone(),
        }
    }
}
