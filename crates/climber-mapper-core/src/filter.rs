//! Area and route filtering.
//!
//! All matching is case-sensitive, unanchored and literal: `"Joshua Tree"`
//! matches `"Joshua Tree National Park"`, `"Lurking"` matches
//! `"Lurking Fear"`, and characters like `'` or `.` carry no pattern meaning.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::dataset::Dataset;
use crate::models::{Area, ResultRow, Route};

/// What to look for in a loaded dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Substring of the area `path` selecting the region of interest
    pub parent_area: String,
    /// Substrings of route names; a route matching any one is kept
    pub route_queries: Vec<String>,
}

/// Names of every area whose path contains `parent_area`.
pub fn areas_in_parent<'a>(areas: &'a [Area], parent_area: &str) -> HashSet<&'a str> {
    areas
        .iter()
        .filter(|area| area.path_contains(parent_area))
        .filter_map(|area| area.area_name.as_deref())
        .collect()
}

/// Routes whose owning area is in `area_names`, in dataset order.
/// Routes without an area are dropped.
pub fn routes_in_areas<'a>(routes: &'a [Route], area_names: &HashSet<&str>) -> Vec<&'a Route> {
    routes
        .iter()
        .filter(|route| {
            route
                .area
                .as_deref()
                .map(|area| area_names.contains(area))
                .unwrap_or(false)
        })
        .collect()
}

/// Routes whose name contains at least one of `queries`.
///
/// Each route is kept once no matter how many queries hit it, and dataset
/// order is preserved. No queries means no routes.
pub fn routes_matching<'a>(routes: &[&'a Route], queries: &[String]) -> Vec<&'a Route> {
    routes
        .iter()
        .copied()
        .filter(|route| queries.iter().any(|q| route.name_contains(q)))
        .collect()
}

/// Queries that no route in `routes` matched.
pub fn unmatched_queries<'q>(routes: &[&Route], queries: &'q [String]) -> Vec<&'q str> {
    queries
        .iter()
        .filter(|q| !routes.iter().any(|route| route.name_contains(q)))
        .map(String::as_str)
        .collect()
}

/// Run the whole filter chain over a dataset.
pub fn run_query(dataset: &Dataset, query: &Query) -> Vec<ResultRow> {
    let area_names = areas_in_parent(&dataset.areas, &query.parent_area);
    debug!(parent_area = %query.parent_area, count = area_names.len(), "Matched areas");
    if area_names.is_empty() {
        warn!(parent_area = %query.parent_area, "No areas match parent area");
    }

    let in_parent = routes_in_areas(&dataset.routes, &area_names);
    debug!(count = in_parent.len(), "Routes in matched areas");

    let matched = routes_matching(&in_parent, &query.route_queries);
    debug!(count = matched.len(), "Routes matching queries");

    if !in_parent.is_empty() {
        for missing in unmatched_queries(&in_parent, &query.route_queries) {
            warn!(query = %missing, parent_area = %query.parent_area, "No route matches query");
        }
    }

    matched.into_iter().filter_map(to_result_row).collect()
}

fn to_result_row(route: &Route) -> Option<ResultRow> {
    Some(ResultRow {
        route_name: route.route_name.clone()?,
        area: route.area.clone()?,
        lnglat: route.lnglat.clone(),
        grade: route.us_grade.clone(),
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn area(name: &str, path: &str) -> Area {
        Area {
            area_name: Some(name.to_string()),
            path: Some(path.to_string()),
        }
    }

    fn route(name: &str, area: &str, grade: &str) -> Route {
        Route {
            route_name: Some(name.to_string()),
            area: Some(area.to_string()),
            lnglat: Some(serde_json::json!([-105.28, 39.93])),
            us_grade: Some(grade.to_string()),
        }
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn dataset() -> Dataset {
        Dataset {
            areas: vec![
                area("Eldorado Canyon SP", "Colorado > Boulder > Eldorado Canyon SP"),
                area("Bastille", "Colorado > Boulder > Eldorado Canyon SP > Bastille"),
                area("Redgarden Wall", "Colorado > Boulder > Eldorado Canyon SP > Redgarden Wall"),
                area("Flatirons", "Colorado > Boulder > Flatirons"),
            ],
            routes: vec![
                route("The Bastille Crack", "Bastille", "5.7"),
                route("Rewritten", "Redgarden Wall", "5.7"),
                route("Rebuffat's Arete", "Redgarden Wall", "5.10b"),
                route("Bastille Crack Direct", "Bastille", "5.9"),
                route("Bastille Buttress", "Flatirons", "5.6"),
                Route {
                    route_name: Some("Bastille Ghost".to_string()),
                    ..Default::default()
                },
            ],
        }
    }

    fn names(rows: &[ResultRow]) -> Vec<&str> {
        rows.iter().map(|r| r.route_name.as_str()).collect()
    }

    // -------------------------------------------------------------------------
    // Area filter
    // -------------------------------------------------------------------------

    #[test]
    fn test_areas_in_parent_substring() {
        let data = dataset();
        let matched = areas_in_parent(&data.areas, "Eldorado");
        assert_eq!(matched.len(), 3);
        assert!(matched.contains("Bastille"));
        assert!(!matched.contains("Flatirons"));
    }

    #[test]
    fn test_areas_in_parent_case_sensitive() {
        let data = dataset();
        assert!(areas_in_parent(&data.areas, "eldorado").is_empty());
    }

    #[test]
    fn test_areas_in_parent_empty_matches_all() {
        let data = dataset();
        assert_eq!(areas_in_parent(&data.areas, "").len(), 4);
    }

    // -------------------------------------------------------------------------
    // Route filter
    // -------------------------------------------------------------------------

    #[test]
    fn test_routes_in_areas_drops_other_and_missing_areas() {
        let data = dataset();
        let area_names = areas_in_parent(&data.areas, "Eldorado");
        let in_parent = routes_in_areas(&data.routes, &area_names);
        assert_eq!(in_parent.len(), 4);
        assert!(in_parent.iter().all(|r| r.area.as_deref() != Some("Flatirons")));
    }

    #[test]
    fn test_routes_matching_no_duplicates() {
        let data = dataset();
        let all: Vec<&Route> = data.routes.iter().collect();
        let queries = strings(&["Bastille", "Crack", "Bastille Crack"]);
        let matched = routes_matching(&all, &queries);

        let matched_names: Vec<_> = matched.iter().filter_map(|r| r.route_name.as_deref()).collect();
        assert_eq!(
            matched_names,
            vec!["The Bastille Crack", "Bastille Crack Direct", "Bastille Buttress", "Bastille Ghost"]
        );
    }

    #[test]
    fn test_routes_matching_no_queries() {
        let data = dataset();
        let all: Vec<&Route> = data.routes.iter().collect();
        assert!(routes_matching(&all, &[]).is_empty());
    }

    #[test]
    fn test_routes_matching_literal_not_pattern() {
        let data = dataset();
        let all: Vec<&Route> = data.routes.iter().collect();
        assert!(routes_matching(&all, &strings(&["5.7"])).is_empty());
        assert!(routes_matching(&all, &strings(&["Re.*"])).is_empty());
        assert_eq!(routes_matching(&all, &strings(&["Rebuffat's"])).len(), 1);
    }

    #[test]
    fn test_unmatched_queries() {
        let data = dataset();
        let all: Vec<&Route> = data.routes.iter().collect();
        let queries = strings(&["Rewritten", "Naked Edge"]);
        assert_eq!(unmatched_queries(&all, &queries), vec!["Naked Edge"]);
    }

    // -------------------------------------------------------------------------
    // Full query
    // -------------------------------------------------------------------------

    #[test]
    fn test_run_query_defaults() {
        let query = Query {
            parent_area: "Eldorado".to_string(),
            route_queries: strings(&["Rewritten", "Bastille", "Rebuffat's Arete"]),
        };
        let rows = run_query(&dataset(), &query);
        assert_eq!(
            names(&rows),
            vec!["The Bastille Crack", "Rewritten", "Rebuffat's Arete", "Bastille Crack Direct"]
        );
        assert_eq!(rows[2].area, "Redgarden Wall");
        assert_eq!(rows[2].grade.as_deref(), Some("5.10b"));
    }

    #[test]
    fn test_run_query_empty_parent_no_queries() {
        let query = Query {
            parent_area: String::new(),
            route_queries: vec![],
        };
        assert!(run_query(&dataset(), &query).is_empty());
    }

    #[test]
    fn test_run_query_unknown_parent() {
        let query = Query {
            parent_area: "Nonexistent Park".to_string(),
            route_queries: strings(&["Bastille"]),
        };
        assert!(run_query(&dataset(), &query).is_empty());
    }

    #[test]
    fn test_run_query_empty_query_string_matches_all_in_parent() {
        let query = Query {
            parent_area: "Redgarden".to_string(),
            route_queries: strings(&[""]),
        };
        assert_eq!(names(&run_query(&dataset(), &query)), vec!["Rewritten", "Rebuffat's Arete"]);
    }

    #[test]
    fn test_run_query_keeps_duplicate_records() {
        let mut data = dataset();
        data.routes.push(route("Rewritten", "Redgarden Wall", "5.7"));
        let query = Query {
            parent_area: "Eldorado".to_string(),
            route_queries: strings(&["Rewritten", "Rewrit"]),
        };
        assert_eq!(run_query(&data, &query).len(), 2);
    }
}
