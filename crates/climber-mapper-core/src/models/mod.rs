//! Data models for the climbing dataset.
//!
//! - `Area`: one line of the areas file
//! - `RouteRecord`, `Route`: one line of the routes file, raw and flattened
//! - `ResultRow`: a matched route
//! - `FeatureCollection` and friends: GeoJSON output

pub mod area;
pub mod geojson;
pub mod result;
pub mod route;

pub use area::Area;
pub use geojson::{Feature, FeatureCollection, Geometry, Properties};
pub use result::ResultRow;
pub use route::{Route, RouteGrade, RouteMetadata, RouteRecord};
