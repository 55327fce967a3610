//! Core library for climber-mapper.
//!
//! Loads a state's climbing areas and routes from newline-delimited JSON,
//! narrows them to named routes inside a parent area, and renders the result
//! as a text table and a GeoJSON `FeatureCollection`.
//!
//! ```no_run
//! use climber_mapper_core::{run_query, DatasetLoader, Query};
//!
//! let dataset = DatasetLoader::new("all_routes").load_state("co")?;
//! let rows = run_query(&dataset, &Query {
//!     parent_area: "Eldorado".to_string(),
//!     route_queries: vec!["Bastille".to_string()],
//! });
//! println!("{}", climber_mapper_core::render_table(&rows));
//! # Ok::<(), climber_mapper_core::MapperError>(())
//! ```

pub mod dataset;
pub mod error;
pub mod filter;
pub mod models;
pub mod output;
pub mod utils;

pub use dataset::{Dataset, DatasetLoader, DEFAULT_DATA_DIR};
pub use error::{MapperError, Result};
pub use filter::{run_query, Query};
pub use models::{Area, FeatureCollection, ResultRow, Route};
pub use output::{render_table, write_geojson};
