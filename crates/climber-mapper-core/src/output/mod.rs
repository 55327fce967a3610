//! Presentation of matched routes: a plain-text table for stdout and a
//! GeoJSON file for mapping tools.

pub mod geojson;
pub mod table;

pub use geojson::{output_filename, to_geojson_string, write_geojson};
pub use table::render_table;
