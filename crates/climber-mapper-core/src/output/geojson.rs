use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::info;

use crate::error::{MapperError, Result};
use crate::models::{FeatureCollection, ResultRow};

/// Indentation used for the exported file
const INDENT: &[u8] = b"    ";

/// `<parent_area>_<YYYY-MM-DD>_coordinates.json`
pub fn output_filename(parent_area: &str, date: NaiveDate) -> String {
    format!("{}_{}_coordinates.json", parent_area, date.format("%Y-%m-%d"))
}

/// Serialize with four-space indentation and no trailing newline.
pub fn to_geojson_string(collection: &FeatureCollection) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    collection.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf)?)
}

/// Write one Point feature per row to `<output_dir>/<filename>`, replacing
/// any file already there. Returns the written path.
pub fn write_geojson(
    output_dir: &Path,
    parent_area: &str,
    date: NaiveDate,
    rows: &[ResultRow],
) -> Result<PathBuf> {
    let collection = FeatureCollection::from_rows(rows);
    let contents = to_geojson_string(&collection)?;

    let path = output_dir.join(output_filename(parent_area, date));
    std::fs::write(&path, contents).map_err(|source| MapperError::OutputWrite {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), features = collection.features.len(), "Wrote GeoJSON");
    Ok(path)
}
