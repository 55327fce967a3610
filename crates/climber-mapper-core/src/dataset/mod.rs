//! Dataset loading.
//!
//! Each state has two newline-delimited JSON files under the data
//! directory: `<state>-areas.jsonlines` and `<state>-routes.jsonlines`.
//! Route lines are flattened on load.

pub mod loader;

pub use loader::{parse_jsonlines, Dataset, DatasetLoader, DEFAULT_DATA_DIR};
