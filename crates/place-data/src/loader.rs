//! Parsing of the JSON seed files.
//!
//! The dataset directory contains two files exported from the web
//! application's persisted schema:
//! - `places.json`: array of place records
//! - `categories.json`: array of category records
//!
//! Parsing stops at deserialization; referential checks live in
//! [`crate::types::PlaceIndex::validate`].

use crate::error::{PlaceDataError, Result};
use crate::types::{Category, Place};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

fn read_json_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => PlaceDataError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => PlaceDataError::Io(e),
    })?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| PlaceDataError::Parse {
        file: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Parse the `places.json` file
pub fn parse_places(path: &Path) -> Result<Vec<Place>> {
    read_json_array(path)
}

/// Parse the `categories.json` file
pub fn parse_categories(path: &Path) -> Result<Vec<Category>> {
    read_json_array(path)
}
