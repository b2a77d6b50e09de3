//! Record batch input
//!
//! Deserializes an already-harvested batch of records. Both snapshot
//! shapes are accepted: the wrapped object written by the harvester
//! (`{"papers": [...]}`) and a bare array.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use pta_domain::entities::Paper;
use pta_domain::error::{Error, Result};

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordBatch {
    Wrapped { papers: Vec<Paper> },
    Bare(Vec<Paper>),
}

/// Parse a record batch from JSON text.
pub fn parse_records(json: &str) -> Result<Vec<Paper>> {
    let batch: RecordBatch = serde_json::from_str(json)
        .map_err(|e| Error::invalid_argument(format!("Invalid records JSON: {e}")))?;
    Ok(match batch {
        RecordBatch::Wrapped { papers } => papers,
        RecordBatch::Bare(papers) => papers,
    })
}

/// Read a record batch from a file, or from stdin when no path is given.
pub fn read_records(path: Option<&Path>) -> Result<Vec<Paper>> {
    let json = match path {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            Error::io_with_source(format!("Failed to read records from {}", path.display()), e)
        })?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| Error::io_with_source("Failed to read records from stdin", e))?;
            buffer
        }
    };
    parse_records(&json)
}
