// Storage module: the primary store and the backup share one flat format,
// one `name,category` line per record with no header and no escaping.
// Every save rewrites the whole file.

use crate::category::{Category, UnknownCategory};
use crate::record::Record;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: expected `name,category`, found {content:?}")]
    Malformed { line: usize, content: String },
    #[error("line {line}: {source}")]
    UnknownCategory {
        line: usize,
        #[source]
        source: UnknownCategory,
    },
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Read records from `path`. A missing file is created empty.
pub fn load(path: &Path) -> Result<Vec<Record>, StoreError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::info!("{} not found, creating an empty store", path.display());
            fs::write(path, "").map_err(io_error(path))?;
            return Ok(Vec::new());
        }
        Err(e) => return Err(io_error(path)(e)),
    };

    let records = parse(&text)?;
    log::debug!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Parse store text. Blank lines are skipped; anything else must be
/// exactly two fields with a known category label.
pub fn parse(text: &str) -> Result<Vec<Record>, StoreError> {
    let mut records = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').collect();
        let [name, label] = fields.as_slice() else {
            return Err(StoreError::Malformed {
                line: idx + 1,
                content: line.to_string(),
            });
        };
        let category: Category = label.parse().map_err(|source| StoreError::UnknownCategory {
            line: idx + 1,
            source,
        })?;
        records.push(Record {
            name: name.to_string(),
            category,
        });
    }
    Ok(records)
}

pub fn render(records: &[Record]) -> String {
    records
        .iter()
        .map(|r| format!("{},{}\n", r.name, r.category))
        .collect()
}

/// Overwrite `path` with `records` in order. Not atomic.
pub fn save(path: &Path, records: &[Record]) -> Result<(), StoreError> {
    fs::write(path, render(records)).map_err(io_error(path))?;
    log::debug!("saved {} records to {}", records.len(), path.display());
    Ok(())
}
