// Data model: a `Record` is one logged file, a `FileLog` is the ordered
// list of records for the session. Only `add` mutates the log.

use crate::category::{detect_category, Category};
use crate::report::CategoryCounts;
use std::fmt;

/// One logged file and its derived category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub category: Category,
}

impl Record {
    /// Build a record, deriving the category from the name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let category = detect_category(&name);
        Record { name, category }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.category)
    }
}

/// Emitted when a category reaches the cleanup threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupWarning {
    pub category: Category,
    pub count: usize,
}

impl fmt::Display for CleanupWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "⚠️ You now have {} {} files. Consider cleaning or organizing them!",
            self.count,
            self.category.label().to_lowercase()
        )
    }
}

/// Result of `FileLog::add`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added {
        record: Record,
        cleanup: Option<CleanupWarning>,
    },
    Duplicate,
    /// Names containing a comma cannot be stored in the flat line format.
    Rejected,
}

impl fmt::Display for AddOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddOutcome::Added { record, .. } => {
                write!(f, "{} added as {}.", record.name, record.category)
            }
            AddOutcome::Duplicate => f.write_str("This file already exists in the log. Skipped."),
            AddOutcome::Rejected => f.write_str("File names cannot contain commas. Skipped."),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileLog {
    records: Vec<Record>,
}

impl FileLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        FileLog { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.iter().any(|r| r.name == name)
    }

    /// Append `name` unless it is already logged. A cleanup warning is
    /// attached every time the new record's category count is at or above
    /// `cleanup_threshold`, not only when it first crosses it.
    pub fn add(&mut self, name: &str, cleanup_threshold: usize) -> AddOutcome {
        let name = name.trim();
        if self.contains(name) {
            return AddOutcome::Duplicate;
        }
        if name.contains(',') {
            return AddOutcome::Rejected;
        }

        let record = Record::new(name);
        self.records.push(record.clone());

        let count = CategoryCounts::from_records(&self.records).get(record.category);
        let cleanup = (count >= cleanup_threshold).then_some(CleanupWarning {
            category: record.category,
            count,
        });
        log::debug!("added {:?}, {} in category", record, count);
        AddOutcome::Added { record, cleanup }
    }

    /// Records whose name contains `keyword`, ignoring case, in log order.
    pub fn search(&self, keyword: &str) -> Vec<&Record> {
        let keyword = keyword.trim().to_lowercase();
        self.records
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&keyword))
            .collect()
    }
}
