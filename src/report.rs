// Reporting: category counts and the summary report file.

use crate::category::Category;
use crate::record::{FileLog, Record};
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::path::Path;

/// Per-category counts, iterated in the order each category first appears
/// in the log. Ties for "most frequent" resolve to the earliest of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    entries: Vec<(Category, usize)>,
}

impl CategoryCounts {
    pub fn from_records(records: &[Record]) -> Self {
        let mut entries: Vec<(Category, usize)> = Vec::new();
        for record in records {
            match entries.iter_mut().find(|(c, _)| *c == record.category) {
                Some((_, n)) => *n += 1,
                None => entries.push((record.category, 1)),
            }
        }
        CategoryCounts { entries }
    }

    pub fn get(&self, category: Category) -> usize {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map_or(0, |(_, n)| *n)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        self.entries.iter().copied()
    }

    /// First category holding the maximum count.
    pub fn most_frequent(&self) -> Option<Category> {
        let mut best: Option<(Category, usize)> = None;
        for &(category, n) in &self.entries {
            if best.map_or(true, |(_, top)| n > top) {
                best = Some((category, n));
            }
        }
        best.map(|(category, _)| category)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub counts: CategoryCounts,
    pub most_frequent: Option<Category>,
}

impl Summary {
    pub fn from_log(log: &FileLog) -> Self {
        let counts = CategoryCounts::from_records(log.records());
        Summary {
            total: log.len(),
            most_frequent: counts.most_frequent(),
            counts,
        }
    }

    /// The report text exactly as written to disk.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("=== DAILY SUMMARY REPORT ===\n");
        let _ = writeln!(out, "Total files logged: {}", self.total);
        for (category, n) in self.counts.iter() {
            let _ = writeln!(out, "{category}: {n}");
        }
        let top = self.most_frequent.map_or("None", Category::label);
        let _ = writeln!(out, "Most frequent type: {top}");
        out
    }
}

/// Overwrite the report at `path` with a summary of `log`.
pub fn write_summary(path: &Path, log: &FileLog) -> Result<Summary> {
    let summary = Summary::from_log(log);
    std::fs::write(path, summary.render())
        .with_context(|| format!("Failed to write summary report {}", path.display()))?;
    log::debug!("summary written to {} ({} records)", path.display(), summary.total);
    Ok(summary)
}
