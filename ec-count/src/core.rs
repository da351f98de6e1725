use anyhow::Result;
use ecpack::Table;
use hashbrown::{HashMap, HashSet};
use log::info;

use std::path::Path;

use crate::cli::Args;

/// entry base name: everything before the first `_`
///
/// ```
/// assert_eq!(ec_count::core::base_name("NNMT_HUMAN"), "NNMT");
/// assert_eq!(ec_count::core::base_name("NNMT"), "NNMT");
/// ```
pub fn base_name(entry: &str) -> &str {
    entry.split('_').next().unwrap_or(entry)
}

/// Frequency counter that remembers first appearance
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Counter {
    order: Vec<String>,
    counts: HashMap<String, usize>,
}

impl Counter {
    pub fn add(&mut self, key: &str) {
        match self.counts.get_mut(key) {
            Some(n) => *n += 1,
            None => {
                self.order.push(key.to_string());
                self.counts.insert(key.to_string(), 1);
            }
        }
    }

    /// add `other` on top, new keys go after the existing ones
    pub fn merge(&mut self, other: &Counter) {
        for key in &other.order {
            let n = other.counts.get(key).copied().unwrap_or(0);
            match self.counts.get_mut(key) {
                Some(total) => *total += n,
                None => {
                    self.order.push(key.clone());
                    self.counts.insert(key.clone(), n);
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// `n` most frequent keys, ties kept in first-appearance order
    pub fn most_common(&self, n: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .order
            .iter()
            .map(|k| (k.as_str(), self.counts.get(k).copied().unwrap_or(0)))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

/// Counts for one input table
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EntryCounts {
    pub rows: usize,
    pub entries: HashSet<String>,
    pub bases: Counter,
}

impl EntryCounts {
    pub fn add(&mut self, entry: &str) {
        self.rows += 1;
        self.entries.insert(entry.to_string());

        let base = base_name(entry);
        if !base.is_empty() {
            self.bases.add(base);
        }
    }

    pub fn merge(&mut self, other: EntryCounts) {
        self.rows += other.rows;
        self.bases.merge(&other.bases);
        self.entries.extend(other.entries);
    }
}

/// Read the entry column of one table
///
/// Values are trimmed and empty ones dropped. A missing column is an
/// error listing the columns that do exist.
pub fn count_entries<P: AsRef<Path>>(path: P, col: &str) -> Result<EntryCounts> {
    let table = Table::read(path, b'\t')?;
    let idx = table.column(col)?;

    let mut counts = EntryCounts::default();
    for value in table.values(idx).map(str::trim).filter(|v| !v.is_empty()) {
        counts.add(value);
    }

    Ok(counts)
}

fn log_top(counter: &Counter, n: usize) {
    if n == 0 || counter.is_empty() {
        return;
    }

    info!("Top {} base names:", n);
    for (base, count) in counter.most_common(n) {
        info!("  {:<20} {}", base, count);
    }
}

/// Count unique entries per file and across all files
///
/// Returns the overall counts, the per-file ones are only reported.
pub fn count_unique(args: Args) -> Result<EntryCounts> {
    let mut overall = EntryCounts::default();

    for file in &args.files {
        let counts = count_entries(file, &args.col)?;

        info!("File: {}", file.display());
        info!("  Non-empty {} rows: {}", args.col, counts.rows);
        info!("  Unique {}: {}", args.col, counts.entries.len());
        info!("  Unique base names: {}", counts.bases.len());
        log_top(&counts.bases, args.top);

        overall.merge(counts);
    }

    info!("Overall ({} files)", args.files.len());
    info!("  Unique {}: {}", args.col, overall.entries.len());
    info!("  Unique base names: {}", overall.bases.len());
    log_top(&overall.bases, args.top);

    Ok(overall)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_most_common_keeps_first_appearance_on_ties() {
        let mut counter = Counter::default();
        for k in ["B", "A", "C", "A", "C"] {
            counter.add(k);
        }

        assert_eq!(counter.most_common(3), vec![("A", 2), ("C", 2), ("B", 1)]);
        assert_eq!(counter.most_common(1), vec![("A", 2)]);
        assert!(counter.most_common(0).is_empty());
    }

    #[test]
    fn test_count_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "MT2.tsv",
            "Entry\tEntry Name\n\
             P1\tNNMT_HUMAN\n\
             P2\tNNMT_MOUSE\n\
             P3\t NNMT_HUMAN \n\
             P4\t\n\
             P5\tCOMT_HUMAN\n",
        );

        let counts = count_entries(&path, "Entry Name").unwrap();
        assert_eq!(counts.rows, 4);
        assert_eq!(counts.entries.len(), 3);
        assert_eq!(counts.bases.len(), 2);
        assert_eq!(counts.bases.most_common(1), vec![("NNMT", 3)]);
    }

    #[test]
    fn test_empty_base_names_are_not_counted() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "a.tsv", "Entry Name\n_HUMAN\nNNMT_HUMAN\n");

        let counts = count_entries(&path, "Entry Name").unwrap();
        assert_eq!(counts.rows, 2);
        assert_eq!(counts.entries.len(), 2);
        assert_eq!(counts.bases.len(), 1);
        assert_eq!(counts.bases.most_common(15), vec![("NNMT", 1)]);
    }

    #[test]
    fn test_count_unique_across_files() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.tsv", "Entry Name\nNNMT_HUMAN\nCOMT_HUMAN\n");
        let b = write(dir.path(), "b.tsv", "Entry Name\nNNMT_HUMAN\nCOMT_RAT\nTPMT_HUMAN\n");

        let overall = count_unique(Args {
            files: vec![a, b],
            col: "Entry Name".to_string(),
            top: 15,
        })
        .unwrap();

        assert_eq!(overall.rows, 5);
        assert_eq!(overall.entries.len(), 4);
        assert_eq!(overall.bases.len(), 3);
        assert_eq!(
            overall.bases.most_common(3),
            vec![("NNMT", 2), ("COMT", 2), ("TPMT", 1)]
        );
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "a.tsv", "Entry\nP1\n");

        let err = count_entries(&path, "Entry Name").unwrap_err().to_string();
        assert!(err.contains("'Entry Name'"));
        assert!(err.contains("Entry"));
    }
}
