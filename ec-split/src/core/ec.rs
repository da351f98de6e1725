use anyhow::Result;
use config::{
    file_stem, sanitize_filename, DEFAULT_EXTENSION, EC_KEY_COL, EC_SUMMARY_SUFFIX,
    SUMMARY_PREVIEW,
};
use ecpack::{extract_ec_list, write_records, Assignment, EcNumber, Table};
use log::{info, warn};
use serde::Serialize;

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::cli::{EcArgs, SplitMode};

/// one line of the `<stem>_EC_summary.tsv` file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EcKeySummary {
    #[serde(rename = "EC_key")]
    pub ec_key: String,
    pub rows: usize,
    pub file: String,
}

impl EcKeySummary {
    pub const HEADER: [&'static str; 3] = ["EC_key", "rows", "file"];
}

/// bucket keys for one row under the given mode
pub fn row_keys(ecs: &[EcNumber], mode: SplitMode) -> Vec<String> {
    let no_ec = Assignment::NoEc.to_string();

    match mode {
        SplitMode::First => vec![ecs
            .first()
            .map(|ec| ec.to_string())
            .unwrap_or(no_ec)],
        SplitMode::Joined => {
            if ecs.is_empty() {
                vec![no_ec]
            } else {
                vec![ecs
                    .iter()
                    .map(|ec| ec.as_str())
                    .collect::<Vec<_>>()
                    .join("|")]
            }
        }
        SplitMode::Explode => {
            if ecs.is_empty() {
                vec![no_ec]
            } else {
                ecs.iter().map(|ec| ec.to_string()).collect()
            }
        }
    }
}

/// Split a table into one file per EC key
///
/// ECs come from `--ec-col`, or from `--cat-col` when the former is
/// absent. Every written file keeps the input columns and gains an
/// `EC_key` column.
pub fn split_by_ec(args: EcArgs) -> Result<PathBuf> {
    let sep = args.separator();
    let table = Table::read(&args.input, sep)?;

    let source = table
        .find_column(&args.ec_col)
        .or_else(|| table.find_column(&args.cat_col));

    if source.is_none() {
        warn!(
            "Neither '{}' nor '{}' found in {}. Every row goes to {}",
            args.ec_col,
            args.cat_col,
            table.source(),
            Assignment::NoEc
        );
    }

    let mut buckets: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for row in 0..table.len() {
        let ecs = match source {
            Some(col) => extract_ec_list(table.cell(row, col)),
            None => Vec::new(),
        };

        for key in row_keys(&ecs, args.mode) {
            buckets.entry(key).or_default().push(row);
        }
    }

    let stem = file_stem(&args.input);
    let extension = args
        .input
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());

    let out_dir = args.out_dir();
    std::fs::create_dir_all(&out_dir)?;

    let mut summary = Vec::with_capacity(buckets.len());
    for (key, rows) in &buckets {
        let file = format!("{}_EC_{}{}", stem, sanitize_filename(key), extension);

        let mut part = table.subset(rows);
        part.push_column(EC_KEY_COL, vec![key.clone(); rows.len()])?;
        part.write(out_dir.join(&file), sep)?;

        summary.push(EcKeySummary {
            ec_key: key.clone(),
            rows: rows.len(),
            file,
        });
    }

    summary.sort_by(|a, b| b.rows.cmp(&a.rows).then_with(|| a.ec_key.cmp(&b.ec_key)));

    let summary_file = out_dir.join(format!("{}{}", stem, EC_SUMMARY_SUFFIX));
    write_records(&summary_file, b'\t', &EcKeySummary::HEADER, &summary)?;

    info!("Input rows: {}", table.len());
    if args.mode == SplitMode::Explode {
        info!(
            "Exploded rows (rows with multiple ECs counted multiple times): {}",
            summary.iter().map(|s| s.rows).sum::<usize>()
        );
    }
    info!("Output directory: {}", out_dir.display());
    info!("Summary written: {}", summary_file.display());
    info!("Top {} EC groups:", SUMMARY_PREVIEW);
    for s in summary.iter().take(SUMMARY_PREVIEW) {
        info!("  {}\t{}\t{}", s.ec_key, s.rows, s.file);
    }

    Ok(out_dir)
}
