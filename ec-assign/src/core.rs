use anyhow::Result;
use config::MT_GROUP_COL;
use ecpack::{extract_ec_list, load_ec_to_group, write_records, EcGroupMap, Table};
use hashbrown::{HashMap, HashSet};
use log::info;
use serde::Serialize;

use std::path::PathBuf;

use crate::cli::Args;

/// One line of the per-group totals file
///
/// `total_count` is left out of the file when the summary has no
/// count column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupTotal {
    #[serde(rename = "MT_group")]
    pub group: String,
    pub total_rows_in_summary: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
    pub distinct_ec_keys: usize,
}

#[derive(Debug, Default)]
struct Accumulator<'a> {
    rows: usize,
    count: i64,
    keys: HashSet<&'a str>,
}

impl GroupTotal {
    /// header matching the serialized fields, with or without `total_count`
    pub fn header(with_count: bool) -> Vec<&'static str> {
        let mut header = vec!["MT_group", "total_rows_in_summary"];
        if with_count {
            header.push("total_count");
        }
        header.push("distinct_ec_keys");
        header
    }
}

/// Parse a count cell, truncating decimals toward zero
///
/// Anything that is not a finite number counts as 0.
pub fn parse_count(cell: &str) -> i64 {
    match cell.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => n.trunc() as i64,
        _ => 0,
    }
}

/// label every summary row with the group its EC key resolves to
pub fn label_rows(table: &Table, ec_col: usize, ec_to_group: &EcGroupMap) -> Vec<String> {
    table
        .values(ec_col)
        .map(|key| ec_to_group.resolve(&extract_ec_list(Some(key))).to_string())
        .collect()
}

/// Aggregate rows, counts and distinct keys per label
///
/// Unparsable counts add 0. Ordered by total count (when present),
/// then rows, both descending, then label.
pub fn group_totals(
    table: &Table,
    labels: &[String],
    ec_col: usize,
    count_col: Option<usize>,
) -> Vec<GroupTotal> {
    let mut acc: HashMap<&str, Accumulator> = HashMap::new();

    for (row, label) in labels.iter().enumerate() {
        let entry = acc.entry(label.as_str()).or_default();
        entry.rows += 1;

        if let Some(col) = count_col {
            entry.count += table.cell(row, col).map(parse_count).unwrap_or(0);
        }

        if let Some(key) = table.cell(row, ec_col).map(str::trim) {
            if !key.is_empty() {
                entry.keys.insert(key);
            }
        }
    }

    let mut totals: Vec<GroupTotal> = acc
        .into_iter()
        .map(|(label, a)| GroupTotal {
            group: label.to_string(),
            total_rows_in_summary: a.rows,
            total_count: count_col.map(|_| a.count),
            distinct_ec_keys: a.keys.len(),
        })
        .collect();

    totals.sort_by(|a, b| {
        b.total_count
            .cmp(&a.total_count)
            .then_with(|| b.total_rows_in_summary.cmp(&a.total_rows_in_summary))
            .then_with(|| a.group.cmp(&b.group))
    });

    totals
}

/// Annotate an EC summary with groups and write the per-group totals
///
/// Returns the paths of the annotated summary and of the totals file.
pub fn assign_groups(args: Args) -> Result<(PathBuf, PathBuf)> {
    let ec_to_group = load_ec_to_group(&args.reference)?;

    let mut table = Table::read(&args.summary, b'\t')?;
    let ec_col = table.column(&args.ec_col)?;
    let count_col = table.find_column(&args.count_col);

    if count_col.is_none() {
        info!(
            "No '{}' column in {}. Totals will only count rows",
            args.count_col,
            table.source()
        );
    }

    let labels = label_rows(&table, ec_col, &ec_to_group);
    let totals = group_totals(&table, &labels, ec_col, count_col);

    table.push_column(MT_GROUP_COL, labels)?;

    let out_summary = args.out_summary();
    let out_totals = args.out_totals();
    table.write(&out_summary, b'\t')?;
    write_records(
        &out_totals,
        b'\t',
        &GroupTotal::header(count_col.is_some()),
        &totals,
    )?;

    info!("Wrote: {}", out_summary.display());
    info!("Wrote: {}", out_totals.display());
    for t in &totals {
        match t.total_count {
            Some(count) => info!(
                "  {}\trows={}\tcount={}\tkeys={}",
                t.group, t.total_rows_in_summary, count, t.distinct_ec_keys
            ),
            None => info!(
                "  {}\trows={}\tkeys={}",
                t.group, t.total_rows_in_summary, t.distinct_ec_keys
            ),
        }
    }

    Ok((out_summary, out_totals))
}
