use anyhow::Result;
use config::{
    file_stem, get_progress_bar, sanitize_filename, GROUP_COUNTS_SUFFIX, MT_GROUP_COL,
};
use ecpack::{extract_ec_list, load_ec_to_group, write_records, Table, SPECIAL_ASSIGNMENTS};
use hashbrown::HashMap;
use log::{info, warn};
use serde::Serialize;

use std::path::PathBuf;

use crate::cli::GroupArgs;

/// one line of the `<stem>_group_counts.tsv` file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupCount {
    #[serde(rename = "MT_group")]
    pub group: String,
    pub rows: usize,
}

impl GroupCount {
    pub const HEADER: [&'static str; 2] = ["MT_group", "rows"];
}

/// Split a dataset into one TSV per resolved group
///
/// Every row is labeled from the EC numbers in `--ec-col` against the
/// grouped reference. Reference groups are written first, sorted by
/// name, then MULTIPLE, MIXED, UNKNOWN and NO_EC.
pub fn split_by_group(args: GroupArgs) -> Result<PathBuf> {
    let ec_to_group = load_ec_to_group(&args.reference)?;

    let table = Table::read(&args.dataset, args.separator())?;
    let ec_col = table.column(&args.ec_col)?;

    let pb = get_progress_bar(table.len() as u64, "Resolving EC groups");
    let labels: Vec<String> = table
        .values(ec_col)
        .map(|field| {
            pb.inc(1);
            ec_to_group
                .resolve(&extract_ec_list(Some(field)))
                .to_string()
        })
        .collect();
    pb.finish_and_clear();

    let mut buckets: HashMap<&str, Vec<usize>> = HashMap::new();
    for (row, label) in labels.iter().enumerate() {
        buckets.entry(label.as_str()).or_default().push(row);
    }

    let order: Vec<String> = ec_to_group
        .groups()
        .iter()
        .map(|g| g.to_string())
        .chain(SPECIAL_ASSIGNMENTS.iter().map(|a| a.to_string()))
        .collect();

    let stem = file_stem(&args.dataset);
    let out_dir = args.out_dir();
    std::fs::create_dir_all(&out_dir)?;

    let mut counts = Vec::with_capacity(order.len());
    let empty = Vec::new();
    for label in &order {
        let rows = buckets.get(label.as_str()).unwrap_or(&empty);
        if rows.is_empty() {
            if !args.write_empty {
                warn!("No rows resolved to {}. Skipping...", label);
                continue;
            }
        } else {
            counts.push(GroupCount {
                group: label.clone(),
                rows: rows.len(),
            });
        }

        let mut part = table.subset(rows);
        part.push_column(MT_GROUP_COL, vec![label.clone(); rows.len()])?;
        part.write(
            out_dir.join(format!("{}_{}.tsv", stem, sanitize_filename(label))),
            b'\t',
        )?;
    }

    counts.sort_by(|a, b| b.rows.cmp(&a.rows).then_with(|| a.group.cmp(&b.group)));
    let counts_file = out_dir.join(format!("{}{}", stem, GROUP_COUNTS_SUFFIX));
    write_records(&counts_file, b'\t', &GroupCount::HEADER, &counts)?;

    info!("Wrote outputs to: {}", out_dir.display());
    for c in &counts {
        info!("  {}\t{}", c.group, c.rows);
    }

    Ok(out_dir)
}
