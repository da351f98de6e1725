//! Attach methyltransferase groups to an EC summary
//!
//! Takes the `<stem>_EC_summary.tsv` written by `ec-split ec` (or any
//! tab-delimited table with an EC key column), resolves each key
//! against a grouped reference and writes the annotated table plus
//! per-group totals.

use anyhow::Result;
use config::ArgCheck;
use std::path::PathBuf;

pub mod cli;
pub mod core;

pub fn lib_ec_assign(args: Vec<String>) -> Result<(PathBuf, PathBuf)> {
    let args = cli::Args::from(args);
    args.check()?;

    self::core::assign_groups(args)
}
