//! Count unique UniProt entry names and their base names
//!
//! `NNMT_HUMAN` and `NNMT_MOUSE` are two entries sharing the base name
//! `NNMT`. Counts are reported per input table and across all of them.

use anyhow::Result;
use config::ArgCheck;

pub mod cli;
pub mod core;

pub fn lib_ec_count(args: Vec<String>) -> Result<self::core::EntryCounts> {
    let args = cli::Args::from(args);
    args.check()?;

    self::core::count_unique(args)
}
