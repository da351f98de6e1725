//! Group enzyme names by methylated atom type
//!
//! Reads a plain text file where every line holds an EC number and an
//! enzyme name, classifies each name into O_MT, N_MT, C_MT, S_MT,
//! UNCLEAR, OTHER, TRANSFERRED or DELETED and writes one TSV with the
//! groups stacked in blocks. That file is the grouped reference used
//! by `ec-assign` and `ec-split group`.

use anyhow::Result;
use config::ArgCheck;
use std::path::PathBuf;

pub mod cli;
pub mod core;

pub fn lib_ec_type(args: Vec<String>) -> Result<PathBuf> {
    let args = cli::Args::from(args);
    args.check()?;

    self::core::group_by_type(args)
}
