//! Split delimited datasets into smaller files
//!
//! `ec` buckets rows by the EC numbers they carry, `group` buckets
//! them by the methyltransferase group those EC numbers resolve to
//! in a grouped reference.

use anyhow::Result;
use config::ArgCheck;
use std::path::PathBuf;

pub mod cli;
pub mod core;

use cli::SubArgs;

/// run either split from a raw argument list, returns the output directory
pub fn lib_ec_split(args: Vec<String>) -> Result<PathBuf> {
    let args = cli::Args::from(args);

    match args.command {
        SubArgs::Ec { args } => {
            args.check()?;
            self::core::split_by_ec(args)
        }
        SubArgs::Group { args } => {
            args.check()?;
            self::core::split_by_group(args)
        }
    }
}
