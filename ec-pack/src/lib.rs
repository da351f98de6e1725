//! Core library for EC-number based methyltransferase grouping
//!
//! This crate holds everything the ectools binaries share: EC number
//! extraction from free text, the name-based methyltransferase
//! classifier, the EC->group dictionary with its group resolver,
//! the grouped-reference parser and a small delimited table type.
//!
//! The classifier is run once per (EC, name) pair to build a grouped
//! reference. That reference is later read back into an [`EcGroupMap`]
//! which assigns one label to every downstream record, no matter how
//! many EC numbers the record carries.

use std::fmt::Debug;
use std::path::Path;

use thiserror::Error;

pub mod classify;
pub mod ec;
pub mod group;
pub mod reference;
pub mod resolve;
pub mod table;

pub use classify::{
    classify, parse_enzyme_line, parse_enzyme_lines, EnzymeRecord, ParsedLine,
    ParsedNames,
};
pub use ec::{extract_ec_list, EcNumber};
pub use group::{Assignment, MtGroup, Status, GROUP_ORDER, SPECIAL_ASSIGNMENTS};
pub use reference::{load_ec_to_group, parse_reference, parse_sectioned, parse_table};
pub use resolve::{resolve, EcGroupMap};
pub use table::{write_records, Table};

/// error handling for the EC core
#[derive(Debug, Error)]
pub enum EcError {
    #[error("Column '{column}' not found in {file}. Available columns: {available:?}")]
    MissingColumn {
        column: String,
        file: String,
        available: Vec<String>,
    },
    #[error("Could not find {kind} column in {file}. Columns: {available:?}")]
    NoColumnGuess {
        kind: &'static str,
        file: String,
        available: Vec<String>,
    },
    #[error(
        "Loaded 0 EC->group mappings from {0}. Check that it contains lines like \
         '# O_MT (...)' followed by EC numbers in the first column, or a table \
         with EC and group columns"
    )]
    EmptyMapping(String),
    #[error(
        "Row {row} of {file} has {cells} cells but the header has {columns} columns. \
         Refusing to add a column that would drop data"
    )]
    RowTooLong {
        file: String,
        row: usize,
        cells: usize,
        columns: usize,
    },
    #[error("Invalid EC number: {0}")]
    InvalidEc(String),
    #[error("Invalid group: {0}")]
    InvalidGroup(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// read a whole file as text, replacing invalid UTF-8
pub fn reader<P: AsRef<Path> + Debug>(file: P) -> Result<String, EcError> {
    let bytes = std::fs::read(file)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
