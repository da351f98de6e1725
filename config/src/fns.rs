use indicatif::{ProgressBar, ProgressStyle};
use thiserror::Error;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

// os
#[cfg(not(windows))]
const TICK_SETTINGS: (&str, u64) = ("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ", 80);
#[cfg(windows)]
const TICK_SETTINGS: (&str, u64) = (r"+-x| ", 200);

lazy_static::lazy_static! {
    static ref UNSAFE_FILENAME_CHARS: regex::Regex =
        regex::Regex::new(r"[^A-Za-z0-9._-]+").expect("ERROR: invalid filename regex");
}

/// return a pre-configured progress bar
pub fn get_progress_bar(length: u64, msg: &str) -> ProgressBar {
    let progressbar_style = ProgressStyle::default_spinner()
        .tick_chars(TICK_SETTINGS.0)
        .template(" {spinner} {msg:<30} {wide_bar} ETA {eta_precise} ")
        .expect("no template error");

    let progress_bar = ProgressBar::new(length);

    progress_bar.set_style(progressbar_style);
    progress_bar.enable_steady_tick(Duration::from_millis(TICK_SETTINGS.1));
    progress_bar.set_message(msg.to_owned());

    progress_bar
}

/// write any collection of lines to a file
pub fn write_collection<P: AsRef<Path>>(data: &[String], fname: P) -> Result<(), CliError> {
    log::info!(
        "Lines in {}: {:?}. Writing...",
        fname.as_ref().display(),
        data.len()
    );
    let f = File::create(fname.as_ref())?;
    let mut writer = BufWriter::new(f);

    for line in data.iter() {
        writeln!(writer, "{}", line)?;
    }

    writer.flush()?;
    Ok(())
}

/// guess a field separator from the file extension
///
/// `.tsv`/`.tab` and anything unknown are tab-delimited, `.csv` is comma-delimited.
pub fn guess_sep<P: AsRef<Path>>(path: P) -> u8 {
    match path
        .as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
    {
        Some(ext) if ext == "csv" => b',',
        _ => b'\t',
    }
}

/// parse a `--sep` value: a single ASCII character, `\t` or `tab`
pub fn parse_sep(s: &str) -> Result<u8, String> {
    match s {
        "\\t" | "tab" | "\t" => Ok(b'\t'),
        _ if s.len() == 1 && s.is_ascii() => Ok(s.as_bytes()[0]),
        _ => Err(format!("separator must be a single ASCII character, got {:?}", s)),
    }
}

/// turn an arbitrary key into a safe file name component
pub fn sanitize_filename(s: &str) -> String {
    UNSAFE_FILENAME_CHARS.replace_all(s, "_").into_owned()
}

/// file stem as an owned string, empty if the path has none
pub fn file_stem<P: AsRef<Path>>(path: P) -> String {
    path.as_ref()
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// directory next to which derived outputs are written
pub fn parent_dir<P: AsRef<Path>>(path: P) -> PathBuf {
    match path.as_ref().parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// argument checker for all subcommands
pub trait ArgCheck {
    fn check(&self) -> Result<(), CliError> {
        self.validate_args()
    }

    fn validate_args(&self) -> Result<(), CliError> {
        self.check_refs()?;

        if self.get_inputs().is_empty() {
            let err = "No input files provided".to_string();
            return Err(CliError::InvalidInput(err));
        }
        for input in self.get_inputs() {
            validate(input, self.extensions())?;
        }

        Ok(())
    }

    fn check_refs(&self) -> Result<(), CliError> {
        for r in self.get_refs() {
            validate(r, self.extensions())?;
        }
        Ok(())
    }

    fn extensions(&self) -> &[&str] {
        &crate::TABLE_EXTENSIONS
    }

    fn get_refs(&self) -> Vec<&PathBuf>;
    fn get_inputs(&self) -> Vec<&PathBuf>;
}

/// error handling for CLI
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// argument validation
pub fn validate(arg: &PathBuf, extensions: &[&str]) -> Result<(), CliError> {
    if !arg.exists() {
        return Err(CliError::InvalidInput(format!(
            "ERROR: {:?} does not exist",
            arg
        )));
    }

    if !arg.is_file() {
        return Err(CliError::InvalidInput(format!(
            "ERROR: {:?} is not a file",
            arg
        )));
    }

    match arg.extension().and_then(|e| e.to_str()) {
        Some(ext) if extensions.contains(&ext.to_lowercase().as_str()) => (),
        _ => {
            return Err(CliError::InvalidInput(format!(
                "ERROR: file {:?} is not one of {:?}",
                arg, extensions
            )))
        }
    }

    match std::fs::metadata(arg) {
        Ok(metadata) if metadata.len() == 0 => Err(CliError::InvalidInput(format!(
            "ERROR: file {:?} is empty",
            arg
        ))),
        Ok(_) => Ok(()),
        Err(e) => Err(CliError::IoError(e)),
    }
}
