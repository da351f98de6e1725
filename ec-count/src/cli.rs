use clap::Parser;
use config::{ArgCheck, ENTRY_NAME_COL, TOP_N};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    version,
    about = "Count unique entry names and entry base names in TSV files",
    long_about = None
)]
pub struct Args {
    #[arg(
        required = true,
        num_args = 1..,
        value_name = "PATHS",
        help = "One or more tab-delimited tables"
    )]
    pub files: Vec<PathBuf>,

    #[arg(
        short = 'c',
        long = "col",
        value_name = "NAME",
        default_value = ENTRY_NAME_COL,
        help = "Column holding entry names, e.g. NNMT_HUMAN"
    )]
    pub col: String,

    #[arg(
        short = 't',
        long = "top",
        value_name = "N",
        default_value_t = TOP_N,
        help = "Show the N most frequent base names (0 disables)"
    )]
    pub top: usize,
}

impl Args {
    pub fn from(args: Vec<String>) -> Self {
        let mut full_args = vec![env!("CARGO_PKG_NAME").to_string()];
        full_args.extend(args);

        Args::parse_from(full_args)
    }
}

impl ArgCheck for Args {
    fn get_refs(&self) -> Vec<&PathBuf> {
        Vec::new()
    }

    fn get_inputs(&self) -> Vec<&PathBuf> {
        self.files.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args() {
        let args = Args::from(vec!["a.tsv".to_string(), "b.tsv".to_string()]);
        assert_eq!(args.files.len(), 2);
        assert_eq!(args.col, "Entry Name");
        assert_eq!(args.top, 15);

        let args = Args::from(
            ["--col", "Entry", "--top", "0", "a.tsv"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        );
        assert_eq!(args.col, "Entry");
        assert_eq!(args.top, 0);
    }
}
