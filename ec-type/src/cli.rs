use clap::Parser;
use config::{file_stem, parent_dir, ArgCheck, GROUPED_SUFFIX, NAMES_EXTENSIONS};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about = "Group enzyme names by methylated atom type", long_about = None)]
pub struct Args {
    #[arg(
        short = 'i',
        long = "input",
        required = true,
        value_name = "PATH",
        help = "TXT file with one 'EC <enzyme name>' per line"
    )]
    pub input: PathBuf,

    #[arg(
        short = 'o',
        long = "out",
        required = false,
        value_name = "PATH",
        help = "Output TSV path [default: <input_stem>_grouped.tsv]"
    )]
    pub out: Option<PathBuf>,
}

impl Args {
    pub fn from(args: Vec<String>) -> Self {
        let mut full_args = vec![env!("CARGO_PKG_NAME").to_string()];
        full_args.extend(args);

        Args::parse_from(full_args)
    }

    pub fn out_path(&self) -> PathBuf {
        self.out.clone().unwrap_or_else(|| {
            parent_dir(&self.input).join(format!("{}{}", file_stem(&self.input), GROUPED_SUFFIX))
        })
    }
}

impl ArgCheck for Args {
    fn get_refs(&self) -> Vec<&PathBuf> {
        Vec::new()
    }

    fn get_inputs(&self) -> Vec<&PathBuf> {
        vec![&self.input]
    }

    fn extensions(&self) -> &[&str] {
        &NAMES_EXTENSIONS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_out_path() {
        let args = Args::from(vec!["-i".to_string(), "data/enzymes.txt".to_string()]);
        assert_eq!(args.out_path(), PathBuf::from("data/enzymes_grouped.tsv"));

        let args = Args::from(vec![
            "--input".to_string(),
            "enzymes.txt".to_string(),
            "--out".to_string(),
            "MT_grouped.tsv".to_string(),
        ]);
        assert_eq!(args.out_path(), PathBuf::from("MT_grouped.tsv"));
    }
}
