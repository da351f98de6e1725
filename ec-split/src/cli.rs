use clap::{Parser, Subcommand, ValueEnum};
use config::{
    file_stem, guess_sep, parent_dir, parse_sep, ArgCheck, BY_GROUP_DIR_SUFFIX,
    CATALYTIC_ACTIVITY_COL, EC_NUMBER_COL, EC_SPLIT_DIR_SUFFIX,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Split delimited datasets by EC key or by EC group", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: SubArgs,
}

impl Args {
    pub fn from(args: Vec<String>) -> Self {
        let mut full_args = vec![env!("CARGO_PKG_NAME").to_string()];
        full_args.extend(args);

        Args::parse_from(full_args)
    }
}

#[derive(Debug, Subcommand)]
pub enum SubArgs {
    #[command(name = "ec")]
    Ec {
        #[command(flatten)]
        args: EcArgs,
    },
    #[command(name = "group")]
    Group {
        #[command(flatten)]
        args: GroupArgs,
    },
}

/// How rows carrying several EC numbers are bucketed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SplitMode {
    /// only the first EC of the sorted list
    First,
    /// the row goes into every EC bucket it has
    Explode,
    /// one combined key like 2.1.1.1|2.1.1.2
    Joined,
}

#[derive(Debug, Parser)]
pub struct EcArgs {
    #[arg(
        short = 'i',
        long = "input",
        required = true,
        value_name = "PATH",
        help = "UniProt export (TSV/CSV)"
    )]
    pub input: PathBuf,

    #[arg(
        short = 's',
        long = "sep",
        required = false,
        value_name = "CHAR",
        value_parser = parse_sep,
        help = "Field separator [default: guessed from extension]"
    )]
    pub sep: Option<u8>,

    #[arg(
        long = "ec-col",
        value_name = "NAME",
        default_value = EC_NUMBER_COL,
        help = "EC column header, falls back to --cat-col when missing"
    )]
    pub ec_col: String,

    #[arg(
        long = "cat-col",
        value_name = "NAME",
        default_value = CATALYTIC_ACTIVITY_COL,
        help = "Text column to extract ECs from when --ec-col is missing"
    )]
    pub cat_col: String,

    #[arg(
        short = 'm',
        long = "mode",
        value_enum,
        default_value_t = SplitMode::Explode,
        help = "How to handle rows with multiple ECs"
    )]
    pub mode: SplitMode,

    #[arg(
        short = 'o',
        long = "out-dir",
        required = false,
        value_name = "PATH",
        help = "Output directory [default: <input dir>/<stem>_ec_split]"
    )]
    pub out_dir: Option<PathBuf>,
}

impl EcArgs {
    pub fn separator(&self) -> u8 {
        self.sep.unwrap_or_else(|| guess_sep(&self.input))
    }

    pub fn out_dir(&self) -> PathBuf {
        self.out_dir.clone().unwrap_or_else(|| {
            parent_dir(&self.input).join(format!(
                "{}{}",
                file_stem(&self.input),
                EC_SPLIT_DIR_SUFFIX
            ))
        })
    }
}

impl ArgCheck for EcArgs {
    fn get_refs(&self) -> Vec<&PathBuf> {
        Vec::new()
    }

    fn get_inputs(&self) -> Vec<&PathBuf> {
        vec![&self.input]
    }
}

#[derive(Debug, Parser)]
pub struct GroupArgs {
    #[arg(
        short = 'r',
        long = "reference",
        required = true,
        value_name = "PATH",
        help = "Grouped reference: sectioned '# O_MT' file or EC/group table"
    )]
    pub reference: PathBuf,

    #[arg(
        short = 'd',
        long = "dataset",
        required = true,
        value_name = "PATH",
        help = "Dataset to split (TSV/CSV)"
    )]
    pub dataset: PathBuf,

    #[arg(
        short = 's',
        long = "sep",
        required = false,
        value_name = "CHAR",
        value_parser = parse_sep,
        help = "Dataset field separator [default: guessed from extension]"
    )]
    pub sep: Option<u8>,

    #[arg(
        long = "ec-col",
        value_name = "NAME",
        default_value = EC_NUMBER_COL,
        help = "Dataset column holding EC numbers"
    )]
    pub ec_col: String,

    #[arg(
        short = 'o',
        long = "out-dir",
        required = false,
        value_name = "PATH",
        help = "Output directory [default: <dataset dir>/<stem>_by_group]"
    )]
    pub out_dir: Option<PathBuf>,

    #[arg(
        long = "write-empty",
        help = "Also write files for groups with 0 rows"
    )]
    pub write_empty: bool,
}

impl GroupArgs {
    pub fn separator(&self) -> u8 {
        self.sep.unwrap_or_else(|| guess_sep(&self.dataset))
    }

    pub fn out_dir(&self) -> PathBuf {
        self.out_dir.clone().unwrap_or_else(|| {
            parent_dir(&self.dataset).join(format!(
                "{}{}",
                file_stem(&self.dataset),
                BY_GROUP_DIR_SUFFIX
            ))
        })
    }
}

impl ArgCheck for GroupArgs {
    fn get_refs(&self) -> Vec<&PathBuf> {
        vec![&self.reference]
    }

    fn get_inputs(&self) -> Vec<&PathBuf> {
        vec![&self.dataset]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Args {
        Args::from(v.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_ec_defaults() {
        let SubArgs::Ec { args } = args(&["ec", "-i", "data/MT2.csv"]).command else {
            panic!("expected ec subcommand");
        };

        assert_eq!(args.mode, SplitMode::Explode);
        assert_eq!(args.ec_col, "EC number");
        assert_eq!(args.cat_col, "Catalytic activity");
        assert_eq!(args.separator(), b',');
        assert_eq!(args.out_dir(), PathBuf::from("data/MT2_ec_split"));
    }

    #[test]
    fn test_group_options() {
        let SubArgs::Group { args } = args(&[
            "group",
            "-r",
            "MT_grouped.tsv",
            "-d",
            "MT2.txt",
            "--sep",
            ",",
            "--write-empty",
        ])
        .command
        else {
            panic!("expected group subcommand");
        };

        assert!(args.write_empty);
        assert_eq!(args.separator(), b',');
        assert_eq!(args.out_dir(), PathBuf::from("./MT2_by_group"));
    }
}
