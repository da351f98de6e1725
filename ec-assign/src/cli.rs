use clap::Parser;
use config::{
    file_stem, parent_dir, ArgCheck, EC_KEY_COL, GROUP_TOTALS_SUFFIX, ROWS_COL,
    WITH_GROUPS_SUFFIX,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    version,
    about = "Assign methyltransferase groups to an EC summary table",
    long_about = None
)]
pub struct Args {
    #[arg(
        short = 'r',
        long = "reference",
        required = true,
        value_name = "PATH",
        help = "Grouped reference: sectioned '# O_MT' file or EC/group table"
    )]
    pub reference: PathBuf,

    #[arg(
        short = 's',
        long = "summary",
        required = true,
        value_name = "PATH",
        help = "Tab-delimited EC summary, e.g. <stem>_EC_summary.tsv"
    )]
    pub summary: PathBuf,

    #[arg(
        long = "ec-col",
        value_name = "NAME",
        default_value = EC_KEY_COL,
        help = "Summary column holding EC keys"
    )]
    pub ec_col: String,

    #[arg(
        long = "count-col",
        value_name = "NAME",
        default_value = ROWS_COL,
        help = "Summary column with per-key counts, summed when present"
    )]
    pub count_col: String,

    #[arg(
        long = "out-summary",
        required = false,
        value_name = "PATH",
        help = "Annotated summary [default: <summary_stem>_with_groups.tsv]"
    )]
    pub out_summary: Option<PathBuf>,

    #[arg(
        long = "out-totals",
        required = false,
        value_name = "PATH",
        help = "Per-group totals [default: <summary_stem>_group_totals.tsv]"
    )]
    pub out_totals: Option<PathBuf>,
}

impl Args {
    pub fn from(args: Vec<String>) -> Self {
        let mut full_args = vec![env!("CARGO_PKG_NAME").to_string()];
        full_args.extend(args);

        Args::parse_from(full_args)
    }

    fn derived(&self, suffix: &str) -> PathBuf {
        parent_dir(&self.summary).join(format!("{}{}", file_stem(&self.summary), suffix))
    }

    pub fn out_summary(&self) -> PathBuf {
        self.out_summary
            .clone()
            .unwrap_or_else(|| self.derived(WITH_GROUPS_SUFFIX))
    }

    pub fn out_totals(&self) -> PathBuf {
        self.out_totals
            .clone()
            .unwrap_or_else(|| self.derived(GROUP_TOTALS_SUFFIX))
    }
}

impl ArgCheck for Args {
    fn get_refs(&self) -> Vec<&PathBuf> {
        vec![&self.reference]
    }

    fn get_inputs(&self) -> Vec<&PathBuf> {
        vec![&self.summary]
    }
}
