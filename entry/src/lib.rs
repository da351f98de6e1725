use anyhow::{Context, Result};
use clap::Parser;
use config::{file_stem, GROUPED_SUFFIX};
use ec_split::lib_ec_split;
use ec_type::lib_ec_type;
use log::info;

use std::path::PathBuf;

pub const RUN_HELP: &str = r#"
Usage: ectools run --names <PATH> --dataset <PATH> --outdir <DIR> [--ec-col <NAME>]

 Options:
  --names <PATH>              TXT file with one 'EC <enzyme name>' per line
  --dataset <PATH>            Dataset to split by group (TSV/CSV)
  --ec-col <NAME>             Dataset column holding EC numbers [default: EC number]
  --outdir <DIR>              Output directory for the grouped reference and the split
  -h, --help                  Print help
"#;

#[derive(Debug, Parser)]
#[command(name = "run", about = "Classify enzyme names, then split a dataset by group")]
pub struct RunArgs {
    #[arg(long = "names", required = true, value_name = "PATH")]
    pub names: PathBuf,

    #[arg(long = "dataset", required = true, value_name = "PATH")]
    pub dataset: PathBuf,

    #[arg(long = "ec-col", value_name = "NAME", default_value = config::EC_NUMBER_COL)]
    pub ec_col: String,

    #[arg(long = "outdir", required = true, value_name = "DIR")]
    pub outdir: PathBuf,
}

/// Run `ec-type` on the names file, then `ec-split group` with its output
///
/// Returns the directory holding the per-group files.
pub fn lib(args: Vec<String>) -> Result<PathBuf> {
    let mut full_args = vec!["run".to_string()];
    full_args.extend(args);
    let args = RunArgs::try_parse_from(full_args)?;

    std::fs::create_dir_all(&args.outdir)
        .with_context(|| format!("ERROR: could not create {}", args.outdir.display()))?;

    let grouped = args
        .outdir
        .join(format!("{}{}", file_stem(&args.names), GROUPED_SUFFIX));

    let grouped = lib_ec_type(vec![
        "--input".to_string(),
        args.names.display().to_string(),
        "--out".to_string(),
        grouped.display().to_string(),
    ])?;
    info!("Grouped reference: {}", grouped.display());

    let split = lib_ec_split(vec![
        "group".to_string(),
        "--reference".to_string(),
        grouped.display().to_string(),
        "--dataset".to_string(),
        args.dataset.display().to_string(),
        "--ec-col".to_string(),
        args.ec_col,
        "--out-dir".to_string(),
        args.outdir.display().to_string(),
    ])?;

    Ok(split)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_pipeline() {
        let dir = tempfile::tempdir().unwrap();
        let names = dir.path().join("enzymes.txt");
        let dataset = dir.path().join("MT2.tsv");
        let outdir = dir.path().join("out");

        std::fs::write(
            &names,
            "2.1.1.1 nicotinamide N-methyltransferase\n\
             2.1.1.6 catechol O-methyltransferase\n",
        )
        .unwrap();
        std::fs::write(
            &dataset,
            "Entry\tEC number\nP1\t2.1.1.1\nP2\t2.1.1.1; 2.1.1.6\nP3\t\n",
        )
        .unwrap();

        let out = lib(vec![
            "--names".to_string(),
            names.display().to_string(),
            "--dataset".to_string(),
            dataset.display().to_string(),
            "--outdir".to_string(),
            outdir.display().to_string(),
        ])
        .unwrap();

        assert_eq!(out, outdir);
        assert!(outdir.join("enzymes_grouped.tsv").exists());
        assert!(outdir.join("MT2_N_MT.tsv").exists());
        assert!(outdir.join("MT2_MULTIPLE.tsv").exists());
        assert!(outdir.join("MT2_NO_EC.tsv").exists());
        assert!(!outdir.join("MT2_O_MT.tsv").exists());

        let counts = std::fs::read_to_string(outdir.join("MT2_group_counts.tsv")).unwrap();
        assert!(counts.starts_with("MT_group\trows\n"));
    }

    #[test]
    fn test_run_requires_outdir() {
        let err = lib(vec!["--names".to_string(), "a.txt".to_string()]);
        assert!(err.is_err());
    }
}
