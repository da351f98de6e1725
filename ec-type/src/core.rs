use anyhow::Result;
use config::write_collection;
use ecpack::{parse_enzyme_lines, reader, GROUP_ORDER};
use log::info;

use std::path::PathBuf;

use crate::cli::Args;

/// Classify every `EC name` line of the input and write the grouped blocks
///
/// Malformed lines are counted and reported, never fatal. The output is
/// only written once the whole input has been parsed.
pub fn group_by_type(args: Args) -> Result<PathBuf> {
    let out = args.out_path();
    let contents = reader(&args.input)?;
    let parsed = parse_enzyme_lines(&contents);

    write_collection(&parsed.sectioned_lines(), &out)?;

    for group in GROUP_ORDER {
        info!("{:<12} {}", group, parsed.count(group));
    }
    info!("Parsed lines: {}", parsed.records.len());
    info!(
        "Skipped lines (couldn't parse EC + name): {}",
        parsed.skipped
    );
    info!("Wrote: {}", out.display());

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_group_by_type_writes_sectioned_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("enzymes.txt");
        let mut file = std::fs::File::create(&input).unwrap();
        writeln!(file, "# EC names").unwrap();
        writeln!(file, "2.1.1.1 nicotinamide N-methyltransferase").unwrap();
        writeln!(file, "2.1.1.6, catechol O-methyltransferase").unwrap();
        writeln!(file, "2.1.1.37 DNA (cytosine-5-)-methyltransferase Read more").unwrap();
        writeln!(file, "2.1.1.123 Transferred entry: 2.1.1.1").unwrap();
        writeln!(file, "garbage").unwrap();

        let out = group_by_type(Args {
            input,
            out: None,
        })
        .unwrap();

        assert_eq!(out, dir.path().join("enzymes_grouped.tsv"));

        let text = std::fs::read_to_string(&out).unwrap();
        assert!(text.starts_with("# O_MT (1)\nec\tname\tstatus\n2.1.1.6\tcatechol O-methyltransferase\tOK\n"));
        assert!(text.contains(
            "# N_MT (1)\nec\tname\tstatus\n2.1.1.1\tnicotinamide N-methyltransferase\tOK\n"
        ));
        assert!(text.contains("2.1.1.37\tDNA (cytosine-5-)-methyltransferase\tOK"));
        assert!(text.contains(
            "# TRANSFERRED (1)\nec\tname\tstatus\n2.1.1.123\tTransferred entry: 2.1.1.1\tTRANSFERRED\n"
        ));
        assert!(text.ends_with("# DELETED (0)\nec\tname\tstatus\n"));
    }

    #[test]
    fn test_grouped_output_reads_back_as_reference() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("enzymes.txt");
        std::fs::write(
            &input,
            "2.1.1.1 nicotinamide N-methyltransferase\n2.1.1.63 methylated-DNA--[protein]-cysteine S-methyltransferase\n",
        )
        .unwrap();

        let out = group_by_type(Args {
            input,
            out: Some(dir.path().join("MT_grouped.tsv")),
        })
        .unwrap();

        let map = ecpack::load_ec_to_group(&out).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(
            map.get(&"2.1.1.63".parse().unwrap()),
            Some(ecpack::MtGroup::SMt)
        );
    }
}
