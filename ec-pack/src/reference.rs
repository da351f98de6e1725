//! Grouped reference parsing
//!
//! A grouped reference is either the sectioned file written by
//! `ec-type` (`# O_MT (n)` headers followed by `ec name status` rows)
//! or a plain table with an EC column and a group column. The
//! sectioned reading is tried first; the table reading only runs when
//! it yields nothing.

use regex::Regex;
use std::fmt::Debug;
use std::path::Path;

use crate::ec::EcNumber;
use crate::group::MtGroup;
use crate::resolve::EcGroupMap;
use crate::table::Table;
use crate::{reader, EcError};

const EC_COLUMNS: [&str; 3] = ["ec", "ec_number", "ec number"];
const GROUP_COLUMNS: [&str; 3] = ["group", "mt_group", "mt group"];

lazy_static::lazy_static! {
    static ref SECTION_HEADER: Regex =
        Regex::new(r"^#\s*([A-Za-z0-9_]+)").expect("ERROR: invalid section header regex");
}

/// Read the `# GROUP` blocks of a sectioned reference
///
/// Blank lines, lines before the first header, column-header rows and
/// rows whose first tab-delimited field is not an EC number are
/// skipped. Headers naming something other than a classifier group
/// are reported and their rows skipped.
pub fn parse_sectioned(contents: &str) -> EcGroupMap {
    let mut ec_to_group = EcGroupMap::default();
    let mut current: Option<MtGroup> = None;

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('#') {
            current = SECTION_HEADER
                .captures(line)
                .and_then(|caps| match caps[1].parse::<MtGroup>() {
                    Ok(group) => Some(group),
                    Err(e) => {
                        log::warn!("{}. Skipping section '{}'", e, line);
                        None
                    }
                });
            continue;
        }

        if line.to_lowercase().starts_with("ec\t") {
            continue;
        }

        let Some(group) = current else {
            continue;
        };

        let first = line.split('\t').next().unwrap_or_default().trim();
        if let Ok(ec) = first.parse::<EcNumber>() {
            ec_to_group.insert(ec, group);
        }
    }

    ec_to_group
}

/// pick the first exact header match, else the first header containing `token`
fn guess_column(
    table: &Table,
    exact: &[&str],
    token: &str,
    kind: &'static str,
) -> Result<usize, EcError> {
    let normalized: Vec<String> = table
        .headers
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    normalized
        .iter()
        .position(|h| exact.contains(&h.as_str()))
        .or_else(|| normalized.iter().position(|h| h.contains(token)))
        .ok_or_else(|| EcError::NoColumnGuess {
            kind,
            file: table.source().to_string(),
            available: table.headers.clone(),
        })
}

/// Read a two-column (EC, group) reference table
///
/// Column names are guessed case-insensitively. Failing to find
/// either column is an error, not an empty result.
pub fn parse_table(contents: &str, sep: u8, source: &str) -> Result<EcGroupMap, EcError> {
    let table = Table::from_reader(contents.as_bytes(), sep, source)?;

    let ec_col = guess_column(&table, &EC_COLUMNS, "ec", "an EC")?;
    let group_col = guess_column(&table, &GROUP_COLUMNS, "group", "a group")?;

    let mut ec_to_group = EcGroupMap::default();
    for row in 0..table.len() {
        let ec = table.cell(row, ec_col).unwrap_or_default().trim();
        let group = table.cell(row, group_col).unwrap_or_default().trim();

        if group.is_empty() {
            continue;
        }

        let Ok(ec) = ec.parse::<EcNumber>() else {
            continue;
        };

        match group.parse::<MtGroup>() {
            Ok(group) => {
                ec_to_group.insert(ec, group);
            }
            Err(e) => log::warn!("{} for {} in {}. Skipping...", e, ec, source),
        }
    }

    Ok(ec_to_group)
}

/// Sectioned reading first, table reading as fallback
///
/// An empty result from both is an error: resolving against an empty
/// dictionary would silently label everything UNKNOWN.
pub fn parse_reference(contents: &str, source: &str) -> Result<EcGroupMap, EcError> {
    let ec_to_group = parse_sectioned(contents);
    if !ec_to_group.is_empty() {
        return Ok(ec_to_group);
    }

    log::warn!(
        "No '# GROUP' sections found in {}. Reading it as an EC/group table...",
        source
    );

    let ec_to_group = parse_table(contents, b'\t', source)?;
    if ec_to_group.is_empty() {
        return Err(EcError::EmptyMapping(source.to_string()));
    }

    Ok(ec_to_group)
}

/// Load an EC->group dictionary from a grouped reference file
pub fn load_ec_to_group<P: AsRef<Path> + Debug>(path: P) -> Result<EcGroupMap, EcError> {
    let source = path.as_ref().display().to_string();
    let contents = reader(&path)?;

    let ec_to_group = parse_reference(&contents, &source)?;
    log::info!("Loaded EC->group mappings: {}", ec_to_group.len());

    Ok(ec_to_group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn ec(s: &str) -> EcNumber {
        s.parse().unwrap()
    }

    const SECTIONED: &str = "# O_MT (2)\n\
                             ec\tname\tstatus\n\
                             2.1.1.6\tcatechol O-methyltransferase\tOK\n\
                             2.1.1.4\tacetylserotonin O-methyltransferase\tOK\n\
                             \n\
                             # N_MT (1)\n\
                             ec\tname\tstatus\n\
                             2.1.1.1\tnicotinamide N-methyltransferase\tOK\n\
                             \n\
                             # C_MT (1)\n\
                             ec\tname\tstatus\n\
                             2.1.1.6\tduplicate under another header\tOK\n";

    #[test]
    fn test_parse_sectioned() {
        let map = parse_sectioned(SECTIONED);

        assert_eq!(map.len(), 3);
        assert_eq!(map.get(&ec("2.1.1.4")), Some(MtGroup::OMt));
        assert_eq!(map.get(&ec("2.1.1.1")), Some(MtGroup::NMt));
    }

    #[test]
    fn test_parse_sectioned_first_wins() {
        let map = parse_sectioned(SECTIONED);
        assert_eq!(map.get(&ec("2.1.1.6")), Some(MtGroup::OMt));
    }

    #[test]
    fn test_parse_sectioned_skips_noise() {
        let map = parse_sectioned(
            "2.1.1.99\tbefore any header\tOK\n\
             #S_MT(1)\n\
             EC\tNAME\tSTATUS\n\
             not-an-ec\tjunk\n\
             2.1.1.9\tthiol S-methyltransferase\tOK\n\
             # MULTIPLE (1)\n\
             2.1.1.10\tunder an unknown header\tOK\n",
        );

        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&ec("2.1.1.9")), Some(MtGroup::SMt));
        assert_eq!(map.get(&ec("2.1.1.99")), None);
        assert_eq!(map.get(&ec("2.1.1.10")), None);
    }

    #[test]
    fn test_table_fallback() {
        let map = parse_reference(
            "EC number\tMT group\tcomment\n\
             2.1.1.1\tN_MT\t\n\
             2.1.1.63\tC_MT\tx\n\
             2.1.1.1\tO_MT\tsecond one loses\n\
             2.1.1.5\t\tno group\n\
             bad\tO_MT\t\n",
            "MT_grouped.tsv",
        )
        .unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&ec("2.1.1.1")), Some(MtGroup::NMt));
        assert_eq!(map.get(&ec("2.1.1.63")), Some(MtGroup::CMt));
    }

    #[test]
    fn test_table_exact_header_preferred() {
        let map = parse_table(
            "species\tec\tgroup\n\
             x\t2.1.1.1\tO_MT\n",
            b'\t',
            "key.tsv",
        )
        .unwrap();

        assert_eq!(map.get(&ec("2.1.1.1")), Some(MtGroup::OMt));
    }

    #[test]
    fn test_table_without_columns_is_an_error() {
        let err = parse_reference("id\tlabel\n1\tO_MT\n", "key.tsv").unwrap_err();
        assert!(matches!(err, EcError::NoColumnGuess { kind: "an EC", .. }));
        assert!(err.to_string().starts_with("Could not find an EC column in key.tsv"));

        let err = parse_table("ec\tlabel\n2.1.1.1\tO_MT\n", b'\t', "key.tsv").unwrap_err();
        assert!(matches!(err, EcError::NoColumnGuess { kind: "a group", .. }));
        assert!(err.to_string().starts_with("Could not find a group column in key.tsv"));
    }

    #[test]
    fn test_empty_mapping_is_an_error() {
        let err = parse_reference("ec\tgroup\n", "key.tsv").unwrap_err();
        assert!(matches!(err, EcError::EmptyMapping(_)));
    }

    #[test]
    fn test_load_ec_to_group_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", SECTIONED).unwrap();

        let map = load_ec_to_group(file.path()).unwrap();
        assert_eq!(map.len(), 3);
    }
}
