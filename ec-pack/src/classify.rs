//! Name-based methyltransferase classifier
//!
//! Enzyme names are matched against an ordered list of rules and the
//! first rule that fires decides the group. The rules overlap on
//! purpose, so their order matters: the Co-methyltransferase guard must
//! run before the carbon rule, and the S-adenosyl exclusion is part of
//! the sulfur rule itself.

use regex::Regex;

use crate::ec::EcNumber;
use crate::group::{MtGroup, Status, GROUP_ORDER};

lazy_static::lazy_static! {
    static ref EC_LINE: Regex =
        Regex::new(r"^\s*([0-9]+\.[0-9]+\.[0-9]+\.[0-9]+)\s*,?\s*(.*?)\s*$")
            .expect("ERROR: invalid EC line regex");
    static ref READ_MORE: Regex =
        Regex::new(r"(?i)\s*Read more\s*$").expect("ERROR: invalid cleanup regex");

    // cobalt/CoA methyl carriers, not carbon
    static ref RE_CO_MT: Regex =
        Regex::new(r"(?i)\bcoa?-methyltransferase\b").expect("ERROR: invalid regex");

    static ref RE_2P_O: Regex = Regex::new(r"(?i)2['′]-o").expect("ERROR: invalid regex");
    static ref RE_O_MT: Regex =
        Regex::new(r"(?i)\bo-methyltransferase\b").expect("ERROR: invalid regex");

    static ref RE_N_MT: Regex =
        Regex::new(r"(?i)\bn-methyltransferase\b").expect("ERROR: invalid regex");
    static ref RE_N_PAREN: Regex =
        Regex::new(r"(?i)\bn\([0-9]+\)|n\(alpha\)").expect("ERROR: invalid regex");

    static ref RE_C_MT: Regex =
        Regex::new(r"(?i)\bc-methyltransferase\b").expect("ERROR: invalid regex");
    static ref RE_C_PAREN: Regex = Regex::new(r"(?i)\bc\([0-9]+\)").expect("ERROR: invalid regex");
    static ref RE_C_LOCANT: Regex =
        Regex::new(r"(?i)\bc[0-9]+-methyltransferase\b").expect("ERROR: invalid regex");
    static ref RE_CYTOSINE_5: Regex = Regex::new(r"(?i)cytosine-5").expect("ERROR: invalid regex");

    static ref RE_S_MT: Regex =
        Regex::new(r"(?i)\bs-methyltransferase\b").expect("ERROR: invalid regex");
    static ref RE_S_HINT: Regex =
        Regex::new(r"(?i)\b(?:thiol|thioether|cysteine|mercaptan)\b").expect("ERROR: invalid regex");

    static ref RE_MT_WORD: Regex =
        Regex::new(r"(?i)\bmethyltransferase\b").expect("ERROR: invalid regex");
}

struct Rule {
    group: MtGroup,
    matches: fn(&str) -> bool,
}

// first match wins
const RULES: [Rule; 6] = [
    Rule {
        group: MtGroup::Other,
        matches: is_co_methyltransferase,
    },
    Rule {
        group: MtGroup::OMt,
        matches: is_o_methyltransferase,
    },
    Rule {
        group: MtGroup::NMt,
        matches: is_n_methyltransferase,
    },
    Rule {
        group: MtGroup::CMt,
        matches: is_c_methyltransferase,
    },
    Rule {
        group: MtGroup::SMt,
        matches: is_s_methyltransferase,
    },
    Rule {
        group: MtGroup::Unclear,
        matches: is_methyltransferase,
    },
];

fn is_co_methyltransferase(name: &str) -> bool {
    RE_CO_MT.is_match(name)
}

fn is_o_methyltransferase(name: &str) -> bool {
    RE_2P_O.is_match(name) || RE_O_MT.is_match(name)
}

fn is_n_methyltransferase(name: &str) -> bool {
    RE_N_MT.is_match(name) || RE_N_PAREN.is_match(name)
}

fn is_c_methyltransferase(name: &str) -> bool {
    RE_C_MT.is_match(name)
        || RE_C_PAREN.is_match(name)
        || RE_C_LOCANT.is_match(name)
        || RE_CYTOSINE_5.is_match(name)
}

fn is_s_methyltransferase(name: &str) -> bool {
    RE_S_MT.is_match(name)
        || (RE_MT_WORD.is_match(name)
            && RE_S_HINT.is_match(name)
            && !name.to_lowercase().contains("s-adenosyl"))
}

fn is_methyltransferase(name: &str) -> bool {
    RE_MT_WORD.is_match(name)
}

/// Classify an enzyme name into exactly one group
///
/// Retired entries keep their status as group regardless of the text.
/// Everything else runs through the ordered rules, falling back to
/// [`MtGroup::Other`].
///
/// # Example
///
/// ```rust
/// use ecpack::{classify, MtGroup, Status};
///
/// let group = classify("nicotinamide N-methyltransferase", Status::Ok);
/// assert_eq!(group, MtGroup::NMt);
/// ```
pub fn classify(name: &str, status: Status) -> MtGroup {
    match status {
        Status::Transferred => return MtGroup::Transferred,
        Status::Deleted => return MtGroup::Deleted,
        Status::Ok => (),
    }

    RULES
        .iter()
        .find(|rule| (rule.matches)(name))
        .map(|rule| rule.group)
        .unwrap_or(MtGroup::Other)
}

/// One classified line of an enzyme names file
#[derive(Debug, Clone, PartialEq)]
pub struct EnzymeRecord {
    pub ec: EcNumber,
    pub name: String,
    pub status: Status,
    pub group: MtGroup,
}

impl EnzymeRecord {
    pub fn new(ec: EcNumber, name: String) -> Self {
        let status = Status::from_name(&name);
        let group = classify(&name, status);

        Self {
            ec,
            name,
            status,
            group,
        }
    }

    /// tab-delimited `ec name status` row
    pub fn to_row(&self) -> String {
        let name = self.name.replace(['\t', '\n'], " ");
        format!("{}\t{}\t{}", self.ec, name.trim(), self.status)
    }
}

/// Outcome of reading one line of an enzyme names file
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedLine {
    Record(EnzymeRecord),
    Ignored,
    Malformed,
}

/// Parse `<EC>[,] <name>` into a classified record
///
/// Blank lines and `#` comments are ignored; anything not starting
/// with a four-component numeric EC is malformed.
pub fn parse_enzyme_line(raw: &str) -> ParsedLine {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return ParsedLine::Ignored;
    }

    let Some(caps) = EC_LINE.captures(line) else {
        return ParsedLine::Malformed;
    };

    let ec = match caps[1].parse::<EcNumber>() {
        Ok(ec) => ec,
        Err(_) => return ParsedLine::Malformed,
    };

    let name = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
    let name = READ_MORE.replace(name, "");
    let name = name
        .trim()
        .trim_end_matches([' ', '.', ';', ','])
        .to_string();

    ParsedLine::Record(EnzymeRecord::new(ec, name))
}

/// Classified records of a names file plus the number of malformed lines
#[derive(Debug, Default)]
pub struct ParsedNames {
    pub records: Vec<EnzymeRecord>,
    pub skipped: usize,
}

impl ParsedNames {
    pub fn count(&self, group: MtGroup) -> usize {
        self.records.iter().filter(|r| r.group == group).count()
    }

    /// Lines of the stacked `# GROUP (n)` blocks
    ///
    /// Blocks follow [`GROUP_ORDER`] and are separated by a blank line;
    /// rows inside a block are sorted by numeric EC components, then by
    /// lower-cased name.
    pub fn sectioned_lines(&self) -> Vec<String> {
        let mut rows: Vec<&EnzymeRecord> = self.records.iter().collect();
        rows.sort_by(|a, b| {
            a.group
                .order()
                .cmp(&b.group.order())
                .then_with(|| a.ec.numeric_key().cmp(&b.ec.numeric_key()))
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });

        let mut lines = Vec::new();
        for group in GROUP_ORDER {
            let block: Vec<&&EnzymeRecord> = rows.iter().filter(|r| r.group == group).collect();

            lines.push(format!("# {} ({})", group, block.len()));
            lines.push("ec\tname\tstatus".to_string());
            lines.extend(block.iter().map(|r| r.to_row()));
            lines.push(String::new());
        }

        lines.pop();
        lines
    }

    pub fn to_sectioned(&self) -> String {
        format!("{}\n", self.sectioned_lines().join("\n"))
    }
}

/// Parse every line of a names file
pub fn parse_enzyme_lines(contents: &str) -> ParsedNames {
    let mut parsed = ParsedNames::default();

    for line in contents.lines() {
        match parse_enzyme_line(line) {
            ParsedLine::Record(record) => parsed.records.push(record),
            ParsedLine::Ignored => (),
            ParsedLine::Malformed => parsed.skipped += 1,
        }
    }

    parsed
}
