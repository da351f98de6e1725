use std::str::FromStr;

use crate::EcError;

/// Group order used for sectioned output
pub const GROUP_ORDER: [MtGroup; 8] = [
    MtGroup::OMt,
    MtGroup::NMt,
    MtGroup::CMt,
    MtGroup::SMt,
    MtGroup::Unclear,
    MtGroup::Other,
    MtGroup::Transferred,
    MtGroup::Deleted,
];

/// Resolver labels that are not classifier groups, in output order
pub const SPECIAL_ASSIGNMENTS: [Assignment; 4] = [
    Assignment::Multiple,
    Assignment::Mixed,
    Assignment::Unknown,
    Assignment::NoEc,
];

/// MtGroup enum
///
/// Which atom receives the methyl group, as judged from an enzyme name.
///
/// * OMt/NMt/CMt/SMt: oxygen, nitrogen, carbon, sulfur
/// * Unclear: a methyltransferase whose target atom is not in the name
/// * Other: not recognizable as a methyltransferase
/// * Transferred/Deleted: retired EC entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MtGroup {
    OMt,
    NMt,
    CMt,
    SMt,
    Unclear,
    Other,
    Transferred,
    Deleted,
}

impl MtGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            MtGroup::OMt => "O_MT",
            MtGroup::NMt => "N_MT",
            MtGroup::CMt => "C_MT",
            MtGroup::SMt => "S_MT",
            MtGroup::Unclear => "UNCLEAR",
            MtGroup::Other => "OTHER",
            MtGroup::Transferred => "TRANSFERRED",
            MtGroup::Deleted => "DELETED",
        }
    }

    /// position in [`GROUP_ORDER`]
    pub fn order(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for MtGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MtGroup {
    type Err = EcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        GROUP_ORDER
            .iter()
            .find(|g| g.as_str() == s)
            .copied()
            .ok_or_else(|| EcError::InvalidGroup(s.to_string()))
    }
}

/// Status of an enzyme entry, derived from the leading text of its name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Ok,
    Transferred,
    Deleted,
}

impl Status {
    /// "Transferred entry: ..." and "Deleted entry ..." mark retired entries
    pub fn from_name(name: &str) -> Self {
        let low = name.to_lowercase();
        if low.starts_with("transferred entry") {
            Status::Transferred
        } else if low.starts_with("deleted entry") {
            Status::Deleted
        } else {
            Status::Ok
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Ok => write!(f, "OK"),
            Status::Transferred => write!(f, "TRANSFERRED"),
            Status::Deleted => write!(f, "DELETED"),
        }
    }
}

/// Assignment enum
///
/// The single label a record gets from the set of its EC numbers.
///
/// * Group: every EC is known and all agree
/// * Multiple: every EC is known but they disagree
/// * Mixed: some ECs are known, some are not
/// * Unknown: none of the ECs are known
/// * NoEc: the record carries no EC at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Assignment {
    Group(MtGroup),
    Multiple,
    Mixed,
    Unknown,
    NoEc,
}

impl Assignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Assignment::Group(group) => group.as_str(),
            Assignment::Multiple => "MULTIPLE",
            Assignment::Mixed => "MIXED",
            Assignment::Unknown => "UNKNOWN",
            Assignment::NoEc => "NO_EC",
        }
    }
}

impl std::fmt::Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<MtGroup> for Assignment {
    fn from(group: MtGroup) -> Self {
        Assignment::Group(group)
    }
}
