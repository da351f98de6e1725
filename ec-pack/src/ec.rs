use regex::Regex;
use std::collections::BTreeSet;
use std::str::FromStr;

use crate::EcError;

lazy_static::lazy_static! {
    // a trailing wildcard is taken as-is, numeric tails must end on a word boundary
    static ref EC_REGEX: Regex =
        Regex::new(r"\b[0-9]+\.[0-9]+\.[0-9]+\.(?:[0-9]+\b|-)").expect("ERROR: invalid EC regex");
    static ref EC_FULL: Regex =
        Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+\.(?:[0-9]+|-)$").expect("ERROR: invalid EC regex");
}

/// Key used when a component is not numeric (wildcards and friends)
pub const UNSORTABLE_EC: [u64; 4] = [999, 999, 999, 999];

/// A four-component Enzyme Commission number, e.g. `2.1.1.63` or `2.1.1.-`
///
/// Ordering is textual on the dotted form, so `2.1.1.10` sorts before
/// `2.1.1.9`. Use [`EcNumber::numeric_key`] for component-wise ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EcNumber(String);

impl EcNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// true if `s` is exactly one canonical EC number
    pub fn is_canonical(s: &str) -> bool {
        EC_FULL.is_match(s)
    }

    /// numeric component key, [`UNSORTABLE_EC`] if any component is not a number
    pub fn numeric_key(&self) -> [u64; 4] {
        let mut key = [0u64; 4];
        for (i, part) in self.0.split('.').enumerate() {
            match (i < 4, part.parse::<u64>()) {
                (true, Ok(n)) => key[i] = n,
                _ => return UNSORTABLE_EC,
            }
        }
        key
    }

    pub fn is_partial(&self) -> bool {
        self.0.ends_with('-')
    }
}

impl FromStr for EcNumber {
    type Err = EcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if EC_FULL.is_match(s) {
            Ok(EcNumber(s.to_string()))
        } else {
            Err(EcError::InvalidEc(s.to_string()))
        }
    }
}

impl std::fmt::Display for EcNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for EcNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Extract every EC number found in a field
///
/// The field may hold a single EC, a list (`EC:2.1.1.1|2.1.1.63`,
/// `2.1.1.1; 2.1.1.2`) or prose. Matches are deduplicated and returned
/// in textual order. A missing field yields an empty list.
///
/// # Example
///
/// ```rust
/// use ecpack::extract_ec_list;
///
/// let ecs = extract_ec_list(Some("EC:2.1.1.63|2.1.1.1|2.1.1.1"));
/// let ecs: Vec<&str> = ecs.iter().map(|ec| ec.as_str()).collect();
///
/// assert_eq!(ecs, vec!["2.1.1.1", "2.1.1.63"]);
/// ```
pub fn extract_ec_list(field: Option<&str>) -> Vec<EcNumber> {
    let Some(text) = field else {
        return Vec::new();
    };

    EC_REGEX
        .find_iter(text)
        .map(|m| EcNumber(m.as_str().to_string()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
