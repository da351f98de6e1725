use hashbrown::{HashMap, HashSet};

use crate::ec::EcNumber;
use crate::group::{Assignment, MtGroup};

/// EC number -> group dictionary
///
/// Built once from a grouped reference and read-only afterwards. When
/// the same EC shows up twice while building, the first group wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EcGroupMap {
    inner: HashMap<EcNumber, MtGroup>,
}

impl EcGroupMap {
    /// keeps the existing group on duplicates, returns true if `ec` was new
    pub(crate) fn insert(&mut self, ec: EcNumber, group: MtGroup) -> bool {
        match self.inner.entry(ec) {
            hashbrown::hash_map::Entry::Occupied(_) => false,
            hashbrown::hash_map::Entry::Vacant(slot) => {
                slot.insert(group);
                true
            }
        }
    }

    pub fn get(&self, ec: &EcNumber) -> Option<MtGroup> {
        self.inner.get(ec).copied()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// distinct groups present, sorted by name
    pub fn groups(&self) -> Vec<MtGroup> {
        let mut groups: Vec<MtGroup> = self
            .inner
            .values()
            .copied()
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        groups.sort_by_key(|g| g.as_str());
        groups
    }

    pub fn resolve(&self, ecs: &[EcNumber]) -> Assignment {
        resolve(ecs, self)
    }
}

impl FromIterator<(EcNumber, MtGroup)> for EcGroupMap {
    fn from_iter<I: IntoIterator<Item = (EcNumber, MtGroup)>>(iter: I) -> Self {
        let mut map = EcGroupMap::default();
        for (ec, group) in iter {
            map.insert(ec, group);
        }
        map
    }
}

/// Resolve the EC numbers of one record into a single label
///
/// * no ECs -> NO_EC
/// * none of them known -> UNKNOWN
/// * some known, some not -> MIXED
/// * all known, one distinct group -> that group
/// * all known, several groups -> MULTIPLE
///
/// Only the set of lookup results matters, so order and duplicates in
/// `ecs` never change the outcome.
pub fn resolve(ecs: &[EcNumber], ec_to_group: &EcGroupMap) -> Assignment {
    if ecs.is_empty() {
        return Assignment::NoEc;
    }

    let mut mapped = HashSet::new();
    let mut unmapped = 0usize;

    for ec in ecs {
        match ec_to_group.get(ec) {
            Some(group) => {
                mapped.insert(group);
            }
            None => unmapped += 1,
        }
    }

    match (mapped.len(), unmapped) {
        (0, _) => Assignment::Unknown,
        (_, n) if n > 0 => Assignment::Mixed,
        (1, _) => mapped
            .into_iter()
            .next()
            .map(Assignment::Group)
            .unwrap_or(Assignment::Unknown),
        _ => Assignment::Multiple,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ec::extract_ec_list;

    fn ec(s: &str) -> EcNumber {
        s.parse().unwrap()
    }

    fn reference() -> EcGroupMap {
        [
            (ec("2.1.1.1"), MtGroup::NMt),
            (ec("2.1.1.6"), MtGroup::OMt),
            (ec("2.1.1.63"), MtGroup::CMt),
            (ec("2.1.1.37"), MtGroup::CMt),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_resolve_five_way_partition() {
        let map = reference();

        assert_eq!(resolve(&[], &map), Assignment::NoEc);
        assert_eq!(
            resolve(&[ec("2.1.1.63"), ec("2.1.1.37")], &map),
            Assignment::Group(MtGroup::CMt)
        );
        assert_eq!(
            resolve(&[ec("2.1.1.1"), ec("2.1.1.6")], &map),
            Assignment::Multiple
        );
        assert_eq!(
            resolve(&[ec("9.9.9.9"), ec("2.1.1.-")], &map),
            Assignment::Unknown
        );
        assert_eq!(
            resolve(&[ec("2.1.1.1"), ec("9.9.9.9")], &map),
            Assignment::Mixed
        );
    }

    #[test]
    fn test_resolve_ignores_duplicates_and_order() {
        let map: EcGroupMap = [(ec("2.1.1.1"), MtGroup::OMt)].into_iter().collect();

        assert_eq!(
            resolve(&[ec("2.1.1.1"), ec("2.1.1.1")], &map),
            resolve(&[ec("2.1.1.1")], &map)
        );

        let map = reference();
        assert_eq!(
            resolve(&[ec("9.9.9.9"), ec("2.1.1.1")], &map),
            resolve(&[ec("2.1.1.1"), ec("9.9.9.9")], &map)
        );
    }

    #[test]
    fn test_resolve_extracted_multi_ec_field() {
        let map = reference();
        let ecs = extract_ec_list(Some("EC:2.1.1.1|2.1.1.63"));

        assert_eq!(map.resolve(&ecs), Assignment::Multiple);
    }

    #[test]
    fn test_wildcard_is_an_opaque_key() {
        let map: EcGroupMap = [(ec("2.1.1.-"), MtGroup::Unclear)].into_iter().collect();

        assert_eq!(
            resolve(&[ec("2.1.1.-")], &map),
            Assignment::Group(MtGroup::Unclear)
        );
        assert_eq!(resolve(&[ec("2.1.1.1")], &map), Assignment::Unknown);
    }

    #[test]
    fn test_first_insert_wins() {
        let map: EcGroupMap = [
            (ec("2.1.1.1"), MtGroup::NMt),
            (ec("2.1.1.1"), MtGroup::OMt),
        ]
        .into_iter()
        .collect();

        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&ec("2.1.1.1")), Some(MtGroup::NMt));
    }

    #[test]
    fn test_groups_sorted_by_name() {
        assert_eq!(
            reference().groups(),
            vec![MtGroup::CMt, MtGroup::NMt, MtGroup::OMt]
        );
    }
}
