//! # Display Paths
//!
//! Records are stored by UUID, but users point at them by position: `2` is the
//! second board, `2.1` the first list on it, `2.1.3` the third card in that
//! list. Positions come from sorting each sibling group by rank, so a path is
//! only stable until the next move or insert in that group.
//!
//! Equal ranks (two inserts computed from the same stale neighbours) are
//! ordered by creation time, then id, so the listing stays deterministic
//! until `doctor` spreads them apart.

use crate::model::{Record, SiblingGroup};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// A user-facing, 1-based positional path to a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RecordPath(Vec<usize>);

impl RecordPath {
    pub fn new(positions: Vec<usize>) -> Self {
        Self(positions)
    }

    pub fn positions(&self) -> &[usize] {
        &self.0
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn child(&self, position: usize) -> Self {
        let mut positions = self.0.clone();
        positions.push(position);
        Self(positions)
    }

    /// Path of the enclosing record; `None` for a board.
    pub fn parent(&self) -> Option<Self> {
        match self.0.split_last() {
            Some((_, rest)) if !rest.is_empty() => Some(Self(rest.to_vec())),
            _ => None,
        }
    }
}

impl fmt::Display for RecordPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|p| p.to_string()).collect();
        write!(f, "{}", parts.join("."))
    }
}

impl FromStr for RecordPath {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let positions = s
            .split('.')
            .map(|part| match part.parse::<usize>() {
                Ok(n) if n > 0 => Ok(n),
                _ => Err(format!("Invalid path: {}", s)),
            })
            .collect::<Result<Vec<_>, _>>()?;
        if positions.len() > 3 {
            return Err(format!("Invalid path: {} (at most board.list.card)", s));
        }
        Ok(Self(positions))
    }
}

#[derive(Debug, Clone)]
pub struct DisplayRecord {
    pub record: Record,
    pub path: RecordPath,
}

/// Sorts siblings into display order.
pub fn sort_siblings(records: &mut [Record]) {
    records.sort_by(|a, b| {
        a.rank
            .cmp(&b.rank)
            .then_with(|| a.created_at.cmp(&b.created_at))
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// Members of `group`, in display order.
pub fn siblings(records: &[Record], group: SiblingGroup) -> Vec<Record> {
    let mut members: Vec<Record> = records
        .iter()
        .filter(|r| group.contains(r))
        .cloned()
        .collect();
    sort_siblings(&mut members);
    members
}

/// Assigns paths to every reachable record.
///
/// The result is depth-first: each board is followed by its lists, each list
/// by its cards. Records whose parent no longer exists are left out.
pub fn index_records(records: Vec<Record>) -> Vec<DisplayRecord> {
    let mut groups: HashMap<SiblingGroup, Vec<Record>> = HashMap::new();
    for record in records {
        groups.entry(record.group()).or_default().push(record);
    }
    for members in groups.values_mut() {
        sort_siblings(members);
    }

    let mut results = Vec::new();
    push_group(
        &groups,
        SiblingGroup::boards(),
        &RecordPath::default(),
        &mut results,
    );
    results
}

fn push_group(
    groups: &HashMap<SiblingGroup, Vec<Record>>,
    group: SiblingGroup,
    parent_path: &RecordPath,
    results: &mut Vec<DisplayRecord>,
) {
    let Some(members) = groups.get(&group) else {
        return;
    };
    for (i, record) in members.iter().enumerate() {
        let path = parent_path.child(i + 1);
        results.push(DisplayRecord {
            record: record.clone(),
            path: path.clone(),
        });
        if let Some(children) = SiblingGroup::children_of(record) {
            push_group(groups, children, &path, results);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecordKind;
    use crate::rank::OrderKey;

    fn rec(kind: RecordKind, parent: Option<&Record>, title: &str, rank: &str) -> Record {
        Record::new(
            kind,
            parent.map(|p| p.id),
            title.to_string(),
            OrderKey::parse(rank).unwrap(),
        )
    }

    #[test]
    fn parses_dotted_paths() {
        assert_eq!(
            "2.1.3".parse::<RecordPath>().unwrap().positions(),
            &[2, 1, 3]
        );
        assert_eq!("4".parse::<RecordPath>().unwrap().to_string(), "4");
    }

    #[test]
    fn rejects_bad_paths() {
        for bad in ["", "0", "1..2", "a", "1.2.3.4", "-1"] {
            assert!(bad.parse::<RecordPath>().is_err(), "{:?} parsed", bad);
        }
    }

    #[test]
    fn siblings_sort_by_rank() {
        let a = rec(RecordKind::Board, None, "A", "k");
        let b = rec(RecordKind::Board, None, "B", "F");
        let c = rec(RecordKind::Board, None, "C", "V");

        let sorted = siblings(&[a, b, c], SiblingGroup::boards());
        let titles: Vec<_> = sorted.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "C", "A"]);
    }

    #[test]
    fn tied_ranks_fall_back_to_creation_order() {
        let first = rec(RecordKind::Board, None, "first", "V");
        let mut second = rec(RecordKind::Board, None, "second", "V");
        second.created_at = first.created_at + chrono::Duration::seconds(1);

        let sorted = siblings(&[second, first], SiblingGroup::boards());
        assert_eq!(sorted[0].title, "first");
    }

    #[test]
    fn index_is_depth_first() {
        let b1 = rec(RecordKind::Board, None, "b1", "F");
        let b2 = rec(RecordKind::Board, None, "b2", "V");
        let l1 = rec(RecordKind::List, Some(&b2), "l1", "V");
        let l2 = rec(RecordKind::List, Some(&b2), "l2", "F");
        let c1 = rec(RecordKind::Card, Some(&l1), "c1", "V");

        let indexed = index_records(vec![c1, l1, b2, l2, b1]);
        let listing: Vec<_> = indexed
            .iter()
            .map(|d| format!("{} {}", d.path, d.record.title))
            .collect();
        assert_eq!(
            listing,
            vec!["1 b1", "2 b2", "2.1 l2", "2.2 l1", "2.2.1 c1"]
        );
    }

    #[test]
    fn orphans_are_not_indexed() {
        let board = rec(RecordKind::Board, None, "b", "V");
        let gone = rec(RecordKind::Board, None, "gone", "V");
        let orphan = rec(RecordKind::List, Some(&gone), "orphan", "V");

        let indexed = index_records(vec![board, orphan]);
        assert_eq!(indexed.len(), 1);
    }
}
