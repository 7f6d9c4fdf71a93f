use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::sort_siblings;
use crate::model::{Record, Scope, SiblingGroup};
use crate::store::DataStore;
use std::collections::HashMap;
use tracing::{info, warn};
use uuid::Uuid;

use super::helpers::respace;

/// What `doctor` found and fixed.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DoctorReport {
    pub groups_respaced: usize,
    /// Records whose rank equals their predecessor's.
    pub tied_ranks: usize,
    pub malformed_ranks: usize,
    /// Records whose parent is missing or of the wrong kind. Reported only.
    pub orphans: usize,
}

/// Finds sibling groups with tied or malformed ranks and respaces them,
/// keeping their current display order.
pub fn run<S: DataStore>(store: &mut S, scope: Scope) -> Result<CmdResult> {
    let report = check(store, scope)?;
    let mut result = CmdResult::default();

    if report == DoctorReport::default() {
        result.add_message(CmdMessage::success("No ordering problems found"));
        return Ok(result);
    }
    if report.groups_respaced > 0 {
        result.add_message(CmdMessage::success(format!(
            "Respaced {} group(s): {} tied rank(s), {} malformed rank(s)",
            report.groups_respaced, report.tied_ranks, report.malformed_ranks
        )));
    }
    if report.orphans > 0 {
        result.add_message(CmdMessage::warning(format!(
            "{} record(s) have a missing or invalid parent and are hidden",
            report.orphans
        )));
    }
    Ok(result)
}

pub fn check<S: DataStore>(store: &mut S, scope: Scope) -> Result<DoctorReport> {
    let records = store.list_records(scope)?;
    let kinds: HashMap<Uuid, _> = records.iter().map(|r| (r.id, r.kind)).collect();

    let mut report = DoctorReport::default();
    let mut groups: HashMap<SiblingGroup, Vec<Record>> = HashMap::new();
    for record in records {
        let parent_kind = record.parent_id.and_then(|p| kinds.get(&p).copied());
        if parent_kind != record.kind.parent_kind() {
            warn!(id = %record.id, kind = %record.kind, "record has no valid parent");
            report.orphans += 1;
            continue;
        }
        groups.entry(record.group()).or_default().push(record);
    }

    for (group, mut members) in groups {
        sort_siblings(&mut members);

        let malformed = members.iter().filter(|r| !r.rank.is_valid()).count();
        let tied = members
            .windows(2)
            .filter(|w| w[0].rank == w[1].rank)
            .count();
        if malformed == 0 && tied == 0 {
            continue;
        }

        info!(kind = %group.kind, tied, malformed, "repairing sibling group");
        report.tied_ranks += tied;
        report.malformed_ranks += malformed;
        report.groups_respaced += 1;
        respace(store, scope, members)?;
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::group_members;
    use crate::model::RecordKind;
    use crate::rank::OrderKey;
    use crate::store::memory::fixtures::StoreFixture;

    fn board(title: &str, rank: &str, offset_secs: i64) -> Record {
        let mut r = Record::new(
            RecordKind::Board,
            None,
            title.into(),
            serde_json::from_value(serde_json::json!(rank)).unwrap(),
        );
        r.created_at += chrono::Duration::seconds(offset_secs);
        r
    }

    #[test]
    fn healthy_store_is_left_alone() {
        let mut fixture = StoreFixture::new().with_board("W", &["Todo"], 3);
        let result = run(&mut fixture.store, fixture.scope).unwrap();
        assert_eq!(result.messages[0].content, "No ordering problems found");
    }

    #[test]
    fn ties_are_spread_in_creation_order() {
        let mut fixture = StoreFixture::new()
            .with_record(board("first", "V", 0))
            .with_record(board("second", "V", 1))
            .with_record(board("third", "k", 2));

        let report = check(&mut fixture.store, fixture.scope).unwrap();
        assert_eq!(report.tied_ranks, 1);
        assert_eq!(report.groups_respaced, 1);

        let boards = group_members(&fixture.store, fixture.scope, SiblingGroup::boards()).unwrap();
        let titles: Vec<_> = boards.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
        assert!(boards.windows(2).all(|w| w[0].rank < w[1].rank));
    }

    #[test]
    fn malformed_ranks_are_replaced() {
        let mut fixture = StoreFixture::new()
            .with_record(board("ok", "V", 0))
            .with_record(board("bad", "V0", 1));

        let report = check(&mut fixture.store, fixture.scope).unwrap();
        assert_eq!(report.malformed_ranks, 1);

        let boards = group_members(&fixture.store, fixture.scope, SiblingGroup::boards()).unwrap();
        assert!(boards.iter().all(|r| r.rank.is_valid()));
        let titles: Vec<_> = boards.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["ok", "bad"]);
    }

    #[test]
    fn orphans_are_reported() {
        let ghost = board("ghost", "V", 0);
        let orphan = Record::new(
            RecordKind::List,
            Some(ghost.id),
            "orphan".into(),
            OrderKey::parse("V").unwrap(),
        );
        let mut fixture = StoreFixture::new().with_record(orphan);

        let result = run(&mut fixture.store, fixture.scope).unwrap();
        assert!(result.messages[0].content.contains("1 record(s)"));
    }
}
