use crate::commands::{CmdMessage, CmdResult};
use crate::config::BoardConfig;
use crate::error::{BoardError, Result};
use crate::index::RecordPath;
use crate::model::{Record, Scope};
use crate::rank::key_between;
use crate::store::DataStore;
use tracing::debug;

use super::helpers::{enforce_key_len, group_members, resolve_parent};

/// Appends a new record to the end of `parent`'s children (boards when `None`).
pub fn run<S: DataStore>(
    store: &mut S,
    scope: Scope,
    config: &BoardConfig,
    parent: Option<&RecordPath>,
    title: String,
) -> Result<CmdResult> {
    let title = title.trim().to_string();
    if title.is_empty() {
        return Err(BoardError::Api("Title cannot be empty".into()));
    }

    let group = resolve_parent(store, scope, parent)?;
    let members = group_members(store, scope, group)?;
    let last = members.last().map(|r| r.rank.as_str());
    let rank = key_between(last, None)?;
    debug!(kind = %group.kind, after = ?last, rank = %rank, "appending record");

    let record = Record::new(group.kind, group.parent_id, title, rank);
    store.save_record(&record, scope)?;

    let path = match parent {
        Some(p) => p.child(members.len() + 1),
        None => RecordPath::new(vec![members.len() + 1]),
    };
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Created {} {}: {}",
        record.kind, path, record.title
    )));
    enforce_key_len(
        store,
        scope,
        config,
        group,
        record.rank.as_str().len(),
        &mut result,
    )?;

    result.affected_records.push(store.get_record(&record.id, scope)?);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::{group_members, resolve_path};
    use crate::model::{RecordKind, SiblingGroup};
    use crate::store::memory::InMemoryStore;

    fn path(s: &str) -> RecordPath {
        s.parse().unwrap()
    }

    #[test]
    fn first_board_gets_canonical_key() {
        let mut store = InMemoryStore::new();
        let result = run(
            &mut store,
            Scope::Project,
            &BoardConfig::default(),
            None,
            "Roadmap".into(),
        )
        .unwrap();

        let board = &result.affected_records[0];
        assert_eq!(board.kind, RecordKind::Board);
        assert_eq!(board.rank.as_str(), "V");
        assert!(result.messages[0].content.contains("Created board 1"));
    }

    #[test]
    fn creates_append_in_order() {
        let mut store = InMemoryStore::new();
        let config = BoardConfig::default();
        for title in ["A", "B", "C"] {
            run(&mut store, Scope::Project, &config, None, title.into()).unwrap();
        }

        let boards = group_members(&store, Scope::Project, SiblingGroup::boards()).unwrap();
        let titles: Vec<_> = boards.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
        assert!(boards.windows(2).all(|w| w[0].rank < w[1].rank));
    }

    #[test]
    fn kind_follows_parent() {
        let mut store = InMemoryStore::new();
        let config = BoardConfig::default();
        run(&mut store, Scope::Project, &config, None, "Board".into()).unwrap();
        run(&mut store, Scope::Project, &config, Some(&path("1")), "List".into()).unwrap();
        run(&mut store, Scope::Project, &config, Some(&path("1.1")), "Card".into()).unwrap();

        let card = resolve_path(&store, Scope::Project, &path("1.1.1")).unwrap();
        assert_eq!(card.record.kind, RecordKind::Card);
        assert_eq!(card.record.title, "Card");
    }

    #[test]
    fn cards_cannot_have_children() {
        let mut store = InMemoryStore::new();
        let config = BoardConfig::default();
        run(&mut store, Scope::Project, &config, None, "Board".into()).unwrap();
        run(&mut store, Scope::Project, &config, Some(&path("1")), "List".into()).unwrap();
        run(&mut store, Scope::Project, &config, Some(&path("1.1")), "Card".into()).unwrap();

        let err = run(
            &mut store,
            Scope::Project,
            &config,
            Some(&path("1.1.1")),
            "Sub".into(),
        )
        .unwrap_err();
        assert!(matches!(err, BoardError::Api(_)));
    }

    #[test]
    fn empty_title_is_rejected() {
        let mut store = InMemoryStore::new();
        let err = run(
            &mut store,
            Scope::Project,
            &BoardConfig::default(),
            None,
            "   ".into(),
        )
        .unwrap_err();
        assert!(matches!(err, BoardError::Api(_)));
    }

    #[test]
    fn long_rank_triggers_respace() {
        let mut store = InMemoryStore::new();
        let config = BoardConfig {
            max_key_len: 1,
            auto_rebalance: true,
        };
        // V, l, t, x, z, zV: the sixth append outgrows one character
        for i in 0..7 {
            run(&mut store, Scope::Project, &config, None, format!("B{}", i)).unwrap();
        }

        let boards = group_members(&store, Scope::Project, SiblingGroup::boards()).unwrap();
        assert_eq!(boards.len(), 7);
        assert!(boards.iter().all(|r| r.rank.as_str().len() == 1));
        let titles: Vec<_> = boards.iter().map(|r| r.title.clone()).collect();
        assert_eq!(titles, (0..7).map(|i| format!("B{}", i)).collect::<Vec<_>>());
    }
}
