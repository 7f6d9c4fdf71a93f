use crate::commands::{CmdMessage, CmdResult};
use crate::config::BoardConfig;
use crate::error::{BoardError, Result};
use crate::index::RecordPath;
use crate::model::Scope;
use crate::rank::key_between;
use crate::store::DataStore;
use chrono::Utc;
use tracing::{debug, info};

use super::helpers::{enforce_key_len, group_members, resolve_parent, resolve_path, respace};

/// Where in the destination group a moved record lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovePosition {
    First,
    Last,
    /// 1-based slot among the destination's records, not counting the moved one.
    /// Slots past the end mean `Last`.
    At(usize),
}

/// Moves `source` to `position` among the children of `destination`.
///
/// With no destination the record is reordered within its own group.
pub fn run<S: DataStore>(
    store: &mut S,
    scope: Scope,
    config: &BoardConfig,
    source: &RecordPath,
    destination: Option<&RecordPath>,
    position: MovePosition,
) -> Result<CmdResult> {
    let mut record = resolve_path(store, scope, source)?.record;

    let group = match destination {
        None => record.group(),
        Some(dest) => {
            let group = resolve_parent(store, scope, Some(dest))?;
            if group.kind != record.kind {
                return Err(BoardError::Api(format!(
                    "Cannot move {} {} into {}: it holds {}s",
                    record.kind, source, dest, group.kind
                )));
            }
            group
        }
    };
    let parent_path = match destination {
        Some(dest) => Some(dest.clone()),
        None => source.parent(),
    };

    let current = group_members(store, scope, group)?;
    let current_slot = current.iter().position(|r| r.id == record.id);
    let mut members: Vec<_> = current.into_iter().filter(|r| r.id != record.id).collect();

    let slot = match position {
        MovePosition::First => 0,
        MovePosition::Last => members.len(),
        MovePosition::At(0) => {
            return Err(BoardError::Api("Positions start at 1".into()));
        }
        MovePosition::At(n) => (n - 1).min(members.len()),
    };
    let new_path = match &parent_path {
        Some(p) => p.child(slot + 1),
        None => RecordPath::new(vec![slot + 1]),
    };

    let mut result = CmdResult::default();
    if current_slot == Some(slot) {
        result.add_message(CmdMessage::info(format!(
            "{} {} is already at {}",
            record.kind, source, new_path
        )));
        return Ok(result);
    }

    // Concurrent inserts can leave equal neighbours; spread the group first.
    let tied = slot > 0
        && slot < members.len()
        && members[slot - 1].rank >= members[slot].rank;
    if tied {
        info!(kind = %group.kind, "neighbour ranks tied, respacing before move");
        members = respace(store, scope, members)?;
        result.add_message(CmdMessage::info(format!(
            "Respaced {} {}s with tied ranks",
            members.len(),
            group.kind
        )));
    }

    let lower = slot.checked_sub(1).map(|i| members[i].rank.as_str());
    let upper = members.get(slot).map(|r| r.rank.as_str());
    let rank = key_between(lower, upper)?;
    debug!(?lower, ?upper, rank = %rank, "moving record");

    record.parent_id = group.parent_id;
    record.rank = rank;
    record.updated_at = Utc::now();
    store.save_record(&record, scope)?;

    result.add_message(CmdMessage::success(format!(
        "Moved {} {} to {}: {}",
        record.kind, source, new_path, record.title
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
