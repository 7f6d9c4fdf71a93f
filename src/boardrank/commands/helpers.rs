use crate::commands::{CmdMessage, CmdResult};
use crate::config::BoardConfig;
use crate::error::{BoardError, Result};
use crate::index::{index_records, siblings, DisplayRecord, RecordPath};
use crate::model::{Record, Scope, SiblingGroup};
use crate::rank::evenly_spaced_keys;
use crate::store::DataStore;
use chrono::Utc;
use tracing::info;

pub fn indexed_records<S: DataStore>(store: &S, scope: Scope) -> Result<Vec<DisplayRecord>> {
    let records = store.list_records(scope)?;
    Ok(index_records(records))
}

pub fn resolve_path<S: DataStore>(
    store: &S,
    scope: Scope,
    path: &RecordPath,
) -> Result<DisplayRecord> {
    indexed_records(store, scope)?
        .into_iter()
        .find(|dr| &dr.path == path)
        .ok_or_else(|| BoardError::Api(format!("Path {} not found in current scope", path)))
}

/// Resolves the group new children of `parent` belong to.
///
/// `None` is the board level.
pub fn resolve_parent<S: DataStore>(
    store: &S,
    scope: Scope,
    parent: Option<&RecordPath>,
) -> Result<SiblingGroup> {
    let Some(path) = parent else {
        return Ok(SiblingGroup::boards());
    };
    let parent = resolve_path(store, scope, path)?;
    SiblingGroup::children_of(&parent.record).ok_or_else(|| {
        BoardError::Api(format!(
            "{} {} cannot contain other records",
            parent.record.kind, path
        ))
    })
}

/// Members of `group`, in display order.
pub fn group_members<S: DataStore>(
    store: &S,
    scope: Scope,
    group: SiblingGroup,
) -> Result<Vec<Record>> {
    let records = store.list_records(scope)?;
    Ok(siblings(&records, group))
}

/// Rewrites the ranks of `members` with evenly spaced keys, keeping their order.
pub fn respace<S: DataStore>(
    store: &mut S,
    scope: Scope,
    mut members: Vec<Record>,
) -> Result<Vec<Record>> {
    if members.is_empty() {
        return Ok(members);
    }
    let keys = evenly_spaced_keys(members.len())?;
    let now = Utc::now();
    for (record, key) in members.iter_mut().zip(keys) {
        record.rank = key;
        record.updated_at = now;
    }
    store.save_records(&members, scope)?;
    info!(count = members.len(), "respaced sibling group");
    Ok(members)
}

/// Respaces `group` when a freshly written rank outgrew `config.max_key_len`.
pub fn enforce_key_len<S: DataStore>(
    store: &mut S,
    scope: Scope,
    config: &BoardConfig,
    group: SiblingGroup,
    key_len: usize,
    result: &mut CmdResult,
) -> Result<()> {
    if key_len <= config.max_key_len {
        return Ok(());
    }
    if config.auto_rebalance {
        let members = group_members(store, scope, group)?;
        let respaced = respace(store, scope, members)?;
        result.add_message(CmdMessage::info(format!(
            "Rank grew past {} characters; respaced {} {}s",
            config.max_key_len,
            respaced.len(),
            group.kind
        )));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "Rank is {} characters long (limit {}); run `reorder` to respace",
            key_len, config.max_key_len
        )));
    }
    Ok(())
}
