use crate::commands::{CmdMessage, CmdResult};
use crate::config::BoardConfig;
use crate::error::Result;
use crate::index::RecordPath;
use crate::model::{Record, Scope};
use crate::rank::key_after;
use crate::store::DataStore;
use std::fs;
use std::path::Path;
use tracing::debug;

use super::helpers::{enforce_key_len, group_members, resolve_parent};

/// Imports each non-blank line of `file` as a child of `parent`, in file order.
pub fn run<S: DataStore>(
    store: &mut S,
    scope: Scope,
    config: &BoardConfig,
    parent: Option<&RecordPath>,
    file: &Path,
) -> Result<CmdResult> {
    let content = fs::read_to_string(file)?;
    let titles: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut result = CmdResult::default();
    if titles.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Nothing to import from {}",
            file.display()
        )));
        return Ok(result);
    }

    let group = resolve_parent(store, scope, parent)?;
    let members = group_members(store, scope, group)?;
    let mut prev = members.last().map(|r| r.rank.clone());

    let mut imported = Vec::with_capacity(titles.len());
    for title in titles {
        let rank = key_after(prev.as_ref().map(|k| k.as_str()))?;
        imported.push(Record::new(
            group.kind,
            group.parent_id,
            title.to_string(),
            rank.clone(),
        ));
        prev = Some(rank);
    }
    store.save_records(&imported, scope)?;
    debug!(count = imported.len(), last = ?prev, "imported records");

    result.add_message(CmdMessage::success(format!(
        "Imported {} {}s from {}",
        imported.len(),
        group.kind,
        file.display()
    )));

    let longest = imported
        .iter()
        .map(|r| r.rank.as_str().len())
        .max()
        .unwrap_or(0);
    enforce_key_len(store, scope, config, group, longest, &mut result)?;

    let ids: Vec<_> = imported.iter().map(|r| r.id).collect();
    for id in ids {
        result.affected_records.push(store.get_record(&id, scope)?);
    }
    Ok(result)
}
