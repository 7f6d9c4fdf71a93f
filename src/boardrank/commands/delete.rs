use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::RecordPath;
use crate::model::{Record, Scope};
use crate::store::DataStore;
use std::collections::HashSet;
use uuid::Uuid;

use super::helpers::resolve_path;

/// Deletes the records at `paths` together with everything nested under them.
///
/// All paths are resolved against the listing as it was before the call.
pub fn run<S: DataStore>(store: &mut S, scope: Scope, paths: &[RecordPath]) -> Result<CmdResult> {
    let targets = paths
        .iter()
        .map(|p| resolve_path(store, scope, p))
        .collect::<Result<Vec<_>>>()?;

    let all = store.list_records(scope)?;
    let mut removed: HashSet<Uuid> = HashSet::new();
    let mut result = CmdResult::default();

    for target in targets {
        if removed.contains(&target.record.id) {
            continue;
        }
        let doomed = with_descendants(&all, target.record.id);
        let nested = doomed.len() - 1;
        for id in &doomed {
            if removed.insert(*id) {
                store.delete_record(id, scope)?;
            }
        }

        let suffix = if nested > 0 {
            format!(" (and {} nested)", nested)
        } else {
            String::new()
        };
        result.add_message(CmdMessage::success(format!(
            "Deleted {} {}: {}{}",
            target.record.kind, target.path, target.record.title, suffix
        )));
        result.affected_records.push(target.record);
    }

    Ok(result)
}

/// `root` followed by every record below it.
fn with_descendants(records: &[Record], root: Uuid) -> Vec<Uuid> {
    let mut ids = vec![root];
    let mut i = 0;
    while i < ids.len() {
        let parent = ids[i];
        ids.extend(
            records
                .iter()
                .filter(|r| r.parent_id == Some(parent))
                .map(|r| r.id),
        );
        i += 1;
    }
    ids
}
