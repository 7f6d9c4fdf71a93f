use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::RecordPath;
use crate::model::Scope;
use crate::store::DataStore;

use super::helpers::{indexed_records, resolve_path};

/// Lists the records below `parent` (everything when `None`), in display order.
///
/// `depth` limits how many levels below `parent` are included.
pub fn run<S: DataStore>(
    store: &S,
    scope: Scope,
    parent: Option<&RecordPath>,
    depth: Option<usize>,
) -> Result<CmdResult> {
    if let Some(path) = parent {
        // Surface a bad path as an error rather than an empty listing.
        resolve_path(store, scope, path)?;
    }

    let base = parent.map_or(0, |p| p.depth());
    let prefix = parent.map(|p| p.positions().to_vec()).unwrap_or_default();

    let listed: Vec<_> = indexed_records(store, scope)?
        .into_iter()
        .filter(|dr| {
            let positions = dr.path.positions();
            positions.len() > base
                && positions.starts_with(&prefix)
                && depth.map_or(true, |d| positions.len() - base <= d)
        })
        .collect();

    Ok(CmdResult::default().with_listed_records(listed))
}
