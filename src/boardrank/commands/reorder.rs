use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BoardError, Result};
use crate::index::RecordPath;
use crate::model::Scope;
use crate::store::DataStore;

use super::helpers::{group_members, resolve_parent, respace};

/// Rewrites every rank among `parent`'s children with evenly spaced keys.
///
/// `order` lists the children's current 1-based positions in their new order
/// and must name each child exactly once. Without it the current order is
/// kept and only the keys are respaced.
pub fn run<S: DataStore>(
    store: &mut S,
    scope: Scope,
    parent: Option<&RecordPath>,
    order: Option<&[usize]>,
) -> Result<CmdResult> {
    let group = resolve_parent(store, scope, parent)?;
    let members = group_members(store, scope, group)?;

    let mut result = CmdResult::default();
    if members.is_empty() {
        result.add_message(CmdMessage::info("Nothing to reorder"));
        return Ok(result);
    }

    let ordered = match order {
        None => members,
        Some(order) => permute(members, order)?,
    };

    let respaced = respace(store, scope, ordered)?;
    result.add_message(CmdMessage::success(format!(
        "Reordered {} {}s",
        respaced.len(),
        group.kind
    )));
    Ok(result.with_affected_records(respaced))
}

fn permute<T: Clone>(members: Vec<T>, order: &[usize]) -> Result<Vec<T>> {
    if order.len() != members.len() {
        return Err(BoardError::Api(format!(
            "Order must list all {} positions, got {}",
            members.len(),
            order.len()
        )));
    }

    let mut seen = vec![false; members.len()];
    let mut ordered = Vec::with_capacity(members.len());
    for &pos in order {
        if pos == 0 || pos > members.len() {
            return Err(BoardError::Api(format!(
                "Position {} is out of range 1-{}",
                pos,
                members.len()
            )));
        }
        if std::mem::replace(&mut seen[pos - 1], true) {
            return Err(BoardError::Api(format!("Position {} listed twice", pos)));
        }
        ordered.push(members[pos - 1].clone());
    }
    Ok(ordered)
}
