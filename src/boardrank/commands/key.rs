//! Direct access to the rank generator, for scripts and migrations that
//! persist ranks somewhere else.

use crate::commands::CmdResult;
use crate::error::Result;
use crate::rank;

pub fn between(lower: Option<&str>, upper: Option<&str>) -> Result<CmdResult> {
    let key = rank::key_between(lower, upper)?;
    Ok(CmdResult::default().with_keys(vec![key]))
}

pub fn after(prev: Option<&str>) -> Result<CmdResult> {
    let key = rank::key_after(prev)?;
    Ok(CmdResult::default().with_keys(vec![key]))
}

pub fn before(next: &str) -> Result<CmdResult> {
    let key = rank::key_before(next)?;
    Ok(CmdResult::default().with_keys(vec![key]))
}

pub fn spaced(count: usize) -> Result<CmdResult> {
    let keys = rank::evenly_spaced_keys(count)?;
    Ok(CmdResult::default().with_keys(keys))
}
