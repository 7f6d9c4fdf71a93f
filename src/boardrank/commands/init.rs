use crate::commands::{BoardPaths, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Scope;
use std::fs;

pub fn run(paths: &BoardPaths, scope: Scope) -> Result<CmdResult> {
    let dir = paths.scope_dir(scope)?;
    let mut result = CmdResult::default();
    if dir.exists() {
        result.add_message(CmdMessage::info(format!(
            "Store already initialized at {}",
            dir.display()
        )));
    } else {
        fs::create_dir_all(&dir)?;
        result.add_message(CmdMessage::success(format!(
            "Initialized store at {}",
            dir.display()
        )));
    }
    Ok(result)
}
