use crate::commands::{BoardPaths, CmdMessage, CmdResult};
use crate::config::BoardConfig;
use crate::error::Result;
use crate::model::Scope;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &BoardPaths, scope: Scope, action: ConfigAction) -> Result<CmdResult> {
    let dir = paths.scope_dir(scope)?;
    let mut config = BoardConfig::load(&dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            let value = config.get(&key)?;
            result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
            return Ok(result);
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(&dir)?;
            result.add_message(CmdMessage::success(format!("{} set to {}", key, value)));
        }
    }

    Ok(result.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths_in(dir: &tempfile::TempDir) -> BoardPaths {
        BoardPaths {
            project: Some(dir.path().join(".boardrank")),
            global: dir.path().join("global"),
        }
    }

    #[test]
    fn shows_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(&paths_in(&dir), Scope::Project, ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(BoardConfig::default()));
    }

    #[test]
    fn set_persists_per_scope() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths_in(&dir);
        run(
            &paths,
            Scope::Global,
            ConfigAction::Set("max-key-len".into(), "12".into()),
        )
        .unwrap();

        let global = run(&paths, Scope::Global, ConfigAction::ShowAll).unwrap();
        assert_eq!(global.config.unwrap().max_key_len, 12);
        let project = run(&paths, Scope::Project, ConfigAction::ShowAll).unwrap();
        assert_eq!(project.config.unwrap().max_key_len, 24);
    }

    #[test]
    fn show_key_reports_value() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(
            &paths_in(&dir),
            Scope::Project,
            ConfigAction::ShowKey("auto-rebalance".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].content, "auto-rebalance = true");
    }

    #[test]
    fn unknown_key_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run(
            &paths_in(&dir),
            Scope::Project,
            ConfigAction::Set("colour".into(), "red".into())
        )
        .is_err());
    }
}
