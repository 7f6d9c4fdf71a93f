//! # API Facade
//!
//! The API layer is a thin facade over the command layer and the single entry
//! point for every boardrank operation, whatever the UI.
//!
//! It dispatches to the command functions and normalizes inputs: dotted path
//! strings become [`RecordPath`]s and the scope's [`BoardConfig`] is loaded
//! for the commands that need it. Business logic, printing and formatting
//! stay out of here.
//!
//! `BoardApi<S: DataStore>` is generic over the storage backend:
//! `BoardApi<FileStore>` in production, `BoardApi<InMemoryStore>` in tests.
//!
//! API tests check that the right command runs with the right arguments.
//! Command logic is tested in the command modules.

use crate::commands;
use crate::config::BoardConfig;
use crate::error::{BoardError, Result};
use crate::index::RecordPath;
use crate::model::Scope;
use crate::store::DataStore;
use std::path::Path;

/// The main API facade for boardrank operations.
pub struct BoardApi<S: DataStore> {
    store: S,
    paths: commands::BoardPaths,
}

impl<S: DataStore> BoardApi<S> {
    pub fn new(store: S, paths: commands::BoardPaths) -> Self {
        Self { store, paths }
    }

    pub fn create(
        &mut self,
        scope: Scope,
        parent: Option<&str>,
        title: String,
    ) -> Result<commands::CmdResult> {
        let parent = parse_optional_path(parent)?;
        let config = self.config_for(scope)?;
        commands::create::run(&mut self.store, scope, &config, parent.as_ref(), title)
    }

    pub fn list(
        &self,
        scope: Scope,
        parent: Option<&str>,
        depth: Option<usize>,
    ) -> Result<commands::CmdResult> {
        let parent = parse_optional_path(parent)?;
        commands::list::run(&self.store, scope, parent.as_ref(), depth)
    }

    pub fn move_record(
        &mut self,
        scope: Scope,
        source: &str,
        destination: Option<&str>,
        position: MovePosition,
    ) -> Result<commands::CmdResult> {
        let source = parse_path(source)?;
        let destination = parse_optional_path(destination)?;
        let config = self.config_for(scope)?;
        commands::move_record::run(
            &mut self.store,
            scope,
            &config,
            &source,
            destination.as_ref(),
            position,
        )
    }

    pub fn reorder(
        &mut self,
        scope: Scope,
        parent: Option<&str>,
        order: Option<&[usize]>,
    ) -> Result<commands::CmdResult> {
        let parent = parse_optional_path(parent)?;
        commands::reorder::run(&mut self.store, scope, parent.as_ref(), order)
    }

    pub fn import(
        &mut self,
        scope: Scope,
        parent: Option<&str>,
        file: &Path,
    ) -> Result<commands::CmdResult> {
        let parent = parse_optional_path(parent)?;
        let config = self.config_for(scope)?;
        commands::import::run(&mut self.store, scope, &config, parent.as_ref(), file)
    }

    pub fn delete<I: AsRef<str>>(
        &mut self,
        scope: Scope,
        paths: &[I],
    ) -> Result<commands::CmdResult> {
        let paths = parse_paths(paths)?;
        commands::delete::run(&mut self.store, scope, &paths)
    }

    pub fn doctor(&mut self, scope: Scope) -> Result<commands::CmdResult> {
        commands::doctor::run(&mut self.store, scope)
    }

    pub fn key_between(
        &self,
        lower: Option<&str>,
        upper: Option<&str>,
    ) -> Result<commands::CmdResult> {
        commands::key::between(lower, upper)
    }

    pub fn key_after(&self, prev: Option<&str>) -> Result<commands::CmdResult> {
        commands::key::after(prev)
    }

    pub fn key_before(&self, next: &str) -> Result<commands::CmdResult> {
        commands::key::before(next)
    }

    pub fn key_spaced(&self, count: usize) -> Result<commands::CmdResult> {
        commands::key::spaced(count)
    }

    pub fn config(&self, scope: Scope, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, scope, action)
    }

    pub fn init(&self, scope: Scope) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths, scope)
    }

    pub fn paths(&self) -> &commands::BoardPaths {
        &self.paths
    }

    fn config_for(&self, scope: Scope) -> Result<BoardConfig> {
        BoardConfig::load(self.paths.scope_dir(scope)?)
    }
}

fn parse_path(input: &str) -> Result<RecordPath> {
    input.parse().map_err(BoardError::Api)
}

fn parse_optional_path(input: Option<&str>) -> Result<Option<RecordPath>> {
    input.map(parse_path).transpose()
}

fn parse_paths<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<RecordPath>> {
    inputs.iter().map(|s| parse_path(s.as_ref())).collect()
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::move_record::MovePosition;
pub use commands::{BoardPaths, CmdMessage, CmdResult, MessageLevel};
