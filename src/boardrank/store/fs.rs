use super::DataStore;
use crate::error::{BoardError, Result};
use crate::model::{Record, Scope};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

const DATA_FILENAME: &str = "data.json";

pub struct FileStore {
    project_root: Option<PathBuf>,
    global_root: PathBuf,
}

impl FileStore {
    pub fn new(project_root: Option<PathBuf>, global_root: PathBuf) -> Self {
        Self {
            project_root,
            global_root,
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    fn get_store_path(&self, scope: Scope) -> Result<PathBuf> {
        let root = match scope {
            Scope::Project => self.project_root.as_ref().ok_or_else(|| {
                BoardError::Store("No project scope available".to_string())
            })?,
            Scope::Global => &self.global_root,
        };
        Ok(root.clone())
    }

    fn load(&self, store_path: &Path) -> Result<HashMap<Uuid, Record>> {
        let data_file = store_path.join(DATA_FILENAME);
        if !data_file.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(data_file)?;
        let records: HashMap<Uuid, Record> = serde_json::from_str(&content)?;
        Ok(records)
    }

    fn save(&self, store_path: &Path, records: &HashMap<Uuid, Record>) -> Result<()> {
        self.ensure_dir(store_path)?;
        let content = serde_json::to_string_pretty(records)?;
        // Replace atomically; readers never see a half-written file.
        let tmp = store_path.join(format!("{}.tmp", DATA_FILENAME));
        fs::write(&tmp, content)?;
        fs::rename(tmp, store_path.join(DATA_FILENAME))?;
        debug!(count = records.len(), path = %store_path.display(), "saved records");
        Ok(())
    }
}

impl DataStore for FileStore {
    fn save_record(&mut self, record: &Record, scope: Scope) -> Result<()> {
        self.save_records(std::slice::from_ref(record), scope)
    }

    fn save_records(&mut self, records: &[Record], scope: Scope) -> Result<()> {
        let root = self.get_store_path(scope)?;
        let mut all = self.load(&root)?;
        for record in records {
            all.insert(record.id, record.clone());
        }
        self.save(&root, &all)
    }

    fn get_record(&self, id: &Uuid, scope: Scope) -> Result<Record> {
        let root = self.get_store_path(scope)?;
        self.load(&root)?
            .remove(id)
            .ok_or(BoardError::RecordNotFound(*id))
    }

    fn list_records(&self, scope: Scope) -> Result<Vec<Record>> {
        let root = self.get_store_path(scope)?;
        if !root.exists() {
            return Ok(Vec::new());
        }
        Ok(self.load(&root)?.into_values().collect())
    }

    fn delete_record(&mut self, id: &Uuid, scope: Scope) -> Result<()> {
        let root = self.get_store_path(scope)?;
        let mut all = self.load(&root)?;
        if all.remove(id).is_none() {
            return Err(BoardError::RecordNotFound(*id));
        }
        self.save(&root, &all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecordKind;
    use crate::rank::{first_key, key_after};

    fn store_in(dir: &Path) -> FileStore {
        FileStore::new(Some(dir.join("project")), dir.join("global"))
    }

    #[test]
    fn saves_and_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());

        let board = Record::new(RecordKind::Board, None, "Roadmap".into(), first_key());
        store.save_record(&board, Scope::Project).unwrap();

        let loaded = store.get_record(&board.id, Scope::Project).unwrap();
        assert_eq!(loaded.title, "Roadmap");
        assert_eq!(loaded.rank, board.rank);
        assert!(dir.path().join("project").join(DATA_FILENAME).exists());
    }

    #[test]
    fn scopes_are_separate() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());

        let board = Record::new(RecordKind::Board, None, "Global".into(), first_key());
        store.save_record(&board, Scope::Global).unwrap();

        assert!(store.list_records(Scope::Project).unwrap().is_empty());
        assert_eq!(store.list_records(Scope::Global).unwrap().len(), 1);
    }

    #[test]
    fn batch_save_updates_every_record() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());

        let a = Record::new(RecordKind::Board, None, "A".into(), first_key());
        let mut b = Record::new(
            RecordKind::Board,
            None,
            "B".into(),
            key_after(Some("V")).unwrap(),
        );
        store.save_records(&[a.clone(), b.clone()], Scope::Project).unwrap();

        b.title = "B2".into();
        store.save_records(&[b.clone()], Scope::Project).unwrap();

        let records = store.list_records(Scope::Project).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(store.get_record(&b.id, Scope::Project).unwrap().title, "B2");
    }

    #[test]
    fn delete_missing_record_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());
        let id = Uuid::new_v4();

        let err = store.delete_record(&id, Scope::Project).unwrap_err();
        assert!(matches!(err, BoardError::RecordNotFound(missing) if missing == id));
    }

    #[test]
    fn missing_project_root_is_a_store_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(None, dir.path().to_path_buf());
        assert!(matches!(
            store.list_records(Scope::Project),
            Err(BoardError::Store(_))
        ));
    }
}
