//! In-memory port implementations backing the use-case tests.
//!
//! `InMemoryStore` holds folders and documents in one place so a folder
//! delete can cascade through its subtree exactly like the relational
//! store's foreign keys do.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use docspace::application::ports::document_repository::DocumentRepository;
use docspace::application::ports::folder_repository::FolderRepository;
use docspace::application::ports::storage_port::StoragePort;
use docspace::domain::files::document::Document;
use docspace::domain::files::folder::Folder;

#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    folders: HashMap<Uuid, Folder>,
    documents: HashMap<Uuid, Document>,
    seq: i64,
}

impl State {
    // Strictly increasing timestamps keep newest-first orderings stable.
    fn next_time(&mut self) -> DateTime<Utc> {
        self.seq += 1;
        Utc.timestamp_opt(1_700_000_000 + self.seq, 0).unwrap()
    }
}

impl InMemoryStore {
    pub fn folder_exists(&self, id: Uuid) -> bool {
        self.state.lock().unwrap().folders.contains_key(&id)
    }

    pub fn document_exists(&self, id: Uuid) -> bool {
        self.state.lock().unwrap().documents.contains_key(&id)
    }

    pub fn folder(&self, id: Uuid) -> Option<Folder> {
        self.state.lock().unwrap().folders.get(&id).cloned()
    }

    pub fn document(&self, id: Uuid) -> Option<Document> {
        self.state.lock().unwrap().documents.get(&id).cloned()
    }

    pub fn folder_count(&self) -> usize {
        self.state.lock().unwrap().folders.len()
    }

    pub fn document_count(&self) -> usize {
        self.state.lock().unwrap().documents.len()
    }
}

#[async_trait]
impl FolderRepository for InMemoryStore {
    async fn create(
        &self,
        owner_id: Uuid,
        name: &str,
        parent_id: Option<Uuid>,
    ) -> anyhow::Result<Folder> {
        let mut state = self.state.lock().unwrap();
        let created_at = state.next_time();
        let folder = Folder {
            id: Uuid::new_v4(),
            name: name.to_string(),
            owner_id,
            parent_id,
            created_at,
        };
        state.folders.insert(folder.id, folder.clone());
        Ok(folder)
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Folder>> {
        Ok(self.state.lock().unwrap().folders.get(&id).cloned())
    }

    async fn rename_owned(
        &self,
        id: Uuid,
        owner_id: Uuid,
        name: &str,
    ) -> anyhow::Result<Option<Folder>> {
        let mut state = self.state.lock().unwrap();
        match state.folders.get_mut(&id) {
            Some(f) if f.owner_id == owner_id => {
                f.name = name.to_string();
                Ok(Some(f.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn delete_owned(&self, id: Uuid, owner_id: Uuid) -> anyhow::Result<bool> {
        let mut state = self.state.lock().unwrap();
        match state.folders.get(&id) {
            Some(f) if f.owner_id == owner_id => {}
            _ => return Ok(false),
        }
        // Mirror of the relational cascade: the whole subtree goes, with
        // every document inside it.
        let mut subtree = vec![id];
        let mut i = 0;
        while i < subtree.len() {
            let parent = subtree[i];
            let children: Vec<Uuid> = state
                .folders
                .values()
                .filter(|f| f.parent_id == Some(parent))
                .map(|f| f.id)
                .collect();
            subtree.extend(children);
            i += 1;
        }
        for folder_id in &subtree {
            state.folders.remove(folder_id);
        }
        state
            .documents
            .retain(|_, d| !d.folder_id.is_some_and(|f| subtree.contains(&f)));
        Ok(true)
    }

    async fn list_roots(&self, owner_id: Uuid) -> anyhow::Result<Vec<Folder>> {
        let state = self.state.lock().unwrap();
        let mut out: Vec<Folder> = state
            .folders
            .values()
            .filter(|f| f.owner_id == owner_id && f.parent_id.is_none())
            .cloned()
            .collect();
        out.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(out)
    }

    async fn list_children(
        &self,
        owner_id: Uuid,
        parent_id: Uuid,
    ) -> anyhow::Result<Vec<Folder>> {
        let state = self.state.lock().unwrap();
        let mut out: Vec<Folder> = state
            .folders
            .values()
            .filter(|f| f.owner_id == owner_id && f.parent_id == Some(parent_id))
            .cloned()
            .collect();
        out.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(out)
    }
}

#[async_trait]
impl DocumentRepository for InMemoryStore {
    async fn insert(
        &self,
        owner_id: Uuid,
        title: &str,
        file_path: &str,
        folder_id: Option<Uuid>,
    ) -> anyhow::Result<Document> {
        let mut state = self.state.lock().unwrap();
        let uploaded_at = state.next_time();
        let document = Document {
            id: Uuid::new_v4(),
            title: title.to_string(),
            file_path: file_path.to_string(),
            folder_id,
            owner_id,
            uploaded_at,
        };
        state.documents.insert(document.id, document.clone());
        Ok(document)
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Document>> {
        Ok(self.state.lock().unwrap().documents.get(&id).cloned())
    }

    async fn rename_owned(
        &self,
        id: Uuid,
        owner_id: Uuid,
        title: &str,
    ) -> anyhow::Result<Option<Document>> {
        let mut state = self.state.lock().unwrap();
        match state.documents.get_mut(&id) {
            Some(d) if d.owner_id == owner_id => {
                d.title = title.to_string();
                Ok(Some(d.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn move_owned(
        &self,
        id: Uuid,
        owner_id: Uuid,
        folder_id: Option<Uuid>,
    ) -> anyhow::Result<Option<Document>> {
        let mut state = self.state.lock().unwrap();
        match state.documents.get_mut(&id) {
            Some(d) if d.owner_id == owner_id => {
                d.folder_id = folder_id;
                Ok(Some(d.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn delete_owned(&self, id: Uuid, owner_id: Uuid) -> anyhow::Result<bool> {
        let mut state = self.state.lock().unwrap();
        match state.documents.get(&id) {
            Some(d) if d.owner_id == owner_id => {
                state.documents.remove(&id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn list_roots(&self, owner_id: Uuid) -> anyhow::Result<Vec<Document>> {
        let state = self.state.lock().unwrap();
        let mut out: Vec<Document> = state
            .documents
            .values()
            .filter(|d| d.owner_id == owner_id && d.folder_id.is_none())
            .cloned()
            .collect();
        out.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        Ok(out)
    }

    async fn list_in_folder(
        &self,
        owner_id: Uuid,
        folder_id: Uuid,
    ) -> anyhow::Result<Vec<Document>> {
        let state = self.state.lock().unwrap();
        let mut out: Vec<Document> = state
            .documents
            .values()
            .filter(|d| d.owner_id == owner_id && d.folder_id == Some(folder_id))
            .cloned()
            .collect();
        out.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        Ok(out)
    }

    async fn duplicated_titles(&self) -> anyhow::Result<Vec<String>> {
        let state = self.state.lock().unwrap();
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for d in state.documents.values() {
            *counts.entry(d.title.as_str()).or_default() += 1;
        }
        let mut out: Vec<String> = counts
            .into_iter()
            .filter(|(_, n)| *n > 1)
            .map(|(t, _)| t.to_string())
            .collect();
        out.sort();
        Ok(out)
    }

    async fn list_by_title_newest_first(&self, title: &str) -> anyhow::Result<Vec<Document>> {
        let state = self.state.lock().unwrap();
        let mut out: Vec<Document> = state
            .documents
            .values()
            .filter(|d| d.title == title)
            .cloned()
            .collect();
        out.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        Ok(out)
    }
}

#[derive(Default)]
pub struct InMemoryStorage {
    files: Mutex<HashMap<String, Vec<u8>>>,
}

impl InMemoryStorage {
    pub fn contains(&self, path: &str) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    pub fn file_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }
}

#[async_trait]
impl StoragePort for InMemoryStorage {
    async fn store(&self, filename: &str, bytes: &[u8]) -> anyhow::Result<String> {
        let mut files = self.files.lock().unwrap();
        let mut candidate = filename.to_string();
        let mut attempt = 0u32;
        while files.contains_key(&candidate) {
            attempt += 1;
            candidate = format!("{filename}-{attempt}");
        }
        files.insert(candidate.clone(), bytes.to_vec());
        Ok(candidate)
    }

    async fn read(&self, path: &str) -> anyhow::Result<Vec<u8>> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no such file: {path}"))
    }

    async fn delete(&self, path: &str) -> anyhow::Result<()> {
        self.files.lock().unwrap().remove(path);
        Ok(())
    }
}

/// Storage whose writes always fail, for exercising upload error paths.
pub struct FailingStorage;

#[async_trait]
impl StoragePort for FailingStorage {
    async fn store(&self, _filename: &str, _bytes: &[u8]) -> anyhow::Result<String> {
        Err(anyhow::anyhow!("disk full"))
    }

    async fn read(&self, _path: &str) -> anyhow::Result<Vec<u8>> {
        Err(anyhow::anyhow!("disk full"))
    }

    async fn delete(&self, _path: &str) -> anyhow::Result<()> {
        Err(anyhow::anyhow!("disk full"))
    }
}
