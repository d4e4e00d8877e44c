use std::sync::Arc;

use crate::application::ports::document_repository::DocumentRepository;
use crate::application::ports::folder_repository::FolderRepository;
use crate::application::ports::storage_port::StoragePort;
use crate::application::ports::user_repository::UserRepository;
use crate::bootstrap::config::Config;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

pub struct AppServices {
    folder_repo: Arc<dyn FolderRepository>,
    document_repo: Arc<dyn DocumentRepository>,
    user_repo: Arc<dyn UserRepository>,
    storage: Arc<dyn StoragePort>,
}

impl AppServices {
    pub fn new(
        folder_repo: Arc<dyn FolderRepository>,
        document_repo: Arc<dyn DocumentRepository>,
        user_repo: Arc<dyn UserRepository>,
        storage: Arc<dyn StoragePort>,
    ) -> Self {
        Self {
            folder_repo,
            document_repo,
            user_repo,
            storage,
        }
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn folder_repo(&self) -> Arc<dyn FolderRepository> {
        self.services.folder_repo.clone()
    }

    pub fn document_repo(&self) -> Arc<dyn DocumentRepository> {
        self.services.document_repo.clone()
    }

    pub fn user_repo(&self) -> Arc<dyn UserRepository> {
        self.services.user_repo.clone()
    }

    pub fn storage(&self) -> Arc<dyn StoragePort> {
        self.services.storage.clone()
    }
}
