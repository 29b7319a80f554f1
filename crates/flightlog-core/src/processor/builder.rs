//! Builder for creating and configuring CommandProcessor instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use log::info;

use super::{CommandProcessor, DEFAULT_CALLSIGN_PREFIX};
use crate::{
    display::{Renderer, DEFAULT_BLOCK_LIMIT},
    error::{FlightLogError, Result},
    store::{JsonFileStore, MemoryStore, RecordStore, SqliteStore, StoreBackend},
};

/// Builder for creating and configuring CommandProcessor instances.
#[derive(Clone)]
pub struct CommandProcessorBuilder {
    database_path: Option<PathBuf>,
    backend: StoreBackend,
    store: Option<Arc<dyn RecordStore>>,
    callsign_prefix: String,
    block_limit: usize,
}

impl CommandProcessorBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            backend: StoreBackend::default(),
            store: None,
            callsign_prefix: DEFAULT_CALLSIGN_PREFIX.to_string(),
            block_limit: DEFAULT_BLOCK_LIMIT,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/flightlog/flightlog.db` (or `flightlog.json` for the
    /// JSON backend).
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Selects one of the bundled storage backends.
    pub fn with_backend(mut self, backend: StoreBackend) -> Self {
        self.backend = backend;
        self
    }

    /// Uses an already constructed store, overriding backend and path.
    pub fn with_store(mut self, store: Arc<dyn RecordStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Sets the organization tag prepended to callsigns.
    pub fn with_callsign_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.callsign_prefix = prefix.into().trim().to_string();
        self
    }

    /// Sets the maximum size of a rendered text block, in characters.
    pub fn with_block_limit(mut self, limit: usize) -> Self {
        self.block_limit = limit;
        self
    }

    /// Builds the configured processor.
    ///
    /// # Errors
    ///
    /// Returns `FlightLogError::Configuration` for a zero block limit,
    /// `FlightLogError::FileSystem` if the data directory cannot be created,
    /// and `FlightLogError::StoreUnavailable` if the store cannot be opened.
    pub async fn build(self) -> Result<CommandProcessor> {
        if self.block_limit == 0 {
            return Err(FlightLogError::Configuration {
                message: "Block limit must be at least one character".to_string(),
            });
        }

        let store = match self.store {
            Some(store) => store,
            None => Self::open_store(self.backend, self.database_path).await?,
        };

        Ok(CommandProcessor::new(
            store,
            Renderer::new(self.block_limit),
            self.callsign_prefix,
        ))
    }

    async fn open_store(
        backend: StoreBackend,
        database_path: Option<PathBuf>,
    ) -> Result<Arc<dyn RecordStore>> {
        let path = match backend.default_file_name() {
            None => {
                info!("Using in-memory flight log store");
                return Ok(Arc::new(MemoryStore::new()));
            }
            Some(file_name) => match database_path {
                Some(path) => path,
                None => Self::default_data_path(file_name)?,
            },
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| FlightLogError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        info!(
            "Using {} flight log store at {}",
            backend.as_str(),
            path.display()
        );

        match backend {
            StoreBackend::JsonFile => Ok(Arc::new(JsonFileStore::new(path))),
            _ => Ok(Arc::new(SqliteStore::open(path).await?)),
        }
    }

    /// Returns the default data file path following XDG Base Directory
    /// specification.
    fn default_data_path(file_name: &str) -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("flightlog")
            .place_data_file(file_name)
            .map_err(|e| FlightLogError::XdgDirectory(e.to_string()))
    }
}

impl Default for CommandProcessorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
