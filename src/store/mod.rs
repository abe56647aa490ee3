use serde::Serialize;
use std::path::Path;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::info;

use crate::error::LoadError;
use crate::models::DataFile;

pub mod events;
pub mod spots;
pub mod reservations;

/// Process-wide snapshot of events and spots.
///
/// Loaded once at startup and never replaced. Lookups share the read lock;
/// the only mutation, `reserve`, holds the write lock for its whole
/// scan-check-write sequence.
pub struct Store {
    data: RwLock<DataFile>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreCounts {
    pub events: usize,
    pub spots: usize,
    pub reserved: usize,
}

impl Store {
    pub fn new(data: DataFile) -> Self {
        Self { data: RwLock::new(data) }
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let data: DataFile = serde_json::from_slice(bytes)?;
        Ok(Self::new(data))
    }

    // Загрузка снапшота из файла при старте
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        info!("Loading dataset from {}", path.display());

        let bytes = tokio::fs::read(path).await.map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_slice(&bytes).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let counts = store.counts();
        info!(
            "Dataset loaded: {} events, {} spots ({} reserved)",
            counts.events, counts.spots, counts.reserved
        );
        Ok(store)
    }

    pub fn counts(&self) -> StoreCounts {
        let data = self.read();
        StoreCounts {
            events: data.events.len(),
            spots: data.spots.len(),
            reserved: data.spots.iter().filter(|s| s.is_reserved()).count(),
        }
    }

    // A panic while holding the lock cannot leave a half-written record:
    // every write is a single field assignment.
    fn read(&self) -> RwLockReadGuard<'_, DataFile> {
        self.data.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, DataFile> {
        self.data.write().unwrap_or_else(PoisonError::into_inner)
    }
}
