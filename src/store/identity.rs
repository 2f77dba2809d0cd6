// src/store/identity.rs
use std::fs;
use std::path::PathBuf;

use uuid::Uuid;

pub const DEFAULT_ID_PATH: &str = ".chat_relay_id";

/// Get-or-create for the persistent client identifier.
pub trait IdProvider {
    fn get_or_create(&self) -> String;
}

/// Persists one generated id to a file and reuses it across runs. All I/O
/// is best effort: on any failure the caller still gets a fresh id.
pub struct FileIdProvider {
    path: PathBuf,
}

impl FileIdProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl IdProvider for FileIdProvider {
    fn get_or_create(&self) -> String {
        if let Ok(existing) = fs::read_to_string(&self.path) {
            let existing = existing.trim();
            if !existing.is_empty() {
                return existing.to_string();
            }
        }
        let id = Uuid::new_v4().to_string();
        let _ = fs::write(&self.path, &id);
        id
    }
}

/// In-memory stand-in for when durable storage is unavailable.
pub struct MemoryIdProvider {
    id: String,
}

impl MemoryIdProvider {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
        }
    }
}

impl Default for MemoryIdProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl IdProvider for MemoryIdProvider {
    fn get_or_create(&self) -> String {
        self.id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_provider_reuses_stored_id() {
        let path = std::env::temp_dir().join(format!("id-{}", Uuid::new_v4()));
        let provider = FileIdProvider::new(&path);

        let first = provider.get_or_create();
        let second = provider.get_or_create();
        assert_eq!(first, second);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn memory_provider_is_stable_per_instance() {
        let provider = MemoryIdProvider::new();
        assert_eq!(provider.get_or_create(), provider.get_or_create());
    }
}
