//! Repository traits for settings.

use async_trait::async_trait;

use crate::errors::Result;

/// Repository trait for the key/value settings table.
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    /// Load every persisted (key, value) pair.
    fn load_all(&self) -> Result<Vec<(String, String)>>;

    /// Get a single persisted value, `None` when the row does not exist.
    fn get_setting(&self, setting_key: &str) -> Result<Option<String>>;

    /// Persisted rows whose key starts with `prefix`, ordered by key.
    fn load_with_prefix(&self, prefix: &str) -> Result<Vec<(String, String)>>;

    /// Insert each entry whose key is not already present. Returns rows inserted.
    async fn insert_missing(&self, entries: Vec<(String, String)>) -> Result<usize>;

    /// Insert-or-update every entry.
    async fn upsert_settings(&self, entries: Vec<(String, String)>) -> Result<()>;

    /// Set an existing row's value to the empty string. Returns rows updated.
    async fn clear_setting(&self, setting_key: &str) -> Result<usize>;
}
