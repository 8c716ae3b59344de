use super::settings_defaults::{default_entries, merge_with_defaults};
use super::{coerce_setting_value, Settings, SettingsRepositoryTrait, SettingsUpdate};
use crate::errors::Result;
use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    /// Seeds defaults for keys that have no row yet. Safe to run on every start.
    async fn initialize(&self) -> Result<()>;

    fn get_settings(&self) -> Result<Settings>;

    /// Merged settings for anonymous readers; photo slots only when asked for.
    fn get_public_settings(&self, include_photos: bool) -> Result<Settings>;

    /// Get a single persisted value by key. Returns None if not found.
    fn get_setting_value(&self, key: &str) -> Result<Option<String>>;

    async fn update_settings(&self, update: &SettingsUpdate) -> Result<()>;
}

pub struct SettingsService {
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
}

#[async_trait]
impl SettingsServiceTrait for SettingsService {
    async fn initialize(&self) -> Result<()> {
        let inserted = self
            .settings_repository
            .insert_missing(default_entries())
            .await?;
        info!("Settings ready ({} default keys seeded)", inserted);
        Ok(())
    }

    fn get_settings(&self) -> Result<Settings> {
        let persisted = self.settings_repository.load_all()?;
        Ok(merge_with_defaults(persisted))
    }

    fn get_public_settings(&self, include_photos: bool) -> Result<Settings> {
        let settings = self.get_settings()?;
        if include_photos {
            Ok(settings)
        } else {
            Ok(settings.without_photos())
        }
    }

    fn get_setting_value(&self, key: &str) -> Result<Option<String>> {
        self.settings_repository.get_setting(key)
    }

    async fn update_settings(&self, update: &SettingsUpdate) -> Result<()> {
        let entries: Vec<(String, String)> = update
            .iter()
            .map(|(key, value)| (key.clone(), coerce_setting_value(value)))
            .collect();
        debug!("Updating {} settings", entries.len());
        self.settings_repository.upsert_settings(entries).await
    }
}

impl SettingsService {
    pub fn new(settings_repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        SettingsService {
            settings_repository,
        }
    }
}
