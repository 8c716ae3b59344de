use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use super::model::SettingDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::settings::dsl::*;
use weddingsite_core::errors::Result;
use weddingsite_core::settings::SettingsRepositoryTrait;

pub struct SettingsRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SettingsRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        SettingsRepository { pool, writer }
    }
}

#[async_trait]
impl SettingsRepositoryTrait for SettingsRepository {
    fn load_all(&self) -> Result<Vec<(String, String)>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = settings
            .select(SettingDB::as_select())
            .order(key.asc())
            .load::<SettingDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(|row| (row.key, row.value)).collect())
    }

    fn get_setting(&self, setting_key: &str) -> Result<Option<String>> {
        let mut conn = get_connection(&self.pool)?;
        let found = settings
            .filter(key.eq(setting_key))
            .select(value)
            .first::<String>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(found)
    }

    fn load_with_prefix(&self, prefix: &str) -> Result<Vec<(String, String)>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = settings
            .filter(key.like(format!("{}%", prefix)))
            .select(SettingDB::as_select())
            .order(key.asc())
            .load::<SettingDB>(&mut conn)
            .map_err(StorageError::from)?;
        // LIKE treats `_` as a wildcard and ignores ASCII case.
        Ok(rows
            .into_iter()
            .filter(|row| row.key.starts_with(prefix))
            .map(|row| (row.key, row.value))
            .collect())
    }

    async fn insert_missing(&self, entries: Vec<(String, String)>) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let mut inserted = 0;
                for entry in entries {
                    inserted += diesel::insert_or_ignore_into(settings)
                        .values(SettingDB::from(entry))
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }
                Ok(inserted)
            })
            .await
    }

    async fn upsert_settings(&self, entries: Vec<(String, String)>) -> Result<()> {
        if entries.is_empty() {
            return Ok(());
        }
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                for entry in entries {
                    diesel::replace_into(settings)
                        .values(SettingDB::from(entry))
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }
                Ok(())
            })
            .await
    }

    async fn clear_setting(&self, setting_key: &str) -> Result<usize> {
        let target = setting_key.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::update(settings.filter(key.eq(target)))
                    .set(value.eq(""))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
