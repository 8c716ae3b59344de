use async_trait::async_trait;
use log::{debug, warn};
use std::sync::Arc;

use super::photos_model::{is_photo_slot, GalleryPhoto, PhotoUpload};
use crate::constants::{GALLERY_KEY_PREFIX, HERO_PHOTO_KEY, MAX_PHOTO_BYTES};
use crate::errors::{Error, Result};
use crate::settings::SettingsRepositoryTrait;

#[async_trait]
pub trait PhotoServiceTrait: Send + Sync {
    /// Stores the upload in its slot and returns the slot key.
    async fn upload_photo(&self, upload: PhotoUpload) -> Result<String>;

    /// Empties a slot. The settings row itself is kept.
    async fn remove_photo(&self, slot: &str) -> Result<()>;

    fn get_hero(&self) -> Result<String>;

    fn list_gallery(&self) -> Result<Vec<GalleryPhoto>>;
}

/// Photo slots live in the settings table as data URLs.
pub struct PhotoService {
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
}

impl PhotoService {
    pub fn new(settings_repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        PhotoService {
            settings_repository,
        }
    }
}

#[async_trait]
impl PhotoServiceTrait for PhotoService {
    async fn upload_photo(&self, upload: PhotoUpload) -> Result<String> {
        if upload.bytes.len() > MAX_PHOTO_BYTES {
            return Err(Error::PayloadTooLarge {
                size: upload.bytes.len(),
                limit: MAX_PHOTO_BYTES,
            });
        }
        if !is_photo_slot(&upload.slot) {
            warn!("Storing photo under non-photo key '{}'", upload.slot);
        }

        let data_url = upload.to_data_url();
        debug!(
            "Storing {} byte {} photo in {}",
            upload.bytes.len(),
            upload.mime_type,
            upload.slot
        );
        self.settings_repository
            .upsert_settings(vec![(upload.slot.clone(), data_url)])
            .await?;
        Ok(upload.slot)
    }

    async fn remove_photo(&self, slot: &str) -> Result<()> {
        self.settings_repository.clear_setting(slot).await?;
        Ok(())
    }

    fn get_hero(&self) -> Result<String> {
        Ok(self
            .settings_repository
            .get_setting(HERO_PHOTO_KEY)?
            .unwrap_or_default())
    }

    fn list_gallery(&self) -> Result<Vec<GalleryPhoto>> {
        let rows = self
            .settings_repository
            .load_with_prefix(GALLERY_KEY_PREFIX)?;
        Ok(rows
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(slot, src)| GalleryPhoto { slot, src })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::RwLock;

    // ============== Mock Repository ==============

    #[derive(Default)]
    struct MockSettingsRepository {
        rows: RwLock<BTreeMap<String, String>>,
    }

    #[async_trait]
    impl SettingsRepositoryTrait for MockSettingsRepository {
        fn load_all(&self) -> Result<Vec<(String, String)>> {
            Ok(self.rows.read().unwrap().clone().into_iter().collect())
        }

        fn get_setting(&self, setting_key: &str) -> Result<Option<String>> {
            Ok(self.rows.read().unwrap().get(setting_key).cloned())
        }

        fn load_with_prefix(&self, prefix: &str) -> Result<Vec<(String, String)>> {
            Ok(self
                .load_all()?
                .into_iter()
                .filter(|(k, _)| k.starts_with(prefix))
                .collect())
        }

        async fn insert_missing(&self, _: Vec<(String, String)>) -> Result<usize> {
            unimplemented!()
        }

        async fn upsert_settings(&self, entries: Vec<(String, String)>) -> Result<()> {
            self.rows.write().unwrap().extend(entries);
            Ok(())
        }

        async fn clear_setting(&self, setting_key: &str) -> Result<usize> {
            match self.rows.write().unwrap().get_mut(setting_key) {
                Some(value) => {
                    value.clear();
                    Ok(1)
                }
                None => Ok(0),
            }
        }
    }

    fn upload(slot: &str, bytes: Vec<u8>) -> PhotoUpload {
        PhotoUpload {
            slot: slot.to_string(),
            mime_type: "image/jpeg".to_string(),
            bytes,
        }
    }

    #[tokio::test]
    async fn test_upload_then_remove_gallery_photo() {
        let repo = Arc::new(MockSettingsRepository::default());
        let service = PhotoService::new(repo.clone());

        let slot = service
            .upload_photo(upload("gallery_0", vec![1, 2, 3]))
            .await
            .unwrap();
        assert_eq!(slot, "gallery_0");

        let gallery = service.list_gallery().unwrap();
        assert_eq!(
            gallery,
            vec![GalleryPhoto {
                slot: "gallery_0".into(),
                src: "data:image/jpeg;base64,AQID".into(),
            }]
        );

        service.remove_photo("gallery_0").await.unwrap();
        assert!(service.list_gallery().unwrap().is_empty());
        assert_eq!(repo.get_setting("gallery_0").unwrap(), Some(String::new()));
    }

    #[tokio::test]
    async fn test_oversized_upload_is_rejected() {
        let repo = Arc::new(MockSettingsRepository::default());
        let service = PhotoService::new(repo.clone());
        let err = service
            .upload_photo(upload("hero_photo", vec![0; MAX_PHOTO_BYTES + 1]))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::PayloadTooLarge { .. }));
        assert_eq!(repo.get_setting("hero_photo").unwrap(), None);
    }

    #[tokio::test]
    async fn test_upload_at_ceiling_is_accepted() {
        let service = PhotoService::new(Arc::new(MockSettingsRepository::default()));
        assert!(service
            .upload_photo(upload("hero_photo", vec![0; MAX_PHOTO_BYTES]))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_hero_defaults_to_empty() {
        let service = PhotoService::new(Arc::new(MockSettingsRepository::default()));
        assert_eq!(service.get_hero().unwrap(), "");
        service
            .upload_photo(upload("hero_photo", b"x".to_vec()))
            .await
            .unwrap();
        assert_eq!(service.get_hero().unwrap(), "data:image/jpeg;base64,eA==");
    }

    #[tokio::test]
    async fn test_gallery_is_ordered_by_key_and_skips_empty() {
        let repo = Arc::new(MockSettingsRepository::default());
        repo.upsert_settings(vec![
            ("gallery_1".into(), String::new()),
            ("hero_photo".into(), "data:image/png;base64,AA==".into()),
        ])
        .await
        .unwrap();
        let service = PhotoService::new(repo);
        service.upload_photo(upload("gallery_5", vec![9])).await.unwrap();
        service.upload_photo(upload("gallery_2", vec![8])).await.unwrap();

        let slots: Vec<String> = service
            .list_gallery()
            .unwrap()
            .into_iter()
            .map(|p| p.slot)
            .collect();
        assert_eq!(slots, vec!["gallery_2", "gallery_5"]);
    }
}
