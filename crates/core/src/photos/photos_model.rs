use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};

use crate::constants::PHOTO_SLOT_KEYS;

/// A file received for one of the photo slots.
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub slot: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// A populated gallery slot as served to the public site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryPhoto {
    pub slot: String,
    pub src: String,
}

impl PhotoUpload {
    /// Inline `data:<mime>;base64,<payload>` form stored in the settings table.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, BASE64.encode(&self.bytes))
    }
}

/// Whether `key` is one of the designated photo slots.
pub fn is_photo_slot(key: &str) -> bool {
    PHOTO_SLOT_KEYS.contains(&key)
}
