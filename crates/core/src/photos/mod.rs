//! Photo slots: the hero image and ten gallery images, kept as settings.

mod photos_model;
mod photos_service;

pub use photos_model::{is_photo_slot, GalleryPhoto, PhotoUpload};
pub use photos_service::{PhotoService, PhotoServiceTrait};
