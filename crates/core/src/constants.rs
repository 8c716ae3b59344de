/// Settings key holding the hero photo data URL
pub const HERO_PHOTO_KEY: &str = "hero_photo";

/// Key prefix shared by the gallery photo slots
pub const GALLERY_KEY_PREFIX: &str = "gallery_";

/// Every settings key that carries photo data
pub const PHOTO_SLOT_KEYS: [&str; 11] = [
    "hero_photo",
    "gallery_0",
    "gallery_1",
    "gallery_2",
    "gallery_3",
    "gallery_4",
    "gallery_5",
    "gallery_6",
    "gallery_7",
    "gallery_8",
    "gallery_9",
];

/// Upload ceiling for a single photo (8 MiB)
pub const MAX_PHOTO_BYTES: usize = 8 * 1024 * 1024;

/// Settings key holding the coordinator's address
pub const COORDINATOR_EMAIL_KEY: &str = "coordinator_email";

/// Header row of the RSVP export
pub const EXPORT_HEADER: [&str; 9] = [
    "ID", "First", "Last", "Email", "Guests", "Meal", "Song", "Message", "Date",
];
