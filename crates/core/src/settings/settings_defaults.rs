//! Built-in site content and the defaults/override merge.

use std::collections::BTreeMap;

use super::Settings;

/// Values every known setting resolves to until an admin overrides it.
pub const DEFAULT_SETTINGS: &[(&str, &str)] = &[
    // Couple
    ("name1", "Kayla"),
    ("lastname1", "Galloway"),
    ("name2", "Vaughn"),
    ("lastname2", "Church"),
    // Date & venue
    ("wedding_date", "2027-01-16"),
    ("wedding_time", "17:00"),
    ("venue_name", "The Venue at Friendship Springs"),
    (
        "venue_address",
        "7340 Friendship Springs Blvd, Flowery Branch, GA 30542",
    ),
    (
        "venue_maps_link",
        "https://maps.google.com/?q=7340+Friendship+Springs+Blvd+Flowery+Branch+GA+30542",
    ),
    ("dress_code", "Black Tie / Formal"),
    ("city", "Flowery Branch, GA"),
    // Story
    (
        "story_text1",
        "Kayla and Vaughn met on Kayla's 20th birthday — a night that turned out to be more memorable than anyone could have planned. Kayla was out celebrating with her current maid of honor and cousin, Tsina. The two were having a great time but the night got even more exciting. Kayla spotted Vaughn from across the room. Feeling bold on her birthday, she decided to make the first move and walked right up to him to ask for a drink.",
    ),
    (
        "story_text2",
        "From that moment on, they didn't leave each other's side the entire night. What started as a simple birthday celebration quickly turned into the beginning of something much more special. To top it all off, the night even included a surprise performance by 2 Chainz — making an already unforgettable evening even more exciting.",
    ),
    (
        "story_text3",
        "But the best part of the night wasn't the music or the celebration — it was meeting the person they would spend the rest of their lives with.",
    ),
    (
        "story_quote",
        "She walked up to him and asked for a drink. The rest is history.",
    ),
    // Timeline (JSON)
    (
        "timeline",
        r#"[{"time":"5:00 PM","title":"Ceremony","detail":"The Venue at Friendship Springs","note":"Children welcome · Please be seated by 4:45 PM"},{"time":"6:00 PM","title":"Cocktail Hour","detail":"The Venue at Friendship Springs","note":"Adults only from this point forward"},{"time":"7:00 PM","title":"Reception & Dinner","detail":"The Venue at Friendship Springs","note":"Dinner, dancing & celebration"}]"#,
    ),
    // Wedding party (JSON)
    ("wedding_party", "[]"),
    // Hotel
    ("hotel_name", "Hampton Inn & Suites Braselton"),
    ("hotel_address", "5159 Golf Club Dr, Braselton, GA 30517"),
    ("hotel_phone", "+1 (770) 307-0700"),
    ("hotel_block", "Church Wedding"),
    ("hotel_deadline", "December 12, 2026"),
    ("hotel_link", "https://www.hilton.com"),
    // FAQ (JSON)
    (
        "faq",
        r#"[{"q":"Is parking available?","a":"Yes! The venue offers complimentary on-site parking in the open lot. Please feel free to park in any available space upon arrival."},{"q":"Are children allowed?","a":"Children are welcome at the ceremony (5 PM – 6 PM), but the reception is adults-only. We appreciate your understanding and hope you can arrange childcare for the evening."},{"q":"What is the dress code?","a":"Black tie / formal. We'd love for everyone to dress up and celebrate with us in style!"},{"q":"When is the RSVP deadline?","a":"Please RSVP by December 18, 2026 so we can give our vendors accurate counts."}]"#,
    ),
    // Registry
    ("registry1_name", ""),
    ("registry1_link", "#"),
    ("registry2_name", ""),
    ("registry2_link", "#"),
    ("registry3_name", ""),
    ("registry3_link", "#"),
    // RSVP
    ("rsvp_deadline", "December 18, 2026"),
    ("meals", "Chicken,Fish,Vegetarian"),
    ("collect_dietary", "false"),
    ("song_requests", "true"),
    ("coordinator_email", ""),
    ("coordinator_phone", ""),
    // Photos (base64 data URLs)
    ("gallery_0", ""),
    ("gallery_1", ""),
    ("gallery_2", ""),
    ("gallery_3", ""),
    ("gallery_4", ""),
    ("gallery_5", ""),
    ("gallery_6", ""),
    ("gallery_7", ""),
    ("gallery_8", ""),
    ("gallery_9", ""),
    ("hero_photo", ""),
];

/// Looks up the built-in value for a key.
pub fn default_value(key: &str) -> Option<&'static str> {
    DEFAULT_SETTINGS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
}

/// Owned copy of the defaults, as handed to the repository for seeding.
pub fn default_entries() -> Vec<(String, String)> {
    DEFAULT_SETTINGS
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Overlays persisted rows on top of the defaults.
///
/// Persisted keys unknown to the defaults are kept. The result always holds
/// every default key.
pub fn merge_with_defaults<I>(persisted: I) -> Settings
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut merged: BTreeMap<String, String> = DEFAULT_SETTINGS
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    merged.extend(persisted);
    Settings::from(merged)
}
