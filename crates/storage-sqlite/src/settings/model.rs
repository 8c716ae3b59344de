//! Database model for site settings.

use diesel::prelude::*;

/// One key/value row of the settings table
#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::settings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SettingDB {
    pub key: String,
    pub value: String,
}

impl From<(String, String)> for SettingDB {
    fn from((key, value): (String, String)) -> Self {
        SettingDB { key, value }
    }
}
