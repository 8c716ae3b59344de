//! Database models for RSVPs.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use weddingsite_core::rsvps::{NewRsvp, Rsvp};

/// Database model for a stored RSVP
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::rsvps)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RsvpDB {
    pub id: i32,
    pub fname: String,
    pub lname: String,
    pub email: Option<String>,
    pub guests: i32,
    pub meal: Option<String>,
    pub song: Option<String>,
    pub message: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Database model for inserting an RSVP; the id is assigned by SQLite.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::rsvps)]
pub struct NewRsvpDB {
    pub fname: String,
    pub lname: String,
    pub email: Option<String>,
    pub guests: i32,
    pub meal: Option<String>,
    pub song: Option<String>,
    pub message: Option<String>,
    pub created_at: NaiveDateTime,
}

impl NewRsvpDB {
    pub fn new(new_rsvp: NewRsvp, created_at: NaiveDateTime) -> Self {
        NewRsvpDB {
            fname: new_rsvp.fname,
            lname: new_rsvp.lname,
            email: new_rsvp.email,
            guests: new_rsvp.guests,
            meal: new_rsvp.meal,
            song: new_rsvp.song,
            message: new_rsvp.message,
            created_at,
        }
    }
}

impl From<RsvpDB> for Rsvp {
    fn from(db: RsvpDB) -> Self {
        Rsvp {
            id: db.id,
            fname: db.fname,
            lname: db.lname,
            email: db.email,
            guests: db.guests,
            meal: db.meal,
            song: db.song,
            message: db.message,
            created_at: db.created_at,
        }
    }
}
