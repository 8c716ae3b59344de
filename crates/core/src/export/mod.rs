//! CSV rendering of the guest list.

use chrono::{Local, NaiveDateTime, TimeZone, Utc};
use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::constants::EXPORT_HEADER;
use crate::errors::{Error, Result};
use crate::rsvps::Rsvp;

/// Renders RSVPs as CSV, every field quoted. Row order is preserved.
pub fn rsvps_to_csv(rsvps: &[Rsvp]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(EXPORT_HEADER)?;
    for rsvp in rsvps {
        writer.write_record([
            rsvp.id.to_string(),
            rsvp.fname.clone(),
            rsvp.lname.clone(),
            rsvp.email.clone().unwrap_or_default(),
            rsvp.guests.to_string(),
            rsvp.meal.clone().unwrap_or_default(),
            rsvp.song.clone().unwrap_or_default(),
            rsvp.message.clone().unwrap_or_default(),
            format_display_timestamp(rsvp.created_at),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| Error::Export(e.to_string()))
}

/// Stored UTC timestamp in server-local `M/D/YYYY, h:MM:SS AM` form.
pub fn format_display_timestamp(created_at: NaiveDateTime) -> String {
    Utc.from_utc_datetime(&created_at)
        .with_timezone(&Local)
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
}
