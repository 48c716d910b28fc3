use url::Url;

use crate::database::{ArtistFields, ShowFields, VenueFields};
use crate::error::{BookingError, BookingResult};

fn required(field: &'static str, value: String) -> BookingResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(BookingError::validation(field, "must not be blank"));
    }
    Ok(trimmed.to_string())
}

/// Blank optional text is stored as absent.
fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn optional_link(field: &'static str, value: Option<String>) -> BookingResult<Option<String>> {
    match optional(value) {
        Some(link) => {
            Url::parse(&link)
                .map_err(|e| BookingError::validation(field, format!("not a valid URL ({})", e)))?;
            Ok(Some(link))
        }
        None => Ok(None),
    }
}

fn positive_id(field: &'static str, id: i64) -> BookingResult<i64> {
    if id <= 0 {
        return Err(BookingError::validation(field, "must be a positive id"));
    }
    Ok(id)
}

pub fn venue_fields(fields: VenueFields) -> BookingResult<VenueFields> {
    Ok(VenueFields {
        name: required("name", fields.name)?,
        city: required("city", fields.city)?,
        state: required("state", fields.state)?,
        address: required("address", fields.address)?,
        phone: required("phone", fields.phone)?,
        image_link: optional_link("image_link", fields.image_link)?,
        facebook_link: optional_link("facebook_link", fields.facebook_link)?,
    })
}

pub fn artist_fields(fields: ArtistFields) -> BookingResult<ArtistFields> {
    let genres = fields
        .genres
        .into_iter()
        .map(|genre| required("genres", genre))
        .collect::<BookingResult<Vec<_>>>()?;

    Ok(ArtistFields {
        name: required("name", fields.name)?,
        city: required("city", fields.city)?,
        state: required("state", fields.state)?,
        phone: optional(fields.phone),
        website: optional_link("website", fields.website)?,
        facebook_link: optional_link("facebook_link", fields.facebook_link)?,
        image_link: optional_link("image_link", fields.image_link)?,
        seeking_venue: fields.seeking_venue,
        seeking_description: optional(fields.seeking_description),
        genres,
    })
}

pub fn show_fields(fields: ShowFields) -> BookingResult<ShowFields> {
    Ok(ShowFields {
        artist_id: positive_id("artist_id", fields.artist_id)?,
        venue_id: positive_id("venue_id", fields.venue_id)?,
        start_time: fields.start_time,
    })
}
