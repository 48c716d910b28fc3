//! Display records assembled by the services. Each one is built once per request
//! from typed rows, never from loosely keyed maps.

use chrono::{DateTime, Utc};

/// A show as listed on a venue page: the performing artist joined in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueShow {
    pub start_time: DateTime<Utc>,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
}

/// A show as listed on an artist page: the hosting venue joined in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistShow {
    pub start_time: DateTime<Utc>,
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueDetailView {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows: Vec<VenueShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistDetailView {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub genres: Vec<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub past_shows: Vec<ArtistShow>,
    pub upcoming_shows: Vec<ArtistShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowListingRow {
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueSummary {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: usize,
}

/// Venues sharing a city and state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationGroup {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistSummary {
    pub id: i64,
    pub name: String,
}
