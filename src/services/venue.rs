use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::database::{Artist, Database, Show, Venue, VenueFields};
use crate::error::{BookingError, BookingResult, EntityKind};
use crate::services::distinct_ids;
use crate::services::partition::{PartitionedShows, partition};
use crate::services::search::{CaseSensitivity, SearchHit, SearchKind, SearchResult};
use crate::services::validate;
use crate::services::views::{LocationGroup, VenueDetailView, VenueShow, VenueSummary};

pub struct VenueService {
    db: Arc<Database>,
}

fn venue_show(show: &Show, artists: &HashMap<i64, Artist>) -> BookingResult<VenueShow> {
    let artist = artists
        .get(&show.artist_id)
        .ok_or_else(|| BookingError::not_found(EntityKind::Artist, show.artist_id))?;

    Ok(VenueShow {
        start_time: show.start_time,
        artist_id: artist.id,
        artist_name: artist.name.clone(),
        artist_image_link: artist.image_link.clone(),
    })
}

impl VenueService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub async fn get(&self, venue_id: i64) -> BookingResult<Venue> {
        self.db.get_venue(venue_id).await
    }

    pub async fn detail(&self, venue_id: i64) -> BookingResult<VenueDetailView> {
        self.detail_at(venue_id, Utc::now()).await
    }

    /// Venue page with its shows split around `now`.
    pub async fn detail_at(
        &self,
        venue_id: i64,
        now: DateTime<Utc>,
    ) -> BookingResult<VenueDetailView> {
        log::debug!("Building detail for venue {}", venue_id);

        let venue = self.db.get_venue(venue_id).await?;
        let shows = self.db.shows_for_venue(venue_id).await?;
        let artists = self
            .db
            .artists_by_ids(&distinct_ids(shows.iter().map(|s| s.artist_id)))
            .await?;

        let PartitionedShows { past, upcoming } = partition(shows, now);
        let past_shows = past
            .iter()
            .map(|show| venue_show(show, &artists))
            .collect::<BookingResult<Vec<_>>>()?;
        let upcoming_shows = upcoming
            .iter()
            .map(|show| venue_show(show, &artists))
            .collect::<BookingResult<Vec<_>>>()?;

        Ok(VenueDetailView {
            id: venue.id,
            name: venue.name,
            address: venue.address,
            city: venue.city,
            state: venue.state,
            phone: venue.phone,
            image_link: venue.image_link,
            facebook_link: venue.facebook_link,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        })
    }

    pub async fn list_grouped_by_location(&self) -> BookingResult<Vec<LocationGroup>> {
        self.list_grouped_by_location_at(Utc::now()).await
    }

    /// Every venue grouped by (city, state), groups in order of first appearance.
    pub async fn list_grouped_by_location_at(
        &self,
        now: DateTime<Utc>,
    ) -> BookingResult<Vec<LocationGroup>> {
        let venues = self.db.list_venues().await?;

        let mut shows_by_venue: HashMap<i64, Vec<Show>> = HashMap::new();
        for show in self.db.list_shows().await? {
            shows_by_venue.entry(show.venue_id).or_default().push(show);
        }

        let mut groups: Vec<LocationGroup> = Vec::new();
        let mut slots: HashMap<(String, String), usize> = HashMap::new();

        for venue in venues {
            let shows = shows_by_venue.remove(&venue.id).unwrap_or_default();
            let num_upcoming_shows = partition(shows, now).upcoming.len();

            let slot = *slots
                .entry((venue.city.clone(), venue.state.clone()))
                .or_insert_with(|| {
                    groups.push(LocationGroup {
                        city: venue.city.clone(),
                        state: venue.state.clone(),
                        venues: Vec::new(),
                    });
                    groups.len() - 1
                });

            groups[slot].venues.push(VenueSummary {
                id: venue.id,
                name: venue.name,
                num_upcoming_shows,
            });
        }

        log::debug!("Grouped venues into {} locations", groups.len());
        Ok(groups)
    }

    /// Case-sensitive substring search over venue names.
    pub async fn search(&self, term: &str) -> BookingResult<SearchResult> {
        let venues = self
            .db
            .search_venues(term, CaseSensitivity::for_kind(SearchKind::Venue))
            .await?;
        let result = SearchResult::from_hits(venues.into_iter().map(|v| SearchHit {
            id: v.id,
            name: v.name,
        }));

        log::debug!("Venue search '{}' matched {}", term, result.count);
        Ok(result)
    }

    pub async fn create(&self, fields: VenueFields) -> BookingResult<Venue> {
        let fields = validate::venue_fields(fields)?;
        self.db.insert_venue(fields).await
    }

    pub async fn edit(&self, venue_id: i64, fields: VenueFields) -> BookingResult<Venue> {
        let fields = validate::venue_fields(fields)?;
        self.db.update_venue(venue_id, fields).await
    }

    /// Remove a venue and every show booked there.
    pub async fn delete(&self, venue_id: i64) -> BookingResult<u64> {
        self.db.delete_venue(venue_id).await
    }
}
