use std::sync::Arc;

use crate::database::{Database, Show, ShowFields};
use crate::error::{BookingError, BookingResult, EntityKind};
use crate::services::distinct_ids;
use crate::services::validate;
use crate::services::views::ShowListingRow;

pub struct ShowService {
    db: Arc<Database>,
}

impl ShowService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Every show in storage order with its venue and artist joined in.
    pub async fn list(&self) -> BookingResult<Vec<ShowListingRow>> {
        let shows = self.db.list_shows().await?;

        let venues = self
            .db
            .venues_by_ids(&distinct_ids(shows.iter().map(|s| s.venue_id)))
            .await?;
        let artists = self
            .db
            .artists_by_ids(&distinct_ids(shows.iter().map(|s| s.artist_id)))
            .await?;

        shows
            .into_iter()
            .map(|show| {
                let venue = venues
                    .get(&show.venue_id)
                    .ok_or_else(|| BookingError::not_found(EntityKind::Venue, show.venue_id))?;
                let artist = artists
                    .get(&show.artist_id)
                    .ok_or_else(|| BookingError::not_found(EntityKind::Artist, show.artist_id))?;

                Ok(ShowListingRow {
                    venue_id: venue.id,
                    venue_name: venue.name.clone(),
                    artist_id: artist.id,
                    artist_name: artist.name.clone(),
                    artist_image_link: artist.image_link.clone(),
                    start_time: show.start_time,
                })
            })
            .collect()
    }

    pub async fn create(&self, fields: ShowFields) -> BookingResult<Show> {
        let fields = validate::show_fields(fields)?;
        self.db.insert_show(fields).await
    }
}
