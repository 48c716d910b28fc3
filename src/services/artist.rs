use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::database::{Artist, ArtistFields, Database, Show, Venue};
use crate::error::{BookingError, BookingResult, EntityKind};
use crate::services::distinct_ids;
use crate::services::partition::{PartitionedShows, partition};
use crate::services::search::{CaseSensitivity, SearchHit, SearchKind, SearchResult};
use crate::services::validate;
use crate::services::views::{ArtistDetailView, ArtistShow, ArtistSummary};

pub struct ArtistService {
    db: Arc<Database>,
}

fn artist_show(show: &Show, venues: &HashMap<i64, Venue>) -> BookingResult<ArtistShow> {
    let venue = venues
        .get(&show.venue_id)
        .ok_or_else(|| BookingError::not_found(EntityKind::Venue, show.venue_id))?;

    Ok(ArtistShow {
        start_time: show.start_time,
        venue_id: venue.id,
        venue_name: venue.name.clone(),
        venue_image_link: venue.image_link.clone(),
    })
}

impl ArtistService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub async fn get(&self, artist_id: i64) -> BookingResult<Artist> {
        self.db.get_artist(artist_id).await
    }

    pub async fn list(&self) -> BookingResult<Vec<ArtistSummary>> {
        let artists = self.db.list_artists().await?;
        Ok(artists
            .into_iter()
            .map(|a| ArtistSummary {
                id: a.id,
                name: a.name,
            })
            .collect())
    }

    pub async fn detail(&self, artist_id: i64) -> BookingResult<ArtistDetailView> {
        self.detail_at(artist_id, Utc::now()).await
    }

    /// Artist page with their shows split around `now`.
    pub async fn detail_at(
        &self,
        artist_id: i64,
        now: DateTime<Utc>,
    ) -> BookingResult<ArtistDetailView> {
        log::debug!("Building detail for artist {}", artist_id);

        let artist = self.db.get_artist(artist_id).await?;
        let shows = self.db.shows_for_artist(artist_id).await?;
        let venues = self
            .db
            .venues_by_ids(&distinct_ids(shows.iter().map(|s| s.venue_id)))
            .await?;

        let PartitionedShows { past, upcoming } = partition(shows, now);
        let past_shows = past
            .iter()
            .map(|show| artist_show(show, &venues))
            .collect::<BookingResult<Vec<_>>>()?;
        let upcoming_shows = upcoming
            .iter()
            .map(|show| artist_show(show, &venues))
            .collect::<BookingResult<Vec<_>>>()?;

        Ok(ArtistDetailView {
            id: artist.id,
            name: artist.name,
            city: artist.city,
            state: artist.state,
            phone: artist.phone,
            website: artist.website,
            genres: artist.genres,
            facebook_link: artist.facebook_link,
            image_link: artist.image_link,
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        })
    }

    /// Case-insensitive substring search over artist names.
    pub async fn search(&self, term: &str) -> BookingResult<SearchResult> {
        let artists = self
            .db
            .search_artists(term, CaseSensitivity::for_kind(SearchKind::Artist))
            .await?;
        let result = SearchResult::from_hits(artists.into_iter().map(|a| SearchHit {
            id: a.id,
            name: a.name,
        }));

        log::debug!("Artist search '{}' matched {}", term, result.count);
        Ok(result)
    }

    pub async fn create(&self, fields: ArtistFields) -> BookingResult<Artist> {
        let fields = validate::artist_fields(fields)?;
        self.db.insert_artist(fields).await
    }

    pub async fn edit(&self, artist_id: i64, fields: ArtistFields) -> BookingResult<Artist> {
        let fields = validate::artist_fields(fields)?;
        self.db.update_artist(artist_id, fields).await
    }

    /// Remove an artist and every show they play.
    pub async fn delete(&self, artist_id: i64) -> BookingResult<u64> {
        self.db.delete_artist(artist_id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::database::ShowFields;
    use crate::test_utils::{
        insert_dangling_show, reference_now, sample_artist, sample_venue, test_db,
    };

    #[tokio::test]
    async fn test_detail_joins_venues() {
        let db = test_db().await;
        let service = ArtistService::new(db.clone());
        let now = reference_now();

        let mut fields = sample_artist("The Wild Sax Band");
        fields.genres = vec!["Jazz".to_string(), "Classical".to_string()];
        let artist = service.create(fields).await.unwrap();
        let hop = db.insert_venue(sample_venue("The Musical Hop")).await.unwrap();
        let mut park = sample_venue("Park Square Live Music & Coffee");
        park.image_link = None;
        let park = db.insert_venue(park).await.unwrap();

        for (venue_id, days) in [(park.id, 14), (hop.id, -3), (park.id, 7)] {
            db.insert_show(ShowFields {
                artist_id: artist.id,
                venue_id,
                start_time: now + Duration::days(days),
            })
            .await
            .unwrap();
        }

        let detail = service.detail_at(artist.id, now).await.unwrap();
        assert_eq!(detail.genres, vec!["Jazz", "Classical"]);
        assert_eq!(detail.past_shows_count, 1);
        assert_eq!(detail.past_shows[0].venue_name, "The Musical Hop");
        assert_eq!(detail.upcoming_shows_count, 2);
        // Upcoming shows are listed earliest first
        assert!(detail.upcoming_shows[0].start_time < detail.upcoming_shows[1].start_time);
        assert!(
            detail
                .upcoming_shows
                .iter()
                .all(|s| s.venue_id == park.id && s.venue_image_link.is_none())
        );
    }

    #[tokio::test]
    async fn test_detail_unknown_artist_is_not_found() {
        let db = test_db().await;
        let service = ArtistService::new(db);

        let err = service.detail(5).await.unwrap_err();
        assert!(matches!(
            err,
            BookingError::NotFound {
                kind: EntityKind::Artist,
                id: 5
            }
        ));
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_for_artists() {
        let db = test_db().await;
        let service = ArtistService::new(db);

        let sax = service.create(sample_artist("The Wild Sax Band")).await.unwrap();
        service.create(sample_artist("Guns N Petals")).await.unwrap();

        let result = service.search("sax").await.unwrap();
        assert_eq!(result.count, 1);
        assert_eq!(result.results[0].id, sax.id);
        assert_eq!(result.results[0].name, "The Wild Sax Band");

        assert_eq!(service.search("SAX").await.unwrap().count, 1);
        assert_eq!(service.search("").await.unwrap().count, 2);
    }

    #[tokio::test]
    async fn test_list_in_storage_order() {
        let db = test_db().await;
        let service = ArtistService::new(db);

        service.create(sample_artist("Guns N Petals")).await.unwrap();
        service.create(sample_artist("Matt Quevedo")).await.unwrap();

        let names: Vec<_> = service
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, vec!["Guns N Petals", "Matt Quevedo"]);
    }

    #[tokio::test]
    async fn test_edit_replaces_genres() {
        let db = test_db().await;
        let service = ArtistService::new(db);

        let artist = service.create(sample_artist("Guns N Petals")).await.unwrap();

        let mut fields = sample_artist("Guns N Petals");
        fields.genres = vec!["Funk".to_string()];
        fields.seeking_venue = true;
        fields.seeking_description = Some("Looking for shows in the Bay Area".to_string());
        service.edit(artist.id, fields).await.unwrap();

        let stored = service.get(artist.id).await.unwrap();
        assert_eq!(stored.genres, vec!["Funk"]);
        assert!(stored.seeking_venue);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_state() {
        let db = test_db().await;
        let service = ArtistService::new(db.clone());

        let mut fields = sample_artist("Guns N Petals");
        fields.state = "  ".to_string();

        assert!(matches!(
            service.create(fields).await.unwrap_err(),
            BookingError::Validation { field: "state", .. }
        ));
        assert!(db.list_artists().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_artist_is_not_found() {
        let db = test_db().await;
        let service = ArtistService::new(db);

        assert!(service.delete(9).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_detail_with_missing_venue_is_not_found() {
        let db = test_db().await;
        let service = ArtistService::new(db.clone());
        let now = reference_now();

        let artist = service.create(sample_artist("Matt Quevedo")).await.unwrap();
        insert_dangling_show(&db, artist.id, 77, now - Duration::days(30)).await;

        let err = service.detail_at(artist.id, now).await.unwrap_err();
        assert!(matches!(
            err,
            BookingError::NotFound {
                kind: EntityKind::Venue,
                id: 77
            }
        ));
    }
}
