use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Utc};
use color_eyre::{Result, eyre::Context};
use migration::MigratorTrait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectOptions, ConnectionTrait,
    Database as SeaDatabase, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    TransactionError, TransactionTrait,
};

use crate::entities;
use crate::error::{BookingError, BookingResult, EntityKind};
use crate::services::search::{CaseSensitivity, name_contains};

pub struct Database {
    pub(crate) conn: DatabaseConnection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Show {
    pub id: i64,
    pub start_time: DateTime<Utc>,
    pub artist_id: i64,
    pub venue_id: i64,
}

/// Editable venue fields. An edit replaces all of them.
#[derive(Debug, Clone, Default)]
pub struct VenueFields {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
}

/// Editable artist fields. An edit replaces all of them.
#[derive(Debug, Clone, Default)]
pub struct ArtistFields {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub genres: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ShowFields {
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: DateTime<Utc>,
}

impl From<entities::venue::Model> for Venue {
    fn from(model: entities::venue::Model) -> Self {
        Venue {
            id: model.id,
            name: model.name,
            city: model.city,
            state: model.state,
            address: model.address,
            phone: model.phone,
            image_link: model.image_link,
            facebook_link: model.facebook_link,
        }
    }
}

impl From<entities::show::Model> for Show {
    fn from(model: entities::show::Model) -> Self {
        Show {
            id: model.id,
            start_time: model.start_time,
            artist_id: model.artist_id,
            venue_id: model.venue_id,
        }
    }
}

impl TryFrom<entities::artist::Model> for Artist {
    type Error = DbErr;

    fn try_from(model: entities::artist::Model) -> Result<Self, Self::Error> {
        let genres: Vec<String> = serde_json::from_str(&model.genres).map_err(|e| {
            DbErr::Json(format!("Artist {} has malformed genres: {}", model.id, e))
        })?;

        Ok(Artist {
            id: model.id,
            name: model.name,
            city: model.city,
            state: model.state,
            phone: model.phone,
            website: model.website,
            facebook_link: model.facebook_link,
            image_link: model.image_link,
            seeking_venue: model.seeking_venue,
            seeking_description: model.seeking_description,
            genres,
        })
    }
}

fn encode_genres(genres: &[String]) -> Result<String, BookingError> {
    serde_json::to_string(genres).map_err(|e| BookingError::validation("genres", e.to_string()))
}

/// Collapse a failed transaction into the error the caller should see.
fn settle<T>(
    kind: EntityKind,
    result: Result<T, TransactionError<BookingError>>,
) -> BookingResult<T> {
    result.map_err(|err| match err {
        TransactionError::Connection(e) => BookingError::write(kind, e),
        TransactionError::Transaction(e) => e,
    })
}

impl Database {
    /// Open or create a database at the given path
    pub async fn open(path: &Path) -> Result<Self> {
        log::debug!("Opening database at: {}", path.display());

        // Create parent directories if they don't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context(format!(
                "Failed to create database directory: {}",
                parent.display()
            ))?;
        }

        let url = format!("sqlite://{}?mode=rwc", path.display());

        let mut opt = ConnectOptions::new(url);
        opt.max_connections(16)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(8))
            .acquire_timeout(Duration::from_secs(8))
            .idle_timeout(Duration::from_secs(60))
            .sqlx_logging(false);

        let conn = SeaDatabase::connect(opt)
            .await
            .context(format!("Failed to open database: {}", path.display()))?;

        Self::prepare(conn).await
    }

    /// Enable foreign keys and bring the schema up to date.
    pub(crate) async fn prepare(conn: DatabaseConnection) -> Result<Self> {
        conn.execute_unprepared("PRAGMA foreign_keys = ON")
            .await
            .context("Failed to enable foreign keys")?;

        log::debug!("Running database migrations");
        migration::Migrator::up(&conn, None)
            .await
            .context("Failed to run database migrations")?;

        log::info!("Database ready");
        Ok(Database { conn })
    }

    // ========== Lookups ==========

    pub async fn get_venue(&self, id: i64) -> BookingResult<Venue> {
        let venue = entities::venue::Entity::find_by_id(id)
            .one(&self.conn)
            .await?
            .ok_or_else(|| BookingError::not_found(EntityKind::Venue, id))?;

        Ok(venue.into())
    }

    pub async fn get_artist(&self, id: i64) -> BookingResult<Artist> {
        let artist = entities::artist::Entity::find_by_id(id)
            .one(&self.conn)
            .await?
            .ok_or_else(|| BookingError::not_found(EntityKind::Artist, id))?;

        Ok(Artist::try_from(artist)?)
    }

    pub async fn list_venues(&self) -> BookingResult<Vec<Venue>> {
        let venues = entities::venue::Entity::find()
            .order_by_asc(entities::venue::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(venues.into_iter().map(Venue::from).collect())
    }

    pub async fn list_artists(&self) -> BookingResult<Vec<Artist>> {
        let artists = entities::artist::Entity::find()
            .order_by_asc(entities::artist::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(artists
            .into_iter()
            .map(Artist::try_from)
            .collect::<Result<Vec<_>, _>>()?)
    }

    pub async fn list_shows(&self) -> BookingResult<Vec<Show>> {
        let shows = entities::show::Entity::find()
            .order_by_asc(entities::show::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(shows.into_iter().map(Show::from).collect())
    }

    /// Shows played at a venue, earliest first.
    pub async fn shows_for_venue(&self, venue_id: i64) -> BookingResult<Vec<Show>> {
        let shows = entities::show::Entity::find()
            .filter(entities::show::Column::VenueId.eq(venue_id))
            .order_by_asc(entities::show::Column::StartTime)
            .order_by_asc(entities::show::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(shows.into_iter().map(Show::from).collect())
    }

    /// Shows played by an artist, earliest first.
    pub async fn shows_for_artist(&self, artist_id: i64) -> BookingResult<Vec<Show>> {
        let shows = entities::show::Entity::find()
            .filter(entities::show::Column::ArtistId.eq(artist_id))
            .order_by_asc(entities::show::Column::StartTime)
            .order_by_asc(entities::show::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(shows.into_iter().map(Show::from).collect())
    }

    pub async fn venues_by_ids(&self, ids: &[i64]) -> BookingResult<HashMap<i64, Venue>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let venues = entities::venue::Entity::find()
            .filter(entities::venue::Column::Id.is_in(ids.iter().copied()))
            .all(&self.conn)
            .await?;

        Ok(venues.into_iter().map(|v| (v.id, Venue::from(v))).collect())
    }

    pub async fn artists_by_ids(&self, ids: &[i64]) -> BookingResult<HashMap<i64, Artist>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let artists = entities::artist::Entity::find()
            .filter(entities::artist::Column::Id.is_in(ids.iter().copied()))
            .all(&self.conn)
            .await?;

        let artists = artists
            .into_iter()
            .map(|a| {
                let id = a.id;
                Artist::try_from(a).map(|artist| (id, artist))
            })
            .collect::<Result<HashMap<_, _>, DbErr>>()?;

        Ok(artists)
    }

    /// Venues whose name contains `term`, in storage order.
    pub async fn search_venues(
        &self,
        term: &str,
        case: CaseSensitivity,
    ) -> BookingResult<Vec<Venue>> {
        let venues = entities::venue::Entity::find()
            .filter(name_contains(entities::venue::Column::Name, term, case))
            .order_by_asc(entities::venue::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(venues.into_iter().map(Venue::from).collect())
    }

    /// Artists whose name contains `term`, in storage order.
    pub async fn search_artists(
        &self,
        term: &str,
        case: CaseSensitivity,
    ) -> BookingResult<Vec<Artist>> {
        let artists = entities::artist::Entity::find()
            .filter(name_contains(entities::artist::Column::Name, term, case))
            .order_by_asc(entities::artist::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(artists
            .into_iter()
            .map(Artist::try_from)
            .collect::<Result<Vec<_>, _>>()?)
    }

    // ========== Writes ==========

    pub async fn insert_venue(&self, fields: VenueFields) -> BookingResult<Venue> {
        let venue = entities::venue::ActiveModel {
            name: ActiveValue::Set(fields.name),
            city: ActiveValue::Set(fields.city),
            state: ActiveValue::Set(fields.state),
            address: ActiveValue::Set(fields.address),
            phone: ActiveValue::Set(fields.phone),
            image_link: ActiveValue::Set(fields.image_link),
            facebook_link: ActiveValue::Set(fields.facebook_link),
            ..Default::default()
        };

        let result = self
            .conn
            .transaction::<_, entities::venue::Model, BookingError>(|txn| {
                Box::pin(async move {
                    venue
                        .insert(txn)
                        .await
                        .map_err(|e| BookingError::write(EntityKind::Venue, e))
                })
            })
            .await;
        let model = settle(EntityKind::Venue, result)?;

        log::info!("Venue created: '{}' (ID: {})", model.name, model.id);
        Ok(model.into())
    }

    pub async fn update_venue(&self, id: i64, fields: VenueFields) -> BookingResult<Venue> {
        let result = self
            .conn
            .transaction::<_, entities::venue::Model, BookingError>(|txn| {
                Box::pin(async move {
                    let existing = entities::venue::Entity::find_by_id(id)
                        .one(txn)
                        .await?
                        .ok_or_else(|| BookingError::not_found(EntityKind::Venue, id))?;

                    let mut venue: entities::venue::ActiveModel = existing.into();
                    venue.name = ActiveValue::Set(fields.name);
                    venue.city = ActiveValue::Set(fields.city);
                    venue.state = ActiveValue::Set(fields.state);
                    venue.address = ActiveValue::Set(fields.address);
                    venue.phone = ActiveValue::Set(fields.phone);
                    venue.image_link = ActiveValue::Set(fields.image_link);
                    venue.facebook_link = ActiveValue::Set(fields.facebook_link);

                    venue
                        .update(txn)
                        .await
                        .map_err(|e| BookingError::write(EntityKind::Venue, e))
                })
            })
            .await;
        let model = settle(EntityKind::Venue, result)?;

        log::info!("Venue updated: '{}' (ID: {})", model.name, model.id);
        Ok(model.into())
    }

    pub async fn insert_artist(&self, fields: ArtistFields) -> BookingResult<Artist> {
        let artist = entities::artist::ActiveModel {
            name: ActiveValue::Set(fields.name),
            city: ActiveValue::Set(fields.city),
            state: ActiveValue::Set(fields.state),
            phone: ActiveValue::Set(fields.phone),
            website: ActiveValue::Set(fields.website),
            facebook_link: ActiveValue::Set(fields.facebook_link),
            image_link: ActiveValue::Set(fields.image_link),
            seeking_venue: ActiveValue::Set(fields.seeking_venue),
            seeking_description: ActiveValue::Set(fields.seeking_description),
            genres: ActiveValue::Set(encode_genres(&fields.genres)?),
            ..Default::default()
        };

        let result = self
            .conn
            .transaction::<_, entities::artist::Model, BookingError>(|txn| {
                Box::pin(async move {
                    artist
                        .insert(txn)
                        .await
                        .map_err(|e| BookingError::write(EntityKind::Artist, e))
                })
            })
            .await;
        let model = settle(EntityKind::Artist, result)?;

        log::info!("Artist created: '{}' (ID: {})", model.name, model.id);
        Ok(Artist::try_from(model)?)
    }

    pub async fn update_artist(&self, id: i64, fields: ArtistFields) -> BookingResult<Artist> {
        let genres = encode_genres(&fields.genres)?;

        let result = self
            .conn
            .transaction::<_, entities::artist::Model, BookingError>(|txn| {
                Box::pin(async move {
                    let existing = entities::artist::Entity::find_by_id(id)
                        .one(txn)
                        .await?
                        .ok_or_else(|| BookingError::not_found(EntityKind::Artist, id))?;

                    let mut artist: entities::artist::ActiveModel = existing.into();
                    artist.name = ActiveValue::Set(fields.name);
                    artist.city = ActiveValue::Set(fields.city);
                    artist.state = ActiveValue::Set(fields.state);
                    artist.phone = ActiveValue::Set(fields.phone);
                    artist.website = ActiveValue::Set(fields.website);
                    artist.facebook_link = ActiveValue::Set(fields.facebook_link);
                    artist.image_link = ActiveValue::Set(fields.image_link);
                    artist.seeking_venue = ActiveValue::Set(fields.seeking_venue);
                    artist.seeking_description = ActiveValue::Set(fields.seeking_description);
                    artist.genres = ActiveValue::Set(genres);

                    artist
                        .update(txn)
                        .await
                        .map_err(|e| BookingError::write(EntityKind::Artist, e))
                })
            })
            .await;
        let model = settle(EntityKind::Artist, result)?;

        log::info!("Artist updated: '{}' (ID: {})", model.name, model.id);
        Ok(Artist::try_from(model)?)
    }

    /// Insert a show. Both owners must already exist; a dangling reference is a
    /// write failure and nothing is persisted.
    pub async fn insert_show(&self, fields: ShowFields) -> BookingResult<Show> {
        let result = self
            .conn
            .transaction::<_, entities::show::Model, BookingError>(|txn| {
                Box::pin(async move {
                    let venue = entities::venue::Entity::find_by_id(fields.venue_id)
                        .one(txn)
                        .await?;
                    if venue.is_none() {
                        return Err(BookingError::write(
                            EntityKind::Show,
                            DbErr::Custom(format!("Venue {} does not exist", fields.venue_id)),
                        ));
                    }

                    let artist = entities::artist::Entity::find_by_id(fields.artist_id)
                        .one(txn)
                        .await?;
                    if artist.is_none() {
                        return Err(BookingError::write(
                            EntityKind::Show,
                            DbErr::Custom(format!("Artist {} does not exist", fields.artist_id)),
                        ));
                    }

                    let show = entities::show::ActiveModel {
                        start_time: ActiveValue::Set(fields.start_time),
                        artist_id: ActiveValue::Set(fields.artist_id),
                        venue_id: ActiveValue::Set(fields.venue_id),
                        ..Default::default()
                    };

                    show.insert(txn)
                        .await
                        .map_err(|e| BookingError::write(EntityKind::Show, e))
                })
            })
            .await;
        let model = settle(EntityKind::Show, result)?;

        log::info!(
            "Show created: artist {} at venue {} on {} (ID: {})",
            model.artist_id,
            model.venue_id,
            model.start_time,
            model.id
        );
        Ok(model.into())
    }

    /// Delete a venue together with every show booked there.
    /// Returns the number of shows removed.
    pub async fn delete_venue(&self, id: i64) -> BookingResult<u64> {
        let result = self
            .conn
            .transaction::<_, u64, BookingError>(|txn| {
                Box::pin(async move {
                    entities::venue::Entity::find_by_id(id)
                        .one(txn)
                        .await?
                        .ok_or_else(|| BookingError::not_found(EntityKind::Venue, id))?;

                    let shows = entities::show::Entity::delete_many()
                        .filter(entities::show::Column::VenueId.eq(id))
                        .exec(txn)
                        .await
                        .map_err(|e| BookingError::write(EntityKind::Show, e))?;

                    entities::venue::Entity::delete_by_id(id)
                        .exec(txn)
                        .await
                        .map_err(|e| BookingError::write(EntityKind::Venue, e))?;

                    Ok(shows.rows_affected)
                })
            })
            .await;
        let removed = settle(EntityKind::Venue, result)?;

        log::info!("Venue deleted (ID: {}), removed {} shows", id, removed);
        Ok(removed)
    }

    /// Delete an artist together with every show they play.
    /// Returns the number of shows removed.
    pub async fn delete_artist(&self, id: i64) -> BookingResult<u64> {
        let result = self
            .conn
            .transaction::<_, u64, BookingError>(|txn| {
                Box::pin(async move {
                    entities::artist::Entity::find_by_id(id)
                        .one(txn)
                        .await?
                        .ok_or_else(|| BookingError::not_found(EntityKind::Artist, id))?;

                    let shows = entities::show::Entity::delete_many()
                        .filter(entities::show::Column::ArtistId.eq(id))
                        .exec(txn)
                        .await
                        .map_err(|e| BookingError::write(EntityKind::Show, e))?;

                    entities::artist::Entity::delete_by_id(id)
                        .exec(txn)
                        .await
                        .map_err(|e| BookingError::write(EntityKind::Artist, e))?;

                    Ok(shows.rows_affected)
                })
            })
            .await;
        let removed = settle(EntityKind::Artist, result)?;

        log::info!("Artist deleted (ID: {}), removed {} shows", id, removed);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;
    use crate::services::search::{CaseSensitivity, SearchKind};
    use crate::test_utils::{sample_artist, sample_venue, test_db};

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2035, 4, 1, hour, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_get_venue_not_found() {
        let db = test_db().await;

        let err = db.get_venue(42).await.unwrap_err();
        assert!(matches!(
            err,
            BookingError::NotFound {
                kind: EntityKind::Venue,
                id: 42
            }
        ));
    }

    #[tokio::test]
    async fn test_artist_genres_survive_storage() {
        let db = test_db().await;

        let mut fields = sample_artist("The Wild Sax Band");
        fields.genres = vec!["Jazz".to_string(), "Classical".to_string()];
        let created = db.insert_artist(fields).await.unwrap();

        let loaded = db.get_artist(created.id).await.unwrap();
        assert_eq!(loaded.genres, vec!["Jazz", "Classical"]);
    }

    #[tokio::test]
    async fn test_shows_for_venue_are_ordered_by_start_time() {
        let db = test_db().await;
        let venue = db.insert_venue(sample_venue("The Musical Hop")).await.unwrap();
        let artist = db.insert_artist(sample_artist("Guns N Petals")).await.unwrap();

        for hour in [21, 18, 20] {
            db.insert_show(ShowFields {
                artist_id: artist.id,
                venue_id: venue.id,
                start_time: at(hour),
            })
            .await
            .unwrap();
        }

        let shows = db.shows_for_venue(venue.id).await.unwrap();
        let hours: Vec<_> = shows.iter().map(|s| s.start_time).collect();
        assert_eq!(hours, vec![at(18), at(20), at(21)]);
    }

    #[tokio::test]
    async fn test_insert_show_with_missing_venue_persists_nothing() {
        let db = test_db().await;
        let artist = db.insert_artist(sample_artist("Guns N Petals")).await.unwrap();

        let err = db
            .insert_show(ShowFields {
                artist_id: artist.id,
                venue_id: 999,
                start_time: Utc::now(),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            BookingError::Write {
                kind: EntityKind::Show,
                ..
            }
        ));
        assert!(db.list_shows().await.unwrap().is_empty());
        assert!(db.list_venues().await.unwrap().is_empty());
        assert_eq!(db.list_artists().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_venue_replaces_fields() {
        let db = test_db().await;
        let venue = db.insert_venue(sample_venue("The Musical Hop")).await.unwrap();

        let mut fields = sample_venue("The Dueling Pianos Bar");
        fields.city = "New York".to_string();
        fields.state = "NY".to_string();
        fields.facebook_link = None;
        let updated = db.update_venue(venue.id, fields).await.unwrap();

        assert_eq!(updated.id, venue.id);
        assert_eq!(updated.name, "The Dueling Pianos Bar");
        assert_eq!(updated.city, "New York");
        assert!(updated.facebook_link.is_none());
        assert_eq!(db.get_venue(venue.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_missing_artist_is_not_found() {
        let db = test_db().await;

        let err = db
            .update_artist(7, sample_artist("Matt Quevedo"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_venue_cascades_to_shows() {
        let db = test_db().await;
        let hop = db.insert_venue(sample_venue("The Musical Hop")).await.unwrap();
        let park = db.insert_venue(sample_venue("Park Square")).await.unwrap();
        let artist = db.insert_artist(sample_artist("Guns N Petals")).await.unwrap();

        let now = Utc::now();
        for (venue_id, offset) in [(hop.id, -1), (hop.id, 1), (park.id, 2)] {
            db.insert_show(ShowFields {
                artist_id: artist.id,
                venue_id,
                start_time: now + Duration::days(offset),
            })
            .await
            .unwrap();
        }

        let removed = db.delete_venue(hop.id).await.unwrap();
        assert_eq!(removed, 2);

        let shows = db.list_shows().await.unwrap();
        assert_eq!(shows.len(), 1);
        assert!(shows.iter().all(|s| s.venue_id != hop.id));
        assert!(db.get_venue(hop.id).await.unwrap_err().is_not_found());
        // The artist is untouched
        assert!(db.get_artist(artist.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_artist_cascades_to_shows() {
        let db = test_db().await;
        let venue = db.insert_venue(sample_venue("The Musical Hop")).await.unwrap();
        let sax = db.insert_artist(sample_artist("The Wild Sax Band")).await.unwrap();
        let petals = db.insert_artist(sample_artist("Guns N Petals")).await.unwrap();

        for artist_id in [sax.id, sax.id, petals.id] {
            db.insert_show(ShowFields {
                artist_id,
                venue_id: venue.id,
                start_time: at(20),
            })
            .await
            .unwrap();
        }

        assert_eq!(db.delete_artist(sax.id).await.unwrap(), 2);
        let shows = db.list_shows().await.unwrap();
        assert_eq!(shows.len(), 1);
        assert_eq!(shows[0].artist_id, petals.id);
    }

    #[tokio::test]
    async fn test_delete_missing_venue_is_not_found() {
        let db = test_db().await;
        assert!(db.delete_venue(3).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_batch_lookup_skips_unknown_ids() {
        let db = test_db().await;
        let venue = db.insert_venue(sample_venue("The Musical Hop")).await.unwrap();

        let venues = db.venues_by_ids(&[venue.id, 404]).await.unwrap();
        assert_eq!(venues.len(), 1);
        assert_eq!(venues[&venue.id].name, "The Musical Hop");
        assert!(db.artists_by_ids(&[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_venues_matches_case_as_typed() {
        let db = test_db().await;
        let case = CaseSensitivity::for_kind(SearchKind::Venue);

        let hop = db.insert_venue(sample_venue("The Musical Hop")).await.unwrap();
        let park = db
            .insert_venue(sample_venue("Park Square Live Music & Coffee"))
            .await
            .unwrap();

        let ids: Vec<_> = db
            .search_venues("Music", case)
            .await
            .unwrap()
            .into_iter()
            .map(|v| v.id)
            .collect();
        assert_eq!(ids, vec![hop.id, park.id]);

        assert!(db.search_venues("music", case).await.unwrap().is_empty());
        assert_eq!(db.search_venues("", case).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_search_artists_ignores_case() {
        let db = test_db().await;
        let case = CaseSensitivity::for_kind(SearchKind::Artist);

        let sax = db.insert_artist(sample_artist("The Wild Sax Band")).await.unwrap();
        db.insert_artist(sample_artist("Guns N Petals")).await.unwrap();

        let found = db.search_artists("SAX", case).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, sax.id);
        assert_eq!(found[0].genres, vec!["Rock n Roll"]);
    }

    #[tokio::test]
    async fn test_search_treats_wildcards_literally() {
        let db = test_db().await;

        db.insert_artist(sample_artist("100% Jazz")).await.unwrap();
        db.insert_artist(sample_artist("Blues_Trio")).await.unwrap();
        db.insert_artist(sample_artist("Plain")).await.unwrap();
        db.insert_venue(sample_venue("50% Off Lounge")).await.unwrap();
        db.insert_venue(sample_venue("Corner Bar")).await.unwrap();

        let insensitive = CaseSensitivity::Insensitive;
        assert_eq!(db.search_artists("%", insensitive).await.unwrap().len(), 1);
        assert_eq!(db.search_artists("_", insensitive).await.unwrap().len(), 1);
        assert!(db.search_artists("z%z", insensitive).await.unwrap().is_empty());

        let sensitive = CaseSensitivity::Sensitive;
        let venues = db.search_venues("%", sensitive).await.unwrap();
        assert_eq!(venues.len(), 1);
        assert_eq!(venues[0].name, "50% Off Lounge");
    }
}
