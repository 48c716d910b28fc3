use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectOptions, ConnectionTrait, Database as SeaDatabase,
};

use crate::database::{ArtistFields, Database, VenueFields};
use crate::entities;

pub async fn test_db() -> Arc<Database> {
    // A single connection keeps every query on the same in-memory database
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);

    let conn = SeaDatabase::connect(opt).await.unwrap();
    let db = Database::prepare(conn)
        .await
        .unwrap_or_else(|e| panic!("Failed to prepare test database: {:?}", e));

    Arc::new(db)
}

pub fn sample_venue(name: &str) -> VenueFields {
    VenueFields {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        address: "1015 Folsom Street".to_string(),
        phone: "123-123-1234".to_string(),
        image_link: Some("https://images.example.com/venue.jpg".to_string()),
        facebook_link: Some("https://www.facebook.com/TheMusicalHop".to_string()),
    }
}

pub fn sample_artist(name: &str) -> ArtistFields {
    ArtistFields {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: Some("326-123-5000".to_string()),
        website: None,
        facebook_link: None,
        image_link: Some("https://images.example.com/artist.jpg".to_string()),
        seeking_venue: false,
        seeking_description: None,
        genres: vec!["Rock n Roll".to_string()],
    }
}

/// Whole-second reference instant, so stored timestamps compare exactly.
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 20, 0, 0).unwrap()
}

/// Store a show whose artist or venue may not exist, bypassing the owner checks.
pub async fn insert_dangling_show(
    db: &Database,
    artist_id: i64,
    venue_id: i64,
    start_time: DateTime<Utc>,
) -> i64 {
    db.conn
        .execute_unprepared("PRAGMA foreign_keys = OFF")
        .await
        .unwrap();

    let show = entities::show::ActiveModel {
        start_time: ActiveValue::Set(start_time),
        artist_id: ActiveValue::Set(artist_id),
        venue_id: ActiveValue::Set(venue_id),
        ..Default::default()
    }
    .insert(&db.conn)
    .await
    .unwrap();

    db.conn
        .execute_unprepared("PRAGMA foreign_keys = ON")
        .await
        .unwrap();

    show.id
}
