use async_graphql::{Context, Object, SimpleObject};
use chrono::{DateTime, Utc};

use crate::database::Artist as ArtistRecord;
use crate::http_server::graphql::context::get_db;
use crate::http_server::graphql::results::SearchResults;
use crate::http_server::graphql_error::GraphqlResult;
use crate::services::artist::ArtistService;
use crate::services::views::{ArtistDetailView, ArtistShow};

#[derive(SimpleObject)]
pub struct Artist {
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
}

impl From<ArtistRecord> for Artist {
    fn from(artist: ArtistRecord) -> Self {
        Self {
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
        }
    }
}

#[derive(SimpleObject)]
pub struct ArtistShowEntry {
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

impl From<ArtistShow> for ArtistShowEntry {
    fn from(show: ArtistShow) -> Self {
        Self {
            venue_id: show.venue_id,
            venue_name: show.venue_name,
            venue_image_link: show.venue_image_link,
            start_time: show.start_time,
        }
    }
}

#[derive(SimpleObject)]
pub struct ArtistDetail {
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
    pub past_shows: Vec<ArtistShowEntry>,
    pub upcoming_shows: Vec<ArtistShowEntry>,
    pub past_shows_count: i64,
    pub upcoming_shows_count: i64,
}

impl From<ArtistDetailView> for ArtistDetail {
    fn from(view: ArtistDetailView) -> Self {
        Self {
            id: view.id,
            name: view.name,
            city: view.city,
            state: view.state,
            phone: view.phone,
            website: view.website,
            genres: view.genres,
            facebook_link: view.facebook_link,
            image_link: view.image_link,
            seeking_venue: view.seeking_venue,
            seeking_description: view.seeking_description,
            past_shows: view.past_shows.into_iter().map(Into::into).collect(),
            upcoming_shows: view.upcoming_shows.into_iter().map(Into::into).collect(),
            past_shows_count: view.past_shows_count as i64,
            upcoming_shows_count: view.upcoming_shows_count as i64,
        }
    }
}

#[derive(SimpleObject)]
pub struct ArtistSummary {
    pub id: i64,
    pub name: String,
}

#[derive(Default)]
pub struct ArtistQuery;

#[Object]
impl ArtistQuery {
    async fn artist(&self, ctx: &Context<'_>, id: i64) -> GraphqlResult<ArtistDetail> {
        let db = get_db(ctx)?;
        let service = ArtistService::new(db.clone());
        Ok(service.detail(id).await?.into())
    }

    async fn artists(&self, ctx: &Context<'_>) -> GraphqlResult<Vec<ArtistSummary>> {
        let db = get_db(ctx)?;
        let service = ArtistService::new(db.clone());
        let artists = service.list().await?;

        Ok(artists
            .into_iter()
            .map(|a| ArtistSummary {
                id: a.id,
                name: a.name,
            })
            .collect())
    }

    async fn search_artists(
        &self,
        ctx: &Context<'_>,
        term: String,
    ) -> GraphqlResult<SearchResults> {
        let db = get_db(ctx)?;
        let service = ArtistService::new(db.clone());
        Ok(service.search(&term).await?.into())
    }

    async fn artist_for_edit(&self, ctx: &Context<'_>, id: i64) -> GraphqlResult<Artist> {
        let db = get_db(ctx)?;
        let service = ArtistService::new(db.clone());
        Ok(service.get(id).await?.into())
    }
}
