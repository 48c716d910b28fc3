use async_graphql::{Context, Object, SimpleObject};
use chrono::{DateTime, Utc};

use crate::database::Venue as VenueRecord;
use crate::http_server::graphql::context::get_db;
use crate::http_server::graphql::results::SearchResults;
use crate::http_server::graphql_error::GraphqlResult;
use crate::services::venue::VenueService;
use crate::services::views::{LocationGroup, VenueDetailView, VenueShow};

#[derive(SimpleObject)]
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

impl From<VenueRecord> for Venue {
    fn from(venue: VenueRecord) -> Self {
        Self {
            id: venue.id,
            name: venue.name,
            city: venue.city,
            state: venue.state,
            address: venue.address,
            phone: venue.phone,
            image_link: venue.image_link,
            facebook_link: venue.facebook_link,
        }
    }
}

#[derive(SimpleObject)]
pub struct VenueShowEntry {
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

impl From<VenueShow> for VenueShowEntry {
    fn from(show: VenueShow) -> Self {
        Self {
            artist_id: show.artist_id,
            artist_name: show.artist_name,
            artist_image_link: show.artist_image_link,
            start_time: show.start_time,
        }
    }
}

#[derive(SimpleObject)]
pub struct VenueDetail {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub past_shows: Vec<VenueShowEntry>,
    pub upcoming_shows: Vec<VenueShowEntry>,
    pub past_shows_count: i64,
    pub upcoming_shows_count: i64,
}

impl From<VenueDetailView> for VenueDetail {
    fn from(view: VenueDetailView) -> Self {
        Self {
            id: view.id,
            name: view.name,
            address: view.address,
            city: view.city,
            state: view.state,
            phone: view.phone,
            image_link: view.image_link,
            facebook_link: view.facebook_link,
            past_shows: view.past_shows.into_iter().map(Into::into).collect(),
            upcoming_shows: view.upcoming_shows.into_iter().map(Into::into).collect(),
            past_shows_count: view.past_shows_count as i64,
            upcoming_shows_count: view.upcoming_shows_count as i64,
        }
    }
}

#[derive(SimpleObject)]
pub struct VenueSummary {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: i64,
}

#[derive(SimpleObject)]
pub struct VenueLocation {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

impl From<LocationGroup> for VenueLocation {
    fn from(group: LocationGroup) -> Self {
        Self {
            city: group.city,
            state: group.state,
            venues: group
                .venues
                .into_iter()
                .map(|v| VenueSummary {
                    id: v.id,
                    name: v.name,
                    num_upcoming_shows: v.num_upcoming_shows as i64,
                })
                .collect(),
        }
    }
}

#[derive(Default)]
pub struct VenueQuery;

#[Object]
impl VenueQuery {
    async fn venue(&self, ctx: &Context<'_>, id: i64) -> GraphqlResult<VenueDetail> {
        let db = get_db(ctx)?;
        let service = VenueService::new(db.clone());
        Ok(service.detail(id).await?.into())
    }

    /// All venues grouped by city and state.
    async fn venues(&self, ctx: &Context<'_>) -> GraphqlResult<Vec<VenueLocation>> {
        let db = get_db(ctx)?;
        let service = VenueService::new(db.clone());
        let groups = service.list_grouped_by_location().await?;
        Ok(groups.into_iter().map(Into::into).collect())
    }

    async fn search_venues(&self, ctx: &Context<'_>, term: String) -> GraphqlResult<SearchResults> {
        let db = get_db(ctx)?;
        let service = VenueService::new(db.clone());
        Ok(service.search(&term).await?.into())
    }

    /// Stored fields of a venue, for prefilling its edit form.
    async fn venue_for_edit(&self, ctx: &Context<'_>, id: i64) -> GraphqlResult<Venue> {
        let db = get_db(ctx)?;
        let service = VenueService::new(db.clone());
        Ok(service.get(id).await?.into())
    }
}
