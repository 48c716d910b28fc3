use async_graphql::{Context, Object, SimpleObject};
use chrono::{DateTime, Utc};

use crate::http_server::graphql::context::get_db;
use crate::http_server::graphql_error::GraphqlResult;
use crate::services::show::ShowService;

#[derive(SimpleObject)]
pub struct ShowListing {
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

#[derive(Default)]
pub struct ShowQuery;

#[Object]
impl ShowQuery {
    /// Every show, past and upcoming, in the order they were booked.
    async fn shows(&self, ctx: &Context<'_>) -> GraphqlResult<Vec<ShowListing>> {
        let db = get_db(ctx)?;
        let service = ShowService::new(db.clone());
        let rows = service.list().await?;

        Ok(rows
            .into_iter()
            .map(|row| ShowListing {
                venue_id: row.venue_id,
                venue_name: row.venue_name,
                artist_id: row.artist_id,
                artist_name: row.artist_name,
                artist_image_link: row.artist_image_link,
                start_time: row.start_time,
            })
            .collect())
    }
}
