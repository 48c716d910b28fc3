use async_graphql::{Context, InputObject, Object};
use chrono::{DateTime, Utc};

use crate::database::ShowFields;
use crate::error::{EntityKind, Notice};
use crate::http_server::graphql::context::get_db;
use crate::http_server::graphql::results::WriteResult;
use crate::http_server::graphql_error::GraphqlResult;
use crate::services::show::ShowService;

#[derive(InputObject)]
pub struct ShowInput {
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: DateTime<Utc>,
}

#[derive(Default)]
pub struct ShowMutation;

#[Object]
impl ShowMutation {
    async fn create_show(&self, ctx: &Context<'_>, input: ShowInput) -> GraphqlResult<WriteResult> {
        let db = get_db(ctx)?;
        let service = ShowService::new(db.clone());

        let fields = ShowFields {
            artist_id: input.artist_id,
            venue_id: input.venue_id,
            start_time: input.start_time,
        };
        let notice = match service.create(fields).await {
            Ok(show) => Notice::listed(EntityKind::Show, None, show.id),
            Err(e) => Notice::failed(EntityKind::Show, None, &e),
        };
        Ok(notice.into())
    }
}
