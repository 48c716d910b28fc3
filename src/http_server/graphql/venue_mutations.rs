use async_graphql::{Context, InputObject, Object};

use crate::database::VenueFields;
use crate::error::{EntityKind, Notice};
use crate::http_server::graphql::context::get_db;
use crate::http_server::graphql::results::WriteResult;
use crate::http_server::graphql_error::GraphqlResult;
use crate::services::venue::VenueService;

#[derive(InputObject)]
pub struct VenueInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
}

impl From<VenueInput> for VenueFields {
    fn from(input: VenueInput) -> Self {
        Self {
            name: input.name,
            city: input.city,
            state: input.state,
            address: input.address,
            phone: input.phone,
            image_link: input.image_link,
            facebook_link: input.facebook_link,
        }
    }
}

#[derive(Default)]
pub struct VenueMutation;

#[Object]
impl VenueMutation {
    async fn create_venue(&self, ctx: &Context<'_>, input: VenueInput) -> GraphqlResult<WriteResult> {
        let db = get_db(ctx)?;
        let service = VenueService::new(db.clone());

        let label = input.name.clone();
        let notice = match service.create(input.into()).await {
            Ok(venue) => Notice::listed(EntityKind::Venue, Some(&venue.name), venue.id),
            Err(e) => Notice::failed(EntityKind::Venue, Some(&label), &e),
        };
        Ok(notice.into())
    }

    async fn edit_venue(
        &self,
        ctx: &Context<'_>,
        id: i64,
        input: VenueInput,
    ) -> GraphqlResult<WriteResult> {
        let db = get_db(ctx)?;
        let service = VenueService::new(db.clone());

        let label = input.name.clone();
        let notice = match service.edit(id, input.into()).await {
            Ok(venue) => Notice::listed(EntityKind::Venue, Some(&venue.name), venue.id),
            Err(e) => Notice::failed(EntityKind::Venue, Some(&label), &e),
        };
        Ok(notice.into())
    }

    /// Deletes the venue together with every show it hosts.
    async fn delete_venue(&self, ctx: &Context<'_>, id: i64) -> GraphqlResult<WriteResult> {
        let db = get_db(ctx)?;
        let service = VenueService::new(db.clone());

        let notice = match service.delete(id).await {
            Ok(_) => Notice::deleted(EntityKind::Venue, id),
            Err(e) => Notice::delete_failed(EntityKind::Venue, id, &e),
        };
        Ok(notice.into())
    }
}
