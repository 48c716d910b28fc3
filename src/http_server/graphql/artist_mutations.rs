use async_graphql::{Context, InputObject, Object};

use crate::database::ArtistFields;
use crate::error::{EntityKind, Notice};
use crate::http_server::graphql::context::get_db;
use crate::http_server::graphql::results::WriteResult;
use crate::http_server::graphql_error::GraphqlResult;
use crate::services::artist::ArtistService;

#[derive(InputObject)]
pub struct ArtistInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    #[graphql(default)]
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub genres: Vec<String>,
}

impl From<ArtistInput> for ArtistFields {
    fn from(input: ArtistInput) -> Self {
        Self {
            name: input.name,
            city: input.city,
            state: input.state,
            phone: input.phone,
            website: input.website,
            facebook_link: input.facebook_link,
            image_link: input.image_link,
            seeking_venue: input.seeking_venue,
            seeking_description: input.seeking_description,
            genres: input.genres,
        }
    }
}

#[derive(Default)]
pub struct ArtistMutation;

#[Object]
impl ArtistMutation {
    async fn create_artist(
        &self,
        ctx: &Context<'_>,
        input: ArtistInput,
    ) -> GraphqlResult<WriteResult> {
        let db = get_db(ctx)?;
        let service = ArtistService::new(db.clone());

        let label = input.name.clone();
        let notice = match service.create(input.into()).await {
            Ok(artist) => Notice::listed(EntityKind::Artist, Some(&artist.name), artist.id),
            Err(e) => Notice::failed(EntityKind::Artist, Some(&label), &e),
        };
        Ok(notice.into())
    }

    async fn edit_artist(
        &self,
        ctx: &Context<'_>,
        id: i64,
        input: ArtistInput,
    ) -> GraphqlResult<WriteResult> {
        let db = get_db(ctx)?;
        let service = ArtistService::new(db.clone());

        let label = input.name.clone();
        let notice = match service.edit(id, input.into()).await {
            Ok(artist) => Notice::listed(EntityKind::Artist, Some(&artist.name), artist.id),
            Err(e) => Notice::failed(EntityKind::Artist, Some(&label), &e),
        };
        Ok(notice.into())
    }

    async fn delete_artist(&self, ctx: &Context<'_>, id: i64) -> GraphqlResult<WriteResult> {
        let db = get_db(ctx)?;
        let service = ArtistService::new(db.clone());

        let notice = match service.delete(id).await {
            Ok(_) => Notice::deleted(EntityKind::Artist, id),
            Err(e) => Notice::delete_failed(EntityKind::Artist, id, &e),
        };
        Ok(notice.into())
    }
}
