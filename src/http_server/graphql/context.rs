use std::sync::Arc;

use async_graphql::Context;

use crate::database::Database;
use crate::http_server::{graphql_error::GraphqlError, state::AppState};

/// Store handle shared by every resolver.
pub fn get_db<'a>(ctx: &Context<'a>) -> Result<&'a Arc<Database>, GraphqlError> {
    ctx.data::<Arc<AppState>>()
        .map(|state| &state.db)
        .map_err(|_| GraphqlError::FailedToGetAppState)
}
