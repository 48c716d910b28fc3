use async_graphql::{Error, ErrorExtensions};

use crate::error::BookingError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GraphqlError {
    #[error("Server error: {0}")]
    ServerError(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Invalid(String),
    #[error("Failed to get app state")]
    FailedToGetAppState,
}

impl From<BookingError> for GraphqlError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::NotFound { .. } => Self::NotFound(err.to_string()),
            BookingError::Validation { .. } => Self::Invalid(err.to_string()),
            _ => {
                log::error!("GraphQL error: {:#?}", err);
                Self::ServerError(err.to_string())
            }
        }
    }
}

impl ErrorExtensions for GraphqlError {
    fn extend(&self) -> Error {
        Error::new(format!("{}", self)).extend_with(|_err, e| match self {
            GraphqlError::ServerError(reason) => e.set("reason", reason.clone()),
            GraphqlError::NotFound(_) => e.set("reason", "not found"),
            GraphqlError::Invalid(_) => e.set("reason", "invalid"),
            GraphqlError::FailedToGetAppState => {
                e.set("reason", "Failed to get app state".to_string())
            }
        })
    }
}

// Newtype wrapper to avoid blanket From implementation conflict for GraphqlError and async_graphql::Error
#[derive(Debug, Clone)]
pub struct GraphqlErrorWrapper(GraphqlError);

impl From<GraphqlError> for GraphqlErrorWrapper {
    fn from(err: GraphqlError) -> Self {
        Self(err)
    }
}

impl From<GraphqlErrorWrapper> for Error {
    fn from(wrapper: GraphqlErrorWrapper) -> Self {
        wrapper.0.extend()
    }
}

impl From<BookingError> for GraphqlErrorWrapper {
    fn from(err: BookingError) -> Self {
        GraphqlError::from(err).into()
    }
}

pub type GraphqlResult<T> = Result<T, GraphqlErrorWrapper>;
