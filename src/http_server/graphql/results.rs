use async_graphql::SimpleObject;

use crate::error::Notice;
use crate::services::search::SearchResult;

/// Outcome of a mutation, shown to the user as a flash notice.
#[derive(SimpleObject)]
pub struct WriteResult {
    pub success: bool,
    pub message: String,
    pub id: Option<i64>,
}

impl From<Notice> for WriteResult {
    fn from(notice: Notice) -> Self {
        Self {
            success: notice.success,
            message: notice.message,
            id: notice.id,
        }
    }
}

#[derive(SimpleObject)]
pub struct SearchHit {
    pub id: i64,
    pub name: String,
}

#[derive(SimpleObject)]
pub struct SearchResults {
    pub count: i64,
    pub data: Vec<SearchHit>,
}

impl From<SearchResult> for SearchResults {
    fn from(result: SearchResult) -> Self {
        Self {
            count: result.count as i64,
            data: result
                .results
                .into_iter()
                .map(|hit| SearchHit {
                    id: hit.id,
                    name: hit.name,
                })
                .collect(),
        }
    }
}
