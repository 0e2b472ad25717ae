use crate::api;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] api::Error),

    #[error("Notion database query returned no rows")]
    EmptyQueryResult,

    #[error("Notion API response could not be parsed")]
    MalformedResponse(#[source] std::io::Error),

    #[error("page properties could not be serialized")]
    InvalidProperties(#[source] serde_json::Error),
}
