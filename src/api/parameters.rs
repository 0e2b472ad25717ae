use serde_json::Value as Json;

pub struct ClientParameters {
    pub api_key: String,
    pub base_url_override: Option<String>,
}

pub struct CreatePageParameters<'a> {
    pub database_id: &'a str,
    pub properties: Json,
}

pub struct QueryDatabaseParameters<'a> {
    pub database_id: &'a str,
    pub filter: Option<Json>,
    pub sorts: Option<Json>,
}

pub struct UpdatePageParameters<'a> {
    pub page_id: &'a str,
    pub properties: Json,
}

pub struct ArchivePageParameters<'a> {
    pub page_id: &'a str,
}

#[derive(Default)]
pub struct RetryParameters<S> {
    pub custom_sleep: Option<S>,
}
