//! Client for a single Notion database of task rows.
//!
//! [`TaskDatabase`] wraps four operations on the rows of one database:
//! [`write`](TaskDatabase::write) creates a row, [`read`](TaskDatabase::read)
//! queries the first page of rows, [`update`](TaskDatabase::update) patches
//! the provided properties of a row, and [`delete`](TaskDatabase::delete)
//! archives a row (the service's soft delete). Each call is one HTTP round
//! trip; the client holds no state beyond its credentials.

mod failure;
mod properties;
mod records;

pub mod api;

use serde_json::Value as Json;

pub use failure::Error;
pub use properties::TaskProperties;
pub use records::{Page, QueryResponse};

pub type Result<T> = std::result::Result<T, Error>;

pub struct TaskDatabaseParameters {
    pub token: String,
    pub database_id: String,
    pub base_url_override: Option<String>,
}

pub struct TaskDatabase {
    client: api::Client,
    database_id: String,
}

impl TaskDatabase {
    pub fn new(parameters: TaskDatabaseParameters) -> Self {
        let TaskDatabaseParameters {
            token,
            database_id,
            base_url_override,
        } = parameters;

        Self {
            client: api::Client::new(api::ClientParameters {
                api_key: token,
                base_url_override,
            }),
            database_id,
        }
    }

    /// Creates a row with all three tracked properties set.
    pub fn write(&self, task_text: &str, date: &str, status: &str) -> Result<()> {
        let properties = TaskProperties::new(task_text, date, status);

        api::create_page(
            &self.client,
            api::CreatePageParameters {
                database_id: &self.database_id,
                properties: to_json(&properties)?,
            },
        )?;

        Ok(())
    }

    /// Queries the database, returning the first page of matching rows.
    ///
    /// `filter` and `sorts` are passed through verbatim in the service's
    /// query grammar and omitted from the request body when absent.
    pub fn read(&self, filter: Option<Json>, sorts: Option<Json>) -> Result<QueryResponse> {
        let response = api::query_database(
            &self.client,
            api::QueryDatabaseParameters {
                database_id: &self.database_id,
                filter,
                sorts,
            },
        )?;

        let response = response.into_json().map_err(Error::MalformedResponse)?;

        Ok(response)
    }

    /// Patches a row. Only the properties present in `patch` are sent;
    /// everything else on the row is left untouched.
    pub fn update(&self, page_id: &str, patch: TaskProperties) -> Result<()> {
        api::update_page(
            &self.client,
            api::UpdatePageParameters {
                page_id,
                properties: to_json(&patch)?,
            },
        )?;

        Ok(())
    }

    /// Archives a row. The row is hidden by the service, not destroyed.
    pub fn delete(&self, page_id: &str) -> Result<()> {
        api::archive_page(&self.client, api::ArchivePageParameters { page_id })?;

        Ok(())
    }
}

fn to_json(properties: &TaskProperties) -> Result<Json> {
    serde_json::to_value(properties).map_err(Error::InvalidProperties)
}
