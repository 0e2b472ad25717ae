//! Low-level Notion REST endpoints: one function per endpoint, fixed headers,
//! JSON bodies in, raw responses out.

mod failure;
mod headers;
mod parameters;

use headers::SetNotionHeaders;
use std::{thread, time::Duration};
use ureq::{Agent, AgentBuilder, Response};

pub use failure::Error;
pub use parameters::*;

pub type Result<T> = std::result::Result<T, Error>;

pub struct Client {
    inner: Agent,
    base_url: String,
    api_key: String,
}

impl Client {
    pub fn new(parameters: ClientParameters) -> Self {
        let ClientParameters {
            api_key,
            base_url_override,
        } = parameters;

        let base_url =
            base_url_override.unwrap_or_else(|| "https://api.notion.com/v1".to_string());

        Self {
            api_key,
            inner: AgentBuilder::new().build(),
            base_url,
        }
    }
}

pub fn create_page(client: &Client, parameters: CreatePageParameters) -> Result<Response> {
    let CreatePageParameters {
        database_id,
        properties,
    } = parameters;

    let path = format!("{}/pages", &client.base_url);

    let body = serde_json::json!({
        "parent": { "database_id": database_id },
        "properties": properties,
    });

    let response = client
        .inner
        .post(&path)
        .set_notion_headers(&client.api_key)
        .send_json(body)?;

    Ok(response)
}

pub fn query_database(client: &Client, parameters: QueryDatabaseParameters) -> Result<Response> {
    let QueryDatabaseParameters {
        database_id,
        filter,
        sorts,
    } = parameters;

    tracing::info!(message = "Query Notion database", database_id = database_id);

    let path = format!("{}/databases/{}/query", &client.base_url, database_id);
    let mut body = serde_json::json!({});

    if let Some(filter) = filter {
        body["filter"] = filter;
    }

    if let Some(sorts) = sorts {
        body["sorts"] = sorts;
    }

    let response = client
        .inner
        .post(&path)
        .set_notion_headers(&client.api_key)
        .send_json(body)?;

    Ok(response)
}

pub fn update_page(client: &Client, parameters: UpdatePageParameters) -> Result<Response> {
    let UpdatePageParameters {
        page_id,
        properties,
    } = parameters;

    let path = format!("{}/pages/{}", &client.base_url, page_id);
    let body = serde_json::json!({"properties": properties});

    let response = client
        .inner
        .patch(&path)
        .set_notion_headers(&client.api_key)
        .send_json(body)?;

    Ok(response)
}

// Archiving shares the update endpoint; the payload shape tells them apart.
pub fn archive_page(client: &Client, parameters: ArchivePageParameters) -> Result<Response> {
    let ArchivePageParameters { page_id } = parameters;

    let path = format!("{}/pages/{}", &client.base_url, page_id);
    let body = serde_json::json!({"archived": true});

    let response = client
        .inner
        .patch(&path)
        .set_notion_headers(&client.api_key)
        .send_json(body)?;

    Ok(response)
}

pub fn send_with_retries<F, S>(parameters: RetryParameters<S>, f: F) -> Result<Response>
where
    F: Fn() -> Result<Response>,
    S: Fn(Duration),
{
    let RetryParameters { custom_sleep } = parameters;

    let max_retries = 3;
    let mut retries = 0;

    loop {
        let result = f();

        if result.is_ok() {
            return result;
        }

        if retries == max_retries {
            tracing::error!(
                "Stopping to retry Notion API request after {} retries",
                max_retries
            );

            return result;
        }

        retries += 1;

        let err = result.unwrap_err();

        let Some(duration) = err.retry_after() else {
            tracing::warn!("Not retryable Notion API request error: {}", err);

            return Err(err);
        };

        tracing::warn!(
            "Sleeping for {:?} before retrying Notion API request",
            duration
        );

        match &custom_sleep {
            Some(sleep) => sleep(duration),
            None => thread::sleep(duration),
        }
    }
}
