//! Response shapes for the database query endpoint.

use crate::failure::Error;
use serde::Deserialize;
use serde_json::Value as Json;

/// One page of query results, as returned by `POST /databases/{id}/query`.
/// Only the first page is ever fetched; `has_more` and `next_cursor` are
/// surfaced so a caller can tell the result set was truncated.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    pub results: Vec<Page>,

    #[serde(default)]
    pub has_more: bool,

    #[serde(default)]
    pub next_cursor: Option<String>,
}

impl QueryResponse {
    pub fn page_ids(&self) -> Vec<&str> {
        self.results.iter().map(|page| page.id.as_str()).collect()
    }

    pub fn first_page_id(&self) -> Result<&str, Error> {
        self.results
            .first()
            .map(|page| page.id.as_str())
            .ok_or(Error::EmptyQueryResult)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    pub id: String,

    #[serde(default)]
    pub archived: bool,

    /// Raw property values as returned by the service. Kept untyped: the
    /// client only writes the three tracked properties, it never reads them.
    #[serde(default)]
    pub properties: Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;

    fn response_with_ids(ids: &[&str]) -> Result<QueryResponse> {
        let results = ids
            .iter()
            .map(|id| json!({"object": "page", "id": id, "archived": false}))
            .collect::<Vec<_>>();

        let response = serde_json::from_value(json!({
            "object": "list",
            "results": results,
            "has_more": false,
            "next_cursor": null
        }))?;

        Ok(response)
    }

    #[test]
    fn test_page_ids_preserve_result_order() -> Result<()> {
        let response = response_with_ids(&["first-id", "second-id"])?;

        assert_eq!(response.page_ids(), vec!["first-id", "second-id"]);
        assert_eq!(response.first_page_id()?, "first-id");

        Ok(())
    }

    #[test]
    fn test_first_page_id_of_empty_result_is_a_typed_error() -> Result<()> {
        let response = response_with_ids(&[])?;

        assert!(matches!(
            response.first_page_id(),
            Err(Error::EmptyQueryResult)
        ));

        Ok(())
    }
}
