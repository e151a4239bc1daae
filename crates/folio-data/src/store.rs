//! Content store abstraction and the PostgREST-backed implementation

use folio_core::prelude::*;
use serde_json::Value;
use url::Url;

use crate::query::Query;

/// Accept header that makes PostgREST return a single object instead of an array
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// PostgREST error code for "single row requested, zero or many found"
const NO_SINGLE_ROW: &str = "PGRST116";

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

/// Read-only row access over a hosted table store
#[trait_variant::make(ContentStore: Send)]
pub trait LocalContentStore {
    /// Run a multi-row query and return the rows in store order
    async fn fetch_rows(&self, query: &Query) -> Result<Vec<Value>>;

    /// Run a single-row query; zero matching rows is [`Error::NotFound`]
    async fn fetch_one(&self, query: &Query) -> Result<Value>;
}

/// PostgREST client (Supabase-compatible)
#[derive(Debug, Clone)]
pub struct RestStore {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl RestStore {
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::config(format!("invalid store URL {base_url:?}: {e}")))?;

        Ok(Self {
            client: build_client()?,
            base_url,
            api_key: api_key.into(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn execute(&self, query: &Query) -> Result<Value> {
        let url = query.to_url(&self.base_url)?;
        debug!("GET {}", url);

        let accept = if query.is_single() {
            SINGLE_OBJECT
        } else {
            "application/json"
        };

        let response = self
            .client
            .get(url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Accept", accept)
            .send()
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        if !status.is_success() {
            return Err(store_error(query, status.as_u16(), &text));
        }

        Ok(serde_json::from_str(&text)?)
    }

    async fn rows(&self, query: &Query) -> Result<Vec<Value>> {
        match self.execute(query).await? {
            Value::Array(rows) => Ok(rows),
            other => Err(Error::store(
                query.table(),
                200,
                format!("expected an array of rows, got {}", json_kind(&other)),
            )),
        }
    }

    async fn one(&self, query: &Query) -> Result<Value> {
        let query = query.clone().single();
        self.execute(&query).await
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ContentStore for RestStore {
    async fn fetch_rows(&self, query: &Query) -> Result<Vec<Value>> {
        self.rows(query).await
    }

    async fn fetch_one(&self, query: &Query) -> Result<Value> {
        self.one(query).await
    }
}

// reqwest futures are not `Send` in the browser, so only the local variant exists there.
#[cfg(target_arch = "wasm32")]
impl LocalContentStore for RestStore {
    async fn fetch_rows(&self, query: &Query) -> Result<Vec<Value>> {
        self.rows(query).await
    }

    async fn fetch_one(&self, query: &Query) -> Result<Value> {
        self.one(query).await
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(DEFAULT_TIMEOUT)
        .build()
        .map_err(|e| Error::http(e.to_string()))
}

#[cfg(target_arch = "wasm32")]
fn build_client() -> Result<reqwest::Client> {
    Ok(reqwest::Client::new())
}

/// Map a non-2xx PostgREST response to an [`Error`]
fn store_error(query: &Query, status: u16, body: &str) -> Error {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        #[serde(default)]
        code: Option<String>,
        #[serde(default)]
        message: Option<String>,
    }

    let parsed = serde_json::from_str::<ErrorBody>(body).ok();
    let code = parsed.as_ref().and_then(|b| b.code.as_deref());

    if query.is_single() && code == Some(NO_SINGLE_ROW) {
        return Error::not_found(query.table(), query.describe_filters());
    }

    let message = parsed
        .and_then(|b| b.message)
        .unwrap_or_else(|| body.trim().to_string());
    Error::store(query.table(), status, message)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_url() {
        let err = RestStore::new("not a url", "key").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_store_error_maps_missing_single_row() {
        let query = Query::from("pages").eq("slug", "nope").single();
        let body = r#"{"code":"PGRST116","message":"JSON object requested, multiple (or no) rows returned"}"#;

        let err = store_error(&query, 406, body);

        assert!(matches!(err, Error::NotFound { ref table, .. } if table == "pages"));
    }

    #[test]
    fn test_store_error_uses_message_field() {
        let query = Query::from("skills");
        let err = store_error(&query, 401, r#"{"message":"Invalid API key"}"#);
        assert_eq!(err.to_string(), "Store returned 401 for skills: Invalid API key");
    }

    #[test]
    fn test_store_error_falls_back_to_raw_body() {
        let query = Query::from("skills");
        let err = store_error(&query, 502, "Bad Gateway\n");
        assert_eq!(err.to_string(), "Store returned 502 for skills: Bad Gateway");
    }
}
