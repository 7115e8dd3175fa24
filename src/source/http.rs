use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::Client;
use serde_json::Value;

use crate::config::EndpointConfig;
use crate::error::FetchError;
use crate::source::{FetchFuture, Suggestion, SuggestionSource};

/// Source backed by `GET <url>?q=<query>` returning a JSON array
pub struct HttpSource {
    client: Client,
    url: String,
    title_field: String,
}

impl HttpSource {
    pub fn new(config: &EndpointConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(concat!("birdsearch/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            client,
            url: config.url.clone(),
            title_field: config.title_field.clone(),
        })
    }
}

impl SuggestionSource for HttpSource {
    fn name(&self) -> &str {
        &self.url
    }

    fn fetch(&self, query: String) -> FetchFuture {
        // Client is an Arc internally; cloning keeps the future 'static
        let client = self.client.clone();
        let url = self.url.clone();
        let title_field = self.title_field.clone();
        Box::pin(async move { request(&client, &url, &title_field, &query).await })
    }
}

async fn request(
    client: &Client,
    url: &str,
    title_field: &str,
    query: &str,
) -> Result<Vec<Suggestion>, FetchError> {
    tracing::debug!("GET {} q='{}'", url, query);

    let response = client
        .get(url)
        .query(&[("q", query)])
        .header(ACCEPT, HeaderValue::from_static("application/json"))
        .send()
        .await?;

    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
            message: error_message(&body),
        });
    }

    let items: Vec<Value> =
        serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))?;
    Ok(decode_items(items, title_field))
}

/// Convert raw JSON objects into suggestions, skipping entries without a
/// numeric `id` or a string display field.
fn decode_items(items: Vec<Value>, title_field: &str) -> Vec<Suggestion> {
    items
        .into_iter()
        .filter_map(|item| {
            let id = item.get("id").and_then(Value::as_i64);
            let title = item.get(title_field).and_then(Value::as_str);
            match (id, title) {
                (Some(id), Some(title)) => Some(Suggestion::new(id, title)),
                _ => {
                    tracing::debug!("Skipping malformed suggestion: {}", item);
                    None
                }
            }
        })
        .collect()
}

fn error_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    value.get("message")?.as_str().map(str::to_string)
}
