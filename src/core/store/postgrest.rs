//! PostgREST store client
//!
//! Upserts go to `POST {url}/rest/v1/{table}` with the conflict target in
//! `on_conflict` and the duplicate policy in the `Prefer` header.

use super::{CityStore, StoreError, UpsertOptions};
use crate::config::StoreConfig;
use crate::core::types::CityRecord;
use crate::utils::error::{Result, SeederError};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::debug;
use url::Url;

/// PostgREST-backed [`CityStore`]
#[derive(Debug, Clone)]
pub struct PostgrestStore {
    client: Client,
    endpoint: Url,
}

impl PostgrestStore {
    /// Create a client for `config.table` under `config.url`
    pub fn new(config: &StoreConfig) -> Result<Self> {
        let endpoint = table_endpoint(&config.url, &config.table)?;

        let mut headers = HeaderMap::new();
        let mut api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|e| SeederError::config(format!("Invalid API key: {}", e)))?;
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|e| SeederError::config(format!("Invalid API key: {}", e)))?;
        api_key.set_sensitive(true);
        bearer.set_sensitive(true);
        headers.insert("apikey", api_key);
        headers.insert(reqwest::header::AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()?;

        debug!("PostgREST endpoint: {}", endpoint);
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn table_endpoint(base_url: &str, table: &str) -> Result<Url> {
    let mut base = Url::parse(base_url)
        .map_err(|e| SeederError::config(format!("Invalid store URL '{}': {}", base_url, e)))?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(&format!("rest/v1/{}", table))
        .map_err(|e| SeederError::config(format!("Invalid table name '{}': {}", table, e)))
}

fn prefer_header(options: &UpsertOptions) -> &'static str {
    if options.ignore_duplicates {
        "resolution=ignore-duplicates,return=minimal"
    } else {
        "resolution=merge-duplicates,return=minimal"
    }
}

/// Union of keys across all rows, in first-seen order
fn column_list(rows: &[Value]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for row in rows {
        if let Value::Object(map) = row {
            for key in map.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
    }
    columns
}

#[async_trait]
impl CityStore for PostgrestStore {
    async fn upsert(
        &self,
        rows: &[CityRecord],
        options: &UpsertOptions,
    ) -> std::result::Result<(), StoreError> {
        let body = rows
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<Value>, _>>()
            .map_err(|e| StoreError::new(None, format!("failed to encode rows: {}", e)))?;

        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("on_conflict", &options.conflict_target())
            .append_pair("columns", &column_list(&body).join(","));

        let response = self
            .client
            .post(url)
            .header("Prefer", prefer_header(options))
            .json(&body)
            .send()
            .await
            .map_err(StoreError::from_transport)?;

        let status = response.status();
        if status.is_success() {
            debug!("Upserted {} rows (HTTP {})", rows.len(), status.as_u16());
            return Ok(());
        }

        match response.text().await {
            Ok(text) => Err(StoreError::from_response(status.as_u16(), &text)),
            Err(e) => Err(StoreError::unreadable_body(status.as_u16(), e)),
        }
    }
}
