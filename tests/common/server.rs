//! Mock PostgREST server

use city_seeder::{SeedConfig, StoreConfig};
use serde_json::Value;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockBuilder, MockServer, Request};

pub const TEST_API_KEY: &str = "test-anon-key";
pub const TABLE_PATH: &str = "/rest/v1/cities";

/// Wiremock server standing in for a Supabase project
pub struct MockPostgrest {
    pub server: MockServer,
}

impl MockPostgrest {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            url: self.server.uri(),
            api_key: TEST_API_KEY.to_string(),
            timeout: 5,
            ..Default::default()
        }
    }

    pub fn seed_config(&self, batch_size: usize) -> SeedConfig {
        SeedConfig {
            store: self.store_config(),
            batch_size,
            ..Default::default()
        }
    }

    /// Matcher for a well-formed upsert into `cities`
    pub fn upsert() -> MockBuilder {
        Mock::given(method("POST"))
            .and(path(TABLE_PATH))
            .and(query_param("on_conflict", "name,country"))
            .and(header("apikey", TEST_API_KEY))
            .and(header("authorization", format!("Bearer {}", TEST_API_KEY).as_str()))
    }

    pub async fn requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    /// Decoded JSON bodies of all received requests, in arrival order
    pub async fn bodies(&self) -> Vec<Vec<Value>> {
        self.requests()
            .await
            .iter()
            .map(|r| serde_json::from_slice(&r.body).expect("request body is a JSON array"))
            .collect()
    }
}
