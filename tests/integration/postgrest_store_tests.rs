//! PostgREST store client tests

#[cfg(test)]
mod tests {
    use crate::common::{CityFactory, MockPostgrest};
    use city_seeder::{CityStore, PostgrestStore, StoreConfig, UpsertOptions};
    use serde_json::json;
    use wiremock::ResponseTemplate;

    #[tokio::test]
    async fn test_upsert_sends_rows_and_headers() {
        let mock = MockPostgrest::start().await;
        MockPostgrest::upsert()
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&mock.server)
            .await;

        let store = PostgrestStore::new(&mock.store_config()).unwrap();
        let cities = CityFactory::mixed();
        store
            .upsert(&cities, &UpsertOptions::default())
            .await
            .unwrap();

        let requests = mock.requests().await;
        assert_eq!(requests.len(), 1);
        let request = &requests[0];

        let prefer = request
            .headers
            .get("prefer")
            .and_then(|v| v.to_str().ok())
            .unwrap();
        assert!(prefer.contains("resolution=ignore-duplicates"));
        assert!(prefer.contains("return=minimal"));

        let content_type = request
            .headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap();
        assert!(content_type.starts_with("application/json"));

        let columns: Vec<String> = request
            .url
            .query_pairs()
            .find(|(k, _)| k == "columns")
            .map(|(_, v)| v.split(',').map(|c| c.to_string()).collect())
            .unwrap();
        for expected in ["name", "country", "state", "province"] {
            assert!(columns.iter().any(|c| c == expected), "missing column {}", expected);
        }

        let bodies = mock.bodies().await;
        assert_eq!(
            bodies[0],
            vec![
                json!({"name": "Lisbon", "country": "Portugal"}),
                json!({"name": "Denver", "state": "Colorado", "country": "United States"}),
                json!({"name": "Toronto", "province": "Ontario", "country": "Canada"}),
            ]
        );
    }

    #[tokio::test]
    async fn test_merge_duplicates_preference() {
        let mock = MockPostgrest::start().await;
        MockPostgrest::upsert()
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock.server)
            .await;

        let store = PostgrestStore::new(&mock.store_config()).unwrap();
        let options = UpsertOptions {
            ignore_duplicates: false,
            ..Default::default()
        };
        store.upsert(&CityFactory::many(2), &options).await.unwrap();

        let requests = mock.requests().await;
        let prefer = requests[0].headers.get("prefer").unwrap().to_str().unwrap();
        assert!(prefer.contains("resolution=merge-duplicates"));
    }

    #[tokio::test]
    async fn test_postgrest_error_body_is_parsed() {
        let mock = MockPostgrest::start().await;
        MockPostgrest::upsert()
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "code": "42P10",
                "details": null,
                "hint": null,
                "message": "there is no unique or exclusion constraint matching the ON CONFLICT specification"
            })))
            .mount(&mock.server)
            .await;

        let store = PostgrestStore::new(&mock.store_config()).unwrap();
        let err = store
            .upsert(&CityFactory::many(1), &UpsertOptions::default())
            .await
            .unwrap_err();

        assert_eq!(err.status, Some(400));
        assert_eq!(err.code.as_deref(), Some("42P10"));
        assert!(err.message.contains("ON CONFLICT"));
    }

    #[tokio::test]
    async fn test_unauthorized_plain_body() {
        let mock = MockPostgrest::start().await;
        wiremock::Mock::given(wiremock::matchers::method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key"))
            .mount(&mock.server)
            .await;

        let config = StoreConfig {
            api_key: "wrong-key".to_string(),
            ..mock.store_config()
        };
        let store = PostgrestStore::new(&config).unwrap();
        let err = store
            .upsert(&CityFactory::many(1), &UpsertOptions::default())
            .await
            .unwrap_err();

        assert_eq!(err.status, Some(401));
        assert_eq!(err.message, "Invalid API key");
    }

    #[tokio::test]
    async fn test_timeout_is_a_store_error() {
        let mock = MockPostgrest::start().await;
        MockPostgrest::upsert()
            .respond_with(ResponseTemplate::new(201).set_delay(std::time::Duration::from_secs(3)))
            .mount(&mock.server)
            .await;

        let config = StoreConfig {
            timeout: 1,
            ..mock.store_config()
        };
        let store = PostgrestStore::new(&config).unwrap();
        let err = store
            .upsert(&CityFactory::many(1), &UpsertOptions::default())
            .await
            .unwrap_err();

        assert_eq!(err.status, None);
        assert!(err.message.contains("timed out"));
    }
}
