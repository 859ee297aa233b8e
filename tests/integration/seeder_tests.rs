//! End-to-end seeding runs against the mock server

#[cfg(test)]
mod tests {
    use crate::assert_ok;
    use crate::common::{CityFactory, MockPostgrest};
    use city_seeder::{SeedConfig, Seeder, SeederError, builtin_cities};
    use std::io::Write;
    use wiremock::ResponseTemplate;

    #[tokio::test]
    async fn test_builtin_seed_issues_five_requests() {
        let mock = MockPostgrest::start().await;
        MockPostgrest::upsert()
            .respond_with(ResponseTemplate::new(201))
            .expect(5)
            .mount(&mock.server)
            .await;

        let seeder = assert_ok!(Seeder::new(mock.seed_config(20)));
        let summary = assert_ok!(seeder.run().await);
        assert_eq!(summary.batches, 5);
        assert_eq!(summary.records, 83);

        let bodies = mock.bodies().await;
        let sizes: Vec<usize> = bodies.iter().map(|b| b.len()).collect();
        assert_eq!(sizes, vec![20, 20, 20, 20, 3]);

        let names: Vec<String> = bodies
            .iter()
            .flatten()
            .map(|row| row["name"].as_str().unwrap().to_string())
            .collect();
        let expected: Vec<String> = builtin_cities().iter().map(|c| c.name.clone()).collect();
        assert_eq!(names, expected);
    }

    #[tokio::test]
    async fn test_third_request_failure_aborts() {
        let mock = MockPostgrest::start().await;
        MockPostgrest::upsert()
            .respond_with(ResponseTemplate::new(201))
            .up_to_n_times(2)
            .with_priority(1)
            .expect(2)
            .mount(&mock.server)
            .await;
        MockPostgrest::upsert()
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
            .with_priority(2)
            .expect(1)
            .mount(&mock.server)
            .await;

        let seeder = assert_ok!(Seeder::new(mock.seed_config(20)));
        let err = seeder.run().await.unwrap_err();

        match err {
            SeederError::StoreWrite {
                batch,
                total,
                source,
            } => {
                assert_eq!(batch, 3);
                assert_eq!(total, 5);
                assert_eq!(source.status, Some(503));
            }
            other => panic!("expected store write failure, got {:?}", other),
        }

        // batches 4 and 5 never reach the server
        assert_eq!(mock.requests().await.len(), 3);
    }

    #[tokio::test]
    async fn test_seed_from_data_file() {
        let mock = MockPostgrest::start().await;
        MockPostgrest::upsert()
            .respond_with(ResponseTemplate::new(201))
            .expect(2)
            .mount(&mock.server)
            .await;

        let cities = CityFactory::many(3);
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(serde_json::to_string(&cities).unwrap().as_bytes())
            .unwrap();

        let config = SeedConfig {
            data_file: Some(file.path().to_path_buf()),
            ..mock.seed_config(2)
        };
        let summary = assert_ok!(Seeder::new(config).unwrap().run().await);
        assert_eq!(summary.records, 3);
        assert_eq!(summary.batches, 2);
    }

    #[tokio::test]
    async fn test_unreachable_store() {
        let mock = MockPostgrest::start().await;
        let mut config = mock.seed_config(20);
        // nothing listens on the discard port
        config.store.url = "http://127.0.0.1:9".to_string();
        drop(mock);

        let err = Seeder::new(config).unwrap().run().await.unwrap_err();
        assert!(err.is_store_failure());
    }

    #[tokio::test]
    async fn test_dry_run_sends_nothing() {
        let mock = MockPostgrest::start().await;
        let config = SeedConfig {
            dry_run: true,
            ..mock.seed_config(20)
        };

        let summary = assert_ok!(Seeder::new(config).unwrap().run().await);
        assert_eq!(summary.batches, 5);
        assert!(mock.requests().await.is_empty());
    }
}
