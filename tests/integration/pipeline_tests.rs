//! Pipeline integration tests
//!
//! Runs the full CSV-to-CSV pipeline against the mock completions server.

#[cfg(test)]
mod tests {
    use crate::assert_ok;
    use crate::common::{CatalogFixture, MockCompletionServer};
    use seo_metagen::{FALLBACK_META_DESCRIPTION, MetagenError, Pipeline};
    use serde_json::json;

    const WIDGET_CSV: &str = "id,title,body_html,type\n1,\"Widget\",\"A great widget.\",\"Gadgets\"\n";

    fn widget_meta() -> serde_json::Value {
        json!({
            "id": "1",
            "product_title": "Widget",
            "product_description": "A great widget.",
            "product_type": "Gadgets",
            "meta_description": "Discover the Widget, a great gadget built to last. Order yours today and enjoy fast shipping plus hassle-free returns on every purchase."
        })
    }

    #[tokio::test]
    async fn test_single_row_end_to_end() {
        let server = MockCompletionServer::start().await;
        server.mount_fixed(widget_meta()).await;
        let fixture = CatalogFixture::with_csv(WIDGET_CSV);

        let pipeline = assert_ok!(Pipeline::new(fixture.config(&server.base_url())));
        let summary = assert_ok!(pipeline.run().await);

        assert_eq!(summary.rows, 1);
        assert_eq!(summary.batches, 1);
        assert_eq!(summary.generated, 1);
        assert_eq!(summary.fallbacks, 0);
        assert_eq!(summary.output_path, fixture.output_path());

        let output = fixture.read_output();
        assert_eq!(
            output.lines().next(),
            Some("ID,Title,Body HTML,Type,Meta Description")
        );

        let rows = fixture.output_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], "1");
        assert_eq!(rows[0][1], "Widget");
        assert_eq!(rows[0][2], "A great widget.");
        assert_eq!(rows[0][3], "Gadgets");
        assert_eq!(
            rows[0][4],
            widget_meta()["meta_description"].as_str().unwrap()
        );
    }

    #[tokio::test]
    async fn test_service_failure_writes_fallback_row() {
        let server = MockCompletionServer::start().await;
        server.mount_status(500).await;
        let fixture = CatalogFixture::with_csv(WIDGET_CSV);

        let pipeline = assert_ok!(Pipeline::new(fixture.config(&server.base_url())));
        let summary = assert_ok!(pipeline.run().await);
        assert_eq!(summary.fallbacks, 1);
        assert_eq!(summary.generated, 0);

        let rows = fixture.output_rows();
        assert_eq!(
            rows,
            vec![vec![
                "1".to_string(),
                "Widget".to_string(),
                "A great widget.".to_string(),
                "Gadgets".to_string(),
                FALLBACK_META_DESCRIPTION.to_string(),
            ]]
        );
    }

    #[tokio::test]
    async fn test_schema_violation_writes_fallback_row() {
        let server = MockCompletionServer::start().await;
        server
            .mount_fixed(json!({"id": "1", "meta_description": "Too few fields"}))
            .await;
        let fixture = CatalogFixture::with_csv(WIDGET_CSV);

        let pipeline = assert_ok!(Pipeline::new(fixture.config(&server.base_url())));
        let summary = assert_ok!(pipeline.run().await);
        assert_eq!(summary.fallbacks, 1);
        assert_eq!(fixture.output_rows()[0][4], FALLBACK_META_DESCRIPTION);
    }

    #[tokio::test]
    async fn test_twelve_rows_in_three_batches() {
        let server = MockCompletionServer::start().await;
        server.mount_echo(&[]).await;
        let fixture = CatalogFixture::with_products(12);

        let pipeline = assert_ok!(Pipeline::new(fixture.config(&server.base_url())));
        let summary = assert_ok!(pipeline.run().await);

        assert_eq!(summary.rows, 12);
        assert_eq!(summary.batches, 3);
        assert_eq!(summary.generated, 12);
        assert_eq!(server.request_bodies().await.len(), 12);

        let rows = fixture.output_rows();
        assert_eq!(rows.len(), 12);
        for (i, row) in rows.iter().enumerate() {
            let id = format!("product-{}", i + 1);
            assert_eq!(row[0], id);
            assert_eq!(row[4], format!("Meta for {}", id));
        }
    }

    #[tokio::test]
    async fn test_failed_rows_keep_their_position() {
        let server = MockCompletionServer::start().await;
        server.mount_echo(&["product-2", "product-6"]).await;
        let fixture = CatalogFixture::with_products(7);

        let pipeline = assert_ok!(Pipeline::new(fixture.config(&server.base_url())));
        let summary = assert_ok!(pipeline.run().await);
        assert_eq!(summary.rows, 7);
        assert_eq!(summary.fallbacks, 2);
        assert_eq!(summary.generated, 5);

        let rows = fixture.output_rows();
        assert_eq!(rows[1][0], "product-2");
        assert_eq!(rows[1][1], "Product 2");
        assert_eq!(rows[1][2], "<p>Body of product 2, with a comma.</p>");
        assert_eq!(rows[1][3], "Category 2");
        assert_eq!(rows[1][4], FALLBACK_META_DESCRIPTION);
        assert_eq!(rows[5][4], FALLBACK_META_DESCRIPTION);
        assert_eq!(rows[2][4], "Meta for product-3");
        assert_eq!(rows[6][4], "Meta for product-7");
    }

    #[tokio::test]
    async fn test_prompts_carry_normalized_fields() {
        let server = MockCompletionServer::start().await;
        server.mount_echo(&[]).await;
        let fixture = CatalogFixture::with_products(1);

        let pipeline = assert_ok!(Pipeline::new(fixture.config(&server.base_url())));
        assert_ok!(pipeline.run().await);

        let bodies = server.request_bodies().await;
        let prompt = bodies[0]["messages"][0]["content"].as_str().unwrap();
        assert!(prompt.contains("Product ID: product-1"));
        assert!(prompt.contains("Product Title: Product 1"));
        assert!(prompt.contains("<p>Body of product 1, with a comma.</p>"));
        assert!(prompt.contains("Product Type: Category 1"));
    }

    #[tokio::test]
    async fn test_max_rows_limits_requests() {
        let server = MockCompletionServer::start().await;
        server.mount_echo(&[]).await;
        let fixture = CatalogFixture::with_products(9);

        let mut config = fixture.config(&server.base_url());
        config.pipeline.max_rows = Some(4);
        let pipeline = assert_ok!(Pipeline::new(config));
        let summary = assert_ok!(pipeline.run().await);

        assert_eq!(summary.rows, 4);
        assert_eq!(server.request_bodies().await.len(), 4);
        assert_eq!(fixture.output_rows().len(), 4);
    }

    #[tokio::test]
    async fn test_header_only_input_writes_header_only_output() {
        let server = MockCompletionServer::start().await;
        server.mount_echo(&[]).await;
        let fixture = CatalogFixture::with_csv("id,title,body_html,type\n");

        let pipeline = assert_ok!(Pipeline::new(fixture.config(&server.base_url())));
        let summary = assert_ok!(pipeline.run().await);

        assert_eq!(summary.rows, 0);
        assert_eq!(summary.batches, 0);
        assert!(server.request_bodies().await.is_empty());
        assert_eq!(
            fixture.read_output().trim_end(),
            "ID,Title,Body HTML,Type,Meta Description"
        );
    }

    #[tokio::test]
    async fn test_missing_input_aborts_without_output() {
        let server = MockCompletionServer::start().await;
        server.mount_echo(&[]).await;
        let fixture = CatalogFixture::empty();

        let pipeline = assert_ok!(Pipeline::new(fixture.config(&server.base_url())));
        let err = pipeline.run().await.unwrap_err();

        assert!(matches!(err, MetagenError::Io(_)), "got {:?}", err);
        assert!(!fixture.output_path().exists());
        assert!(server.request_bodies().await.is_empty());
        assert!(fixture.dir().exists());
    }

    #[tokio::test]
    async fn test_missing_api_key_is_rejected() {
        let fixture = CatalogFixture::with_csv(WIDGET_CSV);
        let mut config = fixture.config("http://127.0.0.1:9/v1");
        config.provider.api_key = String::new();

        assert!(matches!(
            Pipeline::new(config),
            Err(MetagenError::Config(_))
        ));
    }
}
