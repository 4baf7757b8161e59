#[cfg(test)]
mod tests {
    use super::super::{client_for, request_count};
    use crate::{Domain, DomainService, Error, ListDomainsParameters};
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mount_page(server: &MockServer, page: &str, body: &str) {
        Mock::given(method("GET"))
            .and(path("/domains"))
            .and(query_param("page", page))
            .and(query_param("per_page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_negative_per_page() {
        let server = MockServer::start().await;
        let params = ListDomainsParameters {
            per_page: -1,
            ..Default::default()
        };

        let err = client_for(&server).list_domains(&params).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(err.to_string(), "globodns: domains per page cannot be negative");
        assert_eq!(request_count(&server).await, 0);
    }

    #[tokio::test]
    async fn test_negative_page() {
        let server = MockServer::start().await;
        let params = ListDomainsParameters {
            page: -100,
            ..Default::default()
        };

        let err = client_for(&server).list_domains(&params).await.unwrap_err();
        assert_eq!(err.to_string(), "globodns: page cannot be negative");
        assert_eq!(request_count(&server).await, 0);
    }

    #[tokio::test]
    async fn test_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("some internal error"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .list_domains(&ListDomainsParameters::default())
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "globodns: unexpected HTTP status code: Code: 500 Body: some internal error"
        );
    }

    #[tokio::test]
    async fn test_list_single_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/domains"))
            .and(query_param("query", "*.example.com"))
            .and(query_param("page", "100"))
            .and(query_param("per_page", "25"))
            .and(query_param("reverse", "true"))
            .and(query_param("view", "all"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"[{"domain": {"id": 1, "name": "internal.example.com", "ttl": "1080", "authority_type": "M", "addressing_type": "N", "view_id": 10, "notes": "some note"}}]"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let params = ListDomainsParameters {
            query: "*.example.com".to_string(),
            view: "all".to_string(),
            reverse: Some(true),
            page: 100,
            per_page: 25,
            max_pages: None,
        };
        let domains = client_for(&server).list_domains(&params).await.unwrap();

        assert_eq!(
            domains,
            vec![Domain {
                id: 1,
                name: "internal.example.com".to_string(),
                ttl: Some("1080".to_string()),
                authority_type: "M".to_string(),
                addressing_type: "N".to_string(),
                view_id: 10,
                notes: Some("some note".to_string()),
            }]
        );
        assert_eq!(domains[0].ttl_secs(), Some(1080));
    }

    #[tokio::test]
    async fn test_explicit_page_may_be_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("page", "7"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&server)
            .await;

        let params = ListDomainsParameters {
            page: 7,
            ..Default::default()
        };
        let domains = client_for(&server).list_domains(&params).await.unwrap();
        assert!(domains.is_empty());
    }

    #[tokio::test]
    async fn test_list_all_pages() {
        let server = MockServer::start().await;
        mount_page(&server, "1", r#"[{"domain": {"id": 1, "name": "example.com", "ttl": "1080"}}]"#).await;
        mount_page(&server, "2", r#"[{"domain": {"id": 2, "name": "example.test", "ttl": 1080}}]"#).await;
        mount_page(&server, "3", "[]").await;

        let params = ListDomainsParameters {
            per_page: 1,
            ..Default::default()
        };
        let domains = client_for(&server).list_domains(&params).await.unwrap();

        let names: Vec<_> = domains.iter().map(|d| (d.id, d.name.as_str())).collect();
        assert_eq!(names, vec![(1, "example.com"), (2, "example.test")]);
        assert!(domains.iter().all(|d| d.ttl.as_deref() == Some("1080")));
        assert_eq!(request_count(&server).await, 3);
    }

    #[tokio::test]
    async fn test_failing_page_discards_results() {
        let server = MockServer::start().await;
        mount_page(&server, "1", r#"[{"domain": {"id": 1, "name": "example.com"}}]"#).await;
        Mock::given(method("GET"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .expect(1)
            .mount(&server)
            .await;

        let params = ListDomainsParameters {
            per_page: 1,
            ..Default::default()
        };
        let err = client_for(&server).list_domains(&params).await.unwrap_err();
        assert_eq!(err.status(), Some(502));
    }

    #[tokio::test]
    async fn test_page_limit() {
        let server = MockServer::start().await;
        mount_page(&server, "1", r#"[{"domain": {"id": 1, "name": "example.com"}}]"#).await;
        mount_page(&server, "2", r#"[{"domain": {"id": 2, "name": "example.test"}}]"#).await;

        let params = ListDomainsParameters {
            per_page: 1,
            max_pages: Some(2),
            ..Default::default()
        };
        let err = client_for(&server).list_domains(&params).await.unwrap_err();
        assert!(matches!(err, Error::PageLimitExceeded { limit: 2 }));
        assert_eq!(request_count(&server).await, 2);
    }

    #[tokio::test]
    async fn test_cancellation_stops_pagination() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"[{"domain": {"id": 1, "name": "example.com"}}]"#)
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let params = ListDomainsParameters::default();
        let result =
            tokio::time::timeout(Duration::from_millis(100), client.list_domains(&params)).await;
        assert!(result.is_err());

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(request_count(&server).await, 1);
    }

    #[tokio::test]
    async fn test_list_tolerates_null_fields() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/domains"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"[{"domain": {"id": 1, "name": "example.com", "ttl": "1080", "authority_type": null, "addressing_type": "N", "notes": null, "view_id": null, "account_id": 4, "user_id": null}}]"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let params = ListDomainsParameters {
            page: 1,
            ..Default::default()
        };
        let domains = client_for(&server).list_domains(&params).await.unwrap();

        assert_eq!(
            domains,
            vec![Domain {
                id: 1,
                name: "example.com".to_string(),
                ttl: Some("1080".to_string()),
                addressing_type: "N".to_string(),
                ..Default::default()
            }]
        );
    }

    #[tokio::test]
    async fn test_zero_page_limit() {
        let server = MockServer::start().await;
        let params = ListDomainsParameters {
            max_pages: Some(0),
            ..Default::default()
        };

        let err = client_for(&server).list_domains(&params).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(err.to_string(), "globodns: page limit must be greater than zero");
        assert_eq!(request_count(&server).await, 0);
    }
}
