use apollo_enrich::core::EnrichmentApi;
use apollo_enrich::{
    ApolloClient, EnrichError, Enricher, ErrorCategory, PeopleSearchRequest, RequestBuilder,
};
use httpmock::prelude::*;

const API_KEY: &str = "test-api-key-1234567890";

fn client_for(server: &MockServer, per_page: usize) -> ApolloClient {
    ApolloClient::new(RequestBuilder::new(&server.base_url(), per_page), None).unwrap()
}

#[tokio::test]
async fn test_free_plan_key_gets_plan_restriction_error() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/mixed_people/search")
            .json_body_partial(r#"{"q_keywords": "software engineer"}"#);
        then.status(403).json_body(serde_json::json!({
            "error": "api/v1/mixed_people/search is not accessible with this api_key on a free plan. Please upgrade your plan from https://app.apollo.io/.",
            "error_code": "API_INACCESSIBLE"
        }));
    });

    let client = client_for(&server, 10);
    let err = client
        .search_people(&PeopleSearchRequest::new("software engineer", API_KEY))
        .await
        .unwrap_err();

    api_mock.assert();
    assert!(matches!(err, EnrichError::PlanRestrictedError { .. }));

    let enricher = Enricher::new(client);
    let report = enricher
        .people_report(&PeopleSearchRequest::new("software engineer", API_KEY))
        .await;
    assert_eq!(report.failure, Some(ErrorCategory::PlanRestriction));
    assert!(report.text.starts_with("❌ People search requires a paid Apollo plan."));
}

#[tokio::test]
async fn test_paid_plan_returns_ordered_people() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/mixed_people/search")
            .header("x-api-key", API_KEY)
            .json_body(serde_json::json!({
                "q_keywords": "software engineer",
                "page": 1,
                "per_page": 2
            }));
        then.status(200).json_body(serde_json::json!({
            "breadcrumbs": [],
            "people": [
                {
                    "name": "Ada Lovelace",
                    "title": "Senior Software Engineer",
                    "linkedin_url": "http://www.linkedin.com/in/ada",
                    "organization": {"name": "Analytical Engines"},
                    "city": "London",
                    "country": "United Kingdom"
                },
                {
                    "first_name": "Grace",
                    "last_name": "Hopper",
                    "title": "Software Engineer"
                }
            ],
            "pagination": {"page": 1, "per_page": 2, "total_entries": 5821, "total_pages": 2911}
        }));
    });

    let enricher = Enricher::new(client_for(&server, 2));
    let result = enricher
        .search_people(&PeopleSearchRequest::new("software engineer", API_KEY))
        .await
        .unwrap();

    api_mock.assert();
    assert_eq!(result.people.len(), 2);
    assert_eq!(result.people[0].name.as_deref(), Some("Ada Lovelace"));
    assert_eq!(result.people[0].company.as_deref(), Some("Analytical Engines"));
    assert_eq!(result.people[0].location.as_deref(), Some("London, United Kingdom"));
    assert_eq!(result.people[1].name.as_deref(), Some("Grace Hopper"));
    assert_eq!(result.people[1].email, None);
    assert_eq!(result.total_entries, Some(5821));

    let report = enricher
        .people_report(&PeopleSearchRequest::new("software engineer", API_KEY))
        .await;
    assert!(report.is_success());
    assert!(report.text.contains("Found 5821 people (showing 2)"));
    assert!(report.text.contains("2. **Grace Hopper** - Software Engineer @ N/A"));
}

#[tokio::test]
async fn test_blank_query_makes_no_network_call() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/mixed_people/search");
        then.status(200).json_body(serde_json::json!({"people": []}));
    });

    let enricher = Enricher::new(client_for(&server, 10));
    let report = enricher
        .people_report(&PeopleSearchRequest::new("  ", API_KEY))
        .await;

    assert_eq!(report.failure, Some(ErrorCategory::Validation));
    api_mock.assert_hits(0);
}

#[tokio::test]
async fn test_access_denied_mentioning_explanation_is_authentication_error() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/mixed_people/search");
        then.status(403).json_body(serde_json::json!({
            "error": "Access denied for this key. Contact support for an explanation."
        }));
    });

    let enricher = Enricher::new(client_for(&server, 10));
    let report = enricher
        .people_report(&PeopleSearchRequest::new("software engineer", API_KEY))
        .await;

    api_mock.assert();
    assert_eq!(report.failure, Some(ErrorCategory::Authentication));
    assert_eq!(
        report.text,
        "❌ Authentication failed: Access denied for this key. Contact support for an explanation.\n"
    );
}
