use apollo_enrich::{
    ApolloClient, ContactRequest, Enricher, ErrorCategory, OutputFormat, RequestBuilder,
};
use httpmock::prelude::*;

const API_KEY: &str = "test-api-key-1234567890";

fn enricher_for(server: &MockServer) -> Enricher<ApolloClient> {
    let client = ApolloClient::new(RequestBuilder::new(&server.base_url(), 10), None).unwrap();
    Enricher::new(client)
}

#[tokio::test]
async fn test_contact_is_matched_by_email() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/people/match").json_body(serde_json::json!({
            "email": "jane.doe@example.com",
            "first_name": "Jane",
            "last_name": "Doe"
        }));
        then.status(200).json_body(serde_json::json!({
            "person": {
                "first_name": "Jane",
                "last_name": "Doe",
                "name": "Jane Doe",
                "email": "jane.doe@example.com",
                "title": "VP Engineering",
                "headline": "Building teams",
                "twitter_url": "https://twitter.com/janedoe",
                "organization": {"name": "Example Corp", "primary_domain": "example.com"},
                "phone_numbers": [{"raw_number": "+1 415-555-0100", "type": "work_hq"}],
                "city": "San Francisco",
                "state": "California",
                "country": "United States"
            }
        }));
    });

    let enricher = enricher_for(&server);
    let request = ContactRequest::new("jane.doe@example.com", API_KEY)
        .with_first_name(Some("Jane"))
        .with_last_name(Some("Doe"))
        .with_linkedin_url(Some(""));

    let result = enricher.enrich_contact(&request).await.unwrap();

    api_mock.assert();
    assert_eq!(result.name.as_deref(), Some("Jane Doe"));
    assert_eq!(result.company.as_deref(), Some("Example Corp"));
    assert_eq!(result.phone.as_deref(), Some("+1 415-555-0100"));
    assert_eq!(
        result.location.as_deref(),
        Some("San Francisco, California, United States")
    );
}

#[tokio::test]
async fn test_unmatched_contact_renders_placeholders() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/people/match");
        then.status(200).json_body(serde_json::json!({"person": null}));
    });

    let enricher = enricher_for(&server).with_format(OutputFormat::Text);
    let report = enricher
        .contact_report(&ContactRequest::new("nobody@example.com", API_KEY))
        .await;

    api_mock.assert();
    assert!(report.is_success());
    assert!(report.text.contains("• **Name:** N/A"));
    assert!(report.text.contains("• **Phone:** N/A"));
}

#[tokio::test]
async fn test_invalid_email_makes_no_network_call() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/people/match");
        then.status(200).json_body(serde_json::json!({"person": {}}));
    });

    let report = enricher_for(&server)
        .contact_report(&ContactRequest::new("jane.doe", API_KEY))
        .await;

    assert_eq!(report.failure, Some(ErrorCategory::Validation));
    assert_eq!(report.text, "❌ Error: Please enter a valid email address\n");
    api_mock.assert_hits(0);
}
