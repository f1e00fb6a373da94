use anyhow::Result;
use apollo_enrich::core::ConfigProvider;
use apollo_enrich::utils::validation::Validate;
use apollo_enrich::{
    ApolloClient, Enricher, EnrichmentRequest, Renderer, Settings, TomlConfig,
};
use httpmock::prelude::*;
use tempfile::TempDir;

#[tokio::test]
async fn test_settings_from_file_drive_the_client() -> Result<()> {
    let server = MockServer::start();
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("apollo.toml");

    let config_content = format!(
        r#"
[api]
base_url = "{}"
api_key = "file-key-1234567890"
timeout_seconds = 5

[search]
per_page = 3

[display]
placeholder = "(unknown)"
"#,
        server.base_url()
    );
    tokio::fs::write(&config_path, config_content).await?;

    let settings = Settings::from_toml(&TomlConfig::from_file(&config_path)?);
    settings.validate()?;
    assert_eq!(settings.people_per_page(), 3);

    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/organizations/enrich")
            .header("x-api-key", "file-key-1234567890");
        then.status(200)
            .json_body(serde_json::json!({"organization": {"name": "Acme"}}));
    });

    let enricher = Enricher::new(ApolloClient::from_config(&settings)?)
        .with_renderer(Renderer::new(settings.placeholder()));
    let report = enricher
        .company_report(&EnrichmentRequest::new("acme.com", settings.api_key_or_empty()))
        .await;

    api_mock.assert();
    assert!(report.is_success());
    assert!(report.text.contains("• **Name:** Acme"));
    assert!(report.text.contains("• **Industry:** (unknown)"));
    Ok(())
}

#[test]
fn test_out_of_range_page_size_is_rejected() {
    let config = TomlConfig::from_toml_str("[search]\nper_page = 500\n").unwrap();
    let settings = Settings::from_toml(&config);
    assert!(settings.validate().is_err());
}
