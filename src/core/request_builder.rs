use crate::core::{
    ConfigProvider, ContactRequest, EnrichmentRequest, PeopleSearchRequest,
};
use crate::utils::error::Result;
use crate::utils::validation::{looks_like_api_key, Validate};
use serde_json::{Map, Value};

pub const DEFAULT_BASE_URL: &str = "https://api.apollo.io/api/v1";
pub const DEFAULT_PEOPLE_PER_PAGE: usize = 10;

pub const API_KEY_HEADER: &str = "X-Api-Key";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    CompanyEnrichment,
    ContactEnrichment,
    PeopleSearch,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::CompanyEnrichment => "/organizations/enrich",
            Endpoint::ContactEnrichment => "/people/match",
            Endpoint::PeopleSearch => "/mixed_people/search",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Endpoint::CompanyEnrichment => "company enrichment",
            Endpoint::ContactEnrichment => "contact enrichment",
            Endpoint::PeopleSearch => "people search",
        }
    }
}

/// 已驗證、可直接送出的對外請求 (一律 POST + JSON body)
#[derive(Clone)]
pub struct OutboundRequest {
    pub endpoint: Endpoint,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Value,
}

// 不印出 header，避免 API key 進到日誌
impl std::fmt::Debug for OutboundRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutboundRequest")
            .field("endpoint", &self.endpoint)
            .field("url", &self.url)
            .field("body", &self.body)
            .finish()
    }
}

impl OutboundRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct RequestBuilder {
    base_url: String,
    people_per_page: usize,
}

impl RequestBuilder {
    pub fn new(base_url: &str, people_per_page: usize) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            people_per_page,
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self::new(config.base_url(), config.people_per_page())
    }

    pub fn company(&self, request: &EnrichmentRequest) -> Result<OutboundRequest> {
        request.validate()?;

        let mut body = Map::new();
        body.insert("domain".to_string(), Value::from(request.domain.as_str()));
        insert_optional(&mut body, "linkedin_url", &request.linkedin_url);
        insert_optional(&mut body, "name", &request.name);
        insert_optional(&mut body, "country", &request.country_code);

        Ok(self.build(Endpoint::CompanyEnrichment, &request.api_key, body))
    }

    pub fn contact(&self, request: &ContactRequest) -> Result<OutboundRequest> {
        request.validate()?;

        let mut body = Map::new();
        body.insert("email".to_string(), Value::from(request.email.as_str()));
        insert_optional(&mut body, "linkedin_url", &request.linkedin_url);
        insert_optional(&mut body, "first_name", &request.first_name);
        insert_optional(&mut body, "last_name", &request.last_name);

        Ok(self.build(Endpoint::ContactEnrichment, &request.api_key, body))
    }

    pub fn people_search(&self, request: &PeopleSearchRequest) -> Result<OutboundRequest> {
        request.validate()?;

        let mut body = Map::new();
        body.insert("q_keywords".to_string(), Value::from(request.query.as_str()));
        body.insert("page".to_string(), Value::from(1));
        body.insert("per_page".to_string(), Value::from(self.people_per_page));

        Ok(self.build(Endpoint::PeopleSearch, &request.api_key, body))
    }

    fn build(&self, endpoint: Endpoint, api_key: &str, body: Map<String, Value>) -> OutboundRequest {
        if !looks_like_api_key(api_key) {
            tracing::warn!("⚠️ API key looks too short; Apollo will probably reject it");
        }

        OutboundRequest {
            endpoint,
            url: format!("{}{}", self.base_url, endpoint.path()),
            headers: vec![
                ("Content-Type", "application/json".to_string()),
                ("Cache-Control", "no-cache".to_string()),
                (API_KEY_HEADER, api_key.to_string()),
            ],
            body: Value::Object(body),
        }
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_PEOPLE_PER_PAGE)
    }
}

fn insert_optional(body: &mut Map<String, Value>, key: &str, value: &Option<String>) {
    if let Some(value) = value {
        body.insert(key.to_string(), Value::from(value.as_str()));
    }
}
