use crate::utils::error::Result;
use crate::utils::validation::{
    validate_country_code, validate_domain, validate_email, validate_linkedin_url,
    validate_required_input, Validate,
};
use serde::{Deserialize, Serialize};

/// 空白字串視為未填
pub fn non_blank<S: AsRef<str>>(value: Option<S>) -> Option<String> {
    value
        .map(|v| v.as_ref().trim().to_string())
        .filter(|v| !v.is_empty())
}

fn validate_api_key(api_key: &str) -> Result<()> {
    validate_required_input("api_key", api_key, "Please enter your Apollo API key")
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrichmentRequest {
    pub domain: String,
    pub linkedin_url: Option<String>,
    pub name: Option<String>,
    pub country_code: Option<String>,
    pub api_key: String,
}

impl EnrichmentRequest {
    pub fn new(domain: &str, api_key: &str) -> Self {
        Self {
            domain: domain.trim().to_string(),
            api_key: api_key.trim().to_string(),
            ..Default::default()
        }
    }

    pub fn with_linkedin_url<S: AsRef<str>>(mut self, url: Option<S>) -> Self {
        self.linkedin_url = non_blank(url);
        self
    }

    pub fn with_name<S: AsRef<str>>(mut self, name: Option<S>) -> Self {
        self.name = non_blank(name);
        self
    }

    pub fn with_country_code<S: AsRef<str>>(mut self, code: Option<S>) -> Self {
        self.country_code = non_blank(code).map(|c| c.to_ascii_uppercase());
        self
    }
}

impl Validate for EnrichmentRequest {
    fn validate(&self) -> Result<()> {
        validate_api_key(&self.api_key)?;
        validate_domain(&self.domain)?;
        if let Some(url) = &self.linkedin_url {
            validate_linkedin_url(url, "https://linkedin.com/company/example")?;
        }
        if let Some(code) = &self.country_code {
            validate_country_code(code)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRequest {
    pub email: String,
    pub linkedin_url: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub api_key: String,
}

impl ContactRequest {
    pub fn new(email: &str, api_key: &str) -> Self {
        Self {
            email: email.trim().to_string(),
            api_key: api_key.trim().to_string(),
            ..Default::default()
        }
    }

    pub fn with_linkedin_url<S: AsRef<str>>(mut self, url: Option<S>) -> Self {
        self.linkedin_url = non_blank(url);
        self
    }

    pub fn with_first_name<S: AsRef<str>>(mut self, name: Option<S>) -> Self {
        self.first_name = non_blank(name);
        self
    }

    pub fn with_last_name<S: AsRef<str>>(mut self, name: Option<S>) -> Self {
        self.last_name = non_blank(name);
        self
    }
}

impl Validate for ContactRequest {
    fn validate(&self) -> Result<()> {
        validate_api_key(&self.api_key)?;
        validate_email(&self.email)?;
        if let Some(url) = &self.linkedin_url {
            validate_linkedin_url(url, "https://linkedin.com/in/username")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeopleSearchRequest {
    pub query: String,
    pub api_key: String,
}

impl PeopleSearchRequest {
    pub fn new(query: &str, api_key: &str) -> Self {
        Self {
            query: query.trim().to_string(),
            api_key: api_key.trim().to_string(),
        }
    }
}

impl Validate for PeopleSearchRequest {
    fn validate(&self) -> Result<()> {
        validate_api_key(&self.api_key)?;
        validate_required_input("query", &self.query, "Search query is required")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyResult {
    pub name: Option<String>,
    pub domain: Option<String>,
    pub industry: Option<String>,
    pub size: Option<String>,
    pub location: Option<String>,
    pub founded_year: Option<String>,
    pub description: Option<String>,
    pub linkedin_url: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResult {
    pub name: Option<String>,
    pub email: Option<String>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub linkedin_url: Option<String>,
    pub phone: Option<String>,
    pub twitter_url: Option<String>,
    pub headline: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub name: Option<String>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub linkedin_url: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeopleResult {
    pub people: Vec<PersonRecord>,
    pub total_entries: Option<u64>,
}

impl PeopleResult {
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::EnrichError;

    #[test]
    fn test_optional_fields_are_trimmed_and_blank_dropped() {
        let request = EnrichmentRequest::new("  microsoft.com ", "key-1234567890")
            .with_linkedin_url(Some("   "))
            .with_name(Some(" Microsoft "))
            .with_country_code(Some("us"));

        assert_eq!(request.domain, "microsoft.com");
        assert_eq!(request.linkedin_url, None);
        assert_eq!(request.name.as_deref(), Some("Microsoft"));
        assert_eq!(request.country_code.as_deref(), Some("US"));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_domain_is_rejected() {
        let err = EnrichmentRequest::new("", "key-1234567890").validate().unwrap_err();
        assert!(matches!(err, EnrichError::ValidationError { ref field, .. } if field == "domain"));
    }

    #[test]
    fn test_missing_api_key_is_rejected_first() {
        let err = EnrichmentRequest::new("", "  ").validate().unwrap_err();
        assert!(matches!(err, EnrichError::ValidationError { ref field, .. } if field == "api_key"));

        let err = PeopleSearchRequest::new("software engineer", "").validate().unwrap_err();
        assert_eq!(err.user_friendly_message(), "Error: Please enter your Apollo API key");
    }

    #[test]
    fn test_invalid_company_linkedin_url_is_rejected() {
        let request = EnrichmentRequest::new("microsoft.com", "key-1234567890")
            .with_linkedin_url(Some("https://twitter.com/microsoft"));
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_contact_request_validation() {
        assert!(ContactRequest::new("jane@example.com", "key-1234567890")
            .with_linkedin_url(Some("https://linkedin.com/in/jane"))
            .validate()
            .is_ok());
        assert!(ContactRequest::new("not-an-email", "key-1234567890")
            .validate()
            .is_err());
    }

    #[test]
    fn test_empty_query_is_rejected() {
        let err = PeopleSearchRequest::new("   ", "key-1234567890").validate().unwrap_err();
        assert_eq!(err.user_friendly_message(), "Error: Search query is required");
    }
}
