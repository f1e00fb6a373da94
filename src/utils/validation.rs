use crate::utils::error::{EnrichError, Result};
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static DOMAIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?i)[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)*\.[a-z]{2,}$",
    )
    .expect("domain pattern is a valid regex")
});

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

static LINKEDIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(www\.)?linkedin\.com/(in|company)/[a-zA-Z0-9-]+/?$")
        .expect("linkedin pattern is a valid regex")
});

const MIN_API_KEY_LENGTH: usize = 10;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(EnrichError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(EnrichError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(EnrichError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(EnrichError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(EnrichError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// 必填欄位：空白也視為未填
pub fn validate_required_input(field_name: &str, value: &str, message: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EnrichError::validation(field_name, message));
    }
    Ok(())
}

pub fn validate_domain(domain: &str) -> Result<()> {
    validate_required_input("domain", domain, "Company domain is required")?;
    if !DOMAIN_PATTERN.is_match(domain.trim()) {
        return Err(EnrichError::validation(
            "domain",
            "Please enter a valid domain (e.g., example.com)",
        ));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<()> {
    validate_required_input("email", email, "Email address is required")?;
    if !EMAIL_PATTERN.is_match(email.trim()) {
        return Err(EnrichError::validation(
            "email",
            "Please enter a valid email address",
        ));
    }
    Ok(())
}

pub fn validate_linkedin_url(url: &str, example: &str) -> Result<()> {
    if !LINKEDIN_PATTERN.is_match(url.trim()) {
        return Err(EnrichError::validation(
            "linkedin_url",
            format!("Please enter a valid LinkedIn URL (e.g., {})", example),
        ));
    }
    Ok(())
}

pub fn validate_country_code(code: &str) -> Result<()> {
    let code = code.trim();
    if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(EnrichError::validation(
            "country_code",
            "Country code must be a two-letter code (e.g., US, UK, CA)",
        ));
    }
    Ok(())
}

/// 只做格式提示；金鑰是否有效由 Apollo 判斷
pub fn looks_like_api_key(api_key: &str) -> bool {
    api_key.trim().len() >= MIN_API_KEY_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api.base_url", "https://api.apollo.io/api/v1").is_ok());
        assert!(validate_url("api.base_url", "http://127.0.0.1:8080").is_ok());
        assert!(validate_url("api.base_url", "").is_err());
        assert!(validate_url("api.base_url", "invalid-url").is_err());
        assert!(validate_url("api.base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_domain() {
        assert!(validate_domain("microsoft.com").is_ok());
        assert!(validate_domain("bbc.co.uk").is_ok());
        assert!(validate_domain("my-company.io").is_ok());
        assert!(validate_domain("  apollo.io  ").is_ok());

        let err = validate_domain("").unwrap_err();
        assert_eq!(err.user_friendly_message(), "Error: Company domain is required");
        assert!(validate_domain("   ").is_err());
        assert!(validate_domain("localhost").is_err());
        assert!(validate_domain("https://example.com").is_err());
        assert!(validate_domain("-bad.com").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("john.doe@example.com").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("john.doe").is_err());
        assert!(validate_email("john@doe").is_err());
    }

    #[test]
    fn test_validate_linkedin_url() {
        let example = "https://linkedin.com/company/example";
        assert!(validate_linkedin_url("https://www.linkedin.com/company/microsoft", example).is_ok());
        assert!(validate_linkedin_url("http://linkedin.com/in/john-doe/", example).is_ok());
        assert!(validate_linkedin_url("https://linkedin.com/jobs/123", example).is_err());
        assert!(validate_linkedin_url("https://example.com/in/john", example).is_err());
    }

    #[test]
    fn test_validate_country_code() {
        assert!(validate_country_code("US").is_ok());
        assert!(validate_country_code("ca").is_ok());
        assert!(validate_country_code("USA").is_err());
        assert!(validate_country_code("1A").is_err());
    }

    #[test]
    fn test_validate_range_and_positive_number() {
        assert!(validate_range("search.per_page", 10, 1, 100).is_ok());
        assert!(validate_range("search.per_page", 0, 1, 100).is_err());
        assert!(validate_range("search.per_page", 101, 1, 100).is_err());
        assert!(validate_positive_number("api.timeout_seconds", 30, 1).is_ok());
        assert!(validate_positive_number("api.timeout_seconds", 0, 1).is_err());
    }

    #[test]
    fn test_looks_like_api_key() {
        assert!(looks_like_api_key("abcdefghij"));
        assert!(!looks_like_api_key("short"));
    }
}
