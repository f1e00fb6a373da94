use crate::config::toml_config::TomlConfig;
use crate::core::renderer::DEFAULT_PLACEHOLDER;
use crate::core::request_builder::{DEFAULT_BASE_URL, DEFAULT_PEOPLE_PER_PAGE};
use crate::core::ConfigProvider;
use crate::domain::model::non_blank;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_range, validate_url, Validate};

pub const MAX_PEOPLE_PER_PAGE: usize = 100;

/// 合併設定檔與命令列之後的最終設定
#[derive(Clone)]
pub struct Settings {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub people_per_page: usize,
    pub placeholder: String,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("timeout_seconds", &self.timeout_seconds)
            .field("people_per_page", &self.people_per_page)
            .field("placeholder", &self.placeholder)
            .finish()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout_seconds: None,
            people_per_page: DEFAULT_PEOPLE_PER_PAGE,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl Settings {
    pub fn from_toml(config: &TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            base_url: non_blank(config.api.base_url.as_deref()).unwrap_or(defaults.base_url),
            api_key: config.api_key().map(str::to_string),
            timeout_seconds: config.api.timeout_seconds,
            people_per_page: config.per_page().unwrap_or(defaults.people_per_page),
            placeholder: config
                .placeholder()
                .map(str::to_string)
                .unwrap_or(defaults.placeholder),
        }
    }

    // 以下覆寫只在有值時生效，命令列優先於設定檔

    pub fn with_base_url(mut self, base_url: Option<&str>) -> Self {
        if let Some(url) = non_blank(base_url) {
            self.base_url = url;
        }
        self
    }

    pub fn with_api_key(mut self, api_key: Option<&str>) -> Self {
        if let Some(key) = non_blank(api_key) {
            self.api_key = Some(key);
        }
        self
    }

    pub fn with_timeout_seconds(mut self, timeout_seconds: Option<u64>) -> Self {
        if timeout_seconds.is_some() {
            self.timeout_seconds = timeout_seconds;
        }
        self
    }

    /// 缺金鑰時回傳空字串，交給請求驗證報錯
    pub fn api_key_or_empty(&self) -> &str {
        self.api_key.as_deref().unwrap_or("")
    }
}

impl ConfigProvider for Settings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }

    fn people_per_page(&self) -> usize {
        self.people_per_page
    }

    fn placeholder(&self) -> &str {
        &self.placeholder
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("api.base_url", &self.base_url)?;
        validate_range(
            "search.per_page",
            self.people_per_page,
            1,
            MAX_PEOPLE_PER_PAGE,
        )?;
        if let Some(timeout) = self.timeout_seconds {
            validate_positive_number("api.timeout_seconds", timeout, 1)?;
        }
        Ok(())
    }
}
