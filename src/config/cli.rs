use crate::config::settings::Settings;
use crate::config::toml_config::TomlConfig;
use crate::core::renderer::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "apollo-enrich", version)]
#[command(about = "Enrich company and contact data using the Apollo API")]
pub struct CliConfig {
    /// Apollo API key
    #[arg(long, env = "APOLLO_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Optional TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the Apollo API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout; the HTTP client default applies when unset
    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Enrich a company by its website domain.
    Company(CompanyArgs),
    /// Enrich a contact by e-mail address.
    Contact(ContactArgs),
    /// Search people by free-text keywords (requires a paid Apollo plan).
    People(PeopleArgs),
    /// Fill in the forms interactively, one request at a time.
    Interactive,
}

#[derive(Debug, Clone, clap::Args)]
pub struct CompanyArgs {
    /// Company website domain, e.g. example.com
    #[arg(long)]
    pub domain: String,

    #[arg(long)]
    pub linkedin_url: Option<String>,

    /// Company name
    #[arg(long)]
    pub name: Option<String>,

    /// Two-letter country code (US, UK, CA, ...)
    #[arg(long)]
    pub country: Option<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ContactArgs {
    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub linkedin_url: Option<String>,

    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct PeopleArgs {
    /// Search keywords, e.g. "software engineer"
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,
}

impl PeopleArgs {
    pub fn query(&self) -> String {
        self.query.join(" ")
    }
}

impl CliConfig {
    /// 設定檔 → 命令列 / 環境變數，依序覆寫
    pub fn settings(&self) -> Result<Settings> {
        let file_config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        let settings = Settings::from_toml(&file_config)
            .with_base_url(self.base_url.as_deref())
            .with_api_key(self.api_key.as_deref())
            .with_timeout_seconds(self.timeout_seconds);

        settings.validate()?;
        Ok(settings)
    }
}
