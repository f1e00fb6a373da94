pub mod config;
pub mod core;
pub mod domain;
pub mod ui;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use config::{Settings, TomlConfig};

pub use core::{
    client::ApolloClient,
    enricher::{Enricher, Report},
    renderer::{OutputFormat, Renderer},
    request_builder::RequestBuilder,
};
pub use domain::model::{
    CompanyResult, ContactRequest, ContactResult, EnrichmentRequest, PeopleResult,
    PeopleSearchRequest, PersonRecord,
};
pub use utils::error::{EnrichError, ErrorCategory, Result};
