pub mod client;
pub mod enricher;
pub mod renderer;
pub mod request_builder;

pub use crate::domain::model::{
    CompanyResult, ContactRequest, ContactResult, EnrichmentRequest, PeopleResult,
    PeopleSearchRequest, PersonRecord,
};
pub use crate::domain::ports::{ConfigProvider, EnrichmentApi};
pub use crate::utils::error::Result;
