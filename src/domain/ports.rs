use crate::domain::model::{
    CompanyResult, ContactRequest, ContactResult, EnrichmentRequest, PeopleResult,
    PeopleSearchRequest,
};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn timeout_seconds(&self) -> Option<u64>;
    fn people_per_page(&self) -> usize;
    fn placeholder(&self) -> &str;
}

/// 外部資料增補服務；每個方法對應一次對外 HTTP 呼叫
#[async_trait]
pub trait EnrichmentApi: Send + Sync {
    async fn enrich_company(&self, request: &EnrichmentRequest) -> Result<CompanyResult>;
    async fn enrich_contact(&self, request: &ContactRequest) -> Result<ContactResult>;
    async fn search_people(&self, request: &PeopleSearchRequest) -> Result<PeopleResult>;
}
