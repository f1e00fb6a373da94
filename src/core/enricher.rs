use crate::core::renderer::{OutputFormat, Renderer};
use crate::core::{
    CompanyResult, ContactRequest, ContactResult, EnrichmentApi, EnrichmentRequest, PeopleResult,
    PeopleSearchRequest,
};
use crate::utils::error::{ErrorCategory, Result};
use crate::utils::validation::Validate;

/// 結果區要顯示的內容；失敗時帶錯誤分類
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub text: String,
    pub failure: Option<ErrorCategory>,
}

impl Report {
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }
}

pub struct Enricher<A: EnrichmentApi> {
    api: A,
    renderer: Renderer,
    format: OutputFormat,
}

impl<A: EnrichmentApi> Enricher<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            renderer: Renderer::default(),
            format: OutputFormat::Text,
        }
    }

    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    // 驗證一律在呼叫 API 之前完成
    pub async fn enrich_company(&self, request: &EnrichmentRequest) -> Result<CompanyResult> {
        request.validate()?;
        tracing::info!("🔍 Enriching company: {}", request.domain);
        let result = self.api.enrich_company(request).await?;
        tracing::info!("✅ Company enrichment completed for {}", request.domain);
        Ok(result)
    }

    pub async fn enrich_contact(&self, request: &ContactRequest) -> Result<ContactResult> {
        request.validate()?;
        tracing::debug!("🔍 Enriching contact: {}", request.email);
        let result = self.api.enrich_contact(request).await?;
        tracing::info!("✅ Contact enrichment completed");
        Ok(result)
    }

    pub async fn search_people(&self, request: &PeopleSearchRequest) -> Result<PeopleResult> {
        request.validate()?;
        tracing::debug!("🔍 Searching people: {}", request.query);
        let result = self.api.search_people(request).await?;
        tracing::info!("✅ People search returned {} records", result.people.len());
        Ok(result)
    }

    pub async fn company_report(&self, request: &EnrichmentRequest) -> Report {
        let outcome = self
            .enrich_company(request)
            .await
            .and_then(|result| self.renderer.company(&result, self.format));
        self.finish(outcome)
    }

    pub async fn contact_report(&self, request: &ContactRequest) -> Report {
        let outcome = self
            .enrich_contact(request)
            .await
            .and_then(|result| self.renderer.contact(&result, self.format));
        self.finish(outcome)
    }

    pub async fn people_report(&self, request: &PeopleSearchRequest) -> Report {
        let outcome = self
            .search_people(request)
            .await
            .and_then(|result| self.renderer.people(&result, self.format));
        self.finish(outcome)
    }

    fn finish(&self, outcome: Result<String>) -> Report {
        match outcome {
            Ok(text) => Report {
                text,
                failure: None,
            },
            Err(e) => {
                tracing::error!(
                    "❌ Enrichment failed: {} (Category: {:?})",
                    e,
                    e.category()
                );
                tracing::debug!("💡 Recovery suggestion: {}", e.recovery_suggestion());
                Report {
                    text: self.renderer.error(&e, self.format),
                    failure: Some(e.category()),
                }
            }
        }
    }
}
