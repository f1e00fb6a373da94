use crate::core::renderer::{
    company_from_payload, contact_from_payload, parse_payload, people_from_payload,
};
use crate::core::request_builder::{Endpoint, OutboundRequest, RequestBuilder};
use crate::core::{
    CompanyResult, ConfigProvider, ContactRequest, ContactResult, EnrichmentApi,
    EnrichmentRequest, PeopleResult, PeopleSearchRequest,
};
use crate::utils::error::{EnrichError, Result};
use async_trait::async_trait;
use regex::Regex;
use reqwest::{Client, StatusCode};
use serde_json::{Map, Value};
use std::sync::LazyLock;
use std::time::Duration;

const PLAN_RESTRICTION_CODE: &str = "API_INACCESSIBLE";

// 只比對完整單字，"explanation"、"planned" 不算
static PLAN_HINT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(plans?|upgrade)\b").expect("plan hint pattern is a valid regex")
});

/// Apollo REST API 的 reqwest 實作
pub struct ApolloClient {
    client: Client,
    builder: RequestBuilder,
}

impl ApolloClient {
    pub fn new(builder: RequestBuilder, timeout_seconds: Option<u64>) -> Result<Self> {
        let mut client = Client::builder();
        if let Some(timeout) = timeout_seconds {
            client = client.timeout(Duration::from_secs(timeout));
        }

        Ok(Self {
            client: client.build()?,
            builder,
        })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Self::new(RequestBuilder::from_config(config), config.timeout_seconds())
    }

    /// 送出請求並回傳已解析的 JSON 物件；非 2xx 依狀態碼分類
    async fn execute(&self, request: OutboundRequest) -> Result<Map<String, Value>> {
        tracing::debug!(
            "📡 Calling {} endpoint: {}",
            request.endpoint.label(),
            request.url
        );

        let mut http = self.client.post(&request.url);
        for (key, value) in &request.headers {
            http = http.header(*key, value);
        }

        // header 先設好，json() 才不會重複加 Content-Type
        let response = http.json(&request.body).send().await?;
        let status = response.status();
        tracing::debug!("📡 {} response status: {}", request.endpoint.label(), status);

        let body = response.text().await?;

        if status.is_success() {
            return parse_payload(&body).inspect_err(|e| {
                tracing::error!("❌ Unreadable {} response: {}", request.endpoint.label(), e);
            });
        }

        let err = classify_failure(request.endpoint, status, &body);
        tracing::warn!("❌ {} failed: {}", request.endpoint.label(), err);
        Err(err)
    }
}

#[async_trait]
impl EnrichmentApi for ApolloClient {
    async fn enrich_company(&self, request: &EnrichmentRequest) -> Result<CompanyResult> {
        let outbound = self.builder.company(request)?;
        let payload = self.execute(outbound).await?;
        Ok(company_from_payload(&payload))
    }

    async fn enrich_contact(&self, request: &ContactRequest) -> Result<ContactResult> {
        let outbound = self.builder.contact(request)?;
        let payload = self.execute(outbound).await?;
        Ok(contact_from_payload(&payload))
    }

    async fn search_people(&self, request: &PeopleSearchRequest) -> Result<PeopleResult> {
        let outbound = self.builder.people_search(request)?;
        let payload = self.execute(outbound).await?;
        Ok(people_from_payload(&payload))
    }
}

/// 取出供應商的錯誤訊息：JSON 的 error/message 欄位，否則原文，再否則狀態碼說明
pub fn provider_message(status: StatusCode, body: &str) -> String {
    let from_json = serde_json::from_str::<Value>(body).ok().and_then(|value| {
        ["error", "message"]
            .iter()
            .find_map(|key| value.get(*key).and_then(Value::as_str).map(str::to_string))
    });

    from_json
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        })
}

/// error_code 為主要判斷；沒有時才看訊息裡有沒有 plan/upgrade 字樣
fn is_plan_restriction(body: &str, message: &str) -> bool {
    let error_code = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| value.get("error_code").and_then(Value::as_str).map(str::to_string));

    match error_code {
        Some(code) if code == PLAN_RESTRICTION_CODE => true,
        _ => PLAN_HINT_PATTERN.is_match(message),
    }
}

pub fn classify_failure(endpoint: Endpoint, status: StatusCode, body: &str) -> EnrichError {
    let message = provider_message(status, body);

    match status {
        StatusCode::UNAUTHORIZED => EnrichError::AuthenticationError { message },
        StatusCode::FORBIDDEN if is_plan_restriction(body, &message) => {
            EnrichError::PlanRestrictedError {
                feature: endpoint.label().to_string(),
                message,
            }
        }
        StatusCode::FORBIDDEN => EnrichError::AuthenticationError { message },
        _ => EnrichError::ApiStatusError {
            status: status.as_u16(),
            message,
        },
    }
}
