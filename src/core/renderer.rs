use crate::core::{CompanyResult, ContactResult, PeopleResult, PersonRecord};
use crate::utils::error::{EnrichError, Result};
use serde::Serialize;
use serde_json::{Map, Value};

pub const DEFAULT_PLACEHOLDER: &str = "N/A";

type Record = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// 解析回應本文；不是 JSON 物件就整個視為格式錯誤
pub fn parse_payload(body: &str) -> Result<Record> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| EnrichError::MalformedResponseError {
            message: format!("response is not valid JSON: {}", e),
        })?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(EnrichError::MalformedResponseError {
            message: format!("expected a JSON object, got {}", json_kind(&other)),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// 有外層 key 就取內層；key 存在但不是物件 (例如 null) 代表查無資料
fn envelope<'a>(payload: &'a Record, key: &str) -> Option<&'a Record> {
    match payload.get(key) {
        Some(Value::Object(inner)) => Some(inner),
        Some(_) => None,
        None => Some(payload),
    }
}

fn text_field(record: &Record, key: &str) -> Option<String> {
    match record.get(key)? {
        Value::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn first_text(record: &Record, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| text_field(record, key))
}

fn location(record: &Record) -> Option<String> {
    let parts: Vec<String> = ["city", "state", "country"]
        .iter()
        .filter_map(|key| text_field(record, key))
        .collect();
    (!parts.is_empty()).then(|| parts.join(", "))
}

fn person_name(record: &Record) -> Option<String> {
    text_field(record, "name").or_else(|| {
        let parts: Vec<String> = ["first_name", "last_name"]
            .iter()
            .filter_map(|key| text_field(record, key))
            .collect();
        (!parts.is_empty()).then(|| parts.join(" "))
    })
}

fn organization_name(record: &Record) -> Option<String> {
    record
        .get("organization")
        .and_then(Value::as_object)
        .and_then(|org| text_field(org, "name"))
        .or_else(|| text_field(record, "organization_name"))
}

fn first_phone(record: &Record) -> Option<String> {
    record
        .get("phone_numbers")
        .and_then(Value::as_array)
        .and_then(|numbers| numbers.iter().filter_map(Value::as_object).next())
        .and_then(|number| first_text(number, &["raw_number", "sanitized_number"]))
}

pub fn company_from_record(record: &Record) -> CompanyResult {
    CompanyResult {
        name: text_field(record, "name"),
        domain: first_text(record, &["primary_domain", "domain"]),
        industry: text_field(record, "industry"),
        size: text_field(record, "estimated_num_employees"),
        location: location(record),
        founded_year: text_field(record, "founded_year"),
        description: text_field(record, "short_description"),
        linkedin_url: text_field(record, "linkedin_url"),
        website: text_field(record, "website_url"),
    }
}

pub fn company_from_payload(payload: &Record) -> CompanyResult {
    envelope(payload, "organization")
        .map(company_from_record)
        .unwrap_or_default()
}

pub fn contact_from_payload(payload: &Record) -> ContactResult {
    envelope(payload, "person")
        .map(|record| ContactResult {
            name: person_name(record),
            email: text_field(record, "email"),
            title: text_field(record, "title"),
            company: organization_name(record),
            location: location(record),
            linkedin_url: text_field(record, "linkedin_url"),
            phone: first_phone(record),
            twitter_url: text_field(record, "twitter_url"),
            headline: text_field(record, "headline"),
        })
        .unwrap_or_default()
}

fn person_from_record(record: &Record) -> PersonRecord {
    PersonRecord {
        name: person_name(record),
        title: text_field(record, "title"),
        company: organization_name(record),
        email: text_field(record, "email"),
        linkedin_url: text_field(record, "linkedin_url"),
        location: location(record),
    }
}

/// people 在前、contacts 在後，保留 API 回傳順序
pub fn people_from_payload(payload: &Record) -> PeopleResult {
    let people = ["people", "contacts"]
        .iter()
        .filter_map(|key| payload.get(*key).and_then(Value::as_array))
        .flatten()
        .filter_map(Value::as_object)
        .map(person_from_record)
        .collect();

    let total_entries = payload
        .get("pagination")
        .and_then(|p| p.get("total_entries"))
        .and_then(Value::as_u64);

    PeopleResult {
        people,
        total_entries,
    }
}

#[derive(Debug, Clone)]
pub struct Renderer {
    placeholder: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEHOLDER)
    }
}

impl Renderer {
    pub fn new(placeholder: &str) -> Self {
        Self {
            placeholder: placeholder.to_string(),
        }
    }

    fn show<'a>(&'a self, value: &'a Option<String>) -> &'a str {
        value.as_deref().unwrap_or(self.placeholder.as_str())
    }

    pub fn company(&self, result: &CompanyResult, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => to_json(result),
            OutputFormat::Text => {
                let lines = [
                    ("Name", &result.name),
                    ("Domain", &result.domain),
                    ("Website", &result.website),
                    ("LinkedIn", &result.linkedin_url),
                    ("Industry", &result.industry),
                    ("Company Size", &result.size),
                    ("Location", &result.location),
                    ("Founded", &result.founded_year),
                    ("Description", &result.description),
                ];
                Ok(self.bullet_list(
                    "✅ Company data enriched successfully",
                    "📊 **Enriched Company Data:**",
                    &lines,
                ))
            }
        }
    }

    pub fn contact(&self, result: &ContactResult, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => to_json(result),
            OutputFormat::Text => {
                let lines = [
                    ("Name", &result.name),
                    ("Email", &result.email),
                    ("LinkedIn", &result.linkedin_url),
                    ("Title", &result.title),
                    ("Company", &result.company),
                    ("Location", &result.location),
                    ("Phone", &result.phone),
                    ("Twitter", &result.twitter_url),
                    ("Bio", &result.headline),
                ];
                Ok(self.bullet_list(
                    "✅ Contact data enriched successfully",
                    "👤 **Enriched Contact Data:**",
                    &lines,
                ))
            }
        }
    }

    pub fn people(&self, result: &PeopleResult, format: OutputFormat) -> Result<String> {
        if format == OutputFormat::Json {
            return to_json(result);
        }

        if result.is_empty() {
            return Ok("✅ People search completed\n\nNo people matched your query.\n".to_string());
        }

        let mut out = match result.total_entries {
            Some(total) => format!(
                "✅ Found {} people (showing {})\n\n",
                total,
                result.people.len()
            ),
            None => format!("✅ Found {} people\n\n", result.people.len()),
        };
        out.push_str("👥 **People Search Results:**\n");

        for (idx, person) in result.people.iter().enumerate() {
            out.push_str(&format!(
                "{}. **{}** - {} @ {}\n",
                idx + 1,
                self.show(&person.name),
                self.show(&person.title),
                self.show(&person.company)
            ));
            out.push_str(&format!(
                "   Email: {} | LinkedIn: {} | Location: {}\n",
                self.show(&person.email),
                self.show(&person.linkedin_url),
                self.show(&person.location)
            ));
        }

        Ok(out)
    }

    /// 錯誤只輸出一行訊息，不夾帶任何部分結果
    pub fn error(&self, err: &EnrichError, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => format!("❌ {}\n", err.user_friendly_message()),
            OutputFormat::Json => {
                format!("{:#}", serde_json::json!({ "error": err.user_friendly_message() }))
            }
        }
    }

    fn bullet_list(&self, status: &str, heading: &str, lines: &[(&str, &Option<String>)]) -> String {
        let mut out = format!("{}\n\n{}\n", status, heading);
        for (label, value) in lines {
            out.push_str(&format!("• **{}:** {}\n", label, self.show(value)));
        }
        out
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
