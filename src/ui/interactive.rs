//! Interactive form loop.
//!
//! Each menu entry is one form: fill in the fields, submit, and the result (or a
//! single error message) is printed below. Errors never end the session; only
//! `q` or end of input does.

use std::io::{BufRead, Write};

use crate::core::enricher::{Enricher, Report};
use crate::core::{ContactRequest, EnrichmentApi, EnrichmentRequest, PeopleSearchRequest};
use crate::domain::model::non_blank;
use crate::utils::error::Result;

const MENU: &str = "\
Choose a form:
  1) 🏢 Company enrichment
  2) 👤 Contact enrichment
  3) 👥 People search (paid plan)
  k) 🔑 Change API key
  q) Quit";

pub struct InteractiveSession<'a, A: EnrichmentApi, R: BufRead, W: Write> {
    enricher: &'a Enricher<A>,
    input: R,
    output: W,
    api_key: Option<String>,
}

impl<'a, A: EnrichmentApi, R: BufRead, W: Write> InteractiveSession<'a, A, R, W> {
    pub fn new(enricher: &'a Enricher<A>, input: R, output: W, api_key: Option<String>) -> Self {
        Self {
            enricher,
            input,
            output,
            api_key: non_blank(api_key),
        }
    }

    /// 回傳本次 session 送出的表單數
    pub async fn run(&mut self) -> Result<usize> {
        writeln!(self.output, "🚀 Apollo Data Enrichment Tool")?;
        writeln!(self.output, "Required fields are marked with *; press Enter to skip optional ones.")?;

        if self.api_key.is_none() && !self.ask_api_key()? {
            return Ok(0);
        }

        let mut submitted = 0;
        loop {
            writeln!(self.output, "\n{}", MENU)?;
            let Some(choice) = self.prompt("> ")? else {
                break;
            };

            let report = match choice.as_str() {
                "1" => self.company_form().await?,
                "2" => self.contact_form().await?,
                "3" => self.people_form().await?,
                "k" | "K" => {
                    if !self.ask_api_key()? {
                        break;
                    }
                    continue;
                }
                "q" | "Q" => break,
                other => {
                    writeln!(self.output, "Invalid choice: {}. Enter 1, 2, 3, k or q.", other)?;
                    continue;
                }
            };

            match report {
                Some(report) => {
                    submitted += 1;
                    writeln!(self.output, "\n{}", report.text.trim_end())?;
                }
                None => break,
            }
        }

        writeln!(self.output, "👋 Bye")?;
        tracing::debug!("Interactive session ended after {} submissions", submitted);
        Ok(submitted)
    }

    fn ask_api_key(&mut self) -> Result<bool> {
        match self.prompt("🔑 Apollo API Key *: ")? {
            Some(key) => {
                self.api_key = non_blank(Some(key));
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn api_key(&self) -> &str {
        self.api_key.as_deref().unwrap_or("")
    }

    async fn company_form(&mut self) -> Result<Option<Report>> {
        let Some(domain) = self.prompt("🌐 Company Domain *: ")? else {
            return Ok(None);
        };
        let Some(linkedin_url) = self.prompt("💼 LinkedIn URL: ")? else {
            return Ok(None);
        };
        let Some(name) = self.prompt("🏢 Company Name: ")? else {
            return Ok(None);
        };
        let Some(country) = self.prompt("🌍 Country Code: ")? else {
            return Ok(None);
        };

        let request = EnrichmentRequest::new(&domain, self.api_key())
            .with_linkedin_url(Some(linkedin_url))
            .with_name(Some(name))
            .with_country_code(Some(country));
        Ok(Some(self.enricher.company_report(&request).await))
    }

    async fn contact_form(&mut self) -> Result<Option<Report>> {
        let Some(email) = self.prompt("📧 Email Address *: ")? else {
            return Ok(None);
        };
        let Some(linkedin_url) = self.prompt("💼 LinkedIn URL: ")? else {
            return Ok(None);
        };
        let Some(first_name) = self.prompt("👤 First Name: ")? else {
            return Ok(None);
        };
        let Some(last_name) = self.prompt("👤 Last Name: ")? else {
            return Ok(None);
        };

        let request = ContactRequest::new(&email, self.api_key())
            .with_linkedin_url(Some(linkedin_url))
            .with_first_name(Some(first_name))
            .with_last_name(Some(last_name));
        Ok(Some(self.enricher.contact_report(&request).await))
    }

    async fn people_form(&mut self) -> Result<Option<Report>> {
        let Some(query) = self.prompt("🔍 Search Query *: ")? else {
            return Ok(None);
        };

        let request = PeopleSearchRequest::new(&query, self.api_key());
        Ok(Some(self.enricher.people_report(&request).await))
    }

    /// 讀一行輸入；EOF 回傳 None
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        // 非 UTF-8 位元組以替代字元呈現，不中斷 session
        let mut line = Vec::new();
        let bytes = self.input.read_until(b'\n', &mut line)?;
        if bytes == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }
}
