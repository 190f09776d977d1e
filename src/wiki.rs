// src/wiki.rs
// THE KNOWLEDGE CODEX
// Fetches a subject's Wikipedia infobox (the summary box) as plain text.

use std::time::Duration;

use reqwest::blocking::Client;
use scraper::{Html, Selector};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::LookupError;

/// Where fact actions get their raw material from.
pub trait KnowledgeSource: Send + Sync {
    /// Cleaned text of the first infobox on the best page for `subject`.
    fn infobox_text(&self, subject: &str) -> Result<String, LookupError>;
}

#[derive(Deserialize)]
struct SearchResponse {
    query: SearchQuery,
}

#[derive(Deserialize)]
struct SearchQuery {
    search: Vec<SearchHit>,
}

#[derive(Deserialize)]
struct SearchHit {
    title: String,
}

pub struct WikiScout {
    client: Client,
    base_url: String,
}

impl WikiScout {
    /// `timeout` of `None` lets a slow lookup block indefinitely.
    pub fn new(
        base_url: &str,
        user_agent: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, LookupError> {
        // The blocking client defaults to 30 s; `None` must be passed to lift it.
        let client = Client::builder()
            .user_agent(user_agent.to_string())
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Title of the top search hit for `subject`.
    pub fn search(&self, subject: &str) -> Result<String, LookupError> {
        let response: SearchResponse = self
            .client
            .get(format!("{}/w/api.php", self.base_url))
            .query(&[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", subject),
                ("srlimit", "1"),
                ("format", "json"),
            ])
            .send()?
            .error_for_status()?
            .json()?;

        response
            .query
            .search
            .into_iter()
            .next()
            .map(|hit| hit.title)
            .ok_or_else(|| LookupError::NotFound {
                subject: subject.to_string(),
            })
    }

    pub fn page_html(&self, title: &str) -> Result<String, LookupError> {
        let url = format!(
            "{}/wiki/{}",
            self.base_url,
            urlencoding::encode(&title.replace(' ', "_"))
        );
        debug!(%url, "fetching page");
        Ok(self.client.get(url).send()?.error_for_status()?.text()?)
    }
}

impl KnowledgeSource for WikiScout {
    fn infobox_text(&self, subject: &str) -> Result<String, LookupError> {
        info!("📚 WIKI: Consulting the Codex for '{}'...", subject);
        let title = self.search(subject)?;
        let html = self.page_html(&title)?;

        match first_infobox_text(&html) {
            Some(text) => {
                info!("   -> Infobox acquired from '{}' ({} chars)", title, text.len());
                Ok(clean_text(&text))
            }
            None => {
                warn!("⚠️ WIKI: '{}' has no infobox", title);
                Err(LookupError::NoInfobox { title })
            }
        }
    }
}

/// Concatenated text of the first element with class `infobox`.
pub fn first_infobox_text(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(".infobox").ok()?;
    document
        .select(&selector)
        .next()
        .map(|infobox| infobox.text().collect())
}

/// Replaces anything outside printable ASCII with a space, then collapses
/// runs of spaces and runs of newlines.
pub fn clean_text(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    for c in text.chars() {
        let c = if c.is_ascii_graphic() || matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c') {
            c
        } else {
            ' '
        };
        if matches!(c, ' ' | '\n') && cleaned.ends_with(c) {
            continue;
        }
        cleaned.push(c);
    }
    cleaned
}
