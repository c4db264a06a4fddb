//! Document metadata and magazine issue information.

use chrono::{DateTime, NaiveDate, SecondsFormat, TimeZone};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::types::to_json;

/// Content generation type for AI-generated articles.
pub const CONTENT_GENERATION_AI: &str = "AI";

fn format_datetime<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// Issue information for magazine and periodical content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    #[serde(skip_serializing_if = "Option::is_none")]
    issue_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    issue_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    issue_name: Option<String>,
}

impl Issue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an issue from a JSON object, taking the string fields present.
    pub fn from_value(value: &Value) -> Self {
        let field = |name: &str| value.get(name).and_then(Value::as_str).map(String::from);
        Self {
            issue_identifier: field("issueIdentifier"),
            issue_date: field("issueDate"),
            issue_name: field("issueName"),
        }
    }

    pub fn issue_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.issue_identifier = Some(identifier.into());
        self
    }

    /// Preformatted date, normally `YYYY-MM-DD`.
    pub fn issue_date(mut self, date: impl Into<String>) -> Self {
        self.issue_date = Some(date.into());
        self
    }

    pub fn issue_date_on(mut self, date: NaiveDate) -> Self {
        self.issue_date = Some(date.format("%Y-%m-%d").to_string());
        self
    }

    pub fn issue_name(mut self, name: impl Into<String>) -> Self {
        self.issue_name = Some(name.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.issue_identifier.is_none() && self.issue_date.is_none() && self.issue_name.is_none()
    }

    pub fn to_json(&self) -> Value {
        to_json(self)
    }
}

fn issue_is_empty(issue: &Option<Issue>) -> bool {
    issue.as_ref().map_or(true, Issue::is_empty)
}

fn campaign_data_is_empty(data: &Option<Map<String, Value>>) -> bool {
    data.as_ref().map_or(true, Map::is_empty)
}

/// A related article reference in `metadata.links`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkedArticle {
    #[serde(rename = "URL")]
    pub url: String,
    pub relationship: String,
}

/// Article metadata embedded in the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    authors: Vec<String>,
    #[serde(rename = "canonicalURL", skip_serializing_if = "Option::is_none")]
    canonical_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date_created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date_modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date_published: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generator_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generator_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generator_version: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    keywords: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    links: Vec<LinkedArticle>,
    #[serde(rename = "thumbnailURL", skip_serializing_if = "Option::is_none")]
    thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    transparent_toolbar: Option<bool>,
    #[serde(rename = "videoURL", skip_serializing_if = "Option::is_none")]
    video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content_generation_type: Option<String>,
    #[serde(skip_serializing_if = "campaign_data_is_empty")]
    campaign_data: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "issue_is_empty")]
    issue: Option<Issue>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_author(mut self, author: impl Into<String>) -> Self {
        self.authors.push(author.into());
        self
    }

    pub fn canonical_url(mut self, url: impl Into<String>) -> Self {
        self.canonical_url = Some(url.into());
        self
    }

    /// Preformatted ISO 8601 timestamp.
    pub fn date_created(mut self, date: impl Into<String>) -> Self {
        self.date_created = Some(date.into());
        self
    }

    pub fn date_created_at<Tz: TimeZone>(mut self, date: DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        self.date_created = Some(format_datetime(&date));
        self
    }

    pub fn date_modified(mut self, date: impl Into<String>) -> Self {
        self.date_modified = Some(date.into());
        self
    }

    pub fn date_modified_at<Tz: TimeZone>(mut self, date: DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        self.date_modified = Some(format_datetime(&date));
        self
    }

    pub fn date_published(mut self, date: impl Into<String>) -> Self {
        self.date_published = Some(date.into());
        self
    }

    pub fn date_published_at<Tz: TimeZone>(mut self, date: DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        self.date_published = Some(format_datetime(&date));
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    pub fn generator_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.generator_identifier = Some(identifier.into());
        self
    }

    pub fn generator_name(mut self, name: impl Into<String>) -> Self {
        self.generator_name = Some(name.into());
        self
    }

    pub fn generator_version(mut self, version: impl Into<String>) -> Self {
        self.generator_version = Some(version.into());
        self
    }

    pub fn add_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.push(keyword.into());
        self
    }

    pub fn add_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords.extend(keywords.into_iter().map(Into::into));
        self
    }

    pub fn add_linked_article(
        mut self,
        url: impl Into<String>,
        relationship: impl Into<String>,
    ) -> Self {
        self.links.push(LinkedArticle {
            url: url.into(),
            relationship: relationship.into(),
        });
        self
    }

    pub fn thumbnail_url(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }

    pub fn transparent_toolbar(mut self, transparent: bool) -> Self {
        self.transparent_toolbar = Some(transparent);
        self
    }

    pub fn video_url(mut self, url: impl Into<String>) -> Self {
        self.video_url = Some(url.into());
        self
    }

    pub fn content_generation_type(mut self, kind: impl Into<String>) -> Self {
        self.content_generation_type = Some(kind.into());
        self
    }

    /// Mark the article as AI-generated.
    pub fn as_ai_generated(self) -> Self {
        self.content_generation_type(CONTENT_GENERATION_AI)
    }

    /// Replace all campaign data with the given key/value lists.
    pub fn campaign_data<K, I, S>(mut self, data: impl IntoIterator<Item = (K, I)>) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let map = data
            .into_iter()
            .map(|(key, values)| {
                let values = values.into_iter().map(|v| Value::String(v.into())).collect();
                (key.into(), Value::Array(values))
            })
            .collect();
        self.campaign_data = Some(map);
        self
    }

    /// Merge values into one campaign data key, dropping duplicates.
    pub fn add_campaign_data<I, S>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self
            .campaign_data
            .get_or_insert_with(Map::new)
            .entry(key.into())
            .or_insert_with(|| Value::Array(Vec::new()));
        if !entry.is_array() {
            *entry = Value::Array(Vec::new());
        }
        if let Value::Array(existing) = entry {
            for value in values {
                let value = Value::String(value.into());
                if !existing.contains(&value) {
                    existing.push(value);
                }
            }
        }
        self
    }

    pub fn issue(mut self, issue: Issue) -> Self {
        self.issue = Some(issue);
        self
    }

    pub fn issue_from_value(self, value: &Value) -> Self {
        self.issue(Issue::from_value(value))
    }

    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn to_json(&self) -> Value {
        to_json(self)
    }
}
