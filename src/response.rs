//! Typed records mapped from Apple News API article responses.
//!
//! Mapping is null-tolerant: absent or mistyped optional fields become
//! `None`. Only a non-blank timestamp that fails to parse is an error.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde_json::{Map, Value};

use crate::error::ResponseError;
use crate::types::{json_type_name, ArticleState, DEFAULT_QUOTA_THRESHOLD, UNKNOWN_WARNING_CODE};

fn string_field(object: &Value, key: &str) -> Option<String> {
    object.get(key).and_then(Value::as_str).map(String::from)
}

fn bool_field(object: &Value, key: &str) -> Option<bool> {
    object.get(key).and_then(Value::as_bool)
}

/// Integer coercion for numeric fields the API may send as numbers,
/// numeric strings or booleans. Fractions are truncated.
fn int_field(object: &Value, key: &str) -> Option<i64> {
    match object.get(key)? {
        Value::Null => None,
        Value::Bool(b) => Some(i64::from(*b)),
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => {
            let s = s.trim();
            Some(
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().map(|f| f as i64))
                    .unwrap_or(0),
            )
        }
        other => {
            tracing::debug!(key, kind = json_type_name(other), "ignoring non-scalar integer field");
            None
        }
    }
}

/// Offset-less forms accepted alongside RFC 3339, read as UTC.
const NAIVE_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

fn timestamp_field(
    object: &Value,
    key: &'static str,
) -> Result<Option<DateTime<FixedOffset>>, ResponseError> {
    let text = match object.get(key).and_then(Value::as_str).map(str::trim) {
        Some(text) if !text.is_empty() => text,
        _ => return Ok(None),
    };
    match DateTime::parse_from_rfc3339(text) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(source) => NAIVE_TIMESTAMP_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
            .map(|naive| Some(naive.and_utc().fixed_offset()))
            .ok_or_else(|| ResponseError::InvalidTimestamp {
                field: key,
                value: text.to_string(),
                source,
            }),
    }
}

/// Rate-limit advisory data from `meta.throttling`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Throttling {
    pub estimated_delay_in_seconds: Option<i64>,
    pub queue_size: Option<i64>,
    pub quota_available: Option<i64>,
}

impl Throttling {
    pub fn from_value(value: &Value) -> Self {
        Self {
            estimated_delay_in_seconds: int_field(value, "estimatedDelayInSeconds"),
            queue_size: int_field(value, "queueSize"),
            quota_available: int_field(value, "quotaAvailable"),
        }
    }

    /// The API asked for a pause before the next request.
    pub fn should_delay(&self) -> bool {
        self.estimated_delay_in_seconds.map_or(false, |delay| delay > 0)
    }

    /// Remaining quota is at or below [`DEFAULT_QUOTA_THRESHOLD`].
    pub fn is_quota_low(&self) -> bool {
        self.is_quota_low_below(DEFAULT_QUOTA_THRESHOLD)
    }

    pub fn is_quota_low_below(&self, threshold: i64) -> bool {
        self.quota_available.map_or(false, |quota| quota <= threshold)
    }
}

/// The `meta` object of a response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Meta {
    pub throttling: Option<Throttling>,
}

impl Meta {
    pub fn from_value(value: &Value) -> Self {
        Self {
            throttling: value
                .get("throttling")
                .filter(|t| t.is_object())
                .map(Throttling::from_value),
        }
    }
}

/// The `links` object of a response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleLinks {
    pub channel: Option<String>,
    pub self_link: Option<String>,
    pub sections: Vec<String>,
}

impl ArticleLinks {
    pub fn from_value(value: &Value) -> Self {
        let sections = value
            .get("sections")
            .and_then(Value::as_array)
            .map(|s| s.iter().filter_map(Value::as_str).map(String::from).collect())
            .unwrap_or_default();
        Self {
            channel: string_field(value, "channel"),
            self_link: string_field(value, "self"),
            sections,
        }
    }
}

/// A non-fatal issue the API reported about a submitted article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// Warning code, or `"UNKNOWN"` when the API omitted it.
    pub code: String,
    pub key_path: Option<String>,
    pub message: Option<String>,
}

impl Warning {
    pub fn from_value(value: &Value) -> Self {
        Self {
            code: string_field(value, "code").unwrap_or_else(|| UNKNOWN_WARNING_CODE.to_string()),
            key_path: string_field(value, "keyPath"),
            message: string_field(value, "message"),
        }
    }

    /// Map every object entry of a warnings list; other entries are skipped.
    pub fn from_list(warnings: &[Value]) -> Vec<Self> {
        warnings
            .iter()
            .filter_map(|warning| {
                if warning.is_object() {
                    Some(Self::from_value(warning))
                } else {
                    tracing::warn!(kind = json_type_name(warning), "skipping malformed warning entry");
                    None
                }
            })
            .collect()
    }
}

/// An article as returned by create, read and update calls.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleResponse {
    pub id: String,
    pub kind: String,
    pub title: String,
    pub revision: String,
    pub state: Option<ArticleState>,
    pub share_url: Option<String>,
    pub created_at: Option<DateTime<FixedOffset>>,
    pub modified_at: Option<DateTime<FixedOffset>>,
    pub is_sponsored: Option<bool>,
    pub is_preview: Option<bool>,
    pub is_candidate_to_be_featured: Option<bool>,
    pub is_hidden: Option<bool>,
    pub maturity_rating: Option<String>,
    pub links: Option<ArticleLinks>,
    pub meta: Option<Meta>,
    pub warnings: Vec<Warning>,
    /// The article object exactly as received.
    pub raw_data: Map<String, Value>,
}

impl ArticleResponse {
    /// Map a decoded response body.
    ///
    /// Accepts `{data, links, meta}` or a bare article object. `links` and
    /// `meta` are read from the top level; everything else from `data`.
    ///
    /// # Errors
    ///
    /// Returns `ResponseError::NotAnObject` if `response` is not an object,
    /// or `ResponseError::InvalidTimestamp` if `createdAt` or `modifiedAt`
    /// is a non-blank string that is neither RFC 3339 nor an offset-less
    /// `YYYY-MM-DD HH:MM:SS`.
    pub fn from_api_response(response: &Value) -> Result<Self, ResponseError> {
        if !response.is_object() {
            return Err(ResponseError::NotAnObject {
                actual: json_type_name(response).to_string(),
            });
        }

        let data = response
            .get("data")
            .filter(|d| d.is_object())
            .unwrap_or(response);

        let state = match data.get("state").and_then(Value::as_str) {
            Some(raw) => {
                let parsed = ArticleState::parse(raw);
                if parsed.is_none() {
                    tracing::warn!(state = raw, "unknown article state");
                }
                parsed
            }
            None => None,
        };

        let links = response
            .get("links")
            .filter(|l| l.is_object())
            .map(ArticleLinks::from_value);
        let meta = response
            .get("meta")
            .filter(|m| m.is_object())
            .map(Meta::from_value);
        let warnings = data
            .get("warnings")
            .and_then(Value::as_array)
            .map(|w| Warning::from_list(w))
            .unwrap_or_default();

        let article = Self {
            id: string_field(data, "id").unwrap_or_default(),
            kind: string_field(data, "type").unwrap_or_else(|| "article".to_string()),
            title: string_field(data, "title").unwrap_or_default(),
            revision: string_field(data, "revision").unwrap_or_default(),
            state,
            share_url: string_field(data, "shareUrl"),
            created_at: timestamp_field(data, "createdAt")?,
            modified_at: timestamp_field(data, "modifiedAt")?,
            is_sponsored: bool_field(data, "isSponsored"),
            is_preview: bool_field(data, "isPreview"),
            is_candidate_to_be_featured: bool_field(data, "isCandidateToBeFeatured"),
            is_hidden: bool_field(data, "isHidden"),
            maturity_rating: string_field(data, "maturityRating"),
            links,
            meta,
            warnings,
            raw_data: data.as_object().cloned().unwrap_or_default(),
        };

        tracing::debug!(
            id = %article.id,
            state = article.state.map(|s| s.as_str()).unwrap_or("-"),
            warnings = article.warnings.len(),
            "mapped article response"
        );

        Ok(article)
    }

    pub fn throttling(&self) -> Option<&Throttling> {
        self.meta.as_ref().and_then(|m| m.throttling.as_ref())
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
