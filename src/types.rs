//! Wire enumerations, defaults and JSON helpers shared across the crate.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Base URL of the Apple News API, used to build section links.
pub const DEFAULT_API_BASE: &str = "https://news-api.apple.com";

/// Remaining-quota level at or below which [`crate::Throttling::is_quota_low`] is true.
pub const DEFAULT_QUOTA_THRESHOLD: i64 = 10;

/// Warning code used when the API omits one.
pub const UNKNOWN_WARNING_CODE: &str = "UNKNOWN";

/// Parallax factor used by `Parallax::default()`.
pub const DEFAULT_PARALLAX_FACTOR: f64 = 0.9;

/// Returns the JSON type name for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Serialize an entity into a plain JSON tree.
///
/// Document entities only hold strings, numbers, booleans and string-keyed
/// maps, so conversion cannot fail in practice; `Null` is returned if it does.
pub(crate) fn to_json<T: Serialize + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

/// Processing state of a published article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArticleState {
    Processing,
    Live,
    ProcessingUpdate,
    TakenDown,
    FailedProcessing,
    FailedProcessingUpdate,
    Duplicate,
}

impl ArticleState {
    /// Parse a state from its wire string.
    ///
    /// Returns `None` for unknown values.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PROCESSING" => Some(ArticleState::Processing),
            "LIVE" => Some(ArticleState::Live),
            "PROCESSING_UPDATE" => Some(ArticleState::ProcessingUpdate),
            "TAKEN_DOWN" => Some(ArticleState::TakenDown),
            "FAILED_PROCESSING" => Some(ArticleState::FailedProcessing),
            "FAILED_PROCESSING_UPDATE" => Some(ArticleState::FailedProcessingUpdate),
            "DUPLICATE" => Some(ArticleState::Duplicate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleState::Processing => "PROCESSING",
            ArticleState::Live => "LIVE",
            ArticleState::ProcessingUpdate => "PROCESSING_UPDATE",
            ArticleState::TakenDown => "TAKEN_DOWN",
            ArticleState::FailedProcessing => "FAILED_PROCESSING",
            ArticleState::FailedProcessingUpdate => "FAILED_PROCESSING_UPDATE",
            ArticleState::Duplicate => "DUPLICATE",
        }
    }

    /// Readers can see the article (an update may still be processing).
    pub fn is_live(&self) -> bool {
        matches!(self, ArticleState::Live | ArticleState::ProcessingUpdate)
    }

    pub fn is_processing(&self) -> bool {
        matches!(
            self,
            ArticleState::Processing | ArticleState::ProcessingUpdate
        )
    }

    pub fn has_failed(&self) -> bool {
        matches!(
            self,
            ArticleState::FailedProcessing | ArticleState::FailedProcessingUpdate
        )
    }
}

/// Audience maturity rating for an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaturityRating {
    Kids,
    General,
    Mature,
}

impl MaturityRating {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "KIDS" => Some(MaturityRating::Kids),
            "GENERAL" => Some(MaturityRating::General),
            "MATURE" => Some(MaturityRating::Mature),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MaturityRating::Kids => "KIDS",
            MaturityRating::General => "GENERAL",
            MaturityRating::Mature => "MATURE",
        }
    }
}

/// Platform a condition matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Any,
    Ios,
    Macos,
}

impl Platform {
    pub const EXPECTED: &'static str = "any, ios, or macos";

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "any" => Some(Platform::Any),
            "ios" => Some(Platform::Ios),
            "macos" => Some(Platform::Macos),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Any => "any",
            Platform::Ios => "ios",
            Platform::Macos => "macos",
        }
    }
}

/// Horizontal or vertical size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeClass {
    Any,
    Compact,
    Regular,
}

impl SizeClass {
    pub const EXPECTED: &'static str = "any, compact, or regular";

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "any" => Some(SizeClass::Any),
            "compact" => Some(SizeClass::Compact),
            "regular" => Some(SizeClass::Regular),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SizeClass::Any => "any",
            SizeClass::Compact => "compact",
            SizeClass::Regular => "regular",
        }
    }
}

/// Reader's preferred color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    Any,
    Light,
    Dark,
}

impl ColorScheme {
    pub const EXPECTED: &'static str = "any, light, or dark";

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "any" => Some(ColorScheme::Any),
            "light" => Some(ColorScheme::Light),
            "dark" => Some(ColorScheme::Dark),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Any => "any",
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

/// Where the content is being viewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewLocation {
    Article,
    IssueTableOfContents,
    Issue,
}

impl ViewLocation {
    pub const EXPECTED: &'static str = "article, issue_table_of_contents, or issue";

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "article" => Some(ViewLocation::Article),
            "issue_table_of_contents" => Some(ViewLocation::IssueTableOfContents),
            "issue" => Some(ViewLocation::Issue),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewLocation::Article => "article",
            ViewLocation::IssueTableOfContents => "issue_table_of_contents",
            ViewLocation::Issue => "issue",
        }
    }
}

/// Reader subscription status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubscriptionStatus {
    Bundle,
    Subscribed,
}

impl SubscriptionStatus {
    pub const EXPECTED: &'static str = "bundle or subscribed";

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "bundle" => Some(SubscriptionStatus::Bundle),
            "subscribed" => Some(SubscriptionStatus::Subscribed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Bundle => "bundle",
            SubscriptionStatus::Subscribed => "subscribed",
        }
    }
}

impl From<Platform> for String {
    fn from(value: Platform) -> Self {
        value.as_str().to_string()
    }
}

impl From<SizeClass> for String {
    fn from(value: SizeClass) -> Self {
        value.as_str().to_string()
    }
}

impl From<ColorScheme> for String {
    fn from(value: ColorScheme) -> Self {
        value.as_str().to_string()
    }
}

impl From<ViewLocation> for String {
    fn from(value: ViewLocation) -> Self {
        value.as_str().to_string()
    }
}

impl From<SubscriptionStatus> for String {
    fn from(value: SubscriptionStatus) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_state_wire_values() {
        let all = [
            ArticleState::Processing,
            ArticleState::Live,
            ArticleState::ProcessingUpdate,
            ArticleState::TakenDown,
            ArticleState::FailedProcessing,
            ArticleState::FailedProcessingUpdate,
            ArticleState::Duplicate,
        ];
        for state in all {
            assert_eq!(ArticleState::parse(state.as_str()), Some(state));
            assert_eq!(
                serde_json::to_value(state).unwrap(),
                Value::String(state.as_str().to_string())
            );
        }
        assert_eq!(ArticleState::ProcessingUpdate.as_str(), "PROCESSING_UPDATE");
    }

    #[test]
    fn article_state_parse_invalid() {
        assert_eq!(ArticleState::parse("INVALID"), None);
        assert_eq!(ArticleState::parse("live"), None);
        assert_eq!(ArticleState::parse(""), None);
    }

    #[test]
    fn article_state_helpers() {
        assert!(ArticleState::Live.is_live());
        assert!(ArticleState::ProcessingUpdate.is_live());
        assert!(!ArticleState::Processing.is_live());
        assert!(!ArticleState::TakenDown.is_live());
        assert!(!ArticleState::Duplicate.is_live());

        assert!(ArticleState::Processing.is_processing());
        assert!(ArticleState::ProcessingUpdate.is_processing());
        assert!(!ArticleState::Live.is_processing());

        assert!(ArticleState::FailedProcessing.has_failed());
        assert!(ArticleState::FailedProcessingUpdate.has_failed());
        assert!(!ArticleState::Live.has_failed());
        assert!(!ArticleState::Duplicate.has_failed());
    }

    #[test]
    fn maturity_rating_wire_values() {
        assert_eq!(MaturityRating::Kids.as_str(), "KIDS");
        assert_eq!(MaturityRating::General.as_str(), "GENERAL");
        assert_eq!(MaturityRating::Mature.as_str(), "MATURE");
        assert_eq!(MaturityRating::parse("MATURE"), Some(MaturityRating::Mature));
        assert_eq!(MaturityRating::parse("INVALID"), None);
        assert_eq!(
            serde_json::to_value(MaturityRating::General).unwrap(),
            Value::String("GENERAL".into())
        );
    }

    #[test]
    fn condition_vocabularies_parse() {
        assert_eq!(Platform::parse("ios"), Some(Platform::Ios));
        assert_eq!(Platform::parse("iOS"), None);
        assert_eq!(SizeClass::parse("compact"), Some(SizeClass::Compact));
        assert_eq!(ColorScheme::parse("dark"), Some(ColorScheme::Dark));
        assert_eq!(
            ViewLocation::parse("issue_table_of_contents"),
            Some(ViewLocation::IssueTableOfContents)
        );
        assert_eq!(
            SubscriptionStatus::parse("subscribed"),
            Some(SubscriptionStatus::Subscribed)
        );
        assert_eq!(SubscriptionStatus::parse("free"), None);
    }

    #[test]
    fn vocabularies_convert_to_strings() {
        assert_eq!(String::from(Platform::Macos), "macos");
        assert_eq!(String::from(SizeClass::Regular), "regular");
        assert_eq!(String::from(ColorScheme::Light), "light");
        assert_eq!(String::from(ViewLocation::Issue), "issue");
        assert_eq!(String::from(SubscriptionStatus::Bundle), "bundle");
    }
}
