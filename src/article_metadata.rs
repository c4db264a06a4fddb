//! Request metadata sent alongside an article on create and update.

use serde::Serialize;
use serde_json::Value;

use crate::types::{to_json, MaturityRating, DEFAULT_API_BASE};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
struct SectionLinks {
    sections: Vec<String>,
}

fn section_links_is_empty(links: &SectionLinks) -> bool {
    links.sections.is_empty()
}

/// Publishing options for an article request.
///
/// Territory codes are trimmed and uppercased; both territories and
/// sections keep the first occurrence of each value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    is_sponsored: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_candidate_to_be_featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_preview: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    maturity_rating: Option<MaturityRating>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    target_territory_country_codes: Vec<String>,
    #[serde(skip_serializing_if = "section_links_is_empty")]
    links: SectionLinks,
}

impl ArticleMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_sponsored(mut self, sponsored: bool) -> Self {
        self.is_sponsored = Some(sponsored);
        self
    }

    pub fn is_candidate_to_be_featured(mut self, candidate: bool) -> Self {
        self.is_candidate_to_be_featured = Some(candidate);
        self
    }

    pub fn is_preview(mut self, preview: bool) -> Self {
        self.is_preview = Some(preview);
        self
    }

    pub fn is_hidden(mut self, hidden: bool) -> Self {
        self.is_hidden = Some(hidden);
        self
    }

    pub fn maturity_rating(mut self, rating: MaturityRating) -> Self {
        self.maturity_rating = Some(rating);
        self
    }

    pub fn add_target_territory(mut self, country_code: impl Into<String>) -> Self {
        let normalized = country_code.into().trim().to_uppercase();
        if !self.target_territory_country_codes.contains(&normalized) {
            self.target_territory_country_codes.push(normalized);
        }
        self
    }

    pub fn add_target_territories<S: Into<String>>(
        self,
        codes: impl IntoIterator<Item = S>,
    ) -> Self {
        codes
            .into_iter()
            .fold(self, |metadata, code| metadata.add_target_territory(code))
    }

    /// Replace all territories.
    pub fn set_target_territories<S: Into<String>>(
        mut self,
        codes: impl IntoIterator<Item = S>,
    ) -> Self {
        self.target_territory_country_codes.clear();
        self.add_target_territories(codes)
    }

    /// Add a full section URL, e.g. `https://news-api.apple.com/sections/{id}`.
    pub fn add_section(mut self, section_url: impl Into<String>) -> Self {
        let url = section_url.into();
        if !self.links.sections.contains(&url) {
            self.links.sections.push(url);
        }
        self
    }

    /// Add a section by ID against the production API.
    pub fn add_section_by_id(self, section_id: &str) -> Self {
        self.add_section_by_id_with_base(section_id, DEFAULT_API_BASE)
    }

    pub fn add_section_by_id_with_base(self, section_id: &str, api_base: &str) -> Self {
        let url = format!("{}/sections/{}", api_base.trim_end_matches('/'), section_id);
        self.add_section(url)
    }

    pub fn add_sections<S: Into<String>>(self, urls: impl IntoIterator<Item = S>) -> Self {
        urls.into_iter()
            .fold(self, |metadata, url| metadata.add_section(url))
    }

    /// Replace all sections.
    pub fn set_sections<S: Into<String>>(mut self, urls: impl IntoIterator<Item = S>) -> Self {
        self.links.sections.clear();
        self.add_sections(urls)
    }

    pub fn target_territories(&self) -> &[String] {
        &self.target_territory_country_codes
    }

    pub fn sections(&self) -> &[String] {
        &self.links.sections
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn to_json(&self) -> Value {
        to_json(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty() {
        let metadata = ArticleMetadata::new();
        assert!(metadata.is_empty());
        assert_eq!(metadata.to_json(), json!({}));
    }

    #[test]
    fn territories_normalized_and_deduplicated() {
        let metadata = ArticleMetadata::new()
            .add_target_territory("us")
            .add_target_territory("US")
            .add_target_territory(" gb ");
        assert_eq!(metadata.target_territories(), ["US", "GB"]);
    }

    #[test]
    fn territories_from_owned_strings() {
        let codes = vec![String::from("de"), String::from(" fr")];
        let metadata = ArticleMetadata::new()
            .add_target_territory(String::from("it"))
            .add_target_territories(codes);
        assert_eq!(metadata.target_territories(), ["IT", "DE", "FR"]);
    }

    #[test]
    fn set_territories_replaces() {
        let metadata = ArticleMetadata::new()
            .add_target_territories(["us", "ca"])
            .set_target_territories(["au", "AU"]);
        assert_eq!(metadata.target_territories(), ["AU"]);
    }

    #[test]
    fn section_by_id() {
        let metadata = ArticleMetadata::new()
            .add_section_by_id("abc")
            .add_section_by_id_with_base("def", "https://sandbox.example.com//");
        assert_eq!(
            metadata.sections(),
            [
                "https://news-api.apple.com/sections/abc",
                "https://sandbox.example.com/sections/def"
            ]
        );
    }

    #[test]
    fn sections_deduplicated_and_replaced() {
        let metadata = ArticleMetadata::new()
            .add_sections(["a", "b", "a"])
            .add_section("b");
        assert_eq!(metadata.sections(), ["a", "b"]);
        let metadata = metadata.set_sections(["c"]);
        assert_eq!(metadata.sections(), ["c"]);
    }

    #[test]
    fn serialized_shape() {
        let value = ArticleMetadata::new()
            .add_section_by_id("s1")
            .add_target_territory("us")
            .maturity_rating(MaturityRating::General)
            .is_hidden(false)
            .is_preview(true)
            .is_candidate_to_be_featured(false)
            .is_sponsored(true)
            .to_json();
        assert_eq!(
            value,
            json!({
                "isSponsored": true,
                "isCandidateToBeFeatured": false,
                "isPreview": true,
                "isHidden": false,
                "maturityRating": "GENERAL",
                "targetTerritoryCountryCodes": ["US"],
                "links": { "sections": ["https://news-api.apple.com/sections/s1"] }
            })
        );
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys.first().map(|k| k.as_str()), Some("isSponsored"));
        assert_eq!(keys.last().map(|k| k.as_str()), Some("links"));
    }

    #[test]
    fn false_flag_is_not_empty() {
        assert!(!ArticleMetadata::new().is_hidden(false).is_empty());
    }
}
