//! Automatic placement of advertisements within an article.

use serde::Serialize;

use crate::condition::Condition;
use crate::conditional::Conditional;

/// Advertisement auto-placement settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvertisementAutoPlacement {
    #[serde(skip_serializing_if = "Option::is_none")]
    banner_type: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    distance_from_media: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    frequency: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    layout: Option<String>,
}

impl AdvertisementAutoPlacement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn disabled() -> Self {
        Self::new().enabled(false)
    }

    /// Enabled, with an ad every `frequency` components.
    pub fn with_frequency(frequency: u32) -> Self {
        Self::new().enabled(true).frequency(frequency)
    }

    pub fn banner_type(mut self, banner_type: bool) -> Self {
        self.banner_type = Some(banner_type);
        self
    }

    pub fn distance_from_media(mut self, distance: u32) -> Self {
        self.distance_from_media = Some(distance);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn frequency(mut self, frequency: u32) -> Self {
        self.frequency = Some(frequency);
        self
    }

    pub fn layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = Some(layout.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn advertisement_is_empty(advertisement: &Option<AdvertisementAutoPlacement>) -> bool {
    advertisement.as_ref().map_or(true, |a| a.is_empty())
}

/// Auto-placement overrides applied when conditions match.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalAutoPlacement {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    conditions: Vec<Condition>,
    #[serde(skip_serializing_if = "advertisement_is_empty")]
    advertisement: Option<AdvertisementAutoPlacement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enabled: Option<bool>,
}

impl ConditionalAutoPlacement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn advertisements off on compact-width displays.
    pub fn disable_on_compact() -> Self {
        Self::new()
            .add_condition(Condition::compact_width())
            .advertisement(AdvertisementAutoPlacement::disabled())
    }

    pub fn add_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn advertisement(mut self, advertisement: AdvertisementAutoPlacement) -> Self {
        self.advertisement = Some(advertisement);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }
}

impl Conditional for ConditionalAutoPlacement {
    fn conditions(&self) -> &[Condition] {
        &self.conditions
    }
}

/// Document-level auto-placement: a base advertisement configuration plus
/// conditional overrides, emitted as sibling keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoPlacement {
    #[serde(skip_serializing_if = "advertisement_is_empty")]
    advertisement: Option<AdvertisementAutoPlacement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    conditional: Option<Vec<ConditionalAutoPlacement>>,
}

impl AutoPlacement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ads_disabled() -> Self {
        Self::new().advertisement(AdvertisementAutoPlacement::disabled())
    }

    pub fn with_ad_frequency(frequency: u32) -> Self {
        Self::new().advertisement(AdvertisementAutoPlacement::with_frequency(frequency))
    }

    pub fn advertisement(mut self, advertisement: AdvertisementAutoPlacement) -> Self {
        self.advertisement = Some(advertisement);
        self
    }

    /// Replace the conditional list. An empty list is still emitted as `[]`.
    pub fn conditional(mut self, conditional: Vec<ConditionalAutoPlacement>) -> Self {
        self.conditional = Some(conditional);
        self
    }

    /// Append an override for a single condition.
    pub fn add_conditional(
        mut self,
        condition: Condition,
        advertisement: Option<AdvertisementAutoPlacement>,
    ) -> Self {
        let mut entry = ConditionalAutoPlacement::new().add_condition(condition);
        if let Some(advertisement) = advertisement {
            entry = entry.advertisement(advertisement);
        }
        self.conditional.get_or_insert_with(Vec::new).push(entry);
        self
    }

    pub fn is_empty(&self) -> bool {
        advertisement_is_empty(&self.advertisement) && self.conditional.is_none()
    }
}
