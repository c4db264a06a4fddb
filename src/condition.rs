//! Device and context predicates attached to conditional overrides.
//!
//! A [`Condition`] only describes the viewing context; Apple News evaluates it.
//! Several conditions in one list must all match for the override to apply.
//!
//! ```
//! use apple_news::{Condition, SizeClass};
//! use serde_json::json;
//!
//! let condition = Condition::new()
//!     .horizontal_size_class(SizeClass::Compact)
//!     .max_viewport_width(500);
//!
//! assert_eq!(
//!     serde_json::to_value(&condition).unwrap(),
//!     json!({ "maxViewportWidth": 500, "horizontalSizeClass": "compact" })
//! );
//! ```

use serde::Serialize;

use crate::error::ValueError;
use crate::types::{ColorScheme, Platform, SizeClass, SubscriptionStatus, ViewLocation};

/// A set of constraints on the viewing context.
///
/// Every field is optional; an empty condition serializes to `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(skip_serializing_if = "Option::is_none")]
    platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_columns: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_columns: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_content_size_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_content_size_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_viewport_aspect_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_viewport_aspect_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_viewport_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_viewport_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_specified_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_specified_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    horizontal_size_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vertical_size_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subscription_status: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    view_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    preferred_color_scheme: Option<String>,
}

impl Condition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Match only iOS devices.
    pub fn ios() -> Self {
        Self::new().platform(Platform::Ios)
    }

    /// Match only macOS.
    pub fn macos() -> Self {
        Self::new().platform(Platform::Macos)
    }

    /// Match a compact horizontal size class (iPhone portrait, split view).
    pub fn compact_width() -> Self {
        Self::new().horizontal_size_class(SizeClass::Compact)
    }

    pub fn regular_width() -> Self {
        Self::new().horizontal_size_class(SizeClass::Regular)
    }

    pub fn dark_mode() -> Self {
        Self::new().preferred_color_scheme(ColorScheme::Dark)
    }

    pub fn light_mode() -> Self {
        Self::new().preferred_color_scheme(ColorScheme::Light)
    }

    /// Match a viewport width range; either bound may be left open.
    pub fn viewport_width(min: Option<u32>, max: Option<u32>) -> Self {
        let mut condition = Self::new();
        condition.min_viewport_width = min;
        condition.max_viewport_width = max;
        condition
    }

    /// Set the platform. Any string is accepted; see [`Condition::try_platform`].
    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub fn max_columns(mut self, columns: u32) -> Self {
        self.max_columns = Some(columns);
        self
    }

    pub fn min_columns(mut self, columns: u32) -> Self {
        self.min_columns = Some(columns);
        self
    }

    pub fn max_content_size_category(mut self, category: impl Into<String>) -> Self {
        self.max_content_size_category = Some(category.into());
        self
    }

    pub fn min_content_size_category(mut self, category: impl Into<String>) -> Self {
        self.min_content_size_category = Some(category.into());
        self
    }

    /// Aspect ratio is width divided by height.
    pub fn max_viewport_aspect_ratio(mut self, ratio: f64) -> Self {
        self.max_viewport_aspect_ratio = Some(ratio);
        self
    }

    pub fn min_viewport_aspect_ratio(mut self, ratio: f64) -> Self {
        self.min_viewport_aspect_ratio = Some(ratio);
        self
    }

    /// Width in points.
    pub fn max_viewport_width(mut self, width: u32) -> Self {
        self.max_viewport_width = Some(width);
        self
    }

    pub fn min_viewport_width(mut self, width: u32) -> Self {
        self.min_viewport_width = Some(width);
        self
    }

    pub fn max_specified_width(mut self, width: u32) -> Self {
        self.max_specified_width = Some(width);
        self
    }

    pub fn min_specified_width(mut self, width: u32) -> Self {
        self.min_specified_width = Some(width);
        self
    }

    pub fn horizontal_size_class(mut self, size_class: impl Into<String>) -> Self {
        self.horizontal_size_class = Some(size_class.into());
        self
    }

    pub fn vertical_size_class(mut self, size_class: impl Into<String>) -> Self {
        self.vertical_size_class = Some(size_class.into());
        self
    }

    /// Replace the subscription status list.
    pub fn subscription_status<I, S>(mut self, statuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subscription_status = Some(statuses.into_iter().map(Into::into).collect());
        self
    }

    pub fn view_location(mut self, location: impl Into<String>) -> Self {
        self.view_location = Some(location.into());
        self
    }

    pub fn preferred_color_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.preferred_color_scheme = Some(scheme.into());
        self
    }

    // --- Strict setters ---

    /// Set the platform, rejecting values other than `any`, `ios`, `macos`.
    pub fn try_platform(self, platform: &str) -> Result<Self, ValueError> {
        let parsed = Platform::parse(platform)
            .ok_or_else(|| unknown("platform", platform, Platform::EXPECTED))?;
        Ok(self.platform(parsed))
    }

    pub fn try_horizontal_size_class(self, size_class: &str) -> Result<Self, ValueError> {
        let parsed = SizeClass::parse(size_class)
            .ok_or_else(|| unknown("horizontalSizeClass", size_class, SizeClass::EXPECTED))?;
        Ok(self.horizontal_size_class(parsed))
    }

    pub fn try_vertical_size_class(self, size_class: &str) -> Result<Self, ValueError> {
        let parsed = SizeClass::parse(size_class)
            .ok_or_else(|| unknown("verticalSizeClass", size_class, SizeClass::EXPECTED))?;
        Ok(self.vertical_size_class(parsed))
    }

    pub fn try_view_location(self, location: &str) -> Result<Self, ValueError> {
        let parsed = ViewLocation::parse(location)
            .ok_or_else(|| unknown("viewLocation", location, ViewLocation::EXPECTED))?;
        Ok(self.view_location(parsed))
    }

    pub fn try_preferred_color_scheme(self, scheme: &str) -> Result<Self, ValueError> {
        let parsed = ColorScheme::parse(scheme)
            .ok_or_else(|| unknown("preferredColorScheme", scheme, ColorScheme::EXPECTED))?;
        Ok(self.preferred_color_scheme(parsed))
    }

    /// Fails on the first unknown status; the condition is left untouched.
    pub fn try_subscription_status(self, statuses: &[&str]) -> Result<Self, ValueError> {
        let parsed = statuses
            .iter()
            .map(|s| {
                SubscriptionStatus::parse(s).ok_or_else(|| {
                    unknown("subscriptionStatus", s, SubscriptionStatus::EXPECTED)
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.subscription_status(parsed))
    }

    /// True when no field has been set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn unknown(field: &'static str, value: &str, expected: &'static str) -> ValueError {
    ValueError::UnknownValue {
        field,
        value: value.to_string(),
        expected,
    }
}
