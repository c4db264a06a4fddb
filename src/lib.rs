//! Apple News Format SDK
//!
//! Typed builders for Apple News Format (ANF) documents and typed records for
//! Apple News API responses.
//!
//! Every document entity is sparse: fields start unset, setters chain by
//! value, and serialization emits only the fields that were set, in Apple's
//! documented key order. `false`, `0` and `""` count as set.
//!
//! # Example
//!
//! ```
//! use apple_news::{
//!     AdvertisementAutoPlacement, AutoPlacement, Condition, Container, FlexibleSpacer,
//!     HorizontalStackDisplay, TextComponent,
//! };
//!
//! let header = Container::new()
//!     .content_display_object(&HorizontalStackDisplay::new())
//!     .add_component(TextComponent::title("Company"))
//!     .add_component(FlexibleSpacer::new())
//!     .add_component(TextComponent::caption("Menu"));
//!
//! let json = header.to_json();
//! assert_eq!(json["contentDisplay"]["type"], "horizontal_stack");
//! assert_eq!(json["components"][1]["role"], "flexible_spacer");
//!
//! let placement = AutoPlacement::new()
//!     .advertisement(AdvertisementAutoPlacement::with_frequency(10))
//!     .add_conditional(
//!         Condition::compact_width(),
//!         Some(AdvertisementAutoPlacement::disabled()),
//!     );
//! let json = serde_json::to_value(&placement).unwrap();
//! assert_eq!(json["advertisement"]["frequency"], 10);
//! assert_eq!(json["conditional"][0]["advertisement"]["enabled"], false);
//! ```
//!
//! # Conditionals
//!
//! | Type | Overrides |
//! |------|-----------|
//! | [`ConditionalComponent`] | hidden, anchor, layout, style |
//! | [`ConditionalContainer`] | component fields + contentDisplay |
//! | [`ConditionalComponentLayout`] | columns, margins, insets, widths |
//! | [`ConditionalComponentStyle`] | background, fill, border, opacity |
//! | [`ConditionalTextStyle`] | fonts, colors, alignment |
//! | [`ConditionalAutoPlacement`] | advertisement, enabled |
//!
//! Each serializes `conditions` first (omitted when empty), then its own
//! fields.
//!
//! # Responses
//!
//! ```
//! use apple_news::ArticleResponse;
//! use serde_json::json;
//!
//! let response = json!({
//!     "data": { "id": "a1", "state": "LIVE", "title": "Hello" },
//!     "meta": { "throttling": { "quotaAvailable": 3 } }
//! });
//! let article = ArticleResponse::from_api_response(&response).unwrap();
//! assert!(article.state.is_some_and(|s| s.is_live()));
//! assert!(article.throttling().is_some_and(|t| t.is_quota_low()));
//! ```

mod article_metadata;
mod behavior;
mod component;
mod condition;
mod conditional;
mod conditional_style;
mod display;
mod error;
mod loader;
mod metadata;
mod placement;
mod response;
mod types;

pub use article_metadata::ArticleMetadata;
pub use behavior::{Behavior, Parallax};
pub use component::{
    Component, ComponentProperties, Container, FlexibleSpacer, Photo, TextComponent,
};
pub use condition::Condition;
pub use conditional::{
    Conditional, ConditionalButton, ConditionalComponent, ConditionalComponentLayout,
    ConditionalContainer, ConditionalDivider, ConditionalSection, ConditionalText,
};
pub use conditional_style::{
    ConditionalComponentStyle, ConditionalComponentTextStyle, ConditionalDocumentStyle,
    ConditionalTableCellStyle, ConditionalTableRowStyle, ConditionalTextStyle,
    DARK_DOCUMENT_BACKGROUND, LIGHT_DOCUMENT_BACKGROUND,
};
pub use display::{CollectionDisplay, ContentDisplay, HorizontalStackDisplay};
pub use error::{ApiError, ApiFailure, ResponseError, ValueError, UNKNOWN_API_ERROR};
pub use loader::{load_json_str, load_response, load_response_str};
pub use metadata::{Issue, LinkedArticle, Metadata, CONTENT_GENERATION_AI};
pub use placement::{AdvertisementAutoPlacement, AutoPlacement, ConditionalAutoPlacement};
pub use response::{ArticleLinks, ArticleResponse, Meta, Throttling, Warning};
pub use types::{
    json_type_name, ArticleState, ColorScheme, MaturityRating, Platform, SizeClass,
    SubscriptionStatus, ViewLocation, DEFAULT_API_BASE, DEFAULT_PARALLAX_FACTOR,
    DEFAULT_QUOTA_THRESHOLD, UNKNOWN_WARNING_CODE,
};
