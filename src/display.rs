//! Typed content display configurations for containers and sections.

use serde::Serialize;

/// A content display that can be assigned to a container.
pub trait ContentDisplay: Serialize {
    /// The `type` value written to JSON.
    fn display_type(&self) -> &'static str;
}

/// Lays out child components in a single row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "horizontal_stack")]
pub struct HorizontalStackDisplay {}

impl HorizontalStackDisplay {
    pub fn new() -> Self {
        Self {}
    }
}

impl ContentDisplay for HorizontalStackDisplay {
    fn display_type(&self) -> &'static str {
        "horizontal_stack"
    }
}

/// Lays out child components in a wrapping grid.
///
/// Serializes with `type` first, then the fields that were set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "collection", rename_all = "camelCase")]
pub struct CollectionDisplay {
    #[serde(skip_serializing_if = "Option::is_none")]
    alignment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    distribution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    row_spacing: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gutter: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    variable_sizing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    widths: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    minimum_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    maximum_width: Option<u32>,
}

impl CollectionDisplay {
    pub const ALIGN_LEFT: &'static str = "left";
    pub const ALIGN_CENTER: &'static str = "center";
    pub const ALIGN_RIGHT: &'static str = "right";
    pub const DISTRIBUTE_WIDE: &'static str = "wide";
    pub const DISTRIBUTE_NARROW: &'static str = "narrow";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn centered() -> Self {
        Self::new().alignment(Self::ALIGN_CENTER)
    }

    pub fn grid(gutter: u32, row_spacing: u32) -> Self {
        Self::new().gutter(gutter).row_spacing(row_spacing)
    }

    /// A grid with 20pt gutters and row spacing.
    pub fn grid_default() -> Self {
        Self::grid(20, 20)
    }

    pub fn alignment(mut self, alignment: impl Into<String>) -> Self {
        self.alignment = Some(alignment.into());
        self
    }

    pub fn distribution(mut self, distribution: impl Into<String>) -> Self {
        self.distribution = Some(distribution.into());
        self
    }

    pub fn row_spacing(mut self, spacing: u32) -> Self {
        self.row_spacing = Some(spacing);
        self
    }

    pub fn gutter(mut self, gutter: u32) -> Self {
        self.gutter = Some(gutter);
        self
    }

    pub fn variable_sizing(mut self, variable: bool) -> Self {
        self.variable_sizing = Some(variable);
        self
    }

    pub fn widths(mut self, widths: u32) -> Self {
        self.widths = Some(widths);
        self
    }

    pub fn minimum_width(mut self, width: u32) -> Self {
        self.minimum_width = Some(width);
        self
    }

    pub fn maximum_width(mut self, width: u32) -> Self {
        self.maximum_width = Some(width);
        self
    }
}

impl ContentDisplay for CollectionDisplay {
    fn display_type(&self) -> &'static str {
        "collection"
    }
}
