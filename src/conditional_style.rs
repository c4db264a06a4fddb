//! Conditional overrides for styles: component, text, document and table.

use serde::Serialize;
use serde_json::Value;

use crate::condition::Condition;
use crate::conditional::Conditional;

/// Document background used by [`ConditionalDocumentStyle::dark_mode_default`].
pub const DARK_DOCUMENT_BACKGROUND: &str = "#1C1C1E";
/// Document background used by [`ConditionalDocumentStyle::light_mode_default`].
pub const LIGHT_DOCUMENT_BACKGROUND: &str = "#FFFFFF";

/// Component style overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalComponentStyle {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    conditions: Vec<Condition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fill: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    border: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    shadow: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mask: Option<Value>,
}

impl ConditionalComponentStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dark_mode(background_color: impl Into<String>) -> Self {
        Self::new()
            .add_condition(Condition::dark_mode())
            .background_color(background_color)
    }

    pub fn light_mode(background_color: impl Into<String>) -> Self {
        Self::new()
            .add_condition(Condition::light_mode())
            .background_color(background_color)
    }

    pub fn add_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn fill(mut self, fill: Value) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn border(mut self, border: Value) -> Self {
        self.border = Some(border);
        self
    }

    pub fn shadow(mut self, shadow: Value) -> Self {
        self.shadow = Some(shadow);
        self
    }

    /// Clamped to `0.0..=1.0`; NaN becomes fully opaque.
    pub fn opacity(mut self, opacity: f64) -> Self {
        let opacity = if opacity.is_nan() {
            1.0
        } else {
            opacity.clamp(0.0, 1.0)
        };
        self.opacity = Some(opacity);
        self
    }

    pub fn mask(mut self, mask: Value) -> Self {
        self.mask = Some(mask);
        self
    }
}

impl Conditional for ConditionalComponentStyle {
    fn conditions(&self) -> &[Condition] {
        &self.conditions
    }
}

/// Text style overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalTextStyle {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    conditions: Vec<Condition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    font_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    font_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    font_weight: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    font_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    font_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tracking: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text_alignment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text_shadow: Option<Value>,
}

/// Component text style overrides share the text style shape.
pub type ConditionalComponentTextStyle = ConditionalTextStyle;

impl ConditionalTextStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dark_mode(text_color: impl Into<String>) -> Self {
        Self::new()
            .add_condition(Condition::dark_mode())
            .text_color(text_color)
    }

    pub fn light_mode(text_color: impl Into<String>) -> Self {
        Self::new()
            .add_condition(Condition::light_mode())
            .text_color(text_color)
    }

    /// Use a different font size on compact-width displays.
    pub fn compact_size(font_size: u32) -> Self {
        Self::new()
            .add_condition(Condition::compact_width())
            .font_size(font_size)
    }

    pub fn add_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = Some(color.into());
        self
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn font_name(mut self, font_name: impl Into<String>) -> Self {
        self.font_name = Some(font_name.into());
        self
    }

    pub fn font_size(mut self, size: u32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn font_weight(mut self, weight: u32) -> Self {
        self.font_weight = Some(weight);
        self
    }

    pub fn font_width(mut self, width: impl Into<String>) -> Self {
        self.font_width = Some(width.into());
        self
    }

    pub fn font_style(mut self, style: impl Into<String>) -> Self {
        self.font_style = Some(style.into());
        self
    }

    pub fn line_height(mut self, height: f64) -> Self {
        self.line_height = Some(height);
        self
    }

    pub fn tracking(mut self, tracking: f64) -> Self {
        self.tracking = Some(tracking);
        self
    }

    pub fn text_alignment(mut self, alignment: impl Into<String>) -> Self {
        self.text_alignment = Some(alignment.into());
        self
    }

    pub fn text_shadow(mut self, shadow: Value) -> Self {
        self.text_shadow = Some(shadow);
        self
    }
}

impl Conditional for ConditionalTextStyle {
    fn conditions(&self) -> &[Condition] {
        &self.conditions
    }
}

/// Document-level style overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalDocumentStyle {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    conditions: Vec<Condition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    background_color: Option<String>,
}

impl ConditionalDocumentStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dark_mode(background_color: impl Into<String>) -> Self {
        Self::new()
            .add_condition(Condition::dark_mode())
            .background_color(background_color)
    }

    pub fn dark_mode_default() -> Self {
        Self::dark_mode(DARK_DOCUMENT_BACKGROUND)
    }

    pub fn light_mode(background_color: impl Into<String>) -> Self {
        Self::new()
            .add_condition(Condition::light_mode())
            .background_color(background_color)
    }

    pub fn light_mode_default() -> Self {
        Self::light_mode(LIGHT_DOCUMENT_BACKGROUND)
    }

    pub fn add_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }
}

impl Conditional for ConditionalDocumentStyle {
    fn conditions(&self) -> &[Condition] {
        &self.conditions
    }
}

/// Table row style overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalTableRowStyle {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    conditions: Vec<Condition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    divider: Option<Value>,
}

impl ConditionalTableRowStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dark_mode(background_color: impl Into<String>) -> Self {
        Self::new()
            .add_condition(Condition::dark_mode())
            .background_color(background_color)
    }

    pub fn add_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn divider(mut self, divider: Value) -> Self {
        self.divider = Some(divider);
        self
    }
}

impl Conditional for ConditionalTableRowStyle {
    fn conditions(&self) -> &[Condition] {
        &self.conditions
    }
}

/// Table cell style overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalTableCellStyle {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    conditions: Vec<Condition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    horizontal_alignment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vertical_alignment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    padding: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    minimum_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    width: Option<u32>,
}

impl ConditionalTableCellStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dark mode cell colors; the text color is optional.
    pub fn dark_mode(background_color: impl Into<String>, text_color: Option<&str>) -> Self {
        let style = Self::new()
            .add_condition(Condition::dark_mode())
            .background_color(background_color);
        match text_color {
            Some(color) => style.text_color(color),
            None => style,
        }
    }

    pub fn add_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = Some(color.into());
        self
    }

    pub fn horizontal_alignment(mut self, alignment: impl Into<String>) -> Self {
        self.horizontal_alignment = Some(alignment.into());
        self
    }

    pub fn vertical_alignment(mut self, alignment: impl Into<String>) -> Self {
        self.vertical_alignment = Some(alignment.into());
        self
    }

    /// A number of points or a per-side object.
    pub fn padding(mut self, padding: impl Into<Value>) -> Self {
        self.padding = Some(padding.into());
        self
    }

    pub fn minimum_width(mut self, width: u32) -> Self {
        self.minimum_width = Some(width);
        self
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }
}

impl Conditional for ConditionalTableCellStyle {
    fn conditions(&self) -> &[Condition] {
        &self.conditions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn component_style_opacity_is_clamped() {
        let high = ConditionalComponentStyle::new().opacity(1.7).to_json();
        assert_eq!(high["opacity"].as_f64(), Some(1.0));

        let low = ConditionalComponentStyle::new().opacity(-0.2).to_json();
        assert_eq!(low["opacity"].as_f64(), Some(0.0));

        let mid = ConditionalComponentStyle::new().opacity(0.4).to_json();
        assert_eq!(mid["opacity"].as_f64(), Some(0.4));

        let nan = ConditionalComponentStyle::new().opacity(f64::NAN).to_json();
        assert_eq!(nan["opacity"].as_f64(), Some(1.0));

        let infinite = ConditionalComponentStyle::new().opacity(f64::INFINITY).to_json();
        assert_eq!(infinite["opacity"].as_f64(), Some(1.0));
    }

    #[test]
    fn component_style_dark_and_light() {
        assert_eq!(
            ConditionalComponentStyle::dark_mode("#000000").to_json(),
            json!({
                "conditions": [{ "preferredColorScheme": "dark" }],
                "backgroundColor": "#000000"
            })
        );
        let light = ConditionalComponentStyle::light_mode("#FAFAFA").to_json();
        assert_eq!(light["conditions"][0]["preferredColorScheme"], "light");
    }

    #[test]
    fn component_style_objects_pass_through() {
        let value = ConditionalComponentStyle::new()
            .border(json!({ "all": { "width": 1, "color": "#333" } }))
            .fill(json!({ "type": "linear_gradient" }))
            .to_json();
        assert_eq!(value["border"]["all"]["width"], 1);
        assert_eq!(value["fill"]["type"], "linear_gradient");
    }

    #[test]
    fn text_style_factories() {
        let dark = ConditionalTextStyle::dark_mode("#FFFFFF").to_json();
        assert_eq!(dark["textColor"], "#FFFFFF");
        assert_eq!(dark["conditions"][0]["preferredColorScheme"], "dark");

        let compact = ConditionalTextStyle::compact_size(14).to_json();
        assert_eq!(compact["fontSize"], 14);
        assert_eq!(compact["conditions"][0]["horizontalSizeClass"], "compact");
    }

    #[test]
    fn text_style_numeric_types_preserved() {
        let value = ConditionalComponentTextStyle::new()
            .font_weight(700)
            .line_height(24.0)
            .tracking(0.05)
            .to_json();
        assert!(value["fontWeight"].is_u64());
        assert!(value["lineHeight"].is_f64());
        assert_eq!(value["tracking"].as_f64(), Some(0.05));
    }

    #[test]
    fn document_style_defaults() {
        assert_eq!(
            ConditionalDocumentStyle::dark_mode_default().to_json()["backgroundColor"],
            DARK_DOCUMENT_BACKGROUND
        );
        assert_eq!(
            ConditionalDocumentStyle::light_mode_default().to_json()["backgroundColor"],
            LIGHT_DOCUMENT_BACKGROUND
        );
        assert!(!ConditionalDocumentStyle::new().has_conditions());
    }

    #[test]
    fn table_row_style() {
        let value = ConditionalTableRowStyle::new()
            .add_condition(Condition::dark_mode())
            .background_color("#2C2C2E")
            .height(48)
            .divider(json!({ "color": "#444444", "width": 1 }))
            .to_json();
        assert_eq!(value["backgroundColor"], "#2C2C2E");
        assert_eq!(value["height"], 48);
        assert_eq!(value["divider"]["color"], "#444444");

        let dark = ConditionalTableRowStyle::dark_mode("#1C1C1E").to_json();
        assert_eq!(dark["conditions"][0]["preferredColorScheme"], "dark");
    }

    #[test]
    fn table_cell_style() {
        let value = ConditionalTableCellStyle::new()
            .add_condition(Condition::dark_mode())
            .background_color("#2C2C2E")
            .text_color("#FFFFFF")
            .horizontal_alignment("center")
            .vertical_alignment("middle")
            .padding(json!({ "top": 8, "bottom": 8 }))
            .minimum_width(100)
            .width(200)
            .to_json();
        assert_eq!(value["horizontalAlignment"], "center");
        assert_eq!(value["verticalAlignment"], "middle");
        assert_eq!(value["padding"], json!({ "top": 8, "bottom": 8 }));
        assert_eq!(value["minimumWidth"], 100);
        assert_eq!(value["width"], 200);
    }

    #[test]
    fn table_cell_dark_mode_optional_text() {
        let with_text = ConditionalTableCellStyle::dark_mode("#1C1C1E", Some("#FFFFFF")).to_json();
        assert_eq!(with_text["textColor"], "#FFFFFF");

        let without = ConditionalTableCellStyle::dark_mode("#1C1C1E", None).to_json();
        assert!(without.get("textColor").is_none());
    }
}
