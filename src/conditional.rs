//! Conditional overrides for components and component layouts.
//!
//! A conditional pairs a list of [`Condition`]s with property overrides.
//! Serialized form: `conditions` first (omitted when empty), then the
//! overrides that were set, in declaration order.
//!
//! Richer conditionals (container, section, text, divider, button) embed a
//! [`ConditionalComponent`] and append their own keys after its keys.
//! No consistency checks are made between conditions and overrides.

use serde::Serialize;
use serde_json::Value;

use crate::condition::Condition;
use crate::display::ContentDisplay;
use crate::types::to_json;

/// Capabilities shared by every conditional override.
pub trait Conditional: Serialize {
    fn conditions(&self) -> &[Condition];

    /// True iff at least one condition was added, whatever overrides are set.
    fn has_conditions(&self) -> bool {
        !self.conditions().is_empty()
    }

    /// Serialize into a plain JSON tree.
    fn to_json(&self) -> Value {
        to_json(self)
    }
}

/// Overrides shared by all components.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalComponent {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    conditions: Vec<Condition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    anchor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    layout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    style: Option<String>,
}

impl ConditionalComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hide the component on compact-width displays.
    pub fn hidden_on_compact() -> Self {
        Self::new()
            .add_condition(Condition::compact_width())
            .hidden(true)
    }

    pub fn visible_on_regular() -> Self {
        Self::new()
            .add_condition(Condition::regular_width())
            .hidden(false)
    }

    pub fn add_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Replace the whole condition list.
    pub fn set_conditions(mut self, conditions: Vec<Condition>) -> Self {
        self.conditions = conditions;
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = Some(hidden);
        self
    }

    pub fn anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = Some(anchor.into());
        self
    }

    /// Name of a component layout defined in the document.
    pub fn layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = Some(layout.into());
        self
    }

    /// Name of a component style defined in the document.
    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }
}

impl Conditional for ConditionalComponent {
    fn conditions(&self) -> &[Condition] {
        &self.conditions
    }
}

/// Forward the shared component overrides to the embedded base.
macro_rules! component_overrides {
    ($ty:ident) => {
        impl $ty {
            pub fn new() -> Self {
                Self::default()
            }

            pub fn add_condition(mut self, condition: Condition) -> Self {
                self.base = self.base.add_condition(condition);
                self
            }

            pub fn set_conditions(mut self, conditions: Vec<Condition>) -> Self {
                self.base = self.base.set_conditions(conditions);
                self
            }

            pub fn hidden(mut self, hidden: bool) -> Self {
                self.base = self.base.hidden(hidden);
                self
            }

            pub fn anchor(mut self, anchor: impl Into<String>) -> Self {
                self.base = self.base.anchor(anchor);
                self
            }

            pub fn layout(mut self, layout: impl Into<String>) -> Self {
                self.base = self.base.layout(layout);
                self
            }

            pub fn style(mut self, style: impl Into<String>) -> Self {
                self.base = self.base.style(style);
                self
            }
        }

        impl Conditional for $ty {
            fn conditions(&self) -> &[Condition] {
                self.base.conditions()
            }
        }
    };
}

/// Container overrides: adds `contentDisplay`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalContainer {
    #[serde(flatten)]
    base: ConditionalComponent,
    #[serde(skip_serializing_if = "Option::is_none")]
    content_display: Option<Value>,
}

component_overrides!(ConditionalContainer);

impl ConditionalContainer {
    /// Raw content display: a string such as `"horizontal"` or an object.
    pub fn content_display(mut self, display: impl Into<Value>) -> Self {
        self.content_display = Some(display.into());
        self
    }

    /// Typed content display, resolved to JSON immediately.
    pub fn content_display_object<D: ContentDisplay>(mut self, display: &D) -> Self {
        self.content_display = Some(to_json(display));
        self
    }
}

/// Section overrides: adds `contentDisplay` and `scene`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalSection {
    #[serde(flatten)]
    base: ConditionalComponent,
    #[serde(skip_serializing_if = "Option::is_none")]
    content_display: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scene: Option<Value>,
}

component_overrides!(ConditionalSection);

impl ConditionalSection {
    pub fn content_display(mut self, display: impl Into<Value>) -> Self {
        self.content_display = Some(display.into());
        self
    }

    pub fn content_display_object<D: ContentDisplay>(mut self, display: &D) -> Self {
        self.content_display = Some(to_json(display));
        self
    }

    /// Scene object, e.g. `{"type": "parallax_scale"}`.
    pub fn scene(mut self, scene: Value) -> Self {
        self.scene = Some(scene);
        self
    }
}

/// Text component overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalText {
    #[serde(flatten)]
    base: ConditionalComponent,
    #[serde(skip_serializing_if = "Option::is_none")]
    text_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_text_styles: Option<Vec<Value>>,
}

component_overrides!(ConditionalText);

impl ConditionalText {
    pub fn text_style(mut self, text_style: impl Into<String>) -> Self {
        self.text_style = Some(text_style.into());
        self
    }

    pub fn inline_text_styles(mut self, styles: Vec<Value>) -> Self {
        self.inline_text_styles = Some(styles);
        self
    }
}

/// Divider overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalDivider {
    #[serde(flatten)]
    base: ConditionalComponent,
    #[serde(skip_serializing_if = "Option::is_none")]
    stroke: Option<Value>,
}

component_overrides!(ConditionalDivider);

impl ConditionalDivider {
    pub fn stroke(mut self, stroke: Value) -> Self {
        self.stroke = Some(stroke);
        self
    }
}

/// Button overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalButton {
    #[serde(flatten)]
    base: ConditionalComponent,
    #[serde(skip_serializing_if = "Option::is_none")]
    text_style: Option<String>,
}

component_overrides!(ConditionalButton);

impl ConditionalButton {
    pub fn text_style(mut self, text_style: impl Into<String>) -> Self {
        self.text_style = Some(text_style.into());
        self
    }
}

/// Component layout overrides.
///
/// `margin`, `content_inset` and `padding` take a number or an object;
/// the width and height fields take a number of points or a string unit
/// such as `"50vh"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalComponentLayout {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    conditions: Vec<Condition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    column_start: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    column_span: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    margin: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content_inset: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    padding: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    minimum_height: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    maximum_width: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    minimum_width: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    horizontal_content_alignment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ignore_document_margin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ignore_document_gutter: Option<bool>,
}

impl ConditionalComponentLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bleed to the screen edges on compact-width displays.
    pub fn full_width_on_compact() -> Self {
        Self::new()
            .add_condition(Condition::compact_width())
            .ignore_document_margin(true)
            .ignore_document_gutter(true)
    }

    pub fn add_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn column_start(mut self, column: u32) -> Self {
        self.column_start = Some(column);
        self
    }

    pub fn column_span(mut self, span: u32) -> Self {
        self.column_span = Some(span);
        self
    }

    pub fn margin(mut self, margin: impl Into<Value>) -> Self {
        self.margin = Some(margin.into());
        self
    }

    pub fn content_inset(mut self, inset: impl Into<Value>) -> Self {
        self.content_inset = Some(inset.into());
        self
    }

    pub fn padding(mut self, padding: impl Into<Value>) -> Self {
        self.padding = Some(padding.into());
        self
    }

    pub fn minimum_height(mut self, height: impl Into<Value>) -> Self {
        self.minimum_height = Some(height.into());
        self
    }

    pub fn maximum_width(mut self, width: impl Into<Value>) -> Self {
        self.maximum_width = Some(width.into());
        self
    }

    pub fn minimum_width(mut self, width: impl Into<Value>) -> Self {
        self.minimum_width = Some(width.into());
        self
    }

    pub fn horizontal_content_alignment(mut self, alignment: impl Into<String>) -> Self {
        self.horizontal_content_alignment = Some(alignment.into());
        self
    }

    pub fn ignore_document_margin(mut self, ignore: bool) -> Self {
        self.ignore_document_margin = Some(ignore);
        self
    }

    pub fn ignore_document_gutter(mut self, ignore: bool) -> Self {
        self.ignore_document_gutter = Some(ignore);
        self
    }
}

impl Conditional for ConditionalComponentLayout {
    fn conditions(&self) -> &[Condition] {
        &self.conditions
    }
}
