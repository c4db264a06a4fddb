//! Article components and the container that composes them.
//!
//! Every component serializes `role` first, then the shared
//! [`ComponentProperties`], then its own fields.
//!
//! Behavior and content display setters come in two forms: a raw JSON value
//! passed through as-is, and a typed object that is converted to JSON at the
//! time of the call. Changing the typed object afterwards does not affect the
//! component. Children are owned; to place the same child in several trees,
//! clone it.

use serde::Serialize;
use serde_json::Value;

use crate::behavior::Behavior;
use crate::conditional::Conditional;
use crate::display::ContentDisplay;
use crate::types::to_json;

/// Properties every component accepts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    layout: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    style: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    anchor: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    behavior: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hidden: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    conditional: Vec<Value>,
}

/// Setters for [`ComponentProperties`] on each concrete component.
macro_rules! component_properties {
    ($ty:ident) => {
        impl $ty {
            pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
                self.properties.identifier = Some(identifier.into());
                self
            }

            /// A layout name or an inline layout object.
            pub fn layout(mut self, layout: impl Into<Value>) -> Self {
                self.properties.layout = Some(layout.into());
                self
            }

            /// A style name or an inline style object.
            pub fn style(mut self, style: impl Into<Value>) -> Self {
                self.properties.style = Some(style.into());
                self
            }

            pub fn anchor(mut self, anchor: Value) -> Self {
                self.properties.anchor = Some(anchor);
                self
            }

            /// Raw behavior object, replacing any previous behavior.
            pub fn behavior(mut self, behavior: Value) -> Self {
                self.properties.behavior = Some(behavior);
                self
            }

            /// Typed behavior, replacing any previous behavior.
            pub fn behavior_object(mut self, behavior: impl Into<Behavior>) -> Self {
                self.properties.behavior = Some(to_json(&behavior.into()));
                self
            }

            pub fn hidden(mut self, hidden: bool) -> Self {
                self.properties.hidden = Some(hidden);
                self
            }

            /// Append a conditional override, serialized now. An override
            /// with no conditions and no fields is dropped.
            pub fn add_conditional<C: Conditional>(mut self, conditional: &C) -> Self {
                let value = conditional.to_json();
                if value.as_object().map_or(false, |m| !m.is_empty()) {
                    self.properties.conditional.push(value);
                }
                self
            }

            pub fn role(&self) -> &'static str {
                self.role
            }

            pub fn to_json(&self) -> Value {
                to_json(self)
            }
        }
    };
}

/// Groups child components, optionally with a content display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    role: &'static str,
    #[serde(flatten)]
    properties: ComponentProperties,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    components: Vec<Component>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content_display: Option<Value>,
}

component_properties!(Container);

impl Container {
    pub fn new() -> Self {
        Self {
            role: "container",
            properties: ComponentProperties::default(),
            components: Vec::new(),
            content_display: None,
        }
    }

    /// Append a child. The same child may be added more than once.
    pub fn add_component(mut self, component: impl Into<Component>) -> Self {
        self.components.push(component.into());
        self
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Raw content display: a string such as `"horizontal"` or an object.
    pub fn content_display(mut self, display: impl Into<Value>) -> Self {
        self.content_display = Some(display.into());
        self
    }

    /// Typed content display, converted to JSON now.
    pub fn content_display_object<D: ContentDisplay>(mut self, display: &D) -> Self {
        self.content_display = Some(to_json(display));
        self
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

/// Pushes neighbouring components apart inside a horizontal stack.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlexibleSpacer {
    role: &'static str,
    #[serde(flatten)]
    properties: ComponentProperties,
}

component_properties!(FlexibleSpacer);

impl FlexibleSpacer {
    pub fn new() -> Self {
        Self {
            role: "flexible_spacer",
            properties: ComponentProperties::default(),
        }
    }
}

impl Default for FlexibleSpacer {
    fn default() -> Self {
        Self::new()
    }
}

/// A text component: body, caption or title.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextComponent {
    role: &'static str,
    #[serde(flatten)]
    properties: ComponentProperties,
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text_style: Option<Value>,
}

component_properties!(TextComponent);

impl TextComponent {
    fn with_role(role: &'static str, text: impl Into<String>) -> Self {
        Self {
            role,
            properties: ComponentProperties::default(),
            text: text.into(),
            format: None,
            text_style: None,
        }
    }

    pub fn body(text: impl Into<String>) -> Self {
        Self::with_role("body", text)
    }

    pub fn caption(text: impl Into<String>) -> Self {
        Self::with_role("caption", text)
    }

    pub fn title(text: impl Into<String>) -> Self {
        Self::with_role("title", text)
    }

    /// `none`, `html` or `markdown`.
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// A text style name or an inline text style object.
    pub fn text_style(mut self, text_style: impl Into<Value>) -> Self {
        self.text_style = Some(text_style.into());
        self
    }
}

/// An image component.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    role: &'static str,
    #[serde(flatten)]
    properties: ComponentProperties,
    #[serde(rename = "URL")]
    url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    caption: Option<String>,
}

component_properties!(Photo);

impl Photo {
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            role: "photo",
            properties: ComponentProperties::default(),
            url: url.into(),
            caption: None,
        }
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

/// Any component that can be placed in a [`Container`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Component {
    Container(Container),
    Text(TextComponent),
    Photo(Photo),
    FlexibleSpacer(FlexibleSpacer),
}

impl Component {
    pub fn role(&self) -> &'static str {
        match self {
            Component::Container(c) => c.role(),
            Component::Text(c) => c.role(),
            Component::Photo(c) => c.role(),
            Component::FlexibleSpacer(c) => c.role(),
        }
    }

    pub fn to_json(&self) -> Value {
        to_json(self)
    }
}

impl From<Container> for Component {
    fn from(value: Container) -> Self {
        Component::Container(value)
    }
}

impl From<TextComponent> for Component {
    fn from(value: TextComponent) -> Self {
        Component::Text(value)
    }
}

impl From<Photo> for Component {
    fn from(value: Photo) -> Self {
        Component::Photo(value)
    }
}

impl From<FlexibleSpacer> for Component {
    fn from(value: FlexibleSpacer) -> Self {
        Component::FlexibleSpacer(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::Parallax;
    use crate::condition::Condition;
    use crate::conditional::ConditionalContainer;
    use crate::display::{CollectionDisplay, HorizontalStackDisplay};
    use serde_json::json;

    fn keys(value: &Value) -> Vec<&str> {
        value
            .as_object()
            .map(|m| m.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    #[test]
    fn empty_container_has_only_role() {
        assert_eq!(Container::new().to_json(), json!({ "role": "container" }));
    }

    #[test]
    fn flexible_spacer() {
        let spacer = FlexibleSpacer::new()
            .identifier("main-spacer")
            .layout("spacerLayout");
        assert_eq!(
            spacer.to_json(),
            json!({
                "role": "flexible_spacer",
                "identifier": "main-spacer",
                "layout": "spacerLayout"
            })
        );
    }

    #[test]
    fn container_with_horizontal_stack() {
        let container = Container::new()
            .content_display_object(&HorizontalStackDisplay::new())
            .add_component(TextComponent::body("Left"))
            .add_component(FlexibleSpacer::new())
            .add_component(TextComponent::body("Right"));
        let value = container.to_json();
        assert_eq!(value["role"], "container");
        assert_eq!(value["contentDisplay"], json!({ "type": "horizontal_stack" }));
        assert_eq!(value["components"].as_array().unwrap().len(), 3);
        assert_eq!(keys(&value), vec!["role", "components", "contentDisplay"]);
    }

    #[test]
    fn child_order_is_preserved() {
        let value = Container::new()
            .add_component(Photo::from_url("https://example.com/logo.png"))
            .add_component(FlexibleSpacer::new())
            .add_component(TextComponent::body("Company Name"))
            .add_component(FlexibleSpacer::new())
            .add_component(TextComponent::caption("Menu"))
            .to_json();
        let roles: Vec<&str> = value["components"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["role"].as_str().unwrap())
            .collect();
        assert_eq!(
            roles,
            vec!["photo", "flexible_spacer", "body", "flexible_spacer", "caption"]
        );
    }

    #[test]
    fn duplicate_children_allowed() {
        let body = TextComponent::body("Same");
        let container = Container::new()
            .add_component(body.clone())
            .add_component(body);
        assert_eq!(container.components().len(), 2);
        assert_eq!(container.components()[0], container.components()[1]);
    }

    #[test]
    fn content_display_raw_values() {
        let value = Container::new().content_display("horizontal").to_json();
        assert_eq!(value["contentDisplay"], "horizontal");

        let value = Container::new()
            .content_display(json!({ "type": "collection", "alignment": "center" }))
            .to_json();
        assert_eq!(value["contentDisplay"]["type"], "collection");
    }

    #[test]
    fn content_display_object_overwrites_previous() {
        let value = Container::new()
            .content_display("horizontal")
            .content_display_object(&CollectionDisplay::centered())
            .to_json();
        assert_eq!(
            value["contentDisplay"],
            json!({ "type": "collection", "alignment": "center" })
        );
    }

    #[test]
    fn typed_display_is_resolved_at_call_time() {
        let mut display = CollectionDisplay::grid(15, 15);
        let container = Container::new().content_display_object(&display);
        display = display.gutter(40);
        assert_eq!(container.to_json()["contentDisplay"]["gutter"], 15);
        assert_eq!(serde_json::to_value(&display).unwrap()["gutter"], 40);
    }

    #[test]
    fn behaviors_on_components() {
        let photo = Photo::from_url("https://example.com/hero.jpg")
            .behavior_object(Parallax::with_factor(0.8));
        assert_eq!(
            photo.to_json()["behavior"],
            json!({ "type": "parallax", "factor": 0.8 })
        );

        let container = Container::new()
            .behavior_object(Behavior::BackgroundParallax)
            .add_component(TextComponent::body("Content"));
        assert_eq!(
            container.to_json()["behavior"],
            json!({ "type": "background_parallax" })
        );
    }

    #[test]
    fn behavior_object_overwrites_raw_behavior() {
        let photo = Photo::from_url("https://example.com/hero.jpg")
            .behavior(json!({ "type": "parallax", "factor": 0.6 }))
            .behavior_object(Parallax::strong());
        assert_eq!(photo.to_json()["behavior"]["factor"], 0.5);
    }

    #[test]
    fn conditionals_on_components() {
        let conditional = ConditionalContainer::new()
            .add_condition(Condition::compact_width())
            .content_display("vertical");
        let value = Container::new()
            .content_display("horizontal")
            .add_conditional(&conditional)
            .to_json();
        assert_eq!(value["conditional"][0]["contentDisplay"], "vertical");
        assert_eq!(
            value["conditional"][0]["conditions"][0]["horizontalSizeClass"],
            "compact"
        );
        assert_eq!(value["contentDisplay"], "horizontal");
    }

    #[test]
    fn empty_conditional_is_dropped() {
        let value = Container::new()
            .add_conditional(&ConditionalContainer::new())
            .to_json();
        assert_eq!(value, json!({ "role": "container" }));

        let value = Container::new()
            .add_conditional(&ConditionalContainer::new())
            .add_conditional(&ConditionalContainer::new().hidden(true))
            .to_json();
        assert_eq!(value["conditional"], json!([{ "hidden": true }]));
    }

    #[test]
    fn nested_containers() {
        let inner = Container::new().add_component(TextComponent::title("Inner"));
        let outer = Container::new().identifier("outer").add_component(inner);
        let value = Component::from(outer).to_json();
        assert_eq!(value["components"][0]["role"], "container");
        assert_eq!(value["components"][0]["components"][0]["text"], "Inner");
    }

    #[test]
    fn text_component_fields() {
        let body = TextComponent::body("Hello")
            .format("markdown")
            .text_style("bodyStyle")
            .hidden(false);
        assert_eq!(body.role(), "body");
        let value = body.to_json();
        assert_eq!(
            keys(&value),
            vec!["role", "hidden", "text", "format", "textStyle"]
        );
        assert_eq!(value["hidden"], false);
    }

    #[test]
    fn photo_url_key() {
        let value = Photo::from_url("https://example.com/1.jpg")
            .caption("One")
            .to_json();
        assert_eq!(value["URL"], "https://example.com/1.jpg");
        assert_eq!(value["caption"], "One");
        assert_eq!(Component::from(Photo::from_url("x")).role(), "photo");
    }
}
