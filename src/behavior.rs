//! Component behaviors (motion effects).

use serde::Serialize;

use crate::types::DEFAULT_PARALLAX_FACTOR;

/// A behavior attached to a component.
///
/// Serializes as an object whose first key is `type`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Behavior {
    Parallax(Parallax),
    Springy,
    Motion,
    BackgroundMotion,
    BackgroundParallax,
}

impl Behavior {
    /// The `type` value written to JSON.
    pub fn behavior_type(&self) -> &'static str {
        match self {
            Behavior::Parallax(_) => "parallax",
            Behavior::Springy => "springy",
            Behavior::Motion => "motion",
            Behavior::BackgroundMotion => "background_motion",
            Behavior::BackgroundParallax => "background_parallax",
        }
    }
}

/// Parallax scrolling. A factor below 1.0 moves the component slower than
/// the page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Parallax {
    factor: f64,
}

impl Parallax {
    pub fn with_factor(factor: f64) -> Self {
        Self { factor }
    }

    pub fn subtle() -> Self {
        Self::with_factor(0.9)
    }

    pub fn moderate() -> Self {
        Self::with_factor(0.7)
    }

    pub fn strong() -> Self {
        Self::with_factor(0.5)
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }
}

impl Default for Parallax {
    fn default() -> Self {
        Self::with_factor(DEFAULT_PARALLAX_FACTOR)
    }
}

impl From<Parallax> for Behavior {
    fn from(value: Parallax) -> Self {
        Behavior::Parallax(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parallax_with_factor() {
        let behavior = Behavior::from(Parallax::with_factor(0.75));
        assert_eq!(behavior.behavior_type(), "parallax");
        assert_eq!(
            serde_json::to_string(&behavior).unwrap(),
            r#"{"type":"parallax","factor":0.75}"#
        );
    }

    #[test]
    fn parallax_presets() {
        assert_eq!(Parallax::default().factor(), 0.9);
        assert_eq!(Parallax::subtle().factor(), 0.9);
        assert_eq!(Parallax::moderate().factor(), 0.7);
        assert_eq!(Parallax::strong().factor(), 0.5);
    }

    #[test]
    fn unit_behaviors_only_have_type() {
        for (behavior, name) in [
            (Behavior::Springy, "springy"),
            (Behavior::Motion, "motion"),
            (Behavior::BackgroundMotion, "background_motion"),
            (Behavior::BackgroundParallax, "background_parallax"),
        ] {
            assert_eq!(behavior.behavior_type(), name);
            assert_eq!(serde_json::to_value(behavior).unwrap(), json!({ "type": name }));
        }
    }
}
