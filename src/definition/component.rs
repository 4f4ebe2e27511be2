//! The top-level component definition record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::PropMap;

use super::behavior::Behavior;
use super::settings::SettingDefinition;
use super::template::TemplateElement;

/// A complete custom-component definition as imported from JSON.
///
/// `name` is the registry key; re-importing a definition with the same
/// name replaces the previous one in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDefinition {
    /// Unique identifier within a registry.
    pub name: String,
    /// Human-readable name shown in component palettes.
    pub display_name: String,
    /// Palette icon (emoji or short glyph).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Palette category. The registry stamps `"custom"` on import.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Default value for each editable property, merged under the props
    /// supplied at render time.
    #[serde(default)]
    pub default_props: PropMap,
    /// Ordered editor settings surface. Not interpreted by the renderer.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub settings: Vec<SettingDefinition>,
    /// Root of the template tree.
    pub template: TemplateElement,
    /// Optional interactive behavior.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub behavior: Option<Behavior>,
    /// Fields this version of the format does not recognize. Preserved
    /// through re-serialization, never interpreted.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl ComponentDefinition {
    /// Merge this definition's default props under `overrides`.
    ///
    /// Overrides win key-by-key; defaults fill the gaps.
    pub fn merged_props(&self, overrides: &PropMap) -> PropMap {
        let mut merged = self.default_props.clone();
        for (key, value) in overrides {
            merged.insert(key.clone(), value.clone());
        }
        merged
    }

    /// The state-machine behavior, if one is declared.
    pub fn state_machine(&self) -> Option<&super::behavior::StateMachineBehavior> {
        match &self.behavior {
            Some(Behavior::StateMachine(machine)) => Some(machine),
            None => None,
        }
    }
}
