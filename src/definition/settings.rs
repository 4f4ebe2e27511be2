//! Editor settings surface of a component definition.
//!
//! Settings declare which property keys a user may edit and what editor
//! control each one gets. The interpreter itself never reads these; they
//! are parsed, validated, and handed to whatever authoring UI the host
//! provides.

use serde::{Deserialize, Serialize};

/// One user-editable property of a component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingDefinition {
    /// Property key in `defaultProps` this setting edits.
    pub key: String,
    /// Label shown next to the editor control.
    pub label: String,
    /// Editor kind with its kind-specific constraints.
    #[serde(flatten)]
    pub kind: SettingKind,
}

/// The closed set of editor kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SettingKind {
    /// Single-line text field.
    Text {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
    },
    /// Multi-line text field.
    Textarea {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
    },
    /// Numeric field with optional bounds and step.
    Number {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        step: Option<f64>,
    },
    /// Dropdown over a fixed option list.
    Select { options: Vec<SelectOption> },
    /// Boolean switch.
    Toggle,
    /// Color picker.
    Color,
    /// Image upload (the host stores a URL-like string).
    Image,
    /// Reference to another screen of the project.
    Screen,
    /// Editable list of records, one sub-field editor per item field.
    Items {
        #[serde(rename = "itemFields")]
        item_fields: Vec<ItemField>,
    },
}

/// One option of a `select` setting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// One editable field of an `items` setting's records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemField {
    pub key: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: ItemFieldKind,
}

/// Editor kind for a single item field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemFieldKind {
    Text,
    Textarea,
    Number,
    Image,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_scalar_settings() {
        let settings: Vec<SettingDefinition> = serde_json::from_value(json!([
            { "key": "title", "label": "Title", "type": "text", "placeholder": "Enter title" },
            { "key": "rating", "label": "Rating", "type": "number", "min": 0, "max": 5, "step": 0.5 },
            { "key": "accent", "label": "Accent", "type": "color" },
            { "key": "visible", "label": "Visible", "type": "toggle" },
            { "key": "destination", "label": "Destination", "type": "screen" }
        ]))
        .unwrap();

        assert_eq!(settings.len(), 5);
        assert_eq!(settings[0].key, "title");
        let SettingKind::Number { min, max, step } = settings[1].kind else {
            panic!("expected number setting");
        };
        assert_eq!((min, max, step), (Some(0.0), Some(5.0), Some(0.5)));
        assert_eq!(settings[3].kind, SettingKind::Toggle);
    }

    #[test]
    fn test_parse_select_and_items() {
        let setting: SettingDefinition = serde_json::from_value(json!({
            "key": "cards",
            "label": "Cards",
            "type": "items",
            "itemFields": [
                { "key": "photo", "label": "Photo", "type": "image" },
                { "key": "name", "label": "Name", "type": "text" }
            ]
        }))
        .unwrap();

        let SettingKind::Items { item_fields } = &setting.kind else {
            panic!("expected items setting");
        };
        assert_eq!(item_fields.len(), 2);
        assert_eq!(item_fields[0].kind, ItemFieldKind::Image);

        let select: SettingDefinition = serde_json::from_value(json!({
            "key": "layout",
            "label": "Layout",
            "type": "select",
            "options": [ { "value": "grid", "label": "Grid" } ]
        }))
        .unwrap();
        let SettingKind::Select { options } = &select.kind else {
            panic!("expected select setting");
        };
        assert_eq!(options[0].value, "grid");
    }
}
