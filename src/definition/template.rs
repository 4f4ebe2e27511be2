//! Template tree nodes.
//!
//! Each node couples a closed element kind (tagged `"type"` on the wire)
//! with the fields every node shares: an opaque style map, an optional
//! value path, and a gesture set. Children are owned exclusively by their
//! parent; the root is owned by the definition.

use serde::{Deserialize, Serialize};

use crate::types::{ButtonSize, ButtonVariant, Gesture, StyleMap};

fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// One node of the declarative UI tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateElement {
    /// Element kind plus its kind-specific fields.
    #[serde(flatten)]
    pub kind: ElementKind,
    /// Visual-style pass-through for the host's rendering layer.
    #[serde(default, skip_serializing_if = "StyleMap::is_empty")]
    pub style: StyleMap,
    /// Value path resolved against the render context (see the renderer's
    /// value-resolution rules).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prop: Option<String>,
    /// Gestures this node responds to in preview mode.
    #[serde(default, skip_serializing_if = "Gesture::is_empty")]
    pub gestures: Gesture,
}

impl TemplateElement {
    /// Build a bare element of the given kind (no style, path, or gestures).
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            style: StyleMap::new(),
            prop: None,
            gestures: Gesture::empty(),
        }
    }
}

/// The closed set of template element kinds.
///
/// `list` and `stack` render nothing unless their `dataKey` resolves to a
/// sequence and an `itemTemplate` is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementKind {
    /// Vertical flow of children (direction overridable via style).
    Container {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        children: Vec<TemplateElement>,
    },
    /// Prominent text, resolved through the node's value path.
    Heading,
    /// Body text, resolved through the node's value path.
    Text,
    /// Image whose source resolves through the value path; an empty
    /// source is the defined placeholder state, not an error.
    Image,
    /// Activatable control. `action: "navigate"` plus a `target` makes a
    /// tap request a screen switch in preview mode; every tap also
    /// dispatches a `TAP` event into the behavior machine.
    Button {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        action: Option<ButtonAction>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<String>,
        #[serde(default, skip_serializing_if = "is_default")]
        variant: ButtonVariant,
        #[serde(default, skip_serializing_if = "is_default")]
        size: ButtonSize,
    },
    /// Text-entry control. Display-only: it never retains typed state.
    Input {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
    },
    /// Fixed-height blank node (16 units when unspecified).
    Spacer {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        height: Option<f64>,
    },
    /// Repeats `itemTemplate` once per element of the sequence found at
    /// `dataKey` in props.
    List {
        #[serde(default, rename = "dataKey", skip_serializing_if = "Option::is_none")]
        data_key: Option<String>,
        #[serde(default, rename = "itemTemplate", skip_serializing_if = "Option::is_none")]
        item_template: Option<Box<TemplateElement>>,
    },
    /// Card deck over the sequence at `dataKey`, windowed by a cursor
    /// stored in the behavior context under `indexKey`.
    Stack {
        #[serde(default, rename = "dataKey", skip_serializing_if = "Option::is_none")]
        data_key: Option<String>,
        #[serde(default, rename = "indexKey", skip_serializing_if = "Option::is_none")]
        index_key: Option<String>,
        #[serde(default, rename = "itemTemplate", skip_serializing_if = "Option::is_none")]
        item_template: Option<Box<TemplateElement>>,
    },
}

/// Navigation shortcut carried directly on a button element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonAction {
    Navigate,
}
