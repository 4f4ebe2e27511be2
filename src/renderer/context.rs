//! Render context and value resolution.
//!
//! A `RenderContext` is an immutable snapshot passed by value into each
//! recursive render call. List and stack iteration derive a new context
//! carrying the loop item; descendants never mutate an ancestor's
//! context.

use serde_json::Value;

use crate::types::{PropMap, RenderMode};

/// Everything a single render pass can see.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Merged props (definition defaults under host overrides).
    pub props: &'a PropMap,
    /// Current behavior-machine context record.
    pub context: &'a PropMap,
    /// Active state name.
    pub current_state: &'a str,
    /// Current loop item, inside list/stack iteration.
    pub item: Option<&'a Value>,
    /// Position of the current loop item.
    pub item_index: Option<usize>,
    /// Static (authoring) or interactive (preview) rendering.
    pub mode: RenderMode,
}

impl<'a> RenderContext<'a> {
    /// Root context for a render pass.
    pub fn new(
        props: &'a PropMap,
        context: &'a PropMap,
        current_state: &'a str,
        mode: RenderMode,
    ) -> Self {
        Self {
            props,
            context,
            current_state,
            item: None,
            item_index: None,
            mode,
        }
    }

    /// Derived context for one loop iteration.
    pub fn with_item(self, item: &'a Value, index: usize) -> Self {
        Self {
            item: Some(item),
            item_index: Some(index),
            ..self
        }
    }

    /// Resolve a value path against this context.
    ///
    /// - `context:<key>` reads the behavior context
    /// - `item.<field>` reads a field of the current loop item
    /// - `item` reads the whole loop item
    /// - anything else reads a props key
    ///
    /// Unresolvable paths yield `None`, never an error.
    pub fn resolve(&self, path: &str) -> Option<&'a Value> {
        if let Some(key) = path.strip_prefix("context:") {
            return self.context.get(key);
        }
        if let Some(field) = path.strip_prefix("item.") {
            if let Some(item) = self.item {
                return item.get(field);
            }
        }
        if path == "item" {
            if let Some(item) = self.item {
                return Some(item);
            }
        }
        self.props.get(path)
    }
}

/// Coerce a resolved value to its display string.
///
/// Missing and null values display as empty; scalars display bare
/// (no quotes); arrays and objects display as their JSON text.
pub fn display_string(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(Value::Number(number)) => number.to_string(),
        Some(composite) => composite.to_string(),
    }
}
