//! Component Registry - host-owned store of imported definitions.
//!
//! The registry is an explicit value the host creates, owns, and hands
//! to whatever needs lookups; the interpreter never reaches into ambient
//! global state. Definitions are keyed by `name`: importing a name that
//! already exists replaces the stored definition in place, removal is
//! explicit, and nothing expires implicitly.

use std::collections::BTreeMap;
use std::rc::Rc;

use serde_json::Value;
use tracing::debug;

use crate::definition::validate::{import_value, ImportError};
use crate::definition::ComponentDefinition;

/// Category stamped on every imported definition, matching how the
/// original authoring tool shelves imports in its palette.
const IMPORT_CATEGORY: &str = "custom";

/// Outcome of a successful import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Imported {
    /// The name was new to this registry.
    Added,
    /// An existing definition with the same name was replaced.
    Replaced,
}

/// Store of component definitions keyed by name.
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    components: BTreeMap<String, Rc<ComponentDefinition>>,
}

impl ComponentRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Import a definition from JSON text. Validation failures reject
    /// the import; an accepted definition is stored under its `name`,
    /// replacing any previous definition with that name.
    pub fn import_str(&mut self, json: &str) -> Result<Imported, ImportError> {
        self.import(serde_json::from_str(json)?)
    }

    /// Import a definition from an already-parsed JSON value.
    pub fn import(&mut self, value: Value) -> Result<Imported, ImportError> {
        let mut definition = import_value(value)?;
        definition.category = Some(IMPORT_CATEGORY.to_string());

        let name = definition.name.clone();
        let replaced = self
            .components
            .insert(name.clone(), Rc::new(definition))
            .is_some();

        debug!(component = %name, replaced, "imported component definition");
        if replaced { Ok(Imported::Replaced) } else { Ok(Imported::Added) }
    }

    /// Remove a definition by name, returning it if present.
    pub fn remove(&mut self, name: &str) -> Option<Rc<ComponentDefinition>> {
        let removed = self.components.remove(name);
        if removed.is_some() {
            debug!(component = %name, "removed component definition");
        }
        removed
    }

    /// Look up a definition by name.
    pub fn get(&self, name: &str) -> Option<Rc<ComponentDefinition>> {
        self.components.get(name).cloned()
    }

    /// Whether a definition with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    /// All registered definitions in name order.
    pub fn definitions(&self) -> impl Iterator<Item = &Rc<ComponentDefinition>> {
        self.components.values()
    }

    /// Number of registered definitions.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Snapshot every definition as a JSON array, for host persistence.
    pub fn to_json(&self) -> Value {
        Value::Array(
            self.components
                .values()
                .map(|definition| {
                    serde_json::to_value(definition.as_ref())
                        .expect("definitions always serialize")
                })
                .collect(),
        )
    }

    /// Rebuild a registry from a [`to_json`](Self::to_json) snapshot.
    /// Every entry is re-validated on the way in.
    pub fn from_json(snapshot: Value) -> Result<Self, ImportError> {
        let entries = match snapshot {
            Value::Array(entries) => entries,
            other => vec![other],
        };
        let mut registry = Self::new();
        for entry in entries {
            registry.import(entry)?;
        }
        Ok(registry)
    }
}
