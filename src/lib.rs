//! # protoview
//!
//! Declarative component interpreter for mobile app prototypes.
//!
//! A component is described by a JSON definition: a template tree,
//! default property values, an editor settings surface, and an optional
//! state-machine behavior. The interpreter renders the template into a
//! visual-node tree, routes gestures through the state machine, and
//! applies side-effecting actions - all inside the host's UI loop.
//!
//! ## Architecture
//!
//! The interpretation pipeline is pull-based: every pass renders from an
//! immutable snapshot, and the only mutable runtime is each instance's
//! `(currentState, context)` pair.
//!
//! ```text
//! Definition JSON → Registry → ComponentInstance → render → VisualNode tree
//!                                     ▲                          │
//!                                     │ actions        tap/gesture│
//!                                     └────── BehaviorEngine ◄────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use protoview::{ComponentInstance, ComponentRegistry, HostHandlers, PropMap, RenderMode};
//!
//! let mut registry = ComponentRegistry::new();
//! registry
//!     .import_str(
//!         r#"{
//!             "name": "tap-counter",
//!             "displayName": "Tap Counter",
//!             "defaultProps": { "label": "Tap me" },
//!             "template": { "type": "button", "prop": "label" },
//!             "behavior": {
//!                 "type": "state-machine",
//!                 "initial": "idle",
//!                 "context": { "count": 0 },
//!                 "states": {
//!                     "idle": {
//!                         "on": {
//!                             "TAP": {
//!                                 "target": "idle",
//!                                 "actions": [ { "type": "increment", "key": "count" } ]
//!                             }
//!                         }
//!                     }
//!                 }
//!             }
//!         }"#,
//!     )
//!     .unwrap();
//!
//! let mut instance = ComponentInstance::new(registry.get("tap-counter").unwrap());
//! let overrides = PropMap::new();
//! let host = HostHandlers::default();
//!
//! let node = instance.render(&overrides, RenderMode::Preview).unwrap();
//! let tap = node.tap.clone().unwrap();
//! instance.activate(&tap, &overrides, &host);
//!
//! assert_eq!(instance.context()["count"], 1);
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Core types (events, gestures, haptics, render mode)
//! - [`definition`] - The Component Definition wire format and validation
//! - [`engine`] - Registry, behavior machine, action executor
//! - [`renderer`] - Template → visual-node materialization
//! - [`instance`] - A live component wired for interaction
//! - [`host`] - Outward navigation/haptic callbacks

pub mod definition;
pub mod engine;
pub mod host;
pub mod instance;
pub mod renderer;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use definition::{
    ActionDefinition, Behavior, ButtonAction, ComponentDefinition, ElementKind, ImportError,
    ItemField, ItemFieldKind, SelectOption, SettingDefinition, SettingKind, StateMachineBehavior,
    StateNode, TemplateElement, Transition, TransitionSpec, ValidateError,
};

pub use engine::{execute_actions, BehaviorEngine, ComponentRegistry, Imported};

pub use host::{HostHandlers, NavigateCallback, VibrateCallback};

pub use instance::ComponentInstance;

pub use renderer::{
    display_string, render, RenderContext, StackCard, TapSpec, VisualKind, VisualNode,
};
