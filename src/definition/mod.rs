//! Component Definition - the JSON wire format of a custom component.
//!
//! A definition bundles a template tree, default property values, the
//! user-editable settings list, and an optional state-machine behavior:
//!
//! ```text
//! ComponentDefinition
//! ├── defaultProps        (merged under host-supplied props)
//! ├── settings            (editor surface, not interpreted here)
//! ├── template            (TemplateElement tree, walked by the renderer)
//! └── behavior?           (state machine driven by gesture events)
//! ```
//!
//! Parsing is strict about the closed tag families (element, action, and
//! setting kinds) and lenient about everything else: unrecognized
//! top-level fields are preserved but ignored, unknown gesture names are
//! dropped. Semantic checks live in [`validate`].

mod behavior;
mod component;
mod settings;
mod template;
pub mod validate;

pub use behavior::{
    ActionDefinition, Behavior, StateMachineBehavior, StateNode, Transition, TransitionSpec,
};
pub use component::ComponentDefinition;
pub use settings::{ItemField, ItemFieldKind, SelectOption, SettingDefinition, SettingKind};
pub use template::{ButtonAction, ElementKind, TemplateElement};
pub use validate::{ImportError, ValidateError};
