//! Component Instance - one live component wired for interaction.
//!
//! An instance pairs a definition reference with the mutable runtime the
//! definition describes: the behavior engine's `(currentState, context)`.
//! Interaction state is instance-scoped and never persisted - swapping
//! in a different definition discards it in full.

use std::rc::Rc;

use tracing::debug;

use crate::definition::ComponentDefinition;
use crate::engine::BehaviorEngine;
use crate::host::HostHandlers;
use crate::renderer::{render, RenderContext, TapSpec, VisualNode};
use crate::types::{EventPayload, EventType, PropMap, RenderMode};

/// A running component: definition + behavior runtime.
#[derive(Debug, Clone)]
pub struct ComponentInstance {
    definition: Rc<ComponentDefinition>,
    engine: BehaviorEngine,
}

impl ComponentInstance {
    /// Instantiate a definition, installing its declared initial state
    /// and context.
    pub fn new(definition: Rc<ComponentDefinition>) -> Self {
        let engine = BehaviorEngine::new(definition.state_machine());
        Self { definition, engine }
    }

    /// The definition this instance is running.
    pub fn definition(&self) -> &Rc<ComponentDefinition> {
        &self.definition
    }

    /// Active behavior state name.
    pub fn state(&self) -> &str {
        self.engine.state()
    }

    /// Current behavior context record.
    pub fn context(&self) -> &PropMap {
        self.engine.context()
    }

    /// Switch to a different definition.
    ///
    /// When the reference actually changes, all in-progress interaction
    /// state is discarded and the engine reinitializes from the new
    /// definition. Setting the same reference again is a no-op.
    pub fn set_definition(&mut self, definition: Rc<ComponentDefinition>) {
        if Rc::ptr_eq(&self.definition, &definition) {
            return;
        }
        debug!(component = %definition.name, "definition changed, resetting interaction state");
        self.definition = definition;
        self.engine.reset(self.definition.state_machine());
    }

    /// Render with the definition's defaults merged under `overrides`.
    ///
    /// Returns `None` only when the template's root renders nothing
    /// (an unbound list/stack root).
    pub fn render(&self, overrides: &PropMap, mode: RenderMode) -> Option<VisualNode> {
        let props = self.definition.merged_props(overrides);
        let ctx = RenderContext::new(&props, self.engine.context(), self.engine.state(), mode);
        render(&self.definition.template, ctx)
    }

    /// Dispatch an event into the behavior machine. Returns `true` when
    /// a transition ran (callers typically re-render then). Components
    /// without a behavior ignore all events.
    pub fn dispatch(
        &mut self,
        event: EventType,
        payload: EventPayload,
        overrides: &PropMap,
        host: &HostHandlers,
    ) -> bool {
        let definition = self.definition.clone();
        let Some(machine) = definition.state_machine() else {
            return false;
        };
        let props = definition.merged_props(overrides);
        self.engine.handle_event(machine, event, payload, &props, host)
    }

    /// Activate a tap target from a previous render: perform the
    /// button's navigation request (if any), then dispatch the
    /// unconditional `TAP` event.
    pub fn activate(
        &mut self,
        tap: &TapSpec,
        overrides: &PropMap,
        host: &HostHandlers,
    ) -> bool {
        if let Some(screen) = &tap.navigate {
            host.navigate(screen);
        }
        self.dispatch(
            EventType::Tap,
            EventPayload { item_index: tap.item_index },
            overrides,
            host,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::validate::import_value;
    use crate::renderer::VisualKind;
    use serde_json::json;
    use std::cell::RefCell;

    fn instance(raw: serde_json::Value) -> ComponentInstance {
        ComponentInstance::new(Rc::new(import_value(raw).unwrap()))
    }

    fn map(value: serde_json::Value) -> PropMap {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_tap_drives_state_machine_end_to_end() {
        let mut instance = instance(json!({
            "name": "tap-counter",
            "displayName": "Tap Counter",
            "template": { "type": "button", "prop": "label" },
            "behavior": {
                "type": "state-machine",
                "initial": "idle",
                "states": {
                    "idle": {
                        "on": {
                            "TAP": { "target": "active", "actions": [ { "type": "increment", "key": "count" } ] }
                        }
                    },
                    "active": {}
                }
            }
        }));
        let host = HostHandlers::default();
        let overrides = PropMap::new();

        let ran = instance.dispatch(EventType::Tap, EventPayload::default(), &overrides, &host);
        assert!(ran);
        assert_eq!(instance.state(), "active");
        assert_eq!(instance.context().get("count"), Some(&json!(1)));

        // `active` has no TAP handler: byte-for-byte unchanged.
        let ran = instance.dispatch(EventType::Tap, EventPayload::default(), &overrides, &host);
        assert!(!ran);
        assert_eq!(instance.state(), "active");
        assert_eq!(instance.context().get("count"), Some(&json!(1)));
    }

    #[test]
    fn test_render_merges_default_props() {
        let instance = instance(json!({
            "name": "card",
            "displayName": "Card",
            "defaultProps": { "title": "Default title" },
            "template": { "type": "heading", "prop": "title" }
        }));

        let node = instance.render(&PropMap::new(), RenderMode::Static).unwrap();
        assert_eq!(node.kind, VisualKind::Heading { text: "Default title".into() });

        let node = instance
            .render(&map(json!({ "title": "Override" })), RenderMode::Static)
            .unwrap();
        assert_eq!(node.kind, VisualKind::Heading { text: "Override".into() });
    }

    fn deck_definition(name: &str) -> serde_json::Value {
        json!({
            "name": name,
            "displayName": "Deck",
            "defaultProps": { "cards": ["a", "b", "c", "d"] },
            "template": {
                "type": "stack",
                "dataKey": "cards",
                "indexKey": "cursor",
                "itemTemplate": { "type": "text", "prop": "item" }
            },
            "behavior": {
                "type": "state-machine",
                "initial": "browsing",
                "context": { "cursor": 0 },
                "states": {
                    "browsing": {
                        "on": {
                            "TAP": {
                                "target": "browsing",
                                "actions": [ { "type": "nextItem", "key": "cursor", "listKey": "cards" } ]
                            }
                        }
                    }
                }
            }
        })
    }

    #[test]
    fn test_definition_swap_resets_interaction_state() {
        let first = Rc::new(import_value(deck_definition("deck")).unwrap());
        let second = Rc::new(import_value(deck_definition("deck-v2")).unwrap());
        let mut instance = ComponentInstance::new(first.clone());
        let host = HostHandlers::default();
        let overrides = PropMap::new();

        instance.dispatch(EventType::Tap, EventPayload::default(), &overrides, &host);
        instance.dispatch(EventType::Tap, EventPayload::default(), &overrides, &host);
        assert_eq!(instance.context().get("cursor"), Some(&json!(2)));

        // Same reference: nothing resets.
        instance.set_definition(first);
        assert_eq!(instance.context().get("cursor"), Some(&json!(2)));

        // New reference: cursor reads back as the declared initial.
        instance.set_definition(second);
        assert_eq!(instance.state(), "browsing");
        assert_eq!(instance.context().get("cursor"), Some(&json!(0)));
    }

    #[test]
    fn test_activate_navigates_then_dispatches() {
        let mut instance = instance(json!({
            "name": "cta",
            "displayName": "CTA",
            "defaultProps": { "nextScreen": "screen-9" },
            "template": {
                "type": "button",
                "prop": "label",
                "action": "navigate",
                "target": "prop:nextScreen"
            },
            "behavior": {
                "type": "state-machine",
                "initial": "idle",
                "states": {
                    "idle": { "on": { "TAP": { "target": "tapped" } } },
                    "tapped": {}
                }
            }
        }));

        let visited = Rc::new(RefCell::new(Vec::new()));
        let log = visited.clone();
        let host = HostHandlers {
            on_navigate: Some(Rc::new(move |id| log.borrow_mut().push(id.to_string()))),
            ..Default::default()
        };
        let overrides = PropMap::new();

        let node = instance.render(&overrides, RenderMode::Preview).unwrap();
        let tap = node.tap.clone().unwrap();
        assert_eq!(tap.navigate.as_deref(), Some("screen-9"));

        let ran = instance.activate(&tap, &overrides, &host);
        assert!(ran);
        assert_eq!(visited.borrow().as_slice(), ["screen-9"]);
        assert_eq!(instance.state(), "tapped");
    }

    #[test]
    fn test_events_without_behavior_are_ignored() {
        let mut instance = instance(json!({
            "name": "static-card",
            "displayName": "Static Card",
            "template": { "type": "text", "prop": "body" }
        }));

        let ran = instance.dispatch(
            EventType::Tap,
            EventPayload::default(),
            &PropMap::new(),
            &HostHandlers::default(),
        );
        assert!(!ran);
        assert_eq!(instance.state(), "idle");
        assert!(instance.context().is_empty());
    }
}
