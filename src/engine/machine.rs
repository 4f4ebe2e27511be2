//! Behavior Engine - the running half of a state machine.
//!
//! Owns the `(currentState, context)` pair for one component instance
//! and executes the transition protocol:
//!
//! 1. exit actions of the current state
//! 2. actions attached to the chosen transition
//! 3. state switch
//! 4. entry actions of the new state
//!
//! All four steps run synchronously and atomically from the caller's
//! perspective. Events with no matching transition are silent no-ops.
//! When a transition entry declares a list of alternatives, only the
//! first is taken - guard conditions are carried but never evaluated.

use tracing::{debug, trace};

use crate::definition::StateMachineBehavior;
use crate::host::HostHandlers;
use crate::types::{EventPayload, EventType, PropMap};

use super::actions::execute_actions;

/// State name used when a component declares no behavior.
pub(crate) const IDLE_STATE: &str = "idle";

/// The mutable runtime of one component instance's behavior.
///
/// The behavior *specification* stays with the definition; the engine
/// holds only what changes at runtime. Creating an engine from a
/// specification (or [`reset`](Self::reset)-ting it to one) installs the
/// declared initial state and initial context in full.
#[derive(Debug, Clone, PartialEq)]
pub struct BehaviorEngine {
    state: String,
    context: PropMap,
}

impl BehaviorEngine {
    /// Fresh engine for the given behavior specification. Components
    /// without a behavior idle in a fixed fallback state with an empty
    /// context.
    pub fn new(behavior: Option<&StateMachineBehavior>) -> Self {
        match behavior {
            Some(machine) => Self {
                state: machine.initial.clone(),
                context: machine.context.clone(),
            },
            None => Self {
                state: IDLE_STATE.to_string(),
                context: PropMap::new(),
            },
        }
    }

    /// Active state name.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Current context record.
    pub fn context(&self) -> &PropMap {
        &self.context
    }

    /// Discard all interaction state and reinitialize from `behavior`.
    pub fn reset(&mut self, behavior: Option<&StateMachineBehavior>) {
        *self = Self::new(behavior);
    }

    /// Dispatch an event. Returns `true` when a transition ran.
    ///
    /// A current state that is missing from the state table (possible
    /// only for definitions that bypassed import validation) contributes
    /// no transitions: the machine is stuck, silently.
    pub fn handle_event(
        &mut self,
        behavior: &StateMachineBehavior,
        event: EventType,
        payload: EventPayload,
        props: &PropMap,
        host: &HostHandlers,
    ) -> bool {
        trace!(event = event.name(), item_index = ?payload.item_index, "event received");

        let Some(current) = behavior.states.get(&self.state) else {
            return false;
        };
        let Some(spec) = current.on.get(&event) else {
            return false;
        };
        // First alternative wins; the rest are ignored.
        let Some(transition) = spec.first() else {
            return false;
        };

        debug!(
            from = %self.state,
            to = %transition.target,
            event = event.name(),
            "transition"
        );

        execute_actions(&current.exit, props, &mut self.context, host);
        execute_actions(&transition.actions, props, &mut self.context, host);
        self.state = transition.target.clone();
        if let Some(next) = behavior.states.get(&self.state) {
            execute_actions(&next.entry, props, &mut self.context, host);
        }
        true
    }
}

impl Default for BehaviorEngine {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::Behavior;
    use serde_json::json;

    fn machine(raw: serde_json::Value) -> StateMachineBehavior {
        let Behavior::StateMachine(machine) = serde_json::from_value(raw).unwrap();
        machine
    }

    #[test]
    fn test_initializes_from_behavior() {
        let spec = machine(json!({
            "type": "state-machine",
            "initial": "closed",
            "context": { "opens": 0 },
            "states": { "closed": {}, "open": {} }
        }));
        let engine = BehaviorEngine::new(Some(&spec));
        assert_eq!(engine.state(), "closed");
        assert_eq!(engine.context().get("opens"), Some(&json!(0)));

        let idle = BehaviorEngine::new(None);
        assert_eq!(idle.state(), IDLE_STATE);
        assert!(idle.context().is_empty());
    }

    #[test]
    fn test_unmatched_event_leaves_machine_unchanged() {
        let spec = machine(json!({
            "type": "state-machine",
            "initial": "active",
            "context": { "count": 3 },
            "states": { "active": {} }
        }));
        let mut engine = BehaviorEngine::new(Some(&spec));
        let before = engine.clone();

        let ran = engine.handle_event(
            &spec,
            EventType::Tap,
            EventPayload::default(),
            &PropMap::new(),
            &HostHandlers::default(),
        );

        assert!(!ran);
        assert_eq!(engine, before);
    }

    #[test]
    fn test_first_transition_in_list_wins() {
        let spec = machine(json!({
            "type": "state-machine",
            "initial": "idle",
            "states": {
                "idle": {
                    "on": {
                        "TAP": [
                            { "target": "first", "actions": [ { "type": "setValue", "key": "chosen", "value": "T1" } ] },
                            { "target": "second", "actions": [ { "type": "setValue", "key": "chosen", "value": "T2" } ] }
                        ]
                    }
                },
                "first": {},
                "second": {}
            }
        }));
        let mut engine = BehaviorEngine::new(Some(&spec));

        engine.handle_event(
            &spec,
            EventType::Tap,
            EventPayload::default(),
            &PropMap::new(),
            &HostHandlers::default(),
        );

        assert_eq!(engine.state(), "first");
        assert_eq!(engine.context().get("chosen"), Some(&json!("T1")));
    }

    #[test]
    fn test_exit_transition_entry_order() {
        // exit sets n = 1, the transition adds 5, entry adds 10: any
        // other ordering produces a different final value.
        let spec = machine(json!({
            "type": "state-machine",
            "initial": "a",
            "states": {
                "a": {
                    "exit": [ { "type": "setValue", "key": "n", "value": 1 } ],
                    "on": {
                        "TAP": { "target": "b", "actions": [ { "type": "increment", "key": "n", "by": 5 } ] }
                    }
                },
                "b": {
                    "entry": [ { "type": "increment", "key": "n", "by": 10 } ]
                }
            }
        }));
        let mut engine = BehaviorEngine::new(Some(&spec));

        engine.handle_event(
            &spec,
            EventType::Tap,
            EventPayload::default(),
            &PropMap::new(),
            &HostHandlers::default(),
        );

        assert_eq!(engine.state(), "b");
        assert_eq!(engine.context().get("n"), Some(&json!(16)));
    }

    #[test]
    fn test_stuck_machine_degrades_silently() {
        // A target pointing at an undeclared state is an import-time
        // error, but an unvalidated machine must still never panic.
        let spec = machine(json!({
            "type": "state-machine",
            "initial": "idle",
            "states": {
                "idle": { "on": { "TAP": { "target": "nowhere" } } }
            }
        }));
        let mut engine = BehaviorEngine::new(Some(&spec));

        let ran = engine.handle_event(
            &spec,
            EventType::Tap,
            EventPayload::default(),
            &PropMap::new(),
            &HostHandlers::default(),
        );
        assert!(ran);
        assert_eq!(engine.state(), "nowhere");

        // Stuck: no state definition, so no further event matches.
        let ran = engine.handle_event(
            &spec,
            EventType::Tap,
            EventPayload::default(),
            &PropMap::new(),
            &HostHandlers::default(),
        );
        assert!(!ran);
    }

    #[test]
    fn test_reset_restores_initials() {
        let spec = machine(json!({
            "type": "state-machine",
            "initial": "idle",
            "context": { "count": 0 },
            "states": {
                "idle": {
                    "on": { "TAP": { "target": "idle", "actions": [ { "type": "increment", "key": "count" } ] } }
                }
            }
        }));
        let mut engine = BehaviorEngine::new(Some(&spec));
        engine.handle_event(
            &spec,
            EventType::Tap,
            EventPayload::default(),
            &PropMap::new(),
            &HostHandlers::default(),
        );
        assert_eq!(engine.context().get("count"), Some(&json!(1)));

        engine.reset(Some(&spec));
        assert_eq!(engine.state(), "idle");
        assert_eq!(engine.context().get("count"), Some(&json!(0)));
    }
}
