//! Behavior specification - the state-machine half of a definition.
//!
//! A behavior declares an initial state, an initial context record, and a
//! table of states. Each state may carry entry/exit action lists and an
//! `on` table mapping event types to one transition or an ordered list of
//! alternatives. Transition selection is strictly first-match-wins; the
//! `condition` field parses and round-trips but is never evaluated.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{EventType, HapticType, PropMap};

/// Interactive behavior of a component, tagged by kind on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Behavior {
    /// Finite-state-machine behavior (`"type": "state-machine"`).
    #[serde(rename = "state-machine")]
    StateMachine(StateMachineBehavior),
}

/// The state-machine specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateMachineBehavior {
    /// Name of the starting state; must be a key of `states`.
    pub initial: String,
    /// Initial context record for a fresh component instance.
    #[serde(default, skip_serializing_if = "PropMap::is_empty")]
    pub context: PropMap,
    /// State table keyed by state name.
    #[serde(default)]
    pub states: BTreeMap<String, StateNode>,
}

/// One state of the machine.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StateNode {
    /// Actions run when the machine enters this state.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entry: Vec<ActionDefinition>,
    /// Actions run when the machine leaves this state.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exit: Vec<ActionDefinition>,
    /// Transition table keyed by event type.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub on: BTreeMap<EventType, TransitionSpec>,
}

/// A transition table entry: a single transition or an ordered list of
/// alternatives. Only the first alternative is ever taken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransitionSpec {
    One(Transition),
    Many(Vec<Transition>),
}

impl TransitionSpec {
    /// The transition that will actually run (first-match-wins).
    pub fn first(&self) -> Option<&Transition> {
        match self {
            TransitionSpec::One(transition) => Some(transition),
            TransitionSpec::Many(transitions) => transitions.first(),
        }
    }

    /// All declared alternatives in order.
    pub fn iter(&self) -> impl Iterator<Item = &Transition> {
        match self {
            TransitionSpec::One(transition) => std::slice::from_ref(transition).iter(),
            TransitionSpec::Many(transitions) => transitions.iter(),
        }
    }
}

/// A single transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// Destination state; must be a key of `states`.
    pub target: String,
    /// Actions run between the source's exit actions and the state switch.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<ActionDefinition>,
    /// Guard expression. Accepted on the wire for forward compatibility;
    /// never evaluated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Value>,
}

/// The closed action vocabulary, tagged by `"type"` on the wire.
///
/// Actions with a missing `key`/`screen` execute as silent no-ops, the
/// same way the executor treats any other unresolvable reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ActionDefinition {
    /// Request a screen switch, directly or via `prop:<key>` indirection.
    Navigate {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        screen: Option<String>,
    },
    /// Fire a haptic pulse pattern.
    Haptic {
        #[serde(default, rename = "hapticType")]
        haptic_type: HapticType,
    },
    /// `context[key] = value`, unconditional overwrite.
    SetValue {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        key: Option<String>,
        #[serde(default)]
        value: Value,
    },
    /// `context[key] += by` (missing/non-numeric reads as 0, `by` defaults to 1).
    Increment {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        key: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        by: Option<f64>,
    },
    /// `context[key] -= by` (missing/non-numeric reads as 0, `by` defaults to 1).
    Decrement {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        key: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        by: Option<f64>,
    },
    /// Advance the cursor at `context[key]`, clamped to the end of the
    /// list found at `props[listKey]`.
    NextItem {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        key: Option<String>,
        #[serde(default, rename = "listKey", skip_serializing_if = "Option::is_none")]
        list_key: Option<String>,
    },
    /// Retreat the cursor at `context[key]`, floored at 0.
    PrevItem {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        key: Option<String>,
    },
}
