//! Action Executor - the side-effecting action vocabulary.
//!
//! Applies an ordered action list against `(props, context, host)`. Each
//! action mutates the context record or requests an external effect;
//! none of them touch the template. Later actions see the effects of
//! earlier ones within the same list.
//!
//! Missing keys, unknown screen references, and non-numeric context
//! values all degrade silently: numeric reads treat them as 0, effect
//! requests are simply skipped.

use serde_json::Value;
use tracing::trace;

use crate::definition::ActionDefinition;
use crate::host::HostHandlers;
use crate::types::PropMap;

/// Run `actions` in order against the given props/context/host.
pub fn execute_actions(
    actions: &[ActionDefinition],
    props: &PropMap,
    context: &mut PropMap,
    host: &HostHandlers,
) {
    for action in actions {
        trace!(?action, "executing action");
        match action {
            ActionDefinition::Navigate { screen } => {
                if let Some(reference) = screen {
                    if let Some(screen_id) = resolve_screen(reference, props) {
                        host.navigate(&screen_id);
                    }
                }
            }
            ActionDefinition::Haptic { haptic_type } => {
                host.vibrate(haptic_type.pattern());
            }
            ActionDefinition::SetValue { key, value } => {
                if let Some(key) = key {
                    context.insert(key.clone(), value.clone());
                }
            }
            ActionDefinition::Increment { key, by } => {
                if let Some(key) = key {
                    let current = numeric(context.get(key));
                    context.insert(key.clone(), number(current + by.unwrap_or(1.0)));
                }
            }
            ActionDefinition::Decrement { key, by } => {
                if let Some(key) = key {
                    let current = numeric(context.get(key));
                    context.insert(key.clone(), number(current - by.unwrap_or(1.0)));
                }
            }
            ActionDefinition::NextItem { key, list_key } => {
                if let (Some(key), Some(list_key)) = (key, list_key) {
                    if let Some(list) = props.get(list_key).and_then(Value::as_array) {
                        let current = numeric(context.get(key));
                        let last = list.len() as f64 - 1.0;
                        context.insert(key.clone(), number((current + 1.0).min(last)));
                    }
                }
            }
            ActionDefinition::PrevItem { key } => {
                if let Some(key) = key {
                    let current = numeric(context.get(key));
                    context.insert(key.clone(), number((current - 1.0).max(0.0)));
                }
            }
        }
    }
}

/// Resolve a screen reference: a literal id, or `prop:<key>` meaning
/// "read the destination out of props at `<key>`". Empty results count
/// as unresolved.
pub(crate) fn resolve_screen(reference: &str, props: &PropMap) -> Option<String> {
    let resolved = match reference.strip_prefix("prop:") {
        Some(key) => props.get(key).and_then(Value::as_str).unwrap_or(""),
        None => reference,
    };
    if resolved.is_empty() { None } else { Some(resolved.to_string()) }
}

/// Numeric read of a context/props value: numbers pass through, numeric
/// strings parse, everything else (including missing) reads as 0.
pub(crate) fn numeric(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Store a numeric result, keeping integral values as JSON integers.
fn number(value: f64) -> Value {
    if value.fract() == 0.0 && value >= i64::MIN as f64 && value <= i64::MAX as f64 {
        Value::from(value as i64)
    } else {
        serde_json::Number::from_f64(value).map(Value::Number).unwrap_or(Value::from(0))
    }
}
