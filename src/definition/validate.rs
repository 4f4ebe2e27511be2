//! Import-time validation.
//!
//! This is the one point where a malformed definition is rejected with an
//! explicit error. Everything past import favors silent degradation: the
//! renderer and the engine never fail on a definition that got through
//! here (and degrade without panicking even on one that did not).

use thiserror::Error;

use super::behavior::Behavior;
use super::component::ComponentDefinition;
use super::settings::SettingKind;

/// Error importing a component definition.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The payload was not valid JSON for the definition shape.
    #[error("failed to parse component definition: {0}")]
    Parse(#[from] serde_json::Error),
    /// The definition parsed but failed semantic validation.
    #[error("invalid component definition: {}", join_errors(.0))]
    Invalid(Vec<ValidateError>),
}

/// A single semantic defect found during validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidateError {
    #[error("component name must not be empty")]
    EmptyName,
    #[error("display name must not be empty")]
    EmptyDisplayName,
    #[error("initial state `{initial}` is not declared in states")]
    UnknownInitialState { initial: String },
    #[error("state `{state}` has a transition targeting undeclared state `{target}`")]
    UnknownTransitionTarget { state: String, target: String },
    #[error("select setting `{key}` declares no options")]
    EmptySelectOptions { key: String },
    #[error("items setting `{key}` declares no item fields")]
    EmptyItemFields { key: String },
}

fn join_errors(errors: &[ValidateError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Check a parsed definition for semantic defects.
///
/// All defects are collected so an author sees the full list at once,
/// the way the original import dialog reported them.
pub fn validate(definition: &ComponentDefinition) -> Result<(), Vec<ValidateError>> {
    let mut errors = Vec::new();

    if definition.name.trim().is_empty() {
        errors.push(ValidateError::EmptyName);
    }
    if definition.display_name.trim().is_empty() {
        errors.push(ValidateError::EmptyDisplayName);
    }

    for setting in &definition.settings {
        match &setting.kind {
            SettingKind::Select { options } if options.is_empty() => {
                errors.push(ValidateError::EmptySelectOptions { key: setting.key.clone() });
            }
            SettingKind::Items { item_fields } if item_fields.is_empty() => {
                errors.push(ValidateError::EmptyItemFields { key: setting.key.clone() });
            }
            _ => {}
        }
    }

    if let Some(Behavior::StateMachine(machine)) = &definition.behavior {
        if !machine.states.contains_key(&machine.initial) {
            errors.push(ValidateError::UnknownInitialState { initial: machine.initial.clone() });
        }
        for (state_name, state) in &machine.states {
            for spec in state.on.values() {
                for transition in spec.iter() {
                    if !machine.states.contains_key(&transition.target) {
                        errors.push(ValidateError::UnknownTransitionTarget {
                            state: state_name.clone(),
                            target: transition.target.clone(),
                        });
                    }
                }
            }
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Parse and validate a definition from JSON text.
pub fn import_str(json: &str) -> Result<ComponentDefinition, ImportError> {
    import_value(serde_json::from_str(json)?)
}

/// Validate a definition from an already-parsed JSON value.
pub fn import_value(value: serde_json::Value) -> Result<ComponentDefinition, ImportError> {
    let definition: ComponentDefinition = serde_json::from_value(value)?;
    validate(&definition).map_err(ImportError::Invalid)?;
    Ok(definition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base() -> serde_json::Value {
        json!({
            "name": "swipe-deck",
            "displayName": "Swipe Deck",
            "template": { "type": "container" }
        })
    }

    #[test]
    fn test_valid_definition_passes() {
        assert!(import_value(base()).is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut raw = base();
        raw["name"] = json!("   ");
        let err = import_value(raw).unwrap_err();
        let ImportError::Invalid(errors) = err else {
            panic!("expected validation failure");
        };
        assert_eq!(errors, vec![ValidateError::EmptyName]);
    }

    #[test]
    fn test_unknown_initial_state_rejected() {
        let mut raw = base();
        raw["behavior"] = json!({
            "type": "state-machine",
            "initial": "missing",
            "states": { "idle": {} }
        });
        let ImportError::Invalid(errors) = import_value(raw).unwrap_err() else {
            panic!("expected validation failure");
        };
        assert_eq!(
            errors,
            vec![ValidateError::UnknownInitialState { initial: "missing".into() }]
        );
    }

    #[test]
    fn test_unknown_transition_target_rejected() {
        let mut raw = base();
        raw["behavior"] = json!({
            "type": "state-machine",
            "initial": "idle",
            "states": {
                "idle": { "on": { "TAP": { "target": "gone" } } }
            }
        });
        let ImportError::Invalid(errors) = import_value(raw).unwrap_err() else {
            panic!("expected validation failure");
        };
        assert_eq!(
            errors,
            vec![ValidateError::UnknownTransitionTarget {
                state: "idle".into(),
                target: "gone".into(),
            }]
        );
    }

    #[test]
    fn test_all_errors_collected() {
        let raw = json!({
            "name": "",
            "displayName": "",
            "settings": [
                { "key": "layout", "label": "Layout", "type": "select", "options": [] }
            ],
            "template": { "type": "container" }
        });
        let ImportError::Invalid(errors) = import_value(raw).unwrap_err() else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_parse_error_reported() {
        let err = import_str("{ not json").unwrap_err();
        assert!(matches!(err, ImportError::Parse(_)));
    }
}
