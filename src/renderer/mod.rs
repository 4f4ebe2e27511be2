//! Template Renderer - materializes a template tree into visual nodes.
//!
//! A pure function over `(TemplateElement, RenderContext)`: same inputs,
//! same output tree, no interpreter state touched. Data bindings resolve
//! through the context's value paths; unresolvable bindings display as
//! empty rather than failing. Gesture wiring is attached only in
//! preview mode.
//!
//! ```text
//! TemplateElement ── render ──► VisualNode
//!        │                          │
//!        └── list/stack items ──────┘  (derived per-iteration contexts)
//! ```

mod context;
mod node;

pub use context::{display_string, RenderContext};
pub use node::{StackCard, TapSpec, VisualKind, VisualNode};

use serde_json::Value;

use crate::definition::{ButtonAction, ElementKind, TemplateElement};
use crate::engine::numeric;
use crate::engine::resolve_screen;
use crate::types::{FlexDirection, Gesture, StyleMap};

/// Spacer height when the element does not specify one.
const DEFAULT_SPACER_HEIGHT: f64 = 16.0;

/// Label shown on a button whose binding resolves to nothing.
const DEFAULT_BUTTON_LABEL: &str = "Button";

/// How many consecutive cards a stack shows from its cursor.
const STACK_WINDOW: usize = 3;

/// Render one template element against a context snapshot.
///
/// Returns `None` exactly when the element renders nothing: a `list` or
/// `stack` whose `dataKey` does not resolve to a sequence or whose
/// `itemTemplate` is absent.
pub fn render(element: &TemplateElement, ctx: RenderContext<'_>) -> Option<VisualNode> {
    let resolved = element.prop.as_deref().and_then(|path| ctx.resolve(path));

    let kind = match &element.kind {
        ElementKind::Container { children } => VisualKind::Container {
            direction: flow_direction(&element.style),
            children: children
                .iter()
                .filter_map(|child| render(child, ctx))
                .collect(),
        },
        ElementKind::Heading => VisualKind::Heading { text: display_string(resolved) },
        ElementKind::Text => VisualKind::Text { text: display_string(resolved) },
        ElementKind::Image => {
            let source = display_string(resolved);
            VisualKind::Image {
                source: if source.is_empty() { None } else { Some(source) },
            }
        }
        ElementKind::Button { variant, size, .. } => {
            let label = display_string(resolved);
            VisualKind::Button {
                label: if label.is_empty() { DEFAULT_BUTTON_LABEL.to_string() } else { label },
                variant: *variant,
                size: *size,
            }
        }
        ElementKind::Input { placeholder } => VisualKind::Input {
            placeholder: placeholder
                .clone()
                .unwrap_or_else(|| display_string(resolved)),
            read_only: !ctx.mode.is_interactive(),
        },
        ElementKind::Spacer { height } => VisualKind::Spacer {
            height: height.unwrap_or(DEFAULT_SPACER_HEIGHT),
        },
        ElementKind::List { data_key, item_template } => {
            let (data, template) = sequence_binding(data_key, item_template, ctx)?;
            VisualKind::Container {
                direction: flow_direction(&element.style),
                children: data
                    .iter()
                    .enumerate()
                    .filter_map(|(index, item)| render(template, ctx.with_item(item, index)))
                    .collect(),
            }
        }
        ElementKind::Stack { data_key, index_key, item_template } => {
            let (data, template) = sequence_binding(data_key, item_template, ctx)?;
            VisualKind::Stack {
                cards: stack_cards(data, index_key.as_deref(), template, ctx),
            }
        }
    };

    Some(VisualNode {
        kind,
        style: element.style.clone(),
        tap: tap_spec(element, ctx),
    })
}

/// Flow direction from a style map (`flexDirection`), vertical default.
fn flow_direction(style: &StyleMap) -> FlexDirection {
    style
        .get("flexDirection")
        .and_then(Value::as_str)
        .and_then(FlexDirection::from_name)
        .unwrap_or_default()
}

/// The sequence and item template a list/stack needs, or `None` when
/// either half of the binding is missing.
fn sequence_binding<'a>(
    data_key: &Option<String>,
    item_template: &'a Option<Box<TemplateElement>>,
    ctx: RenderContext<'a>,
) -> Option<(&'a [Value], &'a TemplateElement)> {
    let data = data_key
        .as_deref()
        .and_then(|key| ctx.props.get(key))
        .and_then(Value::as_array)?;
    let template = item_template.as_deref()?;
    Some((data.as_slice(), template))
}

/// Window the stack's backing sequence by its cursor and lay the cards
/// out with decreasing prominence.
fn stack_cards(
    data: &[Value],
    index_key: Option<&str>,
    template: &TemplateElement,
    ctx: RenderContext<'_>,
) -> Vec<StackCard> {
    let cursor = match index_key {
        Some(key) => numeric(ctx.context.get(key)),
        None => 0.0,
    };
    // A cursor parked below zero (empty backing list) shows no cards.
    if cursor < 0.0 {
        return Vec::new();
    }
    let start = (cursor as usize).min(data.len());
    let end = (start + STACK_WINDOW).min(data.len());
    let visible = &data[start..end];

    visible
        .iter()
        .enumerate()
        .filter_map(|(depth, item)| {
            let node = render(template, ctx.with_item(item, start + depth))?;
            Some(StackCard {
                index: start + depth,
                scale: 1.0 - depth as f64 * 0.02,
                offset: depth as f64 * 4.0,
                z: visible.len() - depth,
                node,
            })
        })
        .collect()
}

/// Activation wiring for a node: buttons always, other nodes when they
/// declare the TAP gesture, nothing outside preview mode.
fn tap_spec(element: &TemplateElement, ctx: RenderContext<'_>) -> Option<TapSpec> {
    if !ctx.mode.is_interactive() {
        return None;
    }
    if let ElementKind::Button { action, target, .. } = &element.kind {
        let navigate = match (action, target) {
            (Some(ButtonAction::Navigate), Some(reference)) => {
                resolve_screen(reference, ctx.props)
            }
            _ => None,
        };
        return Some(TapSpec { item_index: ctx.item_index, navigate });
    }
    if element.gestures.contains(Gesture::TAP) {
        return Some(TapSpec { item_index: ctx.item_index, navigate: None });
    }
    None
}
