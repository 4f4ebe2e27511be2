//! Visual output tree.
//!
//! The renderer materializes a template into this tree; the host maps it
//! onto whatever real surface it drives (DOM, terminal, test snapshot).
//! Nodes serialize so hosts can snapshot and diff render output.

use serde::Serialize;

use crate::types::{ButtonSize, ButtonVariant, FlexDirection, StyleMap};

/// One materialized visual node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualNode {
    /// Node kind plus its kind-specific data.
    #[serde(flatten)]
    pub kind: VisualKind,
    /// Style pass-through from the template element.
    #[serde(skip_serializing_if = "StyleMap::is_empty")]
    pub style: StyleMap,
    /// Activation wiring. Present only in preview mode, on buttons and
    /// on nodes that declared the TAP gesture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tap: Option<TapSpec>,
}

impl VisualNode {
    /// All tap targets in this subtree, in document order.
    pub fn taps(&self) -> Vec<&TapSpec> {
        let mut out = Vec::new();
        self.collect_taps(&mut out);
        out
    }

    fn collect_taps<'a>(&'a self, out: &mut Vec<&'a TapSpec>) {
        if let Some(tap) = &self.tap {
            out.push(tap);
        }
        match &self.kind {
            VisualKind::Container { children, .. } => {
                for child in children {
                    child.collect_taps(out);
                }
            }
            VisualKind::Stack { cards } => {
                for card in cards {
                    card.node.collect_taps(out);
                }
            }
            _ => {}
        }
    }
}

/// The closed set of visual node kinds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum VisualKind {
    /// Flow of children, vertical unless the style said otherwise.
    Container {
        direction: FlexDirection,
        children: Vec<VisualNode>,
    },
    /// Prominent text line.
    Heading { text: String },
    /// Body text line.
    Text { text: String },
    /// Image by URL-like source. `None` is the defined placeholder
    /// state ("no image"), not an error.
    Image { source: Option<String> },
    /// Activatable control with a resolved label.
    Button {
        label: String,
        variant: ButtonVariant,
        size: ButtonSize,
    },
    /// Text-entry control. Never holds typed state itself.
    Input {
        placeholder: String,
        read_only: bool,
    },
    /// Fixed-height blank.
    Spacer { height: f64 },
    /// Card deck window: at most 3 consecutive cards, cursor card first
    /// and least transformed.
    Stack { cards: Vec<StackCard> },
}

/// One card of a stack window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackCard {
    /// Absolute position of this card in the backing sequence.
    pub index: usize,
    /// Visual scale, decreasing with depth (`1 − depth · 0.02`).
    pub scale: f64,
    /// Vertical offset in units, increasing with depth (`depth · 4`).
    pub offset: f64,
    /// Stacking order; the cursor card has the highest value.
    pub z: usize,
    /// The rendered card content.
    pub node: VisualNode,
}

/// Activation wiring of one visual node.
///
/// Activating a tap target always dispatches a `TAP` event into the
/// behavior machine; `navigate` additionally carries the screen a button
/// resolved at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TapSpec {
    /// Loop position of the node, when rendered inside a list or stack.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_index: Option<usize>,
    /// Screen to request on activation (buttons with `action: "navigate"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigate: Option<String>,
}
