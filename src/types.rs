//! Core types for protoview.
//!
//! Every "type tag" family of the component-definition format is a closed
//! sum type here, matched exhaustively by the renderer and the engine.
//! Adding a new event, gesture, or haptic kind is a compile-time-checked
//! extension point, not a runtime string switch.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A bag of JSON values keyed by property name (props, FSM context).
pub type PropMap = serde_json::Map<String, serde_json::Value>;

/// Visual-style keys and values, passed through verbatim to the host's
/// rendering layer. The interpreter never interprets these beyond
/// `flexDirection` on flow containers.
pub type StyleMap = serde_json::Map<String, serde_json::Value>;

// =============================================================================
// Events
// =============================================================================

/// Event dispatched into a component's behavior machine.
///
/// Wire names are SCREAMING_SNAKE_CASE (`"TAP"`, `"SWIPE_LEFT"`, ...).
/// Only `Tap` is produced by the renderer's gesture wiring today; the
/// others parse and travel through the engine unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    Tap,
    SwipeLeft,
    SwipeRight,
    LongPress,
}

impl EventType {
    /// Wire name of this event.
    pub const fn name(self) -> &'static str {
        match self {
            EventType::Tap => "TAP",
            EventType::SwipeLeft => "SWIPE_LEFT",
            EventType::SwipeRight => "SWIPE_RIGHT",
            EventType::LongPress => "LONG_PRESS",
        }
    }
}

/// Extra data carried alongside an event.
///
/// Nothing in the action vocabulary reads it yet (guards are not
/// evaluated), but gesture wiring fills in the loop position so hosts
/// and future transitions can see which list item was activated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventPayload {
    /// Loop position of the node that produced the event, if any.
    pub item_index: Option<usize>,
}

// =============================================================================
// Gestures (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Set of gestures a template node declares support for.
    ///
    /// On the wire this is an array of gesture names; unknown names are
    /// ignored rather than rejected.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Gesture: u8 {
        const TAP         = 1 << 0;
        const SWIPE_LEFT  = 1 << 1;
        const SWIPE_RIGHT = 1 << 2;
        const LONG_PRESS  = 1 << 3;
    }
}

impl Gesture {
    // NOTE: `from_name(&str) -> Option<Self>` is provided by the
    // `bitflags!` macro (bitflags >= 2.5) and matches these same flag
    // names, so the previously hand-written duplicate was removed to
    // resolve the E0592/E0034 name collision. Behavior is unchanged.

    /// Wire names of the gestures present in this set, in flag order.
    pub fn names(self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.contains(Gesture::TAP) {
            out.push("TAP");
        }
        if self.contains(Gesture::SWIPE_LEFT) {
            out.push("SWIPE_LEFT");
        }
        if self.contains(Gesture::SWIPE_RIGHT) {
            out.push("SWIPE_RIGHT");
        }
        if self.contains(Gesture::LONG_PRESS) {
            out.push("LONG_PRESS");
        }
        out
    }
}

impl Serialize for Gesture {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.names().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Gesture {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let names = Vec::<String>::deserialize(deserializer)?;
        let mut set = Gesture::empty();
        for name in &names {
            if let Some(gesture) = Gesture::from_name(name) {
                set |= gesture;
            }
        }
        Ok(set)
    }
}

// =============================================================================
// Haptics
// =============================================================================

/// Haptic feedback intensity, each mapped to a fixed pulse-duration
/// pattern in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HapticType {
    #[default]
    Light,
    Medium,
    Heavy,
    Success,
    Error,
    Warning,
}

impl HapticType {
    /// Vibration pulse pattern for this haptic kind.
    pub const fn pattern(self) -> &'static [u32] {
        match self {
            HapticType::Light => &[10],
            HapticType::Medium => &[20],
            HapticType::Heavy => &[30],
            HapticType::Success => &[10, 50, 10],
            HapticType::Error => &[50, 50, 50],
            HapticType::Warning => &[30, 50, 30],
        }
    }
}

// =============================================================================
// Render Mode
// =============================================================================

/// How a component is being rendered.
///
/// `Static` is the authoring/editor view: gesture wiring is disabled and
/// inputs are read-only. `Preview` is the interactive view: taps dispatch
/// events and buttons may navigate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    Static,
    Preview,
}

impl RenderMode {
    /// Whether gesture wiring is active in this mode.
    pub const fn is_interactive(self) -> bool {
        matches!(self, RenderMode::Preview)
    }
}

// =============================================================================
// Layout / Button appearance
// =============================================================================

/// Flow direction of a container, read from `style.flexDirection`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexDirection {
    #[default]
    Column,
    Row,
    ColumnReverse,
    RowReverse,
}

impl FlexDirection {
    /// Parse a CSS-style direction name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "column" => Some(FlexDirection::Column),
            "row" => Some(FlexDirection::Row),
            "column-reverse" => Some(FlexDirection::ColumnReverse),
            "row-reverse" => Some(FlexDirection::RowReverse),
            _ => None,
        }
    }
}

/// Visual variant of a button element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Destructive,
}

/// Size class of a button element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    S,
    #[default]
    M,
    L,
}
