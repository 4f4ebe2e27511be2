//! Host callbacks - the interpreter's only outward-facing boundary.
//!
//! The core performs no I/O of its own. When an action or a button tap
//! wants a screen switch or a haptic pulse, the request goes through the
//! handlers registered here; the host decides how (and whether) to honor
//! it. Both calls are best-effort no-ops when no handler is set.
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use protoview::HostHandlers;
//!
//! let visited = Rc::new(RefCell::new(Vec::new()));
//! let visited_log = visited.clone();
//!
//! let host = HostHandlers {
//!     on_navigate: Some(Rc::new(move |screen| {
//!         visited_log.borrow_mut().push(screen.to_string());
//!     })),
//!     ..Default::default()
//! };
//!
//! host.navigate("screen-2");
//! assert_eq!(visited.borrow().as_slice(), ["screen-2"]);
//! ```

use std::rc::Rc;

use tracing::debug;

/// Screen-switch request callback.
pub type NavigateCallback = Rc<dyn Fn(&str)>;

/// Haptic request callback; the pattern is a pulse-duration sequence in
/// milliseconds.
pub type VibrateCallback = Rc<dyn Fn(&[u32])>;

/// Outward callbacks a host wires into the interpreter.
#[derive(Clone, Default)]
pub struct HostHandlers {
    /// Called when the interpreter requests a screen switch.
    pub on_navigate: Option<NavigateCallback>,
    /// Called when the interpreter requests haptic feedback.
    pub on_vibrate: Option<VibrateCallback>,
}

impl HostHandlers {
    /// Request a screen switch. No-op without a handler.
    pub fn navigate(&self, screen_id: &str) {
        debug!(screen_id, "navigation requested");
        if let Some(handler) = &self.on_navigate {
            handler(screen_id);
        }
    }

    /// Request a haptic pulse. No-op without a handler.
    pub fn vibrate(&self, pattern: &[u32]) {
        if let Some(handler) = &self.on_vibrate {
            handler(pattern);
        }
    }
}

impl std::fmt::Debug for HostHandlers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostHandlers")
            .field("on_navigate", &self.on_navigate.is_some())
            .field("on_vibrate", &self.on_vibrate.is_some())
            .finish()
    }
}
