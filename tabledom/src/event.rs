use crate::element::NodeId;

/// Input events, targeted at the node they originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Pointer click.
    Click { target: NodeId },
    /// End of a touch on a touch screen. Treated like a click by listeners
    /// that care about activation.
    TouchEnd { target: NodeId },
    /// Key press, targeted at the focused node.
    Key {
        target: NodeId,
        key: Key,
        modifiers: Modifiers,
    },
}

impl Event {
    pub fn target(&self) -> NodeId {
        match *self {
            Event::Click { target } | Event::TouchEnd { target } | Event::Key { target, .. } => {
                target
            }
        }
    }

    /// Key press without modifiers.
    pub fn key(target: NodeId, key: Key) -> Self {
        Event::Key {
            target,
            key,
            modifiers: Modifiers::default(),
        }
    }
}

/// Simplified key representation. Space arrives as `Char(' ')`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    BackTab,
    Backspace,
    Up,
    Down,
    Left,
    Right,
}

impl Key {
    pub const SPACE: Key = Key::Char(' ');
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// What a listener did with an event, mirroring `preventDefault()` and
/// `stopPropagation()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventFlags {
    pub default_prevented: bool,
    pub propagation_stopped: bool,
}

impl EventFlags {
    pub const NONE: EventFlags = EventFlags {
        default_prevented: false,
        propagation_stopped: false,
    };
    pub const PREVENT_DEFAULT: EventFlags = EventFlags {
        default_prevented: true,
        propagation_stopped: false,
    };
    pub const STOP_PROPAGATION: EventFlags = EventFlags {
        default_prevented: false,
        propagation_stopped: true,
    };

    pub fn is_handled(&self) -> bool {
        self.default_prevented || self.propagation_stopped
    }
}
