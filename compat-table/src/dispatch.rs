//! Routing of input events to panel requests.
//!
//! Listeners are conceptually attached to the table and resolved at dispatch
//! time: the origin node is walked up towards the table and the first node
//! with a known capability decides which route applies. History cells added
//! after activation are adopted by [`CompatTable`](crate::CompatTable) before
//! it dispatches, so they route like the rest.

use tabledom::{Document, Event, EventFlags, Key, NodeId};

use crate::cell::{CellIndex, HistoryCell};
use crate::init::CLOSE_CONTROL_CLASS;

/// What the origin of an event is, as far as the widget is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    HistoryCell(CellIndex),
    /// Somewhere inside the panel of a history cell.
    HistoryPanel(CellIndex),
    CloseControl(CellIndex),
}

/// Input classes the widget listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Click or end of touch.
    Activate,
    /// Enter or Space.
    Confirm,
    /// Escape.
    Dismiss,
}

impl Trigger {
    pub fn from_event(event: &Event) -> Option<Trigger> {
        match *event {
            Event::Click { .. } | Event::TouchEnd { .. } => Some(Trigger::Activate),
            Event::Key { key, .. } => match key {
                Key::Enter | Key::SPACE => Some(Trigger::Confirm),
                Key::Escape => Some(Trigger::Dismiss),
                _ => None,
            },
        }
    }
}

/// What the panel controller is asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Toggle(CellIndex),
    Close,
}

/// Outcome of dispatching one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dispatch {
    pub request: Option<Request>,
    pub flags: EventFlags,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Cell,
    Panel,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Toggle,
    Close,
    Ignore,
}

struct Route {
    tag: Tag,
    trigger: Trigger,
    action: Action,
    flags: EventFlags,
}

const PREVENT_AND_STOP: EventFlags = EventFlags {
    default_prevented: true,
    propagation_stopped: true,
};

/// Dispatch table. A (tag, trigger) pair without a route is not handled.
const ROUTES: &[Route] = &[
    Route {
        tag: Tag::Close,
        trigger: Trigger::Activate,
        action: Action::Close,
        flags: EventFlags::STOP_PROPAGATION,
    },
    Route {
        tag: Tag::Close,
        trigger: Trigger::Confirm,
        action: Action::Close,
        flags: PREVENT_AND_STOP,
    },
    Route {
        tag: Tag::Close,
        trigger: Trigger::Dismiss,
        action: Action::Close,
        flags: PREVENT_AND_STOP,
    },
    // Clicking notes content must not toggle the cell it lives in.
    Route {
        tag: Tag::Panel,
        trigger: Trigger::Activate,
        action: Action::Ignore,
        flags: EventFlags::STOP_PROPAGATION,
    },
    Route {
        tag: Tag::Panel,
        trigger: Trigger::Dismiss,
        action: Action::Close,
        flags: EventFlags::PREVENT_DEFAULT,
    },
    Route {
        tag: Tag::Cell,
        trigger: Trigger::Activate,
        action: Action::Toggle,
        flags: EventFlags::PREVENT_DEFAULT,
    },
    Route {
        tag: Tag::Cell,
        trigger: Trigger::Confirm,
        action: Action::Toggle,
        flags: EventFlags::PREVENT_DEFAULT,
    },
    Route {
        tag: Tag::Cell,
        trigger: Trigger::Dismiss,
        action: Action::Close,
        flags: EventFlags::PREVENT_DEFAULT,
    },
];

/// Find the capability of `origin`, looking no further up than `table`.
pub fn resolve_capability(
    doc: &Document,
    table: NodeId,
    cells: &[HistoryCell],
    origin: NodeId,
) -> Option<Capability> {
    for node in doc.ancestors(origin) {
        if node == table {
            return None;
        }
        if doc.has_class(node, CLOSE_CONTROL_CLASS) {
            // Close controls only count inside a known panel.
            if let Some(index) = owner_of_panel_containing(doc, cells, node) {
                return Some(Capability::CloseControl(index));
            }
        }
        if let Some(index) = cells.iter().position(|c| c.panel.node == node) {
            return Some(Capability::HistoryPanel(CellIndex(index)));
        }
        if let Some(index) = cells.iter().position(|c| c.node == node) {
            return Some(Capability::HistoryCell(CellIndex(index)));
        }
    }
    None
}

fn owner_of_panel_containing(doc: &Document, cells: &[HistoryCell], node: NodeId) -> Option<CellIndex> {
    cells
        .iter()
        .position(|c| doc.is_inclusive_descendant(node, c.panel.node))
        .map(CellIndex)
}

/// Route `event` to a request.
pub fn dispatch(doc: &Document, table: NodeId, cells: &[HistoryCell], event: &Event) -> Dispatch {
    let Some(trigger) = Trigger::from_event(event) else {
        return Dispatch::default();
    };
    let Some(capability) = resolve_capability(doc, table, cells, event.target()) else {
        return Dispatch::default();
    };

    let (tag, index) = match capability {
        Capability::HistoryCell(i) => (Tag::Cell, i),
        Capability::HistoryPanel(i) => (Tag::Panel, i),
        Capability::CloseControl(i) => (Tag::Close, i),
    };

    let Some(route) = ROUTES
        .iter()
        .find(|r| r.tag == tag && r.trigger == trigger)
    else {
        return Dispatch::default();
    };

    let request = match route.action {
        Action::Toggle => Some(Request::Toggle(index)),
        Action::Close => Some(Request::Close),
        Action::Ignore => None,
    };
    log::trace!(
        "[dispatch] {:?} on {:?} -> {:?}",
        trigger,
        capability,
        request
    );
    Dispatch {
        request,
        flags: route.flags,
    }
}
