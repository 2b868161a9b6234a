//! The widget as a page sees it: activate once per table, then feed it
//! events and clock ticks.

use std::time::Instant;

use tabledom::{Animator, Document, Event, EventFlags, NodeId};

use crate::cell::{CellIndex, HistoryCell, Visibility};
use crate::config::WidgetConfig;
use crate::controller::{Host, PanelController, PanelState};
use crate::dispatch::{Request, dispatch};
use crate::error::WidgetError;
use crate::ids::IdCounter;
use crate::init::{HAS_HISTORY_CLASS, adopt, initialize};
use crate::sink::{InteractionSink, LogSink};

/// History panels of one compatibility table.
///
/// # Example
///
/// ```
/// use std::time::{Duration, Instant};
///
/// use compat_table::{CompatTable, IdCounter, LogSink, WidgetConfig};
/// use tabledom::{Animator, Document, Element, Event};
///
/// let mut doc = Document::new();
/// let table = doc.append(
///     doc.root(),
///     Element::table().child(Element::row().child(
///         Element::cell("42")
///             .id("c1")
///             .class("bc-has-history")
///             .child(Element::block().class("bc-history").text("Prefixed")),
///     )),
/// );
/// let mut animator = Animator::new();
/// let mut widget = CompatTable::activate_with(
///     &mut doc,
///     table,
///     WidgetConfig::default(),
///     &IdCounter::new(),
///     Box::new(LogSink),
/// )
/// .unwrap();
///
/// let cell = doc.find_by_dom_id("c1").unwrap();
/// let now = Instant::now();
/// widget.handle_event(&mut doc, &mut animator, &Event::Click { target: cell }, now);
/// widget.tick(&mut doc, &mut animator, now + Duration::from_secs(1));
/// assert_eq!(doc.attr(cell, "aria-expanded"), Some("true"));
/// ```
pub struct CompatTable {
    table: NodeId,
    controller: PanelController,
    /// Issues identifiers for cells added after activation.
    ids: IdCounter,
}

impl CompatTable {
    /// Activate on `table` using the page-wide id counter and logging sink.
    ///
    /// Activating the same table twice fails with
    /// [`WidgetError::AlreadyActivated`].
    pub fn activate(
        doc: &mut Document,
        table: NodeId,
        config: WidgetConfig,
    ) -> Result<Self, WidgetError> {
        Self::activate_with(doc, table, config, &IdCounter::page(), Box::new(LogSink))
    }

    pub fn activate_with(
        doc: &mut Document,
        table: NodeId,
        config: WidgetConfig,
        ids: &IdCounter,
        sink: Box<dyn InteractionSink>,
    ) -> Result<Self, WidgetError> {
        let cells = initialize(doc, table, &config, ids)?;
        Ok(Self {
            table,
            controller: PanelController::new(table, cells, config, sink),
            ids: ids.clone(),
        })
    }

    pub fn table(&self) -> NodeId {
        self.table
    }

    /// Dispatch an input event. The returned flags say whether the default
    /// action was prevented and whether propagation stopped.
    ///
    /// History cells added to the table since activation are wired up the
    /// first time an event reaches them.
    pub fn handle_event(
        &mut self,
        doc: &mut Document,
        animator: &mut Animator,
        event: &Event,
        now: Instant,
    ) -> EventFlags {
        self.adopt_new_cell(doc, event.target());
        let routed = dispatch(doc, self.table, self.controller.cells(), event);
        if let Some(request) = routed.request {
            let mut host = Host::new(doc, animator, now);
            match request {
                Request::Toggle(cell) => self.controller.toggle(&mut host, cell),
                Request::Close => self.controller.close(&mut host, None),
            };
        }
        routed.flags
    }

    /// Adopt the history cell enclosing `origin` if it is not registered yet.
    fn adopt_new_cell(&mut self, doc: &mut Document, origin: NodeId) {
        let Some(cell) = doc
            .ancestors(origin)
            .take_while(|&n| n != self.table)
            .find(|&n| doc.has_class(n, HAS_HISTORY_CLASS))
        else {
            return;
        };
        if !doc.is_inclusive_descendant(cell, self.table) || self.cell_index(cell).is_some() {
            return;
        }
        match adopt(doc, cell, self.controller.config(), &self.ids) {
            Ok(Some(adopted)) => {
                let index = self.controller.register(adopted);
                log::debug!("[widget] adopted {} as {}", cell, index);
            }
            Ok(None) => {}
            Err(e) => log::warn!("[widget] could not adopt {}: {}", cell, e),
        }
    }

    /// Request a toggle of `cell` directly. Returns false if dropped.
    pub fn toggle(
        &mut self,
        doc: &mut Document,
        animator: &mut Animator,
        cell: CellIndex,
        now: Instant,
    ) -> bool {
        self.controller
            .toggle(&mut Host::new(doc, animator, now), cell)
    }

    /// Request the open panel to close. Returns false if dropped or idle.
    pub fn close(&mut self, doc: &mut Document, animator: &mut Animator, now: Instant) -> bool {
        self.controller
            .close(&mut Host::new(doc, animator, now), None)
    }

    /// Advance animations to `now` and resume the controller if the running
    /// animation finished.
    pub fn tick(&mut self, doc: &mut Document, animator: &mut Animator, now: Instant) {
        animator.update(doc, now);
        self.controller.poll(&mut Host::new(doc, animator, now));
    }

    pub fn state(&self) -> PanelState {
        self.controller.state()
    }

    pub fn is_animating(&self) -> bool {
        self.controller.is_animating()
    }

    pub fn open_cell(&self) -> Option<CellIndex> {
        self.controller.open_cell()
    }

    pub fn cells(&self) -> &[HistoryCell] {
        self.controller.cells()
    }

    pub fn cell(&self, index: CellIndex) -> Option<&HistoryCell> {
        self.controller.cells().get(index.0)
    }

    /// Index of the history cell rendered by `node`.
    pub fn cell_index(&self, node: NodeId) -> Option<CellIndex> {
        self.controller
            .cells()
            .iter()
            .position(|c| c.node == node)
            .map(CellIndex)
    }

    pub fn visibility(&self, cell: CellIndex) -> Visibility {
        self.controller.visibility(cell)
    }

    pub fn config(&self) -> &WidgetConfig {
        self.controller.config()
    }
}
