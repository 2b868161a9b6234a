//! The panel state machine.
//!
//! At most one panel per table is open. Every open and close runs an
//! animation and holds the lock until the animation's [`Completion`]
//! resolves; requests arriving in the meantime are dropped, never queued.
//! Switching from one cell to another closes the first panel completely
//! before the second starts opening.

use std::time::Instant;

use tabledom::{
    Animator, Completion, Display, Document, NodeId, Position, PropertyTarget, layout_table,
    layout::natural_height,
};

use crate::cell::{CellIndex, HistoryCell, Visibility};
use crate::config::WidgetConfig;
use crate::init::ACTIVE_CLASS;
use crate::layout::place_panel;
use crate::sink::{Interaction, InteractionSink};

/// Which panel, if any, is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Idle,
    /// Open or, while the lock is held, opening.
    Open(CellIndex),
    /// Closing `cell`; `pending` opens once the close finishes.
    Closing {
        cell: CellIndex,
        pending: Option<CellIndex>,
    },
}

/// What to do when the running animation completes.
#[derive(Debug, Clone, Copy)]
enum Continuation {
    FinishOpen(CellIndex),
    FinishClose {
        cell: CellIndex,
        target: Option<CellIndex>,
    },
}

#[derive(Debug)]
struct PendingAnimation {
    completion: Completion,
    then: Continuation,
}

/// Everything the controller touches besides its own state.
pub struct Host<'a> {
    pub doc: &'a mut Document,
    pub animator: &'a mut Animator,
    pub now: Instant,
}

impl<'a> Host<'a> {
    pub fn new(doc: &'a mut Document, animator: &'a mut Animator, now: Instant) -> Self {
        Self { doc, animator, now }
    }
}

pub struct PanelController {
    table: NodeId,
    cells: Vec<HistoryCell>,
    config: WidgetConfig,
    sink: Box<dyn InteractionSink>,
    state: PanelState,
    animating: bool,
    pending: Option<PendingAnimation>,
    /// Cells whose bottom border was widened, with their resting width.
    distorted: Vec<(NodeId, u16)>,
}

impl PanelController {
    pub fn new(
        table: NodeId,
        cells: Vec<HistoryCell>,
        config: WidgetConfig,
        sink: Box<dyn InteractionSink>,
    ) -> Self {
        Self {
            table,
            cells,
            config,
            sink,
            state: PanelState::Idle,
            animating: false,
            pending: None,
            distorted: Vec::new(),
        }
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn cells(&self) -> &[HistoryCell] {
        &self.cells
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// The cell whose panel is open or opening.
    pub fn open_cell(&self) -> Option<CellIndex> {
        match self.state {
            PanelState::Open(cell) => Some(cell),
            PanelState::Idle | PanelState::Closing { .. } => None,
        }
    }

    pub fn visibility(&self, cell: CellIndex) -> Visibility {
        match self.state {
            PanelState::Open(open) if open == cell => {
                if self.animating {
                    Visibility::AnimatingOpen
                } else {
                    Visibility::Open
                }
            }
            PanelState::Closing { cell: closing, .. } if closing == cell => {
                Visibility::AnimatingClosed
            }
            _ => Visibility::Hidden,
        }
    }

    /// Track a history cell wired up after activation.
    pub fn register(&mut self, cell: HistoryCell) -> CellIndex {
        self.cells.push(cell);
        CellIndex(self.cells.len() - 1)
    }

    /// Open `cell`, close it if it is the open one, or switch to it.
    /// Returns false when the request was dropped.
    pub fn toggle(&mut self, host: &mut Host<'_>, cell: CellIndex) -> bool {
        if cell.0 >= self.cells.len() {
            log::warn!("[controller] toggle {} ignored: no such cell", cell);
            return false;
        }
        if self.animating {
            log::debug!("[controller] toggle {} dropped: animating", cell);
            return false;
        }
        match self.state {
            PanelState::Idle => self.open(host, cell),
            PanelState::Open(current) if current == cell => self.close(host, None),
            PanelState::Open(_) => self.close(host, Some(cell)),
            // Closing always holds the lock.
            PanelState::Closing { .. } => false,
        }
    }

    /// Close the open panel, then open `target` if given.
    /// Returns false when the request was dropped or there was nothing to do.
    pub fn close(&mut self, host: &mut Host<'_>, target: Option<CellIndex>) -> bool {
        if let Some(target) = target.filter(|t| t.0 >= self.cells.len()) {
            log::warn!("[controller] close then {} ignored: no such cell", target);
            return false;
        }
        if self.animating {
            log::debug!("[controller] close dropped: animating");
            return false;
        }
        match self.state {
            PanelState::Idle => match target {
                Some(target) => self.open(host, target),
                None => false,
            },
            PanelState::Open(current) => {
                self.begin_close(host, current, target);
                true
            }
            PanelState::Closing { .. } => false,
        }
    }

    /// Resume after animations. Call after every [`Animator::update`].
    pub fn poll(&mut self, host: &mut Host<'_>) {
        while let Some(mut pending) = self.pending.take() {
            if !pending.completion.is_complete() {
                self.pending = Some(pending);
                return;
            }
            match pending.then {
                Continuation::FinishOpen(cell) => self.finish_open(cell),
                Continuation::FinishClose { cell, target } => self.finish_close(host, cell, target),
            }
        }
    }

    fn open(&mut self, host: &mut Host<'_>, index: CellIndex) -> bool {
        let Some(cell) = self.cells.get(index.0) else {
            log::warn!("[controller] open {} ignored: no such cell", index);
            return false;
        };
        let (cell_node, panel_node) = (cell.node, cell.panel.node);
        self.animating = true;

        // Geometry is taken with the panel still collapsed.
        let placement = match layout_table(host.doc, self.table) {
            Ok(geometry) => place_panel(
                host.doc,
                &geometry,
                self.table,
                cell_node,
                self.config.header_stickiness,
            ),
            Err(e) => {
                log::warn!("[controller] layout failed: {}", e);
                self.animating = false;
                return false;
            }
        };

        {
            let style = host.doc.style_mut(panel_node);
            style.position = Position::Absolute;
            style.width = Some(placement.width);
            style.left = Some(placement.left);
            style.top = Some(placement.top);
            style.height = Some(0);
            style.display = Display::Visible;
        }
        host.doc.set_attr(panel_node, "aria-hidden", "false");
        host.doc.add_class(cell_node, ACTIVE_CLASS);
        host.doc.set_attr(cell_node, "aria-expanded", "true");

        let height = natural_height(host.doc, panel_node, placement.width);
        let cell = &mut self.cells[index.0];
        cell.expanded = true;
        cell.panel.measured_height = height;

        self.distorted = placement
            .distorted
            .iter()
            .map(|&n| (n, host.doc.style(n).border.bottom))
            .collect();
        let mut targets = vec![PropertyTarget::height(panel_node, height)];
        targets.extend(
            placement
                .distorted
                .iter()
                .map(|&n| PropertyTarget::border_bottom(n, height)),
        );

        log::debug!(
            "[controller] opening {} (height {}, {} cells widened)",
            index,
            height,
            self.distorted.len()
        );
        let completion = host.animator.animate(
            host.doc,
            &targets,
            self.config.open_transition(),
            host.now,
        );
        self.state = PanelState::Open(index);
        self.pending = Some(PendingAnimation {
            completion,
            then: Continuation::FinishOpen(index),
        });
        true
    }

    fn finish_open(&mut self, index: CellIndex) {
        self.animating = false;
        log::debug!("[controller] {} open", index);
        self.sink.record(&Interaction::Opened {
            accessible_id: self.cells[index.0].accessible_id.clone(),
        });
    }

    fn begin_close(&mut self, host: &mut Host<'_>, index: CellIndex, target: Option<CellIndex>) {
        self.animating = true;
        let panel_node = self.cells[index.0].panel.node;

        let mut targets: Vec<PropertyTarget> = self
            .distorted
            .iter()
            .map(|&(n, resting)| PropertyTarget::border_bottom(n, resting))
            .collect();
        targets.push(PropertyTarget::height(panel_node, 0));

        log::debug!("[controller] closing {} (then {:?})", index, target);
        let completion = host.animator.animate(
            host.doc,
            &targets,
            self.config.close_transition(),
            host.now,
        );
        self.state = PanelState::Closing {
            cell: index,
            pending: target,
        };
        self.pending = Some(PendingAnimation {
            completion,
            then: Continuation::FinishClose {
                cell: index,
                target,
            },
        });
    }

    fn finish_close(&mut self, host: &mut Host<'_>, index: CellIndex, target: Option<CellIndex>) {
        let (cell_node, panel_node) = {
            let cell = &mut self.cells[index.0];
            cell.expanded = false;
            (cell.node, cell.panel.node)
        };

        host.doc.set_attr(panel_node, "aria-hidden", "true");
        {
            let style = host.doc.style_mut(panel_node);
            style.display = Display::None;
            style.height = None;
        }
        host.doc.remove_class(cell_node, ACTIVE_CLASS);
        host.doc.set_attr(cell_node, "aria-expanded", "false");
        self.distorted.clear();

        self.state = PanelState::Idle;
        self.animating = false;

        if host.doc.focus_within(panel_node) {
            host.doc.focus(cell_node);
        }

        log::debug!("[controller] {} closed", index);
        self.sink.record(&Interaction::Closed {
            accessible_id: self.cells[index.0].accessible_id.clone(),
        });

        if let Some(target) = target {
            self.open(host, target);
        }
    }
}
