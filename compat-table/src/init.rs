//! One-time setup of a table: identifiers, accessibility attributes and the
//! open/close controls.

use tabledom::{Display, Document, Element, NodeId, Tag};

use crate::cell::{HistoryCell, HistoryPanel};
use crate::config::{Labels, WidgetConfig};
use crate::error::WidgetError;
use crate::ids::IdCounter;

/// Marks a cell whose value has history notes. Set by the page renderer.
pub const HAS_HISTORY_CLASS: &str = "bc-has-history";
/// The hidden notes block inside a history cell. Set by the page renderer.
pub const HISTORY_CLASS: &str = "bc-history";
/// The open control inserted before each panel.
pub const OPEN_CONTROL_CLASS: &str = "bc-history-link";
/// The close control inside each panel.
pub const CLOSE_CONTROL_CLASS: &str = "bc-history-close";
/// Set on the cell whose panel is open.
pub const ACTIVE_CLASS: &str = "active";
pub const BETA_NOTICE_CLASS: &str = "bc-beta-notice";

const ACTIVATED_ATTR: &str = "data-bc-activated";

/// Prepare every history cell of `table`.
///
/// Cells are returned in document order. All cells are checked before the
/// document is touched, so a malformed table is left as it was.
pub fn initialize(
    doc: &mut Document,
    table: NodeId,
    config: &WidgetConfig,
    ids: &IdCounter,
) -> Result<Vec<HistoryCell>, WidgetError> {
    if doc.node(table).tag != Tag::Table {
        return Err(WidgetError::NotATable(table));
    }
    if doc.attr(table, ACTIVATED_ATTR).is_some() {
        return Err(WidgetError::AlreadyActivated(table));
    }

    let found = doc
        .find_by_class(table, HAS_HISTORY_CLASS)
        .into_iter()
        .map(|cell| {
            doc.child_with_class(cell, HISTORY_CLASS)
                .map(|panel| (cell, panel))
                .ok_or(WidgetError::MissingPanel(cell))
        })
        .collect::<Result<Vec<_>, _>>()?;

    insert_beta_notice(doc, table, &config.labels)?;

    let mut cells = Vec::with_capacity(found.len());
    for (cell, panel) in found {
        cells.push(wire_cell(doc, cell, panel, &config.labels, ids)?);
    }

    doc.set_attr(table, ACTIVATED_ATTR, "true");
    log::debug!(
        "[init] table {} ready with {} history cells",
        table,
        cells.len()
    );
    Ok(cells)
}

/// Wire up a history cell added to a table after activation.
///
/// Returns `Ok(None)` if `cell` carries no panel yet; it can be adopted on a
/// later event once the renderer has filled it in.
pub fn adopt(
    doc: &mut Document,
    cell: NodeId,
    config: &WidgetConfig,
    ids: &IdCounter,
) -> Result<Option<HistoryCell>, WidgetError> {
    let Some(panel) = doc.child_with_class(cell, HISTORY_CLASS) else {
        log::debug!("[init] {} has no panel yet, not adopted", cell);
        return Ok(None);
    };
    wire_cell(doc, cell, panel, &config.labels, ids).map(Some)
}

fn wire_cell(
    doc: &mut Document,
    cell: NodeId,
    panel: NodeId,
    labels: &Labels,
    ids: &IdCounter,
) -> Result<HistoryCell, WidgetError> {
    let accessible_id = ids.next_id();

    doc.set_attr(cell, "tabindex", "0");
    doc.set_attr(cell, "aria-expanded", "false");
    doc.set_attr(cell, "aria-controls", accessible_id.clone());

    doc.set_dom_id(panel, accessible_id.clone());
    doc.set_attr(panel, "aria-hidden", "true");
    doc.style_mut(panel).display = Display::None;

    doc.insert_before(panel, open_control(labels))?;
    if doc.find_by_class(panel, CLOSE_CONTROL_CLASS).is_empty() {
        doc.append(panel, close_control(labels));
    }

    log::debug!("[init] {} -> {}", cell, accessible_id);
    Ok(HistoryCell {
        node: cell,
        accessible_id,
        expanded: false,
        panel: HistoryPanel {
            node: panel,
            measured_height: 0,
            has_close_control: true,
        },
    })
}

/// Template for the control stamped before every panel.
fn open_control(labels: &Labels) -> Element {
    Element::button(labels.open_text.clone())
        .class(OPEN_CONTROL_CLASS)
        .attr("aria-label", labels.open_label.clone())
        .attr("tabindex", "-1")
}

fn close_control(labels: &Labels) -> Element {
    Element::button(labels.close_text.clone())
        .class(CLOSE_CONTROL_CLASS)
        .attr("aria-label", labels.close_label.clone())
}

/// Presentational only; the panel state machine never looks at it.
fn insert_beta_notice(doc: &mut Document, table: NodeId, labels: &Labels) -> Result<(), WidgetError> {
    let already = doc
        .previous_sibling(table)
        .is_some_and(|prev| doc.has_class(prev, BETA_NOTICE_CLASS));
    if !already {
        doc.insert_before(
            table,
            Element::block()
                .class(BETA_NOTICE_CLASS)
                .text(labels.beta_notice.clone()),
        )?;
    }
    Ok(())
}
