//! Panel placement.

use tabledom::{Document, LayoutResult, NodeId, Tag};

use crate::config::HeaderStickiness;

/// Where an opening panel goes and which cells make room for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Panel width: the full table width.
    pub width: u16,
    /// Horizontal offset from the cell's padding box to the table's left edge.
    pub left: i16,
    /// Vertical offset from the cell's padding box to just below the cell.
    pub top: i16,
    /// Cells whose bottom border grows while the panel opens.
    pub distorted: Vec<NodeId>,
}

/// Compute the placement of `cell`'s panel from the current table layout.
///
/// `geometry` must come from laying out `table` with the panel still
/// collapsed, so the cell's bottom border has its resting width.
pub fn place_panel(
    doc: &Document,
    geometry: &LayoutResult,
    table: NodeId,
    cell: NodeId,
    stickiness: HeaderStickiness,
) -> Placement {
    let table_rect = geometry.get(&table).copied().unwrap_or_default();
    let cell_rect = geometry.get(&cell).copied().unwrap_or_default();
    let border = doc.style(cell).border;

    let left = table_rect.left() as i32 - cell_rect.left() as i32 - border.left as i32;
    let top = cell_rect.height as i32 - border.bottom as i32 - border.top as i32;

    Placement {
        width: table_rect.width,
        left: to_offset(left),
        top: to_offset(top),
        distorted: distortion_scope(doc, cell, stickiness),
    }
}

fn to_offset(value: i32) -> i16 {
    value.clamp(i16::MIN as i32, i16::MAX as i32) as i16
}

/// Cells whose bottom border is animated along with the panel.
pub fn distortion_scope(doc: &Document, cell: NodeId, stickiness: HeaderStickiness) -> Vec<NodeId> {
    let Some(row) = doc.parent(cell) else {
        return vec![cell];
    };
    let siblings = doc.children(row).iter().copied();
    match stickiness {
        HeaderStickiness::NotSticky => siblings
            .filter(|&c| doc.node(c).tag == Tag::Cell)
            .collect(),
        HeaderStickiness::CellSticky => vec![cell],
        HeaderStickiness::RowSticky => siblings.filter(|&c| doc.node(c).tag.is_cell()).collect(),
    }
}
