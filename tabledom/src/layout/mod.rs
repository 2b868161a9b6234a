//! Table layout.
//!
//! Rows stack vertically, cells sit side by side and stretch to the tallest
//! cell of their row. A cell's height grows with its bottom border, which is
//! what lets a widened border push the following rows down. Absolutely
//! positioned children are laid out against the padding box of their parent
//! and never affect the size of anything else.

mod rect;

use std::collections::HashMap;

pub use rect::Rect;

use crate::element::{Document, NodeId, Tag};
use crate::error::DomError;
use crate::text::line_count;
use crate::types::Position;

pub type LayoutResult = HashMap<NodeId, Rect>;

/// Width used for cells that do not set one.
pub const DEFAULT_CELL_WIDTH: u16 = 12;

/// Lay out `table` and everything inside it.
///
/// The table's own `left`/`top` style places it on the page; hidden nodes are
/// left out of the result.
pub fn layout_table(doc: &Document, table: NodeId) -> Result<LayoutResult, DomError> {
    if doc.node(table).tag != Tag::Table {
        return Err(DomError::NotATable(table));
    }

    let mut result = LayoutResult::new();
    let style = doc.style(table);
    let origin_x = style.left.unwrap_or(0).max(0) as u16;
    let origin_y = style.top.unwrap_or(0).max(0) as u16;

    let mut y = origin_y;
    let mut width = 0u16;
    for row in rows(doc, table) {
        let (row_width, row_height) = layout_row(doc, row, origin_x, y, &mut result);
        width = width.max(row_width);
        y = y.saturating_add(row_height);
    }

    result.insert(table, Rect::new(origin_x, origin_y, width, y - origin_y));
    Ok(result)
}

/// Rows of a table in document order, looking through head/body sections.
pub fn rows(doc: &Document, table: NodeId) -> Vec<NodeId> {
    let mut out = Vec::new();
    for &child in doc.children(table) {
        if doc.style(child).is_hidden() {
            continue;
        }
        match doc.node(child).tag {
            Tag::Row => out.push(child),
            Tag::Head | Tag::Body => out.extend(
                doc.children(child)
                    .iter()
                    .copied()
                    .filter(|&r| doc.node(r).tag == Tag::Row && !doc.style(r).is_hidden()),
            ),
            _ => {}
        }
    }
    out
}

fn layout_row(
    doc: &Document,
    row: NodeId,
    x: u16,
    y: u16,
    result: &mut LayoutResult,
) -> (u16, u16) {
    let cells: Vec<NodeId> = doc
        .children(row)
        .iter()
        .copied()
        .filter(|&c| doc.node(c).tag.is_cell() && !doc.style(c).is_hidden())
        .collect();

    let widths: Vec<u16> = cells
        .iter()
        .map(|&c| doc.style(c).width.unwrap_or(DEFAULT_CELL_WIDTH))
        .collect();
    let height = cells
        .iter()
        .zip(&widths)
        .map(|(&c, &w)| measure_height(doc, c, w))
        .max()
        .unwrap_or(0);

    let mut cx = x;
    for (&cell, &w) in cells.iter().zip(&widths) {
        let rect = Rect::new(cx, y, w, height);
        result.insert(cell, rect);
        layout_contents(doc, cell, rect, result);
        cx = cx.saturating_add(w);
    }

    let width = cx - x;
    result.insert(row, Rect::new(x, y, width, height));
    (width, height)
}

/// Place the in-flow children of `parent` top to bottom, then its absolutely
/// positioned children.
fn layout_contents(doc: &Document, parent: NodeId, rect: Rect, result: &mut LayoutResult) {
    let style = doc.style(parent);
    let inner_x = rect
        .x
        .saturating_add(style.border.left)
        .saturating_add(style.padding.left);
    let inner_width = inner_width(doc, parent, rect.width);
    let mut y = rect
        .y
        .saturating_add(style.border.top)
        .saturating_add(style.padding.top);
    if let Some(text) = &doc.node(parent).text {
        y = y.saturating_add(lines(text, inner_width));
    }

    for &child in doc.children(parent) {
        let child_style = doc.style(child);
        if child_style.is_hidden() {
            continue;
        }
        match child_style.position {
            Position::Static => {
                let w = child_style.width.unwrap_or(inner_width);
                let h = measure_height(doc, child, w);
                let child_rect = Rect::new(inner_x, y, w, h);
                result.insert(child, child_rect);
                layout_contents(doc, child, child_rect, result);
                y = y.saturating_add(h);
            }
            Position::Absolute => {
                // Offsets are relative to the padding box, i.e. inside the border.
                let base_x = rect.x as i32 + style.border.left as i32;
                let base_y = rect.y as i32 + style.border.top as i32;
                let cx = to_coord(base_x + child_style.left.unwrap_or(0) as i32);
                let cy = to_coord(base_y + child_style.top.unwrap_or(0) as i32);
                let w = child_style.width.unwrap_or(inner_width);
                let h = measure_height(doc, child, w);
                let child_rect = Rect::new(cx, cy, w, h);
                result.insert(child, child_rect);
                layout_contents(doc, child, child_rect, result);
            }
        }
    }
}

fn inner_width(doc: &Document, id: NodeId, outer: u16) -> u16 {
    let style = doc.style(id);
    outer
        .saturating_sub(style.border.horizontal_total())
        .saturating_sub(style.padding.horizontal_total())
}

fn to_coord(value: i32) -> u16 {
    value.clamp(0, u16::MAX as i32) as u16
}

fn lines(text: &str, width: u16) -> u16 {
    u16::try_from(line_count(text, width as usize)).unwrap_or(u16::MAX)
}

/// Outer height of `id` at the given outer width: an explicit `height` wins,
/// otherwise the content is measured.
pub fn measure_height(doc: &Document, id: NodeId, width: u16) -> u16 {
    let style = doc.style(id);
    if style.is_hidden() {
        return 0;
    }
    match style.height {
        Some(h) => h,
        None => natural_height(doc, id, width),
    }
}

/// Height `id` would take at `width` if nothing constrained it: borders,
/// padding, wrapped text and in-flow children. Ignores the node's own
/// `height` and `display`, so it can be measured while collapsed.
pub fn natural_height(doc: &Document, id: NodeId, width: u16) -> u16 {
    let style = doc.style(id);
    let inner = inner_width(doc, id, width);
    let mut height = style
        .border
        .vertical_total()
        .saturating_add(style.padding.vertical_total());
    if let Some(text) = &doc.node(id).text {
        height = height.saturating_add(lines(text, inner));
    }
    for &child in doc.children(id) {
        let child_style = doc.style(child);
        if child_style.in_flow() {
            height = height
                .saturating_add(measure_height(doc, child, child_style.width.unwrap_or(inner)));
        }
    }
    height
}
