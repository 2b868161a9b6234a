//! JSON description of a compatibility table.

use compat_table::init::{HAS_HISTORY_CLASS, HISTORY_CLASS};
use serde::Deserialize;
use tabledom::{Edges, Element};

#[derive(Debug, Clone, Deserialize)]
pub struct TableFixture {
    pub columns: Vec<ColumnFixture>,
    pub rows: Vec<RowFixture>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ColumnFixture {
    pub title: String,
    pub width: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RowFixture {
    pub feature: String,
    pub cells: Vec<CellFixture>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CellFixture {
    pub id: String,
    pub value: String,
    /// Implementation notes; cells without them get no history panel.
    #[serde(default)]
    pub history: Option<String>,
}

impl TableFixture {
    fn width(&self, column: usize) -> u16 {
        self.columns
            .get(column)
            .map_or(tabledom::layout::DEFAULT_CELL_WIDTH, |c| c.width)
    }

    /// Render the fixture the way the page template would: history cells are
    /// flagged and carry their notes in a hidden block.
    pub fn to_element(&self) -> Element {
        let header = Element::row().children(
            self.columns
                .iter()
                .map(|c| Element::header_cell(c.title.clone()).width(c.width).border(Edges::all(1))),
        );

        let rows = self.rows.iter().map(|row| {
            let feature = Element::header_cell(row.feature.clone())
                .width(self.width(0))
                .border(Edges::all(1));
            let cells = row.cells.iter().enumerate().map(|(i, cell)| {
                let mut el = Element::cell(cell.value.clone())
                    .id(cell.id.clone())
                    .width(self.width(i + 1))
                    .border(Edges::all(1));
                if let Some(notes) = &cell.history {
                    el = el
                        .class(HAS_HISTORY_CLASS)
                        .child(Element::block().class(HISTORY_CLASS).text(notes.clone()).hidden());
                }
                el
            });
            Element::row().child(feature).children(cells)
        });

        Element::table()
            .child(Element::head().child(header))
            .child(Element::body().children(rows))
    }
}
