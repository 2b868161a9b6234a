#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use compat_table::init::{ACTIVE_CLASS, CLOSE_CONTROL_CLASS, HAS_HISTORY_CLASS, HISTORY_CLASS};
use compat_table::{
    CellIndex, CompatTable, IdCounter, Interaction, InteractionSink, Visibility, WidgetConfig,
};
use tabledom::{Animator, Document, Edges, Element, Event, EventFlags, Key, NodeId};

pub const C1_NOTES: &str =
    "Prefixed with webkit until version 44. Unprefixed support added in version 45.";
pub const C2_NOTES: &str = "Supported since version 39.";
pub const C4_NOTES: &str = "Behind a flag.";

#[derive(Default)]
pub struct RecordingSink {
    pub records: RefCell<Vec<Interaction>>,
}

impl InteractionSink for RecordingSink {
    fn record(&self, interaction: &Interaction) {
        self.records.borrow_mut().push(interaction.clone());
    }
}

fn history_cell(id: &str, value: &str, notes: &str) -> Element {
    Element::cell(value)
        .id(id)
        .class(HAS_HISTORY_CLASS)
        .width(10)
        .border(Edges::all(1))
        .child(Element::block().class(HISTORY_CLASS).text(notes).hidden())
}

fn plain_cell(id: &str, value: &str) -> Element {
    Element::cell(value).id(id).width(10).border(Edges::all(1))
}

fn row_header(id: &str, text: &str) -> Element {
    Element::header_cell(text).id(id).width(12).border(Edges::all(1))
}

/// ```text
///            | Chrome | Firefox | Safari |
/// fetch      | C1 (h) | C2 (h)  | C3     |
/// abort      | C4 (h) | C5      | C6     |
/// ```
pub fn compat_table(id: &str) -> Element {
    Element::table()
        .id(id)
        .child(
            Element::head().child(
                Element::row()
                    .child(Element::header_cell("Feature").width(12).border(Edges::all(1)))
                    .child(Element::header_cell("Chrome").width(10).border(Edges::all(1)))
                    .child(Element::header_cell("Firefox").width(10).border(Edges::all(1)))
                    .child(Element::header_cell("Safari").width(10).border(Edges::all(1))),
            ),
        )
        .child(
            Element::body()
                .child(
                    Element::row()
                        .child(row_header("fetch", "fetch"))
                        .child(history_cell("c1", "42", C1_NOTES))
                        .child(history_cell("c2", "39", C2_NOTES))
                        .child(plain_cell("c3", "10.1")),
                )
                .child(
                    Element::row()
                        .child(row_header("abort", "abort"))
                        .child(history_cell("c4", "66", C4_NOTES))
                        .child(plain_cell("c5", "57"))
                        .child(plain_cell("c6", "11.1")),
                ),
        )
}

/// A page with one activated compatibility table and a manual clock.
pub struct Page {
    pub doc: Document,
    pub animator: Animator,
    pub table: NodeId,
    pub widget: CompatTable,
    pub sink: Rc<RecordingSink>,
    pub now: Instant,
}

impl Page {
    pub fn new() -> Self {
        Self::with_config(WidgetConfig::default())
    }

    pub fn with_config(config: WidgetConfig) -> Self {
        let mut doc = Document::new();
        let table = doc.append(doc.root(), compat_table("compat"));
        let sink = Rc::new(RecordingSink::default());
        let widget = CompatTable::activate_with(
            &mut doc,
            table,
            config,
            &IdCounter::new(),
            Box::new(sink.clone()),
        )
        .expect("activation");
        Self {
            doc,
            animator: Animator::new(),
            table,
            widget,
            sink,
            now: Instant::now(),
        }
    }

    pub fn node(&self, dom_id: &str) -> NodeId {
        self.doc
            .find_by_dom_id(dom_id)
            .unwrap_or_else(|| panic!("no node #{dom_id}"))
    }

    pub fn index(&self, dom_id: &str) -> CellIndex {
        self.widget.cell_index(self.node(dom_id)).expect("history cell")
    }

    pub fn panel(&self, dom_id: &str) -> NodeId {
        self.widget.cell(self.index(dom_id)).unwrap().panel.node
    }

    pub fn close_control(&self, dom_id: &str) -> NodeId {
        self.doc.find_by_class(self.panel(dom_id), CLOSE_CONTROL_CLASS)[0]
    }

    pub fn send(&mut self, event: Event) -> EventFlags {
        self.widget
            .handle_event(&mut self.doc, &mut self.animator, &event, self.now)
    }

    pub fn click(&mut self, dom_id: &str) -> EventFlags {
        let target = self.node(dom_id);
        self.send(Event::Click { target })
    }

    pub fn click_node(&mut self, target: NodeId) -> EventFlags {
        self.send(Event::Click { target })
    }

    pub fn press(&mut self, dom_id: &str, key: Key) -> EventFlags {
        let target = self.node(dom_id);
        self.send(Event::key(target, key))
    }

    pub fn advance(&mut self, ms: u64) {
        self.now += Duration::from_millis(ms);
        self.widget
            .tick(&mut self.doc, &mut self.animator, self.now);
    }

    /// Let the running animation, and one chained after it, finish.
    pub fn settle(&mut self) {
        self.advance(1000);
        self.advance(1000);
    }

    pub fn is_active(&self, dom_id: &str) -> bool {
        self.doc.has_class(self.node(dom_id), ACTIVE_CLASS)
    }

    pub fn active_count(&self) -> usize {
        self.widget
            .cells()
            .iter()
            .filter(|c| self.doc.has_class(c.node, ACTIVE_CLASS))
            .count()
    }

    pub fn visible_panels(&self) -> usize {
        self.widget
            .cells()
            .iter()
            .filter(|c| !self.doc.style(c.panel.node).is_hidden())
            .count()
    }

    pub fn non_hidden(&self) -> usize {
        (0..self.widget.cells().len())
            .filter(|&i| self.widget.visibility(CellIndex(i)) != Visibility::Hidden)
            .count()
    }
}
