//! Fire-and-forget reporting of panel interactions.

use std::rc::Rc;
use std::sync::Arc;

/// Something the user did with a history panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    /// A panel finished opening.
    Opened { accessible_id: String },
    /// A panel finished closing.
    Closed { accessible_id: String },
}

/// Receives interaction records. Implementations must not fail or block;
/// the widget never looks at what happens to a record.
pub trait InteractionSink {
    fn record(&self, interaction: &Interaction);
}

/// Writes interactions to the log at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl InteractionSink for LogSink {
    fn record(&self, interaction: &Interaction) {
        log::info!("[interaction] {:?}", interaction);
    }
}

impl<T: InteractionSink + ?Sized> InteractionSink for Rc<T> {
    fn record(&self, interaction: &Interaction) {
        (**self).record(interaction)
    }
}

impl<T: InteractionSink + ?Sized> InteractionSink for Arc<T> {
    fn record(&self, interaction: &Interaction) {
        (**self).record(interaction)
    }
}
