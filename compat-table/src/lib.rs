//! Expandable history panels for browser compatibility tables.
//!
//! Cells flagged with `bc-has-history` get an open control, keyboard access
//! and a panel that slides open beneath the row, spanning the whole table.
//! Only one panel per table is open at a time.

pub mod cell;
pub mod config;
pub mod controller;
pub mod dispatch;
pub mod error;
pub mod ids;
pub mod init;
pub mod layout;
pub mod sink;
mod widget;

pub use cell::{CellIndex, HistoryCell, HistoryPanel, Visibility};
pub use config::{HeaderStickiness, Labels, WidgetConfig};
pub use controller::PanelState;
pub use error::WidgetError;
pub use ids::IdCounter;
pub use sink::{Interaction, InteractionSink, LogSink};
pub use widget::CompatTable;
