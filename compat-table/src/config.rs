//! Widget configuration.

use std::time::Duration;

use serde::Deserialize;
use tabledom::{Easing, TransitionConfig};

/// How the table header is layered while scrolling.
///
/// Sticky positioning changes which cells visually push the following rows
/// down while a panel opens, so the set of cells whose bottom border is
/// widened depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderStickiness {
    /// Header scrolls with the table: widen the row's data cells.
    NotSticky,
    /// Each header cell is sticky on its own: widen only the activated cell.
    CellSticky,
    /// The whole header row is sticky: widen every cell of the row,
    /// row headers included.
    #[default]
    RowSticky,
}

/// User-facing strings, supplied already translated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Accessible label of the open control.
    pub open_label: String,
    /// Visible text of the open control.
    pub open_text: String,
    /// Accessible label of the close control.
    pub close_label: String,
    /// Visible text of the close control.
    pub close_text: String,
    /// Text of the notice inserted above the table.
    pub beta_notice: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            open_label: "Open implementation notes".to_string(),
            open_text: "Open".to_string(),
            close_label: "Return to compatibility table.".to_string(),
            close_text: "Close".to_string(),
            beta_notice: "This compatibility table is in beta.".to_string(),
        }
    }
}

/// Configuration for one widget activation.
///
/// # Example
///
/// ```
/// use compat_table::{HeaderStickiness, WidgetConfig};
///
/// let config = WidgetConfig::default()
///     .header_stickiness(HeaderStickiness::CellSticky)
///     .open_ms(250);
/// assert_eq!(config.open_transition().duration.as_millis(), 250);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub header_stickiness: HeaderStickiness,

    /// Duration of the open animation in milliseconds.
    ///
    /// Default: 400
    pub open_ms: u64,

    /// Duration of the close animation in milliseconds.
    ///
    /// Default: 400
    pub close_ms: u64,

    pub easing: Easing,

    pub labels: Labels,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            header_stickiness: HeaderStickiness::default(),
            open_ms: 400,
            close_ms: 400,
            easing: Easing::Swing,
            labels: Labels::default(),
        }
    }
}

impl WidgetConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header_stickiness(mut self, stickiness: HeaderStickiness) -> Self {
        self.header_stickiness = stickiness;
        self
    }

    pub fn open_ms(mut self, ms: u64) -> Self {
        self.open_ms = ms;
        self
    }

    pub fn close_ms(mut self, ms: u64) -> Self {
        self.close_ms = ms;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    pub fn open_transition(&self) -> TransitionConfig {
        TransitionConfig::new(Duration::from_millis(self.open_ms), self.easing)
    }

    pub fn close_transition(&self) -> TransitionConfig {
        TransitionConfig::new(Duration::from_millis(self.close_ms), self.easing)
    }
}
