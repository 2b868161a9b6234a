//! Accessible identifier allocation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

/// Prefix of every panel identifier handed out by the widget.
pub const ID_PREFIX: &str = "bc-history";

static PAGE: OnceLock<IdCounter> = OnceLock::new();

/// Sequential counter for panel identifiers.
///
/// Clones share the same sequence, so every table activated with clones of
/// one counter gets disjoint identifiers. [`IdCounter::page`] is the
/// process-wide instance standing in for "the current page"; tests build
/// their own with [`IdCounter::new`].
#[derive(Debug, Clone, Default)]
pub struct IdCounter {
    next: Arc<AtomicU64>,
}

impl IdCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The counter shared by every widget in this process.
    pub fn page() -> Self {
        PAGE.get_or_init(IdCounter::new).clone()
    }

    /// Allocate the next identifier: `bc-history-1`, `bc-history-2`, ...
    pub fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{ID_PREFIX}-{n}")
    }

    /// Number of identifiers allocated so far.
    pub fn issued(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }

    /// Start the sequence over. Only meaningful between independent page
    /// sessions; identifiers issued before the reset may be handed out again.
    pub fn reset(&self) {
        self.next.store(0, Ordering::Relaxed);
    }
}
