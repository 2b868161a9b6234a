/// Per-side widths, used for borders and padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edges {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Edges {
    pub const fn new(top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn all(value: u16) -> Self {
        Self::new(value, value, value, value)
    }

    pub const fn symmetric(vertical: u16, horizontal: u16) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Same edges with the bottom side replaced.
    pub const fn with_bottom(self, bottom: u16) -> Self {
        Self { bottom, ..self }
    }

    pub const fn horizontal_total(&self) -> u16 {
        self.left.saturating_add(self.right)
    }

    pub const fn vertical_total(&self) -> u16 {
        self.top.saturating_add(self.bottom)
    }
}
