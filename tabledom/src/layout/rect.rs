/// Cell-grid rectangle computed by [`layout_table`](super::layout_table).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn left(&self) -> u16 {
        self.x
    }

    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }
}
