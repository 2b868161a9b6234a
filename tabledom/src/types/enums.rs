/// Whether a node takes part in rendering at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Visible,
    /// Removed from layout and hit testing (`display: none`).
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    #[default]
    Static,
    /// Placed relative to the parent's padding box and taken out of flow.
    Absolute,
}
