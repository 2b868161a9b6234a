mod edges;
mod enums;
mod style;

pub use edges::Edges;
pub use enums::{Display, Position};
pub use style::Style;
