mod builder;
mod document;
mod node;

pub use builder::Element;
pub use document::{Ancestors, Document};
pub use node::{Node, NodeId, Tag};
