//! A headless table DOM: nodes with classes, attributes and inline styles,
//! table layout, focus, input events and clock-driven property transitions.

pub mod animation;
pub mod element;
pub mod error;
pub mod event;
pub mod layout;
pub mod text;
pub mod transitions;
pub mod types;

pub use animation::{Animator, Completion, PropertyTarget, TransitionProperty};
pub use element::{Document, Element, Node, NodeId, Tag};
pub use error::DomError;
pub use event::{Event, EventFlags, Key, Modifiers};
pub use layout::{layout_table, LayoutResult, Rect};
pub use transitions::{Easing, TransitionConfig};
pub use types::*;
