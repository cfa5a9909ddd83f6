//! # Style Trees
//!
//! The per-frame visual description handed to a host renderer: a tree of
//! [`Node`]s carrying opacity, scale, translation, color and text.

pub mod color;
pub mod node;
pub mod types;

pub use color::{palette, Color};
pub use node::{Node, Style};
pub use types::{FrameContext, FrameDescription, Layer, VideoParams};
