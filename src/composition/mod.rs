//! # Reel Engine
//!
//! Places scenes on the timeline, evaluates frames (alone or in parallel
//! batches) and exports the resulting style trees.

pub mod engine;

pub use engine::{ExportSummary, ReelEngine, SequenceSummary};
