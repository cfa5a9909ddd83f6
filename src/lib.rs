//! # Promo-Reel
//!
//! Frame-driven animation for the AI Research Skills promotional video.
//!
//! Every panel of the reel is a pure function of the current frame: given a
//! frame index and the video configuration, it returns a style tree
//! (opacity, scale, translation, color, text) for a host renderer to draw.
//! Frames can be evaluated in any order, including backward seeks.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use promo_reel::{config::Config, composition::ReelEngine, scenes::SceneRegistry};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let engine = ReelEngine::new(Config::default(), &SceneRegistry::new())?;
//!
//! let frame = engine.render_frame(200);
//! println!("{} layers at {:.2}s", frame.layers.len(), frame.time_seconds);
//!
//! engine.export(engine.full_range(), "frames/").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`animation`] - Spring, interpolation and typewriter primitives
//! - [`render`] - Style tree types and the frame clock
//! - [`scenes`] - The panels and their registry
//! - [`composition`] - Timeline engine and frame export
//! - [`config`] - Configuration management
//!
//! ## Creating Custom Scenes
//!
//! ```rust,no_run
//! use promo_reel::render::{FrameContext, Node};
//! use promo_reel::scenes::{Scene, SceneConfig};
//!
//! struct Blank;
//!
//! impl Scene for Blank {
//!     fn name(&self) -> &str {
//!         "blank"
//!     }
//!
//!     fn description(&self) -> &str {
//!         "Nothing at all"
//!     }
//!
//!     fn render(&self, _ctx: &FrameContext, _config: &SceneConfig) -> Node {
//!         Node::new("blank")
//!     }
//!
//!     fn settle_frame(&self, _fps: f64, config: &SceneConfig) -> f64 {
//!         config.start_delay
//!     }
//! }
//! ```

pub mod animation;
pub mod composition;
pub mod config;
pub mod error;
pub mod render;
pub mod scenes;

pub use crate::{
    composition::ReelEngine,
    config::Config,
    error::{ReelError, Result},
    scenes::{Scene, SceneRegistry},
};
