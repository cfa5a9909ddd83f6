//! # Scenes
//!
//! The panels that make up the reel. Each scene is a pure function of a
//! local frame and its [`SceneConfig`], returning a style tree.
//!
//! ## Built-in Scenes
//!
//! - **terminal**: terminal window typing the install command
//! - **logo**: ASCII logo reveal with title and tagline
//! - **agents**: detected coding agents with check marks
//! - **categories**: skill categories being selected
//! - **cta**: closing call-to-action
//!
//! ## Usage
//!
//! ```rust
//! use promo_reel::render::VideoParams;
//! use promo_reel::scenes::{SceneConfig, SceneRegistry};
//!
//! let registry = SceneRegistry::new();
//! let logo = registry.get_scene("logo").unwrap();
//!
//! let tree = logo.render(&VideoParams::default().at(45), &SceneConfig::default());
//! assert_eq!(tree.role, "logo");
//! ```

pub mod content;
pub mod registry;
pub mod traits;

pub mod agents;
pub mod categories;
pub mod cta;
pub mod logo;
pub mod terminal;

pub use registry::SceneRegistry;
pub use traits::{ConfigValue, Scene, SceneConfig, SETTLE_TOLERANCE};

pub use agents::AgentsScene;
pub use categories::CategoriesScene;
pub use cta::CallToActionScene;
pub use logo::LogoScene;
pub use terminal::TerminalScene;
