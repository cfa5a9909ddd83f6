use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    animation::{Spring, SpringConfig},
    error::{Result, SceneError},
    render::{FrameContext, Node},
};

/// Distance from the end state below which an animation counts as settled
pub const SETTLE_TOLERANCE: f64 = 1e-3;

/// Core trait that all panels implement
pub trait Scene: Send + Sync {
    /// Returns the unique name of this scene
    fn name(&self) -> &str;

    /// Returns a human-readable description of this scene
    fn description(&self) -> &str;

    /// Project the scene onto a style tree for one frame
    ///
    /// # Arguments
    ///
    /// * `ctx` - Clock reading, already local to the scene's sequence
    /// * `config` - Start delay and scene-specific parameters
    ///
    /// Rendering is a pure function of its inputs: the same frame and config
    /// always produce the same tree.
    fn render(&self, ctx: &FrameContext, config: &SceneConfig) -> Node;

    /// Local frame after which every animation in the scene has settled
    fn settle_frame(&self, fps: f64, config: &SceneConfig) -> f64;

    /// Get the default configuration for this scene
    fn default_config(&self) -> SceneConfig {
        SceneConfig::default()
    }

    /// Validate that the given configuration is valid for this scene
    ///
    /// Called once when a timeline is built, before any frame is rendered.
    fn validate_config(&self, config: &SceneConfig) -> Result<()> {
        config.require_non_negative(self.name(), "start_delay", config.start_delay)
    }
}

/// Per-sequence scene configuration
///
/// Every scene understands `start_delay`; the remaining parameters are
/// scene-specific and looked up by name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Frames to wait before the scene's entrance animation starts
    #[serde(default)]
    pub start_delay: f64,

    /// Scene-specific parameters
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub parameters: BTreeMap<String, ConfigValue>,
}

impl SceneConfig {
    pub fn with_delay(start_delay: f64) -> Self {
        Self {
            start_delay,
            parameters: BTreeMap::new(),
        }
    }

    /// Set a parameter value
    pub fn set<K: Into<String>, V: Into<ConfigValue>>(mut self, key: K, value: V) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.parameters.get(key).and_then(|v| v.as_f64())
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.parameters.get(key).and_then(|v| v.as_bool())
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.parameters.get(key).and_then(|v| v.as_string())
    }

    pub fn get_f64_or(&self, key: &str, default: f64) -> f64 {
        self.get_f64(key).unwrap_or(default)
    }

    pub fn get_bool_or(&self, key: &str, default: bool) -> bool {
        self.get_bool(key).unwrap_or(default)
    }

    pub(crate) fn require_non_negative(&self, scene: &str, key: &str, value: f64) -> Result<()> {
        if value.is_finite() && value >= 0.0 {
            return Ok(());
        }
        Err(SceneError::InvalidParameter {
            scene: scene.to_string(),
            key: key.to_string(),
            value: value.to_string(),
        }
        .into())
    }
}

/// Flexible configuration value that can hold different types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl ConfigValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ConfigValue::Float(f) => Some(*f),
            ConfigValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        ConfigValue::Float(value)
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Bool(value)
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::String(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::String(value.to_string())
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Integer(value)
    }
}

/// Spring progress for an animation starting `delay` frames into the scene
pub(crate) fn progress(ctx: &FrameContext, delay: f64, config: SpringConfig) -> f64 {
    Spring::new(ctx.fps, config).progress_after(ctx.time(), delay)
}

/// Frames a spring needs to come within [`SETTLE_TOLERANCE`] of its target
pub(crate) fn settle(fps: f64, config: SpringConfig) -> f64 {
    Spring::new(fps, config).settle_frames(SETTLE_TOLERANCE) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_lookup() {
        let config = SceneConfig::with_delay(12.0)
            .set("chars_per_frame", 0.8)
            .set("title", "bash")
            .set("show_subtitle", false)
            .set("count", 3i64);

        assert_eq!(config.get_f64("chars_per_frame"), Some(0.8));
        assert_eq!(config.get_string("title"), Some("bash"));
        assert!(!config.get_bool_or("show_subtitle", true));
        assert_eq!(config.get_f64("count"), Some(3.0));
        assert_eq!(config.get_f64_or("missing", 2.5), 2.5);
        assert!(config.get_bool("title").is_none());
    }

    #[test]
    fn test_config_from_toml() {
        let config: SceneConfig = toml::from_str(
            r#"
            start_delay = 15
            [parameters]
            chars_per_frame = 1.5
            show_cursor = true
            "#,
        )
        .unwrap();

        assert_eq!(config.start_delay, 15.0);
        assert_eq!(config.get_f64("chars_per_frame"), Some(1.5));
        assert_eq!(config.get_bool("show_cursor"), Some(true));
    }

    #[test]
    fn test_require_non_negative() {
        let config = SceneConfig::default();
        assert!(config.require_non_negative("logo", "start_delay", 0.0).is_ok());
        assert!(config.require_non_negative("logo", "start_delay", -1.0).is_err());
        assert!(config.require_non_negative("logo", "start_delay", f64::NAN).is_err());
    }
}
