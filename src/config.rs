use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    error::{ConfigError, Result},
    render::VideoParams,
    scenes::SceneConfig,
};

/// Main configuration for the reel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Output video parameters
    #[serde(default)]
    pub video: VideoParams,

    /// Batch rendering settings
    #[serde(default)]
    pub render: RenderConfig,

    /// Which scene plays when
    #[serde(default)]
    pub timeline: TimelineConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound { path: path.display().to_string() })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            key: "config".to_string(),
            value: e.to_string(),
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        validate_video(&self.video)?;
        self.render.validate()?;
        self.timeline.validate(&self.video)?;
        Ok(())
    }
}

fn validate_video(video: &VideoParams) -> Result<()> {
    if !(video.fps > 0.0) || !video.fps.is_finite() {
        return Err(ConfigError::InvalidValue {
            key: "video.fps".to_string(),
            value: video.fps.to_string(),
        }
        .into());
    }

    if video.resolution.0 == 0 || video.resolution.1 == 0 {
        return Err(ConfigError::InvalidValue {
            key: "video.resolution".to_string(),
            value: format!("{}x{}", video.resolution.0, video.resolution.1),
        }
        .into());
    }

    if video.duration_in_frames == 0 || video.duration_in_frames > i64::MAX as u64 {
        return Err(ConfigError::InvalidValue {
            key: "video.duration_in_frames".to_string(),
            value: video.duration_in_frames.to_string(),
        }
        .into());
    }

    Ok(())
}

/// Batch rendering configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Number of worker threads used when rendering frame ranges
    pub processing_threads: usize,

    /// Pretty-print exported frame JSON
    pub pretty_json: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            processing_threads: num_cpus::get(),
            pretty_json: true,
        }
    }
}

impl RenderConfig {
    fn validate(&self) -> Result<()> {
        if self.processing_threads == 0 {
            return Err(ConfigError::InvalidValue {
                key: "render.processing_threads".to_string(),
                value: self.processing_threads.to_string(),
            }
            .into());
        }
        Ok(())
    }
}

/// A scene placed on the timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceConfig {
    /// Registered scene name
    pub scene: String,

    /// First frame (absolute) on which the scene is shown
    pub from: i64,

    /// Number of frames the scene stays on screen
    pub duration: u64,

    /// Start delay and scene parameters
    #[serde(default)]
    pub config: SceneConfig,
}

impl SequenceConfig {
    pub fn new<S: Into<String>>(scene: S, from: i64, duration: u64) -> Self {
        Self {
            scene: scene.into(),
            from,
            duration,
            config: SceneConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SceneConfig) -> Self {
        self.config = config;
        self
    }

    /// Exclusive end frame
    pub fn end(&self) -> i64 {
        i64::try_from(self.duration).map_or(i64::MAX, |duration| self.from.saturating_add(duration))
    }

    pub fn contains(&self, frame: i64) -> bool {
        frame >= self.from && frame < self.end()
    }
}

/// Ordered list of sequences making up the reel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineConfig {
    pub sequences: Vec<SequenceConfig>,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            sequences: vec![
                SequenceConfig::new("logo", 0, 90),
                SequenceConfig::new("terminal", 90, 90),
                SequenceConfig::new("agents", 180, 90),
                SequenceConfig::new("categories", 270, 90),
                SequenceConfig::new("cta", 360, 90),
            ],
        }
    }
}

impl TimelineConfig {
    fn validate(&self, video: &VideoParams) -> Result<()> {
        for (index, sequence) in self.sequences.iter().enumerate() {
            let key = |field: &str| format!("timeline.sequences[{}].{}", index, field);

            if sequence.duration == 0 || sequence.duration > video.duration_in_frames {
                return Err(ConfigError::InvalidValue {
                    key: key("duration"),
                    value: sequence.duration.to_string(),
                }
                .into());
            }

            if sequence.from < 0 || sequence.from as u64 >= video.duration_in_frames {
                return Err(ConfigError::InvalidValue {
                    key: key("from"),
                    value: sequence.from.to_string(),
                }
                .into());
            }

            let delay = sequence.config.start_delay;
            if !delay.is_finite() || delay < 0.0 {
                return Err(ConfigError::InvalidValue {
                    key: key("config.start_delay"),
                    value: delay.to_string(),
                }
                .into());
            }
        }
        Ok(())
    }
}
