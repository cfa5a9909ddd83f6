use thiserror::Error;

/// Main error type for the promo-reel library
#[derive(Error, Debug)]
pub enum ReelError {
    #[error("Animation error: {0}")]
    Animation(#[from] AnimationError),

    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while building animation primitives
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnimationError {
    #[error("Interpolation needs at least two points, got {points}")]
    TooFewPoints { points: usize },

    #[error("Input range has {input} points but output range has {output}")]
    RangeLengthMismatch { input: usize, output: usize },

    #[error("Input range must be non-decreasing (index {index})")]
    UnsortedInput { index: usize },

    #[error("Range value at index {index} is not finite")]
    NonFinite { index: usize },
}

/// Scene-specific errors
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Scene not found: {name}")]
    NotFound { name: String },

    #[error("Invalid parameter for scene {scene}: {key} = {value}")]
    InvalidParameter {
        scene: String,
        key: String,
        value: String,
    },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration file: {path} ({reason})")]
    ParseFailed { path: String, reason: String },

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },
}

/// Errors raised while writing rendered frames
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to serialize frame {frame}: {reason}")]
    SerializeFailed { frame: i64, reason: String },

    #[error("Failed to write {path}: {reason}")]
    WriteFailed { path: String, reason: String },

    #[error("Invalid frame range: {start}..{end}")]
    InvalidRange { start: i64, end: i64 },

    #[error("Render pool failed: {reason}")]
    PoolFailed { reason: String },
}

/// Convenience type alias for Results using ReelError
pub type Result<T> = std::result::Result<T, ReelError>;

impl ReelError {
    /// Check if this error is recoverable (can be retried)
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Io(_) => true,
            Self::Output(OutputError::WriteFailed { .. }) => true,
            _ => false,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Scene(SceneError::NotFound { name }) => {
                format!(
                    "Scene '{}' not found. Available scenes: terminal, logo, agents, categories, cta",
                    name
                )
            }
            Self::Config(ConfigError::FileNotFound { path }) => {
                format!("Configuration file '{}' not found.", path)
            }
            Self::Output(OutputError::WriteFailed { path, .. }) => {
                format!("Could not write '{}'. Please check the output directory is writable.", path)
            }
            _ => self.to_string(),
        }
    }
}
