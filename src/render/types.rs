use serde::{Deserialize, Serialize};

use super::color::Color;
use super::node::Node;

/// Output video parameters shared by every scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoParams {
    /// Frames per second
    pub fps: f64,

    /// Target resolution (width, height)
    pub resolution: (u32, u32),

    /// Total length of the reel in frames
    pub duration_in_frames: u64,
}

impl Default for VideoParams {
    fn default() -> Self {
        Self {
            fps: 30.0,
            resolution: (1920, 1080),
            duration_in_frames: 450,
        }
    }
}

impl VideoParams {
    /// Clock reading for an absolute frame
    pub fn at(&self, frame: i64) -> FrameContext {
        FrameContext {
            frame,
            fps: self.fps,
            width: self.resolution.0,
            height: self.resolution.1,
        }
    }

    pub fn duration_seconds(&self) -> f64 {
        self.duration_in_frames as f64 / self.fps
    }
}

/// The clock a scene reads from: current frame plus video configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    pub frame: i64,
    pub fps: f64,
    pub width: u32,
    pub height: u32,
}

impl FrameContext {
    /// Same clock shifted so that `offset` becomes frame 0
    pub fn local(&self, offset: i64) -> Self {
        Self {
            frame: self.frame - offset,
            ..*self
        }
    }

    /// Current frame as a float, for the animation primitives
    pub fn time(&self) -> f64 {
        self.frame as f64
    }

    /// Convert seconds to frames at this clock's rate
    pub fn seconds(&self, seconds: f64) -> f64 {
        seconds * self.fps
    }
}

/// One active sequence rendered at one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub scene: String,
    pub local_frame: i64,
    pub root: Node,
}

/// Everything visible at a single frame of the reel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameDescription {
    pub frame: i64,
    pub time_seconds: f64,
    /// Backdrop behind every layer
    pub background: Color,
    pub layers: Vec<Layer>,
}

impl FrameDescription {
    pub fn layer(&self, scene: &str) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.scene == scene)
    }
}
