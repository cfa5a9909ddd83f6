use std::ops::Range;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    config::{Config, SequenceConfig},
    error::{OutputError, ReelError, Result, SceneError},
    render::{palette, FrameDescription, Layer},
    scenes::{Scene, SceneRegistry},
};

/// A timeline sequence resolved to its scene implementation
struct ScheduledScene {
    sequence: SequenceConfig,
    scene: Box<dyn Scene>,
}

/// Timing summary of one sequence, for listings and diagnostics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequenceSummary {
    pub scene: String,
    pub description: String,
    pub from: i64,
    pub duration: u64,
    /// Exclusive end frame
    pub end: i64,
    /// Local frame after which the scene is at rest
    pub settle_frame: f64,
}

/// What an export wrote
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    pub output_dir: PathBuf,
    pub frame_count: usize,
    pub bytes_written: u64,
}

#[derive(Serialize)]
struct ExportManifest<'a> {
    generated_at: String,
    fps: f64,
    resolution: (u32, u32),
    first_frame: i64,
    end_frame: i64,
    frame_count: usize,
    sequences: Vec<&'a SequenceConfig>,
}

/// Evaluates the reel timeline frame by frame
///
/// The engine follows a simple pipeline:
/// 1. Timeline resolution - look up every sequence's scene and validate it
/// 2. Frame evaluation - render every active sequence at its local frame
/// 3. Export - write each frame's style tree plus a manifest
pub struct ReelEngine {
    config: Config,
    scheduled: Vec<ScheduledScene>,
    pool: rayon::ThreadPool,
}

impl ReelEngine {
    /// Build an engine, resolving scenes through `registry`
    pub fn new(config: Config, registry: &SceneRegistry) -> Result<Self> {
        config.validate()?;

        let mut scheduled = Vec::with_capacity(config.timeline.sequences.len());
        for sequence in &config.timeline.sequences {
            let scene = registry
                .get_scene(&sequence.scene)
                .ok_or_else(|| SceneError::NotFound { name: sequence.scene.clone() })?;
            scene.validate_config(&sequence.config)?;

            let settle = scene.settle_frame(config.video.fps, &sequence.config);
            if settle > sequence.duration as f64 {
                warn!(
                    "Scene '{}' settles at local frame {:.0} but is cut at {}",
                    sequence.scene, settle, sequence.duration
                );
            }
            debug!(
                "Scheduled '{}' at frames {}..{} (settles at {:.0})",
                sequence.scene,
                sequence.from,
                sequence.end(),
                settle
            );

            scheduled.push(ScheduledScene {
                sequence: sequence.clone(),
                scene,
            });
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.render.processing_threads)
            .build()
            .map_err(|e| OutputError::PoolFailed { reason: e.to_string() })?;

        info!(
            "Timeline ready: {} sequences, {} frames at {} fps",
            scheduled.len(),
            config.video.duration_in_frames,
            config.video.fps
        );

        Ok(Self {
            config,
            scheduled,
            pool,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Every frame of the reel
    pub fn full_range(&self) -> Range<i64> {
        0..self.config.video.duration_in_frames as i64
    }

    pub fn sequences(&self) -> Vec<SequenceSummary> {
        self.scheduled
            .iter()
            .map(|s| SequenceSummary {
                scene: s.sequence.scene.clone(),
                description: s.scene.description().to_string(),
                from: s.sequence.from,
                duration: s.sequence.duration,
                end: s.sequence.end(),
                settle_frame: s.scene.settle_frame(self.config.video.fps, &s.sequence.config),
            })
            .collect()
    }

    /// Describe everything visible at `frame`
    ///
    /// Pure: the result depends only on the frame and the configuration, so
    /// frames may be evaluated in any order.
    pub fn render_frame(&self, frame: i64) -> FrameDescription {
        let ctx = self.config.video.at(frame);

        let layers = self
            .scheduled
            .iter()
            .filter(|s| s.sequence.contains(frame))
            .map(|s| {
                let local = ctx.local(s.sequence.from);
                Layer {
                    scene: s.sequence.scene.clone(),
                    local_frame: local.frame,
                    root: s.scene.render(&local, &s.sequence.config),
                }
            })
            .collect();

        FrameDescription {
            frame,
            time_seconds: frame as f64 / self.config.video.fps,
            background: palette::BACKGROUND,
            layers,
        }
    }

    /// Render a range of frames in parallel, returned in frame order
    pub fn render_range(&self, range: Range<i64>) -> Result<Vec<FrameDescription>> {
        if range.start > range.end {
            return Err(invalid_range(&range));
        }

        debug!("Rendering frames {}..{}", range.start, range.end);
        let frames: Vec<FrameDescription> = self
            .pool
            .install(|| range.into_par_iter().map(|frame| self.render_frame(frame)).collect());
        Ok(frames)
    }

    /// Render `range` and write one JSON file per frame plus `manifest.toml`
    ///
    /// Exported frames must be non-negative so file names sort in frame order.
    pub async fn export<P: AsRef<Path>>(&self, range: Range<i64>, output_dir: P) -> Result<ExportSummary> {
        let output_dir = output_dir.as_ref();
        if range.start < 0 || range.start > range.end {
            return Err(invalid_range(&range));
        }

        info!("Exporting frames {}..{} to {:?}", range.start, range.end, output_dir);
        let frames = self.render_range(range.clone())?;

        tokio::fs::create_dir_all(output_dir).await?;
        let mut bytes_written = 0u64;

        for description in &frames {
            let bytes = self.encode_frame(description)?;
            let path = output_dir.join(format!("frame_{:06}.json", description.frame));
            write_file(&path, &bytes).await?;
            bytes_written += bytes.len() as u64;
        }

        let manifest = ExportManifest {
            generated_at: chrono::Utc::now().to_rfc3339(),
            fps: self.config.video.fps,
            resolution: self.config.video.resolution,
            first_frame: range.start,
            end_frame: range.end,
            frame_count: frames.len(),
            sequences: self.scheduled.iter().map(|s| &s.sequence).collect(),
        };
        let manifest = toml::to_string_pretty(&manifest).map_err(|e| OutputError::SerializeFailed {
            frame: range.start,
            reason: e.to_string(),
        })?;
        write_file(&output_dir.join("manifest.toml"), manifest.as_bytes()).await?;
        bytes_written += manifest.len() as u64;

        info!("Wrote {} frames ({} KB)", frames.len(), bytes_written / 1024);

        Ok(ExportSummary {
            output_dir: output_dir.to_path_buf(),
            frame_count: frames.len(),
            bytes_written,
        })
    }

    /// Serialize one frame using the configured JSON style
    pub fn encode_frame(&self, description: &FrameDescription) -> Result<Vec<u8>> {
        let encoded = if self.config.render.pretty_json {
            serde_json::to_vec_pretty(description)
        } else {
            serde_json::to_vec(description)
        };

        encoded.map_err(|e| {
            OutputError::SerializeFailed {
                frame: description.frame,
                reason: e.to_string(),
            }
            .into()
        })
    }
}

fn invalid_range(range: &Range<i64>) -> ReelError {
    OutputError::InvalidRange {
        start: range.start,
        end: range.end,
    }
    .into()
}

async fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    tokio::fs::write(path, bytes).await.map_err(|e| {
        OutputError::WriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::SceneConfig;
    use tempfile::tempdir;

    fn engine() -> ReelEngine {
        let mut config = Config::default();
        config.render.processing_threads = 2;
        ReelEngine::new(config, &SceneRegistry::new()).unwrap()
    }

    #[test]
    fn test_one_layer_per_active_sequence() {
        let engine = engine();

        let frame = engine.render_frame(0);
        assert_eq!(frame.layers.len(), 1);
        assert_eq!(frame.layers[0].scene, "logo");

        let frame = engine.render_frame(200);
        let layer = frame.layer("agents").unwrap();
        assert_eq!(layer.local_frame, 20);
        assert_eq!(frame.time_seconds, 200.0 / 30.0);

        assert!(engine.render_frame(450).layers.is_empty());
        assert!(engine.render_frame(-10).layers.is_empty());
    }

    #[test]
    fn test_overlapping_sequences_keep_timeline_order() {
        let mut config = Config::default();
        config.render.processing_threads = 1;
        config.timeline.sequences = vec![
            SequenceConfig::new("terminal", 0, 100),
            SequenceConfig::new("agents", 30, 70)
                .with_config(SceneConfig::with_delay(5.0)),
        ];
        let engine = ReelEngine::new(config, &SceneRegistry::new()).unwrap();

        let frame = engine.render_frame(40);
        let scenes: Vec<&str> = frame.layers.iter().map(|l| l.scene.as_str()).collect();
        assert_eq!(scenes, vec!["terminal", "agents"]);
        assert_eq!(frame.layers[1].local_frame, 10);
    }

    #[test]
    fn test_unknown_scene_is_rejected() {
        let mut config = Config::default();
        config.timeline.sequences.push(SequenceConfig::new("outro", 400, 50));

        match ReelEngine::new(config, &SceneRegistry::new()) {
            Err(ReelError::Scene(SceneError::NotFound { name })) => assert_eq!(name, "outro"),
            other => panic!("expected missing scene, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_invalid_scene_parameters_are_rejected() {
        let mut config = Config::default();
        config.timeline.sequences[1].config = SceneConfig::default().set("chars_per_frame", -1.0);
        assert!(ReelEngine::new(config, &SceneRegistry::new()).is_err());
    }

    #[test]
    fn test_parallel_range_matches_sequential_frames() {
        let engine = engine();
        let frames = engine.render_range(80..200).unwrap();

        assert_eq!(frames.len(), 120);
        for (offset, description) in frames.iter().enumerate() {
            assert_eq!(description.frame, 80 + offset as i64);
            assert_eq!(description, &engine.render_frame(description.frame));
        }
    }

    #[test]
    fn test_seeking_backwards_is_deterministic() {
        let engine = engine();
        let frames: Vec<i64> = (0..450).step_by(7).collect();
        let forward: Vec<String> = frames
            .iter()
            .map(|&f| serde_json::to_string(&engine.render_frame(f)).unwrap())
            .collect();
        let mut backward: Vec<String> = frames
            .iter()
            .rev()
            .map(|&f| serde_json::to_string(&engine.render_frame(f)).unwrap())
            .collect();
        backward.reverse();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_invalid_range() {
        let engine = engine();
        assert!(engine.render_range(10..5).is_err());
        assert!(engine.render_range(5..5).unwrap().is_empty());
    }

    #[test]
    fn test_sequence_summaries() {
        let engine = engine();
        let summaries = engine.sequences();
        assert_eq!(summaries.len(), 5);
        assert_eq!(summaries[0].scene, "logo");
        assert_eq!(summaries[4].end, 450);
        for summary in &summaries {
            assert!(summary.settle_frame > 0.0);
            assert!(summary.settle_frame <= summary.duration as f64, "{:?}", summary);
        }
    }

    #[tokio::test]
    async fn test_export_writes_frames_and_manifest() {
        let dir = tempdir().unwrap();
        let engine = engine();

        let summary = engine.export(88..92, dir.path()).await.unwrap();
        assert_eq!(summary.frame_count, 4);
        assert!(summary.bytes_written > 0);

        for frame in 88..92 {
            let path = dir.path().join(format!("frame_{:06}.json", frame));
            let bytes = std::fs::read(&path).unwrap();
            assert_eq!(bytes, engine.encode_frame(&engine.render_frame(frame)).unwrap());

            let description: FrameDescription = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(description.frame, frame);
        }

        let description = engine.render_frame(88);
        assert_eq!(description.background, palette::BACKGROUND);

        let manifest = std::fs::read_to_string(dir.path().join("manifest.toml")).unwrap();
        let manifest: toml::Value = toml::from_str(&manifest).unwrap();
        assert_eq!(manifest["frame_count"].as_integer(), Some(4));
        assert_eq!(manifest["sequences"].as_array().map(|s| s.len()), Some(5));
    }

    #[tokio::test]
    async fn test_export_rejects_bad_ranges_before_touching_disk() {
        let dir = tempdir().unwrap();
        let engine = engine();

        let reversed = dir.path().join("reversed");
        match engine.export(10..5, &reversed).await {
            Err(ReelError::Output(OutputError::InvalidRange { start, end })) => {
                assert_eq!((start, end), (10, 5));
            }
            other => panic!("expected invalid range, got {:?}", other),
        }
        assert!(!reversed.exists());

        let negative = dir.path().join("negative");
        assert!(engine.export(-2..1, &negative).await.is_err());
        assert!(!negative.exists());
    }
}
