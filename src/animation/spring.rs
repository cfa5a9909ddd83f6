use serde::{Deserialize, Serialize};

/// Upper bound used when searching for a settle frame (ten minutes at 60 fps)
const MAX_SETTLE_SEARCH_FRAMES: u32 = 36_000;

/// Physical parameters of a damped spring
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    pub damping: f64,
    pub stiffness: f64,
    pub mass: f64,

    /// Never report progress above 1
    pub overshoot_clamping: bool,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: 10.0,
            stiffness: 100.0,
            mass: 1.0,
            overshoot_clamping: false,
        }
    }
}

impl SpringConfig {
    /// Default stiffness and mass with the given damping
    pub const fn damped(damping: f64) -> Self {
        Self {
            damping,
            stiffness: 100.0,
            mass: 1.0,
            overshoot_clamping: false,
        }
    }

    /// Default mass with the given damping and stiffness
    pub const fn new(damping: f64, stiffness: f64) -> Self {
        Self {
            damping,
            stiffness,
            mass: 1.0,
            overshoot_clamping: false,
        }
    }

    pub const fn with_overshoot_clamping(mut self, clamp: bool) -> Self {
        self.overshoot_clamping = clamp;
        self
    }

    fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    fn is_usable(&self) -> bool {
        self.damping.is_finite()
            && self.stiffness.is_finite()
            && self.mass.is_finite()
            && self.stiffness > 0.0
            && self.mass > 0.0
            && self.damping >= 0.0
    }

    /// Closed-form displacement toward 1 after `t` seconds, starting at rest
    fn response(&self, t: f64) -> f64 {
        let omega0 = self.natural_frequency();
        let zeta = self.damping_ratio();

        let value = if zeta < 1.0 {
            let omega1 = omega0 * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * omega0 * t).exp();
            1.0 - envelope * ((omega1 * t).cos() + (zeta * omega0 / omega1) * (omega1 * t).sin())
        } else {
            // Over-damped springs follow the critical response
            let envelope = (-omega0 * t).exp();
            1.0 - envelope * (1.0 + omega0 * t)
        };

        if self.overshoot_clamping {
            value.min(1.0)
        } else {
            value
        }
    }

    /// Upper bound on `|1 - response(t)|`, non-increasing in `t`
    fn envelope(&self, t: f64) -> f64 {
        let omega0 = self.natural_frequency();
        let zeta = self.damping_ratio();

        if zeta < 1.0 {
            let omega1 = omega0 * (1.0 - zeta * zeta).sqrt();
            let ratio = zeta * omega0 / omega1;
            (-zeta * omega0 * t).exp() * (1.0 + ratio * ratio).sqrt()
        } else {
            (-omega0 * t).exp() * (1.0 + omega0 * t)
        }
    }
}

/// Spring progress at `frame` frames after the animation starts.
///
/// Returns 0 for `frame <= 0` and approaches 1 as the spring settles.
/// A non-positive frame rate or unusable config yields 0.
pub fn spring(frame: f64, fps: f64, config: &SpringConfig) -> f64 {
    if !(fps > 0.0) || !fps.is_finite() || !config.is_usable() || !(frame > 0.0) {
        return 0.0;
    }
    if frame.is_infinite() {
        return 1.0;
    }
    config.response(frame / fps)
}

/// A spring bound to a frame rate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    fps: f64,
    config: SpringConfig,
}

impl Spring {
    pub fn new(fps: f64, config: SpringConfig) -> Self {
        Self { fps, config }
    }

    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    /// Progress at `frame` frames after the start
    pub fn progress(&self, frame: f64) -> f64 {
        spring(frame, self.fps, &self.config)
    }

    /// Progress at `frame` for an animation that starts at `delay`
    pub fn progress_after(&self, frame: f64, delay: f64) -> f64 {
        self.progress(frame - delay)
    }

    /// First whole frame after which progress stays within `threshold` of 1
    pub fn settle_frames(&self, threshold: f64) -> u32 {
        if !(self.fps > 0.0) || !self.config.is_usable() || !(threshold > 0.0) {
            return 0;
        }

        (0..MAX_SETTLE_SEARCH_FRAMES)
            .find(|&frame| self.config.envelope(frame as f64 / self.fps) <= threshold)
            .unwrap_or(MAX_SETTLE_SEARCH_FRAMES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FPS: f64 = 30.0;

    #[test]
    fn test_zero_before_start() {
        let config = SpringConfig::default();
        assert_eq!(spring(0.0, FPS, &config), 0.0);
        assert_eq!(spring(-12.0, FPS, &config), 0.0);
        assert_eq!(Spring::new(FPS, config).progress_after(9.0, 10.0), 0.0);
        assert_eq!(Spring::new(FPS, config).progress_after(10.0, 10.0), 0.0);
    }

    #[test]
    fn test_converges_to_one() {
        for config in [
            SpringConfig::default(),
            SpringConfig::damped(200.0),
            SpringConfig::new(20.0, 200.0),
            SpringConfig::new(15.0, 100.0),
        ] {
            let value = spring(600.0, FPS, &config);
            assert!((value - 1.0).abs() < 1e-4, "{:?} gave {}", config, value);
        }
    }

    #[test]
    fn test_default_spring_overshoots() {
        let config = SpringConfig::default();
        let peak = (1..90)
            .map(|f| spring(f as f64, FPS, &config))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_overshoot_clamping() {
        let config = SpringConfig::default().with_overshoot_clamping(true);
        for f in 0..120 {
            assert!(spring(f as f64, FPS, &config) <= 1.0);
        }
    }

    #[test]
    fn test_heavy_damping_is_monotonic() {
        let config = SpringConfig::damped(200.0);
        let mut last = 0.0;
        for f in 0..120 {
            let value = spring(f as f64, FPS, &config);
            assert!(value >= last);
            assert!(value <= 1.0);
            last = value;
        }
    }

    #[test]
    fn test_critical_closed_form() {
        // damping 200 -> w0 = 10, t = 0.5s
        let value = spring(15.0, FPS, &SpringConfig::damped(200.0));
        let expected = 1.0 - (-5.0f64).exp() * 6.0;
        assert!((value - expected).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_fps_yields_zero() {
        let config = SpringConfig::default();
        assert_eq!(spring(10.0, 0.0, &config), 0.0);
        assert_eq!(spring(10.0, -30.0, &config), 0.0);
        assert_eq!(spring(10.0, f64::NAN, &config), 0.0);
    }

    #[test]
    fn test_settle_frames() {
        let spring = Spring::new(FPS, SpringConfig::damped(200.0));
        let settle = spring.settle_frames(0.001);
        assert!(settle > 0);
        for f in settle..settle + 120 {
            assert!((spring.progress(f as f64) - 1.0).abs() <= 0.001);
        }

        let bouncy = Spring::new(FPS, SpringConfig::default());
        let bouncy_settle = bouncy.settle_frames(0.001);
        for f in bouncy_settle..bouncy_settle + 120 {
            assert!((bouncy.progress(f as f64) - 1.0).abs() <= 0.001);
        }
    }

    #[test]
    fn test_deterministic() {
        let config = SpringConfig::new(20.0, 150.0);
        let a: Vec<u64> = (0..60).map(|f| spring(f as f64, FPS, &config).to_bits()).collect();
        let b: Vec<u64> = (0..60).rev().map(|f| spring(f as f64, FPS, &config).to_bits()).rev().collect();
        assert_eq!(a, b);
    }
}
