use serde::{Deserialize, Serialize};

use crate::error::AnimationError;

/// Behaviour of an interpolation outside its input range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtrapolateType {
    /// Continue with the slope of the outermost segment
    #[default]
    Extend,
    /// Hold the outermost output value
    Clamp,
    /// Return the input unchanged
    Identity,
}

/// Left and right extrapolation behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Extrapolate {
    pub left: ExtrapolateType,
    pub right: ExtrapolateType,
}

impl Extrapolate {
    pub const EXTEND: Self = Self {
        left: ExtrapolateType::Extend,
        right: ExtrapolateType::Extend,
    };

    pub const CLAMP: Self = Self {
        left: ExtrapolateType::Clamp,
        right: ExtrapolateType::Clamp,
    };

    pub const CLAMP_RIGHT: Self = Self {
        left: ExtrapolateType::Extend,
        right: ExtrapolateType::Clamp,
    };

    pub const CLAMP_LEFT: Self = Self {
        left: ExtrapolateType::Clamp,
        right: ExtrapolateType::Extend,
    };
}

/// Map `value` from `[input[0], input[1]]` onto `[output[0], output[1]]`.
///
/// A zero-width input range returns `output[0]` for `value <= input[0]`
/// and `output[1]` otherwise. A descending input range is flipped together
/// with its output range; `left` and `right` extrapolation always refer to
/// the low and high ends of the input axis.
pub fn interpolate(value: f64, input: [f64; 2], output: [f64; 2], extrapolate: Extrapolate) -> f64 {
    interpolate_segment(value, input, output, extrapolate)
}

fn interpolate_segment(
    value: f64,
    [in_min, in_max]: [f64; 2],
    [out_min, out_max]: [f64; 2],
    extrapolate: Extrapolate,
) -> f64 {
    if in_min > in_max {
        return interpolate_segment(value, [in_max, in_min], [out_max, out_min], extrapolate);
    }

    let mut result = value;

    if result < in_min {
        match extrapolate.left {
            ExtrapolateType::Identity => return result,
            ExtrapolateType::Clamp => result = in_min,
            ExtrapolateType::Extend => {}
        }
    }

    if result > in_max {
        match extrapolate.right {
            ExtrapolateType::Identity => return result,
            ExtrapolateType::Clamp => result = in_max,
            ExtrapolateType::Extend => {}
        }
    }

    if out_min == out_max {
        return out_min;
    }

    if in_min == in_max {
        return if value <= in_min { out_min } else { out_max };
    }

    let ratio = (result - in_min) / (in_max - in_min);
    out_min + ratio * (out_max - out_min)
}

/// Piecewise-linear mapping over a validated multi-point range
#[derive(Debug, Clone, PartialEq)]
pub struct Interpolation {
    input: Vec<f64>,
    output: Vec<f64>,
    extrapolate: Extrapolate,
}

impl Interpolation {
    pub fn new(input: Vec<f64>, output: Vec<f64>) -> Result<Self, AnimationError> {
        if input.len() != output.len() {
            return Err(AnimationError::RangeLengthMismatch {
                input: input.len(),
                output: output.len(),
            });
        }
        if input.len() < 2 {
            return Err(AnimationError::TooFewPoints { points: input.len() });
        }
        if let Some(index) = input
            .iter()
            .zip(output.iter())
            .position(|(i, o)| !i.is_finite() || !o.is_finite())
        {
            return Err(AnimationError::NonFinite { index });
        }
        if let Some(index) = input.windows(2).position(|w| w[1] < w[0]) {
            return Err(AnimationError::UnsortedInput { index: index + 1 });
        }

        Ok(Self {
            input,
            output,
            extrapolate: Extrapolate::default(),
        })
    }

    pub fn with_extrapolate(mut self, extrapolate: Extrapolate) -> Self {
        self.extrapolate = extrapolate;
        self
    }

    /// Index of the segment used for `value`
    fn segment(&self, value: f64) -> usize {
        let last = self.input.len() - 1;
        (1..last)
            .find(|&i| self.input[i] >= value)
            .map(|i| i - 1)
            .unwrap_or(last - 1)
    }

    pub fn apply(&self, value: f64) -> f64 {
        let i = self.segment(value);
        interpolate_segment(
            value,
            [self.input[i], self.input[i + 1]],
            [self.output[i], self.output[i + 1]],
            self.extrapolate,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_mapping() {
        assert!((interpolate(0.5, [0.0, 1.0], [0.8, 1.0], Extrapolate::EXTEND) - 0.9).abs() < 1e-12);
        assert_eq!(interpolate(0.0, [0.0, 1.0], [-20.0, 0.0], Extrapolate::EXTEND), -20.0);
        assert_eq!(interpolate(1.0, [0.0, 1.0], [15.0, 0.0], Extrapolate::EXTEND), 0.0);
    }

    #[test]
    fn test_extend_keeps_slope() {
        let slope = 2.0;
        for x in [-3.0, -1.0, 2.0, 5.5] {
            let y = interpolate(x, [0.0, 1.0], [0.0, slope], Extrapolate::EXTEND);
            assert!((y - slope * x).abs() < 1e-12);
        }
    }

    #[test]
    fn test_clamp_stays_in_range() {
        for i in -50..50 {
            let x = i as f64 / 10.0;
            let y = interpolate(x, [0.0, 1.0], [0.95, 1.0], Extrapolate::CLAMP);
            assert!((0.95..=1.0).contains(&y));
        }
    }

    #[test]
    fn test_one_sided_clamp() {
        assert_eq!(interpolate(2.0, [0.0, 1.0], [0.0, 1.0], Extrapolate::CLAMP_RIGHT), 1.0);
        assert_eq!(interpolate(-1.0, [0.0, 1.0], [0.0, 1.0], Extrapolate::CLAMP_RIGHT), -1.0);
        assert_eq!(interpolate(-1.0, [0.0, 1.0], [0.0, 1.0], Extrapolate::CLAMP_LEFT), 0.0);
    }

    #[test]
    fn test_identity() {
        let identity = Extrapolate {
            left: ExtrapolateType::Identity,
            right: ExtrapolateType::Identity,
        };
        assert_eq!(interpolate(7.0, [0.0, 1.0], [10.0, 20.0], identity), 7.0);
        assert_eq!(interpolate(-7.0, [0.0, 1.0], [10.0, 20.0], identity), -7.0);
    }

    #[test]
    fn test_zero_width_domain() {
        let y = interpolate(3.0, [3.0, 3.0], [0.0, 1.0], Extrapolate::EXTEND);
        assert_eq!(y, 0.0);
        let y = interpolate(3.5, [3.0, 3.0], [0.0, 1.0], Extrapolate::EXTEND);
        assert_eq!(y, 1.0);
        let y = interpolate(2.0, [3.0, 3.0], [0.0, 1.0], Extrapolate::CLAMP);
        assert!(y.is_finite());
    }

    #[test]
    fn test_multi_point_triangle() {
        let blink = Interpolation::new(vec![0.0, 7.5, 15.0], vec![1.0, 0.0, 1.0])
            .unwrap()
            .with_extrapolate(Extrapolate::CLAMP);
        assert_eq!(blink.apply(0.0), 1.0);
        assert_eq!(blink.apply(7.5), 0.0);
        assert_eq!(blink.apply(15.0), 1.0);
        assert!((blink.apply(3.75) - 0.5).abs() < 1e-12);
        assert!((blink.apply(11.25) - 0.5).abs() < 1e-12);
        assert_eq!(blink.apply(40.0), 1.0);
    }

    #[test]
    fn test_multi_point_extends_outer_segments() {
        let blink = Interpolation::new(vec![0.0, 7.5, 15.0], vec![1.0, 0.0, 1.0]).unwrap();
        assert!((blink.apply(-7.5) - 2.0).abs() < 1e-12);
        assert!((blink.apply(22.5) - 2.0).abs() < 1e-12);
        assert!((blink.apply(3.75) - 0.5).abs() < 1e-12);
        assert!((blink.apply(11.25) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_multi_point_identity() {
        let identity = Extrapolate {
            left: ExtrapolateType::Identity,
            right: ExtrapolateType::Identity,
        };
        let blink = Interpolation::new(vec![0.0, 7.5, 15.0], vec![1.0, 0.0, 1.0])
            .unwrap()
            .with_extrapolate(identity);
        assert_eq!(blink.apply(-3.0), -3.0);
        assert_eq!(blink.apply(20.0), 20.0);
        assert_eq!(blink.apply(7.5), 0.0);
    }

    #[test]
    fn test_flat_output_segment() {
        assert_eq!(interpolate(5.0, [0.0, 10.0], [0.4, 0.4], Extrapolate::EXTEND), 0.4);
        assert_eq!(interpolate(-100.0, [0.0, 10.0], [0.4, 0.4], Extrapolate::EXTEND), 0.4);

        let hold = Interpolation::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 1.0]).unwrap();
        assert_eq!(hold.apply(1.5), 1.0);
        assert_eq!(hold.apply(5.0), 1.0);
        assert!((hold.apply(-1.0) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_descending_input_range() {
        let extended = interpolate(0.25, [1.0, 0.0], [0.0, 1.0], Extrapolate::EXTEND);
        let clamped = interpolate(0.25, [1.0, 0.0], [0.0, 1.0], Extrapolate::CLAMP);
        assert!((extended - 0.75).abs() < 1e-12);
        assert!((clamped - 0.75).abs() < 1e-12);

        assert_eq!(interpolate(2.0, [1.0, 0.0], [0.0, 1.0], Extrapolate::CLAMP), 0.0);
        assert_eq!(interpolate(-2.0, [1.0, 0.0], [0.0, 1.0], Extrapolate::CLAMP), 1.0);
        assert!((interpolate(2.0, [1.0, 0.0], [0.0, 1.0], Extrapolate::EXTEND) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_ranges() {
        assert_eq!(
            Interpolation::new(vec![0.0], vec![1.0]),
            Err(AnimationError::TooFewPoints { points: 1 })
        );
        assert_eq!(
            Interpolation::new(vec![0.0, 1.0], vec![1.0]),
            Err(AnimationError::RangeLengthMismatch { input: 2, output: 1 })
        );
        assert_eq!(
            Interpolation::new(vec![0.0, 2.0, 1.0], vec![0.0, 1.0, 2.0]),
            Err(AnimationError::UnsortedInput { index: 2 })
        );
        assert_eq!(
            Interpolation::new(vec![0.0, f64::NAN], vec![0.0, 1.0]),
            Err(AnimationError::NonFinite { index: 1 })
        );
    }
}
