use serde::{Deserialize, Serialize};

use super::interpolate::{interpolate, Extrapolate};

/// How a cursor blinks across its period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlinkMode {
    /// On for the first half of the period, off for the second
    #[default]
    Square,
    /// Fades out and back in linearly over the period
    Pulse,
}

/// Blinking text cursor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cursor {
    pub period: u32,
    pub mode: BlinkMode,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            period: 15,
            mode: BlinkMode::Square,
        }
    }
}

impl Cursor {
    pub fn new(period: u32, mode: BlinkMode) -> Self {
        Self { period, mode }
    }

    fn phase(&self, frame: i64) -> i64 {
        frame.rem_euclid(self.period.max(1) as i64)
    }

    pub fn is_visible(&self, frame: i64) -> bool {
        self.opacity(frame) > 0.5
    }

    pub fn opacity(&self, frame: i64) -> f64 {
        let period = self.period.max(1) as f64;
        let phase = self.phase(frame) as f64;

        match self.mode {
            BlinkMode::Square => {
                if phase < period / 2.0 {
                    1.0
                } else {
                    0.0
                }
            }
            BlinkMode::Pulse => {
                let half = period / 2.0;
                if phase <= half {
                    interpolate(phase, [0.0, half], [1.0, 0.0], Extrapolate::CLAMP)
                } else {
                    interpolate(phase, [half, period], [0.0, 1.0], Extrapolate::CLAMP)
                }
            }
        }
    }
}

/// What a typewriter shows at one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextReveal {
    pub text: String,
    pub typed_chars: usize,
    pub complete: bool,
    pub cursor_visible: bool,
    pub cursor_opacity: f64,
}

/// Reveals a string a few characters per frame
#[derive(Debug, Clone, PartialEq)]
pub struct Typewriter {
    text: String,
    char_count: usize,
    start_frame: f64,
    chars_per_frame: f64,
    cursor: Option<Cursor>,
    hide_cursor_on_complete: bool,
}

impl Typewriter {
    pub fn new<S: Into<String>>(text: S) -> Self {
        let text = text.into();
        let char_count = text.chars().count();
        Self {
            text,
            char_count,
            start_frame: 0.0,
            chars_per_frame: 0.5,
            cursor: Some(Cursor::default()),
            hide_cursor_on_complete: true,
        }
    }

    pub fn start_frame(mut self, start_frame: f64) -> Self {
        self.start_frame = start_frame;
        self
    }

    pub fn chars_per_frame(mut self, rate: f64) -> Self {
        self.chars_per_frame = rate;
        self
    }

    pub fn cursor(mut self, cursor: Option<Cursor>) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn hide_cursor_on_complete(mut self, hide: bool) -> Self {
        self.hide_cursor_on_complete = hide;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Frames elapsed since the start, counting the start frame itself
    fn elapsed(&self, frame: f64) -> f64 {
        if frame < self.start_frame {
            0.0
        } else {
            frame - self.start_frame + 1.0
        }
    }

    /// Number of characters visible at `frame`
    pub fn typed_chars(&self, frame: f64) -> usize {
        let typed = (self.elapsed(frame) * self.chars_per_frame).floor();
        if !(typed > 0.0) {
            return 0;
        }
        if typed >= self.char_count as f64 {
            self.char_count
        } else {
            typed as usize
        }
    }

    pub fn reveal(&self, frame: i64) -> TextReveal {
        let typed_chars = self.typed_chars(frame as f64);
        let complete = typed_chars >= self.char_count;

        let end = self
            .text
            .char_indices()
            .nth(typed_chars)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len());

        let cursor_opacity = match self.cursor {
            Some(_) if complete && self.hide_cursor_on_complete => 0.0,
            Some(cursor) => cursor.opacity(frame),
            None => 0.0,
        };

        TextReveal {
            text: self.text[..end].to_string(),
            typed_chars,
            complete,
            cursor_visible: cursor_opacity > 0.5,
            cursor_opacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello_reveal() {
        let tw = Typewriter::new("hello").start_frame(10.0).chars_per_frame(1.0);
        assert_eq!(tw.reveal(9).text, "");
        assert_eq!(tw.reveal(10).text, "h");
        assert_eq!(tw.reveal(12).text, "hel");
        assert_eq!(tw.reveal(14).text, "hello");
        assert!(tw.reveal(14).complete);
        assert_eq!(tw.reveal(500).text, "hello");
    }

    #[test]
    fn test_monotonic_and_bounded() {
        let tw = Typewriter::new("npx @orchestra-research/ai-research-skills")
            .start_frame(5.0)
            .chars_per_frame(0.8);
        let mut last = 0;
        for frame in -20..200 {
            let typed = tw.reveal(frame).typed_chars;
            assert!(typed >= last);
            assert!(typed <= tw.text().chars().count());
            last = typed;
        }
        assert_eq!(last, tw.text().chars().count());
    }

    #[test]
    fn test_fractional_rate() {
        let tw = Typewriter::new("abcdef").chars_per_frame(0.5);
        assert_eq!(tw.reveal(0).typed_chars, 0);
        assert_eq!(tw.reveal(1).typed_chars, 1);
        assert_eq!(tw.reveal(2).typed_chars, 1);
        assert_eq!(tw.reveal(3).typed_chars, 2);
    }

    #[test]
    fn test_multibyte_text() {
        let tw = Typewriter::new("✓ ok").chars_per_frame(1.0);
        assert_eq!(tw.reveal(0).text, "✓");
        assert_eq!(tw.reveal(1).text, "✓ ");
        assert_eq!(tw.reveal(3).text, "✓ ok");
    }

    #[test]
    fn test_cursor_hidden_when_complete() {
        let tw = Typewriter::new("hi").chars_per_frame(1.0);
        assert!(tw.reveal(0).cursor_visible);
        assert!(!tw.reveal(1).cursor_visible);

        let keep = tw.clone().hide_cursor_on_complete(false);
        assert!(keep.reveal(30).cursor_visible);
    }

    #[test]
    fn test_square_blink() {
        let cursor = Cursor::new(10, BlinkMode::Square);
        assert!(cursor.is_visible(0));
        assert!(cursor.is_visible(4));
        assert!(!cursor.is_visible(5));
        assert!(!cursor.is_visible(9));
        assert!(cursor.is_visible(10));
        assert!(!cursor.is_visible(-1));
    }

    #[test]
    fn test_pulse_blink() {
        let cursor = Cursor::new(30, BlinkMode::Pulse);
        assert_eq!(cursor.opacity(0), 1.0);
        assert_eq!(cursor.opacity(15), 0.0);
        assert!((cursor.opacity(45) - 0.0).abs() < 1e-12);
        assert!((cursor.opacity(22) - 7.0 / 15.0).abs() < 1e-12);
    }
}
