use crate::{
    animation::{interpolate, BlinkMode, Cursor, Extrapolate, Typewriter},
    error::{Result, SceneError},
    render::{palette, FrameContext, Node},
    scenes::{content::INSTALL_COMMAND, Scene, SceneConfig},
};

/// Seconds the window takes to fade and scale in
const WINDOW_FADE_SECONDS: f64 = 0.5;
const COMMAND_CHARS_PER_FRAME: f64 = 0.8;
const CURSOR_PERIOD: u32 = 15;

/// Terminal window chrome wrapped around arbitrary body content.
///
/// Fades from 0 to 1 and scales from 0.95 to 1 over half a second after
/// `delay`, holding the start state before it.
pub fn terminal_window(
    ctx: &FrameContext,
    delay: f64,
    title: &str,
    show_controls: bool,
    body: Vec<Node>,
) -> Node {
    let fade = [0.0, ctx.seconds(WINDOW_FADE_SECONDS)];
    let elapsed = ctx.time() - delay;
    let opacity = interpolate(elapsed, fade, [0.0, 1.0], Extrapolate::CLAMP);
    let scale = interpolate(elapsed, fade, [0.95, 1.0], Extrapolate::CLAMP);

    let mut title_bar = Node::new("title-bar").background(palette::TERMINAL_HEADER);
    if show_controls {
        title_bar = title_bar.child(Node::new("controls").children(
            [palette::RED, palette::YELLOW, palette::GREEN]
                .into_iter()
                .map(|color| Node::new("control").background(color)),
        ));
    }
    title_bar = title_bar.child(Node::new("title").text(title).color(palette::DIM));

    Node::new("terminal")
        .opacity(opacity)
        .scale(scale)
        .background(palette::TERMINAL_BG)
        .color(palette::TERMINAL_BORDER)
        .child(title_bar)
        .child(
            Node::new("body")
                .background(palette::TERMINAL_BG)
                .color(palette::TEXT)
                .children(body),
        )
}

/// A prompt followed by a command being typed out
pub fn command_line(ctx: &FrameContext, typewriter: &Typewriter, prompt: &str) -> Node {
    let reveal = typewriter.reveal(ctx.frame);

    Node::new("command-line")
        .child(Node::new("prompt").text(prompt).color(palette::GREEN))
        .child(Node::new("typed").text(reveal.text).color(palette::TEXT))
        .child(
            Node::new("cursor")
                .opacity(reveal.cursor_opacity)
                .background(palette::GREEN),
        )
}

/// Terminal session typing the install command
pub struct TerminalScene;

impl TerminalScene {
    pub fn new() -> Self {
        Self
    }

    fn typewriter(&self, fps: f64, config: &SceneConfig) -> Typewriter {
        let command = config.get_string("command").unwrap_or(INSTALL_COMMAND);
        let typing_delay = config.get_f64_or("typing_delay", WINDOW_FADE_SECONDS);
        let period = config.get_f64_or("cursor_period", CURSOR_PERIOD as f64);

        Typewriter::new(command)
            .start_frame(config.start_delay + typing_delay * fps)
            .chars_per_frame(config.get_f64_or("chars_per_frame", COMMAND_CHARS_PER_FRAME))
            .cursor(Some(Cursor::new(period.max(1.0) as u32, BlinkMode::Square)))
            .hide_cursor_on_complete(config.get_bool_or("hide_cursor_on_complete", true))
    }
}

impl Default for TerminalScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for TerminalScene {
    fn name(&self) -> &str {
        "terminal"
    }

    fn description(&self) -> &str {
        "Terminal window typing the one-line install command"
    }

    fn render(&self, ctx: &FrameContext, config: &SceneConfig) -> Node {
        let typewriter = self.typewriter(ctx.fps, config);
        let prompt = config.get_string("prompt").unwrap_or("$ ");

        terminal_window(
            ctx,
            config.start_delay,
            config.get_string("title").unwrap_or("zsh"),
            config.get_bool_or("show_controls", true),
            vec![command_line(ctx, &typewriter, prompt)],
        )
    }

    fn settle_frame(&self, fps: f64, config: &SceneConfig) -> f64 {
        let window = config.start_delay + WINDOW_FADE_SECONDS * fps;

        let command_len = config
            .get_string("command")
            .unwrap_or(INSTALL_COMMAND)
            .chars()
            .count() as f64;
        let rate = config.get_f64_or("chars_per_frame", COMMAND_CHARS_PER_FRAME);
        let typing_start =
            config.start_delay + config.get_f64_or("typing_delay", WINDOW_FADE_SECONDS) * fps;

        window.max(typing_start + (command_len / rate).ceil())
    }

    fn validate_config(&self, config: &SceneConfig) -> Result<()> {
        config.require_non_negative(self.name(), "start_delay", config.start_delay)?;
        config.require_non_negative(
            self.name(),
            "typing_delay",
            config.get_f64_or("typing_delay", WINDOW_FADE_SECONDS),
        )?;

        let rate = config.get_f64_or("chars_per_frame", COMMAND_CHARS_PER_FRAME);
        if !(rate > 0.0) || !rate.is_finite() {
            return Err(SceneError::InvalidParameter {
                scene: self.name().to_string(),
                key: "chars_per_frame".to_string(),
                value: rate.to_string(),
            }
            .into());
        }

        let period = config.get_f64_or("cursor_period", CURSOR_PERIOD as f64);
        if !(period >= 1.0) || !period.is_finite() {
            return Err(SceneError::InvalidParameter {
                scene: self.name().to_string(),
                key: "cursor_period".to_string(),
                value: period.to_string(),
            }
            .into());
        }

        Ok(())
    }
}
