use crate::{
    animation::{interpolate, BlinkMode, Cursor, Extrapolate, SpringConfig},
    render::{palette, FrameContext, Node},
    scenes::{
        content::{INSTALL_COMMAND, NPM_INSTALL, REPOSITORY_URL},
        traits::{progress, settle},
        Scene, SceneConfig,
    },
};

const MAIN_SPRING: SpringConfig = SpringConfig::new(15.0, 100.0);
const DETAIL_SPRING: SpringConfig = SpringConfig::damped(200.0);

const COMMAND_DELAY_SECONDS: f64 = 0.5;
const URL_DELAY_SECONDS: f64 = 1.0;
const CURSOR_PERIOD: u32 = 30;

/// Closing call-to-action with the install command and links
pub struct CallToActionScene;

impl CallToActionScene {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CallToActionScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for CallToActionScene {
    fn name(&self) -> &str {
        "cta"
    }

    fn description(&self) -> &str {
        "Get-started heading, install command box and GitHub links"
    }

    fn render(&self, ctx: &FrameContext, config: &SceneConfig) -> Node {
        let delay = config.start_delay;

        let main = progress(ctx, delay, MAIN_SPRING);
        let opacity = interpolate(main, [0.0, 1.0], [0.0, 1.0], Extrapolate::EXTEND);
        let scale = interpolate(main, [0.0, 1.0], [0.9, 1.0], Extrapolate::EXTEND);

        let command = progress(ctx, delay + ctx.seconds(COMMAND_DELAY_SECONDS), DETAIL_SPRING);
        let command_opacity = interpolate(command, [0.0, 1.0], [0.0, 1.0], Extrapolate::CLAMP);

        let url = progress(ctx, delay + ctx.seconds(URL_DELAY_SECONDS), DETAIL_SPRING);
        let url_opacity = interpolate(url, [0.0, 1.0], [0.0, 1.0], Extrapolate::CLAMP);

        // The cursor clock starts with the scene, not before it
        let cursor_frame = (ctx.time() - delay).max(0.0).floor() as i64;
        let cursor = Cursor::new(CURSOR_PERIOD, BlinkMode::Pulse).opacity(cursor_frame);

        Node::new("call-to-action")
            .opacity(opacity)
            .scale(scale)
            .child(
                Node::new("heading")
                    .color(palette::TEXT)
                    .child(Node::new("lead").text("Get Started in "))
                    .child(Node::new("highlight").text("One Command").color(palette::CYAN)),
            )
            .child(
                Node::new("command-box")
                    .opacity(command_opacity)
                    .background(palette::TERMINAL_BG)
                    .color(palette::TERMINAL_BORDER)
                    .child(Node::new("prompt").text("$").color(palette::GREEN))
                    .child(
                        Node::new("command")
                            .text(config.get_string("command").unwrap_or(INSTALL_COMMAND))
                            .color(palette::TEXT),
                    )
                    .child(Node::new("cursor").opacity(cursor).background(palette::GREEN)),
            )
            .child(
                Node::new("links")
                    .opacity(url_opacity)
                    .color(palette::DIM)
                    .child(Node::new("url").text(REPOSITORY_URL))
                    .child(Node::new("star").text("★ Star on GitHub").color(palette::YELLOW))
                    .child(Node::new("npm").text(NPM_INSTALL).color(palette::CYAN)),
            )
    }

    fn settle_frame(&self, fps: f64, config: &SceneConfig) -> f64 {
        let main = config.start_delay + settle(fps, MAIN_SPRING);
        let url = config.start_delay + URL_DELAY_SECONDS * fps + settle(fps, DETAIL_SPRING);
        main.max(url)
    }
}
