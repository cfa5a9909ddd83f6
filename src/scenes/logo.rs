use crate::{
    animation::{interpolate, Extrapolate, SpringConfig},
    render::{palette, FrameContext, Node},
    scenes::{
        content::{ORCHESTRA_ASCII, TAGLINE, TITLE},
        traits::{progress, settle},
        Scene, SceneConfig,
    },
};

const LOGO_SPRING: SpringConfig = SpringConfig::damped(200.0);

/// Seconds between the logo and its subtitle
const SUBTITLE_DELAY_SECONDS: f64 = 0.5;

/// ASCII logo reveal with an optional subtitle
pub struct LogoScene;

impl LogoScene {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogoScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for LogoScene {
    fn name(&self) -> &str {
        "logo"
    }

    fn description(&self) -> &str {
        "ORCHESTRA ASCII logo springing in, followed by the title and tagline"
    }

    fn render(&self, ctx: &FrameContext, config: &SceneConfig) -> Node {
        let logo = progress(ctx, config.start_delay, LOGO_SPRING);
        let logo_opacity = interpolate(logo, [0.0, 1.0], [0.0, 1.0], Extrapolate::EXTEND);
        let logo_scale = interpolate(logo, [0.0, 1.0], [0.8, 1.0], Extrapolate::EXTEND);

        let mut root = Node::new("logo").child(
            Node::new("ascii")
                .text(ORCHESTRA_ASCII)
                .color(palette::WHITE)
                .opacity(logo_opacity)
                .scale(logo_scale),
        );

        if config.get_bool_or("show_subtitle", true) {
            let subtitle = progress(
                ctx,
                config.start_delay + ctx.seconds(SUBTITLE_DELAY_SECONDS),
                LOGO_SPRING,
            );
            let opacity = interpolate(subtitle, [0.0, 1.0], [0.0, 1.0], Extrapolate::CLAMP);

            root = root.child(
                Node::new("subtitle")
                    .opacity(opacity)
                    .child(Node::new("title").text(TITLE).color(palette::WHITE))
                    .child(Node::new("tagline").text(TAGLINE).color(palette::DIM)),
            );
        }

        root
    }

    fn settle_frame(&self, fps: f64, config: &SceneConfig) -> f64 {
        let last_start = if config.get_bool_or("show_subtitle", true) {
            config.start_delay + SUBTITLE_DELAY_SECONDS * fps
        } else {
            config.start_delay
        };
        last_start + settle(fps, LOGO_SPRING)
    }
}
