use crate::{
    animation::{interpolate, Extrapolate, SpringConfig},
    render::{palette, FrameContext, Node},
    scenes::{
        content::{Agent, AGENTS},
        traits::{progress, settle},
        Scene, SceneConfig,
    },
};

const HEADER_SPRING: SpringConfig = SpringConfig::damped(200.0);
const ITEM_SPRING: SpringConfig = SpringConfig::new(20.0, 200.0);
const CHECK_SPRING: SpringConfig = SpringConfig::new(10.0, 200.0);

/// Seconds between the header and the first item
const LIST_DELAY_SECONDS: f64 = 0.3;
/// Seconds between consecutive items
const STAGGER_SECONDS: f64 = 0.2;
/// Frames between an item and its check mark
const CHECK_DELAY_FRAMES: f64 = 8.0;

/// Installer output listing the coding agents it found
pub struct AgentsScene {
    agents: Vec<Agent>,
}

impl AgentsScene {
    pub fn new() -> Self {
        Self::with_agents(AGENTS.to_vec())
    }

    pub fn with_agents(agents: Vec<Agent>) -> Self {
        Self { agents }
    }

    fn item_delay(&self, fps: f64, start_delay: f64, index: usize) -> f64 {
        start_delay + LIST_DELAY_SECONDS * fps + index as f64 * STAGGER_SECONDS * fps
    }

    fn render_item(&self, ctx: &FrameContext, agent: &Agent, delay: f64) -> Node {
        let item = progress(ctx, delay, ITEM_SPRING);
        let opacity = interpolate(item, [0.0, 1.0], [0.0, 1.0], Extrapolate::EXTEND);
        let translate_x = interpolate(item, [0.0, 1.0], [-20.0, 0.0], Extrapolate::EXTEND);

        let check = progress(ctx, delay + CHECK_DELAY_FRAMES, CHECK_SPRING);
        let check_scale = interpolate(check, [0.0, 1.0], [0.0, 1.0], Extrapolate::CLAMP);
        let glyph = if check_scale > 0.5 { "●" } else { "○" };

        Node::new("agent")
            .opacity(opacity)
            .translate(translate_x, 0.0)
            .child(Node::new("check").text(glyph).color(palette::GREEN).scale(check_scale))
            .child(Node::new("name").text(agent.name).color(palette::TEXT))
            .child(Node::new("path").text(agent.path).color(palette::DIM))
    }
}

impl Default for AgentsScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for AgentsScene {
    fn name(&self) -> &str {
        "agents"
    }

    fn description(&self) -> &str {
        "Detected coding agents sliding in one by one with check marks"
    }

    fn render(&self, ctx: &FrameContext, config: &SceneConfig) -> Node {
        let header = progress(ctx, config.start_delay, HEADER_SPRING);
        let header_opacity = interpolate(header, [0.0, 1.0], [0.0, 1.0], Extrapolate::EXTEND);

        let items = self.agents.iter().enumerate().map(|(index, agent)| {
            self.render_item(ctx, agent, self.item_delay(ctx.fps, config.start_delay, index))
        });

        Node::new("agent-detection")
            .child(
                Node::new("header")
                    .text(format!("✓ Found {} coding agents", self.agents.len()))
                    .color(palette::GREEN)
                    .opacity(header_opacity),
            )
            .child(Node::new("agents").children(items))
    }

    fn settle_frame(&self, fps: f64, config: &SceneConfig) -> f64 {
        let header = config.start_delay + settle(fps, HEADER_SPRING);
        let last = self.agents.len().saturating_sub(1);
        let last_delay = self.item_delay(fps, config.start_delay, last);
        let item = last_delay + settle(fps, ITEM_SPRING);
        let check = last_delay + CHECK_DELAY_FRAMES + settle(fps, CHECK_SPRING);
        header.max(item).max(check)
    }
}
