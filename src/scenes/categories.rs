use crate::{
    animation::{interpolate, Extrapolate, SpringConfig},
    render::{palette, FrameContext, Node},
    scenes::{
        content::{Category, CATEGORIES, TOTAL_SKILLS},
        traits::{progress, settle},
        Scene, SceneConfig,
    },
};

const HEADER_SPRING: SpringConfig = SpringConfig::damped(200.0);
const ITEM_SPRING: SpringConfig = SpringConfig::new(20.0, 150.0);
const SELECT_SPRING: SpringConfig = SpringConfig::new(15.0, 200.0);

const LIST_DELAY_SECONDS: f64 = 0.3;
const STAGGER_SECONDS: f64 = 0.1;
/// Seconds between an item appearing and being selected
const SELECT_DELAY_SECONDS: f64 = 0.8;

/// Installer prompt with every category being ticked
pub struct CategoriesScene {
    categories: Vec<Category>,
    total_skills: u32,
}

impl CategoriesScene {
    pub fn new() -> Self {
        Self {
            categories: CATEGORIES.to_vec(),
            total_skills: TOTAL_SKILLS,
        }
    }

    pub fn with_categories(categories: Vec<Category>, total_skills: u32) -> Self {
        Self {
            categories,
            total_skills,
        }
    }

    fn item_delay(&self, fps: f64, start_delay: f64, index: usize) -> f64 {
        start_delay + LIST_DELAY_SECONDS * fps + index as f64 * STAGGER_SECONDS * fps
    }

    fn render_item(
        &self,
        ctx: &FrameContext,
        category: &Category,
        delay: f64,
        show_check: bool,
        show_examples: bool,
    ) -> Node {
        let item = progress(ctx, delay, ITEM_SPRING);
        let opacity = interpolate(item, [0.0, 1.0], [0.0, 1.0], Extrapolate::EXTEND);
        let translate_y = interpolate(item, [0.0, 1.0], [15.0, 0.0], Extrapolate::EXTEND);

        let marker = if show_check {
            let select = progress(ctx, delay + ctx.seconds(SELECT_DELAY_SECONDS), SELECT_SPRING);
            let check = interpolate(select, [0.0, 1.0], [0.0, 1.0], Extrapolate::CLAMP);
            let glyph = if check > 0.5 { "◉" } else { "○" };
            Node::new("marker").text(glyph).color(palette::GREEN).opacity(check)
        } else {
            Node::new("marker").text("○").color(palette::DIM).opacity(opacity)
        };

        let mut node = Node::new("category")
            .opacity(opacity)
            .translate(0.0, translate_y)
            .child(marker)
            .child(Node::new("name").text(category.name).color(palette::TEXT))
            .child(
                Node::new("skills")
                    .text(format!("{} skills", category.skills))
                    .color(palette::DIM),
            );

        if show_examples {
            node = node.child(Node::new("examples").text(category.examples).color(palette::DIM));
        }
        node
    }
}

impl Default for CategoriesScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for CategoriesScene {
    fn name(&self) -> &str {
        "categories"
    }

    fn description(&self) -> &str {
        "Category picker with each skill group rising in and getting selected"
    }

    fn render(&self, ctx: &FrameContext, config: &SceneConfig) -> Node {
        let header = progress(ctx, config.start_delay, HEADER_SPRING);
        let header_opacity = interpolate(header, [0.0, 1.0], [0.0, 1.0], Extrapolate::EXTEND);

        let show_check = config.get_bool_or("show_check", true);
        let show_examples = config.get_bool_or("show_examples", false);

        let items = self.categories.iter().enumerate().map(|(index, category)| {
            let delay = self.item_delay(ctx.fps, config.start_delay, index);
            self.render_item(ctx, category, delay, show_check, show_examples)
        });

        Node::new("category-selection")
            .child(
                Node::new("prompt")
                    .text("What would you like to install?")
                    .color(palette::DIM)
                    .opacity(header_opacity),
            )
            .child(
                Node::new("everything")
                    .text(format!("> Everything ({} skills)", self.total_skills))
                    .color(palette::CYAN)
                    .opacity(header_opacity),
            )
            .child(Node::new("categories").children(items))
    }

    fn settle_frame(&self, fps: f64, config: &SceneConfig) -> f64 {
        let header = config.start_delay + settle(fps, HEADER_SPRING);
        let last = self.categories.len().saturating_sub(1);
        let last_delay = self.item_delay(fps, config.start_delay, last);
        let item = last_delay + settle(fps, ITEM_SPRING);
        let select = if config.get_bool_or("show_check", true) {
            last_delay + SELECT_DELAY_SECONDS * fps + settle(fps, SELECT_SPRING)
        } else {
            item
        };
        header.max(item).max(select)
    }
}
