use std::collections::HashMap;

use crate::scenes::{AgentsScene, CallToActionScene, CategoriesScene, LogoScene, Scene, TerminalScene};

/// Registry for managing available scenes
///
/// Scenes are registered by name and instantiated on demand when a timeline
/// is built.
pub struct SceneRegistry {
    scenes: HashMap<String, Box<dyn Fn() -> Box<dyn Scene> + Send + Sync>>,
}

impl SceneRegistry {
    /// Create a new scene registry with all built-in scenes
    pub fn new() -> Self {
        let mut registry = Self {
            scenes: HashMap::new(),
        };

        registry.register_builtin_scenes();
        registry
    }

    fn register_builtin_scenes(&mut self) {
        self.register("terminal", || Box::new(TerminalScene::new()));
        self.register("logo", || Box::new(LogoScene::new()));
        self.register("agents", || Box::new(AgentsScene::new()));
        self.register("categories", || Box::new(CategoriesScene::new()));
        self.register("cta", || Box::new(CallToActionScene::new()));
    }

    /// Register a custom scene
    ///
    /// # Arguments
    ///
    /// * `name` - Unique name for the scene
    /// * `factory` - Function that creates new instances of the scene
    pub fn register<N, F>(&mut self, name: N, factory: F)
    where
        N: Into<String>,
        F: Fn() -> Box<dyn Scene> + Send + Sync + 'static,
    {
        self.scenes.insert(name.into(), Box::new(factory));
    }

    /// Get a new instance of a scene by name
    pub fn get_scene(&self, name: &str) -> Option<Box<dyn Scene>> {
        self.scenes.get(name).map(|factory| factory())
    }

    /// Get all available scene names, sorted
    pub fn available_scenes(&self) -> Vec<String> {
        let mut names: Vec<String> = self.scenes.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn has_scene(&self, name: &str) -> bool {
        self.scenes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}

impl Default for SceneRegistry {
    fn default() -> Self {
        Self::new()
    }
}
