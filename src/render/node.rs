use serde::{Deserialize, Serialize};

use super::color::Color;

/// Visual properties of one node for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub opacity: f64,
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            scale: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
            color: None,
            background: None,
        }
    }
}

/// A node of the style tree handed to the host renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub role: String,
    pub style: Style,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    pub fn new<S: Into<String>>(role: S) -> Self {
        Self {
            role: role.into(),
            style: Style::default(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.style.opacity = opacity;
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.style.scale = scale;
        self
    }

    pub fn translate(mut self, x: f64, y: f64) -> Self {
        self.style.translate_x = x;
        self.style.translate_y = y;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.style.color = Some(color);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.style.background = Some(color);
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn children<I: IntoIterator<Item = Node>>(mut self, children: I) -> Self {
        self.children.extend(children);
        self
    }

    /// Depth-first search for the first node with the given role
    pub fn find(&self, role: &str) -> Option<&Node> {
        if self.role == role {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(role))
    }

    /// All nodes with the given role, depth-first
    pub fn find_all<'a>(&'a self, role: &str) -> Vec<&'a Node> {
        let mut found = Vec::new();
        self.collect(role, &mut found);
        found
    }

    fn collect<'a>(&'a self, role: &str, found: &mut Vec<&'a Node>) {
        if self.role == role {
            found.push(self);
        }
        for child in &self.children {
            child.collect(role, found);
        }
    }

    /// Total number of nodes in this subtree
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::color::palette;

    fn sample() -> Node {
        Node::new("list")
            .child(Node::new("item").text("a"))
            .child(Node::new("group").child(Node::new("item").text("b").color(palette::DIM)))
    }

    #[test]
    fn test_find() {
        let tree = sample();
        assert_eq!(tree.find("item").and_then(|n| n.text.as_deref()), Some("a"));
        assert!(tree.find("missing").is_none());
        assert_eq!(tree.find_all("item").len(), 2);
        assert_eq!(tree.node_count(), 4);
    }

    #[test]
    fn test_json_omits_empty_fields() {
        let json = serde_json::to_value(Node::new("spacer")).unwrap();
        assert!(json.get("text").is_none());
        assert!(json.get("children").is_none());
        assert!(json["style"].get("color").is_none());
        assert_eq!(json["style"]["opacity"], 1.0);
    }
}
