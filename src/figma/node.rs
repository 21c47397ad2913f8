//! Figma document nodes.

use serde::Deserialize;

/// Node type as reported by the REST API `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Document,
    Canvas,
    Frame,
    Group,
    Section,
    Component,
    ComponentSet,
    Instance,
    Vector,
    Text,
    #[serde(other)]
    Other,
}

/// A node of the document tree. Only the fields needed to locate pages and
/// components are kept; everything else in the response is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Node {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Node {
    /// Pre-order walk over this node and its descendants.
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Node)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}

#[cfg(test)]
impl Node {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_node() {
        let json = r#"{
            "id": "0:1",
            "name": "Icons",
            "type": "CANVAS",
            "backgroundColor": { "r": 1, "g": 1, "b": 1, "a": 1 },
            "children": [
                { "id": "1:2", "name": "star", "type": "COMPONENT", "children": [] },
                { "id": "1:3", "name": "set", "type": "COMPONENT_SET" },
                { "id": "1:4", "name": "shape", "type": "BOOLEAN_OPERATION" }
            ]
        }"#;
        let node: Node = serde_json::from_str(json).unwrap();
        assert_eq!(node.kind, NodeKind::Canvas);
        assert_eq!(node.children.len(), 3);
        assert_eq!(node.children[0].kind, NodeKind::Component);
        assert_eq!(node.children[1].kind, NodeKind::ComponentSet);
        assert!(node.children[1].children.is_empty());
        assert_eq!(node.children[2].kind, NodeKind::Other);
    }

    #[test]
    fn test_walk_pre_order() {
        let tree = Node::new("0", "root", NodeKind::Document).with_children(vec![
            Node::new("1", "a", NodeKind::Canvas)
                .with_children(vec![Node::new("2", "b", NodeKind::Frame)]),
            Node::new("3", "c", NodeKind::Canvas),
        ]);
        let mut ids = Vec::new();
        tree.walk(&mut |node| ids.push(node.id.as_str()));
        assert_eq!(ids, ["0", "1", "2", "3"]);
    }
}
