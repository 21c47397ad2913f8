//! Loaded Figma file.

use serde::Deserialize;

use super::node::{Node, NodeKind};

/// A Figma file: its key and node tree.
#[derive(Debug, Clone)]
pub struct Document {
    /// File key used for follow-up API calls (image exports).
    pub key: String,
    pub name: String,
    pub root: Node,
}

/// `GET /v1/files/:key` response body.
#[derive(Debug, Deserialize)]
pub(super) struct FileResponse {
    #[serde(default)]
    pub name: String,
    pub document: Node,
}

impl Document {
    pub fn new(key: impl Into<String>, name: impl Into<String>, root: Node) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            root,
        }
    }

    pub(super) fn from_response(key: &str, response: FileResponse) -> Self {
        Self::new(key, response.name, response.document)
    }

    /// All nodes of `kind` under `roots` (roots included), in document order.
    pub fn extract<'a>(roots: &[&'a Node], kind: NodeKind) -> Vec<&'a Node> {
        let mut found = Vec::new();
        for root in roots.iter().copied() {
            root.walk(&mut |node| {
                if node.kind == kind {
                    found.push(node);
                }
            });
        }
        found
    }

    /// Page (canvas) with the given name.
    pub fn page(&self, name: &str) -> Option<&Node> {
        Self::extract(&[&self.root], NodeKind::Canvas)
            .into_iter()
            .find(|page| page.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        let root = Node::new("0:0", "Document", NodeKind::Document).with_children(vec![
            Node::new("0:1", "Icons", NodeKind::Canvas).with_children(vec![
                Node::new("1:1", "star", NodeKind::Component),
                Node::new("1:2", "Group", NodeKind::Frame).with_children(vec![
                    Node::new("1:3", "heart", NodeKind::Component),
                    Node::new("1:4", "star", NodeKind::Instance),
                ]),
            ]),
            Node::new("0:2", "Archive", NodeKind::Canvas)
                .with_children(vec![Node::new("2:1", "old", NodeKind::Component)]),
        ]);
        Document::new("abc", "Design", root)
    }

    #[test]
    fn test_extract_canvases() {
        let doc = sample();
        let pages = Document::extract(&[&doc.root], NodeKind::Canvas);
        let names: Vec<_> = pages.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Icons", "Archive"]);
    }

    #[test]
    fn test_extract_components_under_page() {
        let doc = sample();
        let page = doc.page("Icons").unwrap();
        let components = Document::extract(&[page], NodeKind::Component);
        let ids: Vec<_> = components.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["1:1", "1:3"]);
    }

    #[test]
    fn test_extract_includes_roots() {
        let node = Node::new("1:1", "star", NodeKind::Component);
        assert_eq!(Document::extract(&[&node], NodeKind::Component).len(), 1);
    }

    #[test]
    fn test_page_missing() {
        assert!(sample().page("Colors").is_none());
    }

    #[test]
    fn test_from_response() {
        let json = r#"{
            "name": "Design",
            "lastModified": "2024-01-01T00:00:00Z",
            "document": { "id": "0:0", "name": "Document", "type": "DOCUMENT", "children": [] },
            "components": {}
        }"#;
        let response: FileResponse = serde_json::from_str(json).unwrap();
        let doc = Document::from_response("key", response);
        assert_eq!(doc.key, "key");
        assert_eq!(doc.name, "Design");
        assert_eq!(doc.root.kind, NodeKind::Document);
    }
}
