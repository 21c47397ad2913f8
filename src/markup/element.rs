//! In-memory markup tree.

use super::escape::escape_attr;

/// Attribute access the template rewriter needs from a DOM.
///
/// Implemented by [`Element`]; tests may drive the rewriter with any other
/// tree that can visit its elements mutably.
pub trait MarkupElement {
    fn attr(&self, name: &str) -> Option<&str>;

    fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Set an attribute, replacing an existing value in place.
    fn set_attr(&mut self, name: &str, value: String);

    /// Remove an attribute, returning its previous value.
    fn remove_attr(&mut self, name: &str) -> Option<String>;

    /// Visit this element and every descendant element in document order.
    fn for_each_mut(&mut self, f: &mut dyn FnMut(&mut Self));
}

/// Child of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Text kept escaped exactly as read.
    Text(String),
    Comment(String),
    CData(String),
}

/// An element with ordered attributes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Serialize as outer markup.
    ///
    /// Every element gets an explicit end tag, matching what a browser's
    /// `outerHTML` produces for SVG content embedded in HTML.
    pub fn to_markup(&self) -> String {
        let mut out = String::with_capacity(256);
        self.write_markup(&mut out);
        out
    }

    fn write_markup(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.name);
        for (key, value) in &self.attrs {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
        out.push('>');

        for child in &self.children {
            match child {
                Node::Element(elem) => elem.write_markup(out),
                Node::Text(text) => out.push_str(text),
                Node::Comment(text) => {
                    out.push_str("<!--");
                    out.push_str(text);
                    out.push_str("-->");
                }
                Node::CData(text) => {
                    out.push_str("<![CDATA[");
                    out.push_str(text);
                    out.push_str("]]>");
                }
            }
        }

        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }
}

#[cfg(test)]
impl Element {
    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value.into());
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Child elements, skipping text and comments.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(elem) => Some(elem),
            _ => None,
        })
    }

    /// First element in document order (self included) with the given name.
    pub fn find(&self, name: &str) -> Option<&Element> {
        if self.name == name {
            return Some(self);
        }
        self.elements().find_map(|child| child.find(name))
    }
}

impl MarkupElement for Element {
    fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn set_attr(&mut self, name: &str, value: String) {
        match self.attrs.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attrs.push((name.to_owned(), value)),
        }
    }

    fn remove_attr(&mut self, name: &str) -> Option<String> {
        let index = self.attrs.iter().position(|(key, _)| key == name)?;
        Some(self.attrs.remove(index).1)
    }

    fn for_each_mut(&mut self, f: &mut dyn FnMut(&mut Self)) {
        f(self);
        for child in &mut self.children {
            if let Node::Element(elem) = child {
                elem.for_each_mut(f);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_attr_replaces_in_place() {
        let mut elem = Element::new("path")
            .with_attr("d", "M0 0")
            .with_attr("fill", "#000");
        elem.set_attr("d", "M1 1".into());
        elem.set_attr("stroke", "red".into());
        assert_eq!(
            elem.attrs,
            vec![
                ("d".to_string(), "M1 1".to_string()),
                ("fill".to_string(), "#000".to_string()),
                ("stroke".to_string(), "red".to_string()),
            ]
        );
    }

    #[test]
    fn test_remove_attr() {
        let mut elem = Element::new("rect").with_attr("width", "24");
        assert_eq!(elem.remove_attr("width").as_deref(), Some("24"));
        assert_eq!(elem.remove_attr("width"), None);
        assert!(!elem.has_attr("width"));
    }

    #[test]
    fn test_for_each_mut_visits_pre_order() {
        let mut root = Element::new("svg")
            .with_child(Element::new("g").with_child(Element::new("path")))
            .with_child(Element::new("rect"));
        let mut names = Vec::new();
        root.for_each_mut(&mut |elem| names.push(elem.name.clone()));
        assert_eq!(names, ["svg", "g", "path", "rect"]);
    }

    #[test]
    fn test_to_markup_closes_every_element() {
        let mut root = Element::new("svg")
            .with_attr("viewBox", "0 0 24 24")
            .with_child(Element::new("path").with_attr("[attr.fill]", "color('a', '#000')"));
        root.children.push(Node::Comment(" icon ".into()));
        assert_eq!(
            root.to_markup(),
            r#"<svg viewBox="0 0 24 24"><path [attr.fill]="color('a', '#000')"></path><!-- icon --></svg>"#
        );
    }

    #[test]
    fn test_to_markup_escapes_attrs_and_text() {
        let mut root = Element::new("text").with_attr("data-label", r#"a "b" & c"#);
        root.children.push(Node::Text("x &lt; y".into()));
        assert_eq!(
            root.to_markup(),
            r#"<text data-label="a &quot;b&quot; &amp; c">x &lt; y</text>"#
        );
    }

    #[test]
    fn test_find() {
        let root = Element::new("svg").with_child(
            Element::new("g").with_child(Element::new("path").with_attr("id", "p")),
        );
        assert_eq!(root.find("path").and_then(|p| p.attr("id")), Some("p"));
        assert!(root.find("circle").is_none());
    }
}
