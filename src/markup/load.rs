//! SVG text to [`Element`] tree.

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};
use thiserror::Error;

use super::element::{Element, Node};
use super::escape::unescape;

#[derive(Debug, Error)]
pub enum MarkupError {
    #[error("XML parse error at position {position}: {source}")]
    Xml {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    #[error("invalid attribute on <{element}>: {message}")]
    Attribute { element: String, message: String },

    #[error("unexpected closing tag </{0}>")]
    UnexpectedEnd(String),

    #[error("unclosed element <{0}>")]
    Unclosed(String),

    #[error("no root element found")]
    NoRoot,
}

/// Parse markup and return its first top-level element.
///
/// XML declarations, doctypes and processing instructions are dropped;
/// anything after the first root element is ignored.
pub fn load(text: &str) -> Result<Element, MarkupError> {
    let mut reader = Reader::from_str(text);
    let mut stack: Vec<Element> = Vec::new();

    loop {
        let event = reader.read_event().map_err(|source| MarkupError::Xml {
            position: reader.error_position(),
            source,
        })?;

        match event {
            Event::Start(start) => stack.push(start_element(&start)?),
            Event::Empty(start) => {
                let elem = start_element(&start)?;
                if let Some(root) = attach(&mut stack, elem) {
                    return Ok(root);
                }
            }
            Event::End(end) => {
                let name = String::from_utf8_lossy(end.name().as_ref()).into_owned();
                let elem = stack.pop().ok_or(MarkupError::UnexpectedEnd(name))?;
                if let Some(root) = attach(&mut stack, elem) {
                    return Ok(root);
                }
            }
            Event::Text(text) => push_raw(&mut stack, &String::from_utf8_lossy(&text)),
            Event::GeneralRef(entity) => {
                push_raw(&mut stack, &format!("&{};", String::from_utf8_lossy(&entity)));
            }
            Event::CData(data) => {
                if let Some(parent) = stack.last_mut() {
                    let data = String::from_utf8_lossy(&data).into_owned();
                    parent.children.push(Node::CData(data));
                }
            }
            Event::Comment(comment) => {
                if let Some(parent) = stack.last_mut() {
                    let comment = String::from_utf8_lossy(&comment).into_owned();
                    parent.children.push(Node::Comment(comment));
                }
            }
            Event::Eof => {
                return Err(match stack.pop() {
                    Some(open) => MarkupError::Unclosed(open.name),
                    None => MarkupError::NoRoot,
                });
            }
            // Declarations, doctypes and processing instructions
            _ => {}
        }
    }
}

fn start_element(start: &BytesStart<'_>) -> Result<Element, MarkupError> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut elem = Element::new(name);

    for attr in start.attributes() {
        let attr = attr.map_err(|e| MarkupError::Attribute {
            element: elem.name.clone(),
            message: e.to_string(),
        })?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let raw = String::from_utf8_lossy(&attr.value);
        elem.attrs.push((key, unescape(&raw).into_owned()));
    }

    Ok(elem)
}

/// Attach a finished element to its parent, or hand it back as the root.
fn attach(stack: &mut [Element], elem: Element) -> Option<Element> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(Node::Element(elem));
            None
        }
        None => Some(elem),
    }
}

/// Text outside the root element (whitespace between prolog parts) is dropped.
fn push_raw(stack: &mut [Element], raw: &str) {
    let Some(parent) = stack.last_mut() else {
        return;
    };
    match parent.children.last_mut() {
        Some(Node::Text(last)) => last.push_str(raw),
        _ => parent.children.push(Node::Text(raw.to_owned())),
    }
}
