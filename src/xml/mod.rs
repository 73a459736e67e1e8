//! XML tree parsing and writing.
//!
//! Responses are parsed into a generic [`Node`] tree; factories then look up
//! named children instead of walking reader events themselves.

mod writer;

pub use writer::{escape_xml, XmlBuilder};

use crate::error::{ResponseError, SellerCenterError};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// An XML element with its text, attributes and child elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    name: String,
    text: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Node {
    /// Create an element without text or children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the element text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Append a child element.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Add an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Element name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Element text, with character data sections merged in.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the element text is empty or whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Whether the element has neither text nor children.
    pub fn is_empty(&self) -> bool {
        self.is_blank() && self.children.is_empty()
    }

    /// Attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// All attributes in document order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// All child elements in document order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// First child element with the given name.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Whether a child element with the given name exists.
    pub fn has_child(&self, name: &str) -> bool {
        self.child(name).is_some()
    }

    /// All child elements with the given name.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Text of the first child with the given name.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(Node::text)
    }

    /// Serialize the element back to XML.
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        self.write_into(&mut out);
        out
    }

    fn write_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.name);
        for (key, value) in &self.attributes {
            out.push_str(&format!(" {}=\"{}\"", key, escape_xml(value)));
        }
        if self.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        out.push_str(&escape_xml(&self.text));
        for child in &self.children {
            child.write_into(out);
        }
        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Self, SellerCenterError> {
        let mut node = Node::new(String::from_utf8_lossy(start.name().as_ref()).to_string());
        for attribute in start.attributes() {
            let attribute = attribute.map_err(|e| parse_error(e.to_string()))?;
            let value = attribute
                .unescape_value()
                .map_err(|e| parse_error(e.to_string()))?;
            node.attributes.push((
                String::from_utf8_lossy(attribute.key.as_ref()).to_string(),
                value.to_string(),
            ));
        }
        Ok(node)
    }
}

/// Parse a document and return its root element.
pub fn parse(xml: &str) -> Result<Node, SellerCenterError> {
    let mut reader = Reader::from_str(xml);

    let mut stack: Vec<Node> = Vec::new();
    let mut root: Option<Node> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                stack.push(Node::from_start(&e)?);
            }
            Ok(Event::Empty(e)) => {
                let node = Node::from_start(&e)?;
                attach(&mut stack, &mut root, node)?;
            }
            Ok(Event::End(_)) => {
                let mut node = stack
                    .pop()
                    .ok_or_else(|| parse_error("unexpected closing tag"))?;
                // Leaf text is kept verbatim; around child elements it is layout.
                if !node.children.is_empty() {
                    node.text = node.text.trim().to_string();
                }
                attach(&mut stack, &mut root, node)?;
            }
            Ok(Event::Text(e)) => {
                let text = e.unescape().map_err(|e| parse_error(e.to_string()))?;
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&text);
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(&e));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(parse_error(e.to_string())),
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(parse_error(format!("unclosed element '{}'", open.name)));
    }

    root.ok_or_else(|| parse_error("document has no root element"))
}

fn attach(
    stack: &mut [Node],
    root: &mut Option<Node>,
    node: Node,
) -> Result<(), SellerCenterError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
        return Ok(());
    }
    if root.is_some() {
        return Err(parse_error("document has more than one root element"));
    }
    *root = Some(node);
    Ok(())
}

fn parse_error(message: impl Into<String>) -> SellerCenterError {
    SellerCenterError::Response(ResponseError::XmlParseError {
        message: message.into(),
    })
}
