//! SVG element tree and text serialization
//!
//! A deliberately small surface: elements carry a tag name, ordered
//! attributes, and children (elements or text). The layout engine only ever
//! appends structured elements; turning the tree into markup happens here
//! and nowhere else.

use std::fmt::Write as _;

/// One node in an element's child list
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Nested element
    Element(Element),
    /// Character data, escaped on serialization
    Text(String),
}

/// An SVG element: tag name, ordered attributes, children
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Create an element with the given tag name
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style attribute setter
    pub fn attr(mut self, name: &str, value: impl ToString) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Append or replace an attribute
    pub fn set_attr(&mut self, name: &str, value: impl ToString) {
        let rendered = value.to_string();
        if let Some(existing) = self
            .attributes
            .iter_mut()
            .find(|(attribute, _)| attribute == name)
        {
            existing.1 = rendered;
        } else {
            self.attributes.push((name.to_string(), rendered));
        }
    }

    /// Append a child element
    pub fn append(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    /// Builder-style child append
    pub fn child(mut self, element: Element) -> Self {
        self.append(element);
        self
    }

    /// Append character data
    pub fn append_text(&mut self, text: &str) {
        self.children.push(Node::Text(text.to_string()));
    }

    /// Tag name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute value by name, if set
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(attribute, _)| attribute == name)
            .map(|(_, value)| value.as_str())
    }

    /// Child nodes in append order
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Serialize the tree as indented SVG markup
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        self.write_into(&mut out, 0);
        out
    }

    fn write_into(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        let _ = write!(out, "{indent}<{}", self.name);
        for (name, value) in &self.attributes {
            let _ = write!(out, " {name}=\"{}\"", escape_attribute(value));
        }
        if self.children.is_empty() {
            out.push_str("/>\n");
            return;
        }
        // Text-only elements stay on one line so glyph content has no
        // whitespace mixed in
        if let [Node::Text(text)] = self.children.as_slice() {
            let _ = writeln!(out, ">{}</{}>", escape_text(text), self.name);
            return;
        }
        out.push_str(">\n");
        for node in &self.children {
            match node {
                Node::Element(element) => element.write_into(out, depth + 1),
                Node::Text(text) => {
                    let _ = writeln!(out, "{indent}  {}", escape_text(text));
                }
            }
        }
        let _ = writeln!(out, "{indent}</{}>", self.name);
    }
}

/// Format a coordinate the way the markup expects: integral values without
/// a trailing `.0`, everything else in full
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attribute(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
