//! # Audit Tree
//!
//! Append-only XML tree built once during aggregation and then exposed as
//! an immutable `AuditDocument`. Attribute and child order is preserved
//! verbatim so that imported engine fragments render exactly as supplied.

use super::errors::ReportError;
use serde::{Deserialize, Serialize};

/// A node of the audit tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuditNode {
    /// Character data
    Text(String),
    /// A nested element
    Element(AuditElement),
}

impl From<AuditElement> for AuditNode {
    fn from(element: AuditElement) -> Self {
        AuditNode::Element(element)
    }
}

/// An XML element with ordered attributes and children.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditElement {
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<(String, String)>,
    #[serde(default)]
    pub children: Vec<AuditNode>,
}

impl AuditElement {
    /// An empty element.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// An element holding a single text child, e.g. `<Indication>TOTAL_PASSED</Indication>`.
    pub fn leaf(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name).with_text(text)
    }

    /// Append an attribute (order is kept).
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Append a child node.
    pub fn with_child(mut self, child: impl Into<AuditNode>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several child nodes.
    pub fn with_children(mut self, children: impl IntoIterator<Item = AuditNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Append a text node.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(AuditNode::Text(text.into()));
        self
    }

    /// Value of the first attribute called `name`.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Child elements, skipping text.
    pub fn child_elements(&self) -> impl Iterator<Item = &AuditElement> {
        self.children.iter().filter_map(|child| match child {
            AuditNode::Element(element) => Some(element),
            AuditNode::Text(_) => None,
        })
    }

    /// Concatenated text of the direct text children.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|child| match child {
                AuditNode::Text(text) => Some(text.as_str()),
                AuditNode::Element(_) => None,
            })
            .collect()
    }

    /// Check every element and attribute name in this subtree.
    pub fn validate_names(&self) -> Result<(), ReportError> {
        ensure_xml_name(&self.name)?;
        for (name, _) in &self.attributes {
            ensure_xml_name(name)?;
        }
        for child in self.child_elements() {
            child.validate_names()?;
        }
        Ok(())
    }
}

/// Whether `name` is usable as an element or attribute name.
pub fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == ':' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | ':' | '-' | '.'))
}

pub(crate) fn ensure_xml_name(name: &str) -> Result<(), ReportError> {
    if is_xml_name(name) {
        Ok(())
    } else {
        Err(ReportError::InvalidXmlName(name.to_string()))
    }
}

/// Serialization options carried by a frozen document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit the `<?xml ...?>` declaration
    pub xml_declaration: bool,
    /// Pretty-print with this many spaces per level
    pub indent: Option<usize>,
}

/// A finished audit document. Read-only once built.
///
/// The text form is produced when the document is frozen, so rendering
/// failures surface from aggregation and `render()` itself cannot fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuditDocument {
    root: AuditElement,
    rendered: String,
}

impl AuditDocument {
    pub(crate) fn new(root: AuditElement, options: RenderOptions) -> Result<Self, ReportError> {
        let rendered = super::render::render_document(&root, &options)?;
        Ok(Self { root, rendered })
    }

    /// The root element.
    pub fn root(&self) -> &AuditElement {
        &self.root
    }

    /// Rendered text. Identical trees always render identically.
    pub fn render(&self) -> String {
        self.rendered.clone()
    }
}
