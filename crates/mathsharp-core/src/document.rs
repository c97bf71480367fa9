//! Document type - the arena that owns every node of one worksheet.

use crate::{Attributes, Node, NodeId, NodeRef, ParseError, QName};

/// A parsed worksheet.
///
/// Nodes live in an arena indexed by [`NodeId`]. Parent links are kept in a
/// separate lookup table filled in by [`DocumentBuilder`]; nodes never point
/// back at their parents.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    parents: Vec<Option<NodeId>>,
    root: NodeId,
}

impl Document {
    /// The root element.
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef::new(self, self.root)
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.parents.get(id.0).copied().flatten()
    }
}

/// Incremental builder used by readers.
///
/// Elements are opened and closed in document order; text is appended to
/// the innermost open element and trimmed when that element closes.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    nodes: Vec<Node>,
    parents: Vec<Option<NodeId>>,
    open: Vec<NodeId>,
    root: Option<NodeId>,
}

impl DocumentBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an element as a child of the innermost open element.
    pub fn open(&mut self, name: QName, attrs: Attributes) -> Result<NodeId, ParseError> {
        let parent = self.open.last().copied();
        if parent.is_none() && self.root.is_some() {
            return Err(ParseError::Invalid(format!(
                "unexpected element <{}> after the root element",
                name.local
            )));
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(name).with_attrs(attrs));
        self.parents.push(parent);

        match parent {
            Some(parent) => self.nodes[parent.0].children.push(id),
            None => self.root = Some(id),
        }
        self.open.push(id);
        Ok(id)
    }

    /// Open and immediately close an element.
    pub fn leaf(&mut self, name: QName, attrs: Attributes) -> Result<NodeId, ParseError> {
        let id = self.open(name, attrs)?;
        self.close();
        Ok(id)
    }

    /// Append text to the innermost open element.
    ///
    /// Text outside the root element is ignored.
    pub fn text(&mut self, text: &str) {
        if let Some(&id) = self.open.last() {
            self.nodes[id.0].text.push_str(text);
        }
    }

    /// Close the innermost open element.
    pub fn close(&mut self) -> Option<NodeId> {
        let id = self.open.pop()?;
        let node = &mut self.nodes[id.0];
        let trimmed = node.text.trim();
        if trimmed.len() != node.text.len() {
            node.text = trimmed.to_string();
        }
        Some(id)
    }

    /// Finish building.
    pub fn finish(self) -> Result<Document, ParseError> {
        if let Some(&id) = self.open.last() {
            return Err(ParseError::Invalid(format!(
                "unclosed element <{}>",
                self.nodes[id.0].name.local
            )));
        }
        let root = self
            .root
            .ok_or_else(|| ParseError::Invalid("document has no root element".to_string()))?;
        Ok(Document {
            nodes: self.nodes,
            parents: self.parents,
            root,
        })
    }
}
