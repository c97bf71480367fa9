//! Node types for the worksheet tree.

use crate::{Attributes, Document};

/// Index of a node inside its [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// A namespace-qualified element name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QName {
    /// Namespace URI, if the element is bound to one.
    pub namespace: Option<String>,
    /// Local part of the name.
    pub local: String,
}

impl QName {
    /// Create a name bound to a namespace.
    pub fn new(namespace: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            local: local.into(),
        }
    }

    /// Create a name with no namespace.
    pub fn unbound(local: impl Into<String>) -> Self {
        Self {
            namespace: None,
            local: local.into(),
        }
    }

    /// Check namespace and local name at once.
    pub fn is(&self, namespace: &str, local: &str) -> bool {
        self.local == local && self.namespace.as_deref() == Some(namespace)
    }
}

impl std::fmt::Display for QName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{{{}}}{}", ns, self.local),
            None => write!(f, "{}", self.local),
        }
    }
}

/// An element in the worksheet tree.
#[derive(Debug, Clone)]
pub struct Node {
    /// Qualified element name.
    pub name: QName,
    /// Attributes in document order.
    pub attrs: Attributes,
    /// Child elements in document order.
    pub children: Vec<NodeId>,
    /// Text that appears directly inside the element, trimmed.
    pub text: String,
}

impl Node {
    /// Create a childless node.
    pub fn new(name: QName) -> Self {
        Self {
            name,
            attrs: Attributes::new(),
            children: Vec::new(),
            text: String::new(),
        }
    }

    /// Set the attributes.
    pub fn with_attrs(mut self, attrs: Attributes) -> Self {
        self.attrs = attrs;
        self
    }
}

/// A borrowed view of a node together with the document that owns it.
///
/// Views are `Copy`, so navigation methods take `self` by value and hand
/// back views that live as long as the document.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    doc: &'a Document,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(doc: &'a Document, id: NodeId) -> Self {
        Self { doc, id }
    }

    /// The underlying node data.
    pub fn node(self) -> &'a Node {
        self.doc.node(self.id)
    }

    /// Qualified name.
    pub fn name(self) -> &'a QName {
        &self.node().name
    }

    /// Local part of the name.
    pub fn local_name(self) -> &'a str {
        &self.node().name.local
    }

    /// Namespace URI.
    pub fn namespace(self) -> Option<&'a str> {
        self.node().name.namespace.as_deref()
    }

    /// Check namespace and local name at once.
    pub fn is(self, namespace: &str, local: &str) -> bool {
        self.name().is(namespace, local)
    }

    /// Get an attribute value.
    pub fn attr(self, key: &str) -> Option<&'a str> {
        self.node().attrs.get(key)
    }

    /// Direct text content.
    pub fn text(self) -> &'a str {
        &self.node().text
    }

    /// Number of child elements.
    pub fn child_count(self) -> usize {
        self.node().children.len()
    }

    /// Child element at `index`.
    pub fn child(self, index: usize) -> Option<NodeRef<'a>> {
        let doc = self.doc;
        self.node()
            .children
            .get(index)
            .map(|&id| NodeRef::new(doc, id))
    }

    /// Child elements in document order.
    pub fn children(self) -> impl Iterator<Item = NodeRef<'a>> {
        let doc = self.doc;
        self.node()
            .children
            .iter()
            .map(move |&id| NodeRef::new(doc, id))
    }

    /// The parent element, or `None` for the root.
    pub fn parent(self) -> Option<NodeRef<'a>> {
        let doc = self.doc;
        doc.parent_of(self.id).map(|id| NodeRef::new(doc, id))
    }

    /// All descendants in pre-order, excluding the node itself.
    pub fn descendants(self) -> Descendants<'a> {
        let mut stack: Vec<NodeId> = self.node().children.clone();
        stack.reverse();
        Descendants {
            doc: self.doc,
            stack,
        }
    }

    /// Compact structural description, e.g. `define(id, real, real)`.
    pub fn shape(self) -> String {
        let children: Vec<&str> = self.children().map(|c| c.local_name()).collect();
        if children.is_empty() {
            self.local_name().to_string()
        } else {
            format!("{}({})", self.local_name(), children.join(", "))
        }
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.doc, other.doc) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl std::fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("shape", &self.shape())
            .finish()
    }
}

/// Pre-order iterator over the descendants of a node.
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.doc.node(id).children.iter().rev().copied());
        Some(NodeRef::new(self.doc, id))
    }
}
