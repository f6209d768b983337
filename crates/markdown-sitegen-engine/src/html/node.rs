use super::{Attributes, HtmlError};

/// A node in the HTML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl HtmlNode {
    /// Renders this node and everything below it.
    pub fn to_html(&self) -> Result<String, HtmlError> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<(), HtmlError> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.render_into(out),
            HtmlNode::Parent(parent) => parent.render_into(out),
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag(),
            HtmlNode::Parent(parent) => Some(parent.tag()),
        }
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}

/// A child of a [`ParentNode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    /// Rendered recursively, never re-escaped.
    Node(HtmlNode),
    /// Literal text, HTML-escaped on render.
    Text(String),
}

impl From<HtmlNode> for Child {
    fn from(node: HtmlNode) -> Self {
        Child::Node(node)
    }
}

impl From<LeafNode> for Child {
    fn from(leaf: LeafNode) -> Self {
        Child::Node(leaf.into())
    }
}

impl From<ParentNode> for Child {
    fn from(parent: ParentNode) -> Self {
        Child::Node(parent.into())
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Text(text.to_string())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Child::Text(text)
    }
}

/// A node with a value and no children.
///
/// Without a tag the value is emitted verbatim; with one it is wrapped in
/// `<tag>…</tag>`. Leaves built with [`LeafNode::void`] render as a lone
/// opening tag and carry no value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    tag: Option<String>,
    value: String,
    attributes: Attributes,
    void: bool,
}

impl LeafNode {
    pub fn new(tag: Option<&str>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.map(str::to_string),
            value: value.into(),
            attributes: Attributes::new(),
            void: false,
        }
    }

    /// An untagged leaf holding raw text.
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(None, value)
    }

    pub fn tagged(tag: &str, value: impl Into<String>) -> Self {
        Self::new(Some(tag), value)
    }

    /// A void element such as `<img>` that only carries attributes.
    pub fn void(tag: &str, attributes: Attributes) -> Self {
        Self {
            void: true,
            ..Self::new(Some(tag), String::new()).with_attributes(attributes)
        }
    }

    pub fn with_attributes(self, attributes: Attributes) -> Self {
        Self { attributes, ..self }
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn to_html(&self) -> Result<String, HtmlError> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<(), HtmlError> {
        match self.tag.as_deref() {
            Some(tag) if self.void => {
                out.push('<');
                out.push_str(tag);
                out.push_str(&self.attributes.to_html());
                out.push('>');
            }
            _ if self.value.is_empty() => {
                return Err(HtmlError::EmptyLeafValue {
                    tag: self.tag.clone(),
                });
            }
            None => out.push_str(&self.value),
            Some(tag) => {
                out.push('<');
                out.push_str(tag);
                out.push_str(&self.attributes.to_html());
                out.push('>');
                out.push_str(&self.value);
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
        Ok(())
    }
}

/// A tagged node with one or more children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    tag: String,
    children: Vec<Child>,
    attributes: Attributes,
}

impl ParentNode {
    /// Builds a parent node.
    ///
    /// # Errors
    /// - [`HtmlError::InvalidParentTag`] unless `tag` matches `[A-Za-z][A-Za-z0-9]*`
    /// - [`HtmlError::EmptyChildren`] if `children` is empty
    pub fn new(tag: &str, children: Vec<Child>) -> Result<Self, HtmlError> {
        if !is_valid_tag(tag) {
            return Err(HtmlError::InvalidParentTag {
                tag: tag.to_string(),
            });
        }
        if children.is_empty() {
            return Err(HtmlError::EmptyChildren {
                tag: tag.to_string(),
            });
        }
        Ok(Self {
            tag: tag.to_string(),
            children,
            attributes: Attributes::new(),
        })
    }

    pub fn with_attributes(self, attributes: Attributes) -> Self {
        Self { attributes, ..self }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn to_html(&self) -> Result<String, HtmlError> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<(), HtmlError> {
        out.push('<');
        out.push_str(&self.tag);
        out.push_str(&self.attributes.to_html());
        out.push('>');
        for child in &self.children {
            match child {
                Child::Node(node) => node.render_into(out)?,
                Child::Text(text) => {
                    out.push_str(&html_escape::encode_quoted_attribute(text))
                }
            }
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
        Ok(())
    }
}

fn is_valid_tag(tag: &str) -> bool {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}
