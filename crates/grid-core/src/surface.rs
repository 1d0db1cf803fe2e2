// File: crates/grid-core/src/surface.rs
// Summary: Minimal DOM-like display surface: an element tree with class lookup and HTML output.

use crate::error::GridError;
use crate::key::Key;

/// One node of the display surface. `html` is the node's own inner markup
/// (rendered before any children); `key` is only set by keyed reconciliation.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub tag: String,
    pub class: Option<String>,
    pub key: Option<Key>,
    pub html: String,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            class: None,
            key: None,
            html: String::new(),
            children: Vec::new(),
        }
    }

    pub fn with_class(tag: impl Into<String>, class: impl Into<String>) -> Self {
        let mut el = Self::new(tag);
        el.class = Some(class.into());
        el
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class.as_deref() == Some(class)
    }

    /// Depth-first search for the first element carrying `class`.
    fn find_class_mut(&mut self, class: &str) -> Option<&mut Element> {
        if self.has_class(class) {
            return Some(self);
        }
        for child in &mut self.children {
            if let Some(found) = child.find_class_mut(class) {
                return Some(found);
            }
        }
        None
    }

    /// Serialize this element and its subtree to an HTML string.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        if let Some(class) = &self.class {
            out.push_str(" class=\"");
            out.push_str(class);
            out.push('"');
        }
        out.push('>');
        out.push_str(&self.html);
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

/// The display surface a chart group renders into. The host owns it; charts
/// locate their anchor node by class selector and manage only their own
/// section containers beneath it.
pub struct Surface {
    pub root: Element,
}

impl Surface {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// Convenience: a `<body>` root holding one `<div>` per anchor class.
    pub fn with_anchors(classes: &[&str]) -> Self {
        let mut root = Element::new("body");
        for class in classes {
            root.children.push(Element::with_class("div", *class));
        }
        Self { root }
    }

    /// Locate a node by a `.class`-style selector (leading dot optional).
    pub fn select_class(&mut self, selector: &str) -> Result<&mut Element, GridError> {
        let class = normalize_selector(selector)?;
        self.root
            .find_class_mut(class)
            .ok_or_else(|| GridError::AnchorNotFound {
                selector: selector.to_owned(),
            })
    }

    pub fn to_html(&self) -> String {
        self.root.to_html()
    }
}

fn normalize_selector(selector: &str) -> Result<&str, GridError> {
    let class = selector.strip_prefix('.').unwrap_or(selector);
    if class.is_empty() || class.contains(|c| c == '.' || c == ' ' || c == '#') {
        return Err(GridError::InvalidSelector {
            selector: selector.to_owned(),
        });
    }
    Ok(class)
}
