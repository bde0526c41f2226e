use crate::foundation::error::{SettleError, SettleResult};
use crate::tree::node::{ComputedStyle, ElementNode, TransitionStyle};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

fn initial_time() -> String {
    "0s".to_owned()
}

/// Payload that distinguishes the kinds of nodes in a [`StyleNode`] tree.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    /// A styled element.
    Element {
        /// Tag name, informational only.
        #[serde(default)]
        tag: String,
        /// Effective `transition-duration`.
        #[serde(default = "initial_time")]
        transition_duration: String,
        /// Effective `transition-delay`.
        #[serde(default = "initial_time")]
        transition_delay: String,
    },
    /// A text node.
    Text {
        /// Character data.
        #[serde(default)]
        data: String,
    },
    /// A comment node.
    Comment {
        /// Comment body.
        #[serde(default)]
        data: String,
    },
}

/// Owned element tree with precomputed transition styles.
///
/// This is a snapshot of a document: handy for tests, fixtures, and hosts that resolve styles
/// up front. It serializes to JSON as `{"type": "element", ..., "children": [...]}`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StyleNode {
    /// Node payload.
    #[serde(flatten)]
    pub kind: NodeKind,
    /// Children in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<StyleNode>,
}

impl StyleNode {
    /// Element with the given tag and transition duration/delay.
    pub fn element(
        tag: impl Into<String>,
        transition_duration: impl Into<String>,
        transition_delay: impl Into<String>,
    ) -> Self {
        Self {
            kind: NodeKind::Element {
                tag: tag.into(),
                transition_duration: transition_duration.into(),
                transition_delay: transition_delay.into(),
            },
            children: Vec::new(),
        }
    }

    /// Text node.
    pub fn text(data: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Text { data: data.into() },
            children: Vec::new(),
        }
    }

    /// Comment node.
    pub fn comment(data: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Comment { data: data.into() },
            children: Vec::new(),
        }
    }

    /// Append `child` and return `self`.
    pub fn with_child(mut self, child: StyleNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append every node of `children` and return `self`.
    pub fn with_children(mut self, children: impl IntoIterator<Item = StyleNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Return `true` for element nodes.
    pub fn is_element(&self) -> bool {
        matches!(self.kind, NodeKind::Element { .. })
    }

    /// Parse a tree from a JSON string.
    pub fn from_json_str(s: &str) -> SettleResult<Self> {
        serde_json::from_str(s).map_err(|e| SettleError::serde(format!("parse style tree: {e}")))
    }

    /// Parse a tree from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> SettleResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| SettleError::serde(format!("parse style tree: {e}")))
    }

    /// Parse a tree from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SettleResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SettleError::validation(format!("open style tree JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize the tree to pretty-printed JSON.
    pub fn to_json_string(&self) -> SettleResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SettleError::serde(format!("serialize style tree: {e}")))
    }
}

impl ElementNode for StyleNode {
    type Children<'a> = std::slice::Iter<'a, StyleNode>;

    fn child_nodes(&self) -> Self::Children<'_> {
        self.children.iter()
    }
}

impl ComputedStyle for StyleNode {
    fn computed_transition(&self) -> Option<TransitionStyle> {
        match &self.kind {
            NodeKind::Element {
                transition_duration,
                transition_delay,
                ..
            } => Some(TransitionStyle::new(
                transition_duration.clone(),
                transition_delay.clone(),
            )),
            NodeKind::Text { .. } | NodeKind::Comment { .. } => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tree/style_node.rs"]
mod tests;
