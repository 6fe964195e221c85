//! Intermediate Document Format (IDF)
//!
//! The renderable tree produced when a mapped document is generated against
//! runtime content. Every source key has been resolved and every list has been
//! expanded; what remains is handed unchanged to the layout/render stage.

use folio_props::{BarcodeProps, LineProps, RectProps, SignatureProps, TextProps};
use serde::Serialize;

/// A resolved, renderable document node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Page {
        rows: Vec<Node>,
    },
    Row {
        #[serde(skip_serializing_if = "Option::is_none")]
        height: Option<f64>,
        cols: Vec<Node>,
    },
    Col {
        #[serde(skip_serializing_if = "Option::is_none")]
        size: Option<u8>,
        #[serde(skip_serializing_if = "Option::is_none")]
        content: Option<Box<Node>>,
    },
    /// The expansion of a list: one subtree per content item, in order.
    List {
        items: Vec<Node>,
    },
    Text {
        value: String,
        props: TextProps,
    },
    Image {
        source: String,
        props: RectProps,
    },
    Line {
        props: LineProps,
    },
    Signature {
        label: String,
        props: SignatureProps,
    },
    Barcode {
        code: String,
        props: BarcodeProps,
    },
    Matrixcode {
        code: String,
        props: RectProps,
    },
    Qrcode {
        code: String,
        props: RectProps,
    },
}

impl Node {
    /// Returns a string identifier for the node type.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Page { .. } => "page",
            Node::Row { .. } => "row",
            Node::Col { .. } => "col",
            Node::List { .. } => "list",
            Node::Text { .. } => "text",
            Node::Image { .. } => "image",
            Node::Line { .. } => "line",
            Node::Signature { .. } => "signature",
            Node::Barcode { .. } => "barcode",
            Node::Matrixcode { .. } => "matrixcode",
            Node::Qrcode { .. } => "qrcode",
        }
    }

    /// The direct children of a structural node; empty for leaves.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Page { rows } => rows.iter().collect(),
            Node::Row { cols, .. } => cols.iter().collect(),
            Node::Col { content, .. } => content.iter().map(|c| c.as_ref()).collect(),
            Node::List { items } => items.iter().collect(),
            _ => Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        !matches!(
            self,
            Node::Page { .. } | Node::Row { .. } | Node::Col { .. } | Node::List { .. }
        )
    }

    /// The resolved textual payload of a value-bearing leaf.
    pub fn value(&self) -> Option<&str> {
        match self {
            Node::Text { value, .. } => Some(value),
            Node::Image { source, .. } => Some(source),
            Node::Signature { label, .. } => Some(label),
            Node::Barcode { code, .. } | Node::Matrixcode { code, .. } | Node::Qrcode { code, .. } => {
                Some(code)
            }
            _ => None,
        }
    }

    /// Collects every leaf in document order.
    pub fn leaves(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Node>) {
        if self.is_leaf() {
            out.push(self);
            return;
        }
        for child in self.children() {
            child.collect_leaves(out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> Node {
        Node::Text { value: value.to_string(), props: TextProps::default() }
    }

    #[test]
    fn test_leaves_follow_document_order() {
        let page = Node::Page {
            rows: vec![Node::Row {
                height: None,
                cols: vec![
                    Node::Col { size: Some(6), content: Some(Box::new(text("a"))) },
                    Node::Col {
                        size: Some(6),
                        content: Some(Box::new(Node::List { items: vec![text("b"), text("c")] })),
                    },
                    Node::Col { size: None, content: None },
                ],
            }],
        };
        let values: Vec<_> = page.leaves().iter().filter_map(|n| n.value()).collect();
        assert_eq!(values, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_serializes_with_type_tag() {
        let json = serde_json::to_value(Node::Line { props: LineProps::default() }).unwrap();
        assert_eq!(json, serde_json::json!({"type": "line", "props": {}}));
    }
}
