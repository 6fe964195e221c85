use super::parse_props;
use folio_idf::Node;
use folio_props::LineProps;
use folio_template_core::{MapperError, Scope, fields};
use serde_json::Value;

const COMPONENT: &str = "line";

/// A separator line. `source_key` and `value` are part of the leaf schema
/// but nothing is drawn from them, so neither is required.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Line {
    source_key: String,
    value: String,
    props: LineProps,
}

impl Line {
    pub fn new(document: &Value) -> Result<Self, MapperError> {
        let mut line = Line::default();
        for (field, value) in fields::as_map(COMPONENT, document)? {
            match field.as_str() {
                "source_key" => line.source_key = fields::string(COMPONENT, field, value)?,
                "value" => line.value = fields::string(COMPONENT, field, value)?,
                "props" => line.props = parse_props(value, LineProps::from_value)?,
                _ => return Err(MapperError::unknown_field(COMPONENT, field.as_str())),
            }
        }
        Ok(line)
    }

    pub fn source_key(&self) -> &str {
        &self.source_key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn props(&self) -> &LineProps {
        &self.props
    }

    pub fn generate(&self, _scope: &Scope<'_>) -> Result<Node, MapperError> {
        Ok(Node::Line { props: self.props.clone() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::content;
    use folio_props::LineStyle;
    use serde_json::json;

    #[test]
    fn test_empty_line() {
        let line = Line::new(&json!({})).unwrap();
        assert_eq!(line.props(), &LineProps::default());
    }

    #[test]
    fn test_line_accepts_leaf_fields() {
        let line = Line::new(&json!({"source_key": "sep"})).unwrap();
        assert_eq!(line.source_key(), "sep");
        assert_eq!(line.value(), "");

        let line = Line::new(&json!({"value": "x"})).unwrap();
        assert_eq!(line.value(), "x");

        let err = Line::new(&json!({"bogus": 1})).unwrap_err();
        assert!(err.is_unknown_field());
        assert!(err.to_string().contains("bogus"));

        let err = Line::new(&json!({"value": 3})).unwrap_err();
        assert!(err.is_field_type());
    }

    #[test]
    fn test_bound_line_does_not_read_content() {
        let line = Line::new(&json!({"source_key": "sep"})).unwrap();
        let node = line.generate(&Scope::root(&content(json!({})))).unwrap();
        assert_eq!(node, Node::Line { props: LineProps::default() });
    }

    #[test]
    fn test_line_generates_its_props() {
        let line = Line::new(&json!({"props": {"style": "dashed"}})).unwrap();
        let node = line.generate(&Scope::root(&content(json!({})))).unwrap();
        match node {
            Node::Line { props } => assert_eq!(props.style, Some(LineStyle::Dashed)),
            other => panic!("expected a line, got {:?}", other),
        }
    }
}
