use crate::factory::AbstractFactory;
use crate::mapper::ComponentMapper;
use folio_idf::Node;
use folio_template_core::{MapperError, Scope, fields};
use itertools::Itertools;
use serde_json::{Map, Value};

const COMPONENT: &str = "row";

/// An ordered sequence of columns, optionally with a fixed height.
#[derive(Debug, Clone, Default)]
pub struct Row {
    source_key: String,
    height: Option<f64>,
    cols: Vec<ComponentMapper>,
}

impl Row {
    pub fn new(document: &Value, source_key: &str, factory: &dyn AbstractFactory) -> Result<Self, MapperError> {
        let map = fields::as_map(COMPONENT, document)?;
        let mut row = Row {
            source_key: source_key.to_string(),
            ..Default::default()
        };
        let cols = row.add_fields(map)?;
        row.add_cols(cols, factory)?;
        log::debug!("Mapped row with {} cols", row.cols.len());
        Ok(row)
    }

    fn add_fields<'v>(&mut self, map: &'v Map<String, Value>) -> Result<&'v [Value], MapperError> {
        let mut cols = None;
        for (field, value) in map {
            match field.as_str() {
                "source_key" => self.source_key = fields::string(COMPONENT, field, value)?,
                "height" => self.height = Some(fields::positive(COMPONENT, field, value)?),
                "cols" => cols = Some(fields::array(COMPONENT, field, value)?),
                _ => return Err(MapperError::unknown_field(COMPONENT, field.as_str())),
            }
        }
        cols.ok_or_else(|| MapperError::validation(COMPONENT, "no cols passed for row. Add the 'cols' list"))
    }

    fn add_cols(&mut self, cols: &[Value], factory: &dyn AbstractFactory) -> Result<(), MapperError> {
        self.cols = cols
            .iter()
            .enumerate()
            .map(|(i, col)| factory.new_col(col).map_err(|e| e.at("cols", i)))
            .try_collect()?;
        Ok(())
    }

    pub fn source_key(&self) -> &str {
        &self.source_key
    }

    pub fn height(&self) -> Option<f64> {
        self.height
    }

    pub fn cols(&self) -> &[ComponentMapper] {
        &self.cols
    }

    pub fn generate(&self, scope: &Scope<'_>) -> Result<Node, MapperError> {
        let scope = scope.bind(COMPONENT, &self.source_key)?;
        let cols: Vec<Node> = self
            .cols
            .iter()
            .enumerate()
            .map(|(i, col)| col.generate_in(&scope).map_err(|e| e.at("cols", i)))
            .try_collect()?;
        Ok(Node::Row {
            height: self.height,
            cols,
        })
    }
}
