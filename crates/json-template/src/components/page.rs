use crate::factory::AbstractFactory;
use crate::mapper::ComponentMapper;
use folio_idf::Node;
use folio_template_core::{MapperError, Scope, fields};
use itertools::Itertools;
use serde_json::{Map, Value};

const COMPONENT: &str = "page";

/// The root of a document: an ordered sequence of rows.
#[derive(Debug, Clone, Default)]
pub struct Page {
    source_key: String,
    rows: Vec<ComponentMapper>,
}

impl Page {
    /// Maps a page fragment. `source_key` is the default binding; a
    /// `source_key` field in the fragment takes precedence.
    pub fn new(document: &Value, source_key: &str, factory: &dyn AbstractFactory) -> Result<Self, MapperError> {
        let map = fields::as_map(COMPONENT, document)?;
        let mut page = Page {
            source_key: source_key.to_string(),
            rows: Vec::new(),
        };
        let rows = page.add_fields(map)?;
        page.add_rows(rows, factory)?;
        log::debug!("Mapped page with {} rows", page.rows.len());
        Ok(page)
    }

    /// Sets the page's own fields and returns the row fragments still to map.
    fn add_fields<'v>(&mut self, map: &'v Map<String, Value>) -> Result<&'v [Value], MapperError> {
        let mut rows = None;
        for (field, value) in map {
            match field.as_str() {
                "source_key" => self.source_key = fields::string(COMPONENT, field, value)?,
                "rows" => rows = Some(fields::array(COMPONENT, field, value)?),
                _ => return Err(MapperError::unknown_field(COMPONENT, field.as_str())),
            }
        }
        rows.ok_or_else(|| MapperError::validation(COMPONENT, "no rows passed for page. Add the 'rows' list"))
    }

    fn add_rows(&mut self, rows: &[Value], factory: &dyn AbstractFactory) -> Result<(), MapperError> {
        self.rows = rows
            .iter()
            .enumerate()
            .map(|(i, row)| factory.new_row(row, "").map_err(|e| e.at("rows", i)))
            .try_collect()?;
        Ok(())
    }

    pub fn source_key(&self) -> &str {
        &self.source_key
    }

    pub fn rows(&self) -> &[ComponentMapper] {
        &self.rows
    }

    pub fn generate(&self, scope: &Scope<'_>) -> Result<Node, MapperError> {
        let scope = scope.bind(COMPONENT, &self.source_key)?;
        let rows: Vec<Node> = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| row.generate_in(&scope).map_err(|e| e.at("rows", i)))
            .try_collect()?;
        Ok(Node::Page { rows })
    }
}
