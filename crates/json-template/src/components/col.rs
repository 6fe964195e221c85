use super::{component_entry, map_component};
use crate::factory::AbstractFactory;
use crate::mapper::ComponentMapper;
use folio_idf::Node;
use folio_template_core::{MapperError, Scope, fields};
use serde_json::{Map, Value};

const COMPONENT: &str = "col";

/// A grid cell holding at most one component.
#[derive(Debug, Clone, Default)]
pub struct Col {
    size: Option<u8>,
    component: Option<Box<ComponentMapper>>,
}

impl Col {
    pub fn new(document: &Value, factory: &dyn AbstractFactory) -> Result<Self, MapperError> {
        let map = fields::as_map(COMPONENT, document)?;
        let mut col = Col::default();
        if let Some(entries) = col.add_fields(map)? {
            col.add_component(entries, factory)
                .map_err(|e| e.at_field("component"))?;
        }
        Ok(col)
    }

    fn add_fields<'v>(&mut self, map: &'v Map<String, Value>) -> Result<Option<&'v Map<String, Value>>, MapperError> {
        let mut component = None;
        for (field, value) in map {
            match field.as_str() {
                "size" => self.size = Some(fields::integer_in(COMPONENT, field, value, 1, 12)? as u8),
                "component" => component = Some(fields::map(COMPONENT, field, value)?),
                _ => return Err(MapperError::unknown_field(COMPONENT, field.as_str())),
            }
        }
        Ok(component)
    }

    fn add_component(&mut self, entries: &Map<String, Value>, factory: &dyn AbstractFactory) -> Result<(), MapperError> {
        if let Some((name, fragment)) = component_entry(COMPONENT, "component", entries)? {
            self.component = Some(Box::new(map_component(name, fragment, factory)?));
        }
        Ok(())
    }

    /// Grid width, from 1 to 12.
    pub fn size(&self) -> Option<u8> {
        self.size
    }

    pub fn component(&self) -> Option<&ComponentMapper> {
        self.component.as_deref()
    }

    pub fn generate(&self, scope: &Scope<'_>) -> Result<Node, MapperError> {
        let content = match &self.component {
            Some(child) => {
                let node = child
                    .generate_in(scope)
                    .map_err(|e| e.at_field(child.kind()).at_field("component"))?;
                Some(Box::new(node))
            }
            None => None,
        };
        Ok(Node::Col {
            size: self.size,
            content,
        })
    }
}
