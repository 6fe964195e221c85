//! Lists: a subtree repeated once per runtime content item.
//!
//! A list is mapped without knowing how many items it will have. It keeps the
//! key of the item sequence and a [`GenerateComponent`] callback; expansion
//! happens in [`List::generate`] when content is supplied.

use super::{component_entry, map_component};
use crate::factory::AbstractFactory;
use crate::mapper::ComponentMapper;
use folio_idf::Node;
use folio_template_core::{GenerateComponent, MapperError, Scope, fields, generator};
use itertools::Itertools;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

const COMPONENT: &str = "list";

#[derive(Clone)]
pub struct List {
    source_key: String,
    generate: GenerateComponent,
    template: Option<Arc<ComponentMapper>>,
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("source_key", &self.source_key)
            .field("template", &self.template)
            .finish_non_exhaustive()
    }
}

impl List {
    /// Maps a list fragment. The only document field is `source_key`, which
    /// takes precedence over the argument; `generate` is invoked once per item.
    pub fn new(document: &Value, source_key: &str, generate: GenerateComponent) -> Result<Self, MapperError> {
        let mut list = List {
            source_key: source_key.to_string(),
            generate,
            template: None,
        };
        list.add_fields(document)?;
        list.validate_fields()?;
        Ok(list)
    }

    fn add_fields(&mut self, document: &Value) -> Result<(), MapperError> {
        for (field, value) in fields::as_map(COMPONENT, document)? {
            match field.as_str() {
                "source_key" => self.source_key = fields::string(COMPONENT, field, value)?,
                _ => return Err(MapperError::unknown_field(COMPONENT, field.as_str())),
            }
        }
        Ok(())
    }

    fn validate_fields(&self) -> Result<(), MapperError> {
        if self.source_key.is_empty() {
            return Err(MapperError::validation(
                COMPONENT,
                "no source_key passed for list. Add the 'source_key' of the items",
            ));
        }
        Ok(())
    }

    fn with_template(mut self, template: Arc<ComponentMapper>) -> Self {
        self.template = Some(template);
        self
    }

    pub fn source_key(&self) -> &str {
        &self.source_key
    }

    /// The mapped item template, when the list was built from a document.
    pub fn template(&self) -> Option<&ComponentMapper> {
        self.template.as_deref()
    }

    /// Expands the list against `scope[source_key]`, which must be a sequence
    /// of maps. Each item becomes the innermost frame of its own scope.
    pub fn generate(&self, scope: &Scope<'_>) -> Result<Node, MapperError> {
        let key = self.source_key.as_str();
        let items: Vec<Node> = scope
            .items(COMPONENT, key)?
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let frame = item.as_object().ok_or_else(|| {
                    MapperError::resolution(COMPONENT, key, "expected every item to be a map").at(key, i)
                })?;
                (self.generate)(&scope.push(frame)).map_err(|e| e.at(key, i))
            })
            .try_collect()?;
        Ok(Node::List { items })
    }
}

/// Builds a list from its document form,
/// `{"source_key": "...", "template": {<kind>: <fragment>}}`.
///
/// The template is mapped once, here, so that its errors surface at mapping
/// time; the callback handed to the hub regenerates it for every item.
pub(crate) fn from_template(document: &Value, factory: &dyn AbstractFactory) -> Result<ComponentMapper, MapperError> {
    let mut rest = fields::as_map(COMPONENT, document)?.clone();
    let template = rest.remove("template").ok_or_else(|| {
        MapperError::validation(COMPONENT, "no template passed for list. Add the 'template' component")
    })?;

    let entries = fields::map(COMPONENT, "template", &template)?;
    let mapper = component_entry(COMPONENT, "template", entries)
        .and_then(|entry| {
            let (name, fragment) = entry
                .ok_or_else(|| MapperError::validation(COMPONENT, "the list template holds no component"))?;
            map_component(name, fragment, factory)
        })
        .map_err(|e| e.at_field("template"))?;

    let kind = mapper.kind();
    let template = Arc::new(mapper);
    let item = Arc::clone(&template);
    let generate = generator(move |scope| item.generate_in(scope).map_err(|e| e.at_field(kind)));

    Ok(match factory.new_list(&Value::Object(rest), "", generate)? {
        ComponentMapper::List(list) => ComponentMapper::List(list.with_template(template)),
        other => other,
    })
}
