//! One mapper per component type.
//!
//! Every mapper follows the same lifecycle: check that the fragment is a map,
//! dispatch each field to a typed setter (anything else is an unknown field),
//! then validate. Structural mappers build their children through the
//! [`AbstractFactory`] they were handed.

pub mod code;
pub mod col;
pub mod image;
pub mod line;
pub mod list;
pub mod page;
pub mod row;
pub mod signature;
pub mod text;

pub use code::{Barcode, Matrixcode, Qrcode};
pub use col::Col;
pub use image::Image;
pub use line::Line;
pub use list::List;
pub use page::Page;
pub use row::Row;
pub use signature::Signature;
pub use text::Text;

use crate::factory::AbstractFactory;
use crate::mapper::ComponentMapper;
use folio_props::PropsError;
use folio_template_core::MapperError;
use itertools::Itertools;
use serde_json::{Map, Value};

/// Value-bearing leaves need something to show: an explicit value or a key to
/// resolve one from.
pub(crate) fn require_value(component: &'static str, value: &str, source_key: &str) -> Result<(), MapperError> {
    if value.is_empty() && source_key.is_empty() {
        return Err(MapperError::validation(
            component,
            format!("no value passed for {}. Add the 'source_key' or a value", component),
        ));
    }
    Ok(())
}

pub(crate) fn parse_props<T>(
    value: &Value,
    parse: impl FnOnce(&Value) -> Result<T, PropsError>,
) -> Result<T, MapperError> {
    parse(value).map_err(|e| MapperError::from(e).at_field("props"))
}

/// The single entry of a `{kind: fragment}` map, if any.
pub(crate) fn component_entry<'v>(
    owner: &'static str,
    field: &str,
    entries: &'v Map<String, Value>,
) -> Result<Option<(&'v str, &'v Value)>, MapperError> {
    if entries.len() > 1 {
        return Err(MapperError::validation(
            owner,
            format!(
                "{} holds at most one component, got {}: {}",
                field,
                entries.len(),
                entries.keys().join(", ")
            ),
        ));
    }
    Ok(entries.iter().next().map(|(name, fragment)| (name.as_str(), fragment)))
}

/// Builds the component named `name` through the hub. Errors are prefixed
/// with the component name.
pub(crate) fn map_component(
    name: &str,
    fragment: &Value,
    factory: &dyn AbstractFactory,
) -> Result<ComponentMapper, MapperError> {
    let mapped = match name {
        "text" => factory.new_text(fragment),
        "image" => factory.new_image(fragment),
        "line" => factory.new_line(fragment),
        "signature" => factory.new_signature(fragment),
        "barcode" => factory.new_barcode(fragment),
        "matrixcode" => factory.new_matrixcode(fragment),
        "qrcode" => factory.new_qrcode(fragment),
        "row" => factory.new_row(fragment, ""),
        "list" => list::from_template(fragment, factory),
        _ => return Err(MapperError::unknown_field("component", name)),
    };
    mapped.map_err(|e| e.at_field(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::AbstractFactoryMaps;
    use serde_json::json;

    #[test]
    fn test_require_value_message() {
        let err = require_value("signature", "", "").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "no value passed for signature. Add the 'source_key' or a value"
        );
        assert!(require_value("signature", "", "key").is_ok());
        assert!(require_value("signature", "Alice", "").is_ok());
    }

    #[test]
    fn test_component_entry_allows_zero_or_one() {
        let empty = Map::new();
        assert!(component_entry("col", "component", &empty).unwrap().is_none());

        let one = json!({"text": {"value": "a"}});
        let (name, _) = component_entry("col", "component", one.as_object().unwrap())
            .unwrap()
            .unwrap();
        assert_eq!(name, "text");

        let two = json!({"text": {}, "image": {}});
        let err = component_entry("col", "component", two.as_object().unwrap()).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("got 2"));
    }

    #[test]
    fn test_map_component_rejects_unknown_kind() {
        let err = map_component("chart", &json!({}), &AbstractFactoryMaps::new()).unwrap_err();
        assert!(err.is_unknown_field());
        assert!(err.to_string().contains("chart"));
        assert!(err.path().is_empty());
    }

    #[test]
    fn test_map_component_prefixes_child_errors() {
        let err = map_component("text", &json!({"size": 3}), &AbstractFactoryMaps::new()).unwrap_err();
        assert_eq!(err.path_string(), "text");
        assert!(err.is_unknown_field());
    }
}
