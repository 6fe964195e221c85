//! Runtime content and the scopes it is resolved through.

use crate::error::MapperError;
use serde_json::{Map, Value};

/// The runtime content map supplied at generate time. Keys are source keys.
pub type Content = Map<String, Value>;

/// A chain of content frames, innermost first.
///
/// The root scope wraps the caller's content. Structural components with a
/// source key push the sub-map bound to that key, and every list item pushes
/// the item itself, so a nested component sees its closest binding first and
/// can still reach values declared further out.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    frame: &'a Content,
    parent: Option<&'a Scope<'a>>,
}

impl<'a> Scope<'a> {
    pub fn root(content: &'a Content) -> Self {
        Self { frame: content, parent: None }
    }

    /// Returns a child scope whose innermost frame is `frame`.
    pub fn push<'b>(&'b self, frame: &'b Content) -> Scope<'b> {
        Scope { frame, parent: Some(self) }
    }

    /// The innermost frame.
    pub fn frame(&self) -> &'a Content {
        self.frame
    }

    /// Number of frames in the chain.
    pub fn depth(&self) -> usize {
        1 + self.parent.map_or(0, |p| p.depth())
    }

    /// Looks `key` up from the innermost frame outwards.
    pub fn lookup(&self, key: &str) -> Option<&'a Value> {
        match self.frame.get(key) {
            Some(value) => Some(value),
            None => self.parent.and_then(|parent| parent.lookup(key)),
        }
    }

    /// Narrows the scope to the map bound at `key`. An empty key leaves the
    /// scope unchanged.
    pub fn bind<'b>(&'b self, component: &'static str, key: &str) -> Result<Scope<'b>, MapperError> {
        if key.is_empty() {
            return Ok(*self);
        }
        let value = self
            .lookup(key)
            .ok_or_else(|| MapperError::resolution(component, key, "key not found in content"))?;
        let map = value
            .as_object()
            .ok_or_else(|| MapperError::resolution(component, key, "expected a map of content"))?;
        Ok(self.push(map))
    }

    /// Resolves `key` to a printable scalar. Strings are used as-is; numbers and
    /// booleans use their JSON text.
    pub fn scalar(&self, component: &'static str, key: &str) -> Result<String, MapperError> {
        match self.lookup(key) {
            None => Err(MapperError::resolution(component, key, "key not found in content")),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(Value::Number(n)) => Ok(n.to_string()),
            Some(Value::Bool(b)) => Ok(b.to_string()),
            Some(_) => Err(MapperError::resolution(
                component,
                key,
                "expected a string, number or boolean",
            )),
        }
    }

    /// Resolves `key` to the sequence of items driving a list.
    pub fn items(&self, component: &'static str, key: &str) -> Result<&'a [Value], MapperError> {
        let value = self
            .lookup(key)
            .ok_or_else(|| MapperError::resolution(component, key, "key not found in content"))?;
        value
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| MapperError::resolution(component, key, "expected a list of content items"))
    }
}

/// Picks the final value of a value-bearing leaf: the explicit value when set,
/// otherwise whatever the source key resolves to.
pub fn resolve_value(
    component: &'static str,
    value: &str,
    source_key: &str,
    scope: &Scope<'_>,
) -> Result<String, MapperError> {
    if !value.is_empty() {
        return Ok(value.to_string());
    }
    if source_key.is_empty() {
        return Err(MapperError::resolution(component, "", "no value and no source key"));
    }
    scope.scalar(component, source_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn content(value: Value) -> Content {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_lookup_prefers_innermost_frame() {
        let outer = content(json!({"name": "outer", "currency": "EUR"}));
        let inner = content(json!({"name": "inner"}));
        let root = Scope::root(&outer);
        let scope = root.push(&inner);
        assert_eq!(scope.lookup("name"), Some(&json!("inner")));
        assert_eq!(scope.lookup("currency"), Some(&json!("EUR")));
        assert_eq!(scope.lookup("missing"), None);
        assert_eq!(scope.depth(), 2);
    }

    #[test]
    fn test_bind_requires_a_map() {
        let data = content(json!({"customer": {"name": "ACME"}, "total": 10}));
        let root = Scope::root(&data);
        let bound = root.bind("page", "customer").unwrap();
        assert_eq!(bound.scalar("text", "name").unwrap(), "ACME");

        let err = root.bind("page", "total").unwrap_err();
        assert!(err.is_resolution());
        assert!(root.bind("page", "nope").unwrap_err().is_resolution());
    }

    #[test]
    fn test_scalar_renders_numbers_and_booleans() {
        let data = content(json!({"n": 4.5, "b": true, "obj": {}}));
        let root = Scope::root(&data);
        assert_eq!(root.scalar("text", "n").unwrap(), "4.5");
        assert_eq!(root.scalar("text", "b").unwrap(), "true");
        assert!(root.scalar("text", "obj").unwrap_err().is_resolution());
    }

    #[test]
    fn test_resolve_value_prefers_explicit_value() {
        let data = content(json!({"key": "from content"}));
        let root = Scope::root(&data);
        assert_eq!(resolve_value("text", "explicit", "key", &root).unwrap(), "explicit");
        assert_eq!(resolve_value("text", "", "key", &root).unwrap(), "from content");
        assert!(resolve_value("text", "", "missing", &root).unwrap_err().is_resolution());
    }
}
