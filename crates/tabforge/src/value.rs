//! Option values for widget configuration slots.
//!
//! The [`OptionValue`] enum is the value type for every configuration slot:
//! column keys, widget options, and dataset cells. It is a closed union of the
//! shapes JSON can carry, plus [`OptionValue::Render`] for opaque
//! caller-supplied render callbacks. The builder never invokes a stored
//! callback; it is data handed to the consuming widget, and the one variant
//! that fails JSON serialization.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{ConfigError, Result};

/// Map from option key to value.
pub type OptionMap = BTreeMap<String, OptionValue>;

/// Opaque render callback, stored verbatim in a `formatter` slot.
///
/// Receives the row being rendered and returns the cell markup. Never called
/// by the builder itself.
pub type RenderFn = Arc<dyn Fn(&OptionMap) -> String + Send + Sync>;

/// A single configuration value.
#[derive(Clone)]
pub enum OptionValue {
    /// Absent/null value (appears in datasets converted from JSON).
    Null,
    /// Boolean flag.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// String value.
    Str(String),
    /// Ordered sequence of values.
    List(Vec<OptionValue>),
    /// Nested key-value mapping.
    Map(OptionMap),
    /// Opaque render callback. Not representable as JSON.
    Render(RenderFn),
}

impl OptionValue {
    /// Returns `true` if this is a `Null` value.
    pub fn is_null(&self) -> bool {
        matches!(self, OptionValue::Null)
    }

    /// Returns `true` if this is a stored render callback.
    pub fn is_render(&self) -> bool {
        matches!(self, OptionValue::Render(_))
    }

    /// Extracts the boolean value, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extracts the integer value, if present.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            OptionValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the float value, if present.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            OptionValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the list value, if present.
    pub fn as_list(&self) -> Option<&[OptionValue]> {
        match self {
            OptionValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Extracts the map value, if present.
    pub fn as_map(&self) -> Option<&OptionMap> {
        match self {
            OptionValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Converts this value to JSON, tracking the dotted path for errors.
    ///
    /// Render callbacks and non-finite floats have no JSON representation and
    /// fail with [`ConfigError::Unserializable`] naming `path`.
    pub(crate) fn to_json(&self, path: &str) -> Result<serde_json::Value> {
        match self {
            OptionValue::Null => Ok(serde_json::Value::Null),
            OptionValue::Bool(b) => Ok(serde_json::Value::Bool(*b)),
            OptionValue::Int(n) => Ok(serde_json::Value::Number((*n).into())),
            OptionValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .ok_or_else(|| ConfigError::Unserializable {
                    key: path.to_string(),
                }),
            OptionValue::Str(s) => Ok(serde_json::Value::String(s.clone())),
            OptionValue::List(items) => {
                let mut out = Vec::with_capacity(items.len());
                for (index, item) in items.iter().enumerate() {
                    out.push(item.to_json(&format!("{}[{}]", path, index))?);
                }
                Ok(serde_json::Value::Array(out))
            }
            OptionValue::Map(map) => {
                let mut out = serde_json::Map::new();
                for (key, value) in map {
                    out.insert(key.clone(), value.to_json(&join_path(path, key))?);
                }
                Ok(serde_json::Value::Object(out))
            }
            OptionValue::Render(_) => Err(ConfigError::Unserializable {
                key: path.to_string(),
            }),
        }
    }
}

fn join_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

impl fmt::Debug for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Null => f.write_str("Null"),
            OptionValue::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            OptionValue::Int(n) => f.debug_tuple("Int").field(n).finish(),
            OptionValue::Float(x) => f.debug_tuple("Float").field(x).finish(),
            OptionValue::Str(s) => f.debug_tuple("Str").field(s).finish(),
            OptionValue::List(items) => f.debug_tuple("List").field(items).finish(),
            OptionValue::Map(map) => f.debug_tuple("Map").field(map).finish(),
            OptionValue::Render(_) => f.write_str("Render(<fn>)"),
        }
    }
}

impl PartialEq for OptionValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (OptionValue::Null, OptionValue::Null) => true,
            (OptionValue::Bool(a), OptionValue::Bool(b)) => a == b,
            (OptionValue::Int(a), OptionValue::Int(b)) => a == b,
            (OptionValue::Float(a), OptionValue::Float(b)) => a == b,
            (OptionValue::Str(a), OptionValue::Str(b)) => a == b,
            (OptionValue::List(a), OptionValue::List(b)) => a == b,
            (OptionValue::Map(a), OptionValue::Map(b)) => a == b,
            // Callbacks compare by identity.
            (OptionValue::Render(a), OptionValue::Render(b)) => {
                Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const ()
            }
            _ => false,
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        OptionValue::Int(i64::from(value))
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Int(value)
    }
}

impl From<u32> for OptionValue {
    fn from(value: u32) -> Self {
        OptionValue::Int(i64::from(value))
    }
}

impl From<f32> for OptionValue {
    fn from(value: f32) -> Self {
        OptionValue::Float(f64::from(value))
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Float(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Str(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Str(value)
    }
}

impl<T: Into<OptionValue>> From<Vec<T>> for OptionValue {
    fn from(values: Vec<T>) -> Self {
        OptionValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<OptionMap> for OptionValue {
    fn from(map: OptionMap) -> Self {
        OptionValue::Map(map)
    }
}

impl From<serde_json::Value> for OptionValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => OptionValue::Null,
            serde_json::Value::Bool(b) => OptionValue::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => OptionValue::Int(i),
                None => OptionValue::Float(n.as_f64().unwrap_or_default()),
            },
            serde_json::Value::String(s) => OptionValue::Str(s),
            serde_json::Value::Array(items) => {
                OptionValue::List(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(map) => {
                OptionValue::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

/// The value stored in a column's `formatter` slot.
///
/// Either a fixed widget token such as `"html"` or `"tickCross"`, or a
/// caller-supplied render callback. The builder stores the callback as opaque
/// data and never invokes it.
#[derive(Clone)]
pub enum Formatter {
    /// A formatter name understood by the widget.
    Keyword(String),
    /// A caller-supplied render function.
    Render(RenderFn),
}

impl Formatter {
    /// Creates a keyword formatter.
    pub fn keyword(token: impl Into<String>) -> Self {
        Formatter::Keyword(token.into())
    }

    /// Creates a render-callback formatter.
    pub fn render<F>(f: F) -> Self
    where
        F: Fn(&OptionMap) -> String + Send + Sync + 'static,
    {
        Formatter::Render(Arc::new(f))
    }
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formatter::Keyword(token) => f.debug_tuple("Keyword").field(token).finish(),
            Formatter::Render(_) => f.write_str("Render(<fn>)"),
        }
    }
}

impl From<Formatter> for OptionValue {
    fn from(formatter: Formatter) -> Self {
        match formatter {
            Formatter::Keyword(token) => OptionValue::Str(token),
            Formatter::Render(callback) => OptionValue::Render(callback),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_cover_primitives() {
        assert_eq!(OptionValue::from(true), OptionValue::Bool(true));
        assert_eq!(OptionValue::from(42i64), OptionValue::Int(42));
        assert_eq!(OptionValue::from(7u32), OptionValue::Int(7));
        assert_eq!(OptionValue::from(1.5f64), OptionValue::Float(1.5));
        assert_eq!(OptionValue::from("abc"), OptionValue::Str("abc".into()));
    }

    #[test]
    fn vec_conversion_builds_list() {
        let value = OptionValue::from(vec![1i64, 2, 3]);
        let items = value.as_list().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0], OptionValue::Int(1));
    }

    #[test]
    fn json_value_conversion() {
        let json = serde_json::json!({"name": "Ada", "age": 36, "tags": ["x"]});
        let value = OptionValue::from(json);
        let map = value.as_map().unwrap();
        assert_eq!(map["name"], OptionValue::Str("Ada".into()));
        assert_eq!(map["age"], OptionValue::Int(36));
        assert_eq!(map["tags"].as_list().unwrap().len(), 1);
    }

    #[test]
    fn to_json_rejects_render_with_path() {
        let mut map = OptionMap::new();
        map.insert(
            "formatter".to_string(),
            Formatter::render(|_| String::new()).into(),
        );
        let err = OptionValue::Map(map).to_json("columns[0]").unwrap_err();
        assert!(err.to_string().contains("columns[0].formatter"));
    }

    #[test]
    fn to_json_rejects_non_finite_float() {
        let err = OptionValue::Float(f64::NAN).to_json("width").unwrap_err();
        assert!(err.to_string().contains("width"));
    }

    #[test]
    fn render_equality_is_identity() {
        let a: OptionValue = Formatter::render(|_| String::new()).into();
        let b = a.clone();
        let c: OptionValue = Formatter::render(|_| String::new()).into();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
