//! Column definitions.
//!
//! A [`Column`] is a key-value mapping carrying at least `title` (display
//! label) and `field` (data key), plus any widget-specific keys the caller
//! adds: sortability, filter type, formatter, width, alignment. Columns built
//! through [`Column::new`] always carry the required keys; map-backed entries
//! built from raw data may lack them and are validated at bulk-add time.

use crate::value::{OptionMap, OptionValue};

/// Definition of a single table column.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Column {
    entries: OptionMap,
}

impl Column {
    /// Creates a column with the required `title` and `field` keys.
    pub fn new(title: impl Into<String>, field: impl Into<String>) -> Self {
        let mut entries = OptionMap::new();
        entries.insert("title".to_string(), OptionValue::Str(title.into()));
        entries.insert("field".to_string(), OptionValue::Str(field.into()));
        Column { entries }
    }

    /// Creates a column from raw key-value entries, without requiring
    /// `title` or `field` to be present.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<OptionValue>,
    {
        Column {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Sets one widget option on this column, overwriting any previous value.
    pub fn opt(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Merges extra options into this column, overwriting overlapping keys.
    ///
    /// Merged keys may override `title` and `field`.
    pub fn merge<I, K, V>(&mut self, extra: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<OptionValue>,
    {
        for (key, value) in extra {
            self.entries.insert(key.into(), value.into());
        }
    }

    /// Looks up one option value.
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.entries.get(key)
    }

    /// The display label, when present as a string.
    pub fn title(&self) -> Option<&str> {
        self.entries.get("title").and_then(OptionValue::as_str)
    }

    /// The data key, when present as a string.
    pub fn field(&self) -> Option<&str> {
        self.entries.get("field").and_then(OptionValue::as_str)
    }

    /// Borrows the underlying entries.
    pub fn entries(&self) -> &OptionMap {
        &self.entries
    }

    /// First required key absent from this column, if any.
    pub(crate) fn missing_key(&self) -> Option<&'static str> {
        if !self.entries.contains_key("title") {
            Some("title")
        } else if !self.entries.contains_key("field") {
            Some("field")
        } else {
            None
        }
    }
}

impl From<Column> for OptionValue {
    fn from(column: Column) -> Self {
        OptionValue::Map(column.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sets_required_keys() {
        let column = Column::new("Name", "name");
        assert_eq!(column.title(), Some("Name"));
        assert_eq!(column.field(), Some("name"));
        assert_eq!(column.missing_key(), None);
    }

    #[test]
    fn opt_chains_extra_keys() {
        let column = Column::new("Age", "age").opt("width", 60).opt("sortable", false);
        assert_eq!(column.get("width"), Some(&OptionValue::Int(60)));
        assert_eq!(column.get("sortable"), Some(&OptionValue::Bool(false)));
    }

    #[test]
    fn merge_overrides_required_keys() {
        let mut column = Column::new("Name", "name");
        column.merge([("title", "Full Name")]);
        assert_eq!(column.title(), Some("Full Name"));
    }

    #[test]
    fn from_entries_may_lack_required_keys() {
        let column = Column::from_entries([("width", 100)]);
        assert_eq!(column.missing_key(), Some("title"));
        let column = Column::from_entries([("title", "X")]);
        assert_eq!(column.missing_key(), Some("field"));
    }
}
