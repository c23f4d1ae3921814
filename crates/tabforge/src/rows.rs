//! Inline dataset rows.
//!
//! A dataset is an ordered sequence of [`Row`] records. [`IntoRows`] is the
//! seam for dataset collaborators: anything that can materialize itself as a
//! row sequence is accepted where a dataset is expected, including
//! `serde_json` values.

use crate::value::{OptionMap, OptionValue};

/// One data record: field name to cell value.
pub type Row = OptionMap;

/// Conversion into an ordered sequence of rows.
pub trait IntoRows {
    /// Materializes the dataset.
    fn into_rows(self) -> Vec<Row>;
}

impl IntoRows for Vec<Row> {
    fn into_rows(self) -> Vec<Row> {
        self
    }
}

impl IntoRows for &[Row] {
    fn into_rows(self) -> Vec<Row> {
        self.to_vec()
    }
}

impl<const N: usize> IntoRows for [Row; N] {
    fn into_rows(self) -> Vec<Row> {
        self.into_iter().collect()
    }
}

impl IntoRows for Vec<serde_json::Value> {
    fn into_rows(self) -> Vec<Row> {
        self.into_iter().map(row_from_value).collect()
    }
}

/// A JSON array converts element-wise; any other JSON value becomes a
/// single-row dataset.
impl IntoRows for serde_json::Value {
    fn into_rows(self) -> Vec<Row> {
        match self {
            serde_json::Value::Array(items) => items.into_iter().map(row_from_value).collect(),
            other => vec![row_from_value(other)],
        }
    }
}

/// JSON objects become records; any other value is wrapped under a `value`
/// key.
fn row_from_value(value: serde_json::Value) -> Row {
    match OptionValue::from(value) {
        OptionValue::Map(map) => map,
        other => {
            let mut row = Row::new();
            row.insert("value".to_string(), other);
            row
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_array_of_objects_converts_in_order() {
        let rows = json!([{"id": 1}, {"id": 2}]).into_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["id"], OptionValue::Int(1));
        assert_eq!(rows[1]["id"], OptionValue::Int(2));
    }

    #[test]
    fn scalar_elements_are_wrapped() {
        let rows = json!(["a", "b"]).into_rows();
        assert_eq!(rows[0]["value"], OptionValue::Str("a".into()));
        assert_eq!(rows[1]["value"], OptionValue::Str("b".into()));
    }

    #[test]
    fn row_vec_passes_through() {
        let mut row = Row::new();
        row.insert("id".to_string(), OptionValue::Int(1));
        let rows = vec![row.clone()].into_rows();
        assert_eq!(rows, vec![row]);
    }
}
