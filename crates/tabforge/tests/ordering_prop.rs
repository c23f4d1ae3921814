//! Property tests for column-order preservation.

use proptest::prelude::*;
use tabforge::TableConfig;

proptest! {
    /// For any sequence of column additions, the built configuration holds
    /// exactly that many columns, in call order.
    #[test]
    fn columns_preserve_insertion_order(titles in prop::collection::vec("[a-z]{1,8}", 0..24)) {
        let mut table = TableConfig::new();
        for (index, title) in titles.iter().enumerate() {
            table = table.add_column(title.clone(), format!("field_{}", index));
        }

        let config = table.build();
        let columns = config["columns"].as_list().unwrap();
        prop_assert_eq!(columns.len(), titles.len());
        for (column, title) in columns.iter().zip(&titles) {
            let stored = column.as_map().unwrap()["title"].as_str().unwrap();
            prop_assert_eq!(stored, title.as_str());
        }
    }

    /// Appending never reorders: the serialized document lists fields in the
    /// same order the columns were added.
    #[test]
    fn serialized_columns_match_call_order(count in 0usize..12) {
        let mut table = TableConfig::new();
        for index in 0..count {
            table = table.add_column(format!("Col {}", index), format!("f{}", index));
        }

        let value = table.to_value().unwrap();
        let fields: Vec<String> = value["columns"]
            .as_array()
            .unwrap()
            .iter()
            .map(|column| column["field"].as_str().unwrap().to_string())
            .collect();
        let expected: Vec<String> = (0..count).map(|index| format!("f{}", index)).collect();
        prop_assert_eq!(fields, expected);
    }
}
