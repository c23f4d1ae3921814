//! Tabforge - Fluent configuration builder for the Tabulator data-table widget.
//!
//! Tabforge assembles the options object a front-end data table consumes:
//! column definitions, layout, pagination, sorting, filtering, and display
//! options, plus an optional inline dataset. The builder itself renders
//! nothing and performs no I/O; it produces one JSON-compatible mapping and
//! hands it to the widget.
//!
//! # Quick Start
//!
//! ```rust
//! use tabforge::{Layout, SortDir, TableConfig};
//!
//! let json = TableConfig::new()
//!     .add_text_column("Name", "name", true, true)
//!     .add_number_column("Age", "age", true, false)
//!     .add_select_column("Status", "status", ["active", "suspended"], true)
//!     .layout(Layout::FitColumns)
//!     .local_pagination(20, 1)
//!     .initial_sort("name", SortDir::Asc)
//!     .to_json()
//!     .unwrap();
//!
//! assert!(json.contains("\"pagination\":\"local\""));
//! ```
//!
//! # Inline data
//!
//! Anything implementing [`IntoRows`] is accepted as a dataset, including
//! `serde_json` values:
//!
//! ```rust
//! use tabforge::TableConfig;
//!
//! let config = TableConfig::new()
//!     .add_column("Id", "id")
//!     .rows(serde_json::json!([{"id": 1}, {"id": 2}]));
//!
//! assert_eq!(config.dataset().unwrap().len(), 2);
//! ```
//!
//! # Opaque formatters
//!
//! A column's `formatter` slot holds either a widget keyword or a
//! caller-supplied render callback ([`Formatter`]). Callbacks are stored as
//! data for the consuming widget, never invoked here, and make the
//! configuration unserializable as JSON; [`TableConfig::to_json`] reports
//! the offending key.

#![warn(missing_docs)]

mod column;
mod error;
mod options;
mod rows;
mod table;
mod value;

pub use column::Column;
pub use error::{ConfigError, Result};
pub use options::{
    Layout, Pagination, RangeMode, SortDir, VertAlign, DEFAULT_INITIAL_PAGE, DEFAULT_PAGE_SIZE,
};
pub use rows::{IntoRows, Row};
pub use table::TableConfig;
pub use value::{Formatter, OptionMap, OptionValue, RenderFn};
