//! The fluent table configuration builder.
//!
//! [`TableConfig`] accumulates column definitions, widget options, and an
//! optional inline dataset, then flattens them into one mapping for the
//! consuming widget. Every mutator consumes and returns the builder, so a
//! complete configuration reads as a single chain.

use crate::column::Column;
use crate::error::{ConfigError, Result};
use crate::options::{Layout, Pagination, RangeMode, SortDir, VertAlign};
use crate::rows::{IntoRows, Row};
use crate::value::{Formatter, OptionMap, OptionValue};

/// Fluent builder for a data-table widget configuration.
///
/// Columns keep their insertion order; options are a last-write-wins mapping.
/// The terminal [`build`](TableConfig::build) merges both (plus the dataset,
/// when one was stored) into a single mapping, and
/// [`to_json`](TableConfig::to_json) emits that mapping as one JSON document.
///
/// # Example
///
/// ```
/// use tabforge::{Layout, SortDir, TableConfig};
///
/// let config = TableConfig::new()
///     .add_text_column("Name", "name", true, true)
///     .add_number_column("Age", "age", true, false)
///     .layout(Layout::FitColumns)
///     .local_pagination(20, 1)
///     .initial_sort("name", SortDir::Asc);
///
/// let json = config.to_json().unwrap();
/// assert!(json.contains("\"fitColumns\""));
/// ```
#[derive(Clone, Debug, Default)]
pub struct TableConfig {
    columns: Vec<Column>,
    options: OptionMap,
    data: Option<Vec<Row>>,
    ajax_url: Option<String>,
}

impl TableConfig {
    /// Creates an empty configuration: no columns, no options, no dataset.
    pub fn new() -> Self {
        TableConfig::default()
    }

    // ========================================================================
    // Columns
    // ========================================================================

    /// Appends a column with the given display label and data key.
    pub fn add_column(mut self, title: impl Into<String>, field: impl Into<String>) -> Self {
        self.columns.push(Column::new(title, field));
        self
    }

    /// Appends a column with extra widget options merged in.
    ///
    /// Extra keys overwrite `title`/`field` on collision (last-write-wins).
    pub fn add_column_with<I, K, V>(
        mut self,
        title: impl Into<String>,
        field: impl Into<String>,
        extra: I,
    ) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<OptionValue>,
    {
        let mut column = Column::new(title, field);
        column.merge(extra);
        self.columns.push(column);
        self
    }

    /// Appends prebuilt columns in order.
    ///
    /// Every entry must carry both `title` and `field`. Entries are validated
    /// up front: a malformed entry fails with [`ConfigError::MissingField`]
    /// naming its position, and no entry is appended.
    pub fn add_columns<I>(mut self, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = Column>,
    {
        let entries: Vec<Column> = entries.into_iter().collect();
        for (index, entry) in entries.iter().enumerate() {
            if let Some(key) = entry.missing_key() {
                return Err(ConfigError::MissingField { index, key });
            }
        }
        self.columns.extend(entries);
        Ok(self)
    }

    /// Merges extra options into the most recently appended column.
    ///
    /// Overlapping keys are overwritten. Silent no-op when no column exists.
    pub fn extend_last_column<I, K, V>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<OptionValue>,
    {
        if let Some(last) = self.columns.last_mut() {
            last.merge(extra);
        }
        self
    }

    // ========================================================================
    // Column shorthands
    // ========================================================================

    /// Appends a text column: sortable flag plus an `input` header filter.
    pub fn add_text_column(
        self,
        title: impl Into<String>,
        field: impl Into<String>,
        sortable: bool,
        filterable: bool,
    ) -> Self {
        let filter: OptionValue = if filterable {
            "input".into()
        } else {
            false.into()
        };
        self.add_column_with(
            title,
            field,
            [
                ("sortable", OptionValue::from(sortable)),
                ("headerFilter", filter),
            ],
        )
    }

    /// Appends a numeric column: number sorter plus a `number` header filter.
    pub fn add_number_column(
        self,
        title: impl Into<String>,
        field: impl Into<String>,
        sortable: bool,
        filterable: bool,
    ) -> Self {
        let filter: OptionValue = if filterable {
            "number".into()
        } else {
            false.into()
        };
        self.add_column_with(
            title,
            field,
            [
                ("sortable", OptionValue::from(sortable)),
                ("headerFilter", filter),
                ("sorter", "number".into()),
            ],
        )
    }

    /// Appends a column filtered by a dropdown of allowed values.
    ///
    /// The allowed values become an identity value-to-label mapping in
    /// `headerFilterParams.values`, which the widget uses to populate the
    /// filter dropdown.
    pub fn add_select_column<I>(
        self,
        title: impl Into<String>,
        field: impl Into<String>,
        values: I,
        sortable: bool,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut labels = OptionMap::new();
        for value in values {
            let value = value.into();
            labels.insert(value.clone(), OptionValue::Str(value));
        }
        let mut params = OptionMap::new();
        params.insert("values".to_string(), OptionValue::Map(labels));
        self.add_column_with(
            title,
            field,
            [
                ("sortable", OptionValue::from(sortable)),
                ("headerFilter", OptionValue::from(true)),
                ("headerFilterParams", OptionValue::Map(params)),
            ],
        )
    }

    /// Appends a boolean column rendered as tick/cross marks, with a tristate
    /// tick/cross header filter.
    pub fn add_checkbox_column(
        self,
        title: impl Into<String>,
        field: impl Into<String>,
        sortable: bool,
    ) -> Self {
        let mut params = OptionMap::new();
        params.insert("tristate".to_string(), OptionValue::Bool(true));
        self.add_column_with(
            title,
            field,
            [
                ("formatter", OptionValue::from("tickCross")),
                ("sortable", OptionValue::from(sortable)),
                ("headerFilter", OptionValue::from("tickCross")),
                ("headerFilterParams", OptionValue::Map(params)),
            ],
        )
    }

    /// Appends a fixed-width action column bound to the `actions` field.
    ///
    /// With no formatter the column renders as raw HTML; a
    /// [`Formatter::Render`] callback is stored verbatim for the widget and
    /// makes the configuration unserializable as JSON.
    pub fn add_action_column(
        mut self,
        title: impl Into<String>,
        formatter: Option<Formatter>,
    ) -> Self {
        let formatter = formatter.unwrap_or_else(|| Formatter::keyword("html"));
        let column = Column::new(title, "actions")
            .opt("formatter", formatter)
            .opt("sortable", false)
            .opt("headerFilter", false)
            .opt("resizable", false)
            .opt("width", 100);
        self.columns.push(column);
        self
    }

    // ========================================================================
    // Data
    // ========================================================================

    /// Stores an inline dataset, replacing any previous one.
    pub fn rows(mut self, dataset: impl IntoRows) -> Self {
        self.data = Some(dataset.into_rows());
        self
    }

    /// Records the remote-data endpoint.
    ///
    /// The URL lands both in the dedicated field and in the `ajaxURL` option;
    /// both are written through one helper so they cannot drift apart.
    pub fn remote_source(mut self, url: impl Into<String>) -> Self {
        self.set_ajax_url(url);
        self
    }

    fn set_ajax_url(&mut self, url: impl Into<String>) {
        let url = url.into();
        self.options
            .insert("ajaxURL".to_string(), OptionValue::Str(url.clone()));
        self.ajax_url = Some(url);
    }

    // ========================================================================
    // Layout
    // ========================================================================

    /// Sets the column layout mode. Last call wins.
    pub fn layout(self, layout: Layout) -> Self {
        self.option("layout", layout)
    }

    /// Shorthand for `.layout(Layout::FitColumns)`.
    pub fn layout_fit_columns(self) -> Self {
        self.layout(Layout::FitColumns)
    }

    /// Shorthand for `.layout(Layout::FitData)`.
    pub fn layout_fit_data(self) -> Self {
        self.layout(Layout::FitData)
    }

    /// Shorthand for `.layout(Layout::FitDataFill)`.
    pub fn layout_fit_data_fill(self) -> Self {
        self.layout(Layout::FitDataFill)
    }

    // ========================================================================
    // Pagination
    // ========================================================================

    /// Enables local pagination over the inline dataset.
    pub fn local_pagination(self, page_size: u32, initial_page: u32) -> Self {
        self.option("pagination", Pagination::Local)
            .option("paginationSize", page_size)
            .option("paginationInitialPage", initial_page)
    }

    /// Enables remote pagination against the given endpoint.
    ///
    /// The endpoint goes through the same write as
    /// [`remote_source`](TableConfig::remote_source), keeping the dedicated
    /// field and the `ajaxURL` option in sync.
    pub fn remote_pagination(mut self, url: impl Into<String>, page_size: u32) -> Self {
        self.set_ajax_url(url);
        self.option("pagination", Pagination::Remote)
            .option("paginationSize", page_size)
    }

    // ========================================================================
    // Sorting and filtering
    // ========================================================================

    /// Toggles column sorting table-wide.
    pub fn sortable(self, enabled: bool) -> Self {
        self.option("sortable", enabled)
    }

    /// Sets the initial sort to a single column and direction.
    ///
    /// Stored as a one-element sequence of `{column, dir}`; the widget
    /// accepts multi-column sort but only the single-column convenience is
    /// exposed here.
    pub fn initial_sort(self, field: impl Into<String>, dir: SortDir) -> Self {
        let mut pair = OptionMap::new();
        pair.insert("column".to_string(), OptionValue::Str(field.into()));
        pair.insert("dir".to_string(), dir.into());
        self.option("initialSort", vec![OptionValue::Map(pair)])
    }

    /// Toggles per-column header filter inputs.
    pub fn header_filters(self, enabled: bool) -> Self {
        self.option("headerFilter", enabled)
    }

    // ========================================================================
    // Display
    // ========================================================================

    /// Toggles responsive column collapsing.
    pub fn responsive_layout(self, enabled: bool) -> Self {
        self.option("responsiveLayout", enabled)
    }

    /// Toggles whether collapsed responsive rows start open.
    pub fn responsive_collapse_start_open(self, enabled: bool) -> Self {
        self.option("responsiveLayoutCollapseStartOpen", enabled)
    }

    /// Sets the table height as a CSS size string.
    pub fn height(self, height: impl Into<String>) -> Self {
        self.option("height", height.into())
    }

    /// Sets the maximum table height as a CSS size string.
    pub fn max_height(self, max_height: impl Into<String>) -> Self {
        self.option("maxHeight", max_height.into())
    }

    /// Toggles row selection and sets the range-selection mode.
    pub fn selectable(self, enabled: bool, mode: RangeMode) -> Self {
        self.option("selectable", enabled)
            .option("selectableRangeMode", mode)
    }

    /// Toggles cell tooltips.
    pub fn tooltips(self, enabled: bool) -> Self {
        self.option("tooltips", enabled)
    }

    /// Toggles drag-reordering of columns.
    pub fn movable_columns(self, enabled: bool) -> Self {
        self.option("movableColumns", enabled)
    }

    /// Toggles drag-resizing of columns.
    pub fn resizable_columns(self, enabled: bool) -> Self {
        self.option("resizableColumns", enabled)
    }

    /// Sets the vertical alignment of column header text.
    pub fn column_header_vert_align(self, align: VertAlign) -> Self {
        self.option("columnHeaderVertAlign", align)
    }

    /// Writes an arbitrary option key, overwriting any previous value.
    ///
    /// Escape hatch for widget options without a dedicated setter. A key
    /// written here can also shadow the reserved `columns`/`data` output keys;
    /// the last write wins.
    pub fn option(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The accumulated columns, in insertion order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The accumulated options.
    pub fn options(&self) -> &OptionMap {
        &self.options
    }

    /// The stored dataset, when one was set.
    pub fn dataset(&self) -> Option<&[Row]> {
        self.data.as_deref()
    }

    /// The remote-data endpoint, when one was set.
    pub fn ajax_url(&self) -> Option<&str> {
        self.ajax_url.as_deref()
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Flattens the accumulated state into one mapping.
    ///
    /// The result holds `columns` (always), `data` (only when a non-empty
    /// dataset was stored), and every accumulated option. Options win on key
    /// collision. Deterministic given the sequence of prior calls; does not
    /// consume or mutate the builder.
    pub fn build(&self) -> OptionMap {
        let mut config = OptionMap::new();
        config.insert(
            "columns".to_string(),
            OptionValue::List(self.columns.iter().cloned().map(OptionValue::from).collect()),
        );
        if let Some(rows) = &self.data {
            if !rows.is_empty() {
                config.insert(
                    "data".to_string(),
                    OptionValue::List(rows.iter().cloned().map(OptionValue::Map).collect()),
                );
            }
        }
        for (key, value) in &self.options {
            config.insert(key.clone(), value.clone());
        }
        config
    }

    /// Converts the built configuration to a JSON value.
    ///
    /// Fails with [`ConfigError::Unserializable`] naming the offending key
    /// when the state holds a render callback or a non-finite float.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        let config = self.build();
        let mut out = serde_json::Map::new();
        for (key, value) in &config {
            out.insert(key.clone(), value.to_json(key)?);
        }
        Ok(serde_json::Value::Object(out))
    }

    /// Serializes the configuration as one compact JSON document.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_value()?)?)
    }

    /// Serializes the configuration as one pretty-printed JSON document.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_value()?)?)
    }
}
