//! Enumerated widget options.
//!
//! Small copyable enums for the option slots the widget constrains to a fixed
//! set of tokens. Each serializes in the widget's casing and converts into
//! [`OptionValue`] for storage.

use serde::{Deserialize, Serialize};

use crate::value::OptionValue;

/// Default page size for pagination setters.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Default initial page for local pagination.
pub const DEFAULT_INITIAL_PAGE: u32 = 1;

/// Column layout mode. The three values are mutually exclusive; the last
/// layout written wins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Layout {
    /// Stretch columns to fill the table width.
    #[default]
    FitColumns,
    /// Size columns to their content.
    FitData,
    /// Size columns to content, filling leftover width with the last column.
    FitDataFill,
}

impl Layout {
    /// The widget token for this layout.
    pub fn as_str(self) -> &'static str {
        match self {
            Layout::FitColumns => "fitColumns",
            Layout::FitData => "fitData",
            Layout::FitDataFill => "fitDataFill",
        }
    }
}

/// Sort direction for initial sorting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortDir {
    /// The widget token for this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }
}

/// Pagination mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pagination {
    /// Page through an inline dataset.
    Local,
    /// Page through a remote endpoint.
    Remote,
}

impl Pagination {
    /// The widget token for this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Pagination::Local => "local",
            Pagination::Remote => "remote",
        }
    }
}

/// Row range-selection mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeMode {
    /// Shift-click extends the selection.
    #[default]
    Highlight,
    /// Plain clicks toggle rows.
    Click,
}

impl RangeMode {
    /// The widget token for this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            RangeMode::Highlight => "highlight",
            RangeMode::Click => "click",
        }
    }
}

/// Vertical alignment of column header text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VertAlign {
    /// Align to the top of the header cell.
    #[default]
    Top,
    /// Center within the header cell.
    Middle,
    /// Align to the bottom of the header cell.
    Bottom,
}

impl VertAlign {
    /// The widget token for this alignment.
    pub fn as_str(self) -> &'static str {
        match self {
            VertAlign::Top => "top",
            VertAlign::Middle => "middle",
            VertAlign::Bottom => "bottom",
        }
    }
}

impl From<Layout> for OptionValue {
    fn from(layout: Layout) -> Self {
        OptionValue::Str(layout.as_str().to_string())
    }
}

impl From<SortDir> for OptionValue {
    fn from(dir: SortDir) -> Self {
        OptionValue::Str(dir.as_str().to_string())
    }
}

impl From<Pagination> for OptionValue {
    fn from(mode: Pagination) -> Self {
        OptionValue::Str(mode.as_str().to_string())
    }
}

impl From<RangeMode> for OptionValue {
    fn from(mode: RangeMode) -> Self {
        OptionValue::Str(mode.as_str().to_string())
    }
}

impl From<VertAlign> for OptionValue {
    fn from(align: VertAlign) -> Self {
        OptionValue::Str(align.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_serde_uses_widget_casing() {
        let json = serde_json::to_string(&Layout::FitDataFill).unwrap();
        assert_eq!(json, "\"fitDataFill\"");
        let parsed: Layout = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Layout::FitDataFill);
    }

    #[test]
    fn tokens_match_serde_form() {
        for layout in [Layout::FitColumns, Layout::FitData, Layout::FitDataFill] {
            let json = serde_json::to_string(&layout).unwrap();
            assert_eq!(json, format!("\"{}\"", layout.as_str()));
        }
        for dir in [SortDir::Asc, SortDir::Desc] {
            let json = serde_json::to_string(&dir).unwrap();
            assert_eq!(json, format!("\"{}\"", dir.as_str()));
        }
    }

    #[test]
    fn defaults_follow_widget_defaults() {
        assert_eq!(Layout::default(), Layout::FitColumns);
        assert_eq!(SortDir::default(), SortDir::Asc);
        assert_eq!(RangeMode::default(), RangeMode::Highlight);
        assert_eq!(VertAlign::default(), VertAlign::Top);
    }
}
