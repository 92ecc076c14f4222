//! Core types for table configuration and record data.
//!
//! This module defines the data structures fed into the layout engine:
//! cell values, per-column padding, per-column overrides, and the global
//! options record.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How over-long words are broken when a wrappable cell is narrower than
/// its longest word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakMode {
    /// Wrap at word boundaries only; an unbreakable word keeps its own
    /// line even if it exceeds the column width.
    #[default]
    Word,
    /// Break anywhere: words longer than the column width are split at the
    /// width boundary.
    Anywhere,
}

/// Left/right pad strings applied around every cell of a column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Padding {
    /// String emitted before the cell content.
    pub left: String,
    /// String emitted after the cell content.
    pub right: String,
}

impl Default for Padding {
    fn default() -> Self {
        Padding {
            left: " ".to_string(),
            right: " ".to_string(),
        }
    }
}

impl Padding {
    /// Create padding from explicit left/right strings.
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Padding {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Padding with empty strings on both sides.
    pub fn none() -> Self {
        Padding::new("", "")
    }

    /// Combined length of both pad strings, in code units.
    pub fn len(&self) -> usize {
        self.left.chars().count() + self.right.chars().count()
    }

    /// True when both pad strings are empty.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
}

/// Callback form of a cell value, resolved once per render.
pub type CellFn = Arc<dyn Fn() -> String + Send + Sync>;

/// One cell's value before resolution.
///
/// Literal values carry JSON data: strings render as-is, `Null` renders as
/// the empty string, and any other value renders via its JSON text form.
/// Computed values are invoked exactly once per render, before content
/// measurement.
#[derive(Clone)]
pub enum CellValue {
    /// A plain value.
    Literal(Value),
    /// A callback producing the cell text.
    Computed(CellFn),
}

impl CellValue {
    /// Wrap a closure as a computed cell value.
    pub fn computed(f: impl Fn() -> String + Send + Sync + 'static) -> Self {
        CellValue::Computed(Arc::new(f))
    }

    /// Resolve to the string the layout engine will measure and wrap.
    pub fn resolve(&self) -> String {
        match self {
            CellValue::Literal(Value::Null) => String::new(),
            CellValue::Literal(Value::String(s)) => s.clone(),
            CellValue::Literal(other) => other.to_string(),
            CellValue::Computed(f) => f(),
        }
    }

    /// True when the value counts as empty for column elision: missing
    /// values are handled by the caller; here `Null` and whitespace-only
    /// strings qualify. Defined non-string values never count as empty.
    pub(crate) fn is_blank(&self) -> bool {
        match self {
            CellValue::Literal(Value::Null) => true,
            CellValue::Literal(Value::String(s)) => s.trim().is_empty(),
            _ => false,
        }
    }
}

impl fmt::Debug for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Literal(v) => f.debug_tuple("Literal").field(v).finish(),
            CellValue::Computed(_) => f.debug_tuple("Computed").field(&"<fn>").finish(),
        }
    }
}

impl From<Value> for CellValue {
    fn from(value: Value) -> Self {
        CellValue::Literal(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Literal(Value::String(value.to_string()))
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Literal(Value::String(value))
    }
}

/// One input record: an insertion-ordered mapping from column name to cell
/// value. Column order in the output is the first-seen order of keys across
/// all records.
pub type Record = IndexMap<String, CellValue>;

/// Per-column configuration overrides, matched against measured columns by
/// `name`. Entries that match no column are ignored.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ColumnOptions {
    /// Name of the column this entry configures.
    pub name: String,
    /// Padding override for this column.
    #[serde(default)]
    pub padding: Option<Padding>,
    /// Explicit width, padding included. Wins over all clamps.
    #[serde(default)]
    pub width: Option<usize>,
    /// Lower clamp on the generated width.
    #[serde(default, rename = "minWidth")]
    pub min_width: Option<usize>,
    /// Upper clamp on the generated width.
    #[serde(default, rename = "maxWidth")]
    pub max_width: Option<usize>,
    /// Disable wrapping; cell text splits on embedded newlines only.
    #[serde(default)]
    pub nowrap: Option<bool>,
    /// Word-break policy override for this column.
    #[serde(default, rename = "break")]
    pub break_mode: Option<BreakMode>,
}

impl ColumnOptions {
    /// Create an override entry for the named column.
    pub fn new(name: impl Into<String>) -> Self {
        ColumnOptions {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set an explicit width (padding included).
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the minimum width clamp.
    pub fn min_width(mut self, min_width: usize) -> Self {
        self.min_width = Some(min_width);
        self
    }

    /// Set the maximum width clamp.
    pub fn max_width(mut self, max_width: usize) -> Self {
        self.max_width = Some(max_width);
        self
    }

    /// Set the padding for this column.
    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Disable wrapping for this column.
    pub fn nowrap(mut self) -> Self {
        self.nowrap = Some(true);
        self
    }

    /// Set the word-break policy for this column.
    pub fn break_mode(mut self, mode: BreakMode) -> Self {
        self.break_mode = Some(mode);
        self
    }
}

/// Global table options.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Options {
    /// Default per-column padding.
    #[serde(default)]
    pub padding: Padding,
    /// Total row width budget. When unset, the terminal width is probed
    /// once at table construction, falling back to 80.
    #[serde(default, rename = "viewWidth")]
    pub view_width: Option<usize>,
    /// Drop columns whose cells are all missing or whitespace-only.
    #[serde(default, rename = "ignoreEmptyColumns")]
    pub ignore_empty_columns: bool,
    /// Per-column overrides, matched by name.
    #[serde(default)]
    pub columns: Vec<ColumnOptions>,
    /// Default nowrap flag, overridable per column.
    #[serde(default)]
    pub nowrap: bool,
    /// Default word-break policy. Setting this also marks every column as
    /// wrappable, overriding content measurement.
    #[serde(default, rename = "break")]
    pub break_mode: Option<BreakMode>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            padding: Padding::default(),
            view_width: None,
            ignore_empty_columns: false,
            columns: Vec::new(),
            nowrap: false,
            break_mode: None,
        }
    }
}

impl Options {
    /// Options with all defaults.
    pub fn new() -> Self {
        Options::default()
    }

    /// Set the row width budget.
    pub fn view_width(mut self, width: usize) -> Self {
        self.view_width = Some(width);
        self
    }

    /// Set the default padding.
    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Enable empty-column elision.
    pub fn ignore_empty_columns(mut self) -> Self {
        self.ignore_empty_columns = true;
        self
    }

    /// Add a per-column override.
    pub fn column(mut self, column: ColumnOptions) -> Self {
        self.columns.push(column);
        self
    }

    /// Set the global nowrap default.
    pub fn nowrap(mut self) -> Self {
        self.nowrap = true;
        self
    }

    /// Set the global word-break policy. This also forces every column to
    /// be treated as wrappable.
    pub fn break_mode(mut self, mode: BreakMode) -> Self {
        self.break_mode = Some(mode);
        self
    }

    /// Find the override entry for a column name, if any.
    pub(crate) fn column_options(&self, name: &str) -> Option<&ColumnOptions> {
        self.columns.iter().find(|c| c.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_default_is_single_spaces() {
        let padding = Padding::default();
        assert_eq!(padding.left, " ");
        assert_eq!(padding.right, " ");
        assert_eq!(padding.len(), 2);
        assert!(!padding.is_empty());
    }

    #[test]
    fn padding_len_counts_chars() {
        let padding = Padding::new("│ ", " │");
        assert_eq!(padding.len(), 4);
        assert!(Padding::none().is_empty());
    }

    #[test]
    fn cell_value_resolution() {
        assert_eq!(CellValue::from("hi").resolve(), "hi");
        assert_eq!(CellValue::Literal(Value::Null).resolve(), "");
        assert_eq!(
            CellValue::Literal(serde_json::json!(30)).resolve(),
            "30"
        );
        assert_eq!(
            CellValue::Literal(serde_json::json!(true)).resolve(),
            "true"
        );
        let computed = CellValue::computed(|| "made".to_string());
        assert_eq!(computed.resolve(), "made");
    }

    #[test]
    fn cell_value_blankness() {
        assert!(CellValue::Literal(Value::Null).is_blank());
        assert!(CellValue::from("   ").is_blank());
        assert!(CellValue::from("").is_blank());
        assert!(!CellValue::from("x").is_blank());
        // Defined non-strings are never blank.
        assert!(!CellValue::Literal(serde_json::json!(0)).is_blank());
        assert!(!CellValue::computed(String::new).is_blank());
    }

    #[test]
    fn options_fluent_api() {
        let options = Options::new()
            .view_width(60)
            .ignore_empty_columns()
            .nowrap()
            .break_mode(BreakMode::Anywhere)
            .column(ColumnOptions::new("id").width(8))
            .column(
                ColumnOptions::new("desc")
                    .min_width(10)
                    .max_width(40)
                    .padding(Padding::new("", " ")),
            );

        assert_eq!(options.view_width, Some(60));
        assert!(options.ignore_empty_columns);
        assert!(options.nowrap);
        assert_eq!(options.break_mode, Some(BreakMode::Anywhere));
        assert_eq!(options.column_options("id").and_then(|c| c.width), Some(8));
        assert_eq!(
            options.column_options("desc").and_then(|c| c.max_width),
            Some(40)
        );
        assert!(options.column_options("missing").is_none());
    }

    #[test]
    fn options_serde_uses_wire_names() {
        let json = serde_json::json!({
            "viewWidth": 40,
            "ignoreEmptyColumns": true,
            "columns": [{"name": "age", "maxWidth": 5, "break": "anywhere"}]
        });
        let options: Options = serde_json::from_value(json).unwrap();
        assert_eq!(options.view_width, Some(40));
        assert!(options.ignore_empty_columns);
        assert_eq!(options.columns[0].max_width, Some(5));
        assert_eq!(options.columns[0].break_mode, Some(BreakMode::Anywhere));
    }

    #[test]
    fn break_mode_serde_roundtrip() {
        for mode in [BreakMode::Word, BreakMode::Anywhere] {
            let json = serde_json::to_string(&mode).unwrap();
            let parsed: BreakMode = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, mode);
        }
    }
}
