//! # Tabgrid - Column-Based Text Layout for Terminals
//!
//! `tabgrid` turns a collection of uniformly-keyed records into aligned,
//! fixed-width text: it measures content, sizes columns to fit an available
//! view width, wraps cell text, and pads every line without corrupting
//! embedded ANSI color codes.
//!
//! ## Core Concepts
//!
//! - [`Record`]: ordered map from column name to [`CellValue`]; column
//!   order is the first-seen order of keys across records
//! - [`Options`]: view width, default padding, per-column overrides
//! - [`Table`]: a laid-out table handle exposing `render` / `render_lines`
//! - Auto-sizing: columns get their natural width when the table fits;
//!   under overflow, resizable columns split the remaining budget evenly
//!   and space salvaged from over-provisioned columns is handed back
//!
//! ## Quick Start
//!
//! ```rust
//! use tabgrid::{render, records_from_json, Options};
//!
//! let records = records_from_json(&serde_json::json!([
//!     { "name": "Bob",        "age": "30" },
//!     { "name": "Alexandria", "age": "5" },
//! ]));
//!
//! let text = render(&records, &Options::new().view_width(40));
//! assert_eq!(text.lines().next(), Some(" Bob         30 "));
//! ```
//!
//! ## Width Rules
//!
//! - Explicit `width` wins over everything, clamps included
//! - Otherwise natural width = widest cell + padding, clamped to
//!   `max_width` then `min_width` (in that order)
//! - `nowrap` columns and columns whose content offers no break
//!   opportunity are never resized
//!
//! Widths are measured in code units after ANSI stripping, not in display
//! cells; wide (CJK) characters are not given special treatment.

mod measure;
mod resolve;
mod table;
mod term;
mod types;
pub mod wrap;

pub use measure::ColumnSpec;
pub use resolve::{auto_size, ColumnLayout};
pub use table::Table;
pub use term::{TtyProbe, WidthProbe, DEFAULT_VIEW_WIDTH};
pub use types::{BreakMode, CellFn, CellValue, ColumnOptions, Options, Padding, Record};

use serde_json::Value;

/// Render records as a single string, one trailing line terminator
/// included.
pub fn render(records: &[Record], options: &Options) -> String {
    Table::new(records, options).render()
}

/// Render records as one string per physical output line, without
/// terminators.
pub fn render_lines(records: &[Record], options: &Options) -> Vec<String> {
    Table::new(records, options).render_lines()
}

/// Build a reusable [`Table`] handle from records.
pub fn build_table(records: &[Record], options: &Options) -> Table {
    Table::new(records, options)
}

/// Convert a JSON array of objects into records. Key order is preserved;
/// non-object array elements are skipped, and a bare object becomes a
/// single record.
pub fn records_from_json(value: &Value) -> Vec<Record> {
    let objects: Vec<&serde_json::Map<String, Value>> = match value {
        Value::Array(items) => items.iter().filter_map(Value::as_object).collect(),
        Value::Object(map) => vec![map],
        _ => Vec::new(),
    };

    objects
        .into_iter()
        .map(|map| {
            map.iter()
                .map(|(k, v)| (k.clone(), CellValue::from(v.clone())))
                .collect()
        })
        .collect()
}
