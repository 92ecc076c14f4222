//! Content measurement: deriving column specifications from record data.
//!
//! This pass scans every resolved cell to find each column's natural width
//! (widest line), minimum wrappable width (longest unbreakable word), and
//! wrappability, all measured on ANSI-stripped text.

use console::strip_ansi_codes;
use indexmap::IndexSet;

use crate::types::{BreakMode, Options, Padding, Record};
use crate::wrap::{is_wrappable, longest_word};

/// One column's configuration plus content measurements. Immutable once
/// produced; width assignment happens in [`crate::resolve::auto_size`].
#[derive(Clone, Debug)]
pub struct ColumnSpec {
    /// Column name (the record key).
    pub name: String,
    /// Explicit width, padding included. Wins over all clamps.
    pub width: Option<usize>,
    /// Lower clamp on the generated width.
    pub min_width: Option<usize>,
    /// Upper clamp on the generated width.
    pub max_width: Option<usize>,
    /// Cells split on embedded newlines only; no wrapping.
    pub nowrap: bool,
    /// Word-break policy for this column.
    pub break_mode: Option<BreakMode>,
    /// Whether any cell offered a break opportunity.
    pub content_wrappable: bool,
    /// Widest stripped cell value, in code units.
    pub content_width: usize,
    /// Longest unbreakable word across all cells, in code units.
    pub min_content_width: usize,
    /// Pad strings around every cell of this column.
    pub padding: Padding,
}

/// A record materialized for one render: cell strings in column order,
/// `None` for keys the record never had.
pub(crate) type ResolvedRow = Vec<Option<String>>;

/// Resolve records into cell strings and derive column specs.
///
/// Cell callbacks are invoked exactly once here. Column order is the
/// first-seen order of keys across all records. Returns the specs together
/// with the per-record cell grid aligned to them.
pub(crate) fn measure(records: &[Record], options: &Options) -> (Vec<ColumnSpec>, Vec<ResolvedRow>) {
    let mut names: IndexSet<String> = IndexSet::new();
    for record in records {
        for name in record.keys() {
            names.insert(name.clone());
        }
    }

    let mut rows: Vec<ResolvedRow> = Vec::with_capacity(records.len());
    for record in records {
        let row = names
            .iter()
            .map(|name| record.get(name).map(|value| value.resolve()))
            .collect();
        rows.push(row);
    }

    let mut specs: Vec<ColumnSpec> = names
        .into_iter()
        .map(|name| new_spec(name, options))
        .collect();

    for row in &rows {
        for (spec, cell) in specs.iter_mut().zip(row) {
            let Some(text) = cell else { continue };
            let stripped = strip_ansi_codes(text);
            spec.content_width = spec.content_width.max(stripped.chars().count());
            spec.min_content_width = spec.min_content_width.max(longest_word(&stripped));
            spec.content_wrappable |= is_wrappable(&stripped);
        }
    }

    (specs, rows)
}

fn new_spec(name: String, options: &Options) -> ColumnSpec {
    let overrides = options.column_options(&name);
    ColumnSpec {
        width: overrides.and_then(|c| c.width),
        min_width: overrides.and_then(|c| c.min_width),
        max_width: overrides.and_then(|c| c.max_width),
        nowrap: overrides.and_then(|c| c.nowrap).unwrap_or(options.nowrap),
        break_mode: overrides.and_then(|c| c.break_mode).or(options.break_mode),
        // A global break policy overrides measurement: every column wraps.
        content_wrappable: options.break_mode.is_some(),
        content_width: 0,
        min_content_width: 0,
        padding: overrides
            .and_then(|c| c.padding.clone())
            .unwrap_or_else(|| options.padding.clone()),
        name,
    }
}

/// Filter out columns that are empty in every record: missing, null, or a
/// whitespace-only string. Defined non-string values keep a column alive.
pub(crate) fn elide_empty_columns(records: &[Record]) -> Vec<Record> {
    let mut names: IndexSet<&str> = IndexSet::new();
    for record in records {
        for name in record.keys() {
            names.insert(name.as_str());
        }
    }

    let empty: Vec<&str> = names
        .into_iter()
        .filter(|name| {
            records
                .iter()
                .all(|record| record.get(*name).map_or(true, |v| v.is_blank()))
        })
        .collect();

    if empty.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .map(|record| {
            record
                .iter()
                .filter(|(name, _)| !empty.contains(&name.as_str()))
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect()
        })
        .collect()
}
