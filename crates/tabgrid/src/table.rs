//! Table orchestration: load, wrap, assemble, render.
//!
//! A [`Table`] is built fresh from records and options. Construction runs
//! the full layout pipeline (elision, cell resolution, measurement,
//! auto-sizing); rendering replays the stored layout deterministically, so
//! repeated calls produce identical output.

use crate::measure::{elide_empty_columns, measure, ResolvedRow};
use crate::resolve::{auto_size, ColumnLayout};
use crate::term::{TtyProbe, WidthProbe, DEFAULT_VIEW_WIDTH};
use crate::types::{Options, Record};
use crate::wrap::{ansi_overhead, wrap, WrapOptions};

#[cfg(windows)]
const EOL: &str = "\r\n";
#[cfg(not(windows))]
const EOL: &str = "\n";

/// A laid-out table, ready to render.
pub struct Table {
    columns: Vec<ColumnLayout>,
    rows: Vec<ResolvedRow>,
}

impl Table {
    /// Build a table from records. The view width comes from the options,
    /// falling back to a one-shot terminal probe and then to 80.
    pub fn new(records: &[Record], options: &Options) -> Self {
        Table::with_probe(records, options, &TtyProbe)
    }

    /// Build a table with an explicit terminal-width probe. The probe is
    /// only consulted when the options carry no `view_width`.
    pub fn with_probe(records: &[Record], options: &Options, probe: &dyn WidthProbe) -> Self {
        let working;
        let records = if options.ignore_empty_columns {
            working = elide_empty_columns(records);
            working.as_slice()
        } else {
            records
        };

        let view_width = options
            .view_width
            .or_else(|| probe.columns())
            .unwrap_or(DEFAULT_VIEW_WIDTH);

        let (specs, rows) = measure(records, options);
        let columns = auto_size(&specs, view_width);
        Table { columns, rows }
    }

    /// The laid-out columns, in output order.
    pub fn columns(&self) -> &[ColumnLayout] {
        &self.columns
    }

    /// Render every physical output line, without line terminators.
    pub fn render_lines(&self) -> Vec<String> {
        let mut out = Vec::new();
        for row in &self.rows {
            let wrapped = self.wrap_row(row);
            let most_lines = wrapped.iter().map(Vec::len).max().unwrap_or(0);
            for i in 0..most_lines {
                let mut line = String::new();
                for (column, cell_lines) in self.columns.iter().zip(&wrapped) {
                    let text = cell_lines.get(i).map(String::as_str).unwrap_or("");
                    push_padded(&mut line, text, column);
                }
                out.push(line);
            }
        }
        out
    }

    /// Render the full table, one trailing line terminator included.
    pub fn render(&self) -> String {
        let mut out = self.render_lines().join(EOL);
        out.push_str(EOL);
        out
    }

    // Wrap pass: one line array per cell of the row.
    fn wrap_row(&self, row: &ResolvedRow) -> Vec<Vec<String>> {
        self.columns
            .iter()
            .zip(row)
            .map(|(column, cell)| {
                let text = cell.as_deref().unwrap_or("");
                if column.spec.nowrap {
                    text.split('\n').map(str::to_string).collect()
                } else {
                    wrap(
                        text,
                        &WrapOptions {
                            width: column.content_span(),
                            break_mode: column.spec.break_mode.unwrap_or_default(),
                        },
                    )
                }
            })
            .collect()
    }
}

// Pad the visible content to the column's content span; escape bytes are
// invisible, so the pad target grows by the ANSI overhead of this string.
fn push_padded(line: &mut String, text: &str, column: &ColumnLayout) {
    let target = column.content_span() + ansi_overhead(text);
    line.push_str(&column.spec.padding.left);
    line.push_str(text);
    for _ in text.chars().count()..target {
        line.push(' ');
    }
    line.push_str(&column.spec.padding.right);
}
