//! Width resolution for table columns.
//!
//! Assigns each column its final width from the content measurements and
//! the available view width. Runs in two phases: natural width with
//! clamping, then a single redistribution pass when the table overflows.

use crate::measure::ColumnSpec;

/// A column with its assigned width. Output of [`auto_size`]; never
/// mutated afterward.
#[derive(Clone, Debug)]
pub struct ColumnLayout {
    /// The measured column specification.
    pub spec: ColumnSpec,
    /// Final width in code units, padding included.
    pub generated_width: usize,
}

impl ColumnLayout {
    /// Width available to cell content: generated width minus padding.
    pub fn content_span(&self) -> usize {
        self.generated_width.saturating_sub(self.spec.padding.len())
    }

    /// Whether this column is exempt from redistribution: explicit width,
    /// nowrap, or content with no break opportunity.
    fn is_fixed(&self) -> bool {
        self.spec.width.is_some() || self.spec.nowrap || !self.spec.content_wrappable
    }

    /// The phase-one width formula: explicit width, else content plus
    /// padding.
    fn natural_width(&self) -> usize {
        self.spec
            .width
            .unwrap_or(self.spec.content_width + self.spec.padding.len())
    }
}

/// Assign a width to every column.
///
/// Phase one gives each column its natural width, clamped to
/// `max_width`/`min_width` in that order (an explicit `width` skips the
/// clamps). If the resulting total exceeds `view_width`, a single
/// redistribution pass splits the budget left by fixed columns evenly over
/// the resizable ones, then hands back space salvaged from columns that
/// received more than their content needs — fixed columns included, so a
/// clamped-up column can still cede space to a clamped-down one. Widths
/// are never re-clamped after redistribution.
pub fn auto_size(specs: &[ColumnSpec], view_width: usize) -> Vec<ColumnLayout> {
    let mut columns: Vec<ColumnLayout> = specs
        .iter()
        .map(|spec| {
            let mut layout = ColumnLayout {
                spec: spec.clone(),
                generated_width: 0,
            };
            layout.generated_width = layout.natural_width();
            if layout.spec.width.is_none() {
                clamp(&mut layout);
            }
            layout
        })
        .collect();

    let total: usize = columns.iter().map(|c| c.generated_width).sum();
    if total <= view_width {
        return columns;
    }

    let resizable_count = columns.iter().filter(|c| !c.is_fixed()).count();
    if resizable_count > 0 {
        let total_fixed: usize = columns
            .iter()
            .filter(|c| c.is_fixed())
            .map(|c| c.generated_width)
            .sum();
        let resizable_budget = view_width.saturating_sub(total_fixed);
        let share = resizable_budget / resizable_count;

        for column in columns.iter_mut().filter(|c| !c.is_fixed()) {
            column.generated_width = share;
        }
    }

    // Columns that ended up wider than their content revert to natural
    // width; the difference is handed to the ones that came up short.
    let mut salvaged: i64 = 0;
    let mut shrunk_count = 0usize;
    for column in columns.iter_mut() {
        if column.generated_width > column.spec.content_width {
            let before = column.generated_width;
            column.generated_width = column.natural_width();
            salvaged += before as i64 - column.generated_width as i64;
        } else if column.generated_width < column.spec.content_width {
            shrunk_count += 1;
        }
    }

    if shrunk_count > 0 {
        let bonus = salvaged.div_euclid(shrunk_count as i64);
        for column in columns.iter_mut() {
            if column.generated_width < column.spec.content_width {
                let widened = column.generated_width as i64 + bonus;
                column.generated_width = widened.max(0) as usize;
            }
        }
    }

    columns
}

// Max-check first, then min-check: a max below min silently resolves to
// the min. The effective minimum defaults to the longest unbreakable word
// plus padding.
fn clamp(layout: &mut ColumnLayout) {
    if let Some(max) = layout.spec.max_width {
        if layout.generated_width > max {
            layout.generated_width = max;
        }
    }
    let min = layout
        .spec
        .min_width
        .unwrap_or(layout.spec.min_content_width + layout.spec.padding.len());
    if layout.generated_width < min {
        layout.generated_width = min;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Padding;

    fn spec(content_width: usize, min_content_width: usize, wrappable: bool) -> ColumnSpec {
        ColumnSpec {
            name: "c".to_string(),
            width: None,
            min_width: None,
            max_width: None,
            nowrap: false,
            break_mode: None,
            content_wrappable: wrappable,
            content_width,
            min_content_width,
            padding: Padding::default(),
        }
    }

    fn widths(columns: &[ColumnLayout]) -> Vec<usize> {
        columns.iter().map(|c| c.generated_width).collect()
    }

    #[test]
    fn natural_widths_when_table_fits() {
        // Padded naturals 12 and 4; plenty of room at 40.
        let specs = vec![spec(10, 10, false), spec(2, 2, false)];
        let columns = auto_size(&specs, 40);
        assert_eq!(widths(&columns), vec![12, 4]);
    }

    #[test]
    fn explicit_width_wins_over_clamps() {
        let mut s = spec(10, 10, false);
        s.width = Some(30);
        s.max_width = Some(5);
        let columns = auto_size(&[s], 80);
        assert_eq!(widths(&columns), vec![30]);
    }

    #[test]
    fn max_clamp_applies_before_min() {
        // max 4 pulls the natural 12 down, then the defaulted minimum
        // (longest word 10 + padding 2) pushes it back up.
        let mut s = spec(10, 10, false);
        s.max_width = Some(4);
        let columns = auto_size(&[s], 80);
        assert_eq!(widths(&columns), vec![12]);
    }

    #[test]
    fn misconfigured_bounds_resolve_to_min() {
        let mut s = spec(20, 3, true);
        s.max_width = Some(6);
        s.min_width = Some(10);
        let columns = auto_size(&[s], 80);
        assert_eq!(widths(&columns), vec![10]);
    }

    #[test]
    fn equal_split_under_overflow() {
        // Three resizable columns, padded naturals 30/10/10, view 20.
        // Budget 20 over 3 columns: 6 each; all shrunk, nothing salvaged.
        let specs = vec![spec(28, 4, true), spec(8, 4, true), spec(8, 4, true)];
        let columns = auto_size(&specs, 20);
        assert_eq!(widths(&columns), vec![6, 6, 6]);
    }

    #[test]
    fn salvage_flows_from_grown_to_shrunk() {
        // Budget 30 over two resizable columns: 15 each. The narrow column
        // (content 4) reverts to its natural 6, salvaging 9 for the wide
        // one: 15 + 9 = 24.
        let specs = vec![spec(40, 6, true), spec(4, 4, true)];
        let columns = auto_size(&specs, 30);
        assert_eq!(widths(&columns), vec![24, 6]);
        assert_eq!(columns.iter().map(|c| c.generated_width).sum::<usize>(), 30);
    }

    #[test]
    fn fixed_columns_keep_their_width_under_overflow() {
        let mut fixed = spec(10, 10, false);
        fixed.width = Some(14);
        let specs = vec![fixed, spec(40, 6, true)];
        // Budget: 30 - 14 = 16 for the single resizable column.
        let columns = auto_size(&specs, 30);
        assert_eq!(widths(&columns), vec![14, 16]);
    }

    #[test]
    fn nowrap_and_unwrappable_columns_are_fixed() {
        let mut nowrap = spec(6, 6, true);
        nowrap.nowrap = true;
        let unwrappable = spec(8, 8, false);
        let specs = vec![nowrap, unwrappable, spec(40, 6, true)];
        let columns = auto_size(&specs, 30);
        // Fixed: 8 + 10 = 18; resizable budget 12.
        assert_eq!(widths(&columns), vec![8, 10, 12]);
    }

    #[test]
    fn all_fixed_overflow_leaves_phase_one_widths() {
        let specs = vec![spec(20, 20, false), spec(20, 20, false)];
        let columns = auto_size(&specs, 10);
        assert_eq!(widths(&columns), vec![22, 22]);
    }

    #[test]
    fn all_fixed_grown_and_shrunk_still_trade_space() {
        // No resizable column, but the salvage pass still runs: the column
        // clamped up by min_width reverts to its natural 5, and the 15
        // salvaged units go to the column clamped down by max_width.
        let mut grown = spec(3, 3, false);
        grown.min_width = Some(20);
        let mut shrunk = spec(10, 3, false);
        shrunk.max_width = Some(5);
        let columns = auto_size(&[grown, shrunk], 10);
        assert_eq!(widths(&columns), vec![5, 20]);
    }

    #[test]
    fn no_redistribution_at_exact_fit() {
        let specs = vec![spec(8, 8, true), spec(8, 8, true)];
        let columns = auto_size(&specs, 20);
        assert_eq!(widths(&columns), vec![10, 10]);
    }

    #[test]
    fn content_span_subtracts_padding() {
        let columns = auto_size(&[spec(10, 10, false)], 80);
        assert_eq!(columns[0].content_span(), 10);
    }

    #[test]
    fn min_width_not_reclamped_after_redistribution() {
        // The wide column's min_width is 25, but redistribution shrinks it
        // to the equal share without a second clamping pass.
        let mut wide = spec(40, 6, true);
        wide.min_width = Some(25);
        let specs = vec![wide, spec(30, 6, true)];
        let columns = auto_size(&specs, 20);
        assert_eq!(widths(&columns), vec![10, 10]);
    }
}
