//! Word-wrap primitives for cell text.
//!
//! Widths here are measured in code units on ANSI-stripped text; escape
//! sequences ride along invisibly and never count toward a line's width.

use console::strip_ansi_codes;

use crate::types::BreakMode;

/// Options for [`wrap`].
#[derive(Clone, Copy, Debug, Default)]
pub struct WrapOptions {
    /// Target line width in visible code units.
    pub width: usize,
    /// How to handle words longer than `width`.
    pub break_mode: BreakMode,
}

/// Visible width of a string: code units remaining after ANSI stripping.
pub fn visible_width(text: &str) -> usize {
    strip_ansi_codes(text).chars().count()
}

/// Number of invisible code units contributed by ANSI escapes.
pub fn ansi_overhead(text: &str) -> usize {
    text.chars().count() - visible_width(text)
}

/// True when the text offers at least one break opportunity (whitespace or
/// a hyphen).
pub fn is_wrappable(text: &str) -> bool {
    text.chars().any(|c| c.is_whitespace() || c == '-')
}

/// Length of the longest unbreakable run in the text, in visible code
/// units. Hyphens bind to the fragment they terminate.
pub fn longest_word(text: &str) -> usize {
    strip_ansi_codes(text)
        .split_whitespace()
        .flat_map(|word| word.split_inclusive('-'))
        .map(|fragment| fragment.chars().count())
        .max()
        .unwrap_or(0)
}

/// Wrap text into lines no wider than `options.width` visible code units.
///
/// Embedded newlines start fresh segments. Break opportunities are
/// whitespace and hyphens — the same ones [`is_wrappable`] and
/// [`longest_word`] count, so a width of at least `longest_word(text)`
/// guarantees no line overflows. A fragment wider than the target either
/// keeps its own overflowing line (`BreakMode::Word`) or is split at the
/// width boundary (`BreakMode::Anywhere`). The result is never empty:
/// empty input yields one empty line.
pub fn wrap(text: &str, options: &WrapOptions) -> Vec<String> {
    let mut lines = Vec::new();
    for segment in text.split('\n') {
        wrap_segment(segment, options, &mut lines);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn wrap_segment(segment: &str, options: &WrapOptions, lines: &mut Vec<String>) {
    // Fragments are hyphen-terminated runs within whitespace-separated
    // words; only the first fragment of a word needs a joining space.
    let mut fragments: Vec<(bool, &str)> = Vec::new();
    for word in segment.split_whitespace() {
        for (i, fragment) in word.split_inclusive('-').enumerate() {
            fragments.push((i == 0, fragment));
        }
    }
    if fragments.is_empty() {
        lines.push(String::new());
        return;
    }

    let mut current = String::new();
    let mut current_width = 0usize;

    for (starts_word, fragment) in fragments {
        let fragment_width = visible_width(fragment);

        if fragment_width > options.width && options.break_mode == BreakMode::Anywhere {
            for piece in break_visible(fragment, options.width.max(1)) {
                flush(lines, &mut current, &mut current_width);
                current_width = visible_width(&piece);
                current = piece;
            }
            continue;
        }

        let gap = usize::from(starts_word && !current.is_empty());
        if current.is_empty() {
            current = fragment.to_string();
            current_width = fragment_width;
        } else if current_width + gap + fragment_width <= options.width {
            if gap == 1 {
                current.push(' ');
            }
            current.push_str(fragment);
            current_width += gap + fragment_width;
        } else {
            flush(lines, &mut current, &mut current_width);
            current = fragment.to_string();
            current_width = fragment_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
}

fn flush(lines: &mut Vec<String>, current: &mut String, current_width: &mut usize) {
    if !current.is_empty() {
        lines.push(std::mem::take(current));
        *current_width = 0;
    }
}

/// Split a word into pieces of at most `width` visible code units, keeping
/// escape sequences attached to the piece they appear in.
fn break_visible(word: &str, width: usize) -> Vec<String> {
    let mut pieces = vec![String::new()];
    let mut visible = 0usize;
    let mut in_escape = false;

    for c in word.chars() {
        if in_escape {
            if let Some(piece) = pieces.last_mut() {
                piece.push(c);
            }
            if c == 'm' {
                in_escape = false;
            }
            continue;
        }
        if c == '\u{1b}' {
            in_escape = true;
            if let Some(piece) = pieces.last_mut() {
                piece.push(c);
            }
            continue;
        }
        if visible == width {
            pieces.push(String::new());
            visible = 0;
        }
        if let Some(piece) = pieces.last_mut() {
            piece.push(c);
            visible += 1;
        }
    }

    pieces
}
