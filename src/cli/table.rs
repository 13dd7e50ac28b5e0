//! Plain-text table rendering for the transaction list and the summary.

use crate::cli::output::current_preferences;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    pub header: String,
    pub min_width: usize,
    pub max_width: Option<usize>,
    pub alignment: Alignment,
}

impl Column {
    pub fn left(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            min_width: 0,
            max_width: None,
            alignment: Alignment::Left,
        }
    }

    pub fn right(header: impl Into<String>) -> Self {
        Self {
            alignment: Alignment::Right,
            ..Self::left(header)
        }
    }

    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn min_width(mut self, width: usize) -> Self {
        self.min_width = width;
        self
    }
}

/// Column layout plus the rows to draw under it.
#[derive(Clone, Debug, Default)]
pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    pub padding: usize,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            padding: 1,
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Content width per column, bounded by each column's limits.
    pub fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let widest = self
                    .rows
                    .iter()
                    .filter_map(|row| row.get(idx))
                    .map(|cell| visible_width(cell))
                    .fold(visible_width(&column.header), usize::max);
                let width = widest.max(column.min_width);
                column.max_width.map_or(width, |max| width.min(max))
            })
            .collect()
    }

    fn line(&self, cells: &[String], widths: &[usize]) -> String {
        self.columns
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(idx, (column, width))| {
                let text = cells.get(idx).map(String::as_str).unwrap_or("");
                render_cell(text, *width, column.alignment, self.padding)
            })
            .collect::<Vec<_>>()
            .join(" ")
            .trim_end()
            .to_string()
    }

    /// Header, rule, then one line per row. No trailing newline.
    pub fn render(&self) -> String {
        let widths = self.widths();
        let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();

        let mut lines = vec![
            self.line(&header, &widths),
            horizontal_rule(&widths, self.padding),
        ];
        lines.extend(self.rows.iter().map(|row| self.line(row, &widths)));
        lines.join("\n")
    }
}

/// Length of `text` in characters, skipping ANSI escape sequences.
pub fn visible_width(text: &str) -> usize {
    segments(text).filter(|segment| !segment.is_escape).count()
}

struct Segment<'a> {
    text: &'a str,
    is_escape: bool,
}

fn segments(text: &str) -> impl Iterator<Item = Segment<'_>> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let len = if let Some(tail) = rest.strip_prefix("\u{1b}[") {
            let end = tail
                .bytes()
                .position(|byte| (0x40..=0x7E).contains(&byte))
                .map_or(tail.len(), |pos| pos + 1);
            2 + end
        } else {
            rest.chars().next().map_or(rest.len(), char::len_utf8)
        };
        let (head, tail) = rest.split_at(len);
        rest = tail;
        Some(Segment {
            text: head,
            is_escape: head.starts_with('\u{1b}'),
        })
    })
}

/// Shortens `text` to `width` visible characters, ending with `…`.
pub fn truncate(text: &str, width: usize) -> String {
    if visible_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut visible = 0;
    let mut styled = false;
    for segment in segments(text) {
        if segment.is_escape {
            styled = true;
            out.push_str(segment.text);
        } else if visible + 1 < width {
            out.push_str(segment.text);
            visible += 1;
        } else {
            break;
        }
    }
    out.push('…');
    if styled {
        out.push_str("\u{1b}[0m");
    }
    out
}

pub fn render_cell(text: &str, width: usize, alignment: Alignment, padding: usize) -> String {
    let fitted = truncate(text, width);
    let gap = " ".repeat(width.saturating_sub(visible_width(&fitted)));
    let pad = " ".repeat(padding);
    match alignment {
        Alignment::Left => format!("{pad}{fitted}{gap}{pad}"),
        Alignment::Right => format!("{pad}{gap}{fitted}{pad}"),
    }
}

pub fn horizontal_rule(widths: &[usize], padding: usize) -> String {
    if widths.is_empty() {
        return String::new();
    }
    let total: usize = widths.iter().map(|width| width + padding * 2).sum::<usize>()
        + widths.len().saturating_sub(1);
    let ch = if current_preferences().color { '─' } else { '-' };
    ch.to_string().repeat(total)
}
