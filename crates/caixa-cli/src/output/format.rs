use std::cmp;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
pub struct Column<'a> {
    pub name: &'a str,
    pub align: Align,
}

const INDENT: usize = 2;
const COLUMN_GAP: usize = 2;
const MAX_BAR_WIDTH: usize = 30;

pub fn terminal_width() -> usize {
    let from_env = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(120);
    cmp::max(from_env, 40)
}

pub fn key_value_rows(entries: &[(&str, String)], indent: usize) -> Vec<String> {
    if entries.is_empty() {
        return Vec::new();
    }

    let label_width = entries
        .iter()
        .map(|(label, _)| display_width(label))
        .max()
        .unwrap_or(0);
    let padding = " ".repeat(indent);

    entries
        .iter()
        .map(|(label, value)| {
            format!("{padding}{}  {value}", pad(label, label_width, Align::Left))
        })
        .collect()
}

/// Renders a header row plus data rows with columns sized to their
/// content. Cells wider than the fitted width wrap onto continuation
/// lines rather than truncating.
pub fn render_table(columns: &[Column<'_>], rows: &[Vec<String>], max_width: usize) -> Vec<String> {
    if columns.is_empty() {
        return Vec::new();
    }

    let mut widths = natural_column_widths(columns, rows);
    let gap_total = COLUMN_GAP * columns.len().saturating_sub(1);
    let budget = max_width.saturating_sub(INDENT + gap_total);
    shrink_to_budget(&mut widths, columns, budget);

    let header = columns
        .iter()
        .map(|column| column.name.to_string())
        .collect::<Vec<String>>();

    let mut output = vec![format_row(columns, &header, &widths)];
    for row in rows {
        let wrapped = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map(String::as_str).unwrap_or("");
                wrap_text(value, *width)
            })
            .collect::<Vec<Vec<String>>>();

        let line_count = wrapped.iter().map(Vec::len).max().unwrap_or(1);
        for line_index in 0..line_count {
            let cells = wrapped
                .iter()
                .map(|chunks| chunks.get(line_index).cloned().unwrap_or_default())
                .collect::<Vec<String>>();
            output.push(format_row(columns, &cells, &widths));
        }
    }

    output
}

/// A horizontal text bar proportional to `value` within `max_value`.
/// Zero and zero-scale values render as an empty bar.
pub fn bar(value: f64, max_value: f64) -> String {
    if value <= 0.0 || max_value <= 0.0 {
        return String::new();
    }

    let scaled = (value / max_value * MAX_BAR_WIDTH as f64).round() as usize;
    "#".repeat(cmp::max(scaled, 1))
}

/// Column widths count characters, not bytes. The pt-BR labels carry
/// multi-byte characters and byte lengths would misalign them.
fn display_width(value: &str) -> usize {
    value.chars().count()
}

fn pad(value: &str, width: usize, align: Align) -> String {
    let padding = width.saturating_sub(display_width(value));
    match align {
        Align::Left => format!("{value}{}", " ".repeat(padding)),
        Align::Right => format!("{}{value}", " ".repeat(padding)),
    }
}

fn natural_column_widths(columns: &[Column<'_>], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths = columns
        .iter()
        .map(|column| display_width(column.name))
        .collect::<Vec<usize>>();

    for row in rows {
        for (index, value) in row.iter().enumerate() {
            if let Some(slot) = widths.get_mut(index) {
                *slot = cmp::max(*slot, display_width(value));
            }
        }
    }

    widths
}

/// Shrinks the widest columns first until the total fits the budget,
/// never going below a column's header width.
fn shrink_to_budget(widths: &mut [usize], columns: &[Column<'_>], budget: usize) {
    let floors = columns
        .iter()
        .map(|column| display_width(column.name))
        .collect::<Vec<usize>>();

    while widths.iter().sum::<usize>() > budget {
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > *floors.get(*index).unwrap_or(&0))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);

        let Some(index) = candidate else {
            return;
        };
        widths[index] -= 1;
    }
}

fn format_row(columns: &[Column<'_>], cells: &[String], widths: &[usize]) -> String {
    let pieces = columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            let width = *widths.get(index).unwrap_or(&0);
            let value = cells.get(index).map(String::as_str).unwrap_or("");
            pad(value, width, column.align)
        })
        .collect::<Vec<String>>();

    format!("{}{}", " ".repeat(INDENT), pieces.join("  "))
        .trim_end()
        .to_string()
}

fn wrap_text(value: &str, width: usize) -> Vec<String> {
    if width == 0 || display_width(value) <= width {
        return vec![value.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in value.split_whitespace() {
        let word_width = display_width(word);
        if current.is_empty() {
            if word_width <= width {
                current.push_str(word);
            } else {
                lines.extend(split_long_token(word, width));
            }
            continue;
        }

        if display_width(&current) + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            if word_width <= width {
                current.push_str(word);
            } else {
                lines.extend(split_long_token(word, width));
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    if lines.is_empty() {
        return split_long_token(value, width);
    }

    lines
}

fn split_long_token(token: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![token.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();

    for ch in token.chars() {
        current.push(ch);
        if display_width(&current) == width {
            chunks.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}
