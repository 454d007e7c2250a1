//! Plain aligned tables for `--format table`.

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN: usize = 4;
const GAP: &str = "  ";

/// Render `rows` under `headers`, shrinking the widest columns to fit
/// `max_width` and truncating cells with an ellipsis.
#[must_use]
pub fn render(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| display_len(h)).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(display_len(cell));
        }
    }
    if let Some(max_width) = options.max_width {
        shrink_to(&mut widths, headers, max_width);
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    let header_line = join_cells(headers.iter().copied(), &widths, false);
    lines.push("-".repeat(display_len(&header_line)));
    lines.insert(0, header_line);

    for row in rows {
        let cells = (0..widths.len()).map(|index| row.get(index).map_or("-", String::as_str));
        lines.push(join_cells(cells, &widths, options.color));
    }
    lines.join("\n")
}

fn join_cells<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize], color: bool) -> String {
    let mut out = Vec::with_capacity(widths.len());
    for (cell, width) in cells.zip(widths) {
        let text = truncate(cell, *width);
        let pad = " ".repeat(width.saturating_sub(display_len(&text)));
        let shown = if color { paint(&text) } else { text };
        if is_numeric(cell) {
            out.push(format!("{pad}{shown}"));
        } else {
            out.push(format!("{shown}{pad}"));
        }
    }
    out.join(GAP).trim_end().to_string()
}

fn shrink_to(widths: &mut [usize], headers: &[&str], max_width: usize) {
    let overhead = widths.len().saturating_sub(1) * GAP.len();
    let mut total: usize = widths.iter().sum::<usize>() + overhead;
    while total > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > headers[*index].len().max(MIN_COLUMN))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);
        let Some(index) = widest else {
            break;
        };
        widths[index] -= 1;
        total -= 1;
    }
}

fn display_len(value: &str) -> usize {
    value.chars().count()
}

fn truncate(value: &str, width: usize) -> String {
    if display_len(value) <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|ch| ch.is_ascii_digit() || ch == '-' || ch == '%')
        && value.chars().any(|ch| ch.is_ascii_digit())
}

/// Colour the words the task views care about: status, priority, deadline badges.
fn paint(value: &str) -> String {
    let code = match value {
        "completed" | "true" | "low" => Some("32"),
        "pending" | "medium" | "Due tomorrow" => Some("33"),
        "high" | "false" | "Due today" => Some("31"),
        v if v.starts_with("Overdue") => Some("1;31"),
        _ => None,
    };
    code.map_or_else(
        || value.to_string(),
        |code| format!("\u{1b}[{code}m{value}\u{1b}[0m"),
    )
}
