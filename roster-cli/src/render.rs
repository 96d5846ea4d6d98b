//! Plain-text table output.

use unicode_width::UnicodeWidthStr;

const SEPARATOR: &str = " | ";

/// Render headers and rows as an aligned text table.
///
/// Widths are measured in terminal columns, so Thai combining marks do not
/// push cells out of line. Missing trailing cells render empty.
pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(cell.width());
        }
    }

    let mut out = String::new();
    push_line(&mut out, headers, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');
    for row in rows {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let padded: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(i, width)| {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            pad(cell, *width)
        })
        .collect();
    out.push_str(padded.join(SEPARATOR).trim_end());
    out.push('\n');
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_aligns_columns() {
        let out = render_table(
            &strings(&["ID", "Name"]),
            &[strings(&["1", "Somchai"]), strings(&["12", "Ploy"])],
        );
        assert_eq!(out, "ID | Name\n---+--------\n1  | Somchai\n12 | Ploy\n");
    }

    #[test]
    fn test_thai_marks_take_no_width() {
        // "ชื่อ" is four chars but two columns wide
        let out = render_table(&strings(&["A", "B"]), &[strings(&["ชื่อ", "x"]), strings(&["abc", "y"])]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[2], "ชื่อ  | x");
        assert_eq!(lines[3], "abc | y");
    }

    #[test]
    fn test_short_rows_render_empty_cells() {
        let out = render_table(&strings(&["A", "B"]), &[strings(&["1"])]);
        assert_eq!(out.lines().nth(2), Some("1"));
    }

    #[test]
    fn test_no_rows_still_prints_header() {
        let out = render_table(&strings(&["Status"]), &[]);
        assert_eq!(out, "Status\n------\n");
    }
}
