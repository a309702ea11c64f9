use rubli_core::format::truncate_label;

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned table for string rows.
///
/// Numeric-looking cells (including `$1.2M` and `45.0%`) are right-aligned.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
                .max(4)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| pad(&truncate_label(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.chars().count());

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let truncated = truncate_label(value, *width);
                let numeric = looks_numeric(&truncated);
                let padded = pad(&truncated, *width, numeric);
                if options.color {
                    colorize(&padded, &truncated)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    });

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line.trim_end().to_string());
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let separators = widths.len().saturating_sub(1) * 2;

    // Shave the widest shrinkable column one char at a time.
    while widths.iter().sum::<usize>() + separators > max_width {
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].chars().count().max(4))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);
        let Some(idx) = candidate else {
            break;
        };
        widths[idx] -= 1;
    }
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed.chars().any(|ch| ch.is_ascii_digit())
        && trimmed.chars().all(|ch| {
            ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ',' | '$' | '%' | 'T' | 'B' | 'M')
        })
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

/// Color risk levels and review states. `padded` is the aligned cell and
/// `plain` its unpadded text.
fn colorize(padded: &str, plain: &str) -> String {
    let code = match plain.trim().to_ascii_lowercase().as_str() {
        "low" | "valid" | "confirmed" | "resolved" | "active" | "true" => Some("32"),
        "medium" | "pending" | "watching" | "corroborated" => Some("33"),
        "high" | "investigating" => Some("31"),
        "critical" => Some("1;31"),
        "dismissed" | "archived" | "closed" => Some("2"),
        _ => None,
    };
    match code {
        Some(code) => format!("\u{1b}[{code}m{padded}\u{1b}[0m"),
        None => padded.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn columns_align_across_rows() {
        let rows = vec![
            vec!["1".to_string(), "IMSS".to_string(), "$1.2B".to_string()],
            vec!["200".to_string(), "ISSSTE".to_string(), "$950,000".to_string()],
        ];
        let table = render_table(&["id", "name", "value"], &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].ends_with("   $1.2B"));
        assert!(lines[3].ends_with("$950,000"));
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let rows = vec![vec![
            "1".to_string(),
            "Instituto Mexicano del Seguro Social".to_string(),
        ]];
        let table = render_table(
            &["id", "name"],
            &rows,
            TableOptions {
                max_width: Some(20),
                color: false,
            },
        );
        for line in table.lines() {
            assert!(line.chars().count() <= 20, "{line}");
        }
        assert!(table.contains('…'));
    }

    #[test]
    fn missing_cells_render_dash() {
        let rows = vec![vec!["1".to_string()]];
        let table = render_table(&["id", "name"], &rows, PLAIN);
        assert!(table.lines().nth(2).is_some_and(|l| l.ends_with('-')));
    }

    #[test]
    fn numeric_detection_covers_formatted_values() {
        assert!(looks_numeric("$1.2B"));
        assert!(looks_numeric("45.0%"));
        assert!(looks_numeric("-$3.4M"));
        assert!(!looks_numeric("-"));
        assert!(!looks_numeric("Bimbo"));
    }

    #[test]
    fn color_wraps_known_states() {
        let colored = colorize("high  ", "high");
        assert!(colored.starts_with("\u{1b}[31m"));
        assert_eq!(colorize("IMSS", "IMSS"), "IMSS");
    }
}
