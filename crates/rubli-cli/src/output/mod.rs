use rubli_core::responses::{DeleteResponse, ListResponse, PaginatedResponse};
use rubli_state::Pagination;
use serde::Serialize;
use serde_json::Value;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::ui;

pub mod rows;
pub mod table;

pub use rows::{TableRow, percent};

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

/// Render a serializable response to a string in the requested format.
///
/// Table mode shows objects as key/value pairs and arrays of objects as one
/// row per element.
pub fn render<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_value_table(&serde_json::to_value(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Render rows with their typed table view; JSON formats serialize the rows
/// as-is.
pub fn render_rows<T: Serialize + TableRow>(
    rows: &[T],
    format: OutputFormat,
) -> anyhow::Result<String> {
    if format != OutputFormat::Table {
        return render(rows, format);
    }
    if rows.is_empty() {
        return Ok(String::from("(no rows)"));
    }
    let cells = rows.iter().map(TableRow::cells).collect::<Vec<_>>();
    Ok(table::render_table(T::HEADERS, &cells, table_options()))
}

pub fn output_rows<T: Serialize + TableRow>(rows: &[T], format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render_rows(rows, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print one page of a paginated list. Table mode shows the rows and a
/// cursor footer on stderr; JSON formats keep the whole envelope.
pub fn output_page<T: Serialize + TableRow>(
    response: &PaginatedResponse<T>,
    pagination: &Pagination,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if flags.format != OutputFormat::Table {
        return output(response, flags.format);
    }
    output_rows(&response.data, flags.format)?;
    note(&page_footer(pagination), flags.format, flags.quiet);
    Ok(())
}

/// Print an unpaginated `{ data, total }` list.
pub fn output_list<T: Serialize + TableRow>(
    response: &ListResponse<T>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if flags.format == OutputFormat::Table {
        output_rows(&response.data, flags.format)
    } else {
        output(response, flags.format)
    }
}

/// Print `value` as JSON, or as pre-formatted metric/value pairs in table
/// mode.
pub fn output_summary<T: Serialize + ?Sized>(
    value: &T,
    pairs: &[(&str, String)],
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if flags.format != OutputFormat::Table {
        return output(value, flags.format);
    }
    let rows = pairs
        .iter()
        .map(|(metric, value)| vec![(*metric).to_string(), value.clone()])
        .collect::<Vec<_>>();
    println!("{}", table::render_table(&["metric", "value"], &rows, table_options()));
    Ok(())
}

/// Report a delete acknowledgement.
pub fn output_deleted(
    what: &str,
    deleted: &DeleteResponse,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if flags.format != OutputFormat::Table {
        return output(deleted, flags.format);
    }
    if deleted.deleted {
        note(&format!("removed {what} {}", deleted.id), flags.format, flags.quiet);
    } else {
        tracing::warn!(id = deleted.id, "server reported nothing deleted");
        note(&format!("{what} {} was not removed", deleted.id), flags.format, flags.quiet);
    }
    Ok(())
}

/// Section heading between tables (table mode only).
pub fn heading(title: &str, flags: &GlobalFlags) {
    if flags.format == OutputFormat::Table {
        println!("\n{title}");
    }
}

fn page_footer(pagination: &Pagination) -> String {
    format!(
        "page {}/{} ({} rows)",
        pagination.page(),
        pagination.total_pages(),
        pagination.total()
    )
}

/// Status line for humans (stderr, table mode only, suppressed by `--quiet`).
pub fn note(message: &str, format: OutputFormat, quiet: bool) {
    if format == OutputFormat::Table && !quiet {
        eprintln!("{message}");
    }
}

fn render_value_table(value: &Value) -> anyhow::Result<String> {
    let options = table_options();
    match value {
        Value::Array(items) => Ok(render_array_table(items, options)),
        Value::Object(map) => {
            let rows = map
                .iter()
                .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
                .collect::<Vec<_>>();
            Ok(table::render_table(&["key", "value"], &rows, options))
        }
        scalar => Ok(value_to_cell(scalar)),
    }
}

fn render_array_table(items: &[Value], options: table::TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_table(&["value"], &rows, options);
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_table(&header_refs, &rows, options)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use rubli_state::Pagination;

    use super::{TableRow, page_footer, render, render_rows};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        value: u32,
    }

    impl TableRow for Example {
        const HEADERS: &'static [&'static str] = &["id", "value"];

        fn cells(&self) -> Vec<String> {
            vec![self.id.to_string(), self.value.to_string()]
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example { id: "x", value: 7 };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "x");
        assert_eq!(parsed["value"], 7);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Example { id: "x", value: 7 };
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_for_object_is_key_value() {
        let value = Example { id: "x", value: 7 };
        let out = render(&value, OutputFormat::Table).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.contains("key")));
        assert!(out.contains("value"));
    }

    #[test]
    fn empty_rows_say_so_in_table_mode() {
        let rows: Vec<Example> = Vec::new();
        assert_eq!(render_rows(&rows, OutputFormat::Table).unwrap(), "(no rows)");
        assert_eq!(render_rows(&rows, OutputFormat::Raw).unwrap(), "[]");
    }

    #[test]
    fn typed_rows_use_declared_headers() {
        let rows = vec![Example { id: "a", value: 1 }, Example { id: "b", value: 22 }];
        let out = render_rows(&rows, OutputFormat::Table).unwrap();
        let header = out.lines().next().unwrap();
        assert!(header.starts_with("id"));
        assert!(header.contains("value"));
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn footer_reports_cursor_and_total() {
        let mut pagination = Pagination::new(50);
        pagination.set_total(120);
        pagination.go_to(3);
        assert_eq!(page_footer(&pagination), "page 3/3 (120 rows)");
    }
}
