use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// A record with a hand-picked column layout for `--format table`.
pub trait Tabular {
    fn headers() -> &'static [&'static str];
    fn row(&self) -> Vec<String>;
}

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => Ok(render_value_table(&serde_json::to_value(value)?)),
    }
}

/// Render records using their [`Tabular`] layout in table mode.
pub fn render_rows<T: Serialize + Tabular>(rows: &[T], format: OutputFormat) -> anyhow::Result<String> {
    if format != OutputFormat::Table {
        return render(&rows, format);
    }
    if rows.is_empty() {
        return Ok(String::from("(no rows)"));
    }
    let cells = rows.iter().map(Tabular::row).collect::<Vec<_>>();
    Ok(table::render(T::headers(), &cells, table_options()))
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

pub fn output_rows<T: Serialize + Tabular>(rows: &[T], format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render_rows(rows, format)?);
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_value_table(value: &Value) -> String {
    let options = table_options();
    match value {
        Value::Object(map) => {
            let rows = map
                .iter()
                .map(|(key, value)| vec![key.clone(), cell(value)])
                .collect::<Vec<_>>();
            table::render(&["field", "value"], &rows, options)
        }
        Value::Array(items) if items.is_empty() => String::from("(no rows)"),
        Value::Array(items) if items.iter().all(Value::is_object) => {
            let mut headers: Vec<&str> = Vec::new();
            for key in items.iter().filter_map(Value::as_object).flat_map(|map| map.keys()) {
                if !headers.contains(&key.as_str()) {
                    headers.push(key.as_str());
                }
            }
            let rows = items
                .iter()
                .filter_map(Value::as_object)
                .map(|map| {
                    headers
                        .iter()
                        .map(|header| map.get(*header).map_or_else(|| String::from("-"), cell))
                        .collect::<Vec<String>>()
                })
                .collect::<Vec<_>>();
            table::render(&headers, &rows, options)
        }
        Value::Array(items) => {
            let rows = items.iter().map(|item| vec![cell(item)]).collect::<Vec<_>>();
            table::render(&["value"], &rows, options)
        }
        scalar => cell(scalar),
    }
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(text) => text.clone(),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        Value::Array(items) => format!("[{} items]", items.len()),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::{Tabular, render, render_rows};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        id: i64,
        title: &'static str,
    }

    impl Tabular for Example {
        fn headers() -> &'static [&'static str] {
            &["#", "title"]
        }

        fn row(&self) -> Vec<String> {
            vec![self.id.to_string(), self.title.to_string()]
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&Example { id: 7, title: "x" }, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], 7);
        assert!(out.contains('\n'));
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&Example { id: 7, title: "x" }, OutputFormat::Raw).expect("raw render should work");
        assert_eq!(out, r#"{"id":7,"title":"x"}"#);
    }

    #[test]
    fn object_table_lists_fields() {
        let out = render(&Example { id: 7, title: "x" }, OutputFormat::Table).expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("field"));
        assert!(lines[2].starts_with("id"));
        assert!(lines[3].starts_with("title"));
    }

    #[test]
    fn tabular_rows_use_declared_columns() {
        let rows = [Example { id: 1, title: "Essay" }, Example { id: 2, title: "Lab" }];
        let out = render_rows(&rows, OutputFormat::Table).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.starts_with("#")));
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn tabular_rows_fall_back_to_json_array() {
        let rows = [Example { id: 1, title: "Essay" }];
        let out = render_rows(&rows, OutputFormat::Raw).expect("raw render should work");
        assert_eq!(out, r#"[{"id":1,"title":"Essay"}]"#);
    }

    #[test]
    fn empty_rows_say_so() {
        let rows: [Example; 0] = [];
        let out = render_rows(&rows, OutputFormat::Table).expect("table render should work");
        assert_eq!(out, "(no rows)");
    }
}
