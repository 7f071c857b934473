use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// What a command hands back for printing.
#[derive(Debug)]
pub enum Reply {
    /// A structured response, rendered per `--format`.
    Json(Value),
    /// A finished document (HTML, the "None selected" sentinel), printed as is.
    Document(String),
}

impl Reply {
    pub fn json<T: Serialize>(value: &T) -> anyhow::Result<Self> {
        Ok(Self::Json(serde_json::to_value(value)?))
    }
}

/// Print a reply in the requested format.
pub fn emit(reply: &Reply, format: OutputFormat) -> anyhow::Result<()> {
    match reply {
        Reply::Json(value) => println!("{}", render(value, format)?),
        Reply::Document(text) => println!("{text}"),
    }
    Ok(())
}

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(render_table(
            &serde_json::to_value(value)?,
            ui::prefs().term_width,
        )),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Objects print their `message` first, then scalar fields as a key/value
/// table (nested objects flattened to dotted keys), then one table per
/// array field.
fn render_table(value: &Value, max_width: Option<usize>) -> String {
    let map = match value {
        Value::Object(map) => map,
        Value::Array(items) => return render_array_table(items, max_width),
        scalar => return value_to_cell(scalar),
    };

    let mut sections = Vec::new();
    if let Some(Value::String(message)) = map.get("message") {
        sections.push(message.clone());
    }

    let mut scalars = Vec::new();
    flatten_scalars("", map, &mut scalars);
    scalars.retain(|(key, _)| key != "message");
    if !scalars.is_empty() {
        let rows = scalars
            .into_iter()
            .map(|(key, value)| vec![key, value])
            .collect::<Vec<_>>();
        sections.push(table::render_table(&["key", "value"], &rows, max_width));
    }

    for (key, value) in map {
        if let Value::Array(items) = value {
            sections.push(format!("{key}:\n{}", render_array_table(items, max_width)));
        }
    }

    sections.join("\n\n")
}

fn flatten_scalars(prefix: &str, map: &Map<String, Value>, out: &mut Vec<(String, String)>) {
    for (key, value) in map {
        let key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::Object(nested) => flatten_scalars(&key, nested, out),
            Value::Array(_) => {}
            scalar => out.push((key, value_to_cell(scalar))),
        }
    }
}

fn render_array_table(items: &[Value], max_width: Option<usize>) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_table(&["value"], &rows, max_width);
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
                .map(|header| {
                    map.get(header)
                        .map_or_else(|| String::from("-"), value_to_cell)
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_table(&header_refs, &rows, max_width)
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
