use docscope::complexity::ProjectAttributes;
use docscope::error::AppError;
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

const LIST_COLUMN: &str = "stakeholder_types";

pub(crate) fn load_project(path: &Path) -> Result<ProjectAttributes, AppError> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

pub(crate) fn load_projects_csv(path: &Path) -> Result<Vec<ProjectAttributes>, AppError> {
    let file = File::open(path)?;
    parse_projects(file)
        .map_err(|err| AppError::Input(format!("{}: {err}", path.display())))
}

/// Parse a project export with one attribute per column.
///
/// Blank cells are missing attributes. A cell that does not fit its attribute only defaults
/// that attribute; the rest of the row is still scored. `stakeholder_types` is a `;`-separated
/// list.
pub(crate) fn parse_projects<R: Read>(reader: R) -> Result<Vec<ProjectAttributes>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader
        .deserialize::<BTreeMap<String, String>>()
        .map(|row| row.map(row_attributes))
        .collect()
}

fn row_attributes(row: BTreeMap<String, String>) -> ProjectAttributes {
    let fields: Map<String, Value> = row
        .into_iter()
        .filter(|(_, cell)| !cell.is_empty())
        .map(|(column, cell)| {
            let value = if column == LIST_COLUMN {
                Value::Array(split_list(&cell).into_iter().map(Value::String).collect())
            } else {
                cell_value(cell)
            };
            (column, value)
        })
        .collect();

    ProjectAttributes::from(fields)
}

/// Numeric-looking cells become JSON numbers; everything else stays text.
fn cell_value(cell: String) -> Value {
    if let Ok(count) = cell.parse::<u64>() {
        return Value::from(count);
    }
    if let Ok(count) = cell.parse::<i64>() {
        return Value::from(count);
    }
    match cell.parse::<f64>().ok().and_then(Number::from_f64) {
        Some(amount) => Value::Number(amount),
        None => Value::String(cell),
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
