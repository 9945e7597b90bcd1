//! Sōzō request and response types, plus CSV / JSON Lines export.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::JsonObject;

/// Direction of a requested correlation between two columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrelationType {
    Positive,
    Negative,
}

impl CorrelationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

/// Parameters of one generation run.
///
/// Either an inline `schema` (column name to generator spec, in column order)
/// or a predefined `schema_name` is required; both may be given.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerateRequest {
    pub records: u64,
    pub schema: Vec<(String, String)>,
    pub schema_name: Option<String>,
    /// `"col_a:col_b"` pair to direction.
    pub correlations: Vec<(String, CorrelationType)>,
    pub seed: Option<u64>,
}

impl GenerateRequest {
    pub fn new(records: u64) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Append an inline schema column, e.g. `column("mrr", "float:10-5000")`.
    pub fn column(mut self, name: impl Into<String>, spec: impl Into<String>) -> Self {
        self.schema.push((name.into(), spec.into()));
        self
    }

    pub fn schema_name(mut self, name: impl Into<String>) -> Self {
        self.schema_name = Some(name.into());
        self
    }

    pub fn correlation(mut self, pair: impl Into<String>, direction: CorrelationType) -> Self {
        self.correlations.push((pair.into(), direction));
        self
    }

    /// Fix the generator seed for reproducible output. `0` is a valid seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub(crate) fn has_schema_source(&self) -> bool {
        !self.schema.is_empty() || self.schema_name.as_deref().is_some_and(|n| !n.is_empty())
    }
}

/// Summary statistics for one generated column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SozoColumnStats {
    pub column_type: String,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub unique_count: Option<u64>,
    /// Category to occurrence count, for categorical columns.
    pub values: Option<BTreeMap<String, u64>>,
}

/// Generated records.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SozoGenerateResponse {
    pub columns: Vec<String>,
    pub rows: Vec<JsonObject>,
    pub stats: BTreeMap<String, SozoColumnStats>,
}

impl SozoGenerateResponse {
    /// Render the rows as CSV.
    ///
    /// The header lists `columns` verbatim. Cells follow column order; a
    /// missing or null cell is empty. Cells containing a comma or a double
    /// quote are quoted with inner quotes doubled. Lines are joined with
    /// `\n` and there is no trailing newline.
    ///
    /// Non-string values are written in their JSON text form, so booleans
    /// come out as `true` / `false` and numbers as the server sent them.
    pub fn to_csv(&self) -> String {
        let mut out = self.columns.join(",");
        for row in &self.rows {
            out.push('\n');
            for (i, column) in self.columns.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                push_csv_cell(&mut out, row.get(column));
            }
        }
        out
    }

    /// Render the rows as JSON Lines, one compact object per line, keys in
    /// the order the server sent them.
    pub fn to_jsonl(&self) -> String {
        let mut out = String::new();
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            // a string-keyed map of JSON values cannot fail to serialize
            out.push_str(&serde_json::to_string(row).unwrap_or_default());
        }
        out
    }
}

fn push_csv_cell(out: &mut String, value: Option<&Value>) {
    let text = match value {
        None | Some(Value::Null) => return,
        Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
        Some(other) => Cow::Owned(other.to_string()),
    };
    if text.contains(',') || text.contains('"') {
        out.push('"');
        out.push_str(&text.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(&text);
    }
}

/// A predefined server-side schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SozoSchemaInfo {
    pub name: String,
    /// Column name to generator spec.
    pub columns: BTreeMap<String, String>,
}
