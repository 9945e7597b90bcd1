//! Akuma request and response types.

use serde::Serialize;

use crate::JsonObject;

/// Target SQL flavour for a translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SqlDialect {
    Postgres,
    Mysql,
    Snowflake,
    Bigquery,
    Sqlite,
    Redshift,
    Clickhouse,
}

impl SqlDialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Mysql => "mysql",
            Self::Snowflake => "snowflake",
            Self::Bigquery => "bigquery",
            Self::Sqlite => "sqlite",
            Self::Redshift => "redshift",
            Self::Clickhouse => "clickhouse",
        }
    }
}

/// What the server should do with the generated SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QueryMode {
    #[default]
    SqlOnly,
    SqlAndResults,
    Explain,
}

impl QueryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SqlOnly => "sql-only",
            Self::SqlAndResults => "sql-and-results",
            Self::Explain => "explain",
        }
    }
}

/// Client-declared safety constraints on the generated SQL.
///
/// Unset limits and empty lists are left out of the payload entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Guardrails {
    pub read_only: bool,
    #[serde(skip_serializing_if = "is_unset_list")]
    pub allow_tables: Option<Vec<String>>,
    #[serde(skip_serializing_if = "is_unset_list")]
    pub deny_tables: Option<Vec<String>>,
    #[serde(skip_serializing_if = "is_unset_list")]
    pub deny_columns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "is_unset_limit")]
    pub max_rows: Option<u32>,
    #[serde(skip_serializing_if = "is_unset_limit")]
    pub timeout_secs: Option<u32>,
}

impl Default for Guardrails {
    fn default() -> Self {
        Self {
            read_only: true,
            allow_tables: None,
            deny_tables: None,
            deny_columns: None,
            max_rows: None,
            timeout_secs: None,
        }
    }
}

impl Guardrails {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn allow_tables<I, S>(mut self, tables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_tables = Some(tables.into_iter().map(Into::into).collect());
        self
    }

    pub fn deny_tables<I, S>(mut self, tables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.deny_tables = Some(tables.into_iter().map(Into::into).collect());
        self
    }

    pub fn deny_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.deny_columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    pub fn max_rows(mut self, rows: u32) -> Self {
        self.max_rows = Some(rows);
        self
    }

    pub fn timeout_secs(mut self, secs: u32) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

/// Body of `POST /v1/akuma/query`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    pub dialect: SqlDialect,
    pub prompt: String,
    pub mode: QueryMode,
    #[serde(skip_serializing_if = "is_unset_limit")]
    pub max_rows: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guardrails: Option<Guardrails>,
}

impl QueryRequest {
    pub fn new(dialect: SqlDialect, prompt: impl Into<String>) -> Self {
        Self {
            dialect,
            prompt: prompt.into(),
            mode: QueryMode::default(),
            max_rows: None,
            guardrails: None,
        }
    }

    pub fn mode(mut self, mode: QueryMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn max_rows(mut self, rows: u32) -> Self {
        self.max_rows = Some(rows);
        self
    }

    pub fn guardrails(mut self, guardrails: Guardrails) -> Self {
        self.guardrails = Some(guardrails);
        self
    }
}

/// Column description used as schema context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AkumaColumn {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: String,
    pub nullable: bool,
    pub description: String,
    #[serde(skip_serializing_if = "is_unset_list")]
    pub examples: Option<Vec<String>>,
}

impl AkumaColumn {
    pub fn new(name: impl Into<String>, column_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_type: column_type.into(),
            nullable: false,
            description: String::new(),
            examples: None,
        }
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn examples<I, S>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.examples = Some(examples.into_iter().map(Into::into).collect());
        self
    }
}

/// Foreign key relationship between two tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AkumaForeignKey {
    pub columns: Vec<String>,
    pub ref_table: String,
    pub ref_columns: Vec<String>,
}

impl AkumaForeignKey {
    pub fn new<I, J, S, T>(columns: I, ref_table: impl Into<String>, ref_columns: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            ref_table: ref_table.into(),
            ref_columns: ref_columns.into_iter().map(Into::into).collect(),
        }
    }
}

/// Table description used as schema context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AkumaTable {
    pub name: String,
    pub description: String,
    pub columns: Vec<AkumaColumn>,
    #[serde(skip_serializing_if = "is_unset_list")]
    pub primary_key: Option<Vec<String>>,
    #[serde(skip_serializing_if = "is_unset_list")]
    pub foreign_keys: Option<Vec<AkumaForeignKey>>,
}

impl AkumaTable {
    pub fn new(name: impl Into<String>, columns: Vec<AkumaColumn>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            columns,
            primary_key: None,
            foreign_keys: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn primary_key<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.primary_key = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    pub fn foreign_key(mut self, fk: AkumaForeignKey) -> Self {
        self.foreign_keys.get_or_insert_with(Vec::new).push(fk);
        self
    }
}

/// Result of a translation.
///
/// A populated `error` is a soft failure reported by the server inside a
/// successful response; `sql` may still hold a partial translation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AkumaQueryResponse {
    pub sql: String,
    pub rows: Option<Vec<JsonObject>>,
    pub explanation: Option<String>,
    pub tables: Option<Vec<String>>,
    pub warnings: Option<Vec<String>>,
    pub error: Option<String>,
}

impl AkumaQueryResponse {
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AkumaExplainResponse {
    pub sql: String,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AkumaSchemaResponse {
    pub status: String,
    /// Number of tables the server accepted.
    pub tables: u64,
}

fn is_unset_list<T>(list: &Option<Vec<T>>) -> bool {
    list.as_ref().map_or(true, Vec::is_empty)
}

fn is_unset_limit(limit: &Option<u32>) -> bool {
    matches!(limit, None | Some(0))
}
