//! Akuma response mappers.
//!
//! | Field | Wire key | Missing |
//! |-------|----------|---------|
//! | `sql` | `sql` | `""` (explain: the SQL that was sent) |
//! | `rows` | `rows` | `None` |
//! | `explanation` | `explanation` | `None` (explain: `""`) |
//! | `tables` | `tables` | `None` (schema: `0`) |
//! | `warnings` | `warnings` | `None` |
//! | `error` | `error` | `None` |
//! | `status` | `status` | `""` |

use super::types::{AkumaExplainResponse, AkumaQueryResponse, AkumaSchemaResponse};
use crate::utils::json;
use crate::JsonObject;

pub fn query_response(raw: &JsonObject) -> AkumaQueryResponse {
    AkumaQueryResponse {
        sql: json::string_or(raw, "sql", ""),
        rows: json::opt_object_list(raw, "rows"),
        explanation: json::opt_string(raw, "explanation"),
        tables: json::opt_string_list(raw, "tables"),
        warnings: json::opt_string_list(raw, "warnings"),
        error: json::opt_string(raw, "error"),
    }
}

pub fn explain_response(raw: &JsonObject, sent_sql: &str) -> AkumaExplainResponse {
    AkumaExplainResponse {
        sql: json::string_or(raw, "sql", sent_sql),
        explanation: json::string_or(raw, "explanation", ""),
    }
}

pub fn schema_response(raw: &JsonObject) -> AkumaSchemaResponse {
    AkumaSchemaResponse {
        status: json::string_or(raw, "status", ""),
        tables: json::u64_or(raw, "tables", 0),
    }
}
