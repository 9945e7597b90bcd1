//! Akuma: natural-language-to-SQL translation.

pub mod client;
pub mod mapping;
pub mod types;

pub use client::AkumaClient;
pub use types::{
    AkumaColumn, AkumaExplainResponse, AkumaForeignKey, AkumaQueryResponse, AkumaSchemaResponse,
    AkumaTable, Guardrails, QueryMode, QueryRequest, SqlDialect,
};
