//! # kaizen
//!
//! Kaizen AI Systems 官方 Rust SDK：Akuma（自然语言转 SQL）、Enzan（GPU 成本）、Sōzō（合成数据）。
//!
//! Official Rust SDK for the Kaizen AI Systems API.
//!
//! ## Overview
//!
//! One HTTP API, three products:
//!
//! - **Akuma**: translate natural language into SQL for a given dialect, with guardrails.
//! - **Enzan**: GPU cost summaries, burn rate, tracked resources and alerts.
//! - **Sōzō**: synthetic data generation from inline or predefined schemas.
//!
//! Every product client is a thin view over a shared [`HttpClient`], which attaches
//! headers, decodes JSON and classifies failures into [`Error`]. Raw responses are
//! turned into typed records by per-product mapping functions with an explicit default
//! for every optional field.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kaizen::akuma::{QueryRequest, SqlDialect};
//! use kaizen::KaizenClient;
//!
//! #[tokio::main]
//! async fn main() -> kaizen::Result<()> {
//!     let client = KaizenClient::builder().api_key("your-api-key").build()?;
//!
//!     let response = client
//!         .akuma()
//!         .query(&QueryRequest::new(SqlDialect::Postgres, "Top 10 customers by MRR"))
//!         .await?;
//!
//!     if let Some(error) = &response.error {
//!         eprintln!("translation failed: {}", error);
//!     }
//!     println!("{}", response.sql);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Façade client and builder |
//! | [`transport`] | HTTP adapter and pluggable transport capability |
//! | [`akuma`] | NL→SQL translation |
//! | [`enzan`] | GPU cost analytics |
//! | [`sozo`] | Synthetic data generation and export |
//! | [`error`] | Structured error taxonomy |
//! | [`config`] | Connection settings and environment resolution |

pub mod akuma;
pub mod client;
pub mod config;
pub mod enzan;
pub mod error;
pub mod global;
pub mod sozo;
pub mod transport;
pub mod utils;

pub use client::{KaizenClient, KaizenClientBuilder};
pub use config::HttpConfig;
pub use error::{Error, ErrorKind};
pub use global::{default_client, init, set_api_key, set_base_url};
pub use transport::{HttpCapability, HttpClient, Method, RawRequest, RawResponse, TransportError};

/// SDK version reported in the `User-Agent` header.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// A decoded JSON object as returned by the API.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;
