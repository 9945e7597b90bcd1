//! Sōzō: synthetic data generation.

pub mod client;
pub mod mapping;
pub mod types;

pub use client::SozoClient;
pub use types::{
    CorrelationType, GenerateRequest, SozoColumnStats, SozoGenerateResponse, SozoSchemaInfo,
};
