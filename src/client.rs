//! 统一客户端：持有共享请求适配器，并分发各产品视图。
//!
//! Façade client. Owns the shared [`HttpClient`](crate::HttpClient) and hands
//! out borrowing views for each product.

pub mod builder;
pub mod core;

pub use self::builder::KaizenClientBuilder;
pub use self::core::{KaizenClient, HEALTH_PATH};
