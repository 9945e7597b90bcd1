//! Enzan: GPU cost analytics.
//!
//! 成本汇总、消耗速率、资源登记与告警规则。

pub mod client;
pub mod mapping;
pub mod types;

pub use client::EnzanClient;
pub use types::{
    AlertType, ApiCostSummary, EnzanAlert, EnzanBurnResponse, EnzanResource, EnzanSummaryResponse,
    EnzanSummaryRow, GroupByDimension, SummaryRequest, TimeWindow,
};
