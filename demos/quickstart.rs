//! Quickstart: one call to each product.
//!
//! The API key is read from the environment:
//! - KAIZEN_API_KEY (required)
//! - KAIZEN_BASE_URL (optional, for staging)
//!
//! Usage:
//!   KAIZEN_API_KEY=your_key RUST_LOG=kaizen=debug cargo run --example quickstart

use kaizen::akuma::{Guardrails, QueryRequest, SqlDialect};
use kaizen::enzan::{GroupByDimension, SummaryRequest, TimeWindow};
use kaizen::sozo::{CorrelationType, GenerateRequest};
use kaizen::{ErrorKind, KaizenClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if std::env::var("KAIZEN_API_KEY").is_err() {
        eprintln!("Warning: KAIZEN_API_KEY not set. Requests will be rejected.");
    }

    let client = KaizenClient::from_env()?;

    // Akuma
    let query = QueryRequest::new(SqlDialect::Postgres, "Top 10 customers by MRR")
        .guardrails(Guardrails::new().deny_columns(["ssn"]).max_rows(100));
    match client.akuma().query(&query).await {
        Ok(resp) if resp.has_error() => {
            eprintln!("Akuma could not translate: {}", resp.error.unwrap_or_default())
        }
        Ok(resp) => println!("SQL:\n{}\n", resp.sql),
        Err(e) if e.kind() == ErrorKind::Authentication => {
            eprintln!("Check KAIZEN_API_KEY: {}", e);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }

    // Enzan
    let summary = client
        .enzan()
        .summary(&SummaryRequest::new(TimeWindow::SevenDays).group_by(GroupByDimension::Project))
        .await?;
    println!(
        "Last {}: ${:.2} over {:.1} GPU hours",
        summary.window, summary.total_cost_usd, summary.total_gpu_hours
    );
    for row in &summary.rows {
        println!(
            "  {:<20} ${:.2}",
            row.project.as_deref().unwrap_or("-"),
            row.cost_usd
        );
    }

    // Sōzō
    let data = client
        .sozo()
        .generate(
            &GenerateRequest::new(5)
                .column("company", "company_name")
                .column("mrr", "float:10-5000")
                .column("seats", "int:1-500")
                .correlation("mrr:seats", CorrelationType::Positive)
                .seed(42),
        )
        .await?;
    println!("\n{}", data.to_csv());

    client.close();
    Ok(())
}
