//! # Sales Report
//!
//! Seller performance reports from in-memory sales data. The heavy lifting lives
//! in the workspace crates; this facade wires options into the analyzer and sets
//! up logging for embedding applications.

use tracing_subscriber::{EnvFilter, FmtSubscriber};

pub use analytics::{
    analyze_sales_data, AnalyticsError, BonusPolicy, LinearProfitBonus, ReportRow, SalesAnalyzer,
};
pub use configuration::{load_options, AnalysisOptions, BonusSettings, ConfigError};
pub use core_types::{Customer, Dataset, LineItem, Product, PurchaseRecord, Seller};
pub use rust_decimal::Decimal;

/// Builds the seller report for `dataset`, using default options when none are given.
pub fn generate_report(
    dataset: Option<&Dataset>,
    options: Option<&AnalysisOptions>,
) -> Result<Vec<ReportRow>, AnalyticsError> {
    match options {
        Some(options) => analyze_sales_data(dataset, options),
        None => SalesAnalyzer::default().analyze(dataset),
    }
}

/// Installs a global fmt subscriber filtered by `RUST_LOG`.
///
/// Returns `false` if a global subscriber was already set.
pub fn init_tracing() -> bool {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).is_ok()
}
