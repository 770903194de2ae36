//! # Sales Analytics Engine
//!
//! This crate turns raw sales records into a ranked seller performance report:
//! revenue, profit and unit counts per seller, a rank-based bonus, and each
//! seller's best-selling product.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of external systems.
//!   It depends only on `core-types` and on the already-loaded `AnalysisOptions`.
//! - **Stateless Calculation:** The `SalesAnalyzer` builds its indices and accumulators
//!   inside each call and discards them afterwards. The same input always yields the
//!   same report.
//!
//! ## Public API
//!
//! - `SalesAnalyzer` / `analyze_sales_data`: The report pipeline.
//! - `ReportRow`: One ranked seller in the output.
//! - `BonusPolicy` / `LinearProfitBonus`: The rank-to-bonus formula.
//! - `AnalyticsError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod accumulator;
pub mod bonus;
pub mod engine;
pub mod error;
pub mod profit;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use accumulator::{ProductTally, SellerAccumulator};
pub use bonus::{calculate_bonus_by_profit, BonusPolicy, LinearProfitBonus};
pub use engine::{analyze_sales_data, SalesAnalyzer};
pub use error::AnalyticsError;
pub use profit::{calculate_simple_profit, line_item_revenue, round_money};
pub use report::ReportRow;
