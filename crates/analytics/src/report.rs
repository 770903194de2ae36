use crate::accumulator::SellerAccumulator;
use crate::profit::round_money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One seller's line in the final performance report.
///
/// Rows are produced already ranked by profit, highest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub seller_id: String,
    pub name: String,
    pub sales_count: i64,
    pub revenue: Decimal,
    pub profit: Decimal,
    /// `None` when the bonus scale is undefined (a single-seller ranking).
    pub bonus: Option<i64>,
    /// Empty if the seller had no valid line items, otherwise exactly one SKU.
    pub top_products: Vec<String>,
}

impl From<SellerAccumulator> for ReportRow {
    fn from(acc: SellerAccumulator) -> Self {
        let top_products = acc.top_product();
        Self {
            seller_id: acc.seller.id.clone(),
            name: acc.seller.full_name(),
            sales_count: acc.sales_count,
            revenue: round_money(acc.revenue),
            profit: round_money(acc.profit),
            bonus: acc.bonus,
            top_products,
        }
    }
}
