use crate::error::AnalyticsError;
use crate::profit::{calculate_simple_profit, line_item_revenue};
use core_types::{LineItem, Product, Seller};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Cumulative quantity sold per SKU, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductTally {
    entries: Vec<(String, i64)>,
    positions: HashMap<String, usize>,
}

impl ProductTally {
    /// Adds `quantity` to the SKU's running total. Returns `None`, leaving the
    /// tally untouched, if the total would overflow.
    pub fn add(&mut self, sku: &str, quantity: i64) -> Option<()> {
        match self.positions.get(sku) {
            Some(&pos) => {
                let entry = &mut self.entries[pos].1;
                *entry = entry.checked_add(quantity)?;
            }
            None => {
                self.positions.insert(sku.to_string(), self.entries.len());
                self.entries.push((sku.to_string(), quantity));
            }
        }
        Some(())
    }

    fn can_add(&self, sku: &str, quantity: i64) -> bool {
        self.quantity_of(sku)
            .is_none_or(|current| current.checked_add(quantity).is_some())
    }

    pub fn quantity_of(&self, sku: &str) -> Option<i64> {
        self.positions.get(sku).map(|&pos| self.entries[pos].1)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The SKU with the strictly highest cumulative quantity.
    ///
    /// Linear scan; on a tie the SKU seen first wins.
    pub fn top(&self) -> Option<&str> {
        let mut best: Option<(&str, i64)> = None;
        for (sku, quantity) in &self.entries {
            if best.is_none_or(|(_, best_quantity)| *quantity > best_quantity) {
                best = Some((sku.as_str(), *quantity));
            }
        }
        best.map(|(sku, _)| sku)
    }
}

/// Running totals for one seller during a single analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerAccumulator {
    pub seller: Seller,
    pub sales_count: i64,
    pub revenue: Decimal,
    pub profit: Decimal,
    /// `Some(0)` until the ranking pass assigns the real bonus, which is `None`
    /// when the bonus scale is undefined.
    pub bonus: Option<i64>,
    pub top_products: ProductTally,
}

impl SellerAccumulator {
    pub fn new(seller: &Seller) -> Self {
        Self {
            seller: seller.clone(),
            sales_count: 0,
            revenue: Decimal::ZERO,
            profit: Decimal::ZERO,
            bonus: Some(0),
            top_products: ProductTally::default(),
        }
    }

    /// Folds one line item, already matched to its product, into the totals.
    ///
    /// All totals are computed before any is stored, so an overflow leaves the
    /// accumulator unchanged.
    pub fn record_sale(&mut self, item: &LineItem, product: &Product) -> Result<(), AnalyticsError> {
        let profit = calculate_simple_profit(item, product)
            .and_then(|profit| self.profit.checked_add(profit));
        let revenue = line_item_revenue(item).and_then(|revenue| self.revenue.checked_add(revenue));
        let sales_count = self.sales_count.checked_add(item.quantity);

        let (Some(profit), Some(revenue), Some(sales_count)) = (profit, revenue, sales_count) else {
            return Err(self.overflow(&item.sku));
        };
        if !self.top_products.can_add(&item.sku, item.quantity) {
            return Err(self.overflow(&item.sku));
        }

        self.profit = profit;
        self.revenue = revenue;
        self.sales_count = sales_count;
        self.top_products
            .add(&item.sku, item.quantity)
            .ok_or_else(|| self.overflow(&item.sku))
    }

    fn overflow(&self, sku: &str) -> AnalyticsError {
        AnalyticsError::InvalidInput(format!(
            "arithmetic overflow for seller '{}' on sku '{}'",
            self.seller.id, sku
        ))
    }

    /// Collapses the per-SKU tally to at most one SKU.
    pub fn top_product(&self) -> Vec<String> {
        self.top_products.top().map(str::to_string).into_iter().collect()
    }
}
