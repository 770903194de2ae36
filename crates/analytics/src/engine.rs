use crate::accumulator::SellerAccumulator;
use crate::bonus::{BonusPolicy, LinearProfitBonus};
use crate::error::AnalyticsError;
use crate::report::ReportRow;
use configuration::AnalysisOptions;
use core_types::{Dataset, DatasetView, Product};
use std::collections::HashMap;

/// A stateless calculator that turns raw sales records into a ranked seller report.
///
/// Every call builds and discards its own indices, so one analyzer can be shared
/// across threads and invoked concurrently on independent datasets.
pub struct SalesAnalyzer {
    bonus_policy: Box<dyn BonusPolicy>,
}

impl Default for SalesAnalyzer {
    fn default() -> Self {
        Self::new(&AnalysisOptions::default())
    }
}

impl SalesAnalyzer {
    pub fn new(options: &AnalysisOptions) -> Self {
        Self {
            bonus_policy: Box::new(LinearProfitBonus::from(&options.bonus)),
        }
    }

    /// Replaces the bonus formula applied during the ranking pass.
    pub fn with_bonus_policy(mut self, policy: impl BonusPolicy + 'static) -> Self {
        self.bonus_policy = Box::new(policy);
        self
    }

    /// The main entry point for producing the seller report.
    ///
    /// # Arguments
    ///
    /// * `dataset` - The parsed sales data. `None` is treated as absent input.
    ///
    /// # Returns
    ///
    /// The report rows ranked by profit, highest first, or
    /// `AnalyticsError::InvalidInput` if the dataset or any of its four
    /// collections is missing, or if a seller's totals overflow. Purchase
    /// records naming an unknown seller and line items naming an unknown SKU
    /// are skipped.
    #[tracing::instrument(name = "analyze_sales_data", skip_all)]
    pub fn analyze(&self, dataset: Option<&Dataset>) -> Result<Vec<ReportRow>, AnalyticsError> {
        let dataset =
            dataset.ok_or_else(|| AnalyticsError::InvalidInput("dataset is absent".to_string()))?;
        let view = dataset.validate()?;

        let (mut sellers, seller_index, products) = build_indices(&view);
        tracing::debug!(
            sellers = sellers.len(),
            products = products.len(),
            records = view.purchase_records.len(),
            "Built seller and product indices."
        );

        aggregate(&view, &mut sellers, &seller_index, &products)?;

        // Stable, so equal profits keep their original seller order.
        sellers.sort_by(|a, b| b.profit.cmp(&a.profit));

        let total = sellers.len();
        for (rank, acc) in sellers.iter_mut().enumerate() {
            acc.bonus = self.bonus_policy.bonus(rank, total, acc);
            if acc.bonus.is_none() {
                tracing::warn!(
                    seller_id = %acc.seller.id,
                    rank,
                    total,
                    "Bonus is undefined for this ranking."
                );
            }
        }

        let rows: Vec<ReportRow> = sellers.into_iter().map(ReportRow::from).collect();
        tracing::debug!(rows = rows.len(), "Seller report generated.");

        Ok(rows)
    }
}

/// Creates one accumulator per seller, in input order, plus lookups by seller id and SKU.
///
/// A repeated seller id keeps its first position but takes the later record.
/// A repeated SKU resolves to the later product.
fn build_indices<'a>(
    view: &DatasetView<'a>,
) -> (
    Vec<SellerAccumulator>,
    HashMap<&'a str, usize>,
    HashMap<&'a str, &'a Product>,
) {
    let mut sellers: Vec<SellerAccumulator> = Vec::with_capacity(view.sellers.len());
    let mut seller_index: HashMap<&'a str, usize> = HashMap::with_capacity(view.sellers.len());

    for seller in view.sellers {
        match seller_index.get(seller.id.as_str()) {
            Some(&pos) => sellers[pos] = SellerAccumulator::new(seller),
            None => {
                seller_index.insert(seller.id.as_str(), sellers.len());
                sellers.push(SellerAccumulator::new(seller));
            }
        }
    }

    let products = view
        .products
        .iter()
        .map(|product| (product.sku.as_str(), product))
        .collect();

    (sellers, seller_index, products)
}

/// Folds every resolvable line item into its seller's running totals.
fn aggregate(
    view: &DatasetView<'_>,
    sellers: &mut [SellerAccumulator],
    seller_index: &HashMap<&str, usize>,
    products: &HashMap<&str, &Product>,
) -> Result<(), AnalyticsError> {
    for record in view.purchase_records {
        let Some(&pos) = seller_index.get(record.seller_id.as_str()) else {
            tracing::trace!(seller_id = %record.seller_id, "Skipping record for unknown seller.");
            continue;
        };
        let acc = &mut sellers[pos];

        for item in &record.items {
            let Some(product) = products.get(item.sku.as_str()) else {
                tracing::trace!(sku = %item.sku, "Skipping line item for unknown product.");
                continue;
            };
            acc.record_sale(item, product)?;
        }
    }

    Ok(())
}

/// Produces the seller report for `dataset` under `options`.
pub fn analyze_sales_data(
    dataset: Option<&Dataset>,
    options: &AnalysisOptions,
) -> Result<Vec<ReportRow>, AnalyticsError> {
    SalesAnalyzer::new(options).analyze(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{Customer, LineItem, PurchaseRecord, Seller};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn seller(id: &str, first: &str, last: &str) -> Seller {
        Seller {
            id: id.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            start_date: None,
            position: None,
        }
    }

    fn product(sku: &str, purchase_price: Decimal) -> Product {
        Product {
            sku: sku.to_string(),
            purchase_price,
            name: None,
            category: None,
            sale_price: None,
        }
    }

    fn item(sku: &str, quantity: i64, sale_price: Decimal, discount: Decimal) -> LineItem {
        LineItem {
            sku: sku.to_string(),
            quantity,
            sale_price,
            discount,
        }
    }

    fn record(seller_id: &str, items: Vec<LineItem>) -> PurchaseRecord {
        PurchaseRecord {
            seller_id: seller_id.to_string(),
            items,
            receipt_id: None,
            date: None,
            customer_id: None,
            total_amount: None,
            total_discount: None,
        }
    }

    fn customer() -> Customer {
        Customer {
            id: "c1".to_string(),
            first_name: "Ivan".to_string(),
            last_name: "Petrov".to_string(),
            phone: None,
        }
    }

    #[test]
    fn absent_dataset_is_invalid_input() {
        let err = SalesAnalyzer::default().analyze(None).unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidInput(_)));
    }

    #[test]
    fn missing_collection_is_invalid_input() {
        let mut dataset = Dataset::new(vec![customer()], vec![], vec![], vec![]);
        dataset.sellers = None;

        let err = SalesAnalyzer::default().analyze(Some(&dataset)).unwrap_err();
        assert_eq!(
            err,
            AnalyticsError::InvalidInput("missing collection 'sellers'".to_string())
        );
    }

    #[test]
    fn empty_dataset_produces_empty_report() {
        let dataset = Dataset::new(vec![], vec![], vec![], vec![]);
        let rows = SalesAnalyzer::default().analyze(Some(&dataset)).expect("report");
        assert!(rows.is_empty());
    }

    #[test]
    fn worked_example_two_sellers() {
        let dataset = Dataset::new(
            vec![customer()],
            vec![product("P1", dec!(50))],
            vec![seller("S1", "Ann", "Lee"), seller("S2", "Bob", "Ray")],
            vec![record("S1", vec![item("P1", 2, dec!(100), dec!(0))])],
        );

        let rows = analyze_sales_data(Some(&dataset), &AnalysisOptions::default()).expect("report");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].seller_id, "S1");
        assert_eq!(rows[0].name, "Ann Lee");
        assert_eq!(rows[0].profit, dec!(100.00));
        assert_eq!(rows[0].revenue, dec!(200.00));
        assert_eq!(rows[0].sales_count, 2);
        assert_eq!(rows[0].bonus, Some(5000));
        assert_eq!(rows[0].top_products, vec!["P1".to_string()]);

        assert_eq!(rows[1].seller_id, "S2");
        assert_eq!(rows[1].profit, Decimal::ZERO);
        assert_eq!(rows[1].revenue, Decimal::ZERO);
        assert_eq!(rows[1].sales_count, 0);
        assert_eq!(rows[1].bonus, Some(1000));
        assert!(rows[1].top_products.is_empty());
    }

    #[test]
    fn unknown_seller_and_sku_are_skipped() {
        let dataset = Dataset::new(
            vec![],
            vec![product("P1", dec!(1))],
            vec![seller("S1", "Ann", "Lee"), seller("S2", "Bob", "Ray")],
            vec![
                record("GHOST", vec![item("P1", 10, dec!(5), dec!(0))]),
                record(
                    "S2",
                    vec![
                        item("NOPE", 7, dec!(5), dec!(0)),
                        item("P1", 1, dec!(3), dec!(0)),
                    ],
                ),
            ],
        );

        let rows = SalesAnalyzer::default().analyze(Some(&dataset)).expect("report");

        assert_eq!(rows[0].seller_id, "S2");
        assert_eq!(rows[0].sales_count, 1);
        assert_eq!(rows[0].profit, dec!(2));
        assert_eq!(rows[0].top_products, vec!["P1".to_string()]);
        assert_eq!(rows[1].seller_id, "S1");
        assert_eq!(rows[1].sales_count, 0);
    }

    #[test]
    fn equal_profits_keep_input_order() {
        let dataset = Dataset::new(
            vec![],
            vec![],
            vec![
                seller("A", "a", "a"),
                seller("B", "b", "b"),
                seller("C", "c", "c"),
            ],
            vec![],
        );

        let rows = SalesAnalyzer::default().analyze(Some(&dataset)).expect("report");
        let ids: Vec<_> = rows.iter().map(|r| r.seller_id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
        let bonuses: Vec<_> = rows.iter().map(|r| r.bonus).collect();
        assert_eq!(bonuses, vec![Some(5000), Some(3000), Some(1000)]);
    }

    #[test]
    fn single_seller_bonus_stays_undefined() {
        let dataset = Dataset::new(
            vec![],
            vec![product("P1", dec!(1))],
            vec![seller("S1", "Ann", "Lee")],
            vec![record("S1", vec![item("P1", 1, dec!(2), dec!(0))])],
        );

        let rows = SalesAnalyzer::default().analyze(Some(&dataset)).expect("report");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].bonus, None);
        assert_eq!(rows[0].profit, dec!(1));
    }

    #[test]
    fn duplicate_seller_id_keeps_first_position_with_later_record() {
        let dataset = Dataset::new(
            vec![],
            vec![],
            vec![
                seller("S1", "Old", "Name"),
                seller("S2", "Bob", "Ray"),
                seller("S1", "New", "Name"),
            ],
            vec![],
        );

        let rows = SalesAnalyzer::default().analyze(Some(&dataset)).expect("report");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].seller_id, "S1");
        assert_eq!(rows[0].name, "New Name");
    }

    #[test]
    fn profit_is_summed_from_per_item_rounded_values() {
        // Each item: (0.333 - 0) * 1 = 0.333 -> 0.33; three of them -> 0.99, not 1.00
        let dataset = Dataset::new(
            vec![],
            vec![product("P1", dec!(0))],
            vec![seller("S1", "Ann", "Lee"), seller("S2", "Bob", "Ray")],
            vec![record(
                "S1",
                vec![
                    item("P1", 1, dec!(0.333), dec!(0)),
                    item("P1", 1, dec!(0.333), dec!(0)),
                    item("P1", 1, dec!(0.333), dec!(0)),
                ],
            )],
        );

        let rows = SalesAnalyzer::default().analyze(Some(&dataset)).expect("report");
        assert_eq!(rows[0].profit, dec!(0.99));
        assert_eq!(rows[0].revenue, dec!(1.00));
    }

    #[test]
    fn overflowing_quantities_are_reported_not_panicked() {
        let half = i64::MAX / 2 + 1;
        let dataset = Dataset::new(
            vec![],
            vec![product("P1", Decimal::ZERO)],
            vec![seller("S1", "Ann", "Lee"), seller("S2", "Bob", "Ray")],
            vec![
                record("S1", vec![item("P1", half, Decimal::ZERO, dec!(0))]),
                record("S1", vec![item("P1", half, Decimal::ZERO, dec!(0))]),
            ],
        );

        let err = SalesAnalyzer::default().analyze(Some(&dataset)).unwrap_err();
        assert_eq!(
            err,
            AnalyticsError::InvalidInput("arithmetic overflow for seller 'S1' on sku 'P1'".to_string())
        );
    }

    #[test]
    fn oversized_money_values_are_reported_not_panicked() {
        let dataset = Dataset::new(
            vec![],
            vec![product("P1", dec!(1))],
            vec![seller("S1", "Ann", "Lee")],
            vec![record("S1", vec![item("P1", i64::MAX, dec!(100000000000), dec!(0))])],
        );

        let err = SalesAnalyzer::default().analyze(Some(&dataset)).unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidInput(msg) if msg.contains("overflow")));
    }

    #[test]
    fn custom_bonus_policy_is_applied() {
        struct Flat;
        impl BonusPolicy for Flat {
            fn bonus(&self, _: usize, _: usize, _: &SellerAccumulator) -> Option<i64> {
                Some(42)
            }
        }

        let dataset = Dataset::new(vec![], vec![], vec![seller("S1", "Ann", "Lee")], vec![]);
        let rows = SalesAnalyzer::default()
            .with_bonus_policy(Flat)
            .analyze(Some(&dataset))
            .expect("report");
        assert_eq!(rows[0].bonus, Some(42));
    }

    #[test]
    fn input_dataset_is_not_mutated() {
        let dataset = Dataset::new(
            vec![customer()],
            vec![product("P1", dec!(50))],
            vec![seller("S1", "Ann", "Lee")],
            vec![record("S1", vec![item("P1", 2, dec!(100), dec!(0))])],
        );
        let before = dataset.clone();

        SalesAnalyzer::default().analyze(Some(&dataset)).expect("report");
        assert_eq!(dataset, before);
    }
}
