use crate::error::CoreError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The raw sales dataset handed to the analyzer.
///
/// Each collection is optional so that a structurally incomplete payload can be
/// represented and rejected by [`Dataset::validate`]. An empty collection is
/// still considered present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub customers: Option<Vec<Customer>>,
    #[serde(default)]
    pub products: Option<Vec<Product>>,
    #[serde(default)]
    pub sellers: Option<Vec<Seller>>,
    #[serde(default)]
    pub purchase_records: Option<Vec<PurchaseRecord>>,
}

/// A structurally valid, borrowed view over a [`Dataset`].
#[derive(Debug, Clone, Copy)]
pub struct DatasetView<'a> {
    pub customers: &'a [Customer],
    pub products: &'a [Product],
    pub sellers: &'a [Seller],
    pub purchase_records: &'a [PurchaseRecord],
}

impl Dataset {
    /// Builds a complete dataset from its four collections.
    pub fn new(
        customers: Vec<Customer>,
        products: Vec<Product>,
        sellers: Vec<Seller>,
        purchase_records: Vec<PurchaseRecord>,
    ) -> Self {
        Self {
            customers: Some(customers),
            products: Some(products),
            sellers: Some(sellers),
            purchase_records: Some(purchase_records),
        }
    }

    /// Checks that all four collections are present.
    ///
    /// Only presence is checked. The contents (unknown references, negative
    /// prices, out-of-range discounts) are left to the consumer.
    pub fn validate(&self) -> Result<DatasetView<'_>, CoreError> {
        let customers = require(&self.customers, "customers")?;
        let products = require(&self.products, "products")?;
        let sellers = require(&self.sellers, "sellers")?;
        let purchase_records = require(&self.purchase_records, "purchase_records")?;

        Ok(DatasetView {
            customers,
            products,
            sellers,
            purchase_records,
        })
    }
}

fn require<'a, T>(collection: &'a Option<Vec<T>>, name: &str) -> Result<&'a [T], CoreError> {
    collection
        .as_deref()
        .ok_or_else(|| CoreError::InvalidInput(name.to_string()))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// A catalog entry. `purchase_price` is the cost basis used for profit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    pub purchase_price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// List price. Informational only; line items carry the actual sale price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

impl Seller {
    /// The display name used in reports: first and last name joined by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A single receipt: one seller, one or more line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub seller_id: String,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_discount: Option<Decimal>,
}

/// One product entry within a purchase record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub sku: String,
    pub quantity: i64,
    /// Per-unit price before the discount is applied.
    pub sale_price: Decimal,
    /// Percentage in `[0, 100]`.
    #[serde(default)]
    pub discount: Decimal,
}
