use core_types::{LineItem, Product};
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a money amount to cents, half away from zero.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Per-unit price after the line item's percentage discount.
fn discounted_unit_price(item: &LineItem) -> Option<Decimal> {
    let remaining = Decimal::ONE.checked_sub(item.discount / Decimal::ONE_HUNDRED)?;
    item.sale_price.checked_mul(remaining)
}

/// Profit earned on one line item, rounded to cents.
///
/// `(sale_price * (1 - discount / 100) - purchase_price) * quantity`
///
/// Ranges are not validated: a negative quantity or a discount above 100
/// simply flows through the arithmetic. Returns `None` if the result does
/// not fit in a `Decimal`.
pub fn calculate_simple_profit(item: &LineItem, product: &Product) -> Option<Decimal> {
    let margin = discounted_unit_price(item)?.checked_sub(product.purchase_price)?;
    let profit = margin.checked_mul(Decimal::from(item.quantity))?;
    Some(round_money(profit))
}

/// Revenue of one line item after discount. Not rounded.
///
/// Returns `None` if the result does not fit in a `Decimal`.
pub fn line_item_revenue(item: &LineItem) -> Option<Decimal> {
    discounted_unit_price(item)?.checked_mul(Decimal::from(item.quantity))
}
