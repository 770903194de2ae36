use crate::accumulator::SellerAccumulator;
use configuration::BonusSettings;
use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Assigns a bonus to a seller from its position in the profit ranking.
pub trait BonusPolicy: Send + Sync {
    /// `rank_index` is zero-based, 0 being the highest profit.
    ///
    /// Returns `None` when the policy cannot produce a bonus for this ranking.
    fn bonus(
        &self,
        rank_index: usize,
        total_sellers: usize,
        seller: &SellerAccumulator,
    ) -> Option<i64>;
}

/// Bonus falling linearly from `max_bonus` at rank 0 to `min_bonus` at the last rank.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearProfitBonus {
    pub max_bonus: Decimal,
    pub min_bonus: Decimal,
}

impl LinearProfitBonus {
    pub fn new(max_bonus: Decimal, min_bonus: Decimal) -> Self {
        Self {
            max_bonus,
            min_bonus,
        }
    }
}

impl From<&BonusSettings> for LinearProfitBonus {
    fn from(settings: &BonusSettings) -> Self {
        Self::new(settings.max_bonus, settings.min_bonus)
    }
}

impl Default for LinearProfitBonus {
    fn default() -> Self {
        Self::from(&BonusSettings::default())
    }
}

impl BonusPolicy for LinearProfitBonus {
    fn bonus(
        &self,
        rank_index: usize,
        total_sellers: usize,
        _seller: &SellerAccumulator,
    ) -> Option<i64> {
        // A single seller makes the divisor zero and the step undefined.
        let divisor = Decimal::from(total_sellers) - Decimal::ONE;
        let step = (self.max_bonus - self.min_bonus).checked_div(divisor)?;
        let bonus = self.max_bonus - step * Decimal::from(rank_index);
        bonus
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
    }
}

/// The standard 5000 to 1000 bonus scale.
pub fn calculate_bonus_by_profit(
    rank_index: usize,
    total_sellers: usize,
    seller: &SellerAccumulator,
) -> Option<i64> {
    LinearProfitBonus::default().bonus(rank_index, total_sellers, seller)
}
