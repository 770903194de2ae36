use crate::error::ConfigError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// The root options structure for one report run.
///
/// Every section is optional in the source file; whatever is omitted falls
/// back to the defaults below, which reproduce the standard report exactly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    #[serde(default)]
    pub bonus: BonusSettings,
}

/// Bounds for the linear, rank-based bonus.
///
/// The top-ranked seller receives `max_bonus` and the last-ranked seller
/// receives `min_bonus`; everyone in between is interpolated linearly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BonusSettings {
    pub max_bonus: Decimal,
    pub min_bonus: Decimal,
}

impl Default for BonusSettings {
    fn default() -> Self {
        Self {
            max_bonus: dec!(5000),
            min_bonus: dec!(1000),
        }
    }
}

impl AnalysisOptions {
    /// Rejects option sets that would produce an increasing or negative bonus scale.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let BonusSettings {
            max_bonus,
            min_bonus,
        } = self.bonus;

        let reason = if min_bonus.is_sign_negative() || max_bonus.is_sign_negative() {
            "bounds must be non-negative"
        } else if min_bonus > max_bonus {
            "min_bonus must not exceed max_bonus"
        } else {
            return Ok(());
        };

        Err(ConfigError::InvalidBonusBounds {
            max_bonus,
            min_bonus,
            reason,
        })
    }
}
