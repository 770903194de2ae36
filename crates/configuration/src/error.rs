use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read analysis options: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Invalid bonus bounds (max_bonus = {max_bonus}, min_bonus = {min_bonus}): {reason}")]
    InvalidBonusBounds {
        max_bonus: Decimal,
        min_bonus: Decimal,
        reason: &'static str,
    },
}
