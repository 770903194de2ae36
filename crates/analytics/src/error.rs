use core_types::CoreError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    /// The dataset, or one of its required collections, is missing.
    #[error("Invalid input data: {0}")]
    InvalidInput(String),
}

impl From<CoreError> for AnalyticsError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidInput(collection) => {
                AnalyticsError::InvalidInput(format!("missing collection '{collection}'"))
            }
        }
    }
}
