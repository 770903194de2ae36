use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid input: required collection '{0}' is missing")]
    InvalidInput(String),
}
