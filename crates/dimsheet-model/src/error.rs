use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unit vector must have exactly 7 dimension exponents, found {found}")]
    InvalidDimensionCount { found: usize },
}
