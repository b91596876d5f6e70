use thiserror::Error;

#[derive(Debug, Error)]
pub enum BadgeError {
    #[error("invalid color: {0}")]
    InvalidColor(String),
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),
}

pub type Result<T> = std::result::Result<T, BadgeError>;
