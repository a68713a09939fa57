use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid proposal status: {0}")]
    InvalidStatus(String),

    #[error("invalid critique type: {0}")]
    InvalidCritiqueType(String),

    #[error("match score {0} is outside 0-100")]
    InvalidMatchScore(u8),
}
