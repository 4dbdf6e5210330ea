use thiserror::Error;

#[derive(Debug, Error)]
pub enum PxlError {
    #[error("Failed to decode input image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("Failed to encode output image: {0}")]
    Encode(#[source] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Worker pool error: {0}")]
    WorkerPool(String),
}

impl PxlError {
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        PxlError::InvalidConfig {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PxlError>;
