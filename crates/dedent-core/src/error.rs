use thiserror::Error;

pub type Result<T> = std::result::Result<T, DedentError>;

#[derive(Debug, Error)]
pub enum DedentError {
    #[error("output truncated: {required} bytes needed, capacity is {capacity}")]
    Truncated { required: usize, capacity: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
