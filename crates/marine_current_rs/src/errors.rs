use thiserror::Error;
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid unit: {0} (expected knots or meters_per_second)")]
    InvalidUnit(String),
    #[error("Ron deserialization failed: {0}")]
    RonDeserialize(#[from] ron::error::SpannedError),
    #[error("Std Io Error!")]
    StdIo(#[from] std::io::Error),
}
