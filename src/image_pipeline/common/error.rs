use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Invalid frame geometry: {0}")]
    InvalidFrameGeometry(String),

    #[error("Invalid rotation: {0} degrees is not a multiple of 90")]
    InvalidRotation(i32),

    #[error("Invalid buffer size: expected {expected}, got {actual}")]
    InvalidBufferSize { expected: usize, actual: usize },

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Transform is not invertible")]
    InvalidTransform,

    #[error("Classifier failed: {0}")]
    ClassifierError(String),

    #[error("Failed to read label file: {0}")]
    LabelReadError(String),

    #[error("Failed to encode TIFF image: {0}")]
    EncodeError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
