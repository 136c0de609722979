use thiserror::Error;

pub type AnnotationResult<T> = Result<T, AnnotationError>;

#[derive(Debug, Error)]
pub enum AnnotationError {
    #[error("invalid surface size: width={width}, height={height}")]
    InvalidSurfaceSize { width: i32, height: i32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
