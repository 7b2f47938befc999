use thiserror::Error;

/// Failures the spark field absorbs and reports through logging.
///
/// None of these escape `tick`; `initialize` turns a surface error into an
/// inert field and callers only see the outcome through `FieldState`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FieldError {
    #[error("rendering resource unavailable: {0}")]
    ResourceUnavailable(String),
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
}

impl FieldError {
    pub fn resource(msg: impl Into<String>) -> Self {
        Self::ResourceUnavailable(msg.into())
    }
}
