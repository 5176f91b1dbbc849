use std::borrow::Cow;

/// Export error type.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Internal error: {message}")]
    Internal { message: Cow<'static, str> },
}
