use std::borrow::Cow;

/// Theming error type.
#[derive(Debug, thiserror::Error)]
pub enum ThemingError {
    #[error("Internal error: {message}")]
    Internal { message: Cow<'static, str> },
}
