use std::borrow::Cow;

/// Tenancy error type.
#[derive(Debug, thiserror::Error)]
pub enum TenancyError {
    #[error("Internal error: {message}")]
    Internal { message: Cow<'static, str> },
}
