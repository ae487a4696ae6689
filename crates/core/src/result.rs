//! Result type definition and a small extension trait for silent fallbacks.

use crate::error::Error;

/// The standard Result type for explorer operations.
///
/// # Examples
///
/// ```
/// use explorer_core::{PageSize, Result};
///
/// fn ten() -> Result<PageSize> {
///     PageSize::new(10)
/// }
///
/// assert_eq!(ten().map(PageSize::get), Ok(10));
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for Results whose errors are recoverable by falling back.
pub trait ResultExt<T> {
    /// Convert a Result to an Option, logging the error at debug level.
    fn into_option_logged(self) -> Option<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn into_option_logged(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::debug!("ignoring recoverable error: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_option_logged_ok() {
        let result: Result<i32> = Ok(42);
        assert_eq!(result.into_option_logged(), Some(42));
    }

    #[test]
    fn test_into_option_logged_err() {
        let result: Result<i32> = Err(Error::InvalidPageSize { size: 3 });
        assert_eq!(result.into_option_logged(), None);
    }
}
