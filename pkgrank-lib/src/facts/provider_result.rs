use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum ProviderResult<T> {
    /// The operation succeeded and data was found.
    Found(T),

    /// The requested resource does not exist, with a human-readable reason.
    NotFound(Arc<str>),

    /// An error occurred while querying the source.
    Error(Arc<ohno::AppError>),
}

impl<T> ProviderResult<T> {
    /// Returns `true` if the result is `Found`.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Returns a reference to the contained data if `Found`, otherwise `None`.
    #[must_use]
    pub const fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Found(data) => Some(data),
            _ => None,
        }
    }

    /// Collapse a fallible lookup into a `ProviderResult`, turning the error into `Error`.
    pub fn flatten(result: crate::Result<Self>) -> Self {
        result.unwrap_or_else(|e| Self::Error(Arc::new(e)))
    }
}
