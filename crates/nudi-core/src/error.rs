use serde::Serialize;

/// Failures raised by a `DictionaryStore`
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("Dictionary store is not open")]
    NotOpen,

    #[error("Dictionary store unavailable: {0}")]
    Unavailable(String),

    #[error("Dictionary lookup timed out after {0} ms")]
    Timeout(u64),
}

/// Failure taxonomy at the resolver boundary.
///
/// `InputTooShort` and `NoRuleMatch` are expected outcomes that fall through
/// the cascade; the rest are converted into a terminal `LookupResult`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolveError {
    #[error("Token '{0}' is shorter than two characters")]
    InputTooShort(String),

    #[error("No suffix rule matches '{0}'")]
    NoRuleMatch(String),

    #[error("Dictionary store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),

    #[error("Translation timed out after {0} ms")]
    NetworkTimeout(u64),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResolveError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResolveError::InputTooShort(_) => ErrorKind::InputTooShort,
            ResolveError::NoRuleMatch(_) => ErrorKind::NoRuleMatch,
            ResolveError::StoreUnavailable(_) => ErrorKind::StoreUnavailable,
            ResolveError::NetworkTimeout(_) => ErrorKind::NetworkTimeout,
            ResolveError::MalformedInput(_) => ErrorKind::MalformedInput,
            ResolveError::Internal(_) => ErrorKind::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InputTooShort,
    NoRuleMatch,
    StoreUnavailable,
    NetworkTimeout,
    MalformedInput,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_converts_to_store_unavailable() {
        let err: ResolveError = StoreError::Timeout(2000).into();
        assert_eq!(err.kind(), ErrorKind::StoreUnavailable);
        assert!(err.to_string().contains("2000 ms"));
    }
}
