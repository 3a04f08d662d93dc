use thiserror::Error;

/// Precondition violations reported by the list operations.
///
/// A call that returns one of these has not modified the list.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    #[error("index {index} out of bounds for list of size {size}")]
    IndexOutOfBounds { index: usize, size: usize },

    #[error("operation requires a non-empty list")]
    Empty,
}

pub type ListResult<T> = Result<T, ListError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let e = ListError::IndexOutOfBounds { index: 4, size: 2 };
        assert_eq!(e.to_string(), "index 4 out of bounds for list of size 2");
        assert_eq!(
            ListError::Empty.to_string(),
            "operation requires a non-empty list"
        );
    }
}
