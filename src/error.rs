//! Error types for ordered set operations.

/// Errors returned by positional operations on an [`OrderedSet`].
///
/// Every variant is detected before the set is touched, so a returned error
/// always means the set is unchanged.
///
/// # Examples
///
/// ```rust
/// use ordset::{OrderedSet, OrderedSetError, Position};
///
/// let mut set = OrderedSet::from_values([1, 2, 3]);
/// let error = set.insert(4, &99, Position::After).unwrap_err();
///
/// assert_eq!(error, OrderedSetError::MarkNotFound);
/// assert_eq!(
///     format!("{error}"),
///     "mark value is not a member of the ordered set"
/// );
/// ```
///
/// [`OrderedSet`]: crate::OrderedSet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderedSetError {
    /// The reference value given to `insert` or `move_to` is not a member.
    MarkNotFound,
}

impl std::fmt::Display for OrderedSetError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MarkNotFound => formatter.write_str("mark value is not a member of the ordered set"),
        }
    }
}

impl std::error::Error for OrderedSetError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_not_found_display() {
        assert_eq!(
            format!("{}", OrderedSetError::MarkNotFound),
            "mark value is not a member of the ordered set"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(OrderedSetError::MarkNotFound);
        assert!(error.source().is_none());
    }
}
