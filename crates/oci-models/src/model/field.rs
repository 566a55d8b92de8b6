//! Three-state field slots.

/// The state of one declared field on a record.
///
/// `Absent` and `Null` are distinct on the wire: absent fields are omitted
/// when encoding, null fields are written as `null`.
#[derive(Debug, Clone, PartialEq, Hash, Default)]
pub enum Field<T> {
    /// Never assigned.
    #[default]
    Absent,
    /// Explicitly assigned `null`.
    Null,
    /// Assigned a value.
    Present(T),
}

impl<T> Field<T> {
    /// Returns true unless the field is `Absent`.
    pub fn is_set(&self) -> bool {
        !matches!(self, Field::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }

    /// Returns the value if one is present.
    pub fn value(&self) -> Option<&T> {
        match self {
            Field::Present(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> Field<&T> {
        match self {
            Field::Absent => Field::Absent,
            Field::Null => Field::Null,
            Field::Present(v) => Field::Present(v),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Field<U> {
        match self {
            Field::Absent => Field::Absent,
            Field::Null => Field::Null,
            Field::Present(v) => Field::Present(f(v)),
        }
    }

    /// Collapses the field to an `Option`, losing the absent/null distinction.
    pub fn into_option(self) -> Option<T> {
        match self {
            Field::Present(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> From<Option<T>> for Field<T> {
    /// `None` maps to an explicit `Null`.
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Field::Present(v),
            None => Field::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_states_are_distinct() {
        let absent: Field<i64> = Field::default();
        assert!(!absent.is_set());
        assert!(Field::<i64>::Null.is_set());
        assert!(Field::<i64>::Null.is_null());
        assert_eq!(Field::Present(3).value(), Some(&3));
        assert_ne!(Field::<i64>::Absent, Field::Null);
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Field::from(Some(1)), Field::Present(1));
        assert_eq!(Field::<i64>::from(None), Field::Null);
        assert_eq!(Field::Present(2).map(|v| v * 2).into_option(), Some(4));
    }
}
