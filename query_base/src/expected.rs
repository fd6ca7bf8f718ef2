//! Contains the [`Expected`] container returned by fallible scanning operations.

use enum_as_inner::EnumAsInner;

/// Holds exactly one of a success value or an error value.
///
/// The non-panicking accessors (`as_value`, `as_error`, `into_value`, `into_error`) come from
/// [`EnumAsInner`]. The [`Expected::value`] and [`Expected::error`] accessors treat querying the
/// wrong arm as a bug in the caller and panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner)]
pub enum Expected<T, E> {
    /// The operation succeeded.
    Value(T),

    /// The operation failed.
    Error(E),
}

impl<T, E> Expected<T, E> {
    /// Returns `true` if a success value is held.
    #[must_use]
    pub fn has_value(&self) -> bool { matches!(self, Self::Value(..)) }

    /// Returns `true` if an error value is held.
    #[must_use]
    pub fn has_error(&self) -> bool { !self.has_value() }

    /// Gets the held success value.
    ///
    /// # Panics
    /// If an error value is held.
    #[must_use]
    pub fn value(&self) -> &T {
        match self {
            Self::Value(value) => value,
            Self::Error(..) => panic!("called `Expected::value()` on an `Error` value"),
        }
    }

    /// Gets the held error value.
    ///
    /// # Panics
    /// If a success value is held.
    #[must_use]
    pub fn error(&self) -> &E {
        match self {
            Self::Error(error) => error,
            Self::Value(..) => panic!("called `Expected::error()` on a `Value` value"),
        }
    }

    /// Returns the held success value, or `default` if an error is held.
    #[must_use]
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Value(value) => value,
            Self::Error(..) => default,
        }
    }

    /// Applies `function` to the held success value and rewraps the result.
    ///
    /// A held error is passed through and `function` is never invoked.
    #[must_use]
    pub fn transform<U>(self, function: impl FnOnce(T) -> U) -> Expected<U, E> {
        match self {
            Self::Value(value) => Expected::Value(function(value)),
            Self::Error(error) => Expected::Error(error),
        }
    }

    /// Borrows the held arm.
    #[must_use]
    pub fn as_ref(&self) -> Expected<&T, &E> {
        match self {
            Self::Value(value) => Expected::Value(value),
            Self::Error(error) => Expected::Error(error),
        }
    }

    /// Converts into a [`Result`] so that the `?` operator can be used on it.
    #[allow(clippy::missing_errors_doc)]
    pub fn into_result(self) -> Result<T, E> { self.into() }
}

impl<T, E> From<Result<T, E>> for Expected<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Value(value),
            Err(error) => Self::Error(error),
        }
    }
}

impl<T, E> From<Expected<T, E>> for Result<T, E> {
    fn from(expected: Expected<T, E>) -> Self {
        match expected {
            Expected::Value(value) => Ok(value),
            Expected::Error(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests;
