//! Error types for the container module.
//!
//! Well-typed code cannot produce a malformed container, so these errors
//! only surface at type-erased boundaries (`&dyn Any`, `Box<dyn Any>`) and
//! from the [`expect_present`] precondition check.

use std::fmt;

/// The message used by [`expect_present`] when the caller supplies none.
pub const DEFAULT_ABSENT_MESSAGE: &str = "Encountered NIL value where NON-NIL is expected.";

/// Errors raised when a value does not satisfy a container's contract.
///
/// # Examples
///
/// ```rust
/// use lambars_rx::control::ContainerError;
///
/// let error = ContainerError::Malformed {
///     container: "Maybe",
///     expected: "lambars_rx::control::maybe::Maybe<i32>",
/// };
/// assert_eq!(
///     format!("{error}"),
///     "Expected Maybe value of type lambars_rx::control::maybe::Maybe<i32> but got a value of another type"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    /// A type-erased value was expected to be a container and is not.
    Malformed {
        /// The container family, `"Maybe"` or `"Either"`.
        container: &'static str,
        /// The full name of the expected container type.
        expected: &'static str,
    },
    /// A required value was absent.
    Absent {
        /// The message describing the violated precondition.
        message: String,
    },
}

impl ContainerError {
    pub(crate) fn malformed<C>(container: &'static str) -> Self {
        let expected = std::any::type_name::<C>();
        tracing::debug!(container, expected, "rejected malformed container");
        Self::Malformed {
            container,
            expected,
        }
    }
}

impl fmt::Display for ContainerError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed {
                container,
                expected,
            } => write!(
                formatter,
                "Expected {container} value of type {expected} but got a value of another type"
            ),
            Self::Absent { message } => formatter.write_str(message),
        }
    }
}

impl std::error::Error for ContainerError {}

/// Returns the value inside `value`, or fails when it is absent.
///
/// `message` replaces [`DEFAULT_ABSENT_MESSAGE`] in the error when given.
///
/// # Errors
///
/// Returns [`ContainerError::Absent`] if `value` is `None`.
///
/// # Examples
///
/// ```rust
/// use lambars_rx::control::expect_present;
///
/// assert_eq!(expect_present(Some(3), None), Ok(3));
///
/// let error = expect_present::<i32>(None, Some("port is required")).unwrap_err();
/// assert_eq!(error.to_string(), "port is required");
/// ```
pub fn expect_present<T>(value: Option<T>, message: Option<&str>) -> Result<T, ContainerError> {
    value.ok_or_else(|| ContainerError::Absent {
        message: message.unwrap_or(DEFAULT_ABSENT_MESSAGE).to_string(),
    })
}
