//! Either type - a value that can be one of two types.
//!
//! `Either<L, R>` is either a `Left(L)` or a `Right(R)`. It is right-biased:
//! `fmap`, `apply` and `bind` work on the `Right` payload, and a `Left`
//! passes through every operation untouched, carrying its payload along.
//!
//! # Examples
//!
//! ```rust
//! use lambars_rx::control::Either;
//!
//! let check = |x: i32| if x > 0 { Either::Right(x) } else { Either::Left("neg") };
//!
//! assert_eq!(Either::Right(5).bind(check), Either::Right(5));
//! assert_eq!(Either::Right(-5).bind(check), Either::Left("neg"));
//! ```

use std::any::Any;
use std::fmt;

use super::error::ContainerError;
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A value that can be one of two types.
///
/// By convention `Left` is the failure or alternate channel and `Right` is
/// the success channel. Values are immutable once constructed.
///
/// # Examples
///
/// ```rust
/// use lambars_rx::control::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// let failure: Either<String, i32> = Either::Left("error".to_string());
///
/// assert_eq!(success.right_or(0), 42);
/// assert_eq!(failure.right_or(0), 0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant, conventionally representing failure.
    Left(L),
    /// The right variant, conventionally representing success.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts into an `Option<L>`, consuming the either.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into an `Option<R>`, consuming the either.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows both sides: `Either<L, R>` to `Either<&L, &R>`.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Returns the `Right` payload, or `default` for a `Left`.
    #[inline]
    pub fn right_or(self, default: R) -> R {
        match self {
            Self::Left(_) => default,
            Self::Right(value) => value,
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies a function to the left value, leaving a right value unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_rx::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(21);
    /// assert_eq!(left.map_left(|x| x * 2), Either::Left(42));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies one of two functions depending on the variant.
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Eliminates the either into a single value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_rx::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// let result = right.fold(|n| format!("Number: {n}"), |s| format!("String: {s}"));
    /// assert_eq!(result, "String: hello");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the left and right values.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    // =========================================================================
    // Right-biased Operations
    // =========================================================================

    /// Applies a function to the right value, leaving a left value unchanged.
    ///
    /// Unlike the [`Functor`] instance this places no bound on `L`, so it
    /// works for left types such as `std::io::Error`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_rx::control::Either;
    ///
    /// let read: Either<std::io::Error, usize> = Either::Right(3);
    /// assert_eq!(read.fmap(|n| n * 2).right(), Some(6));
    /// ```
    #[inline]
    pub fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies the function held in `function` to the right value.
    ///
    /// A `Left` self is returned as is and `function` is never inspected.
    /// A `Right` self meeting a `Left` function yields that `Left`.
    #[inline]
    pub fn apply<B, F>(self, function: Either<L, F>) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function.fmap(|f| f(value)),
        }
    }

    /// Chains a computation that may itself produce a `Left`.
    #[inline]
    pub fn bind<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    // =========================================================================
    // Type-erased Operations
    // =========================================================================

    /// Applies a type-erased function container to this value.
    ///
    /// On `Right(x)` the argument must be an `Either<L, F>`; a `Right(f)`
    /// yields `Right(f(x))` and a `Left(e)` yields `Left(e)`. On `Left` the
    /// argument is dropped unexamined.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::Malformed`] if `self` is `Right` and
    /// `function` is not an `Either<L, F>`.
    pub fn try_apply<B, F>(self, function: Box<dyn Any>) -> Result<Either<L, B>, ContainerError>
    where
        L: 'static,
        F: FnOnce(R) -> B + 'static,
    {
        match self {
            Self::Left(value) => Ok(Either::Left(value)),
            Self::Right(value) => Ok(match expect_either::<L, F>(function)? {
                Either::Left(error) => Either::Left(error),
                Either::Right(f) => Either::Right(f(value)),
            }),
        }
    }

    /// Binds a function whose result is type-erased.
    ///
    /// On `Right(x)`, `function(x)` must be an `Either<L, B>` and is returned
    /// unchanged. On `Left` the function is never called.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::Malformed`] if the function's result is not
    /// an `Either<L, B>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::any::Any;
    /// use lambars_rx::control::Either;
    ///
    /// let source: Either<String, i32> = Either::Right(1);
    /// let result = source.try_bind::<i32, _>(|x| Box::new(x + 1) as Box<dyn Any>);
    /// assert!(result.is_err());
    /// ```
    pub fn try_bind<B, F>(self, function: F) -> Result<Either<L, B>, ContainerError>
    where
        L: 'static,
        B: 'static,
        F: FnOnce(R) -> Box<dyn Any>,
    {
        match self {
            Self::Left(value) => Ok(Either::Left(value)),
            Self::Right(value) => expect_either(function(value)),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L: Clone, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        Self::fmap(self, function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Either<L, B>
    where
        F: FnOnce(&R) -> B,
    {
        match self {
            Self::Left(value) => Either::Left(value.clone()),
            Self::Right(value) => Either::Right(function(value)),
        }
    }
}

impl<L: Clone, R> Applicative for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    #[inline]
    fn apply<B, F>(self, function: Either<L, F>) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        Self::apply(self, function)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        match (self, other) {
            (Self::Left(value), _) | (Self::Right(_), Either::Left(value)) => Either::Left(value),
            (Self::Right(first), Either::Right(second)) => Either::Right(function(first, second)),
        }
    }
}

impl<L: Clone, R> Monad for Either<L, R> {
    #[inline]
    fn bind<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        Self::bind(self, function)
    }
}

// =============================================================================
// Eliminators and Type-erased Checks
// =============================================================================

/// Builds a reusable eliminator returning the `Right` payload, or `default`
/// for a `Left`.
///
/// # Examples
///
/// ```rust
/// use lambars_rx::control::{Either, from_right};
///
/// let or_zero = from_right(0);
/// assert_eq!(or_zero(Either::<&str, i32>::Right(7)), 7);
/// assert_eq!(or_zero(Either::<&str, i32>::Left("boom")), 0);
/// ```
pub fn from_right<L, R: Clone>(default: R) -> impl Fn(Either<L, R>) -> R {
    move |value| value.right_or(default.clone())
}

/// Recovers an `Either<L, R>` from a type-erased value.
///
/// # Errors
///
/// Returns [`ContainerError::Malformed`] if `value` is not an `Either<L, R>`.
pub fn expect_either<L: 'static, R: 'static>(
    value: Box<dyn Any>,
) -> Result<Either<L, R>, ContainerError> {
    value
        .downcast::<Either<L, R>>()
        .map(|boxed| *boxed)
        .map_err(|_| ContainerError::malformed::<Either<L, R>>("Either"))
}

/// Tells whether an arbitrary value is a `Left` of `Either<L, R>`.
///
/// Never panics: any value that is not an `Either<L, R>` yields `false`.
///
/// # Examples
///
/// ```rust
/// use lambars_rx::control::{Either, either};
///
/// assert!(either::is_left::<&str, i32>(&Either::<&str, i32>::Left("e")));
/// assert!(!either::is_left::<&str, i32>(&"e"));
/// ```
pub fn is_left<L: 'static, R: 'static>(value: &dyn Any) -> bool {
    value.downcast_ref::<Either<L, R>>().is_some_and(Either::is_left)
}

/// Tells whether an arbitrary value is a `Right` of `Either<L, R>`.
///
/// Never panics: any value that is not an `Either<L, R>` yields `false`.
pub fn is_right<L: 'static, R: 'static>(value: &dyn Any) -> bool {
    value.downcast_ref::<Either<L, R>>().is_some_and(Either::is_right)
}

// =============================================================================
// Conversions and Formatting
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}
