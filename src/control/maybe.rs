//! Maybe type - an optional value.
//!
//! `Maybe<T>` is either `Just(T)` or `Nothing`. It is a lawful functor,
//! applicative and monad: `Nothing` short-circuits every operation without
//! ever calling the supplied function.
//!
//! # Examples
//!
//! ```rust
//! use lambars_rx::control::Maybe;
//! use lambars_rx::typeclass::Functor;
//!
//! assert_eq!(Maybe::Just(5).fmap(|x| x + 1), Maybe::Just(6));
//! assert_eq!(Maybe::<i32>::Nothing.fmap(|x| x + 1), Maybe::Nothing);
//! ```

use std::any::Any;
use std::fmt;

use super::error::ContainerError;
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// An optional value: `Just` a value, or `Nothing`.
///
/// Values are immutable once constructed; every operation consumes or
/// borrows and returns a new `Maybe`.
///
/// # Examples
///
/// ```rust
/// use lambars_rx::control::Maybe;
/// use lambars_rx::typeclass::Monad;
///
/// let parsed = Maybe::Just("42").bind(|s| Maybe::from(s.parse::<i32>().ok()));
/// assert_eq!(parsed, Maybe::Just(42));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// The absent value. It carries no payload, so all `Nothing`s are equal.
    Nothing,
    /// A present value.
    Just(T),
}

impl<T> Maybe<T> {
    /// Returns `true` if this is a `Just` value.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if this is `Nothing`.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Converts into an `Option`, consuming the maybe.
    #[inline]
    pub fn just(self) -> Option<T> {
        self.into()
    }

    /// Borrows the payload: `Maybe<T>` to `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Eliminates the maybe: applies `function` to a `Just` payload, or
    /// returns `default` for `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_rx::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just(2).maybe(0, |x| x * 10), 20);
    /// assert_eq!(Maybe::Nothing.maybe(0, |x: i32| x * 10), 0);
    /// ```
    #[inline]
    pub fn maybe<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => default,
        }
    }

    /// Returns the `Just` payload, or `default` for `Nothing`.
    #[inline]
    pub fn from_maybe(self, default: T) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Applies a type-erased function container to this value.
    ///
    /// On `Just(x)` the argument must be a `Maybe<F>`; its function, if any,
    /// is applied to `x`. On `Nothing` the argument is dropped unexamined.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::Malformed`] if `self` is `Just` and
    /// `function` is not a `Maybe<F>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::any::Any;
    /// use lambars_rx::control::Maybe;
    ///
    /// let double: fn(i32) -> i32 = |x| x * 2;
    /// let function: Box<dyn Any> = Box::new(Maybe::Just(double));
    /// assert_eq!(
    ///     Maybe::Just(4).try_apply::<i32, fn(i32) -> i32>(function),
    ///     Ok(Maybe::Just(8))
    /// );
    ///
    /// let bogus: Box<dyn Any> = Box::new("not a maybe");
    /// assert!(Maybe::Just(4).try_apply::<i32, fn(i32) -> i32>(bogus).is_err());
    /// ```
    pub fn try_apply<B, F>(self, function: Box<dyn Any>) -> Result<Maybe<B>, ContainerError>
    where
        F: FnOnce(T) -> B + 'static,
    {
        match self {
            Self::Just(value) => {
                let function = expect_maybe::<F>(function)?;
                Ok(function.fmap(|f| f(value)))
            }
            Self::Nothing => Ok(Maybe::Nothing),
        }
    }

    /// Binds a function whose result is type-erased.
    ///
    /// On `Just(x)`, `function(x)` must be a `Maybe<B>` and is returned
    /// unchanged. On `Nothing` the function is never called.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::Malformed`] if the function's result is not
    /// a `Maybe<B>`.
    pub fn try_bind<B, F>(self, function: F) -> Result<Maybe<B>, ContainerError>
    where
        B: 'static,
        F: FnOnce(T) -> Box<dyn Any>,
    {
        match self {
            Self::Just(value) => expect_maybe(function(value)),
            Self::Nothing => Ok(Maybe::Nothing),
        }
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::Nothing
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

impl<T> Functor for Maybe<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&T) -> B,
    {
        self.as_ref().fmap(function)
    }
}

impl<T> Applicative for Maybe<T> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Just(value)
    }

    #[inline]
    fn apply<B, F>(self, function: Maybe<F>) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        match self {
            Self::Just(value) => function.fmap(|f| f(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Just(first), Maybe::Just(second)) => Maybe::Just(function(first, second)),
            _ => Maybe::Nothing,
        }
    }
}

impl<T> Monad for Maybe<T> {
    #[inline]
    fn bind<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }
}

// =============================================================================
// Eliminators
// =============================================================================

/// Builds a reusable eliminator: `function` applied to `Just` payloads,
/// `default` for `Nothing`.
///
/// # Examples
///
/// ```rust
/// use lambars_rx::control::{Maybe, maybe};
///
/// let describe = maybe(String::from("none"), |n: i32| format!("got {n}"));
/// assert_eq!(describe(Maybe::Just(3)), "got 3");
/// assert_eq!(describe(Maybe::Nothing), "none");
/// ```
pub fn maybe<T, U, F>(default: U, function: F) -> impl Fn(Maybe<T>) -> U
where
    U: Clone,
    F: Fn(T) -> U,
{
    move |value| value.maybe(default.clone(), &function)
}

/// Builds a reusable eliminator returning the `Just` payload, or `default`
/// for `Nothing`.
///
/// # Examples
///
/// ```rust
/// use lambars_rx::control::{Maybe, from_maybe};
///
/// let or_zero = from_maybe(0);
/// assert_eq!(or_zero(Maybe::Just(7)), 7);
/// assert_eq!(or_zero(Maybe::Nothing), 0);
/// ```
pub fn from_maybe<T: Clone>(default: T) -> impl Fn(Maybe<T>) -> T {
    move |value| value.from_maybe(default.clone())
}

// =============================================================================
// Type-erased Checks
// =============================================================================

/// Recovers a `Maybe<T>` from a type-erased value.
///
/// # Errors
///
/// Returns [`ContainerError::Malformed`] if `value` is not a `Maybe<T>`.
pub fn expect_maybe<T: 'static>(value: Box<dyn Any>) -> Result<Maybe<T>, ContainerError> {
    value
        .downcast::<Maybe<T>>()
        .map(|boxed| *boxed)
        .map_err(|_| ContainerError::malformed::<Maybe<T>>("Maybe"))
}

/// Tells whether an arbitrary value is a `Just` of `Maybe<T>`.
///
/// Never panics: any value that is not a `Maybe<T>` yields `false`.
///
/// # Examples
///
/// ```rust
/// use lambars_rx::control::{Maybe, maybe};
///
/// assert!(maybe::is_just::<i32>(&Maybe::Just(1)));
/// assert!(!maybe::is_just::<i32>(&Maybe::<i32>::Nothing));
/// assert!(!maybe::is_just::<i32>(&Some(1)));
/// ```
pub fn is_just<T: 'static>(value: &dyn Any) -> bool {
    value.downcast_ref::<Maybe<T>>().is_some_and(Maybe::is_just)
}

/// Tells whether an arbitrary value is `Nothing` of `Maybe<T>`.
///
/// Never panics: any value that is not a `Maybe<T>` yields `false`.
pub fn is_nothing<T: 'static>(value: &dyn Any) -> bool {
    value.downcast_ref::<Maybe<T>>().is_some_and(Maybe::is_nothing)
}

// =============================================================================
// Conversions and Formatting
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Just(value),
            None => Self::Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Just(value) => Some(value),
            Maybe::Nothing => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "Just({value})"),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}
