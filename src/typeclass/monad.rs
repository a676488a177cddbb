//! Monad type class - sequencing computations within a context.
//!
//! `Monad` extends [`Applicative`] with `bind`, which lets the value of one
//! step decide the next step. A short-circuiting container (`Nothing`,
//! `Left`) skips every remaining step.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).bind(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.bind(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambars_rx::control::Either;
//! use lambars_rx::typeclass::Monad;
//!
//! fn positive(n: i32) -> Either<&'static str, i32> {
//!     if n > 0 { Either::Right(n) } else { Either::Left("neg") }
//! }
//!
//! assert_eq!(Either::Right(5).bind(positive), Either::Right(5));
//! assert_eq!(Either::Right(-5).bind(positive), Either::Left("neg"));
//! ```

use super::applicative::Applicative;

/// A type class for types that support sequencing of computations.
pub trait Monad: Applicative {
    /// Applies a function returning a container to the value inside the
    /// monad, and returns that container unchanged.
    ///
    /// In Haskell, this is `>>=`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_rx::control::Maybe;
    /// use lambars_rx::typeclass::Monad;
    ///
    /// let halve = |n: i32| if n % 2 == 0 { Maybe::Just(n / 2) } else { Maybe::Nothing };
    /// assert_eq!(Maybe::Just(10).bind(halve), Maybe::Just(5));
    /// assert_eq!(Maybe::Just(5).bind(halve), Maybe::Nothing);
    /// ```
    fn bind<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`bind`](Monad::bind).
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.bind(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// In Haskell, this is the `>>` operator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_rx::control::Maybe;
    /// use lambars_rx::typeclass::Monad;
    ///
    /// assert_eq!(Maybe::Just(5).then(Maybe::Just("hello")), Maybe::Just("hello"));
    /// assert_eq!(Maybe::<i32>::Nothing.then(Maybe::Just("hello")), Maybe::Nothing);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.bind(|_| next)
    }
}
