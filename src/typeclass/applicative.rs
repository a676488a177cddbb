//! Applicative type class - applying functions within contexts.
//!
//! `Applicative` extends [`Functor`] with:
//!
//! - `pure`: lifting a plain value into the context
//! - `apply`: applying a function that itself lives in the context
//! - `map2` / `product`: combining independent values in the context
//!
//! `apply` is receiver-first on the *value*: `value.apply(function)`. A
//! short-circuiting receiver (`Nothing`, `Left`) returns itself without
//! inspecting the function container at all.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! v.apply(pure(|x| x)) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(x).apply(pure(f)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! pure(y).apply(u) == u.apply(pure(|f| f(y)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambars_rx::control::Maybe;
//! use lambars_rx::typeclass::Applicative;
//!
//! let value = Maybe::Just(5);
//! assert_eq!(value.apply(Maybe::Just(|n: i32| n * 3)), Maybe::Just(15));
//!
//! let sum = Maybe::Just(1).map2(Maybe::Just(2), |a, b| a + b);
//! assert_eq!(sum, Maybe::Just(3));
//! ```

use super::functor::Functor;

/// A type class for types that support lifting values and applying
/// contained functions.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_rx::control::{Either, Maybe};
    /// use lambars_rx::typeclass::Applicative;
    ///
    /// let x: Maybe<i32> = <Maybe<()>>::pure(42);
    /// assert_eq!(x, Maybe::Just(42));
    ///
    /// let y: Either<String, i32> = <Either<String, ()>>::pure(7);
    /// assert_eq!(y, Either::Right(7));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Applies the function held in `function` to the value held in `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_rx::control::Maybe;
    /// use lambars_rx::typeclass::Applicative;
    ///
    /// let missing: Maybe<fn(i32) -> i32> = Maybe::Nothing;
    /// assert_eq!(Maybe::Just(1).apply(missing), Maybe::Nothing);
    /// ```
    fn apply<B, F>(self, function: Self::WithType<F>) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Combines two applicative values using a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines two applicative values into a tuple.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_rx::control::Maybe;
    /// use lambars_rx::typeclass::Applicative;
    ///
    /// assert_eq!(Maybe::Just(1).product(Maybe::Just("a")), Maybe::Just((1, "a")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }
}
