//! Functor type class - mapping over container values.
//!
//! A `Functor` lets a function transform the value inside a container
//! without changing the container's shape: a `Just` stays a `Just`, a
//! `Left` stays the same `Left`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambars_rx::control::Maybe;
//! use lambars_rx::typeclass::Functor;
//!
//! let value = Maybe::Just(5);
//! assert_eq!(value.fmap(|n| n + 1), Maybe::Just(6));
//!
//! let empty: Maybe<i32> = Maybe::Nothing;
//! assert_eq!(empty.fmap(|n| n + 1), Maybe::Nothing);
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// The short-circuiting variant of a container (`Nothing`, `Left`) must
/// never invoke the function.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// The function is called at most once, synchronously.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_rx::control::Either;
    /// use lambars_rx::typeclass::Functor;
    ///
    /// let right: Either<String, i32> = Either::Right(5);
    /// assert_eq!(right.fmap(|n| n * 2), Either::Right(10));
    ///
    /// let left: Either<String, i32> = Either::Left("error".to_string());
    /// assert_eq!(left.fmap(|n| n * 2), Either::Left("error".to_string()));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// Useful when the functor must stay available afterwards.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_rx::control::Maybe;
    /// use lambars_rx::typeclass::Functor;
    ///
    /// let name = Maybe::Just("hello".to_string());
    /// assert_eq!(name.fmap_ref(|s| s.len()), Maybe::Just(5));
    /// assert!(name.is_just());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_rx::control::Maybe;
    /// use lambars_rx::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::Just(5).replace("replaced"), Maybe::Just("replaced"));
    /// assert_eq!(Maybe::<i32>::Nothing.replace("replaced"), Maybe::Nothing);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}
