//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Maybe<_>` or `Either<L, _>` as type
//! constructors directly. [`TypeConstructor`] works around this with a
//! generic associated type, which is what lets [`Functor`](super::Functor),
//! [`Applicative`](super::Applicative) and [`Monad`](super::Monad) name
//! "the same container holding a different type".
//!
//! # Example
//!
//! ```rust
//! use lambars_rx::control::Maybe;
//! use lambars_rx::typeclass::TypeConstructor;
//!
//! fn empty_like<T: TypeConstructor>(_value: &T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let source: Maybe<i32> = Maybe::Just(42);
//! assert_eq!(empty_like(&source), Maybe::Nothing);
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter the constructor is currently applied to.
///   For `Maybe<i32>` this is `i32`; for `Either<L, R>` it is `R`, since
///   `Either` is right-biased.
/// - `WithType<B>`: The same constructor applied to `B`. For
///   `Either<L, R>` the left type is preserved: `Either<L, B>`.
///
/// # Laws
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}
