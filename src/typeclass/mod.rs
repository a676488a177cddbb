//! Type class traits for functional programming abstractions.
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Applying functions within containers
//! - [`Monad`]: Sequencing computations with dependency
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types to emulate them, so
//! the traits above can talk about `Maybe<_>` and `Either<L, _>` generically.
//!
//! # Examples
//!
//! ```rust
//! use lambars_rx::control::Maybe;
//! use lambars_rx::typeclass::{Applicative, Functor, Monad};
//!
//! let result = <Maybe<()>>::pure(4)
//!     .fmap(|n| n * 10)
//!     .bind(|n| if n > 0 { Maybe::Just(n) } else { Maybe::Nothing });
//! assert_eq!(result, Maybe::Just(40));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
