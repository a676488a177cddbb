//! Algebraic containers.
//!
//! - [`Maybe`]: an optional value, `Just(T)` or `Nothing`
//! - [`Either`]: a right-biased disjunction, `Left(L)` or `Right(R)`
//!
//! Both implement [`Functor`](crate::typeclass::Functor),
//! [`Applicative`](crate::typeclass::Applicative) and
//! [`Monad`](crate::typeclass::Monad). The `maybe` and `either` submodules
//! also hold the type-erased checks used when a container crosses a
//! `dyn Any` boundary.
//!
//! # Examples
//!
//! ```rust
//! use lambars_rx::control::{Either, Maybe};
//! use lambars_rx::typeclass::{Functor, Monad};
//!
//! let total = Maybe::Just(5).fmap(|x| x + 1);
//! assert_eq!(total, Maybe::Just(6));
//!
//! let validated: Either<&str, i32> = Either::Right(-5)
//!     .bind(|x| if x > 0 { Either::Right(x) } else { Either::Left("neg") });
//! assert_eq!(validated, Either::Left("neg"));
//! ```

pub mod either;
mod error;
pub mod maybe;

pub use either::{Either, expect_either, from_right};
pub use error::{ContainerError, DEFAULT_ABSENT_MESSAGE, expect_present};
pub use maybe::{Maybe, expect_maybe, from_maybe, maybe};
