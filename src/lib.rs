//! # lambars-rx
//!
//! `Maybe` and `Either` containers with functor, applicative and monad
//! instances, plus operators that lift them over asynchronous streams.
//!
//! ## Overview
//!
//! - **Type Classes**: Functor, Applicative, Monad over a GAT-based
//!   higher-kinded type emulation
//! - **Containers**: `Maybe<T>` and the right-biased `Either<L, R>`, with
//!   eliminators and type-erased checks for values behind `dyn Any`
//! - **Reactive Adapters**: `default_to`, `sequence`, `distinct_until_changed`,
//!   `map::*` and `switch_map::*` operators over `futures::Stream`
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Applicative, Monad)
//! - `control`: The `Maybe` and `Either` containers
//! - `rx`: Stream operators for the containers
//! - `serde`: `Serialize`/`Deserialize` for the containers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lambars_rx::prelude::*;
//!
//! let parsed: Either<String, i32> = "42"
//!     .parse::<i32>()
//!     .map_err(|error| error.to_string())
//!     .into();
//! assert_eq!(parsed.fmap(|n| n / 2), Either::Right(21));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the type classes, the containers and the stream operator
/// traits. The adapter modules stay namespaced as `rx::maybe` and
/// `rx::either`.
///
/// # Usage
///
/// ```rust
/// use lambars_rx::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::{
        ContainerError, Either, Maybe, expect_present, from_maybe, from_right,
    };

    #[cfg(feature = "rx")]
    pub use crate::rx::{Operator, Pipe};
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "rx")]
pub mod rx;
