//! Reactive adapters for streams of containers.
//!
//! - [`maybe`]: operators over `Stream<Item = Maybe<T>>`
//! - [`either`]: operators over `Stream<Item = Either<L, R>>`
//!
//! Operators are plain values implementing [`Operator`] and are applied with
//! [`Pipe::pipe`]. Each adapter module groups them the same way:
//!
//! - `default_to`, `extract`: unwrap each element
//! - `sequence`: turn a container of a stream into a stream of containers
//! - `distinct_until_changed*`: drop consecutive repeats
//! - `map::*`: one-to-one `fmap`, `apply`, `bind` and `try_bind`
//! - `switch_map::*`: `fmap`, `apply`, `bind` and `id` producing nested
//!   streams, switching to the newest one
//!
//! # Examples
//!
//! ```rust
//! use futures::executor::block_on;
//! use futures::{StreamExt, stream};
//! use lambars_rx::control::Maybe;
//! use lambars_rx::rx::{Pipe, maybe};
//!
//! let expanded = stream::iter(vec![Maybe::Nothing, Maybe::Just(2)])
//!     .pipe(maybe::switch_map::fmap(|n: usize| stream::iter(vec![n; n])));
//! assert_eq!(
//!     block_on(expanded.collect::<Vec<_>>()),
//!     vec![Maybe::Nothing, Maybe::Just(2), Maybe::Just(2)]
//! );
//! ```

pub mod either;
pub mod maybe;
mod operator;
mod stream;

pub use operator::{Distinct, Lift, Operator, Pipe, Switch, TryLift};
pub use stream::{DistinctUntilChanged, Sequence, SwitchMap, TryLiftStream};
