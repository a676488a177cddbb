//! Stream operators.
//!
//! An [`Operator`] turns a source stream into a derived stream, the way an
//! operator function plugs into a reactive pipeline. [`Pipe`] applies one
//! to any `futures::Stream`:
//!
//! ```rust
//! use futures::executor::block_on;
//! use futures::{StreamExt, stream};
//! use lambars_rx::rx::{Lift, Pipe};
//!
//! let doubled = stream::iter(vec![1, 2, 3]).pipe(Lift::new(|n: i32| n * 2));
//! assert_eq!(block_on(doubled.collect::<Vec<_>>()), vec![2, 4, 6]);
//! ```
//!
//! The four operator shapes the container adapters need are:
//!
//! | operator     | output stream                  | behaviour                         |
//! |--------------|--------------------------------|-----------------------------------|
//! | [`Lift`]     | `futures::stream::Map`         | one-to-one transform              |
//! | [`TryLift`]  | [`TryLiftStream`]              | fallible transform, ends on `Err` |
//! | [`Switch`]   | [`SwitchMap`]                  | switch to newest inner stream     |
//! | [`Distinct`] | [`DistinctUntilChanged`]       | drop consecutive equivalents      |

use futures::{Stream, StreamExt};

use super::stream::{DistinctUntilChanged, SwitchMap, TryLiftStream};

/// A transformation from a source stream to a derived stream.
pub trait Operator<S: Stream> {
    /// The derived stream.
    type Output: Stream;

    /// Applies the operator to `source`.
    fn call(self, source: S) -> Self::Output;
}

/// Extension trait applying an [`Operator`] to a stream.
pub trait Pipe: Stream + Sized {
    /// Applies `operator` to this stream.
    #[inline]
    fn pipe<O>(self, operator: O) -> O::Output
    where
        O: Operator<Self>,
    {
        operator.call(self)
    }
}

impl<S: Stream> Pipe for S {}

/// One-to-one element transform. Preserves order and cardinality.
#[derive(Clone)]
pub struct Lift<F> {
    function: F,
}

impl<F> Lift<F> {
    /// Creates an operator applying `function` to every element.
    pub const fn new(function: F) -> Self {
        Self { function }
    }
}

impl<S, F, U> Operator<S> for Lift<F>
where
    S: Stream,
    F: FnMut(S::Item) -> U,
{
    type Output = futures::stream::Map<S, F>;

    #[inline]
    fn call(self, source: S) -> Self::Output {
        source.map(self.function)
    }
}

/// Fallible one-to-one element transform; the output ends after the first
/// `Err`.
#[derive(Clone)]
pub struct TryLift<F> {
    function: F,
}

impl<F> TryLift<F> {
    /// Creates an operator applying the fallible `function` to every element.
    pub const fn new(function: F) -> Self {
        Self { function }
    }
}

impl<S, F, U, E> Operator<S> for TryLift<F>
where
    S: Stream,
    F: FnMut(S::Item) -> Result<U, E>,
{
    type Output = TryLiftStream<S, F>;

    #[inline]
    fn call(self, source: S) -> Self::Output {
        TryLiftStream::new(source, self.function)
    }
}

/// Maps every element to an inner stream with switching semantics: a new
/// source element cancels the inner stream of the previous one.
#[derive(Clone)]
pub struct Switch<F> {
    function: F,
}

impl<F> Switch<F> {
    /// Creates an operator switching to `function(element)` on every element.
    pub const fn new(function: F) -> Self {
        Self { function }
    }
}

impl<S, F, I> Operator<S> for Switch<F>
where
    S: Stream,
    F: FnMut(S::Item) -> I,
    I: Stream,
{
    type Output = SwitchMap<S, F, I>;

    #[inline]
    fn call(self, source: S) -> Self::Output {
        SwitchMap::new(source, self.function)
    }
}

/// Suppresses an element equivalent, under `equivalent`, to the last
/// emitted one.
#[derive(Clone)]
pub struct Distinct<F> {
    equivalent: F,
}

impl<F> Distinct<F> {
    /// Creates an operator using `equivalent(previous, current)` to detect
    /// repeats.
    pub const fn new(equivalent: F) -> Self {
        Self { equivalent }
    }
}

impl<S, F> Operator<S> for Distinct<F>
where
    S: Stream,
    S::Item: Clone,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    type Output = DistinctUntilChanged<S, S::Item, F>;

    #[inline]
    fn call(self, source: S) -> Self::Output {
        DistinctUntilChanged::new(source, self.equivalent)
    }
}
