//! Stream operators for streams of [`Either`] values.
//!
//! The operators are right-biased: callbacks see `Right` payloads only, and
//! every `Left` passes through unchanged.
//!
//! ```rust
//! use futures::executor::block_on;
//! use futures::{StreamExt, stream};
//! use lambars_rx::control::Either;
//! use lambars_rx::rx::{Pipe, either};
//!
//! let values = stream::iter(vec![Either::Right(1), Either::Left("bad"), Either::Right(3)])
//!     .pipe(either::map::fmap(|n: i32| n + 1))
//!     .pipe(either::default_to(0));
//! assert_eq!(block_on(values.collect::<Vec<_>>()), vec![2, 0, 4]);
//! ```

use futures::Stream;

use super::operator::{Distinct, Lift};
use super::stream::Sequence;
use crate::control::{Either, from_right};

/// The stream produced by [`sequence`] for a container of `S`.
pub type SequenceEither<L, S> =
    Sequence<S, <S as Stream>::Item, Either<L, <S as Stream>::Item>>;

/// Emits the payload of each `Right`, or `default` for each `Left`.
pub fn default_to<L, R: Clone>(default: R) -> Lift<impl FnMut(Either<L, R>) -> R> {
    Lift::new(from_right(default))
}

/// Emits the payload of each `Right` as `Some`, and `None` for each `Left`.
pub fn extract<L, R>() -> Lift<impl FnMut(Either<L, R>) -> Option<R>> {
    Lift::new(Either::right)
}

/// Turns an `Either` of a stream into a stream of `Either`s.
///
/// `Right(stream)` re-emits every element of `stream` wrapped in `Right`;
/// `Left(e)` emits a single `Left(e)`.
///
/// # Examples
///
/// ```rust
/// use futures::executor::block_on;
/// use futures::{StreamExt, stream};
/// use lambars_rx::control::Either;
/// use lambars_rx::rx::either::sequence;
///
/// let failed = sequence(Either::<_, stream::Iter<std::vec::IntoIter<i32>>>::Left("e"));
/// assert_eq!(block_on(failed.collect::<Vec<_>>()), vec![Either::Left("e")]);
/// ```
pub fn sequence<L, S: Stream>(value: Either<L, S>) -> SequenceEither<L, S> {
    match value {
        Either::Right(stream) => Sequence::wrapped(stream, Either::Right),
        Either::Left(error) => Sequence::single(Either::Left(error)),
    }
}

/// Suppresses consecutive equal elements. Two `Left`s are always treated as
/// equal, two `Right`s are equal when their payloads are, and mixed
/// variants never are.
pub fn distinct_until_changed<L, R>()
-> Distinct<impl FnMut(&Either<L, R>, &Either<L, R>) -> bool>
where
    L: Clone,
    R: Clone + PartialEq,
{
    distinct_until_changed_with(|previous: &R, current: &R| previous == current)
}

/// Like [`distinct_until_changed`], with `Right` payloads compared by
/// `comparator`.
pub fn distinct_until_changed_with<L, R, F>(
    comparator: F,
) -> Distinct<impl FnMut(&Either<L, R>, &Either<L, R>) -> bool>
where
    L: Clone,
    R: Clone,
    F: FnMut(&R, &R) -> bool,
{
    distinct_until_changed_by(|_: &L, _: &L| true, comparator)
}

/// Suppresses consecutive equivalent elements, comparing `Left` payloads
/// with `left_comparator` and `Right` payloads with `right_comparator`.
///
/// # Examples
///
/// ```rust
/// use futures::executor::block_on;
/// use futures::{StreamExt, stream};
/// use lambars_rx::control::Either;
/// use lambars_rx::rx::{Pipe, either};
///
/// let source = stream::iter(vec![
///     Either::Left("a"),
///     Either::Left("b"),
///     Either::Right(1),
///     Either::Right(1),
/// ]);
/// let distinct = source.pipe(either::distinct_until_changed_by(
///     |a: &&str, b: &&str| a == b,
///     |a: &i32, b: &i32| a == b,
/// ));
/// assert_eq!(
///     block_on(distinct.collect::<Vec<_>>()),
///     vec![Either::Left("a"), Either::Left("b"), Either::Right(1)]
/// );
/// ```
pub fn distinct_until_changed_by<L, R, F, G>(
    mut left_comparator: F,
    mut right_comparator: G,
) -> Distinct<impl FnMut(&Either<L, R>, &Either<L, R>) -> bool>
where
    L: Clone,
    R: Clone,
    F: FnMut(&L, &L) -> bool,
    G: FnMut(&R, &R) -> bool,
{
    Distinct::new(
        move |previous: &Either<L, R>, current: &Either<L, R>| match (previous, current) {
            (Either::Left(previous), Either::Left(current)) => left_comparator(previous, current),
            (Either::Right(previous), Either::Right(current)) => {
                right_comparator(previous, current)
            }
            _ => false,
        },
    )
}

/// One-to-one operators lifting the `Either` methods over each element.
pub mod map {
    use std::any::Any;

    use crate::control::{ContainerError, Either};
    use crate::rx::operator::{Lift, TryLift};

    /// `(R -> U) -> Stream (Either L R) -> Stream (Either L U)`
    pub fn fmap<L, R, U, F>(mut function: F) -> Lift<impl FnMut(Either<L, R>) -> Either<L, U>>
    where
        F: FnMut(R) -> U,
    {
        Lift::new(move |value: Either<L, R>| value.fmap(&mut function))
    }

    /// `Either L (R -> U) -> Stream (Either L R) -> Stream (Either L U)`
    ///
    /// A `Right` element meeting a `Left` function becomes a copy of that
    /// `Left`.
    pub fn apply<L, R, U, F>(
        function: Either<L, F>,
    ) -> Lift<impl FnMut(Either<L, R>) -> Either<L, U>>
    where
        L: Clone,
        F: Fn(R) -> U,
    {
        Lift::new(move |value: Either<L, R>| match value {
            Either::Left(error) => Either::Left(error),
            right => right.apply(function.as_ref().map_left(L::clone)),
        })
    }

    /// `(R -> Either L U) -> Stream (Either L R) -> Stream (Either L U)`
    pub fn bind<L, R, U, F>(mut function: F) -> Lift<impl FnMut(Either<L, R>) -> Either<L, U>>
    where
        F: FnMut(R) -> Either<L, U>,
    {
        Lift::new(move |value: Either<L, R>| value.bind(&mut function))
    }

    /// `bind` for a type-erased callback. A callback result that is not an
    /// `Either<L, U>` becomes an `Err` item and ends the stream.
    pub fn try_bind<L, R, U, F>(
        mut function: F,
    ) -> TryLift<impl FnMut(Either<L, R>) -> Result<Either<L, U>, ContainerError>>
    where
        L: 'static,
        U: 'static,
        F: FnMut(R) -> Box<dyn Any>,
    {
        TryLift::new(move |value: Either<L, R>| value.try_bind(&mut function))
    }
}

/// Switching operators over `Either` elements. A new source element cancels
/// the nested stream of the previous one, and a `Left` short-circuits into
/// a single `Left` without calling the callback.
pub mod switch_map {
    use futures::Stream;

    use super::{SequenceEither, sequence};
    use crate::control::Either;
    use crate::rx::operator::Switch;
    use crate::rx::stream::Sequence;

    /// `(R -> Stream U) -> Stream (Either L R) -> Stream (Either L U)`
    pub fn fmap<L, R, I, F>(
        mut function: F,
    ) -> Switch<impl FnMut(Either<L, R>) -> SequenceEither<L, I>>
    where
        I: Stream,
        F: FnMut(R) -> I,
    {
        Switch::new(move |value: Either<L, R>| sequence(value.fmap(&mut function)))
    }

    /// `Either L (R -> Stream U) -> Stream (Either L R) -> Stream (Either L U)`
    pub fn apply<L, R, I, F>(
        function: Either<L, F>,
    ) -> Switch<impl FnMut(Either<L, R>) -> SequenceEither<L, I>>
    where
        L: Clone,
        I: Stream,
        F: Fn(R) -> I,
    {
        Switch::new(move |value: Either<L, R>| {
            sequence(match value {
                Either::Left(error) => Either::Left(error),
                right => right.apply(function.as_ref().map_left(L::clone)),
            })
        })
    }

    /// `(R -> Either L (Stream U)) -> Stream (Either L R) -> Stream (Either L U)`
    pub fn bind<L, R, I, F>(
        mut function: F,
    ) -> Switch<impl FnMut(Either<L, R>) -> SequenceEither<L, I>>
    where
        I: Stream,
        F: FnMut(R) -> Either<L, I>,
    {
        Switch::new(move |value: Either<L, R>| sequence(value.bind(&mut function)))
    }

    /// `(R -> Stream (Either L U)) -> Stream (Either L R) -> Stream (Either L U)`
    ///
    /// The callback's stream is emitted as is; a `Left` element becomes a
    /// single copy of itself.
    pub fn id<L, R, U, I, F>(
        mut function: F,
    ) -> Switch<impl FnMut(Either<L, R>) -> Sequence<I, Either<L, U>, Either<L, U>>>
    where
        I: Stream<Item = Either<L, U>>,
        F: FnMut(R) -> I,
    {
        Switch::new(move |value: Either<L, R>| match value {
            Either::Right(value) => Sequence::wrapped(function(value), std::convert::identity),
            Either::Left(error) => Sequence::single(Either::Left(error)),
        })
    }
}
