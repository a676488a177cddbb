//! Stream operators for streams of [`Maybe`] values.
//!
//! ```rust
//! use futures::executor::block_on;
//! use futures::{StreamExt, stream};
//! use lambars_rx::control::Maybe;
//! use lambars_rx::rx::{Pipe, maybe};
//!
//! let values = stream::iter(vec![Maybe::Just(1), Maybe::Nothing, Maybe::Just(3)])
//!     .pipe(maybe::map::fmap(|n: i32| n * 2))
//!     .pipe(maybe::default_to(0));
//! assert_eq!(block_on(values.collect::<Vec<_>>()), vec![2, 0, 6]);
//! ```

use futures::Stream;

use super::operator::{Distinct, Lift};
use super::stream::Sequence;
use crate::control::{Maybe, from_maybe};

/// The stream produced by [`sequence`] for a container of `S`.
pub type SequenceMaybe<S> = Sequence<S, <S as Stream>::Item, Maybe<<S as Stream>::Item>>;

/// Emits the payload of each `Just`, or `default` for each `Nothing`.
pub fn default_to<T: Clone>(default: T) -> Lift<impl FnMut(Maybe<T>) -> T> {
    Lift::new(from_maybe(default))
}

/// Emits the payload of each `Just` as `Some`, and `None` for each `Nothing`.
pub fn extract<T>() -> Lift<impl FnMut(Maybe<T>) -> Option<T>> {
    Lift::new(Maybe::just)
}

/// Turns a `Maybe` of a stream into a stream of `Maybe`s.
///
/// `Just(stream)` re-emits every element of `stream` wrapped in `Just`;
/// `Nothing` emits a single `Nothing`.
///
/// # Examples
///
/// ```rust
/// use futures::executor::block_on;
/// use futures::{StreamExt, stream};
/// use lambars_rx::control::Maybe;
/// use lambars_rx::rx::maybe::sequence;
///
/// let present = sequence(Maybe::Just(stream::iter(vec![1, 2])));
/// assert_eq!(block_on(present.collect::<Vec<_>>()), vec![Maybe::Just(1), Maybe::Just(2)]);
///
/// let absent = sequence(Maybe::<stream::Iter<std::vec::IntoIter<i32>>>::Nothing);
/// assert_eq!(block_on(absent.collect::<Vec<_>>()), vec![Maybe::Nothing]);
/// ```
pub fn sequence<S: Stream>(value: Maybe<S>) -> SequenceMaybe<S> {
    match value {
        Maybe::Just(stream) => Sequence::wrapped(stream, Maybe::Just),
        Maybe::Nothing => Sequence::single(Maybe::Nothing),
    }
}

/// Suppresses consecutive equal elements: two `Nothing`s are always equal,
/// two `Just`s are equal when their payloads are, and a `Just` never equals
/// a `Nothing`.
pub fn distinct_until_changed<T>() -> Distinct<impl FnMut(&Maybe<T>, &Maybe<T>) -> bool>
where
    T: Clone + PartialEq,
{
    distinct_until_changed_with(|previous: &T, current: &T| previous == current)
}

/// Like [`distinct_until_changed`], with `Just` payloads compared by
/// `comparator` instead of `==`.
pub fn distinct_until_changed_with<T, F>(
    mut comparator: F,
) -> Distinct<impl FnMut(&Maybe<T>, &Maybe<T>) -> bool>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    Distinct::new(
        move |previous: &Maybe<T>, current: &Maybe<T>| match (previous, current) {
            (Maybe::Nothing, Maybe::Nothing) => true,
            (Maybe::Just(previous), Maybe::Just(current)) => comparator(previous, current),
            _ => false,
        },
    )
}

/// One-to-one operators lifting the `Maybe` methods over each element.
pub mod map {
    use std::any::Any;

    use crate::control::{ContainerError, Maybe};
    use crate::rx::operator::{Lift, TryLift};
    use crate::typeclass::{Applicative, Functor, Monad};

    /// `(T -> U) -> Stream (Maybe T) -> Stream (Maybe U)`
    pub fn fmap<T, U, F>(mut function: F) -> Lift<impl FnMut(Maybe<T>) -> Maybe<U>>
    where
        F: FnMut(T) -> U,
    {
        Lift::new(move |value: Maybe<T>| value.fmap(&mut function))
    }

    /// `Maybe (T -> U) -> Stream (Maybe T) -> Stream (Maybe U)`
    pub fn apply<T, U, F>(function: Maybe<F>) -> Lift<impl FnMut(Maybe<T>) -> Maybe<U>>
    where
        F: Fn(T) -> U,
    {
        Lift::new(move |value: Maybe<T>| value.apply(function.as_ref()))
    }

    /// `(T -> Maybe U) -> Stream (Maybe T) -> Stream (Maybe U)`
    pub fn bind<T, U, F>(mut function: F) -> Lift<impl FnMut(Maybe<T>) -> Maybe<U>>
    where
        F: FnMut(T) -> Maybe<U>,
    {
        Lift::new(move |value: Maybe<T>| value.bind(&mut function))
    }

    /// `bind` for a type-erased callback. A callback result that is not a
    /// `Maybe<U>` becomes an `Err` item and ends the stream.
    pub fn try_bind<T, U, F>(
        mut function: F,
    ) -> TryLift<impl FnMut(Maybe<T>) -> Result<Maybe<U>, ContainerError>>
    where
        U: 'static,
        F: FnMut(T) -> Box<dyn Any>,
    {
        TryLift::new(move |value: Maybe<T>| value.try_bind(&mut function))
    }
}

/// Switching operators: the callback yields a nested stream, and a new
/// source element cancels the nested stream of the previous one. `Nothing`
/// short-circuits into a single `Nothing` without calling the callback.
pub mod switch_map {
    use futures::Stream;

    use super::{SequenceMaybe, sequence};
    use crate::control::Maybe;
    use crate::rx::operator::Switch;
    use crate::rx::stream::Sequence;
    use crate::typeclass::{Applicative, Functor, Monad};

    /// `(T -> Stream U) -> Stream (Maybe T) -> Stream (Maybe U)`
    pub fn fmap<T, I, F>(mut function: F) -> Switch<impl FnMut(Maybe<T>) -> SequenceMaybe<I>>
    where
        I: Stream,
        F: FnMut(T) -> I,
    {
        Switch::new(move |value: Maybe<T>| sequence(value.fmap(&mut function)))
    }

    /// `Maybe (T -> Stream U) -> Stream (Maybe T) -> Stream (Maybe U)`
    pub fn apply<T, I, F>(function: Maybe<F>) -> Switch<impl FnMut(Maybe<T>) -> SequenceMaybe<I>>
    where
        I: Stream,
        F: Fn(T) -> I,
    {
        Switch::new(move |value: Maybe<T>| sequence(value.apply(function.as_ref())))
    }

    /// `(T -> Maybe (Stream U)) -> Stream (Maybe T) -> Stream (Maybe U)`
    pub fn bind<T, I, F>(mut function: F) -> Switch<impl FnMut(Maybe<T>) -> SequenceMaybe<I>>
    where
        I: Stream,
        F: FnMut(T) -> Maybe<I>,
    {
        Switch::new(move |value: Maybe<T>| sequence(value.bind(&mut function)))
    }

    /// `(T -> Stream (Maybe U)) -> Stream (Maybe T) -> Stream (Maybe U)`
    ///
    /// The callback's stream is emitted as is; a `Nothing` element becomes a
    /// single `Nothing`.
    pub fn id<T, U, I, F>(
        mut function: F,
    ) -> Switch<impl FnMut(Maybe<T>) -> Sequence<I, Maybe<U>, Maybe<U>>>
    where
        I: Stream<Item = Maybe<U>>,
        F: FnMut(T) -> I,
    {
        Switch::new(move |value: Maybe<T>| match value {
            Maybe::Just(value) => Sequence::wrapped(function(value), std::convert::identity),
            Maybe::Nothing => Sequence::single(Maybe::Nothing),
        })
    }
}
