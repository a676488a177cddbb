//! Stream types produced by the operators in [`operator`](super::operator).
//!
//! Each type is a hand-written state machine over `futures::Stream`, pinned
//! with `pin_project_lite` the same way `AsyncIO` pins its inner futures.
//! Dropping any of them drops (cancels) every stream it owns.

use std::pin::Pin;
use std::task::{Context, Poll, ready};

use futures::Stream;
use pin_project_lite::pin_project;

// =============================================================================
// SwitchMap
// =============================================================================

pin_project! {
    /// Maps each source element to an inner stream and emits the elements of
    /// the most recent inner stream only.
    ///
    /// Every poll looks at the source first. A ready source element drops
    /// the inner stream in flight, even one that still has items ready, and
    /// the new inner stream is polled at once. The current inner stream is
    /// only polled once the source is pending or finished.
    ///
    /// The stream ends once the source has ended and the last inner stream
    /// has ended.
    #[must_use = "streams do nothing unless polled"]
    pub struct SwitchMap<S, F, I> {
        #[pin]
        source: S,
        #[pin]
        inner: Option<I>,
        function: F,
        source_done: bool,
    }
}

impl<S, F, I> SwitchMap<S, F, I>
where
    S: Stream,
    F: FnMut(S::Item) -> I,
{
    pub(crate) const fn new(source: S, function: F) -> Self {
        Self {
            source,
            inner: None,
            function,
            source_done: false,
        }
    }
}

impl<S, F, I> Stream for SwitchMap<S, F, I>
where
    S: Stream,
    F: FnMut(S::Item) -> I,
    I: Stream,
{
    type Item = I::Item;

    fn poll_next(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        let mut inner_polled = false;

        while !*this.source_done {
            match this.source.as_mut().poll_next(context) {
                Poll::Ready(Some(item)) => {
                    if this.inner.is_some() {
                        tracing::trace!("cancelling in-flight inner stream");
                    }
                    this.inner.set(Some((this.function)(item)));
                    inner_polled = true;
                    if let Some(inner) = this.inner.as_mut().as_pin_mut() {
                        match inner.poll_next(context) {
                            Poll::Ready(Some(item)) => return Poll::Ready(Some(item)),
                            Poll::Ready(None) => this.inner.set(None),
                            Poll::Pending => {}
                        }
                    }
                }
                Poll::Ready(None) => *this.source_done = true,
                Poll::Pending => break,
            }
        }

        if !inner_polled && let Some(inner) = this.inner.as_mut().as_pin_mut() {
            match inner.poll_next(context) {
                Poll::Ready(Some(item)) => return Poll::Ready(Some(item)),
                Poll::Ready(None) => this.inner.set(None),
                Poll::Pending => {}
            }
        }

        if *this.source_done && this.inner.is_none() {
            Poll::Ready(None)
        } else {
            Poll::Pending
        }
    }
}

// =============================================================================
// DistinctUntilChanged
// =============================================================================

pin_project! {
    /// Suppresses a source element when it is equivalent to the element
    /// emitted last.
    #[must_use = "streams do nothing unless polled"]
    pub struct DistinctUntilChanged<S, T, F> {
        #[pin]
        source: S,
        previous: Option<T>,
        equivalent: F,
    }
}

impl<S, T, F> DistinctUntilChanged<S, T, F>
where
    S: Stream<Item = T>,
{
    pub(crate) const fn new(source: S, equivalent: F) -> Self {
        Self {
            source,
            previous: None,
            equivalent,
        }
    }
}

impl<S, F> Stream for DistinctUntilChanged<S, S::Item, F>
where
    S: Stream,
    S::Item: Clone,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        loop {
            let Some(item) = ready!(this.source.as_mut().poll_next(context)) else {
                return Poll::Ready(None);
            };
            let repeated = this
                .previous
                .as_ref()
                .is_some_and(|previous| (this.equivalent)(previous, &item));
            if !repeated {
                *this.previous = Some(item.clone());
                return Poll::Ready(Some(item));
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.source.size_hint();
        (lower.min(1), upper)
    }
}

// =============================================================================
// Sequence
// =============================================================================

pin_project! {
    /// A stream of containers built from a container of a stream.
    ///
    /// A wrapped stream re-emits every element of the inner stream passed
    /// through its wrapping function; a single value is emitted once before
    /// the stream ends.
    #[must_use = "streams do nothing unless polled"]
    pub struct Sequence<S, T, C> {
        #[pin]
        state: SequenceState<S, T, C>,
    }
}

pin_project! {
    #[project = SequenceProjection]
    enum SequenceState<S, T, C> {
        Wrapped {
            #[pin]
            stream: S,
            wrap: fn(T) -> C,
        },
        Single {
            value: Option<C>,
        },
    }
}

impl<S, T, C> Sequence<S, T, C> {
    pub(crate) const fn wrapped(stream: S, wrap: fn(T) -> C) -> Self {
        Self {
            state: SequenceState::Wrapped { stream, wrap },
        }
    }

    pub(crate) const fn single(value: C) -> Self {
        Self {
            state: SequenceState::Single { value: Some(value) },
        }
    }
}

impl<S, C> Stream for Sequence<S, S::Item, C>
where
    S: Stream,
{
    type Item = C;

    fn poll_next(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Option<C>> {
        match self.project().state.project() {
            SequenceProjection::Wrapped { stream, wrap } => {
                Poll::Ready(ready!(stream.poll_next(context)).map(*wrap))
            }
            SequenceProjection::Single { value } => Poll::Ready(value.take()),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            SequenceState::Wrapped { stream, .. } => stream.size_hint(),
            SequenceState::Single { value } => {
                let remaining = usize::from(value.is_some());
                (remaining, Some(remaining))
            }
        }
    }
}

// =============================================================================
// TryLiftStream
// =============================================================================

pin_project! {
    /// Applies a fallible function to each source element and ends after
    /// the first `Err` it yields.
    #[must_use = "streams do nothing unless polled"]
    pub struct TryLiftStream<S, F> {
        #[pin]
        source: S,
        function: F,
        failed: bool,
    }
}

impl<S, F> TryLiftStream<S, F> {
    pub(crate) const fn new(source: S, function: F) -> Self {
        Self {
            source,
            function,
            failed: false,
        }
    }
}

impl<S, F, U, E> Stream for TryLiftStream<S, F>
where
    S: Stream,
    F: FnMut(S::Item) -> Result<U, E>,
{
    type Item = Result<U, E>;

    fn poll_next(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        if *this.failed {
            return Poll::Ready(None);
        }
        let Some(item) = ready!(this.source.poll_next(context)) else {
            return Poll::Ready(None);
        };
        let result = (this.function)(item);
        *this.failed = result.is_err();
        Poll::Ready(Some(result))
    }
}
