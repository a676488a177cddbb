//! Integration tests for the Maybe stream operators.
//!
//! - Unwrapping (default_to, extract)
//! - sequence
//! - distinct_until_changed
//! - Pointwise lifts (map::*)
//! - Switching lifts (switch_map::*), including cancellation

#![cfg(feature = "rx")]

use std::any::Any;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::StreamExt;
use futures::channel::mpsc;
use futures::stream;
use lambars_rx::control::Maybe;
use lambars_rx::rx::{Pipe, maybe};

fn source<T>(items: Vec<Maybe<T>>) -> stream::Iter<std::vec::IntoIter<Maybe<T>>> {
    stream::iter(items)
}

// =============================================================================
// Unwrapping
// =============================================================================

mod unwrapping_tests {
    use super::*;

    #[tokio::test]
    async fn default_to_substitutes_nothing() {
        let values = source(vec![Maybe::Just(1), Maybe::Nothing, Maybe::Just(3)])
            .pipe(maybe::default_to(-1))
            .collect::<Vec<_>>()
            .await;
        assert_eq!(values, vec![1, -1, 3]);
    }

    #[tokio::test]
    async fn extract_yields_none_for_nothing() {
        let values = source(vec![Maybe::Nothing, Maybe::Just("a")])
            .pipe(maybe::extract())
            .collect::<Vec<_>>()
            .await;
        assert_eq!(values, vec![None, Some("a")]);
    }
}

// =============================================================================
// sequence
// =============================================================================

mod sequence_tests {
    use super::*;

    #[tokio::test]
    async fn just_stream_is_rewrapped_element_by_element() {
        let values = maybe::sequence(Maybe::Just(stream::iter(vec![1, 2, 3])))
            .collect::<Vec<_>>()
            .await;
        assert_eq!(values, vec![Maybe::Just(1), Maybe::Just(2), Maybe::Just(3)]);
    }

    #[tokio::test]
    async fn just_empty_stream_emits_nothing_at_all() {
        let values = maybe::sequence(Maybe::Just(stream::empty::<i32>()))
            .collect::<Vec<_>>()
            .await;
        assert!(values.is_empty());
    }

    #[tokio::test]
    async fn nothing_is_a_single_element_stream() {
        let values = maybe::sequence(Maybe::<stream::Empty<i32>>::Nothing)
            .collect::<Vec<_>>()
            .await;
        assert_eq!(values, vec![Maybe::Nothing]);
    }
}

// =============================================================================
// distinct_until_changed
// =============================================================================

mod distinct_tests {
    use super::*;

    #[tokio::test]
    async fn suppresses_consecutive_repeats() {
        let values = source(vec![
            Maybe::Just(1),
            Maybe::Just(1),
            Maybe::Just(2),
            Maybe::Nothing,
            Maybe::Nothing,
            Maybe::Just(2),
        ])
        .pipe(maybe::distinct_until_changed())
        .collect::<Vec<_>>()
        .await;
        assert_eq!(
            values,
            vec![Maybe::Just(1), Maybe::Just(2), Maybe::Nothing, Maybe::Just(2)]
        );
    }

    #[tokio::test]
    async fn custom_comparator_sees_only_just_payloads() {
        let values = source(vec![
            Maybe::Just("Apple"),
            Maybe::Just("apple"),
            Maybe::Nothing,
            Maybe::Just("APPLE"),
        ])
        .pipe(maybe::distinct_until_changed_with(|a: &&str, b: &&str| {
            a.eq_ignore_ascii_case(b)
        }))
        .collect::<Vec<_>>()
        .await;
        assert_eq!(
            values,
            vec![Maybe::Just("Apple"), Maybe::Nothing, Maybe::Just("APPLE")]
        );
    }
}

// =============================================================================
// map::*
// =============================================================================

mod map_tests {
    use super::*;

    #[tokio::test]
    async fn fmap_preserves_order_and_cardinality() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let values = source(vec![Maybe::Just(5), Maybe::Nothing, Maybe::Just(7)])
            .pipe(maybe::map::fmap(move |x: i32| {
                counter.fetch_add(1, Ordering::SeqCst);
                x + 1
            }))
            .collect::<Vec<_>>()
            .await;
        assert_eq!(values, vec![Maybe::Just(6), Maybe::Nothing, Maybe::Just(8)]);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn apply_uses_the_same_function_for_every_element() {
        let values = source(vec![Maybe::Just(2), Maybe::Just(3), Maybe::Nothing])
            .pipe(maybe::map::apply(Maybe::Just(|x: i32| x * x)))
            .collect::<Vec<_>>()
            .await;
        assert_eq!(values, vec![Maybe::Just(4), Maybe::Just(9), Maybe::Nothing]);
    }

    #[tokio::test]
    async fn apply_with_nothing_function_empties_every_element() {
        let function: Maybe<fn(i32) -> i32> = Maybe::Nothing;
        let values = source(vec![Maybe::Just(2), Maybe::Nothing])
            .pipe(maybe::map::apply(function))
            .collect::<Vec<_>>()
            .await;
        assert_eq!(values, vec![Maybe::Nothing, Maybe::Nothing]);
    }

    #[tokio::test]
    async fn bind_can_turn_just_into_nothing() {
        let values = source(vec![Maybe::Just(4), Maybe::Just(5)])
            .pipe(maybe::map::bind(|x: i32| {
                if x % 2 == 0 { Maybe::Just(x / 2) } else { Maybe::Nothing }
            }))
            .collect::<Vec<_>>()
            .await;
        assert_eq!(values, vec![Maybe::Just(2), Maybe::Nothing]);
    }

    #[tokio::test]
    async fn try_bind_ends_the_stream_on_a_malformed_result() {
        let values = source(vec![Maybe::Just(1), Maybe::Just(2), Maybe::Just(3)])
            .pipe(maybe::map::try_bind::<i32, i32, _>(|x| {
                if x == 2 {
                    Box::new(x) as Box<dyn Any>
                } else {
                    Box::new(Maybe::Just(x * 10)) as Box<dyn Any>
                }
            }))
            .collect::<Vec<_>>()
            .await;
        assert_eq!(values.len(), 2);
        assert_eq!(values[0], Ok(Maybe::Just(10)));
        assert!(values[1].is_err());
    }
}

// =============================================================================
// switch_map::*
// =============================================================================

mod switch_map_tests {
    use super::*;

    #[tokio::test]
    async fn fmap_switches_on_every_ready_source_element() {
        let values = source(vec![Maybe::Just(2), Maybe::Nothing, Maybe::Just(3)])
            .pipe(maybe::switch_map::fmap(|n: usize| stream::iter(vec![n; n])))
            .collect::<Vec<_>>()
            .await;
        assert_eq!(
            values,
            vec![
                Maybe::Just(2),
                Maybe::Nothing,
                Maybe::Just(3),
                Maybe::Just(3),
                Maybe::Just(3),
            ]
        );
    }

    #[tokio::test]
    async fn fmap_is_not_starved_by_an_endless_inner_stream() {
        let values = source(vec![Maybe::Just(1), Maybe::Just(2)])
            .pipe(maybe::switch_map::fmap(|n: i32| stream::repeat(n)))
            .take(3)
            .collect::<Vec<_>>()
            .await;
        assert_eq!(values, vec![Maybe::Just(1), Maybe::Just(2), Maybe::Just(2)]);
    }

    #[tokio::test]
    async fn fmap_discards_items_buffered_in_the_replaced_inner_stream() {
        let (source_sender, source) = mpsc::unbounded::<Maybe<i32>>();
        let (first_sender, first_inner) = mpsc::unbounded::<i32>();
        let mut pending = Some(first_inner);
        let mut output = source.pipe(maybe::switch_map::fmap(move |n: i32| {
            pending
                .take()
                .map_or_else(|| stream::iter(vec![n * 100]).boxed(), StreamExt::boxed)
        }));

        source_sender.unbounded_send(Maybe::Just(1)).unwrap();
        first_sender.unbounded_send(10).unwrap();
        assert_eq!(output.next().await, Some(Maybe::Just(10)));

        source_sender.unbounded_send(Maybe::Just(2)).unwrap();
        first_sender.unbounded_send(11).unwrap();
        assert_eq!(output.next().await, Some(Maybe::Just(200)));
        assert!(first_sender.unbounded_send(12).is_err());

        drop(source_sender);
        assert_eq!(output.next().await, None);
    }

    #[tokio::test]
    async fn fmap_cancels_the_previous_inner_stream() {
        let (source_sender, source) = mpsc::unbounded::<Maybe<usize>>();
        let (first_sender, first_inner) = mpsc::unbounded::<&'static str>();
        let mut pending = Some(first_inner);
        let mut output = source.pipe(maybe::switch_map::fmap(move |n: usize| {
            pending.take().map_or_else(
                || stream::iter(vec!["fresh"; n]).boxed(),
                StreamExt::boxed,
            )
        }));

        source_sender.unbounded_send(Maybe::Just(1)).unwrap();
        first_sender.unbounded_send("first").unwrap();
        assert_eq!(output.next().await, Some(Maybe::Just("first")));

        source_sender.unbounded_send(Maybe::Just(2)).unwrap();
        assert_eq!(output.next().await, Some(Maybe::Just("fresh")));
        assert_eq!(output.next().await, Some(Maybe::Just("fresh")));
        assert!(first_sender.unbounded_send("late").is_err());

        drop(source_sender);
        assert_eq!(output.next().await, None);
    }

    #[tokio::test]
    async fn bind_flattens_a_container_of_streams() {
        let values = source(vec![Maybe::Just(0), Maybe::Just(3)])
            .pipe(maybe::switch_map::bind(|n: i32| {
                if n > 0 {
                    Maybe::Just(stream::iter(vec![n, n * 2]))
                } else {
                    Maybe::Nothing
                }
            }))
            .collect::<Vec<_>>()
            .await;
        assert_eq!(values, vec![Maybe::Nothing, Maybe::Just(3), Maybe::Just(6)]);
    }

    #[tokio::test]
    async fn apply_with_a_just_function() {
        let values = source(vec![Maybe::Nothing, Maybe::Just('a')])
            .pipe(maybe::switch_map::apply(Maybe::Just(|c: char| {
                stream::iter(vec![c, c.to_ascii_uppercase()])
            })))
            .collect::<Vec<_>>()
            .await;
        assert_eq!(values, vec![Maybe::Nothing, Maybe::Just('a'), Maybe::Just('A')]);
    }

    #[tokio::test]
    async fn id_short_circuits_nothing_without_calling_back() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let values = source(vec![Maybe::Nothing, Maybe::Just(4)])
            .pipe(maybe::switch_map::id(move |n: i32| {
                counter.fetch_add(1, Ordering::SeqCst);
                stream::iter(vec![Maybe::Just(n), Maybe::Nothing])
            }))
            .collect::<Vec<_>>()
            .await;
        assert_eq!(values, vec![Maybe::Nothing, Maybe::Just(4), Maybe::Nothing]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
