//! The underscore-style helpers re-exported at the crate root.

mod fallible;
mod fold;
mod search;

pub use fallible::*;

use crate::collector::Collector;
#[cfg(feature = "alloc")]
use crate::collector::IntoCollectorBase;
use fold::Fold;
pub(crate) use search::Search;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// Returns `true` if any element of `collection` satisfies `predicate`.
///
/// Elements are tested in iteration order, and the traversal stops at the first match:
/// `predicate` is not called on any element after it.
/// An empty collection yields `false`.
///
/// # Examples
///
/// ```
/// use underbar::some;
///
/// assert!(some([1, 3, 4], |&x| x % 2 == 0));
/// assert!(!some([1, 3, 5], |&x| x % 2 == 0));
/// assert!(!some(Vec::<i32>::new(), |_| true));
/// ```
#[inline]
pub fn some<I, P>(collection: I, predicate: P) -> bool
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    find(collection, predicate).is_some()
}

/// Returns `true` if every element of `collection` satisfies `predicate`.
///
/// The traversal stops at the first element failing `predicate`.
/// An empty collection yields `true`.
///
/// # Examples
///
/// ```
/// use underbar::every;
///
/// assert!(every(["apple", "banana"], |fruit| fruit.len() > 4));
/// assert!(!every(["apple", "kiwi"], |fruit| fruit.len() > 4));
/// assert!(every(Vec::<&str>::new(), |_| false));
/// ```
#[inline]
pub fn every<I, P>(collection: I, mut predicate: P) -> bool
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    let counterexample = find(collection, |item: &I::Item| !predicate(item));
    counterexample.is_none()
}

/// Returns a new [`Vec`] holding the elements of `collection` that satisfy `predicate`,
/// in iteration order.
///
/// Every element is visited. The result never shares storage with the input;
/// pass `&collection` to keep the input and collect references instead.
///
/// # Examples
///
/// ```
/// use underbar::filter;
///
/// let fruits = vec!["apple", "kiwi", "banana"];
///
/// assert_eq!(filter(&fruits, |fruit| fruit.len() > 4), [&"apple", &"banana"]);
/// assert_eq!(filter(fruits, |fruit| fruit.len() > 4), ["apple", "banana"]);
/// ```
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
#[inline]
pub fn filter<I, P>(collection: I, predicate: P) -> Vec<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    filter_into(collection, predicate, Vec::new())
}

/// Like [`filter()`], but appends the matching elements to `into`
/// and returns its output.
///
/// `into` is anything convertible into a collector: a [`Vec`], which is extended,
/// or any [`Collector`], such as one with its own [`map()`](Collector::map) in front.
///
/// # Examples
///
/// ```
/// use underbar::{filter_into, prelude::*};
///
/// let odds = filter_into(1..=5, |&x| x % 2 == 1, vec![-1]);
/// assert_eq!(odds, [-1, 1, 3, 5]);
///
/// let halve = vec![].into_collector().map(|x: i32| x / 2);
/// let halves = filter_into([2, 3, 4], |&x| x % 2 == 0, halve);
/// assert_eq!(halves, [1, 2]);
/// ```
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
#[inline]
pub fn filter_into<I, P, C>(collection: I, predicate: P, into: C) -> C::Output
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
    C: IntoCollectorBase<IntoCollector: Collector<I::Item>>,
{
    into.into_collector()
        .filter(predicate)
        .collect_then_finish(collection)
}

/// Returns a new [`Vec`] holding the elements of `collection` that do **not**
/// satisfy `predicate`, in iteration order.
///
/// The complement of [`filter()`].
///
/// # Examples
///
/// ```
/// use underbar::reject;
///
/// assert_eq!(reject([1, 2, 3, 4, 5, 6], |&x| x % 2 == 0), [1, 3, 5]);
/// ```
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
#[inline]
pub fn reject<I, P>(collection: I, mut predicate: P) -> Vec<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    filter_into(collection, move |item: &I::Item| !predicate(item), Vec::new())
}

/// Returns a new [`Vec`] holding `transform` applied to every element of `collection`,
/// in iteration order.
///
/// The result always has as many elements as the collection yields.
///
/// # Examples
///
/// ```
/// use underbar::map;
///
/// assert_eq!(map([1, 2, 3, 4], |x| x * x), [1, 4, 9, 16]);
/// assert_eq!(map(["apple", "kiwi"], str::len), [5, 4]);
/// ```
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
#[inline]
pub fn map<I, F, U>(collection: I, transform: F) -> Vec<U>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U,
{
    map_into(collection, transform, Vec::new())
}

/// Like [`map()`], but appends the transformed values to `into`
/// and returns its output.
///
/// # Examples
///
/// ```
/// use underbar::map_into;
///
/// let lens = map_into(["apple", "kiwi", "banana"], str::len, Vec::with_capacity(3));
///
/// assert_eq!(lens, [5, 4, 6]);
/// ```
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
#[inline]
pub fn map_into<I, F, U, C>(collection: I, transform: F, into: C) -> C::Output
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U,
    C: IntoCollectorBase<IntoCollector: Collector<U>>,
{
    into.into_collector()
        .map(transform)
        .collect_then_finish(collection)
}

/// Returns the first element of `collection` satisfying `predicate`,
/// or `None` if there is none.
///
/// The traversal stops at the first match.
///
/// # Examples
///
/// ```
/// use underbar::find;
///
/// assert_eq!(find([3, 5, 8, 10], |&x| x % 2 == 0), Some(8));
/// assert_eq!(find([3, 5, 7], |&x| x % 2 == 0), None);
/// ```
#[inline]
pub fn find<I, P>(collection: I, predicate: P) -> Option<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    Search::<I::Item, _>::new(predicate).collect_then_finish(collection)
}

/// Folds `collection` from left to right into a single value.
///
/// The accumulator starts at `initial`. Each element is first passed through `transform`,
/// then combined into the accumulator: `accum = combiner(accum, transform(element))`.
/// An empty collection yields `initial` unchanged.
///
/// # Examples
///
/// ```
/// use underbar::reduce;
///
/// assert_eq!(reduce([1, 2, 3, 4], |x| x, |a, b| a + b, 0), 10);
/// assert_eq!(reduce(Vec::<i32>::new(), |x| x, |a, b| a + b, 42), 42);
///
/// let total_len = reduce(["apple", "kiwi"], str::len, |a, b| a + b, 0);
/// assert_eq!(total_len, 9);
/// ```
#[inline]
pub fn reduce<I, F, C, U>(collection: I, transform: F, combiner: C, initial: U) -> U
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U,
    C: FnMut(U, U) -> U,
{
    Fold::new::<U>(initial, combiner)
        .map(transform)
        .collect_then_finish(collection)
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use std::cell::Cell;
    use std::panic::{self, AssertUnwindSafe};

    use super::*;

    #[test]
    fn some_stops_at_first_match() {
        let calls = Cell::new(0);
        let found = some([1, 2, 3, 4], |&x| {
            calls.set(calls.get() + 1);
            x == 2
        });

        assert!(found);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn every_stops_at_first_mismatch() {
        let calls = Cell::new(0);
        let all_small = every([1, 9, 2, 3], |&x| {
            calls.set(calls.get() + 1);
            x < 5
        });

        assert!(!all_small);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn filter_visits_every_element() {
        let calls = Cell::new(0);
        let kept = filter([1, 2, 3], |_| {
            calls.set(calls.get() + 1);
            false
        });

        assert!(kept.is_empty());
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn find_stops_at_first_match() {
        let calls = Cell::new(0);
        let found = find(["a", "bb", "cc"], |s| {
            calls.set(calls.get() + 1);
            s.len() == 2
        });

        assert_eq!(found, Some("bb"));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn input_is_left_untouched() {
        let nums = vec![4, 1, 3];
        let doubled = map(&nums, |&x| x * 2);
        let big = filter(&nums, |&&x| x > 2);

        assert_eq!(nums, [4, 1, 3]);
        assert_eq!(doubled, [8, 2, 6]);
        assert_eq!(big, [&4, &3]);
    }

    #[test]
    fn reduce_is_a_left_fold() {
        let digits = reduce([1, 2, 3], |d: u32| d.to_string(), |a, b| a + &b, String::new());
        assert_eq!(digits, "123");

        // Subtraction is not associative, so a right fold would differ.
        assert_eq!(reduce([1, 2, 3], |x| x, |a, b| a - b, 10), 4);
    }

    #[test]
    fn map_into_extends_existing() {
        let squares = map_into([2, 3], |x| x * x, vec![1]);
        assert_eq!(squares, [1, 4, 9]);
    }

    #[test]
    #[should_panic(expected = "boom")]
    fn panicking_predicate_propagates() {
        let _ = some([1, 2, 3], |&x| {
            assert!(x < 2, "boom");
            false
        });
    }

    #[test]
    #[should_panic(expected = "bad filter")]
    fn filter_predicate_panic_propagates() {
        let _ = filter([1, 2, 3], |&x| {
            assert!(x != 2, "bad filter");
            true
        });
    }

    #[test]
    #[should_panic(expected = "bad find")]
    fn find_predicate_panic_propagates() {
        let _ = find([1, 2, 3], |&x| {
            assert!(x < 2, "bad find");
            false
        });
    }

    #[test]
    #[should_panic(expected = "bad map")]
    fn map_transform_panic_propagates() {
        let _ = map([1, 2, 3], |x| {
            assert!(x != 3, "bad map");
            x
        });
    }

    #[test]
    #[should_panic(expected = "bad transform")]
    fn reduce_transform_panic_propagates() {
        let _ = reduce(
            [1, 2, 3],
            |x| {
                assert!(x != 2, "bad transform");
                x
            },
            |a, b| a + b,
            0,
        );
    }

    #[test]
    #[should_panic(expected = "bad combiner")]
    fn reduce_combiner_panic_propagates() {
        let _ = reduce(
            [1, 2, 3],
            |x| x,
            |a, b| {
                assert!(b != 3, "bad combiner");
                a + b
            },
            0,
        );
    }

    #[test]
    fn panic_stops_the_traversal() {
        let calls = Cell::new(0);
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            map([1, 2, 3, 4], |x| {
                calls.set(calls.get() + 1);
                assert!(x != 2, "bad map");
                x
            })
        }));

        assert!(outcome.is_err());
        assert_eq!(calls.get(), 2);
    }
}
