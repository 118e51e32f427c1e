//! The collector traits every helper is built on.
//!
//! A collector is fed items one at a time and turns them into an output once
//! finished. [`Collector::collect()`] answers with [`ControlFlow::Break`] as soon as
//! the collector wants nothing more, which is how [`some()`](crate::some) and
//! [`find()`](crate::find) stop at the first match.
//!
//! Once a collector has answered `Break`, only [`finish()`](CollectorBase::finish)
//! has a defined result. Feeding it further items stays memory-safe, but whether
//! those items are kept or ignored is up to the implementation.
//!
//! # Example
//!
//! A collector counting words longer than a threshold, usable as the target of
//! any helper that accepts a collector:
//!
//! ```
//! use std::ops::ControlFlow;
//! use underbar::prelude::*;
//!
//! struct LongWords {
//!     min_len: usize,
//!     count: usize,
//! }
//!
//! impl CollectorBase for LongWords {
//!     type Output = usize;
//!
//!     fn finish(self) -> usize {
//!         self.count
//!     }
//! }
//!
//! impl<'a> Collector<&'a str> for LongWords {
//!     fn collect(&mut self, word: &'a str) -> ControlFlow<()> {
//!         self.count += usize::from(word.len() >= self.min_len);
//!         ControlFlow::Continue(())
//!     }
//! }
//!
//! let words = "the noble and the singer".split_whitespace();
//! let count = LongWords { min_len: 5, count: 0 }.collect_then_finish(words);
//!
//! assert_eq!(count, 2);
//! ```

use std::ops::ControlFlow;

mod adapters;

pub use adapters::{Filter, Map};

/// The part of a collector that does not depend on the item type.
pub trait CollectorBase {
    /// What [`finish()`](CollectorBase::finish) hands back.
    type Output;

    /// Consumes the collector and produces its output.
    fn finish(self) -> Self::Output;

    /// Tells whether the collector is already known to want no more items.
    ///
    /// Feeders ask once before a batch so that no item is pulled for nothing.
    /// [`Continue(())`](ControlFlow::Continue) is always a correct answer.
    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

/// A sink for items of type `T`.
///
/// Only [`collect()`](Collector::collect) has to be written. Overrides of
/// [`collect_many()`](Collector::collect_many) and
/// [`collect_then_finish()`](Collector::collect_then_finish) must behave as if
/// `collect()` was called on each item until it breaks.
pub trait Collector<T>: CollectorBase {
    /// Feeds one item. Returns [`Break(())`](ControlFlow::Break) once the collector
    /// will not accept anything more.
    fn collect(&mut self, item: T) -> ControlFlow<()>;

    /// Feeds items until they run out or the collector breaks.
    ///
    /// Items after the one that caused the break are not pulled.
    ///
    /// ```
    /// use underbar::prelude::*;
    ///
    /// let mut items = [1, 2, 3].into_iter();
    /// let mut collector = vec![].into_collector();
    ///
    /// assert!(collector.collect_many(&mut items).is_continue());
    /// assert_eq!(collector.finish(), [1, 2, 3]);
    /// ```
    fn collect_many<I>(&mut self, items: I) -> ControlFlow<()>
    where
        I: IntoIterator<Item = T>,
        Self: Sized,
    {
        self.break_hint()?;
        items.into_iter().try_for_each(|item| self.collect(item))
    }

    /// Feeds items like [`collect_many()`](Collector::collect_many), then finishes.
    fn collect_then_finish<I>(mut self, items: I) -> Self::Output
    where
        I: IntoIterator<Item = T>,
        Self: Sized,
    {
        let _ = self.collect_many(items);
        self.finish()
    }

    /// Wraps the collector so that only items accepted by `pred` reach it.
    ///
    /// ```
    /// use underbar::prelude::*;
    ///
    /// let long = vec![].into_collector().filter(|word: &&str| word.len() > 4);
    ///
    /// assert_eq!(long.collect_then_finish(["apple", "kiwi", "banana"]), ["apple", "banana"]);
    /// ```
    #[inline]
    fn filter<P>(self, pred: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&T) -> bool,
    {
        Filter { inner: self, pred }
    }

    /// Wraps the collector so that every item goes through `f` first.
    ///
    /// The wrapper collects whatever `f` accepts.
    ///
    /// ```
    /// use underbar::prelude::*;
    ///
    /// let squares = vec![].into_collector().map(|x: i32| x * x);
    ///
    /// assert_eq!(squares.collect_then_finish([1, 2, 3]), [1, 4, 9]);
    /// ```
    #[inline]
    fn map<F, U>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(U) -> T,
    {
        Map { inner: self, f }
    }
}

/// Turns a value into a collector.
///
/// Containers implement this to become the target of
/// [`filter_into()`](crate::filter_into) and [`map_into()`](crate::map_into).
/// Every collector converts into itself.
pub trait IntoCollectorBase {
    /// The output of the produced collector.
    type Output;

    /// The produced collector.
    type IntoCollector: CollectorBase<Output = Self::Output>;

    /// Performs the conversion.
    fn into_collector(self) -> Self::IntoCollector;
}

impl<C: CollectorBase> IntoCollectorBase for C {
    type Output = C::Output;

    type IntoCollector = C;

    #[inline]
    fn into_collector(self) -> C {
        self
    }
}
