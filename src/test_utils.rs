use std::fmt::Debug;

use proptest::prelude::*;
use proptest::test_runner::TestCaseResult;

use crate::collector::{Collector, CollectorBase};

/// Feeds `items` to fresh collectors from `make` in the three supported ways:
/// one [`collect()`](Collector::collect) per item, a single
/// [`collect_many()`](Collector::collect_many), and
/// [`collect_then_finish()`](Collector::collect_then_finish).
///
/// All three must end in `expected`. `stop` is the index of the item the collector
/// breaks on, if any. The first two ways must break exactly there, and
/// `collect_many()` must leave every item after it unpulled.
pub(crate) fn check_collector<T, C>(
    items: &[T],
    make: impl Fn() -> C,
    expected: &C::Output,
    stop: Option<usize>,
) -> TestCaseResult
where
    T: Clone,
    C: Collector<T>,
    C::Output: PartialEq + Debug,
{
    let mut one_by_one = make();
    let mut stopped_at = None;
    for (idx, item) in items.iter().cloned().enumerate() {
        if one_by_one.collect(item).is_break() {
            stopped_at = Some(idx);
            break;
        }
    }
    prop_assert_eq!(stopped_at, stop, "`collect()` broke on the wrong item");
    prop_assert_eq!(&one_by_one.finish(), expected);

    let mut remaining = items.iter().cloned();
    let mut batched = make();
    let flow = batched.collect_many(&mut remaining);
    prop_assert_eq!(flow.is_break(), stop.is_some());
    prop_assert_eq!(
        remaining.count(),
        stop.map_or(0, |idx| items.len() - idx - 1),
        "`collect_many()` pulled the wrong number of items"
    );
    prop_assert_eq!(&batched.finish(), expected);

    let finished = make().collect_then_finish(items.iter().cloned());
    prop_assert_eq!(&finished, expected);
    Ok(())
}
