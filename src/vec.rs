//! Lets a [`Vec`] receive the results of [`filter_into()`](crate::filter_into)
//! and [`map_into()`](crate::map_into).
//!
//! A [`Vec`] is also what [`filter()`](crate::filter), [`reject()`](crate::reject)
//! and [`map()`](crate::map) return.

use std::ops::ControlFlow;

use crate::collector::{Collector, CollectorBase, IntoCollectorBase};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// Appends every collected item to a [`Vec`], then hands the [`Vec`] back.
///
/// Created by `Vec::into_collector()`. Items already in the [`Vec`] are kept
/// in front of the collected ones.
///
/// ```
/// use underbar::map_into;
///
/// let lens = map_into(["apple", "kiwi"], str::len, vec![0]);
///
/// assert_eq!(lens, [0, 5, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct VecCollector<T>(Vec<T>);

impl<T> IntoCollectorBase for Vec<T> {
    type Output = Vec<T>;

    type IntoCollector = VecCollector<T>;

    #[inline]
    fn into_collector(self) -> VecCollector<T> {
        VecCollector(self)
    }
}

impl<T> CollectorBase for VecCollector<T> {
    type Output = Vec<T>;

    #[inline]
    fn finish(self) -> Vec<T> {
        self.0
    }
}

impl<T> Collector<T> for VecCollector<T> {
    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        self.0.push(item);
        ControlFlow::Continue(())
    }

    fn collect_many<I>(&mut self, items: I) -> ControlFlow<()>
    where
        I: IntoIterator<Item = T>,
    {
        self.0.extend(items);
        ControlFlow::Continue(())
    }

    fn collect_then_finish<I>(self, items: I) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
    {
        let Self(mut vec) = self;
        vec.extend(items);
        vec
    }
}

#[cfg(all(test, feature = "std"))]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use crate::prelude::*;
    use crate::test_utils::check_collector;

    proptest! {
        #[test]
        fn appends_after_existing(
            prefix in propvec(any::<i16>(), ..4),
            nums in propvec(any::<i16>(), ..6),
        ) {
            let mut expected = prefix.clone();
            expected.extend_from_slice(&nums);

            check_collector(&nums, || prefix.clone().into_collector(), &expected, None)?;
        }
    }
}
