use std::ops::ControlFlow;

use crate::collector::{Collector, CollectorBase};

/// Left fold over the collected items. Never breaks.
///
/// Backs [`reduce()`](crate::reduce), which puts a [`map()`](Collector::map) in front of it.
pub(crate) struct Fold<A, F> {
    // Taken out while `combine` runs, put back right after.
    accum: Option<A>,
    combine: F,
}

impl<A, F> Fold<A, F> {
    #[inline]
    pub(crate) fn new<T>(initial: A, combine: F) -> Self
    where
        F: FnMut(A, T) -> A,
    {
        Self {
            accum: Some(initial),
            combine,
        }
    }
}

impl<A, F> CollectorBase for Fold<A, F> {
    type Output = A;

    #[inline]
    fn finish(self) -> A {
        self.accum.expect("accumulator should exist")
    }
}

impl<A, F, T> Collector<T> for Fold<A, F>
where
    F: FnMut(A, T) -> A,
{
    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        if let Some(accum) = self.accum.take() {
            self.accum = Some((self.combine)(accum, item));
        }
        ControlFlow::Continue(())
    }

    fn collect_then_finish<I>(self, items: I) -> A
    where
        I: IntoIterator<Item = T>,
    {
        let Self { accum, combine } = self;
        let initial = accum.expect("accumulator should exist");
        items.into_iter().fold(initial, combine)
    }
}
