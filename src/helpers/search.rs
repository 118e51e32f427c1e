use std::ops::ControlFlow;

use crate::collector::{Collector, CollectorBase};

/// Keeps the first item `pred` accepts and breaks right after it.
///
/// [`some()`](crate::some) asks whether anything was kept, [`every()`](crate::every)
/// searches for a counterexample, and [`find()`](crate::find) returns the item itself.
pub(crate) struct Search<T, P> {
    hit: Option<T>,
    pred: P,
}

impl<T, P> Search<T, P>
where
    P: FnMut(&T) -> bool,
{
    #[inline]
    pub(crate) fn new(pred: P) -> Self {
        Self { hit: None, pred }
    }
}

impl<T, P> CollectorBase for Search<T, P> {
    type Output = Option<T>;

    #[inline]
    fn finish(self) -> Option<T> {
        self.hit
    }

    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        if self.hit.is_some() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

impl<T, P> Collector<T> for Search<T, P>
where
    P: FnMut(&T) -> bool,
{
    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        if (self.pred)(&item) {
            self.hit = Some(item);
        }
        self.break_hint()
    }

    fn collect_many<I>(&mut self, items: I) -> ControlFlow<()>
    where
        I: IntoIterator<Item = T>,
    {
        self.break_hint()?;
        self.hit = items.into_iter().find(&mut self.pred);
        self.break_hint()
    }

    fn collect_then_finish<I>(self, items: I) -> Option<T>
    where
        I: IntoIterator<Item = T>,
    {
        let Self { hit, pred } = self;
        hit.or_else(|| items.into_iter().find(pred))
    }
}
