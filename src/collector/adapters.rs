use std::{fmt, ops::ControlFlow};

use super::{Collector, CollectorBase};

/// Forwards only the items a predicate accepts.
///
/// Returned by [`Collector::filter()`].
#[derive(Clone)]
pub struct Filter<C, P> {
    pub(super) inner: C,
    pub(super) pred: P,
}

/// Runs every item through a function before forwarding it.
///
/// Returned by [`Collector::map()`].
#[derive(Clone)]
pub struct Map<C, F> {
    pub(super) inner: C,
    pub(super) f: F,
}

// Both adapters own their output and stop hint through the wrapped collector.
macro_rules! delegate_base {
    ($($adapter:ident),*) => {$(
        impl<C: CollectorBase, G> CollectorBase for $adapter<C, G> {
            type Output = C::Output;

            #[inline]
            fn finish(self) -> Self::Output {
                self.inner.finish()
            }

            #[inline]
            fn break_hint(&self) -> ControlFlow<()> {
                self.inner.break_hint()
            }
        }

        impl<C: fmt::Debug, G> fmt::Debug for $adapter<C, G> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($adapter)).field(&self.inner).finish()
            }
        }
    )*};
}

delegate_base!(Filter, Map);

impl<C, P, T> Collector<T> for Filter<C, P>
where
    C: Collector<T>,
    P: FnMut(&T) -> bool,
{
    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        if !(self.pred)(&item) {
            return self.inner.break_hint();
        }

        self.inner.collect(item)
    }

    fn collect_many<I>(&mut self, items: I) -> ControlFlow<()>
    where
        I: IntoIterator<Item = T>,
    {
        let Self { inner, pred } = self;
        inner.collect_many(items.into_iter().filter(pred))
    }

    fn collect_then_finish<I>(self, items: I) -> Self::Output
    where
        I: IntoIterator<Item = T>,
    {
        let Self { inner, pred } = self;
        inner.collect_then_finish(items.into_iter().filter(pred))
    }
}

impl<C, F, T, U> Collector<U> for Map<C, F>
where
    C: Collector<T>,
    F: FnMut(U) -> T,
{
    #[inline]
    fn collect(&mut self, item: U) -> ControlFlow<()> {
        let mapped = (self.f)(item);
        self.inner.collect(mapped)
    }

    fn collect_many<I>(&mut self, items: I) -> ControlFlow<()>
    where
        I: IntoIterator<Item = U>,
    {
        let Self { inner, f } = self;
        inner.collect_many(items.into_iter().map(f))
    }

    fn collect_then_finish<I>(self, items: I) -> Self::Output
    where
        I: IntoIterator<Item = U>,
    {
        let Self { inner, f } = self;
        inner.collect_then_finish(items.into_iter().map(f))
    }
}
