//! `try_` counterparts of the helpers, for closures returning [`Result`].
//!
//! The first `Err` returned by a caller-supplied closure stops the traversal
//! and is handed back unchanged. No partial result is returned, and the closure
//! is not called again after it failed.

#[cfg(feature = "alloc")]
use crate::collector::{Collector, IntoCollectorBase};

#[cfg(feature = "alloc")]
use super::filter_into;
use super::{every, find, some};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// Yields the `Ok` values of `iter` and ends at the first `Err`,
/// which is parked in `residual`.
struct Shunt<'r, I, E> {
    iter: I,
    residual: &'r mut Option<E>,
}

impl<I, T, E> Iterator for Shunt<'_, I, E>
where
    I: Iterator<Item = Result<T, E>>,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.residual.is_some() {
            return None;
        }

        match self.iter.next()? {
            Ok(value) => Some(value),
            Err(error) => {
                *self.residual = Some(error);
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.residual.is_some() {
            (0, Some(0))
        } else {
            (0, self.iter.size_hint().1)
        }
    }
}

fn try_process<I, T, E, R>(items: I, f: impl FnOnce(Shunt<'_, I, E>) -> R) -> Result<R, E>
where
    I: Iterator<Item = Result<T, E>>,
{
    let mut residual = None;
    let output = f(Shunt {
        iter: items,
        residual: &mut residual,
    });

    match residual {
        Some(error) => Err(error),
        None => Ok(output),
    }
}

/// Fallible [`some()`](crate::some).
///
/// # Examples
///
/// ```
/// use underbar::try_some;
///
/// let parse = |s: &&str| s.parse::<i32>().map(|n| n < 0);
///
/// assert_eq!(try_some(["1", "-2", "x"], parse), Ok(true));
/// assert!(try_some(["1", "x", "-2"], parse).is_err());
/// ```
pub fn try_some<I, P, E>(collection: I, mut predicate: P) -> Result<bool, E>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> Result<bool, E>,
{
    try_process(
        collection.into_iter().map(|item| predicate(&item)),
        |matches| some(matches, |&matched| matched),
    )
}

/// Fallible [`every()`](crate::every).
///
/// # Examples
///
/// ```
/// use underbar::try_every;
///
/// let small = |s: &&str| s.parse::<u8>().map(|n| n < 10);
///
/// assert_eq!(try_every(["1", "2"], small), Ok(true));
/// assert_eq!(try_every(["1", "20", "x"], small), Ok(false));
/// assert!(try_every(["1", "x", "20"], small).is_err());
/// ```
pub fn try_every<I, P, E>(collection: I, mut predicate: P) -> Result<bool, E>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> Result<bool, E>,
{
    try_process(
        collection.into_iter().map(|item| predicate(&item)),
        |passes| every(passes, |&passed| passed),
    )
}

/// Fallible [`find()`](crate::find).
///
/// `Ok(None)` means every element was tested successfully and none matched.
///
/// # Examples
///
/// ```
/// use underbar::try_find;
///
/// let even = |s: &&str| s.parse::<i32>().map(|n| n % 2 == 0);
///
/// assert_eq!(try_find(["3", "8", "x"], even), Ok(Some("8")));
/// assert_eq!(try_find(["3", "5"], even), Ok(None));
/// assert!(try_find(["3", "x", "8"], even).is_err());
/// ```
pub fn try_find<I, P, E>(collection: I, mut predicate: P) -> Result<Option<I::Item>, E>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> Result<bool, E>,
{
    try_process(
        collection
            .into_iter()
            .map(|item| predicate(&item).map(|matched| (matched, item))),
        |tested| find(tested, |&(matched, _)| matched).map(|(_, item)| item),
    )
}

/// Fallible [`filter()`](crate::filter).
///
/// # Examples
///
/// ```
/// use underbar::try_filter;
///
/// let positive = |s: &&str| s.parse::<i32>().map(|n| n > 0);
///
/// assert_eq!(try_filter(["1", "-2", "3"], positive), Ok(vec!["1", "3"]));
/// assert!(try_filter(["1", "two", "3"], positive).is_err());
/// ```
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub fn try_filter<I, P, E>(collection: I, mut predicate: P) -> Result<Vec<I::Item>, E>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> Result<bool, E>,
{
    try_process(
        collection
            .into_iter()
            .map(|item| predicate(&item).map(|keep| (keep, item))),
        |tested| {
            let kept = Vec::new()
                .into_collector()
                .map(|(_, item): (bool, I::Item)| item);
            filter_into(tested, |&(keep, _)| keep, kept)
        },
    )
}

/// Fallible [`map()`](crate::map).
///
/// # Examples
///
/// ```
/// use underbar::try_map;
///
/// assert_eq!(try_map(["1", "2"], str::parse::<i32>), Ok(vec![1, 2]));
/// assert!(try_map(["1", "two"], str::parse::<i32>).is_err());
/// ```
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub fn try_map<I, F, U, E>(collection: I, transform: F) -> Result<Vec<U>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Result<U, E>,
{
    try_process(collection.into_iter().map(transform), |values| {
        Vec::new().into_collector().collect_then_finish(values)
    })
}

/// Fallible [`reduce()`](crate::reduce).
///
/// Both `transform` and `combiner` may fail.
///
/// # Examples
///
/// ```
/// use underbar::try_reduce;
///
/// let checked_sum = |nums: &[u8]| {
///     try_reduce(nums, |&n| Ok(n), |a: u8, b| a.checked_add(b).ok_or("overflow"), 0)
/// };
///
/// assert_eq!(checked_sum(&[1, 2, 3]), Ok(6));
/// assert_eq!(checked_sum(&[200, 100]), Err("overflow"));
/// ```
pub fn try_reduce<I, F, C, U, E>(
    collection: I,
    mut transform: F,
    mut combiner: C,
    initial: U,
) -> Result<U, E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Result<U, E>,
    C: FnMut(U, U) -> Result<U, E>,
{
    collection
        .into_iter()
        .try_fold(initial, |accum, item| combiner(accum, transform(item)?))
}
