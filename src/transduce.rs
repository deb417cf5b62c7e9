//! The synchronous driving loop.
//!
//! [`transduce`] hands a fresh [`Pipeline`] to a build closure, realizes the
//! [`Terminal`] it returns into one reducer, and folds the source through it.
//! [`drive`] does the same for a reducer that is already realized.
//!
//! The loop keeps the accumulator as [`Maybe<Acc>`](Maybe), starting empty.
//! Before the first step it is seeded with the reducer's [`init`], so stages
//! that skip (a rejecting `filter`, a `take(0)`) always have an accumulator to
//! hand back. A source that yields nothing returns `init()`. Either way `init`
//! runs exactly once per call.
//!
//! A [`ControlFlow::Break`] from the reducer ends the fold on the spot: its
//! accumulator is the result and nothing more is pulled from the source.
//!
//! [`init`]: Reducer::init

use std::marker::PhantomData;
use std::ops::ControlFlow;

use crate::pipeline::{Pipeline, Terminal};
use crate::reducer::Reducer;
use crate::Maybe;

/// Fold `source` through the pipeline that `build` describes.
///
/// # Example
///
/// ```rust
/// use transducers::transduce;
///
/// let total = transduce(vec![1, 2, 3], |p| p.filter(|x| *x > 1).sum());
/// assert_eq!(total, 5);
///
/// let none: Vec<i32> = transduce(Vec::<i32>::new(), |p| p.to_list());
/// assert!(none.is_empty());
/// ```
pub fn transduce<I, Acc, R, F>(source: I, build: F) -> Acc
where
    I: IntoIterator,
    F: FnOnce(Pipeline<I::Item>) -> Terminal<I::Item, Acc, R>,
    R: Reducer<Acc, I::Item>,
{
    drive(source, build(Pipeline::new()).into_reducer())
}

/// Fold `source` through an already realized reducer.
///
/// # Example
///
/// ```rust
/// use transducers::drive;
/// use transducers::sink::Sum;
///
/// assert_eq!(drive(1..=4, Sum), 10);
/// ```
pub fn drive<I, Acc, R>(source: I, reducer: R) -> Acc
where
    I: IntoIterator,
    R: Reducer<Acc, I::Item>,
{
    let mut run = Run::new(reducer);
    for elem in source {
        if let ControlFlow::Break(last) = run.feed(elem) {
            return last;
        }
    }
    run.finish()
}

/// Fold a fallible source through an already realized reducer.
///
/// The first `Err` is returned unchanged and nothing after it is pulled.
/// A stop raised before the error wins: the source is not read that far.
pub fn try_drive<I, T, E, Acc, R>(source: I, reducer: R) -> Result<Acc, E>
where
    I: IntoIterator<Item = Result<T, E>>,
    R: Reducer<Acc, T>,
{
    let mut run = Run::new(reducer);
    for item in source {
        if let ControlFlow::Break(last) = run.feed(item?) {
            return Ok(last);
        }
    }
    Ok(run.finish())
}

/// Fold a fallible source through the pipeline that `build` describes.
///
/// # Example
///
/// ```rust
/// use transducers::try_transduce;
///
/// let lines = vec!["1", "2", "3", "x"];
/// let parsed = try_transduce(lines.iter().map(|s| s.parse::<i32>()), |p| p.to_list());
/// assert!(parsed.is_err());
///
/// // `take` closes on "3", so the bad line is never read.
/// let parsed = try_transduce(lines.iter().map(|s| s.parse::<i32>()), |p| p.take(2).to_list());
/// assert_eq!(parsed, Ok(vec![1, 2]));
/// ```
pub fn try_transduce<I, T, E, Acc, R, F>(source: I, build: F) -> Result<Acc, E>
where
    I: IntoIterator<Item = Result<T, E>>,
    F: FnOnce(Pipeline<T>) -> Terminal<T, Acc, R>,
    R: Reducer<Acc, T>,
{
    try_drive(source, build(Pipeline::new()).into_reducer())
}

/// Method-call form of [`transduce`] and [`try_transduce`] for any
/// [`IntoIterator`].
///
/// # Example
///
/// ```rust
/// use transducers::prelude::*;
///
/// let evens = (0..1000)
///     .map(|x| x * 2)
///     .filter(|x| x % 3 == 0)
///     .transduce(|p| p.take(3).to_list());
/// assert_eq!(evens, vec![0, 6, 12]);
/// ```
pub trait TransduceExt: IntoIterator + Sized {
    /// See [`transduce`].
    fn transduce<Acc, R, F>(self, build: F) -> Acc
    where
        F: FnOnce(Pipeline<Self::Item>) -> Terminal<Self::Item, Acc, R>,
        R: Reducer<Acc, Self::Item>,
    {
        transduce(self, build)
    }

    /// See [`try_transduce`].
    fn try_transduce<T, E, Acc, R, F>(self, build: F) -> Result<Acc, E>
    where
        Self: IntoIterator<Item = Result<T, E>>,
        F: FnOnce(Pipeline<T>) -> Terminal<T, Acc, R>,
        R: Reducer<Acc, T>,
    {
        try_transduce(self, build)
    }
}

impl<I: IntoIterator> TransduceExt for I {}

// ========== Shared fold state ==========

/// One invocation's fold state, shared by the sync and async loops.
pub(crate) struct Run<Acc, Elem, R> {
    reducer: R,
    acc: Maybe<Acc>,
    #[cfg(feature = "tracing")]
    pulled: usize,
    _elem: PhantomData<fn(Elem)>,
}

impl<Acc, Elem, R> Run<Acc, Elem, R>
where
    R: Reducer<Acc, Elem>,
{
    pub(crate) fn new(reducer: R) -> Self {
        Self {
            reducer,
            acc: Maybe::Empty,
            #[cfg(feature = "tracing")]
            pulled: 0,
            _elem: PhantomData,
        }
    }

    /// Step one element. `Break` carries the final accumulator.
    pub(crate) fn feed(&mut self, elem: Elem) -> ControlFlow<Acc> {
        #[cfg(feature = "tracing")]
        {
            self.pulled += 1;
        }
        let seed = std::mem::replace(&mut self.acc, Maybe::Empty)
            .get_or_else_with(|| self.reducer.init());
        match self.reducer.step(seed, elem) {
            ControlFlow::Continue(next) => {
                self.acc = Maybe::Present(next);
                ControlFlow::Continue(())
            }
            ControlFlow::Break(last) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(pulled = self.pulled, "fold stopped early");
                ControlFlow::Break(last)
            }
        }
    }

    /// The result once the source is exhausted.
    pub(crate) fn finish(mut self) -> Acc {
        match self.acc {
            Maybe::Present(acc) => acc,
            Maybe::Empty => {
                #[cfg(feature = "tracing")]
                tracing::trace!("source yielded nothing, using sink default");
                self.reducer.init()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducer::from_fn;
    use crate::testing::PullCounter;
    use std::cell::Cell;

    #[test]
    fn equivalent_to_iterator_adapters() {
        let via_pipeline = transduce(vec![1, 2, 3], |p| {
            p.map(|x| (x * x).to_string())
                .filter(|s| !s.starts_with('3'))
                .take(2)
                .to_list()
        });
        let via_iter: Vec<String> = vec![1, 2, 3]
            .into_iter()
            .map(|x| (x * x).to_string())
            .filter(|s| !s.starts_with('3'))
            .take(2)
            .collect();
        assert_eq!(via_pipeline, via_iter);
        assert_eq!(via_pipeline, vec!["1", "4"]);
    }

    #[test]
    fn empty_source_returns_each_sink_default() {
        let list: Vec<i32> = transduce(Vec::<i32>::new(), |p| p.to_list());
        assert!(list.is_empty());

        let total = transduce(Vec::<i32>::new(), |p| p.sum());
        assert_eq!(total, 0);

        let kept = transduce(Vec::<i32>::new(), |p| p.collect_into(vec![7, 8]));
        assert_eq!(kept, vec![7, 8]);
    }

    #[test]
    fn sum_with_and_without_filter() {
        assert_eq!(transduce(vec![1, 2, 3], |p| p.sum()), 6);
        assert_eq!(transduce(vec![1, 2, 3], |p| p.filter(|x| *x > 1).sum()), 5);
    }

    #[test]
    fn take_stops_pulling_from_the_source() {
        let counter = PullCounter::new();
        let out = transduce(counter.wrap(0..1000), |p| {
            p.map(|x| x * 2).filter(|x| x % 3 == 0).take(5).to_list()
        });
        assert_eq!(out, vec![0, 6, 12, 18, 24]);
        // the match at x = 15 closes the take
        assert_eq!(counter.pulled(), 16);
    }

    #[test]
    fn infinite_source_terminates() {
        let out = transduce(1u64.., |p| p.filter(|x| x % 7 == 0).take(3).to_list());
        assert_eq!(out, vec![7, 14, 21]);
    }

    fn counting_sum(calls: &Cell<usize>) -> impl Reducer<i32, i32> + '_ {
        from_fn(
            move || {
                calls.set(calls.get() + 1);
                0
            },
            |acc: i32, x: i32| ControlFlow::Continue(acc + x),
        )
    }

    #[test]
    fn init_runs_exactly_once() {
        let calls = Cell::new(0);
        assert_eq!(drive(vec![1, 2, 3], counting_sum(&calls)), 6);
        assert_eq!(calls.get(), 1);

        let calls = Cell::new(0);
        assert_eq!(drive(Vec::<i32>::new(), counting_sum(&calls)), 0);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn stop_returns_last_accumulator_not_default() {
        let out = transduce(vec![1, 2, 3, 4], |p| p.take(2).collect_into(vec![0]));
        assert_eq!(out, vec![0, 1, 2]);
    }

    #[test]
    fn rejecting_every_element_still_yields_default() {
        let out = transduce(vec![1, 3, 5], |p| p.filter(|x| x % 2 == 0).to_list());
        assert!(out.is_empty());

        let none = transduce(vec![1, 2], |p| p.take(0).sum());
        assert_eq!(none, 0);
    }

    #[test]
    fn take_counters_are_fresh_per_call() {
        let build = |p: Pipeline<i32>| p.take(2).to_list();
        assert_eq!(transduce(vec![1, 2, 3], build), vec![1, 2]);
        assert_eq!(transduce(vec![4, 5, 6], build), vec![4, 5]);
    }

    #[test]
    fn take_stages_count_independently() {
        let out = transduce(1..=10, |p| p.take(6).filter(|x| x % 2 == 0).take(2).to_list());
        assert_eq!(out, vec![2, 4]);
    }

    #[test]
    fn try_drive_returns_first_error_and_stops_pulling() {
        let counter = PullCounter::new();
        let source = counter.wrap(vec![Ok(1), Err("boom"), Err("later"), Ok(4)]);
        let out = try_transduce(source, |p| p.to_list());
        assert_eq!(out, Err("boom"));
        assert_eq!(counter.pulled(), 2);
    }

    #[test]
    fn try_drive_succeeds_on_clean_source() {
        let source: Vec<Result<i32, String>> = vec![Ok(1), Ok(2)];
        assert_eq!(source.try_transduce(|p| p.sum()), Ok(3));

        let empty: Vec<Result<i32, String>> = vec![];
        assert_eq!(try_drive(empty, crate::sink::ToList), Ok(Vec::<i32>::new()));
    }
}
