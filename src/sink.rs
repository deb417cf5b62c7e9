//! Sinks: the reducers that end a pipeline.
//!
//! A sink fixes the accumulator type of a pipeline and answers the default
//! request ([`Reducer::init`]) with the result for an input that produced no
//! elements. The stages in front of it only forward.
//!
//! | Sink | Accumulator | Default |
//! |------|-------------|---------|
//! | [`ToList`] | `Vec<T>` | empty `Vec` |
//! | [`CollectInto`] | caller's collection | that collection, untouched |
//! | [`ToSequence`] | [`Sequence<T>`] | empty sequence |
//! | [`Sum`] | element type | `Default` (zero) |
//! | [`SumBy`] | `f`'s output | `Default` (zero) |
//! | [`Fold`] | anything | caller's factory |
//!
//! Custom sinks implement [`Reducer`] directly, or come from
//! [`reducer::from_fn`](crate::reducer::from_fn) when they need to stop the
//! fold themselves.
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeSet;
//! use transducers::prelude::*;
//!
//! let seen = BTreeSet::from([0]);
//! let seen = vec![3, 1, 3, 2].transduce(|p| p.collect_into(seen));
//! assert_eq!(seen, BTreeSet::from([0, 1, 2, 3]));
//! ```

use std::collections::VecDeque;
use std::ops::{Add, ControlFlow};

use crate::reducer::{Reducer, Step};

/// Appends every element to a `Vec`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToList;

impl<T> Reducer<Vec<T>, T> for ToList {
    #[inline]
    fn init(&mut self) -> Vec<T> {
        Vec::new()
    }

    #[inline]
    fn step(&mut self, mut acc: Vec<T>, elem: T) -> Step<Vec<T>> {
        acc.push(elem);
        ControlFlow::Continue(acc)
    }
}

/// Appends every element to a caller-provided collection.
///
/// The collection is the default: an input with no elements returns it
/// exactly as it was passed in.
#[derive(Clone, Debug)]
pub struct CollectInto<C> {
    dest: Option<C>,
}

impl<C> CollectInto<C> {
    /// Collect into `dest`.
    pub fn new(dest: C) -> Self {
        Self { dest: Some(dest) }
    }
}

impl<T, C> Reducer<C, T> for CollectInto<C>
where
    C: Extend<T> + Default,
{
    fn init(&mut self) -> C {
        // Asked once per run; a second request gets a fresh collection.
        self.dest.take().unwrap_or_default()
    }

    #[inline]
    fn step(&mut self, mut acc: C, elem: T) -> Step<C> {
        acc.extend(std::iter::once(elem));
        ControlFlow::Continue(acc)
    }
}

/// Appends every element to a [`Sequence`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToSequence;

impl<T> Reducer<Sequence<T>, T> for ToSequence {
    #[inline]
    fn init(&mut self) -> Sequence<T> {
        Sequence::new()
    }

    #[inline]
    fn step(&mut self, mut acc: Sequence<T>, elem: T) -> Step<Sequence<T>> {
        acc.push(elem);
        ControlFlow::Continue(acc)
    }
}

/// An owned sequence, grown at the back and consumed from the front.
///
/// The fold itself is eager: every element is stored in a `VecDeque` as it
/// arrives. Laziness starts once the fold is done.
///
/// `Sequence` is an [`Iterator`]: hand it to any adapter chain to keep working
/// lazily on the folded elements.
///
/// # Example
///
/// ```rust
/// use transducers::prelude::*;
///
/// let seq = vec![1, 2, 3].transduce(|p| p.map(|x| x * 2).to_sequence());
/// let tail: Vec<i32> = seq.skip(1).collect();
/// assert_eq!(tail, vec![4, 6]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sequence<T> {
    items: VecDeque<T>,
}

impl<T> Sequence<T> {
    /// An empty sequence.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Append one element.
    pub fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Number of elements not yet consumed.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether every element has been consumed.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Iterator for Sequence<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.items.len(), Some(self.items.len()))
    }
}

impl<T> DoubleEndedIterator for Sequence<T> {
    fn next_back(&mut self) -> Option<T> {
        self.items.pop_back()
    }
}

impl<T> ExactSizeIterator for Sequence<T> {}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// Adds up the elements, starting from `Default::default()`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sum;

impl<N> Reducer<N, N> for Sum
where
    N: Add<Output = N> + Default,
{
    #[inline]
    fn init(&mut self) -> N {
        N::default()
    }

    #[inline]
    fn step(&mut self, acc: N, elem: N) -> Step<N> {
        ControlFlow::Continue(acc + elem)
    }
}

/// Adds up `f(element)`, starting from `Default::default()`.
#[derive(Clone, Copy)]
pub struct SumBy<F> {
    f: F,
}

impl<F> SumBy<F> {
    /// Sum the values `f` extracts.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> std::fmt::Debug for SumBy<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SumBy").field("f", &"<function>").finish()
    }
}

impl<N, T, F> Reducer<N, T> for SumBy<F>
where
    F: FnMut(T) -> N,
    N: Add<Output = N> + Default,
{
    #[inline]
    fn init(&mut self) -> N {
        N::default()
    }

    #[inline]
    fn step(&mut self, acc: N, elem: T) -> Step<N> {
        ControlFlow::Continue(acc + (self.f)(elem))
    }
}

/// A custom sink from a default factory and a step closure.
///
/// The factory runs once per run of the pipeline, so state it creates is never
/// shared between runs.
#[derive(Clone, Copy)]
pub struct Fold<Init, F> {
    init: Init,
    step: F,
}

impl<Init, F> Fold<Init, F> {
    /// Fold with `step`, starting from `init()`.
    pub fn new(init: Init, step: F) -> Self {
        Self { init, step }
    }
}

impl<Init, F> std::fmt::Debug for Fold<Init, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fold")
            .field("init", &"<function>")
            .field("step", &"<function>")
            .finish()
    }
}

impl<Acc, T, Init, F> Reducer<Acc, T> for Fold<Init, F>
where
    Init: FnMut() -> Acc,
    F: FnMut(Acc, T) -> Acc,
{
    #[inline]
    fn init(&mut self) -> Acc {
        (self.init)()
    }

    #[inline]
    fn step(&mut self, acc: Acc, elem: T) -> Step<Acc> {
        ControlFlow::Continue((self.step)(acc, elem))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Maybe;
    use std::collections::HashSet;

    #[test]
    fn to_list_appends_in_order() {
        let mut sink = ToList;
        let acc = sink.init();
        let acc = sink.step(acc, 1).continue_value().unwrap();
        let acc = sink.step(acc, 2).continue_value().unwrap();
        assert_eq!(acc, vec![1, 2]);
    }

    #[test]
    fn collect_into_returns_destination_for_empty_input() {
        let mut sink = CollectInto::new(vec![9, 9]);
        let default = Reducer::<Vec<i32>, i32>::init(&mut sink);
        assert_eq!(default, vec![9, 9]);
    }

    #[test]
    fn collect_into_extends_destination() {
        let mut sink = CollectInto::new(HashSet::from([1]));
        let acc = sink.reduce(Maybe::empty(), Maybe::present(2));
        let acc = sink.reduce(acc, Maybe::present(1));
        assert_eq!(acc, Maybe::present(HashSet::from([1, 2])));
    }

    #[test]
    fn collect_into_second_default_request_is_fresh() {
        let mut sink = CollectInto::new(vec![1]);
        let first = Reducer::<Vec<i32>, i32>::init(&mut sink);
        let second = Reducer::<Vec<i32>, i32>::init(&mut sink);
        assert_eq!(first, vec![1]);
        assert!(second.is_empty());
    }

    #[test]
    fn sequence_is_consumed_front_to_back() {
        let mut sink = ToSequence;
        let acc = sink.reduce(Maybe::empty(), Maybe::present('x'));
        let acc = sink.reduce(acc, Maybe::present('y'));
        let seq = acc.get_or_else(Sequence::new());
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.collect::<String>(), "xy");
    }

    #[test]
    fn sequence_holds_every_element_once_folded() {
        let calls = std::cell::Cell::new(0);
        let seq = crate::transduce(1..=4, |p| {
            p.map(|x: i32| {
                calls.set(calls.get() + 1);
                x * x
            })
            .to_sequence()
        });
        assert_eq!(calls.get(), 4);
        assert_eq!(seq.len(), 4);
        assert_eq!(seq.rev().collect::<Vec<_>>(), vec![16, 9, 4, 1]);
    }

    #[test]
    fn sequence_default_is_empty() {
        let mut sink = ToSequence;
        let seq: Sequence<u8> = sink.init();
        assert!(seq.is_empty());
        assert_eq!(seq.rev().next(), None);
    }

    #[test]
    fn sum_starts_at_zero() {
        let mut sink = Sum;
        let zero: i64 = sink.init();
        assert_eq!(zero, 0);
        assert_eq!(sink.step(2.5f64, 0.5), ControlFlow::Continue(3.0));
    }

    #[test]
    fn sum_by_extracts_before_adding() {
        let mut sink = SumBy::new(|s: &str| s.len());
        let acc = sink.reduce(Maybe::empty(), Maybe::present("abc"));
        let acc = sink.reduce(acc, Maybe::present("de"));
        assert_eq!(acc, Maybe::present(5));
    }

    #[test]
    fn fold_calls_factory_for_default() {
        let mut sink = Fold::new(|| String::from(">"), |acc: String, c: char| acc + &c.to_string());
        assert_eq!(sink.init(), ">");
        assert_eq!(sink.step(">".to_string(), 'a'), ControlFlow::Continue(">a".to_string()));
    }
}
