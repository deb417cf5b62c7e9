//! FlatMap and Flatten stages - expand one element into many.
//!
//! The downstream reducer is stepped once per sub-element, in order. A stop
//! raised by any sub-element is a stop for the whole fold: the remaining
//! sub-elements are skipped and the stop travels outward to the driving loop,
//! which pulls nothing more from the source.

use crate::reducer::{Reducer, Step};
use crate::transducer::Transducer;
use std::ops::ControlFlow;

/// Create a stage that expands each element into `f(element)`.
pub fn flat_map<F>(f: F) -> FlatMap<F> {
    FlatMap { f }
}

/// Create a stage that expands elements which are themselves iterable.
pub fn flatten() -> Flatten {
    Flatten
}

/// FlatMap transducer.
///
/// # Example
///
/// ```rust
/// use transducers::prelude::*;
///
/// let words = vec!["ab", "", "cde"];
/// let chars = words.transduce(|p| p.flat_map(|w| w.chars()).to_list());
/// assert_eq!(chars, vec!['a', 'b', 'c', 'd', 'e']);
/// ```
#[derive(Clone, Copy)]
pub struct FlatMap<F> {
    f: F,
}

impl<F> std::fmt::Debug for FlatMap<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlatMap").field("f", &"<function>").finish()
    }
}

impl<R, F> Transducer<R> for FlatMap<F> {
    type Reducer = FlatMapReducer<R, F>;

    fn apply(self, downstream: R) -> FlatMapReducer<R, F> {
        FlatMapReducer {
            downstream,
            f: self.f,
        }
    }
}

/// Reducer produced by [`FlatMap`].
pub struct FlatMapReducer<R, F> {
    downstream: R,
    f: F,
}

impl<R: std::fmt::Debug, F> std::fmt::Debug for FlatMapReducer<R, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlatMapReducer")
            .field("downstream", &self.downstream)
            .field("f", &"<function>")
            .finish()
    }
}

impl<Acc, In, I, R, F> Reducer<Acc, In> for FlatMapReducer<R, F>
where
    F: FnMut(In) -> I,
    I: IntoIterator,
    R: Reducer<Acc, I::Item>,
{
    #[inline]
    fn init(&mut self) -> Acc {
        self.downstream.init()
    }

    #[inline]
    fn step(&mut self, acc: Acc, elem: In) -> Step<Acc> {
        fold_all(&mut self.downstream, acc, (self.f)(elem))
    }

    #[inline]
    fn is_closed(&self) -> bool {
        self.downstream.is_closed()
    }
}

/// Flatten transducer: [`FlatMap`] with the identity expansion.
///
/// # Example
///
/// ```rust
/// use transducers::prelude::*;
///
/// let grid = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
/// let out = grid.transduce(|p| p.flatten().map(|x| x * 10).take(8).to_list());
/// assert_eq!(out, vec![10, 20, 30, 40, 50, 60, 70, 80]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flatten;

impl<R> Transducer<R> for Flatten {
    type Reducer = FlattenReducer<R>;

    fn apply(self, downstream: R) -> FlattenReducer<R> {
        FlattenReducer { downstream }
    }
}

/// Reducer produced by [`Flatten`].
#[derive(Debug)]
pub struct FlattenReducer<R> {
    downstream: R,
}

impl<Acc, In, R> Reducer<Acc, In> for FlattenReducer<R>
where
    In: IntoIterator,
    R: Reducer<Acc, In::Item>,
{
    #[inline]
    fn init(&mut self) -> Acc {
        self.downstream.init()
    }

    #[inline]
    fn step(&mut self, acc: Acc, elem: In) -> Step<Acc> {
        fold_all(&mut self.downstream, acc, elem)
    }

    #[inline]
    fn is_closed(&self) -> bool {
        self.downstream.is_closed()
    }
}

// A stop from any sub-element returns straight out of the outer step.
fn fold_all<Acc, I, R>(downstream: &mut R, mut acc: Acc, items: I) -> Step<Acc>
where
    I: IntoIterator,
    R: Reducer<Acc, I::Item>,
{
    for item in items {
        acc = downstream.step(acc, item)?;
    }
    ControlFlow::Continue(acc)
}
