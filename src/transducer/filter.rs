//! Filter stage - drops elements that fail a predicate.

use std::ops::ControlFlow;

use crate::reducer::{Reducer, Step};
use crate::transducer::Transducer;

/// Create a stage that forwards only elements for which `pred` holds.
pub fn filter<P>(pred: P) -> Filter<P> {
    Filter { pred }
}

/// Filter transducer.
///
/// A rejected element is discarded and the accumulator is handed back
/// unchanged as `Continue`; filtering never stops a fold.
///
/// # Example
///
/// ```rust
/// use transducers::prelude::*;
///
/// let out = vec![1, 2, 3, 4].transduce(|p| p.filter(|x| x % 2 == 0).to_list());
/// assert_eq!(out, vec![2, 4]);
/// ```
#[derive(Clone, Copy)]
pub struct Filter<P> {
    pred: P,
}

impl<P> std::fmt::Debug for Filter<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filter").field("pred", &"<function>").finish()
    }
}

impl<R, P> Transducer<R> for Filter<P> {
    type Reducer = FilterReducer<R, P>;

    fn apply(self, downstream: R) -> FilterReducer<R, P> {
        FilterReducer {
            downstream,
            pred: self.pred,
        }
    }
}

/// Reducer produced by [`Filter`].
pub struct FilterReducer<R, P> {
    downstream: R,
    pred: P,
}

impl<R: std::fmt::Debug, P> std::fmt::Debug for FilterReducer<R, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterReducer")
            .field("downstream", &self.downstream)
            .field("pred", &"<function>")
            .finish()
    }
}

impl<Acc, T, R, P> Reducer<Acc, T> for FilterReducer<R, P>
where
    P: FnMut(&T) -> bool,
    R: Reducer<Acc, T>,
{
    #[inline]
    fn init(&mut self) -> Acc {
        self.downstream.init()
    }

    #[inline]
    fn step(&mut self, acc: Acc, elem: T) -> Step<Acc> {
        if (self.pred)(&elem) {
            self.downstream.step(acc, elem)
        } else {
            ControlFlow::Continue(acc)
        }
    }

    #[inline]
    fn is_closed(&self) -> bool {
        self.downstream.is_closed()
    }
}
