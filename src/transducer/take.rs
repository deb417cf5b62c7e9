//! Take stage - forwards at most `n` elements, then stops the fold.

use std::ops::ControlFlow;

use crate::reducer::{Reducer, Step};
use crate::transducer::Transducer;

/// Create a stage that forwards the first `limit` elements and then stops.
pub fn take(limit: usize) -> Take {
    Take { limit }
}

/// Take transducer.
///
/// The counter lives in the [`TakeReducer`] created by `apply`, so each run of
/// a pipeline counts from zero, and two `take` stages in one chain count
/// independently.
///
/// The first element past the limit closes the stage and stops the fold; it is
/// never forwarded.
///
/// # Example
///
/// ```rust
/// use transducers::prelude::*;
///
/// // An infinite source is fine: the fold stops after the third element.
/// let out = (1..).transduce(|p| p.take(3).to_list());
/// assert_eq!(out, vec![1, 2, 3]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Take {
    limit: usize,
}

impl<R> Transducer<R> for Take {
    type Reducer = TakeReducer<R>;

    fn apply(self, downstream: R) -> TakeReducer<R> {
        TakeReducer {
            downstream,
            limit: self.limit,
            state: TakeState::Counting(0),
        }
    }
}

/// Counter state of a [`TakeReducer`].
///
/// `Counting(seen)` forwards elements while `seen` is below the limit. The
/// next element moves it to `Closed`, which is terminal: every later step stops
/// without reaching downstream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TakeState {
    /// Still forwarding; holds the number of elements seen so far.
    Counting(usize),
    /// The limit has been reached.
    Closed,
}

/// Reducer produced by [`Take`].
#[derive(Debug)]
pub struct TakeReducer<R> {
    downstream: R,
    limit: usize,
    state: TakeState,
}

impl<R> TakeReducer<R> {
    /// Current counter state.
    pub fn state(&self) -> TakeState {
        self.state
    }
}

impl<Acc, T, R> Reducer<Acc, T> for TakeReducer<R>
where
    R: Reducer<Acc, T>,
{
    #[inline]
    fn init(&mut self) -> Acc {
        self.downstream.init()
    }

    fn step(&mut self, acc: Acc, elem: T) -> Step<Acc> {
        match self.state {
            TakeState::Counting(seen) if seen < self.limit => {
                self.state = TakeState::Counting(seen + 1);
                self.downstream.step(acc, elem)
            }
            TakeState::Counting(_) => {
                self.state = TakeState::Closed;
                ControlFlow::Break(acc)
            }
            TakeState::Closed => ControlFlow::Break(acc),
        }
    }

    fn is_closed(&self) -> bool {
        self.state == TakeState::Closed || self.downstream.is_closed()
    }
}
