//! The reducer side of the protocol.
//!
//! A [`Reducer`] folds elements into an accumulator one at a time. Every step
//! answers with a [`Step`]: `Continue(acc)` to keep folding, or `Break(acc)` to
//! stop. A stop always hands the accumulator back, so the driving loop can
//! return what has been folded so far without cloning it.
//!
//! The sentinel form of the protocol, where both slots are [`Maybe`] and an
//! empty result means "stop", is available through [`Reducer::reduce`]:
//!
//! ```rust
//! use transducers::{Maybe, Reducer};
//! use transducers::sink::ToList;
//!
//! let mut sink = ToList;
//!
//! // (empty, empty) asks for the default.
//! let default: Maybe<Vec<i32>> = sink.reduce(Maybe::empty(), Maybe::empty());
//! assert_eq!(default, Maybe::present(vec![]));
//!
//! // (empty, present) folds the first element into a fresh default.
//! let acc = sink.reduce(Maybe::empty(), Maybe::present(1));
//! assert_eq!(acc, Maybe::present(vec![1]));
//! ```

use std::ops::ControlFlow;

use crate::Maybe;

/// The outcome of folding one element.
///
/// `Continue(acc)` keeps pulling input; `Break(acc)` stops the fold and makes
/// `acc` its result.
pub type Step<Acc> = ControlFlow<Acc, Acc>;

/// A folding step that combines an accumulator with the next element.
///
/// Reducers are created fresh for each run of a pipeline and may own private
/// mutable state (such as the counter of a `take` stage). The same reducer must
/// not be driven again after it has answered `Break`.
///
/// # Example
///
/// ```rust
/// use std::ops::ControlFlow;
/// use transducers::{Reducer, Step};
///
/// struct Product;
///
/// impl Reducer<i64, i64> for Product {
///     fn init(&mut self) -> i64 {
///         1
///     }
///
///     fn step(&mut self, acc: i64, elem: i64) -> Step<i64> {
///         if elem == 0 {
///             // Nothing can change the result any more.
///             ControlFlow::Break(0)
///         } else {
///             ControlFlow::Continue(acc * elem)
///         }
///     }
/// }
///
/// let product = transducers::drive(vec![2, 3, 0, 5], Product);
/// assert_eq!(product, 0);
/// ```
pub trait Reducer<Acc, Elem> {
    /// The accumulator for an input that produced no elements.
    ///
    /// Stages forward this request downstream unchanged; only the sink at the
    /// end of a chain answers it.
    fn init(&mut self) -> Acc;

    /// Fold one element into the accumulator.
    fn step(&mut self, acc: Acc, elem: Elem) -> Step<Acc>;

    /// Whether a stage in this chain has stopped for good.
    ///
    /// Stages that wrap a downstream reducer forward this question to it, so a
    /// closed `take` is seen from the outermost stage. Sinks never close.
    #[inline]
    fn is_closed(&self) -> bool {
        false
    }

    /// The sentinel form of [`step`](Reducer::step).
    ///
    /// * A closed chain answers `Empty` to every call.
    /// * `(Empty, Empty)` requests the default: `Present(init())`.
    /// * `(Present(acc), Empty)` has nothing to fold: `Present(acc)`.
    /// * `(acc, Present(elem))` folds `elem`, seeding an empty accumulator with
    ///   `init()`. The result is `Present` to continue and `Empty` to stop.
    fn reduce(&mut self, acc: Maybe<Acc>, elem: Maybe<Elem>) -> Maybe<Acc> {
        if self.is_closed() {
            return Maybe::Empty;
        }
        match elem {
            Maybe::Empty => Maybe::Present(acc.get_or_else_with(|| self.init())),
            Maybe::Present(elem) => {
                let acc = acc.get_or_else_with(|| self.init());
                match self.step(acc, elem) {
                    ControlFlow::Continue(acc) => Maybe::Present(acc),
                    ControlFlow::Break(_) => Maybe::Empty,
                }
            }
        }
    }
}

impl<Acc, Elem, R> Reducer<Acc, Elem> for &mut R
where
    R: Reducer<Acc, Elem> + ?Sized,
{
    fn init(&mut self) -> Acc {
        (**self).init()
    }

    fn step(&mut self, acc: Acc, elem: Elem) -> Step<Acc> {
        (**self).step(acc, elem)
    }

    fn is_closed(&self) -> bool {
        (**self).is_closed()
    }

    fn reduce(&mut self, acc: Maybe<Acc>, elem: Maybe<Elem>) -> Maybe<Acc> {
        (**self).reduce(acc, elem)
    }
}

impl<Acc, Elem, R> Reducer<Acc, Elem> for Box<R>
where
    R: Reducer<Acc, Elem> + ?Sized,
{
    fn init(&mut self) -> Acc {
        (**self).init()
    }

    fn step(&mut self, acc: Acc, elem: Elem) -> Step<Acc> {
        (**self).step(acc, elem)
    }

    fn is_closed(&self) -> bool {
        (**self).is_closed()
    }

    fn reduce(&mut self, acc: Maybe<Acc>, elem: Maybe<Elem>) -> Maybe<Acc> {
        (**self).reduce(acc, elem)
    }
}

/// A type-erased reducer.
///
/// Use it to store realized pipelines of different shapes side by side, or to
/// return them from different match arms. See [`Terminal::boxed`](crate::Terminal::boxed).
pub type BoxedReducer<'a, Acc, Elem> = Box<dyn Reducer<Acc, Elem> + 'a>;

/// Build a reducer from a default factory and a step closure.
///
/// Unlike [`fold`](crate::Pipeline::fold), the step may stop the fold.
///
/// # Example
///
/// ```rust
/// use std::ops::ControlFlow;
/// use transducers::prelude::*;
///
/// // Collect words until the running length would pass 10 bytes.
/// let words: Vec<String> = vec!["alpha".into(), "beta".into(), "gamma".into()];
/// let kept = words.transduce(|p| {
///     p.reduce_with(reducer::from_fn(
///         || (0usize, Vec::new()),
///         |(len, mut kept): (usize, Vec<String>), word: String| {
///             if len + word.len() > 10 {
///                 ControlFlow::Break((len, kept))
///             } else {
///                 let n = word.len();
///                 kept.push(word);
///                 ControlFlow::Continue((len + n, kept))
///             }
///         },
///     ))
/// });
/// assert_eq!(kept.0, 9);
/// assert_eq!(kept.1, vec!["alpha", "beta"]);
/// ```
pub fn from_fn<Acc, Elem, Init, F>(init: Init, step: F) -> FromFn<Init, F>
where
    Init: FnMut() -> Acc,
    F: FnMut(Acc, Elem) -> Step<Acc>,
{
    FromFn { init, step }
}

/// Reducer returned by [`from_fn`].
#[derive(Clone)]
pub struct FromFn<Init, F> {
    init: Init,
    step: F,
}

impl<Init, F> std::fmt::Debug for FromFn<Init, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn")
            .field("init", &"<function>")
            .field("step", &"<function>")
            .finish()
    }
}

impl<Acc, Elem, Init, F> Reducer<Acc, Elem> for FromFn<Init, F>
where
    Init: FnMut() -> Acc,
    F: FnMut(Acc, Elem) -> Step<Acc>,
{
    fn init(&mut self) -> Acc {
        (self.init)()
    }

    fn step(&mut self, acc: Acc, elem: Elem) -> Step<Acc> {
        (self.step)(acc, elem)
    }
}
