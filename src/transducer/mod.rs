//! Transducers: transformations from one reducer into another.
//!
//! A [`Transducer`] never sees the element source. It takes the reducer that
//! sits downstream of it and returns a new reducer that does its work and then
//! calls the downstream one. Chaining transducers therefore chains reducer
//! calls, one element at a time, with no intermediate collection between
//! stages.
//!
//! # Composition order
//!
//! [`compose(outer, inner)`](compose) applies `inner` to the downstream reducer
//! first and wraps the result with `outer`. The outer stage is the one that
//! receives elements from the source, so stages run in the order they were
//! declared:
//!
//! ```rust
//! use transducers::prelude::*;
//! use transducers::transducer::{compose, filter, map};
//!
//! // map runs first, then filter.
//! let stages = compose(map(|x: i32| x * 10), filter(|x: &i32| *x > 15));
//! let reducer = stages.apply(sink::ToList);
//!
//! let out: Vec<i32> = transducers::drive(vec![1, 2, 3], reducer);
//! assert_eq!(out, vec![20, 30]);
//! ```
//!
//! # Zero-cost stages
//!
//! Each stage is its own type and `apply` is resolved statically, so a chain
//! realizes to one nested reducer struct the compiler can inline completely.
//! Use [`Terminal::boxed`](crate::Terminal::boxed) when erasure is needed.

mod filter;
mod flat_map;
mod map;
mod take;

pub use filter::{filter, Filter, FilterReducer};
pub use flat_map::{flat_map, flatten, FlatMap, FlatMapReducer, Flatten, FlattenReducer};
pub use map::{map, Map, MapReducer};
pub use take::{take, Take, TakeReducer, TakeState};

/// Turns a downstream reducer `R` into an upstream reducer.
///
/// Transducers hold no fold state. Everything that changes while a pipeline
/// runs, such as the counter of [`take`], is created inside `apply` and owned
/// by the reducer it returns, so every realization starts fresh.
///
/// The element types are checked on the produced reducer: a stage turning
/// `In` into `Out` yields a `Reducer<Acc, In>` exactly when
/// `R: Reducer<Acc, Out>`.
///
/// # Example
///
/// A custom stage that passes every element through twice:
///
/// ```rust
/// use std::ops::ControlFlow;
/// use transducers::prelude::*;
///
/// struct Twice;
///
/// struct TwiceReducer<R>(R);
///
/// impl<R> Transducer<R> for Twice {
///     type Reducer = TwiceReducer<R>;
///
///     fn apply(self, downstream: R) -> TwiceReducer<R> {
///         TwiceReducer(downstream)
///     }
/// }
///
/// impl<Acc, T: Clone, R: Reducer<Acc, T>> Reducer<Acc, T> for TwiceReducer<R> {
///     fn init(&mut self) -> Acc {
///         self.0.init()
///     }
///
///     fn step(&mut self, acc: Acc, elem: T) -> Step<Acc> {
///         let acc = self.0.step(acc, elem.clone())?;
///         self.0.step(acc, elem)
///     }
/// }
///
/// let out = vec![1, 2].transduce(|p| p.then::<i32, _>(Twice).to_list());
/// assert_eq!(out, vec![1, 1, 2, 2]);
/// ```
pub trait Transducer<R> {
    /// The reducer produced for downstream `R`.
    type Reducer;

    /// Wrap `downstream` with this stage.
    fn apply(self, downstream: R) -> Self::Reducer;
}

/// The stage that does nothing. Every builder starts from it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Identity;

/// Create the identity transducer.
pub fn identity() -> Identity {
    Identity
}

impl<R> Transducer<R> for Identity {
    type Reducer = R;

    #[inline]
    fn apply(self, downstream: R) -> R {
        downstream
    }
}

/// Two stages run one after the other: `outer` sees each element first.
///
/// Created by [`compose`] and by every operator on
/// [`Pipeline`](crate::Pipeline).
#[derive(Clone, Copy, Debug)]
pub struct Compose<T1, T2> {
    pub(crate) outer: T1,
    pub(crate) inner: T2,
}

/// Compose two transducers: `outer` runs first, `inner` after it.
///
/// `inner` is applied to the downstream reducer first and its result is fed to
/// `outer`. Composition is associative; `compose(compose(a, b), c)` and
/// `compose(a, compose(b, c))` realize the same reducer.
pub fn compose<T1, T2>(outer: T1, inner: T2) -> Compose<T1, T2> {
    Compose { outer, inner }
}

impl<R, T1, T2> Transducer<R> for Compose<T1, T2>
where
    T2: Transducer<R>,
    T1: Transducer<T2::Reducer>,
{
    type Reducer = T1::Reducer;

    #[inline]
    fn apply(self, downstream: R) -> Self::Reducer {
        self.outer.apply(self.inner.apply(downstream))
    }
}
