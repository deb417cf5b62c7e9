//! The fluent pipeline builder.
//!
//! A [`Pipeline<In, Mid, T>`](Pipeline) holds the transducer built so far. `In`
//! is the element type the source yields and never changes; `Mid` is the
//! element type the next stage will receive. Every operator consumes the
//! builder and returns a new one, so a chain reads in the order elements flow:
//!
//! ```rust
//! use transducers::prelude::*;
//!
//! let out = vec![1, 2, 3].transduce(|p| {
//!     p.map(|x| (x * x).to_string())
//!         .filter(|s| !s.starts_with('3'))
//!         .take(2)
//!         .to_list()
//! });
//! assert_eq!(out, vec!["1", "4"]);
//! ```
//!
//! A sink method ends the chain and returns a [`Terminal`], which has no
//! operators. A pipeline without a sink, with two sinks, or with an operator
//! after its sink does not type-check.
//!
//! Builders are plain values. Cloning one branches a shared prefix without
//! touching the original:
//!
//! ```rust
//! use transducers::prelude::*;
//!
//! let evens = Pipeline::<i32>::new().filter(|x| x % 2 == 0);
//!
//! let small = transduce(0..10, |_| evens.clone().take(2).to_list());
//! let total = transduce(0..10, |_| evens.clone().sum());
//! assert_eq!(small, vec![0, 2]);
//! assert_eq!(total, 20);
//! ```

use std::marker::PhantomData;
use std::ops::Add;

use crate::reducer::{BoxedReducer, Reducer};
use crate::sink::{CollectInto, Fold, Sequence, Sum, SumBy, ToList, ToSequence};
use crate::transducer::{
    compose, filter, flat_map, flatten, map, take, Compose, Filter, FlatMap, Flatten, Identity,
    Map, Take, Transducer,
};

/// A pipeline under construction.
///
/// See the [module docs](self) for an overview.
pub struct Pipeline<In, Mid = In, T = Identity> {
    stage: T,
    _elements: PhantomData<fn(In) -> Mid>,
}

impl<In, Mid, T> std::fmt::Debug for Pipeline<In, Mid, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("stage", &"<transducer>")
            .finish()
    }
}

impl<In, Mid, T: Clone> Clone for Pipeline<In, Mid, T> {
    fn clone(&self) -> Self {
        Self {
            stage: self.stage.clone(),
            _elements: PhantomData,
        }
    }
}

impl<In> Pipeline<In> {
    /// An empty pipeline: elements pass through unchanged.
    pub fn new() -> Self {
        Self::from_stage(Identity)
    }
}

impl<In> Default for Pipeline<In> {
    fn default() -> Self {
        Self::new()
    }
}

impl<In, Mid, T> Pipeline<In, Mid, T> {
    fn from_stage(stage: T) -> Self {
        Self {
            stage,
            _elements: PhantomData,
        }
    }

    fn push<Out, U>(self, next: U) -> Pipeline<In, Out, Compose<T, U>> {
        Pipeline::from_stage(compose(self.stage, next))
    }

    /// The transducer built so far.
    pub fn into_transducer(self) -> T {
        self.stage
    }

    // ========== Operators ==========

    /// Transform each element with `f`.
    pub fn map<Out, F>(self, f: F) -> Pipeline<In, Out, Compose<T, Map<F>>>
    where
        F: FnMut(Mid) -> Out,
    {
        self.push(map(f))
    }

    /// Keep only elements for which `pred` holds.
    pub fn filter<P>(self, pred: P) -> Pipeline<In, Mid, Compose<T, Filter<P>>>
    where
        P: FnMut(&Mid) -> bool,
    {
        self.push(filter(pred))
    }

    /// Keep the first `n` elements, then stop pulling from the source.
    pub fn take(self, n: usize) -> Pipeline<In, Mid, Compose<T, Take>> {
        self.push(take(n))
    }

    /// Expand each element into the items of `f(element)`.
    ///
    /// A stop raised while folding the expansion ends the whole run.
    pub fn flat_map<I, F>(self, f: F) -> Pipeline<In, I::Item, Compose<T, FlatMap<F>>>
    where
        F: FnMut(Mid) -> I,
        I: IntoIterator,
    {
        self.push(flat_map(f))
    }

    /// Expand elements that are themselves iterable.
    pub fn flatten(self) -> Pipeline<In, Mid::Item, Compose<T, Flatten>>
    where
        Mid: IntoIterator,
    {
        self.push(flatten())
    }

    /// Append a custom stage whose output element type is `Out`.
    ///
    /// `Out` cannot be inferred from a transducer, so name it:
    /// `p.then::<String, _>(MyStage)`.
    pub fn then<Out, U>(self, stage: U) -> Pipeline<In, Out, Compose<T, U>> {
        self.push(stage)
    }

    // ========== Sinks ==========

    /// End the pipeline with a custom sink.
    pub fn reduce_with<Acc, S>(self, sink: S) -> Terminal<In, Acc, T::Reducer>
    where
        S: Reducer<Acc, Mid>,
        T: Transducer<S>,
        T::Reducer: Reducer<Acc, In>,
    {
        Terminal::new(self.stage.apply(sink))
    }

    /// Collect into a `Vec`. Empty input gives an empty `Vec`.
    pub fn to_list(self) -> Terminal<In, Vec<Mid>, T::Reducer>
    where
        T: Transducer<ToList>,
        T::Reducer: Reducer<Vec<Mid>, In>,
    {
        self.reduce_with(ToList)
    }

    /// Append to `dest`. Empty input gives `dest` back untouched.
    pub fn collect_into<C>(self, dest: C) -> Terminal<In, C, T::Reducer>
    where
        C: Extend<Mid> + Default,
        T: Transducer<CollectInto<C>>,
        T::Reducer: Reducer<C, In>,
    {
        self.reduce_with(CollectInto::new(dest))
    }

    /// Collect into a [`Sequence`].
    pub fn to_sequence(self) -> Terminal<In, Sequence<Mid>, T::Reducer>
    where
        T: Transducer<ToSequence>,
        T::Reducer: Reducer<Sequence<Mid>, In>,
    {
        self.reduce_with(ToSequence)
    }

    /// Add the elements up. Empty input gives zero.
    pub fn sum(self) -> Terminal<In, Mid, T::Reducer>
    where
        Mid: Add<Output = Mid> + Default,
        T: Transducer<Sum>,
        T::Reducer: Reducer<Mid, In>,
    {
        self.reduce_with(Sum)
    }

    /// Add up `f(element)`. Empty input gives zero.
    pub fn sum_by<N, F>(self, f: F) -> Terminal<In, N, T::Reducer>
    where
        F: FnMut(Mid) -> N,
        N: Add<Output = N> + Default,
        T: Transducer<SumBy<F>>,
        T::Reducer: Reducer<N, In>,
    {
        self.reduce_with(SumBy::new(f))
    }

    /// Fold with `step`, starting from `init()`. Empty input gives `init()`.
    pub fn fold<Acc, Init, F>(self, init: Init, step: F) -> Terminal<In, Acc, T::Reducer>
    where
        Init: FnMut() -> Acc,
        F: FnMut(Acc, Mid) -> Acc,
        T: Transducer<Fold<Init, F>>,
        T::Reducer: Reducer<Acc, In>,
    {
        self.reduce_with(Fold::new(init, step))
    }
}

/// A finished pipeline: one realized reducer over the source's elements.
///
/// Produced by the sink methods of [`Pipeline`] and consumed by the driving
/// loops ([`transduce`](crate::transduce()),
/// [`transduce_stream`](crate::stream::transduce_stream)).
pub struct Terminal<In, Acc, R> {
    reducer: R,
    _types: PhantomData<fn(In) -> Acc>,
}

impl<In, Acc, R: std::fmt::Debug> std::fmt::Debug for Terminal<In, Acc, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Terminal")
            .field("reducer", &self.reducer)
            .finish()
    }
}

impl<In, Acc, R> Terminal<In, Acc, R>
where
    R: Reducer<Acc, In>,
{
    /// Wrap an already realized reducer.
    pub fn new(reducer: R) -> Self {
        Self {
            reducer,
            _types: PhantomData,
        }
    }

    /// The realized reducer.
    pub fn into_reducer(self) -> R {
        self.reducer
    }

    /// Erase the reducer's type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use transducers::prelude::*;
    ///
    /// fn pick(doubled: bool) -> Terminal<i32, Vec<i32>, BoxedReducer<'static, Vec<i32>, i32>> {
    ///     if doubled {
    ///         Pipeline::new().map(|x: i32| x * 2).to_list().boxed()
    ///     } else {
    ///         Pipeline::new().to_list().boxed()
    ///     }
    /// }
    ///
    /// assert_eq!(drive(vec![1, 2], pick(true).into_reducer()), vec![2, 4]);
    /// assert_eq!(drive(vec![1, 2], pick(false).into_reducer()), vec![1, 2]);
    /// ```
    pub fn boxed<'a>(self) -> Terminal<In, Acc, BoxedReducer<'a, Acc, In>>
    where
        R: 'a,
    {
        let reducer: BoxedReducer<'a, Acc, In> = Box::new(self.reducer);
        Terminal::new(reducer)
    }
}
