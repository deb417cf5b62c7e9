//! Testing utilities for pipelines.
//!
//! This module provides helpers for checking how a pipeline behaves against
//! its source: a pull counter for short-circuit checks, a parity assertion
//! against plain [`Iterator`] adapters, assertion macros for [`Maybe`], and
//! property-based testing support.
//!
//! # Examples
//!
//! ## Counting pulls
//!
//! ```rust
//! use transducers::prelude::*;
//! use transducers::testing::PullCounter;
//!
//! let counter = PullCounter::new();
//! let out = counter.wrap(0..1000).transduce(|p| p.take(3).to_list());
//! assert_eq!(out, vec![0, 1, 2]);
//! assert_eq!(counter.pulled(), 4);
//! ```
//!
//! ## Parity with iterator adapters
//!
//! ```rust
//! use transducers::assert_parity;
//!
//! assert_parity!(
//!     vec![1, 2, 3],
//!     |p| p.map(|x| x * x).filter(|x| x % 2 == 1).to_list(),
//!     |it| it.map(|x| x * x).filter(|x| x % 2 == 1).collect::<Vec<_>>(),
//! );
//! ```

use std::cell::Cell;
use std::rc::Rc;

use crate::pipeline::{Pipeline, Terminal};
use crate::reducer::Reducer;
use crate::transduce::transduce;

/// Counts how many elements a fold pulls from its source.
///
/// Clones share the same count.
#[derive(Clone, Debug, Default)]
pub struct PullCounter {
    pulled: Rc<Cell<usize>>,
}

impl PullCounter {
    /// A counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `source` so every element it yields is counted.
    pub fn wrap<I: IntoIterator>(&self, source: I) -> Counted<I::IntoIter> {
        Counted {
            inner: source.into_iter(),
            pulled: Rc::clone(&self.pulled),
        }
    }

    /// Elements yielded so far.
    pub fn pulled(&self) -> usize {
        self.pulled.get()
    }

    /// Set the count back to zero.
    pub fn reset(&self) {
        self.pulled.set(0);
    }
}

/// Iterator returned by [`PullCounter::wrap`].
pub struct Counted<I> {
    inner: I,
    pulled: Rc<Cell<usize>>,
}

impl<I> std::fmt::Debug for Counted<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Counted")
            .field("pulled", &self.pulled.get())
            .finish()
    }
}

impl<I: Iterator> Iterator for Counted<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let item = self.inner.next();
        if item.is_some() {
            self.pulled.set(self.pulled.get() + 1);
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Run the same computation as a pipeline and as an iterator adapter chain.
///
/// Returns `(pipeline result, adapter result)`. Used by [`assert_parity!`].
pub fn parity<I, Acc, R, F, G>(source: I, build: F, adapters: G) -> (Acc, Acc)
where
    I: IntoIterator + Clone,
    F: FnOnce(Pipeline<I::Item>) -> Terminal<I::Item, Acc, R>,
    R: Reducer<Acc, I::Item>,
    G: FnOnce(I::IntoIter) -> Acc,
{
    let via_pipeline = transduce(source.clone(), build);
    let via_adapters = adapters(source.into_iter());
    (via_pipeline, via_adapters)
}

/// Assert that a pipeline and an iterator adapter chain agree on a source.
///
/// The source must be `Clone`; each side folds its own copy.
///
/// # Example
///
/// ```rust
/// use transducers::assert_parity;
///
/// assert_parity!(
///     vec![vec![1, 2], vec![3]],
///     |p| p.flatten().sum(),
///     |it| it.flatten().sum::<i32>(),
/// );
/// ```
#[macro_export]
macro_rules! assert_parity {
    ($source:expr, $build:expr, $adapters:expr $(,)?) => {{
        let (via_pipeline, via_adapters) = $crate::testing::parity($source, $build, $adapters);
        assert_eq!(
            via_pipeline, via_adapters,
            "pipeline and iterator adapters disagree"
        );
    }};
}

/// Assert that a `Maybe` holds a value.
///
/// # Example
///
/// ```rust
/// use transducers::{assert_present, Maybe};
///
/// assert_present!(Maybe::present(3));
/// ```
#[macro_export]
macro_rules! assert_present {
    ($maybe:expr) => {
        match $maybe {
            $crate::Maybe::Present(_) => {}
            $crate::Maybe::Empty => {
                panic!("Expected Present, got Empty");
            }
        }
    };
}

/// Assert that a `Maybe` is empty.
///
/// # Example
///
/// ```rust
/// use transducers::{assert_empty, Maybe};
///
/// assert_empty!(Maybe::<i32>::empty());
/// ```
#[macro_export]
macro_rules! assert_empty {
    ($maybe:expr) => {
        match $maybe {
            $crate::Maybe::Empty => {}
            $crate::Maybe::Present(v) => {
                panic!("Expected Empty, got Present: {:?}", v);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<T> Arbitrary for crate::Maybe<T>
where
    T: Arbitrary + 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        proptest::option::of(any_with::<T>(args))
            .prop_map(crate::Maybe::from)
            .boxed()
    }
}
