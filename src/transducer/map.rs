//! Map stage - transforms each element.

use crate::reducer::{Reducer, Step};
use crate::transducer::Transducer;

/// Create a stage that forwards `f(element)` for every element.
pub fn map<F>(f: F) -> Map<F> {
    Map { f }
}

/// Map transducer.
///
/// # Example
///
/// ```rust
/// use transducers::prelude::*;
///
/// let out = vec![1, 2, 3].transduce(|p| p.map(|x| (x * x).to_string()).to_list());
/// assert_eq!(out, vec!["1", "4", "9"]);
/// ```
#[derive(Clone, Copy)]
pub struct Map<F> {
    f: F,
}

impl<F> std::fmt::Debug for Map<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map").field("f", &"<function>").finish()
    }
}

impl<R, F> Transducer<R> for Map<F> {
    type Reducer = MapReducer<R, F>;

    fn apply(self, downstream: R) -> MapReducer<R, F> {
        MapReducer {
            downstream,
            f: self.f,
        }
    }
}

/// Reducer produced by [`Map`].
pub struct MapReducer<R, F> {
    downstream: R,
    f: F,
}

impl<R: std::fmt::Debug, F> std::fmt::Debug for MapReducer<R, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapReducer")
            .field("downstream", &self.downstream)
            .field("f", &"<function>")
            .finish()
    }
}

impl<Acc, In, Out, R, F> Reducer<Acc, In> for MapReducer<R, F>
where
    F: FnMut(In) -> Out,
    R: Reducer<Acc, Out>,
{
    #[inline]
    fn init(&mut self) -> Acc {
        self.downstream.init()
    }

    #[inline]
    fn step(&mut self, acc: Acc, elem: In) -> Step<Acc> {
        self.downstream.step(acc, (self.f)(elem))
    }

    #[inline]
    fn is_closed(&self) -> bool {
        self.downstream.is_closed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{Sum, ToList};
    use crate::Maybe;

    #[test]
    fn transforms_each_element() {
        let mut r = map(|x: i32| x * 10).apply(ToList);
        let acc = r.reduce(Maybe::empty(), Maybe::present(1));
        let acc = r.reduce(acc, Maybe::present(2));
        assert_eq!(acc, Maybe::present(vec![10, 20]));
    }

    #[test]
    fn default_request_skips_the_body() {
        let mut calls = 0;
        let mut r = map(|x: i32| {
            calls += 1;
            x
        })
        .apply(Sum);
        let acc: Maybe<i32> = r.reduce(Maybe::empty(), Maybe::empty());
        assert_eq!(acc, Maybe::present(0));
        drop(r);
        assert_eq!(calls, 0);
    }

    #[test]
    fn absent_element_leaves_accumulator_alone() {
        let mut r = map(|x: i32| x + 1).apply(Sum);
        assert_eq!(r.reduce(Maybe::present(7), Maybe::empty()), Maybe::present(7));
    }

    #[test]
    fn can_change_the_element_type() {
        let mut r = map(|s: &str| s.len()).apply(ToList);
        let acc = r.reduce(Maybe::empty(), Maybe::present("abc"));
        assert_eq!(acc, Maybe::present(vec![3usize]));
    }
}
