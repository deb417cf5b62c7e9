//! Tracing support for realized pipelines.
//!
//! This module provides the [`Instrumented`] reducer and
//! [`Terminal::instrument`] for running a fold inside a tracing span.
//! Feature-gated behind `#[cfg(feature = "tracing")]`.

use crate::pipeline::Terminal;
use crate::reducer::{Reducer, Step};

/// A reducer whose calls run inside a tracing span.
///
/// Created by [`Terminal::instrument`]. The span is entered around `init` and
/// every `step`, and a `trace` event is emitted when a step stops the fold.
#[derive(Debug)]
pub struct Instrumented<R> {
    inner: R,
    span: tracing::Span,
}

impl<R> Instrumented<R> {
    /// Wrap `inner` in `span`.
    pub fn new(inner: R, span: tracing::Span) -> Self {
        Self { inner, span }
    }

    /// The wrapped reducer.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<Acc, Elem, R> Reducer<Acc, Elem> for Instrumented<R>
where
    R: Reducer<Acc, Elem>,
{
    fn init(&mut self) -> Acc {
        let _guard = self.span.enter();
        self.inner.init()
    }

    fn step(&mut self, acc: Acc, elem: Elem) -> Step<Acc> {
        let _guard = self.span.enter();
        let step = self.inner.step(acc, elem);
        if step.is_break() {
            tracing::trace!("reducer stopped the fold");
        }
        step
    }

    fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }
}

impl<In, Acc, R> Terminal<In, Acc, R>
where
    R: Reducer<Acc, In>,
{
    /// Run this pipeline's reducer inside `span`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use transducers::prelude::*;
    /// use tracing::debug_span;
    ///
    /// let out = transduce(1.., |p| {
    ///     p.take(2)
    ///         .to_list()
    ///         .instrument(debug_span!("first_two", source = "naturals"))
    /// });
    /// assert_eq!(out, vec![1, 2]);
    /// ```
    pub fn instrument(self, span: tracing::Span) -> Terminal<In, Acc, Instrumented<R>> {
        Terminal::new(Instrumented::new(self.into_reducer(), span))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transduce::{drive, transduce};
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn instrumented_fold_keeps_its_result() {
        let out = transduce(vec![1, 2, 3], |p| {
            p.map(|x| x * 10)
                .sum()
                .instrument(tracing::info_span!("sum_tens"))
        });
        assert_eq!(out, 60);
        assert!(!logs_contain("reducer stopped the fold"));
    }

    #[traced_test]
    #[test]
    fn stop_is_logged_inside_the_span() {
        let out = transduce(vec![1, 2, 3], |p| {
            p.take(1)
                .to_list()
                .instrument(tracing::info_span!("first_only"))
        });
        assert_eq!(out, vec![1]);
        assert!(logs_contain("reducer stopped the fold"));
        assert!(logs_contain("first_only"));
        assert!(logs_contain("fold stopped early"));
        assert!(logs_contain("pulled=2"));
    }

    #[traced_test]
    #[test]
    fn empty_source_logs_the_default() {
        let out: Vec<u8> = drive(Vec::<u8>::new(), crate::sink::ToList);
        assert!(out.is_empty());
        assert!(logs_contain("source yielded nothing"));
    }

    #[test]
    fn closed_chain_is_seen_through_the_span() {
        let mut r = crate::Pipeline::<i32>::new()
            .take(1)
            .to_list()
            .instrument(tracing::Span::none())
            .into_reducer();
        let acc = r.reduce(crate::Maybe::empty(), crate::Maybe::present(1));
        assert_eq!(r.reduce(acc, crate::Maybe::present(2)), crate::Maybe::empty());
        assert_eq!(
            r.reduce(crate::Maybe::present(vec![1]), crate::Maybe::<i32>::empty()),
            crate::Maybe::empty()
        );
    }

    #[test]
    fn into_inner_returns_the_wrapped_reducer() {
        let wrapped = Instrumented::new(crate::sink::Sum, tracing::Span::none());
        assert_eq!(wrapped.into_inner(), crate::sink::Sum);
    }
}
