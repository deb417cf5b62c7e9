//! The asynchronous driving loop over [`futures::Stream`].
//!
//! Same fold as the [synchronous loop](crate::transduce()): the accumulator is
//! seeded with `init()` once, a stop returns the last accumulator, and an empty
//! stream yields the sink default. The loop awaits exactly once per element,
//! at the source. Stages and sinks stay synchronous.
//!
//! A stop is an ordinary return from the loop. The stream is dropped without
//! being polled again, so an infinite stream under `take` terminates.
//!
//! # Example
//!
//! ```rust
//! use futures::stream;
//! use transducers::prelude::*;
//!
//! # tokio_test::block_on(async {
//! let firsts = stream::iter(1..)
//!     .transduce(|p| p.map(|x| x * x).take(3).to_list())
//!     .await;
//! assert_eq!(firsts, vec![1, 4, 9]);
//! # });
//! ```

use std::future::Future;
use std::ops::ControlFlow;
use std::pin::pin;

use futures::{Stream, StreamExt};

use crate::pipeline::{Pipeline, Terminal};
use crate::reducer::Reducer;
use crate::transduce::Run;

/// Fold `source` through an already realized reducer.
pub async fn drive_stream<S, Acc, R>(source: S, reducer: R) -> Acc
where
    S: Stream,
    R: Reducer<Acc, S::Item>,
{
    let mut source = pin!(source);
    let mut run = Run::new(reducer);
    while let Some(elem) = source.next().await {
        if let ControlFlow::Break(last) = run.feed(elem) {
            return last;
        }
    }
    run.finish()
}

/// Fold a fallible stream through an already realized reducer.
///
/// The first `Err` is returned unchanged and the stream is not polled again.
pub async fn try_drive_stream<S, T, E, Acc, R>(source: S, reducer: R) -> Result<Acc, E>
where
    S: Stream<Item = Result<T, E>>,
    R: Reducer<Acc, T>,
{
    let mut source = pin!(source);
    let mut run = Run::new(reducer);
    while let Some(item) = source.next().await {
        if let ControlFlow::Break(last) = run.feed(item?) {
            return Ok(last);
        }
    }
    Ok(run.finish())
}

/// Fold `source` through the pipeline that `build` describes.
pub async fn transduce_stream<S, Acc, R, F>(source: S, build: F) -> Acc
where
    S: Stream,
    F: FnOnce(Pipeline<S::Item>) -> Terminal<S::Item, Acc, R>,
    R: Reducer<Acc, S::Item>,
{
    drive_stream(source, build(Pipeline::new()).into_reducer()).await
}

/// Fold a fallible stream through the pipeline that `build` describes.
pub async fn try_transduce_stream<S, T, E, Acc, R, F>(source: S, build: F) -> Result<Acc, E>
where
    S: Stream<Item = Result<T, E>>,
    F: FnOnce(Pipeline<T>) -> Terminal<T, Acc, R>,
    R: Reducer<Acc, T>,
{
    try_drive_stream(source, build(Pipeline::new()).into_reducer()).await
}

/// Method-call form of [`transduce_stream`] and [`try_transduce_stream`].
///
/// # Example
///
/// ```rust
/// use futures::stream;
/// use transducers::prelude::*;
///
/// # tokio_test::block_on(async {
/// let lines = stream::iter(vec![Ok("1"), Ok("22"), Err("disconnected"), Ok("4")]);
/// let total = lines.try_transduce(|p| p.sum_by(|s: &str| s.len())).await;
/// assert_eq!(total, Err("disconnected"));
/// # });
/// ```
pub trait StreamTransduceExt: Stream + Sized {
    /// See [`transduce_stream`].
    fn transduce<Acc, R, F>(self, build: F) -> impl Future<Output = Acc>
    where
        F: FnOnce(Pipeline<Self::Item>) -> Terminal<Self::Item, Acc, R>,
        R: Reducer<Acc, Self::Item>,
    {
        transduce_stream(self, build)
    }

    /// See [`try_transduce_stream`].
    fn try_transduce<T, E, Acc, R, F>(self, build: F) -> impl Future<Output = Result<Acc, E>>
    where
        Self: Stream<Item = Result<T, E>>,
        F: FnOnce(Pipeline<T>) -> Terminal<T, Acc, R>,
        R: Reducer<Acc, T>,
    {
        try_transduce_stream(self, build)
    }
}

impl<S: Stream> StreamTransduceExt for S {}
