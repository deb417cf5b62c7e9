//! # Transducers
//!
//! Single-pass, composable data pipelines for Rust.
//!
//! A pipeline is a chain of stages (`map`, `filter`, `take`, `flat_map`,
//! `flatten`) ended by exactly one sink (`to_list`, `sum`, `fold`, ...). The
//! stages are fused into one [`Reducer`] before the source is read. Each
//! element travels through every stage before the next one is pulled. No
//! intermediate collection is built, and a satisfied `take` stops the source
//! from being read any further.
//!
//! ## Quick Example
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
//!
//! // Infinite sources are fine once something stops the fold.
//! let grid = (1..).map(|row| vec![row * 10; 3]);
//! let firsts = grid.transduce(|p| p.flatten().take(4).to_list());
//! assert_eq!(firsts, vec![10, 10, 10, 20]);
//! ```
//!
//! ## Pieces
//!
//! - [`Maybe`]: the absence marker of the sentinel reducer protocol
//! - [`Reducer`] and [`Transducer`]: the fold protocol and the stages built on it
//! - [`Pipeline`] and [`Terminal`]: the fluent builder, before and after its sink
//! - [`transduce()`] and [`stream`]: the synchronous and asynchronous driving loops
//! - [`testing`]: pull counters and parity assertions for tests

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod maybe;
pub mod pipeline;
pub mod reducer;
pub mod sink;
pub mod stream;
pub mod testing;
pub mod transduce;
pub mod transducer;
#[cfg(feature = "tracing")]
pub mod tracing;

// Re-exports
pub use maybe::Maybe;
pub use pipeline::{Pipeline, Terminal};
pub use reducer::{BoxedReducer, Reducer, Step};
pub use stream::{
    drive_stream, transduce_stream, try_drive_stream, try_transduce_stream, StreamTransduceExt,
};
pub use transduce::{drive, transduce, try_drive, try_transduce, TransduceExt};
pub use transducer::{compose, identity, Compose, Identity, Transducer};

#[cfg(feature = "tracing")]
pub use crate::tracing::Instrumented;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::maybe::Maybe;
    pub use crate::pipeline::{Pipeline, Terminal};
    pub use crate::reducer::{self, BoxedReducer, Reducer, Step};
    pub use crate::sink::{self, Sequence};
    pub use crate::stream::StreamTransduceExt;
    pub use crate::transduce::{drive, transduce, try_drive, try_transduce, TransduceExt};
    pub use crate::transducer::{self, Transducer};
}
