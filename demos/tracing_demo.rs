//! Demonstrates tracing integration with pipelines
//!
//! Run with: cargo run --example tracing_demo --features tracing

use futures::stream;
use transducers::prelude::*;

#[tokio::main]
async fn main() {
    // Set up tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    tracing::info!("Starting tracing demo");

    // A synchronous fold that stops early inside a span
    let firsts = (1..).transduce(|p| {
        p.filter(|x| x % 7 == 0)
            .take(3)
            .to_list()
            .instrument(tracing::info_span!("multiples_of_seven"))
    });
    tracing::info!("First multiples of seven: {:?}", firsts);

    // An empty source falls back to the sink default
    let nothing = Vec::<i32>::new().transduce(|p| p.sum());
    tracing::info!("Sum of nothing: {}", nothing);

    // The same span support over an async source
    let words = stream::iter(["still", "water", "runs", "deep"]);
    let letters = words
        .transduce(|p| {
            p.flat_map(|w: &str| w.chars())
                .take(8)
                .collect_into(String::new())
                .instrument(tracing::debug_span!("letters", source = "words"))
        })
        .await;
    tracing::info!("First eight letters: {}", letters);
}
