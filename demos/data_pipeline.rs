//! Log processing with transducers
//!
//! Parses a batch of access-log lines in one pass: no intermediate vectors are
//! built between the stages, and reading stops as soon as enough errors have
//! been found.
//!
//! Run with: cargo run --example data_pipeline

use std::collections::BTreeMap;

use transducers::prelude::*;
use transducers::testing::PullCounter;

#[derive(Debug, Clone, PartialEq)]
struct Request {
    path: String,
    status: u16,
    millis: u64,
}

fn parse(line: &str) -> Option<Request> {
    let mut parts = line.split_whitespace();
    let path = parts.next()?.to_string();
    let status = parts.next()?.parse().ok()?;
    let millis = parts.next()?.parse().ok()?;
    Some(Request { path, status, millis })
}

const LOG: &str = "\
/index 200 12
/login 500 340
garbage line
/index 200 9
/api/users 404 3
/api/users 200 48
/login 500 512
/index 503 1200
/api/orders 200 77";

fn main() {
    println!("=== Data Pipeline Example ===\n");

    // Total latency of successful requests
    let ok_millis = LOG.lines().transduce(|p| {
        p.flat_map(parse)
            .filter(|r| r.status < 400)
            .sum_by(|r| r.millis)
    });
    println!("Latency of successful requests: {}ms", ok_millis);

    // First two server errors, without reading the rest of the log
    let counter = PullCounter::new();
    let errors = counter.wrap(LOG.lines()).transduce(|p| {
        p.flat_map(parse)
            .filter(|r| r.status >= 500)
            .map(|r| r.path)
            .take(2)
            .to_list()
    });
    println!(
        "First server errors: {:?} (read {} of {} lines)",
        errors,
        counter.pulled(),
        LOG.lines().count()
    );

    // Hits per path into a caller-provided map
    let hits = LOG.lines().transduce(|p| {
        p.flat_map(parse).fold(BTreeMap::new, |mut hits: BTreeMap<String, u32>, r: Request| {
            *hits.entry(r.path).or_default() += 1;
            hits
        })
    });
    println!("Hits per path: {:?}", hits);

    // Keep a pipeline prefix and branch it
    let slow = Pipeline::<&str>::new()
        .flat_map(parse)
        .filter(|r| r.millis > 100);
    let slow_count = LOG.lines().transduce(|_| slow.clone().sum_by(|_| 1u32));
    let slowest = LOG.lines().transduce(|_| {
        slow.clone().fold(|| 0u64, |max: u64, r: Request| max.max(r.millis))
    });
    println!("Slow requests: {} (slowest {}ms)", slow_count, slowest);
}
