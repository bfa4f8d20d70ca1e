//! Streaming example: processing input line by line without buffering it.

use std::io::{BufRead, BufReader, Cursor};
use std::time::Instant;

use seqext_core::prelude::*;

/// Synthetic access log, one request per line.
fn sample_log(lines: usize) -> String {
    range(0, None)
        .map(|n| {
            let status = if n % 17 == 0 { 500 } else { 200 };
            format!("GET /item/{} {} {}ms", n % 50, status, 5 + (n * 7) % 40)
        })
        .take(lines)
        .intersperse(String::from("\n"))
        .collect()
}

#[derive(Debug)]
struct Request {
    status: u16,
    latency_ms: u32,
}

fn parse(line: &str) -> Option<Request> {
    let mut fields = line.split_whitespace().into_seq().drop(2);
    let status = fields.next()?.parse().ok()?;
    let latency_ms = fields.next()?.strip_suffix("ms")?.parse().ok()?;
    Some(Request { status, latency_ms })
}

fn main() {
    tracing_subscriber::fmt::init();

    println!("Streaming Processing Example");
    println!("============================\n");

    let log = sample_log(10_000);
    let mut reader = BufReader::new(Cursor::new(log));

    // Pull one line per request; the reader is never read ahead.
    let lines = from_fn(move || {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line),
        }
    });

    let start = Instant::now();

    let latencies = lines
        .filter_map(|line| parse(&line))
        .tap(|request| {
            if request.status >= 500 {
                tracing::warn!(?request, "server error");
            }
        })
        .map(|request| request.latency_ms)
        .chunks(1000);

    for (batch, chunk) in latencies.enumerate() {
        let slowest = chunk.iter().max().copied().unwrap_or(0);
        let mean = chunk.iter().map(|&ms| f64::from(ms)).sum::<f64>() / chunk.len() as f64;
        println!("Batch {batch:>2}: {:>4} requests, mean {mean:5.1}ms, slowest {slowest}ms", chunk.len());
    }

    println!("\nProcessed in {:?}", start.elapsed());
}
