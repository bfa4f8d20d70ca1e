//! Basic usage example for seqext Core.

use seqext_core::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("seqext Core Basic Usage Example");
    println!("===============================\n");

    // Example 1: An infinite source bounded by take
    println!("Example 1: Infinite Range");
    println!("-------------------------");
    let squares = range(1, None)
        .filter(|n| n % 3 == 0)
        .map(|n| n * n)
        .take(4)
        .join(", ");
    println!("First four squares of multiples of 3: {squares}\n");

    // Example 2: Grouping adjacent items
    println!("Example 2: Run-Length Encoding");
    println!("------------------------------");
    let text = "aaabccddddde";
    let encoded = text
        .chars()
        .into_seq()
        .group(|a, b| a == b)
        .map(|run| format!("{}{}", run.len(), run[0]))
        .join("");
    println!("{text} -> {encoded}\n");

    // Example 3: Windows and chunks
    println!("Example 3: Windows and Chunks");
    println!("-----------------------------");
    let readings = vec![3.0, 5.0, 4.0, 8.0, 6.0, 7.0];
    let averages = readings
        .iter()
        .copied()
        .into_seq()
        .windows(3)
        .map(|w| w.iter().sum::<f64>() / 3.0)
        .to_vec();
    println!("Moving averages: {averages:?}");

    let batches = range(0, 10).try_chunks(4)?.to_vec();
    println!("Batches of 4: {batches:?}\n");

    // Example 4: Combining sources
    println!("Example 4: Multiple Sources");
    println!("---------------------------");
    let schedule = vec!["build", "test", "lint", "docs", "release"]
        .into_seq()
        .zip(vec!["alice", "bob"].into_seq().cycle())
        .map(|(task, who)| format!("{task}:{who}"))
        .join(" ");
    println!("Round robin: {schedule}");

    let grid = range(0, 2).product(vec!['a', 'b', 'c']).to_vec();
    println!("Product: {grid:?}\n");

    // Example 5: Early-exit terminals leave the rest pullable
    println!("Example 5: Early Exit");
    println!("---------------------");
    let mut numbers = range(10, 20).debug("numbers");
    let first_even_square = numbers.find_map(|n| (n % 4 == 0).then_some(n * n));
    println!("First square of a multiple of 4: {first_even_square:?}");
    println!("Remaining: {:?}", numbers.to_vec());

    let only = once(42).exact()?;
    println!("Exactly one: {only}");

    match range(0, 3).exact() {
        Ok(value) => println!("Unexpected single value {value}"),
        Err(error) => println!("exact() on three items: {error}"),
    }

    Ok(())
}
