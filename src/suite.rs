//! The feature tour, section by section.

use colored::Colorize;
use itertools::Itertools;

use crate::config::SuiteConfig;
use crate::dispatch;
use crate::error::Result;
use crate::fanout;
use crate::fib::Fibonacci;
use crate::functional;
use crate::person::Person;
use crate::scoped_file;
use crate::shapes::{self, Circle, Rectangle};
use crate::stack::Stack;

const SCRATCH_CONTENT: &str = "Hello from context manager!";

fn header(title: &str) {
    println!("\n{}", format!("Testing {}...", title).bold());
}

fn list<T: std::fmt::Display>(items: &[T]) -> String {
    format!("[{}]", items.iter().join(", "))
}

pub fn pattern_matching() {
    println!("{}", "Testing pattern matching...".bold());
    for value in dispatch::sample_inputs() {
        println!("  {} -> {}", value, dispatch::describe(&value));
    }
}

pub fn async_gather(config: &SuiteConfig) -> Result<()> {
    header("async/await");
    for result in fanout::gather(config.fetch_count, config.fetch_delay())? {
        println!("  Fetched: {}", result);
    }
    Ok(())
}

pub fn functional_programming(config: &SuiteConfig) -> Result<()> {
    header("functional programming");
    let p = functional::pipeline();
    println!("  Squares: {}", list(&p.squares));
    println!("  Even squares: {}", list(&p.even_squares));
    println!("  Sum of even squares: {}", p.sum_even_squares);
    println!("  List comprehension: {}", list(&p.filtered_squares));
    println!("  Generator sum: {}", p.lazy_sum);

    let mut fib = Fibonacci::with_capacity(config.cache_capacity)?;
    println!("  Fibonacci(10): {}", fib.compute(10)?);
    let info = fib.cache_info();
    tracing::debug!(hits = info.hits, misses = info.misses, size = info.current_size, "fibonacci cache");
    Ok(())
}

pub fn context_manager(config: &SuiteConfig) -> Result<()> {
    header("context managers");
    let content = scoped_file::round_trip(&config.scratch_path, SCRATCH_CONTENT)?;
    println!("  File content: {}", content);
    Ok(())
}

pub fn worker_pool(config: &SuiteConfig) -> Result<()> {
    header("multiprocessing");
    let results = fanout::square_batch(config.batch_size, config.pool_workers)?;
    println!("  Multiprocessing results: {}", list(&results));
    Ok(())
}

pub fn protocols() {
    header("Protocols");
    println!("  {}", shapes::render(&Circle::new(5.0)));
    println!("  {}", shapes::render(&Rectangle::new(10.0, 20.0)));
}

pub fn walrus_operator() {
    header("walrus operator");
    for line in functional::countdown(vec![1, 2, 3, 4, 5]) {
        println!("  {}", line);
    }
    println!("  Filtered squares > 25: {}", list(&functional::squares_above(10, 25)));
}

pub fn records() -> Result<()> {
    header("dataclasses");
    let person = Person::new("Alice", 30).with_hobbies(["reading", "hiking"]);
    println!("  {}", person.greet());
    println!("  Hobbies: {:?}", person.hobbies());
    println!("  JSON: {}", person.to_json()?);
    Ok(())
}

pub fn generics() {
    header("generics");
    let mut stack: Stack<i32> = Stack::new();
    stack.push(1);
    stack.push(2);
    stack.push(3);
    println!("  Stack: {}", stack);
    match stack.pop() {
        Some(top) => println!("  Popped: {}", top),
        None => println!("  Popped: nothing"),
    }
    println!("  Stack after pop: {}", stack);
}

/// Runs every section in order. The first failure stops the tour.
pub fn run(config: &SuiteConfig) -> Result<()> {
    config.validate()?;
    println!("{}", "=== Babylon Rust Feature Suite ===".bold());
    println!("Rust Version: {}", crate::probe::RUSTC_VERSION);
    println!();

    pattern_matching();
    async_gather(config)?;
    functional_programming(config)?;
    context_manager(config)?;
    worker_pool(config)?;
    protocols();
    walrus_operator();
    records()?;
    generics();

    println!("\n{}", "✓ All Rust feature tests passed!".green());
    Ok(())
}
