//! # Babylon Smoke
//!
//! Smoke tests for a freshly installed Rust toolchain.
//!
//! ## Binaries
//!
//! 1. **env-probe** - prints toolchain, platform and host details
//! 2. **feature-suite** - walks through a fixed tour of language features
//!
//! ## Feature Tour
//!
//! - Pattern dispatch over heterogeneous JSON values
//! - Memoized Fibonacci backed by a bounded LRU cache
//! - Cooperative fan-out/join on a single-threaded runtime
//! - Ordered map over a bounded worker pool
//! - Scoped file resource with guaranteed release
//! - Trait-based rendering of shapes
//! - Generic LIFO stack and a serializable record
//!
//! ## Running
//!
//! ```bash
//! cargo run --bin env-probe
//! cargo run --bin feature-suite
//! RUST_LOG=babylon_smoke=debug cargo run --bin feature-suite
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod fanout;
pub mod fib;
pub mod functional;
pub mod logging;
pub mod person;
pub mod probe;
pub mod scoped_file;
pub mod shapes;
pub mod stack;
pub mod suite;

pub use config::SuiteConfig;
pub use error::{Result, ShowcaseError};
