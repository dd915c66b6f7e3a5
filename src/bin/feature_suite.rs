//! Walks through the language feature tour.
//!
//! Run with: cargo run --bin feature-suite

use babylon_smoke::{logging, suite, SuiteConfig};

fn main() -> anyhow::Result<()> {
    logging::init();
    suite::run(&SuiteConfig::default())?;
    Ok(())
}
