//! Prints the toolchain and host banner.
//!
//! Run with: cargo run --bin env-probe

use babylon_smoke::logging;
use babylon_smoke::probe::EnvironmentReport;
use colored::Colorize;

fn main() -> anyhow::Result<()> {
    logging::init();

    let report = EnvironmentReport::collect()?;
    print!("{}", report);
    println!("{}", "✓ Rust test successful!".green());
    Ok(())
}
