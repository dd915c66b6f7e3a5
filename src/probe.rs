//! Read-only snapshot of the toolchain and host.

use std::env;
use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Local};

use crate::error::{Result, ShowcaseError};

/// `rustc --version` as seen by the build script.
pub const RUSTC_VERSION: &str = env!("BABYLON_RUSTC_VERSION");

#[derive(Debug, Clone)]
pub struct EnvironmentReport {
    pub version: String,
    pub platform: String,
    pub architecture: String,
    pub implementation: String,
    pub cpu_count: usize,
    pub now: DateTime<Local>,
    pub working_directory: PathBuf,
}

impl EnvironmentReport {
    pub fn collect() -> Result<Self> {
        Ok(EnvironmentReport {
            version: RUSTC_VERSION.to_string(),
            platform: format!("{}-{}", env::consts::OS, env::consts::FAMILY),
            architecture: env::consts::ARCH.to_string(),
            implementation: implementation_name(RUSTC_VERSION).to_string(),
            cpu_count: num_cpus::get(),
            now: Local::now(),
            working_directory: env::current_dir()
                .map_err(|e| ShowcaseError::io("working directory", e))?,
        })
    }

    pub fn lines(&self) -> Vec<String> {
        vec![
            "Hello from Rust!".to_string(),
            format!("Rust Version: {}", self.version),
            format!("Platform: {}", self.platform),
            format!("Architecture: {}", self.architecture),
            format!("Rust Implementation: {}", self.implementation),
            format!("CPU count: {}", self.cpu_count),
            format!("Current time: {}", self.now.format("%Y-%m-%d %H:%M:%S%.6f")),
            format!("Working directory: {}", self.working_directory.display()),
        ]
    }
}

impl fmt::Display for EnvironmentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

// "rustc 1.83.0 (90b35a623 2024-11-26)" -> "rustc"
fn implementation_name(version: &str) -> &str {
    version
        .split_whitespace()
        .next()
        .filter(|name| *name != "unknown")
        .unwrap_or("rustc")
}
