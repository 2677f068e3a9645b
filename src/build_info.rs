//! Build information
//!
//! Compile-time package constants for the startup banner.

/// Package name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Package version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Print the startup banner to stderr
pub fn print_startup_banner() {
    eprintln!("{} {} - patient medication schedule client", NAME, VERSION);
}
