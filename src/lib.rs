//! GCode Rewind
//!
//! Rewrites slicer-emitted G-code so the toolpath executes in reverse order,
//! keeping the machine initialization preamble intact and injecting a safety
//! lift ahead of the reversed toolpath.
//!
//! This library provides:
//! - G-code line parsing into a parameter map
//! - The motion-block extraction and rewrite pipeline
//! - Machine profile (TOML) management
//! - Configuration management
//! - The per-file driver loop

pub mod config;
pub mod driver;
pub mod parser;
pub mod pipeline;
pub mod profile;

// Re-exports for clean public API
pub use config::Config;
pub use parser::{parse_line, GcodeLine};
pub use pipeline::rewind_document;
pub use profile::Profile;
