// soapdump - core/mod.rs
//
// Core business logic layer: extraction, scanning, correlation, reporting.
// Must NOT depend on: app or platform, and never touches the filesystem.

pub mod correlate;
pub mod export;
pub mod extract;
pub mod model;
pub mod report;
pub mod scanner;
