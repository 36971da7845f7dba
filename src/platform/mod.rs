// soapdump - platform/mod.rs
//
// Filesystem and configuration-file access.

pub mod config;
pub mod fs;
