// soapdump - app/mod.rs
//
// Application layer: run orchestration and auxiliary CLI output.
// Dependencies: core, platform.

pub mod pipeline;
pub mod scripts;
