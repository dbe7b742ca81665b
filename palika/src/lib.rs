// palika/src/lib.rs
//
// The binary is a thin shell; the router and command handlers live here so
// integration tests can drive them directly.

pub mod cli;
pub mod commands;
pub mod http;
