//! Command implementations for the emosafe CLI.

pub mod convert;
