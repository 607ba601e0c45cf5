// emosafe/src/lib.rs
//! # emosafe CLI Application
//!
//! This crate provides the command-line front end for `emosafe-core`: argument
//! parsing, logging setup and console reporting of a directory conversion.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

pub use commands::convert::{run_convert_opts, ConvertCommandOptions};
