//! Hostess - idempotent management of the system hosts file.

pub mod cli;
pub mod commands;
pub mod config;
pub mod diff;
pub mod entry;
pub mod error;
pub mod format;
pub mod hosts;
pub mod logging;
pub mod parser;
pub mod platform;
pub mod writer;

pub use entry::{Entry, Family};
pub use error::{HostsError, Result};
pub use hosts::HostsModel;
