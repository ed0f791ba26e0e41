// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod search;

pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;
