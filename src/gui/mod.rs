// src/gui/mod.rs
pub mod app;
pub mod components;
pub mod pages;

pub use app::{App, run};
