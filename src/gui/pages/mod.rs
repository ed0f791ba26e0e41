// src/gui/pages/mod.rs
pub mod search;
