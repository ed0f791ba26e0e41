// src/gui/components/mod.rs
pub mod labeled_input;
pub mod result_card;
