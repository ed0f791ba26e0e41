// src/core/mod.rs

pub mod html;
pub mod markup;
pub mod sanitize;

pub use html::{strip_tags, summarize};
pub use markup::format_markup;
