//! Concrete callbacks registered by [`crate::configure`].
//!
//! - [`badge`]: client badge shortcodes
//! - [`data`]: YAML data-format parser
//! - [`date`]: `simpleDate` / `courseDate` display filters
//!
//! All functions here are pure and synchronous; the host may invoke them
//! from parallel render workers.

pub mod badge;
pub mod data;
pub mod date;

pub use badge::{client_tag, paired_client};
pub use data::yaml_data;
pub use date::{course_date, simple_date};
