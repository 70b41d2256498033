//! Supporting utilities.
//!
//! - [`date`]: UTC date parsing and formatting for the display filters
//! - [`html`]: HTML escaping for shortcode output
//! - [`path`]: project-relative path normalization

pub mod date;
pub mod html;
pub mod path;
