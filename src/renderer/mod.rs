//! HTML renderer for the gallery document
//!
//! This module takes grouped icon variants and produces a single HTML
//! string: one container per group, each holding a hover-reveal label and
//! one image per variant.

pub mod config;
pub mod html;

pub use config::HtmlConfig;
pub use html::{render_html, render_html_with_stylesheet};
