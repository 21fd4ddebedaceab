//! Builds an HTML page with one placeholder element per CSS selector, so every
//! rule of a stylesheet can be looked at without writing real markup.
//!
//! ```no_run
//! use csspreview_lib::options::PreviewOptions;
//! use csspreview_lib::preview_generate::css_preview;
//!
//! let options = PreviewOptions::new("style.css");
//! let html = css_preview::generate_from_file("style.css", &options)?;
//! println!("{}", html);
//! # Ok::<(), csspreview_lib::error::Error>(())
//! ```

pub mod error;
pub mod options;
pub mod preview_generate;
pub mod render;
pub mod selector;
pub mod style;

pub use error::{Error, Result};
