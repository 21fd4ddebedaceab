pub mod owned_css;
pub mod preview_css;
