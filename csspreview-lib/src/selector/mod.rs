//! Selector handling: chain normalization and tag/attribute extraction.

pub mod extract;
pub mod normalize;
