//! Turns near-white pixels of an image transparent.
//!
//! [`filter::filter`] is the pure per-pixel rule, [`filter::Whiteout`] applies
//! it in place through the [`filter::Filter`] trait and [`image_io`] handles
//! decoding and the PNG output.

pub mod filter;
pub mod image_io;
