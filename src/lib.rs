//! # Diagram
//!
//! A chessboard diagram renderer: parses slash-delimited rank notation into a
//! board of cells and composites per-piece tile images into a single picture.
pub mod board;
pub mod core;
pub mod render;

pub use board::Board;
pub use core::*;
