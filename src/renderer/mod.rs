//! Rendering module
//!
//! Canvases are drawn by sampling their coverage, so anything that
//! implements `Coverage` can be shown.

pub mod ascii;

pub use ascii::{render_canvas, render_side_by_side};
