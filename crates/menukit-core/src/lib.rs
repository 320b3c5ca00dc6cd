#![forbid(unsafe_code)]

//! Core: terminal capability probing and geometry primitives for menukit.

pub mod geometry;
pub mod terminal;

pub use geometry::Sides;
#[cfg(not(target_arch = "wasm32"))]
pub use terminal::NativeTerminal;
pub use terminal::{ColorSupport, FixedTerminal, TerminalProbe};
