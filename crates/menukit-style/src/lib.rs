#![forbid(unsafe_code)]

//! Style and layout engine for menukit menus.
//!
//! This crate provides:
//! - [`MenuStyle`] — the aggregated style state owned by one menu
//! - [`BoxModel`] and [`BorderShorthand`] — CSS-like width/margin/padding/
//!   border algebra, including auto-centering against the live terminal
//! - [`Color`] selections and capability-tiered ANSI escape code generation

pub mod box_model;
pub mod color;
pub mod menu_style;

pub use box_model::{BorderArg, BorderShorthand, BoxModel};
pub use color::{Color, NamedColor, OutOfRangeColor, INVERT_OFF, INVERT_ON, RESET};
pub use menu_style::MenuStyle;
