#![forbid(unsafe_code)]

//! Terminal capability model.
//!
//! The style engine needs exactly two facts about the hosting terminal: how
//! wide it is, and which color tier it speaks. Both are cheap idempotent
//! queries and both are re-read on demand — callers must never cache a
//! probe result across unrelated operations, because the terminal can be
//! resized (or re-attached) between calls.
//!
//! # Detection Strategy
//!
//! Color tier detection is based on environment variables:
//! - `NO_COLOR`: de-facto standard for disabling color — forces the 16-color
//!   tier (the engine has no monochrome rendering path).
//! - `COLORTERM`: `truecolor`/`24bit` implies at least 256-color output.
//! - `TERM`: `*-256color` terminal types, plus `dumb`/empty detection.
//!
//! Given the same environment, detection always produces the same result.

use std::env;

/// Color tier supported by the terminal: the standard 16-color palette
/// (8 usable foreground/background names) or the extended 256-color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorSupport {
    /// Standard 16 ANSI colors.
    Ansi16,
    /// Extended 256-color palette.
    Ansi256,
}

#[derive(Debug, Clone)]
struct DetectInputs {
    no_color: bool,
    term: String,
    colorterm: String,
}

impl DetectInputs {
    fn from_env() -> Self {
        Self {
            no_color: env::var("NO_COLOR").is_ok(),
            term: env::var("TERM").unwrap_or_default(),
            colorterm: env::var("COLORTERM").unwrap_or_default(),
        }
    }
}

impl ColorSupport {
    /// Detect the color tier from the environment.
    #[must_use]
    pub fn detect() -> Self {
        Self::detect_from_inputs(&DetectInputs::from_env())
    }

    fn detect_from_inputs(inputs: &DetectInputs) -> Self {
        let term = inputs.term.as_str();
        let colorterm = inputs.colorterm.as_str();

        let is_dumb = term == "dumb" || term.is_empty();

        let colors_256 = !inputs.no_color
            && !is_dumb
            && (colorterm.contains("truecolor")
                || colorterm.contains("24bit")
                || term.contains("256color")
                || term.contains("256"));

        if colors_256 { Self::Ansi256 } else { Self::Ansi16 }
    }

    /// Whether the 256-color palette is available.
    #[must_use]
    pub const fn has_256(self) -> bool {
        matches!(self, Self::Ansi256)
    }

    /// Number of usable colors on this tier (8 or 256).
    #[must_use]
    pub const fn colours(self) -> u16 {
        match self {
            Self::Ansi16 => 8,
            Self::Ansi256 => 256,
        }
    }

    /// Build a tier from a reported color count.
    ///
    /// Returns `None` for counts other than 8 and 256.
    #[must_use]
    pub const fn from_colours(count: u16) -> Option<Self> {
        match count {
            8 => Some(Self::Ansi16),
            256 => Some(Self::Ansi256),
            _ => None,
        }
    }

    /// Get the tier name as a string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ansi16 => "ansi16",
            Self::Ansi256 => "ansi256",
        }
    }
}

impl std::fmt::Display for ColorSupport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Live view of the hosting terminal.
///
/// Implementations must answer from current state on every call: width is
/// re-read on each auto-margin recomputation and the color tier on each
/// escape-code request.
pub trait TerminalProbe: std::fmt::Debug {
    /// Current terminal width in columns.
    fn width(&self) -> u16;

    /// Current color tier.
    fn color_support(&self) -> ColorSupport;
}

/// Width reported when the real terminal size cannot be determined
/// (e.g. output is not a tty).
pub const FALLBACK_WIDTH: u16 = 80;

/// Probe backed by the real terminal.
///
/// Width comes from the tty on every call; the color tier from the
/// environment on every call. Stateless and free to construct.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeTerminal;

#[cfg(not(target_arch = "wasm32"))]
impl NativeTerminal {
    /// Create a new native probe.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl TerminalProbe for NativeTerminal {
    fn width(&self) -> u16 {
        crossterm::terminal::size()
            .map(|(columns, _rows)| columns)
            .unwrap_or(FALLBACK_WIDTH)
    }

    fn color_support(&self) -> ColorSupport {
        ColorSupport::detect()
    }
}

/// Fixed-capability probe for tests and simulation.
///
/// Reports a constant width and tier, standing in for a known terminal
/// configuration the way a capability profile would.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTerminal {
    width: u16,
    support: ColorSupport,
}

impl FixedTerminal {
    /// Create a probe with explicit width and tier.
    #[must_use]
    pub const fn new(width: u16, support: ColorSupport) -> Self {
        Self { width, support }
    }

    /// Standard xterm-256color at the given width.
    #[must_use]
    pub const fn xterm_256color(width: u16) -> Self {
        Self::new(width, ColorSupport::Ansi256)
    }

    /// Basic 16-color xterm at the given width.
    #[must_use]
    pub const fn xterm(width: u16) -> Self {
        Self::new(width, ColorSupport::Ansi16)
    }
}

impl TerminalProbe for FixedTerminal {
    fn width(&self) -> u16 {
        self.width
    }

    fn color_support(&self) -> ColorSupport {
        self.support
    }
}
