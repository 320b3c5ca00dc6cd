#![forbid(unsafe_code)]

//! Color selections and ANSI escape code generation.
//!
//! A menu carries a foreground/background pair of [`Color`] selections. Each
//! selection is either one of the eight standard palette names, or a
//! 256-color index paired with a mandatory named fallback. Selections are
//! stored at full fidelity and resolved against the terminal's
//! [`ColorSupport`] tier only when an escape code (or a getter) needs them,
//! so the same configuration renders correctly if the tier is re-probed
//! later.
//!
//! # Sequence Reference
//!
//! | Tier | Sequence | Description |
//! |------|----------|-------------|
//! | 16-color | `ESC [ 3x ; 4y m` | SGR foreground (30+x) and background (40+y) |
//! | 256-color | `ESC [ 38;5;n ; 48;5;m m` | Indexed foreground/background |
//! | any | `ESC [ 0 m` | SGR reset |
//! | any | `ESC [ 7 m` / `ESC [ 27 m` | Reverse video on/off |

use menukit_core::ColorSupport;

/// SGR reset: `CSI 0 m`.
pub const RESET: &str = "\x1b[0m";

/// Reverse video on: `CSI 7 m`.
pub const INVERT_ON: &str = "\x1b[7m";

/// Reverse video off: `CSI 27 m`.
pub const INVERT_OFF: &str = "\x1b[27m";

/// The eight standard ANSI palette names.
///
/// Palette order fixes each name's index: foreground SGR code is
/// `30 + index`, background is `40 + index`, and the same index addresses
/// the color in the 256-color palette's first eight slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum NamedColor {
    /// Black (index 0).
    Black = 0,
    /// Red (index 1).
    Red = 1,
    /// Green (index 2).
    Green = 2,
    /// Yellow (index 3).
    Yellow = 3,
    /// Blue (index 4).
    Blue = 4,
    /// Magenta (index 5).
    Magenta = 5,
    /// Cyan (index 6).
    Cyan = 6,
    /// White (index 7).
    White = 7,
}

impl NamedColor {
    /// Return the palette index (0–7).
    #[must_use]
    pub const fn palette_index(self) -> u8 {
        self as u8
    }

    /// Convert a palette index to a `NamedColor`, returning `None` if out of
    /// range.
    #[must_use]
    pub const fn from_palette_index(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Black),
            1 => Some(Self::Red),
            2 => Some(Self::Green),
            3 => Some(Self::Yellow),
            4 => Some(Self::Blue),
            5 => Some(Self::Magenta),
            6 => Some(Self::Cyan),
            7 => Some(Self::White),
            _ => None,
        }
    }

    /// SGR foreground code (30–37).
    #[must_use]
    pub const fn fg_code(self) -> u8 {
        30 + self.palette_index()
    }

    /// SGR background code (40–47).
    #[must_use]
    pub const fn bg_code(self) -> u8 {
        40 + self.palette_index()
    }

    /// Get the color name as a string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
        }
    }
}

impl std::str::FromStr for NamedColor {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "black" => Ok(Self::Black),
            "red" => Ok(Self::Red),
            "green" => Ok(Self::Green),
            "yellow" => Ok(Self::Yellow),
            "blue" => Ok(Self::Blue),
            "magenta" => Ok(Self::Magenta),
            "cyan" => Ok(Self::Cyan),
            "white" => Ok(Self::White),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for NamedColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error raised when a 256-color index falls outside [0, 255].
///
/// The check fires at construction time, before the selection is stored,
/// and is independent of the terminal's color tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRangeColor {
    /// The rejected index.
    pub index: u16,
}

impl std::fmt::Display for OutOfRangeColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid colour code: {} is outside 0-255", self.index)
    }
}

impl std::error::Error for OutOfRangeColor {}

/// A color selection at one of two fidelity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// One of the eight standard palette names.
    Named(NamedColor),
    /// A 256-color palette index with a named fallback for 16-color
    /// terminals.
    Indexed {
        /// Palette index (0–255).
        index: u8,
        /// Name rendered when the terminal lacks 256-color support.
        fallback: NamedColor,
    },
}

impl Color {
    /// Create an indexed selection, validating the index against [0, 255].
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeColor`] when `index` exceeds 255, regardless of
    /// what the terminal supports.
    pub const fn indexed(index: u16, fallback: NamedColor) -> Result<Self, OutOfRangeColor> {
        if index > 255 {
            return Err(OutOfRangeColor { index });
        }
        Ok(Self::Indexed {
            index: index as u8,
            fallback,
        })
    }

    /// Whether this selection carries a 256-color index.
    #[must_use]
    pub const fn is_indexed(self) -> bool {
        matches!(self, Self::Indexed { .. })
    }

    /// Resolve this selection for the given tier.
    ///
    /// On the 16-color tier an indexed selection collapses to its fallback
    /// name; everything else is the identity.
    #[must_use]
    pub const fn resolve(self, support: ColorSupport) -> Self {
        match self {
            Self::Indexed { fallback, .. } => {
                if support.has_256() {
                    self
                } else {
                    Self::Named(fallback)
                }
            }
            Self::Named(_) => self,
        }
    }

    /// The name this selection renders as on a 16-color terminal.
    #[must_use]
    pub const fn fallback_name(self) -> NamedColor {
        match self {
            Self::Named(name) => name,
            Self::Indexed { fallback, .. } => fallback,
        }
    }

    /// The 256-color palette index for this selection.
    ///
    /// Names map 1:1 onto the palette's first eight slots.
    #[must_use]
    pub const fn palette_index(self) -> u8 {
        match self {
            Self::Named(name) => name.palette_index(),
            Self::Indexed { index, .. } => index,
        }
    }
}

impl From<NamedColor> for Color {
    fn from(name: NamedColor) -> Self {
        Self::Named(name)
    }
}

/// Build the SGR sequence that sets a foreground/background pair.
///
/// If the tier supports 256 colors and either side is indexed, both sides
/// render through the 256-color form (names addressed by their palette
/// slot). Otherwise indexed selections collapse to their fallbacks and the
/// pair renders through the 16-color form.
///
/// Pure function of its inputs; consumers print the result verbatim.
#[must_use]
pub fn set_code(fg: Color, bg: Color, support: ColorSupport) -> String {
    if support.has_256() && (fg.is_indexed() || bg.is_indexed()) {
        format!(
            "\x1b[38;5;{};48;5;{}m",
            fg.palette_index(),
            bg.palette_index()
        )
    } else {
        format!(
            "\x1b[{};{}m",
            fg.fallback_name().fg_code(),
            bg.fallback_name().bg_code()
        )
    }
}
