#![forbid(unsafe_code)]

//! Box model: width, margin, padding, borders, and the widths derived from
//! them.
//!
//! The model follows the CSS convention: padding and borders eat into the
//! box, margin only offsets it. The usable width for menu content is
//!
//! ```text
//! content_width = width − 2·padding − border.left − border.right
//! ```
//!
//! Margin never appears in that formula. With auto margin enabled the margin
//! is instead derived from the probed terminal width so the box stays
//! horizontally centered, and it is re-derived on every width change while
//! the flag is set.
//!
//! All arithmetic saturates: degenerate configurations (padding wider than
//! the box, content longer than the line) clamp to zero instead of wrapping
//! or failing.

use menukit_core::{Sides, TerminalProbe};

use crate::color::{Color, NamedColor};

/// One argument of the sequence-based border shorthand.
///
/// Tagging each argument's kind up front keeps the parser a plain match
/// over an ordered sequence instead of type-sniffing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderArg {
    /// A border width, in columns/rows.
    Width(u16),
    /// A border color name.
    Colour(NamedColor),
}

/// A parsed border shorthand: per-side widths plus an optional color.
///
/// Shorthand expansion follows the CSS convention:
///
/// | widths | expansion |
/// |--------|-----------|
/// | `w` | all four sides |
/// | `(v, h)` | top=bottom=`v`, left=right=`h` |
/// | `(t, h, b)` | top=`t`, left=right=`h`, bottom=`b` |
/// | `(t, r, b, l)` | assigned in that order |
///
/// Any shape may carry a trailing [`NamedColor`]; omitting it leaves the
/// previously configured border color unchanged when the shorthand is
/// applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderShorthand {
    /// Expanded per-side widths.
    pub widths: Sides,
    /// Border color, if the shorthand supplied one.
    pub colour: Option<NamedColor>,
}

impl BorderShorthand {
    /// Shorthand that sets widths only.
    #[must_use]
    pub const fn widths(widths: Sides) -> Self {
        Self {
            widths,
            colour: None,
        }
    }

    /// Shorthand that sets widths and the border color.
    #[must_use]
    pub const fn with_colour(widths: Sides, colour: NamedColor) -> Self {
        Self {
            widths,
            colour: Some(colour),
        }
    }

    /// Parse an ordered argument sequence: widths first, optionally a
    /// trailing color.
    ///
    /// The trailing color (if any) is popped off before the widths are
    /// counted. Parsing is total: an empty width list expands to zero on
    /// all sides, widths beyond the fourth are ignored, and a color
    /// anywhere but last is ignored.
    #[must_use]
    pub fn from_args(args: &[BorderArg]) -> Self {
        let (colour, rest) = match args.split_last() {
            Some((BorderArg::Colour(colour), rest)) => (Some(*colour), rest),
            _ => (None, args),
        };

        let mut widths = [0u16; 4];
        let mut count = 0;
        for arg in rest {
            if let BorderArg::Width(w) = arg {
                if count < 4 {
                    widths[count] = *w;
                }
                count += 1;
            }
        }

        let sides = match count.min(4) {
            0 => Sides::all(0),
            1 => Sides::all(widths[0]),
            2 => Sides::from((widths[0], widths[1])),
            3 => Sides::new(widths[0], widths[1], widths[2], widths[1]),
            _ => Sides::new(widths[0], widths[1], widths[2], widths[3]),
        };

        Self {
            widths: sides,
            colour,
        }
    }
}

impl From<u16> for BorderShorthand {
    fn from(all: u16) -> Self {
        Self::widths(Sides::all(all))
    }
}

impl From<(u16, u16)> for BorderShorthand {
    fn from((vertical, horizontal): (u16, u16)) -> Self {
        Self::widths(Sides::from((vertical, horizontal)))
    }
}

impl From<(u16, u16, u16)> for BorderShorthand {
    fn from((top, horizontal, bottom): (u16, u16, u16)) -> Self {
        Self::widths(Sides::new(top, horizontal, bottom, horizontal))
    }
}

impl From<(u16, u16, u16, u16)> for BorderShorthand {
    fn from((top, right, bottom, left): (u16, u16, u16, u16)) -> Self {
        Self::widths(Sides::new(top, right, bottom, left))
    }
}

impl From<(u16, NamedColor)> for BorderShorthand {
    fn from((all, colour): (u16, NamedColor)) -> Self {
        Self::with_colour(Sides::all(all), colour)
    }
}

impl From<(u16, u16, NamedColor)> for BorderShorthand {
    fn from((vertical, horizontal, colour): (u16, u16, NamedColor)) -> Self {
        Self::with_colour(Sides::from((vertical, horizontal)), colour)
    }
}

impl From<(u16, u16, u16, NamedColor)> for BorderShorthand {
    fn from((top, horizontal, bottom, colour): (u16, u16, u16, NamedColor)) -> Self {
        Self::with_colour(Sides::new(top, horizontal, bottom, horizontal), colour)
    }
}

impl From<(u16, u16, u16, u16, NamedColor)> for BorderShorthand {
    fn from((top, right, bottom, left, colour): (u16, u16, u16, u16, NamedColor)) -> Self {
        Self::with_colour(Sides::new(top, right, bottom, left), colour)
    }
}

/// The horizontal box model for one menu.
///
/// Owns the configured width, margin, padding, and borders, and derives the
/// content width and right-hand fill on demand. Auto-margin recomputation
/// reads the terminal width through the probe passed to the mutating call,
/// never from a cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxModel {
    width: u16,
    margin: u16,
    padding: u16,
    border: Sides,
    border_colour: Color,
    margin_auto: bool,
}

impl Default for BoxModel {
    /// The documented menu defaults: width 100, margin 2, padding 2, no
    /// borders, white border color, auto margin off.
    fn default() -> Self {
        Self {
            width: 100,
            margin: 2,
            padding: 2,
            border: Sides::all(0),
            border_colour: Color::Named(NamedColor::White),
            margin_auto: false,
        }
    }
}

impl BoxModel {
    /// Total box width in columns.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Left offset of the box within the terminal.
    #[must_use]
    pub const fn margin(&self) -> u16 {
        self.margin
    }

    /// Horizontal padding inside the borders.
    #[must_use]
    pub const fn padding(&self) -> u16 {
        self.padding
    }

    /// Per-side border widths.
    #[must_use]
    pub const fn border_widths(&self) -> Sides {
        self.border
    }

    /// Border color selection.
    #[must_use]
    pub const fn border_colour(&self) -> Color {
        self.border_colour
    }

    /// Whether margin is derived from the terminal width.
    #[must_use]
    pub const fn is_margin_auto(&self) -> bool {
        self.margin_auto
    }

    /// Set the total width.
    ///
    /// While auto margin is enabled this re-centers the box against the
    /// terminal width read fresh from `terminal`.
    pub fn set_width(&mut self, width: u16, terminal: &dyn TerminalProbe) {
        self.width = width;
        if self.margin_auto {
            self.recompute_auto_margin(terminal);
        }
    }

    /// Set an explicit margin, disabling auto margin.
    pub fn set_margin(&mut self, margin: u16) {
        self.margin_auto = false;
        self.margin = margin;
    }

    /// Derive margin from the terminal width, and keep deriving it on
    /// every subsequent width change.
    pub fn set_margin_auto(&mut self, terminal: &dyn TerminalProbe) {
        self.margin_auto = true;
        self.recompute_auto_margin(terminal);
    }

    /// Set the horizontal padding.
    pub fn set_padding(&mut self, padding: u16) {
        self.padding = padding;
    }

    /// Apply a border shorthand.
    ///
    /// A shorthand without a color leaves the configured border color
    /// unchanged.
    pub fn set_border(&mut self, shorthand: impl Into<BorderShorthand>) {
        let shorthand = shorthand.into();
        self.border = shorthand.widths;
        if let Some(colour) = shorthand.colour {
            self.border_colour = Color::Named(colour);
        }
    }

    /// Set the top border width only.
    pub fn set_border_top_width(&mut self, width: u16) {
        self.border.top = width;
    }

    /// Set the right border width only.
    pub fn set_border_right_width(&mut self, width: u16) {
        self.border.right = width;
    }

    /// Set the bottom border width only.
    pub fn set_border_bottom_width(&mut self, width: u16) {
        self.border.bottom = width;
    }

    /// Set the left border width only.
    pub fn set_border_left_width(&mut self, width: u16) {
        self.border.left = width;
    }

    /// Set the border color.
    pub fn set_border_colour(&mut self, colour: impl Into<Color>) {
        self.border_colour = colour.into();
    }

    /// Usable width for content: total width minus horizontal padding and
    /// borders. Margin does not participate. Clamps at 0.
    #[must_use]
    pub const fn content_width(&self) -> u16 {
        self.width
            .saturating_sub(self.padding.saturating_mul(2))
            .saturating_sub(self.border.horizontal_sum())
    }

    /// Trailing spaces needed to fill a line of `content_length` columns
    /// out to the right edge of the padding gutter.
    ///
    /// The fill shrinks one-for-one as content grows and reaches 0 exactly
    /// when the content covers the content box plus the right padding;
    /// longer content clamps to 0.
    #[must_use]
    pub const fn right_hand_padding(&self, content_length: u16) -> u16 {
        self.content_width()
            .saturating_add(self.padding)
            .saturating_sub(content_length)
    }

    fn recompute_auto_margin(&mut self, terminal: &dyn TerminalProbe) {
        let terminal_width = terminal.width();
        self.margin = terminal_width.saturating_sub(self.width) / 2;
        tracing::debug!(
            terminal_width,
            width = self.width,
            margin = self.margin,
            "auto margin recomputed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menukit_core::FixedTerminal;

    fn term() -> FixedTerminal {
        FixedTerminal::xterm(500)
    }

    // --- Shorthand expansion: typed shapes ---

    #[test]
    fn shorthand_single_width_covers_all_sides() {
        let mut model = BoxModel::default();
        model.set_border(3);
        assert_eq!(model.border_widths(), Sides::all(3));
        assert_eq!(model.border_colour(), Color::Named(NamedColor::White));
    }

    #[test]
    fn shorthand_two_widths_are_vertical_horizontal() {
        let mut model = BoxModel::default();
        model.set_border((3, 4));
        assert_eq!(model.border_widths(), Sides::new(3, 4, 3, 4));
        assert_eq!(model.border_colour(), Color::Named(NamedColor::White));
    }

    #[test]
    fn shorthand_three_widths_are_top_horizontal_bottom() {
        let mut model = BoxModel::default();
        model.set_border((3, 4, 5));
        assert_eq!(model.border_widths(), Sides::new(3, 4, 5, 4));
        assert_eq!(model.border_colour(), Color::Named(NamedColor::White));
    }

    #[test]
    fn shorthand_four_widths_are_clockwise_from_top() {
        let mut model = BoxModel::default();
        model.set_border((3, 4, 5, 6));
        assert_eq!(model.border_widths(), Sides::new(3, 4, 5, 6));
        assert_eq!(model.border_colour(), Color::Named(NamedColor::White));
    }

    #[test]
    fn shorthand_trailing_colour_applies_to_border() {
        let mut model = BoxModel::default();
        model.set_border((3, NamedColor::Red));
        assert_eq!(model.border_widths(), Sides::all(3));
        assert_eq!(model.border_colour(), Color::Named(NamedColor::Red));

        let mut model = BoxModel::default();
        model.set_border((3, 4, NamedColor::Red));
        assert_eq!(model.border_widths(), Sides::new(3, 4, 3, 4));
        assert_eq!(model.border_colour(), Color::Named(NamedColor::Red));

        let mut model = BoxModel::default();
        model.set_border((3, 4, 5, NamedColor::Red));
        assert_eq!(model.border_widths(), Sides::new(3, 4, 5, 4));
        assert_eq!(model.border_colour(), Color::Named(NamedColor::Red));

        let mut model = BoxModel::default();
        model.set_border((3, 4, 5, 6, NamedColor::Red));
        assert_eq!(model.border_widths(), Sides::new(3, 4, 5, 6));
        assert_eq!(model.border_colour(), Color::Named(NamedColor::Red));
    }

    #[test]
    fn shorthand_without_colour_preserves_existing_colour() {
        let mut model = BoxModel::default();
        model.set_border((1, NamedColor::Green));
        model.set_border((2, 3));
        assert_eq!(model.border_widths(), Sides::new(2, 3, 2, 3));
        assert_eq!(model.border_colour(), Color::Named(NamedColor::Green));
    }

    #[test]
    fn reapplying_shorthand_is_idempotent() {
        let mut model = BoxModel::default();
        model.set_border((3, 4, 5, NamedColor::Red));
        let first = model;
        model.set_border((3, 4, 5, NamedColor::Red));
        assert_eq!(model, first);
    }

    // --- Shorthand expansion: argument sequences ---

    #[test]
    fn args_expand_like_typed_shapes() {
        use BorderArg::{Colour, Width};

        let parsed = BorderShorthand::from_args(&[Width(3)]);
        assert_eq!(parsed, BorderShorthand::from(3));

        let parsed = BorderShorthand::from_args(&[Width(3), Width(4)]);
        assert_eq!(parsed, BorderShorthand::from((3, 4)));

        let parsed = BorderShorthand::from_args(&[Width(3), Width(4), Width(5)]);
        assert_eq!(parsed, BorderShorthand::from((3, 4, 5)));

        let parsed = BorderShorthand::from_args(&[Width(3), Width(4), Width(5), Width(6)]);
        assert_eq!(parsed, BorderShorthand::from((3, 4, 5, 6)));

        let parsed = BorderShorthand::from_args(&[Width(3), Colour(NamedColor::Red)]);
        assert_eq!(parsed, BorderShorthand::from((3, NamedColor::Red)));

        let parsed = BorderShorthand::from_args(&[
            Width(3),
            Width(4),
            Width(5),
            Width(6),
            Colour(NamedColor::Red),
        ]);
        assert_eq!(parsed, BorderShorthand::from((3, 4, 5, 6, NamedColor::Red)));
    }

    #[test]
    fn args_trailing_colour_is_popped_before_counting_widths() {
        use BorderArg::{Colour, Width};
        let parsed = BorderShorthand::from_args(&[Width(3), Width(4), Colour(NamedColor::Red)]);
        assert_eq!(parsed.widths, Sides::new(3, 4, 3, 4));
        assert_eq!(parsed.colour, Some(NamedColor::Red));
    }

    #[test]
    fn args_empty_sequence_zeroes_widths() {
        let parsed = BorderShorthand::from_args(&[]);
        assert_eq!(parsed.widths, Sides::all(0));
        assert_eq!(parsed.colour, None);

        let parsed = BorderShorthand::from_args(&[BorderArg::Colour(NamedColor::Blue)]);
        assert_eq!(parsed.widths, Sides::all(0));
        assert_eq!(parsed.colour, Some(NamedColor::Blue));
    }

    #[test]
    fn args_surplus_widths_are_ignored() {
        use BorderArg::Width;
        let parsed =
            BorderShorthand::from_args(&[Width(1), Width(2), Width(3), Width(4), Width(9)]);
        assert_eq!(parsed.widths, Sides::new(1, 2, 3, 4));
    }

    // --- Content width ---

    #[test]
    fn content_width_subtracts_padding_and_borders_only() {
        let mut model = BoxModel::default();
        model.set_padding(0);
        model.set_margin(0);
        model.set_border(0);

        model.set_width(300, &term());
        assert_eq!(model.content_width(), 300);

        model.set_padding(5);
        assert_eq!(model.content_width(), 290);

        model.set_margin(5);
        assert_eq!(model.content_width(), 290);

        model.set_border(2);
        assert_eq!(model.content_width(), 286);
    }

    #[test]
    fn content_width_clamps_at_zero() {
        let mut model = BoxModel::default();
        model.set_width(10, &term());
        model.set_padding(20);
        assert_eq!(model.content_width(), 0);
    }

    // --- Right-hand padding ---

    #[test]
    fn right_hand_padding_fills_to_line_end() {
        let mut model = BoxModel::default();
        model.set_padding(0);
        model.set_margin(0);
        model.set_border(0);

        model.set_width(300, &term());
        assert_eq!(model.right_hand_padding(50), 250);

        model.set_padding(5);
        assert_eq!(model.right_hand_padding(50), 245);

        model.set_margin(5);
        assert_eq!(model.right_hand_padding(50), 245);

        model.set_border(2);
        assert_eq!(model.right_hand_padding(50), 241);
    }

    #[test]
    fn right_hand_padding_zero_when_content_fills_line() {
        let mut model = BoxModel::default();
        model.set_padding(0);
        model.set_margin(0);
        model.set_border(0);
        model.set_width(100, &term());

        assert_eq!(model.right_hand_padding(100), 0);
        assert_eq!(model.right_hand_padding(150), 0);
    }

    #[test]
    fn right_hand_padding_boundary_with_borders() {
        let mut model = BoxModel::default();
        model.set_padding(10);
        model.set_margin(0);
        model.set_border(10);
        model.set_width(100, &term());

        assert_eq!(model.content_width(), 60);
        assert_eq!(model.right_hand_padding(59), 11);
        assert_eq!(model.right_hand_padding(60), 10);
        assert_eq!(model.right_hand_padding(70), 0);
        assert_eq!(model.right_hand_padding(71), 0);
        assert_eq!(model.right_hand_padding(100), 0);
    }

    // --- Margin and auto margin ---

    #[test]
    fn explicit_margin_is_kept() {
        let mut model = BoxModel::default();
        model.set_width(300, &term());
        model.set_padding(5);
        model.set_margin(5);
        assert_eq!(model.margin(), 5);
        assert!(!model.is_margin_auto());
    }

    #[test]
    fn margin_auto_centers_within_terminal() {
        let mut model = BoxModel::default();
        model.set_width(300, &term());
        model.set_padding(5);
        model.set_margin_auto(&term());

        assert_eq!(model.margin(), 100);
        assert_eq!(model.content_width(), 290);
    }

    #[test]
    fn width_change_recomputes_auto_margin() {
        let mut model = BoxModel::default();
        model.set_width(300, &term());
        model.set_padding(5);
        model.set_margin_auto(&term());
        assert_eq!(model.margin(), 100);

        model.set_width(400, &term());
        assert_eq!(model.margin(), 50);
        assert_eq!(model.content_width(), 390);
    }

    #[test]
    fn auto_margin_reads_probe_fresh_on_each_recompute() {
        let mut model = BoxModel::default();
        model.set_width(300, &term());
        model.set_margin_auto(&term());
        assert_eq!(model.margin(), 100);

        // A narrower terminal at the next width change wins.
        model.set_width(300, &FixedTerminal::xterm(400));
        assert_eq!(model.margin(), 50);
    }

    #[test]
    fn auto_margin_clamps_when_box_exceeds_terminal() {
        let mut model = BoxModel::default();
        model.set_width(600, &term());
        model.set_margin_auto(&term());
        assert_eq!(model.margin(), 0);
    }

    #[test]
    fn explicit_margin_disables_auto() {
        let mut model = BoxModel::default();
        model.set_width(300, &term());
        model.set_margin_auto(&term());
        assert!(model.is_margin_auto());

        model.set_margin(7);
        assert!(!model.is_margin_auto());
        assert_eq!(model.margin(), 7);

        // Width changes no longer touch the margin.
        model.set_width(400, &term());
        assert_eq!(model.margin(), 7);
    }

    // --- Individual border setters ---

    #[test]
    fn individual_border_widths_are_independent() {
        let mut model = BoxModel::default();
        model.set_border_top_width(1);
        model.set_border_right_width(2);
        model.set_border_bottom_width(3);
        model.set_border_left_width(4);
        assert_eq!(model.border_widths(), Sides::new(1, 2, 3, 4));
    }

    #[test]
    fn defaults_match_documented_configuration() {
        let model = BoxModel::default();
        assert_eq!(model.width(), 100);
        assert_eq!(model.margin(), 2);
        assert_eq!(model.padding(), 2);
        assert_eq!(model.border_widths(), Sides::all(0));
        assert_eq!(model.border_colour(), Color::Named(NamedColor::White));
        assert!(!model.is_margin_auto());
    }
}
