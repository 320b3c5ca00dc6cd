#![forbid(unsafe_code)]

//! The aggregated style state for one menu.
//!
//! [`MenuStyle`] owns the box model, the foreground/background color pair,
//! and the cosmetic fields (markers, item extra, title separator), plus the
//! terminal probe everything is resolved against. Geometry questions go to
//! the box model, color questions to the [`color`](crate::color) module with
//! a freshly probed tier — the probe is consulted on every escape-code
//! request and on every width change while auto margin is active, never
//! cached across calls.
//!
//! # Example
//! ```
//! use menukit_core::FixedTerminal;
//! use menukit_style::MenuStyle;
//!
//! let mut style = MenuStyle::new(Box::new(FixedTerminal::xterm_256color(120)));
//! style.set_border((1, 2));
//! style.set_margin_auto();
//!
//! // Default width is 100, so the box centers with 10 columns either side.
//! assert_eq!(style.margin(), 10);
//! assert_eq!(style.content_width(), 100 - 2 * 2 - 2 * 2);
//! ```

use menukit_core::{Sides, TerminalProbe};

use crate::box_model::{BorderShorthand, BoxModel};
use crate::color::{self, Color, NamedColor, OutOfRangeColor};

/// Style state owned by a single menu.
///
/// Constructed with the documented defaults (blue background, white
/// foreground, `○`/`●` markers, `✔` item extra, `=` title separator,
/// width 100, padding 2, margin 2, no borders) and mutated only through its
/// setters. Not designed for concurrent mutation; a menu owns exactly one.
#[derive(Debug)]
pub struct MenuStyle {
    terminal: Box<dyn TerminalProbe>,
    box_model: BoxModel,
    fg: Color,
    bg: Color,
    selected_marker: String,
    unselected_marker: String,
    item_extra: String,
    displays_extra: bool,
    title_separator: String,
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for MenuStyle {
    fn default() -> Self {
        Self::new(Box::new(menukit_core::NativeTerminal::new()))
    }
}

impl MenuStyle {
    /// Create a style with the documented defaults, resolved against the
    /// given probe.
    #[must_use]
    pub fn new(terminal: Box<dyn TerminalProbe>) -> Self {
        Self {
            terminal,
            box_model: BoxModel::default(),
            fg: Color::Named(NamedColor::White),
            bg: Color::Named(NamedColor::Blue),
            selected_marker: "●".to_string(),
            unselected_marker: "○".to_string(),
            item_extra: "✔".to_string(),
            displays_extra: false,
            title_separator: "=".to_string(),
        }
    }

    // ── Colors ─────────────────────────────────────────────────────────

    /// Foreground selection, resolved against the current tier: on a
    /// 16-color terminal an indexed selection reports its fallback name.
    #[must_use]
    pub fn fg(&self) -> Color {
        self.fg.resolve(self.terminal.color_support())
    }

    /// Background selection, resolved like [`fg`](Self::fg).
    #[must_use]
    pub fn bg(&self) -> Color {
        self.bg.resolve(self.terminal.color_support())
    }

    /// Set the foreground from a name or an already validated selection.
    pub fn set_fg(&mut self, colour: impl Into<Color>) {
        self.fg = colour.into();
    }

    /// Set the background from a name or an already validated selection.
    pub fn set_bg(&mut self, colour: impl Into<Color>) {
        self.bg = colour.into();
    }

    /// Set the foreground to a 256-color index with a named fallback.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeColor`] for an index outside [0, 255]; nothing
    /// is stored and the check fires on any tier.
    pub fn set_fg_index(&mut self, index: u16, fallback: NamedColor) -> Result<(), OutOfRangeColor> {
        self.fg = Color::indexed(index, fallback)?;
        Ok(())
    }

    /// Set the background to a 256-color index with a named fallback.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeColor`] for an index outside [0, 255]; nothing
    /// is stored and the check fires on any tier.
    pub fn set_bg_index(&mut self, index: u16, fallback: NamedColor) -> Result<(), OutOfRangeColor> {
        self.bg = Color::indexed(index, fallback)?;
        Ok(())
    }

    /// SGR sequence that applies the configured pair on the tier probed
    /// right now.
    #[must_use]
    pub fn colours_set_code(&self) -> String {
        color::set_code(self.fg, self.bg, self.terminal.color_support())
    }

    /// SGR reset sequence. Capability-independent.
    #[must_use]
    pub fn colours_reset_code(&self) -> &'static str {
        color::RESET
    }

    /// Reverse-video on sequence for the selected row. Capability-independent.
    #[must_use]
    pub fn inverted_colours_set_code(&self) -> &'static str {
        color::INVERT_ON
    }

    /// Reverse-video off sequence. Capability-independent.
    #[must_use]
    pub fn inverted_colours_unset_code(&self) -> &'static str {
        color::INVERT_OFF
    }

    // ── Geometry ───────────────────────────────────────────────────────

    /// Total box width.
    #[must_use]
    pub fn width(&self) -> u16 {
        self.box_model.width()
    }

    /// Set the total box width, re-centering if auto margin is active.
    pub fn set_width(&mut self, width: u16) {
        self.box_model.set_width(width, self.terminal.as_ref());
    }

    /// Current margin.
    #[must_use]
    pub fn margin(&self) -> u16 {
        self.box_model.margin()
    }

    /// Set an explicit margin, disabling auto margin.
    pub fn set_margin(&mut self, margin: u16) {
        self.box_model.set_margin(margin);
    }

    /// Center the box within the terminal, and keep it centered across
    /// width changes.
    pub fn set_margin_auto(&mut self) {
        self.box_model.set_margin_auto(self.terminal.as_ref());
    }

    /// Whether margin is currently derived from the terminal width.
    #[must_use]
    pub fn is_margin_auto(&self) -> bool {
        self.box_model.is_margin_auto()
    }

    /// Horizontal padding.
    #[must_use]
    pub fn padding(&self) -> u16 {
        self.box_model.padding()
    }

    /// Set the horizontal padding.
    pub fn set_padding(&mut self, padding: u16) {
        self.box_model.set_padding(padding);
    }

    /// Apply a border shorthand (widths, optionally a trailing color).
    pub fn set_border(&mut self, shorthand: impl Into<BorderShorthand>) {
        self.box_model.set_border(shorthand);
    }

    /// Per-side border widths.
    #[must_use]
    pub fn border_widths(&self) -> Sides {
        self.box_model.border_widths()
    }

    /// Top border width.
    #[must_use]
    pub fn border_top_width(&self) -> u16 {
        self.box_model.border_widths().top
    }

    /// Right border width.
    #[must_use]
    pub fn border_right_width(&self) -> u16 {
        self.box_model.border_widths().right
    }

    /// Bottom border width.
    #[must_use]
    pub fn border_bottom_width(&self) -> u16 {
        self.box_model.border_widths().bottom
    }

    /// Left border width.
    #[must_use]
    pub fn border_left_width(&self) -> u16 {
        self.box_model.border_widths().left
    }

    /// Set the top border width.
    pub fn set_border_top_width(&mut self, width: u16) {
        self.box_model.set_border_top_width(width);
    }

    /// Set the right border width.
    pub fn set_border_right_width(&mut self, width: u16) {
        self.box_model.set_border_right_width(width);
    }

    /// Set the bottom border width.
    pub fn set_border_bottom_width(&mut self, width: u16) {
        self.box_model.set_border_bottom_width(width);
    }

    /// Set the left border width.
    pub fn set_border_left_width(&mut self, width: u16) {
        self.box_model.set_border_left_width(width);
    }

    /// Border color, resolved against the current tier.
    #[must_use]
    pub fn border_colour(&self) -> Color {
        self.box_model
            .border_colour()
            .resolve(self.terminal.color_support())
    }

    /// Set the border color.
    pub fn set_border_colour(&mut self, colour: impl Into<Color>) {
        self.box_model.set_border_colour(colour);
    }

    /// Usable width for content after padding and borders.
    #[must_use]
    pub fn content_width(&self) -> u16 {
        self.box_model.content_width()
    }

    /// Trailing spaces needed to fill a content line to the right edge.
    #[must_use]
    pub fn right_hand_padding(&self, content_length: u16) -> u16 {
        self.box_model.right_hand_padding(content_length)
    }

    // ── Markers and cosmetics ──────────────────────────────────────────

    /// The marker for a row in the given selection state.
    #[must_use]
    pub fn marker(&self, selected: bool) -> &str {
        if selected {
            &self.selected_marker
        } else {
            &self.unselected_marker
        }
    }

    /// Marker shown in front of the selected row.
    #[must_use]
    pub fn selected_marker(&self) -> &str {
        &self.selected_marker
    }

    /// Set the selected-row marker.
    pub fn set_selected_marker(&mut self, marker: impl Into<String>) {
        self.selected_marker = marker.into();
    }

    /// Marker shown in front of unselected rows.
    #[must_use]
    pub fn unselected_marker(&self) -> &str {
        &self.unselected_marker
    }

    /// Set the unselected-row marker.
    pub fn set_unselected_marker(&mut self, marker: impl Into<String>) {
        self.unselected_marker = marker.into();
    }

    /// Text appended to rows flagged as having an extra.
    #[must_use]
    pub fn item_extra(&self) -> &str {
        &self.item_extra
    }

    /// Set the item-extra text.
    pub fn set_item_extra(&mut self, extra: impl Into<String>) {
        self.item_extra = extra.into();
    }

    /// Whether item extras are rendered at all.
    #[must_use]
    pub fn displays_extra(&self) -> bool {
        self.displays_extra
    }

    /// Toggle rendering of item extras.
    pub fn set_displays_extra(&mut self, displays_extra: bool) {
        self.displays_extra = displays_extra;
    }

    /// Character repeated under the menu title.
    #[must_use]
    pub fn title_separator(&self) -> &str {
        &self.title_separator
    }

    /// Set the title separator.
    pub fn set_title_separator(&mut self, separator: impl Into<String>) {
        self.title_separator = separator.into();
    }
}
