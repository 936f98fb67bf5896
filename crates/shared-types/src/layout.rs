//! Geometry shared by the movie card and its loading skeleton.
//!
//! The skeleton reserves exactly the footprint of a rendered card, so both
//! read their size from here rather than from separate stylesheets.

/// Fixed layout of a movie preview card, in CSS pixels unless noted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardLayout {
    pub width_px: u32,
    pub height_px: u32,
    /// Width of the single-line title box; longer titles are ellipsized.
    pub title_width_px: u32,
    /// Intrinsic poster size passed to the image element for layout
    /// reservation, independent of the decoded image.
    pub poster_width: u32,
    pub poster_height: u32,
    /// Uniform scale applied on hover.
    pub hover_scale: f32,
    pub hover_transition_ms: u32,
}

pub const MOVIE_CARD: CardLayout = CardLayout {
    width_px: 128,
    height_px: 256,
    title_width_px: 112,
    poster_width: 320,
    poster_height: 640,
    hover_scale: 1.05,
    hover_transition_ms: 300,
};

impl CardLayout {
    /// Inline `style` fixing the outer box of a card or skeleton.
    ///
    /// Border-box sizing keeps padding and borders inside the footprint, so
    /// the two boxes occupy the same space whatever their stylesheets add.
    pub fn footprint_style(&self) -> String {
        format!(
            "box-sizing: border-box; width: {}px; height: {}px;",
            self.width_px, self.height_px
        )
    }

    /// Inline `style` for a rendered card: the footprint plus the custom
    /// properties read by the card stylesheet's hover and title rules.
    pub fn card_style(&self) -> String {
        format!(
            "{} --card-title-width: {}px; --card-hover-scale: {}; --card-hover-duration: {}ms;",
            self.footprint_style(),
            self.title_width_px,
            self.hover_scale,
            self.hover_transition_ms
        )
    }
}
