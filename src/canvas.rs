//! The drawing surface the label layout engine renders onto.
//!
//! The layout code never holds on to a "current font": every call that measures or
//! draws text is handed the [FontState] it should use. This makes it impossible to
//! measure a block in one font and then draw it in another.

use crate::layout::wrap_text;
use crate::rect::Rect;
use crate::units::Pt;
use std::fmt::Debug;

/// A font face at a particular size
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FontState<F> {
    pub face: F,
    pub size: Pt,
}

impl<F> FontState<F> {
    pub fn new(face: F, size: Pt) -> FontState<F> {
        FontState { face, size }
    }
}

/// The capabilities the layout engine needs from a paginated drawing surface.
///
/// Coordinates follow PDF conventions: the origin is the lower-left corner of the page
/// and text is positioned by its baseline.
pub trait Canvas {
    /// Whatever the surface uses to identify a loaded font face
    type Face: Copy + Debug + PartialEq;

    /// The width of `text` when set in `font`
    fn text_width(&self, text: &str, font: &FontState<Self::Face>) -> Pt;

    /// The distance between two consecutive baselines of `font`
    fn line_advance(&self, font: &FontState<Self::Face>) -> Pt;

    /// Break `text` into lines no wider than `max_width` when set in `font`
    fn wrap(&self, text: &str, font: &FontState<Self::Face>, max_width: Pt) -> Vec<String> {
        wrap_text(text, max_width, |s| self.text_width(s, font))
    }

    /// Draw a single line of text horizontally centred on `x`, with its baseline at `y`
    fn draw_centred_text(&mut self, x: Pt, y: Pt, text: &str, font: &FontState<Self::Face>);

    /// Stroke the outline of a rectangle
    fn draw_rect(&mut self, rect: Rect);

    /// Finish the current page; anything drawn afterwards lands on a new page
    fn show_page(&mut self);
}
