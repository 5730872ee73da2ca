use crate::canvas::{Canvas, FontState};
use crate::units::Pt;

/// Writes blocks of wrapped, horizontally centred text.
///
/// The writer only knows the width it wraps at; the font is passed in on every call.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineWriter {
    max_width: Pt,
}

impl LineWriter {
    pub fn new(max_width: Pt) -> LineWriter {
        LineWriter { max_width }
    }

    /// How many lines `text` takes up when set in `font`
    pub fn num_lines<C: Canvas + ?Sized>(
        &self,
        canvas: &C,
        font: &FontState<C::Face>,
        text: &str,
    ) -> usize {
        canvas.wrap(text, font, self.max_width).len()
    }

    /// The vertical space `text` takes up when set in `font`
    pub fn height<C: Canvas + ?Sized>(&self, canvas: &C, font: &FontState<C::Face>, text: &str) -> Pt {
        canvas.line_advance(font) * self.num_lines(canvas, font, text) as f32
    }

    /// Write `text` centred on `x`, with the baseline of the first line at `y` and every
    /// following line one line advance lower.
    ///
    /// Returns the number of lines written.
    pub fn write<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        font: &FontState<C::Face>,
        x: Pt,
        mut y: Pt,
        text: &str,
    ) -> usize {
        let lines = canvas.wrap(text, font, self.max_width);
        let advance = canvas.line_advance(font);
        for line in lines.iter() {
            canvas.draw_centred_text(x, y, line, font);
            y -= advance;
        }
        lines.len()
    }
}
