//! A canvas that records what is drawn on it, with simple made-up font metrics:
//! every character is half the font size wide and lines advance by the font size
//! plus two points.

use crate::canvas::{Canvas, FontState};
use crate::rect::Rect;
use crate::units::Pt;

pub const FACE_REGULAR: &str = "Regular";
pub const FACE_BOLD: &str = "Bold";

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Text {
        x: Pt,
        y: Pt,
        text: String,
        font: FontState<&'static str>,
    },
    Rect(Rect),
    ShowPage,
}

#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    /// Draw calls split up per page. Nothing drawn at all means no pages
    pub fn pages(&self) -> Vec<Vec<DrawCall>> {
        if self.calls.is_empty() {
            return Vec::new();
        }
        let mut pages: Vec<Vec<DrawCall>> = vec![Vec::new()];
        for call in self.calls.iter() {
            match call {
                DrawCall::ShowPage => pages.push(Vec::new()),
                other => pages.last_mut().expect("always one page").push(other.clone()),
            }
        }
        pages
    }

    pub fn texts(&self) -> Vec<(Pt, Pt, String)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { x, y, text, .. } => Some((*x, *y, text.clone())),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    type Face = &'static str;

    fn text_width(&self, text: &str, font: &FontState<Self::Face>) -> Pt {
        font.size / 2.0 * text.chars().count() as f32
    }

    fn line_advance(&self, font: &FontState<Self::Face>) -> Pt {
        font.size + Pt(2.0)
    }

    fn draw_centred_text(&mut self, x: Pt, y: Pt, text: &str, font: &FontState<Self::Face>) {
        self.calls.push(DrawCall::Text {
            x,
            y,
            text: text.to_string(),
            font: *font,
        });
    }

    fn draw_rect(&mut self, rect: Rect) {
        self.calls.push(DrawCall::Rect(rect));
    }

    fn show_page(&mut self) {
        self.calls.push(DrawCall::ShowPage);
    }
}
