use crate::canvas::{Canvas, FontState};
use crate::document::Document;
use crate::font::Font;
use crate::info::Info;
use crate::page::{Page, SpanFont, SpanLayout};
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::units::Pt;
use crate::LabelError;
use id_arena::Id;
use log::debug;
use pdf_writer::Content;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// File extensions tried, in order, when installing a font face from a directory
const FONT_EXTENSIONS: [&str; 2] = ["ttf", "otf"];

/// A [Canvas] that draws into a [Document].
///
/// Pages are opened lazily: a page only comes into existence once something is drawn
/// on it or [Canvas::show_page] is called, so a canvas nothing was drawn on finishes
/// into a document without pages.
pub struct PdfCanvas {
    document: Document,
    page_size: PageSize,
    current: Option<Page>,
    installed: HashMap<String, Id<Font>>,
}

impl PdfCanvas {
    /// A canvas whose pages are all `page_size`
    pub fn new(page_size: PageSize) -> PdfCanvas {
        PdfCanvas {
            document: Document::default(),
            page_size,
            current: None,
            installed: HashMap::new(),
        }
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn set_info(&mut self, info: Info) {
        self.document.set_info(info);
    }

    /// Embed an already loaded font in the document
    pub fn add_font(&mut self, font: Font) -> Id<Font> {
        self.document.add_font(font)
    }

    /// Load the font face named `face` from `directory`, trying `<face>.ttf` and then
    /// `<face>.otf`. Installing the same face twice returns the same font.
    pub fn install_font<P: AsRef<Path>>(
        &mut self,
        face: &str,
        directory: P,
    ) -> Result<Id<Font>, LabelError> {
        if let Some(id) = self.installed.get(face) {
            return Ok(*id);
        }

        let candidates: Vec<PathBuf> = FONT_EXTENSIONS
            .iter()
            .map(|ext| directory.as_ref().join(format!("{face}.{ext}")))
            .collect();
        let path = candidates
            .iter()
            .find(|path| path.is_file())
            .ok_or_else(|| LabelError::FontInstall {
                face: face.to_string(),
                paths: candidates.clone(),
            })?;

        let font = Font::load_file(path)?;
        debug!("installed font {} from {}", font.name(), path.display());
        let id = self.document.add_font(font);
        self.installed.insert(face.to_string(), id);
        Ok(id)
    }

    pub fn font(&self, id: Id<Font>) -> &Font {
        &self.document.fonts[id]
    }

    /// The number of pages drawn so far, counting the open one
    pub fn page_count(&self) -> usize {
        self.document.pages.len() + usize::from(self.current.is_some())
    }

    fn page(&mut self) -> &mut Page {
        let page_size = self.page_size;
        self.current.get_or_insert_with(|| Page::new(page_size))
    }

    /// Close the open page, if any, and hand back the finished document
    pub fn finish(mut self) -> Document {
        if let Some(page) = self.current.take() {
            self.document.add_page(page);
        }
        self.document
    }
}

impl Canvas for PdfCanvas {
    type Face = Id<Font>;

    fn text_width(&self, text: &str, font: &FontState<Self::Face>) -> Pt {
        self.font(font.face).text_width(text, font.size)
    }

    fn line_advance(&self, font: &FontState<Self::Face>) -> Pt {
        self.font(font.face).line_height(font.size)
    }

    fn draw_centred_text(&mut self, x: Pt, y: Pt, text: &str, font: &FontState<Self::Face>) {
        if text.is_empty() {
            return;
        }
        let width = self.text_width(text, font);
        self.page().add_span(SpanLayout {
            text: text.to_string(),
            font: SpanFont {
                id: font.face,
                size: font.size,
            },
            coords: (x - width / 2.0, y),
        });
    }

    fn draw_rect(&mut self, rect: Rect) {
        let mut content = Content::new();
        content.rect(*rect.x1, *rect.y1, *rect.width(), *rect.height());
        content.stroke();
        self.page().add_content(content);
    }

    fn show_page(&mut self) {
        let page = self
            .current
            .take()
            .unwrap_or_else(|| Page::new(self.page_size));
        self.document.add_page(page);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::page::PageContents;
    use crate::pagesize;

    #[test]
    fn untouched_canvas_has_no_pages() {
        let canvas = PdfCanvas::new(pagesize::A4);
        assert_eq!(canvas.page_count(), 0);
        assert!(canvas.finish().pages.is_empty());
    }

    #[test]
    fn drawing_opens_a_page() {
        let mut canvas = PdfCanvas::new(pagesize::A4);
        canvas.draw_rect(Rect::from_corner(Pt(10.0), Pt(10.0), Pt(100.0), Pt(50.0)));
        canvas.draw_rect(Rect::from_corner(Pt(110.0), Pt(10.0), Pt(100.0), Pt(50.0)));
        assert_eq!(canvas.page_count(), 1);

        let document = canvas.finish();
        assert_eq!(document.pages.len(), 1);
        assert_eq!(document.pages[0].contents.len(), 2);
        assert!(matches!(
            document.pages[0].contents[0],
            PageContents::RawContent(_)
        ));
    }

    #[test]
    fn show_page_starts_a_new_page() {
        let mut canvas = PdfCanvas::new(pagesize::LETTER);
        canvas.draw_rect(Rect::from_corner(Pt(0.0), Pt(0.0), Pt(10.0), Pt(10.0)));
        canvas.show_page();
        assert_eq!(canvas.page_count(), 1);
        canvas.draw_rect(Rect::from_corner(Pt(0.0), Pt(0.0), Pt(10.0), Pt(10.0)));
        assert_eq!(canvas.page_count(), 2);

        let document = canvas.finish();
        assert_eq!(document.pages.len(), 2);
        assert_eq!(document.pages[1].media_box.x2, pagesize::LETTER.0);
    }

    #[test]
    fn show_page_on_a_blank_canvas_emits_a_blank_page() {
        let mut canvas = PdfCanvas::new(pagesize::A4);
        canvas.show_page();
        let document = canvas.finish();
        assert_eq!(document.pages.len(), 1);
        assert!(document.pages[0].is_empty());
    }

    #[test]
    fn missing_font_lists_every_path_tried() {
        let dir = tempfile::tempdir().unwrap();
        let mut canvas = PdfCanvas::new(pagesize::A4);
        match canvas.install_font("NoSuchFace", dir.path()) {
            Err(LabelError::FontInstall { face, paths }) => {
                assert_eq!(face, "NoSuchFace");
                assert_eq!(
                    paths,
                    vec![
                        dir.path().join("NoSuchFace.ttf"),
                        dir.path().join("NoSuchFace.otf"),
                    ]
                );
            }
            other => panic!("expected a font install error, got {other:?}"),
        }
    }

    #[test]
    fn unparseable_font_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Broken.otf"), b"not a font").unwrap();
        let mut canvas = PdfCanvas::new(pagesize::A4);
        assert!(matches!(
            canvas.install_font("Broken", dir.path()),
            Err(LabelError::FaceParsing(_))
        ));
    }
}
