use crate::content::render_contents;
use crate::font::Font;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::*;
use crate::LabelError;
use id_arena::{Arena, Id};
use pdf_writer::{Content, Finish, Name, Pdf};

/// A font at a particular size, as used by a run of text on a page
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub id: Id<Font>,
    pub size: Pt,
}

/// A single run of text, drawn with its baseline starting at `coords`
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub coords: (Pt, Pt),
}

#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    Text(Vec<SpanLayout>),
    /// Raw content stream operators, e.g. the outline of a label
    RawContent(Vec<u8>),
}

#[derive(Debug)]
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// The laid out contents, in drawing order
    pub contents: Vec<PageContents>,
}

impl Page {
    /// Create a new, empty page of the given size
    pub fn new(size: PageSize) -> Page {
        Page {
            media_box: Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: size.0,
                y2: size.1,
            },
            contents: Vec::default(),
        }
    }

    /// Add a run of text to the page
    pub fn add_span(&mut self, span: SpanLayout) {
        // consecutive spans share one text object
        if let Some(PageContents::Text(spans)) = self.contents.last_mut() {
            spans.push(span);
        } else {
            self.contents.push(PageContents::Text(vec![span]));
        }
    }

    /// Add arbitrary drawing operators to the page
    pub fn add_content(&mut self, content: Content) {
        self.contents.push(PageContents::RawContent(content.finish()));
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        fonts: &Arena<Font>,
        writer: &mut Pdf,
    ) -> Result<(), LabelError> {
        let id = match refs.get(RefType::Page(page_index)) {
            Some(id) => id,
            None => refs.gen(RefType::Page(page_index)),
        };
        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        if let Some(tree) = refs.get(RefType::PageTree) {
            page.parent(tree);
        }

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for (font_id, _) in fonts.iter() {
            if let Some(font_ref) = refs.get(RefType::Font(font_id.index())) {
                resource_fonts.pair(Name(format!("F{}", font_id.index()).as_bytes()), font_ref);
            }
        }
        resource_fonts.finish();
        resources.finish();

        page.contents(content_id);
        page.finish();

        let rendered = render_contents(&self.contents, fonts)?;
        writer.stream(content_id, rendered.as_slice());
        Ok(())
    }
}
