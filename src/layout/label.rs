use crate::canvas::{Canvas, FontState};
use crate::layout::grid::GridGeometry;
use crate::layout::writer::LineWriter;
use crate::rect::Rect;
use crate::record::Record;
use crate::units::Pt;
use std::fmt::Debug;

/// The two font styles a label is set in
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FontStyles<F> {
    /// Used for the addressee's name
    pub name: FontState<F>,
    /// Used for everything below the name
    pub address: FontState<F>,
}

/// What ended up on a label after it was rendered
#[derive(Debug, Clone, PartialEq)]
pub struct LabelLayout {
    /// Height of all text blocks plus the gaps between them
    pub content_height: Pt,
    /// Number of lines written for each block, top to bottom
    pub block_lines: Vec<usize>,
    /// Whether the text is taller than the label. Nothing is clipped
    pub overflows: bool,
}

/// Renders a single [Record] into a single cell of the grid.
///
/// A label is made of up to four blocks of text stacked from top to bottom: the
/// name, the street address, the postal code and city, and the country when there is
/// one. The stack is centred vertically within the cell and every line is centred
/// horizontally. Blocks are separated by a gap of `extra_line_spacing` times the line
/// advance of the font the block above is set in.
#[derive(Debug, Clone)]
pub struct LabelRenderer<F> {
    geometry: GridGeometry,
    styles: FontStyles<F>,
    line_writer: LineWriter,
    extra_line_spacing: f32,
    draw_borders: bool,
}

impl<F: Copy + Debug + PartialEq> LabelRenderer<F> {
    pub fn new(
        geometry: GridGeometry,
        styles: FontStyles<F>,
        extra_line_spacing: f32,
        draw_borders: bool,
    ) -> LabelRenderer<F> {
        LabelRenderer {
            geometry,
            styles,
            line_writer: LineWriter::new(geometry.text_width()),
            extra_line_spacing,
            draw_borders,
        }
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    /// The blank space left below a block set in `font`
    pub fn gap<C: Canvas<Face = F> + ?Sized>(&self, canvas: &C, font: &FontState<F>) -> Pt {
        canvas.line_advance(font) * self.extra_line_spacing
    }

    /// The text blocks of a record, top to bottom, with the font each is set in.
    /// A record without a country has no country block at all.
    fn blocks(&self, record: &Record) -> Vec<(FontState<F>, String)> {
        let mut blocks = vec![
            (self.styles.name, record.name.clone()),
            (self.styles.address, record.address.clone()),
            (self.styles.address, record.postal_line()),
        ];
        if record.has_country() {
            blocks.push((self.styles.address, record.country.clone()));
        }
        blocks
    }

    /// The height of all of a record's text blocks, including the gaps between them
    pub fn content_height<C: Canvas<Face = F> + ?Sized>(&self, canvas: &C, record: &Record) -> Pt {
        let blocks = self.blocks(record);
        let count = blocks.len();
        blocks
            .iter()
            .enumerate()
            .map(|(i, (font, text))| {
                let height = self.line_writer.height(canvas, font, text);
                if i + 1 < count {
                    height + self.gap(canvas, font)
                } else {
                    height
                }
            })
            .sum()
    }

    /// Render `record` into `cell`, the rectangle of one grid cell
    pub fn render<C: Canvas<Face = F> + ?Sized>(
        &self,
        canvas: &mut C,
        record: &Record,
        cell: Rect,
    ) -> LabelLayout {
        if self.draw_borders {
            canvas.draw_rect(cell);
        }

        let content_height = self.content_height(canvas, record);
        let (x, _) = cell.centre();

        // text is positioned by its baseline, so the first line sits one line advance
        // below the top of the centred block
        let mut y = cell.y1 + cell.height() / 2.0 + content_height / 2.0
            - canvas.line_advance(&self.styles.name);

        let blocks = self.blocks(record);
        let count = blocks.len();
        let mut block_lines = Vec::with_capacity(count);
        for (i, (font, text)) in blocks.iter().enumerate() {
            let lines = self.line_writer.write(canvas, font, x, y, text);
            block_lines.push(lines);
            if i + 1 < count {
                y -= canvas.line_advance(font) * lines as f32 + self.gap(canvas, font);
            }
        }

        LabelLayout {
            content_height,
            block_lines,
            overflows: content_height > cell.height(),
        }
    }
}
