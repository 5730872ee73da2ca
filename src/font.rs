use crate::{
    refs::{ObjectReferences, RefType},
    LabelError, Pt,
};
use id_arena::Id;
use owned_ttf_parser::{AsFaceRef, Face, GlyphId, OwnedFace};
use pdf_writer::{
    types::{CidFontType, FontFlags, SystemInfo},
    Finish, Name, Pdf, Ref, Str,
};
use std::collections::HashMap;
use std::path::Path;

/// A parsed TrueType / OpenType font. Fonts are embedded in their entirety in the
/// generated PDF.
///
/// Fonts live in the [Document](crate::Document)'s arena and are referred to by
/// their [Id] everywhere else.
pub struct Font {
    pub face: OwnedFace,
    name: String,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, LabelError> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        let name = Self::read_name(face.as_face_ref(), owned_ttf_parser::name_id::FULL_NAME)
            .or_else(|| {
                Self::read_name(face.as_face_ref(), owned_ttf_parser::name_id::POST_SCRIPT_NAME)
            })
            .unwrap_or_else(|| "Unnamed".to_string());
        Ok(Font { face, name })
    }

    /// Read and parse a font file from disk
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Font, LabelError> {
        let bytes = std::fs::read(path)?;
        Self::load(bytes)
    }

    fn read_name(face: &Face<'_>, name_id: u16) -> Option<String> {
        face.names()
            .into_iter()
            .find(|name| name.name_id == name_id && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// The full name of the font, as stored in its `name` table
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The family name of the font, falling back to the full name
    pub fn family(&self) -> String {
        Self::read_name(self.face.as_face_ref(), owned_ttf_parser::name_id::FAMILY)
            .unwrap_or_else(|| self.name.clone())
    }

    fn scaling(&self, size: Pt) -> Pt {
        size / self.face.as_face_ref().units_per_em() as f32
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face.as_face_ref().ascender() as f32
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) for the given font size.
    /// Note: this is usually negative
    pub fn descent(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face.as_face_ref().descender() as f32
    }

    /// Calculate the leading (extra space between lines) for the given font size
    pub fn leading(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face.as_face_ref().line_gap() as f32
    }

    /// Calculate the default line height of the font for the given size. The returned value is
    /// how much to vertically offset a second row of text below a first row of text.
    pub fn line_height(&self, size: Pt) -> Pt {
        self.leading(size) + self.ascent(size) - self.descent(size)
    }

    /// Calculate the width of a string of text at the given size. Characters the font has
    /// no glyph for are measured as the glyph they will be drawn with
    pub fn text_width(&self, text: &str, size: Pt) -> Pt {
        let scaling = self.scaling(size);
        text.chars()
            .filter_map(|ch| self.glyph_id(ch).or_else(|| self.fallback_glyph_id()))
            .map(|gid| {
                scaling
                    * self
                        .face
                        .as_face_ref()
                        .glyph_hor_advance(GlyphId(gid))
                        .unwrap_or_default() as f32
            })
            .sum()
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face.as_face_ref().glyph_index(ch).map(|i| i.0)
    }

    pub fn replacement_glyph_id(&self) -> Option<u16> {
        self.face.as_face_ref().glyph_index('\u{FFFD}').map(|i| i.0)
    }

    /// The glyph drawn for characters missing from the font: the replacement character
    /// if there is one, then `?`
    pub fn fallback_glyph_id(&self) -> Option<u16> {
        self.replacement_glyph_id().or_else(|| self.glyph_id('?'))
    }

    fn write_cid(&self, refs: &mut ObjectReferences, font_index: usize, writer: &mut Pdf) -> Ref {
        let font_descriptor_id = self.write_descriptor(refs, font_index, writer);

        let id = refs.gen(RefType::CidFont(font_index));

        let mut cid_font = writer.cid_font(id);
        cid_font.subtype(CidFontType::Type2);
        cid_font.base_font(Name(format!("F{font_index}").as_bytes()));
        cid_font.system_info(SystemInfo {
            registry: Str(b"Adobe"),
            ordering: Str(b"Identity"),
            supplement: 0,
        });
        cid_font.font_descriptor(font_descriptor_id);

        let sizing = self.glyphs_sizing(&self.glyph_ids());
        let scaling = 1000.0 / self.face.as_face_ref().units_per_em() as f32;

        // the default width is the one shared by the most glyphs
        // <width, count>
        let mut widths_counts: HashMap<u16, usize> = HashMap::new();
        for (width, _) in sizing.values() {
            *widths_counts.entry(*width).or_insert(0) += 1;
        }
        let most_common_width = widths_counts
            .iter()
            .max_by_key(|&(width, count)| (*count, *width))
            .map(|(&width, _)| width as f32 * scaling)
            .unwrap_or(1000.0);

        let mut id_widths: Vec<(u16, f32)> = sizing
            .iter()
            .map(|(&gid, &(width, _))| (gid, width as f32 * scaling))
            .collect();
        id_widths.sort_by_key(|(gid, _)| *gid);

        let mut widths = cid_font.widths();
        widths.consecutive(0, [1000.0]);

        // group consecutive glyph ids into runs
        let mut runs: Vec<(u16, Vec<f32>)> = Vec::new();
        for (gid, width) in id_widths {
            match runs.last_mut() {
                Some((start, run)) if (gid - *start) as usize == run.len() => run.push(width),
                _ => runs.push((gid, vec![width])),
            }
        }
        for (start, run) in runs {
            widths.consecutive(start, run);
        }
        widths.finish();

        cid_font.default_width(most_common_width);
        cid_font.cid_to_gid_map_predefined(Name(b"Identity"));

        id
    }

    fn write_font_data(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        writer: &mut Pdf,
    ) -> Ref {
        let id = refs.gen(RefType::FontData(font_index));

        writer
            .stream(id, self.face.as_slice())
            .pair(Name(b"Length1"), self.face.as_slice().len() as i32);

        id
    }

    fn write_descriptor(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        writer: &mut Pdf,
    ) -> Ref {
        let font_data_stream_id = self.write_font_data(refs, font_index, writer);
        let face = self.face.as_face_ref();

        let sizing = self.glyphs_sizing(&self.glyph_ids());
        let max_width = sizing.values().map(|&(w, _)| w).max().unwrap_or_default();
        let max_height = sizing.values().map(|&(_, h)| h).max().unwrap_or_default();
        let sum_width: usize = sizing.values().map(|&(w, _)| w as usize).sum();
        let avg_width = sum_width as f32 / sizing.len().max(1) as f32;

        let id = refs.gen(RefType::FontDescriptor(font_index));

        let mut descriptor = writer.font_descriptor(id);
        descriptor.name(Name(self.name.as_bytes()));
        descriptor.family(Str(self.family().as_bytes()));
        descriptor.weight(face.weight().to_number());

        let mut flags: FontFlags = FontFlags::empty();
        if face.is_monospaced() {
            flags.set(FontFlags::FIXED_PITCH, true);
        }
        if face.is_italic() {
            flags.set(FontFlags::ITALIC, true);
        }
        descriptor.flags(flags);

        let scaling = 1000.0 / face.units_per_em() as f32;
        let bbox = face.global_bounding_box();
        descriptor.bbox(pdf_writer::Rect {
            x1: bbox.x_min as f32 * scaling,
            y1: bbox.y_min as f32 * scaling,
            x2: bbox.x_max as f32 * scaling,
            y2: (bbox.y_max as f32).max(max_height as f32) * scaling,
        });
        descriptor.italic_angle(face.italic_angle());
        descriptor.ascent(face.ascender() as f32 * scaling);
        descriptor.descent(face.descender() as f32 * scaling);
        descriptor.leading(face.line_gap() as f32 * scaling);
        descriptor.cap_height(
            face.capital_height()
                .map(|h| h as f32 * scaling)
                .unwrap_or(1000.0),
        );
        descriptor.x_height(
            face.x_height()
                .unwrap_or_else(|| face.capital_height().unwrap_or_default()) as f32
                * scaling,
        );
        // the stem width isn't stored in TrueType fonts; 80 is a regular weight
        descriptor.stem_v(80.0);
        descriptor.avg_width(avg_width * scaling);
        descriptor.max_width(max_width as f32 * scaling);
        descriptor.missing_width(max_width as f32 * scaling);

        descriptor.font_file2(font_data_stream_id);

        id
    }

    /// Map of glyph id to the first unicode codepoint that maps to it
    fn glyph_ids(&self) -> HashMap<u16, char> {
        let mut map: HashMap<u16, char> = HashMap::new();

        let Some(cmap) = self.face.as_face_ref().tables().cmap else {
            return map;
        };

        for subtable in cmap.subtables.into_iter().filter(|table| table.is_unicode()) {
            subtable.codepoints(|codepoint: u32| {
                if let Ok(ch) = char::try_from(codepoint) {
                    if let Some(index) = subtable.glyph_index(codepoint).filter(|index| index.0 > 0)
                    {
                        map.entry(index.0).or_insert(ch);
                    }
                }
            });
        }

        map
    }

    /// Map of glyph id to (horizontal advance, height)
    fn glyphs_sizing(&self, ids: &HashMap<u16, char>) -> HashMap<u16, (u16, i16)> {
        let face = self.face.as_face_ref();
        let mut sizing: HashMap<u16, (u16, i16)> = HashMap::new();
        for &id in ids.keys() {
            let gid = GlyphId(id);
            if let Some(h_advance) = face.glyph_hor_advance(gid) {
                let height = face
                    .glyph_bounding_box(gid)
                    .map(|bbox| bbox.y_max - bbox.y_min - face.descender())
                    .unwrap_or(1000);
                sizing.insert(id, (h_advance, height));
            }
        }
        sizing
    }

    fn write_to_unicode(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        writer: &mut Pdf,
    ) -> Ref {
        let id = refs.gen(RefType::ToUnicode(font_index));

        let mut map: String = r#"/CIDInit /ProcSet findresource begin
12 dict begin
begincmap
/CIDSystemInfo
<< /Registry (Adobe)
/Ordering (UCS) /Supplement 0 >> def
/CMapName /Adobe-Identity-UCS def
/CMapType 2 def
1 begincodespacerange
<0000> <FFFF>
endcodespacerange
"#
        .replace("\r\n", "\n");

        let mut ids: Vec<(u16, char)> = self.glyph_ids().into_iter().collect();
        ids.sort_by_key(|&(id, _)| id);

        // bfchar blocks hold at most 100 entries sharing one high byte
        let mut blocks: Vec<Vec<(u16, char)>> = Vec::new();
        for (id, ch) in ids {
            match blocks.last_mut() {
                Some(block)
                    if block.len() < 100 && block.first().map(|(first, _)| first >> 8) == Some(id >> 8) =>
                {
                    block.push((id, ch))
                }
                _ => blocks.push(vec![(id, ch)]),
            }
        }

        for block in blocks {
            map.push_str(&format!("{} beginbfchar\n", block.len()));
            for (id, ch) in block {
                let ch: u32 = ch.into();
                map.push_str(&format!("<{id:04x}> <{ch:04x}>\n"));
            }
            map.push_str("endbfchar\n");
        }

        map.push_str("endcmap CMapName currentdict /CMap defineresource pop end end\n");

        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            map.as_bytes(),
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        let mut stream = writer.stream(id, compressed.as_slice());
        stream.filter(pdf_writer::Filter::FlateDecode);

        id
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, id: Id<Font>, writer: &mut Pdf) {
        let font_index = id.index();
        let font_id = refs.gen(RefType::Font(font_index));
        let cid_font_id = self.write_cid(refs, font_index, writer);
        let to_unicode_id = self.write_to_unicode(refs, font_index, writer);

        let mut font = writer.type0_font(font_id);
        font.base_font(Name(format!("F{font_index}").as_bytes()));
        font.encoding_predefined(Name(b"Identity-H"));
        font.descendant_font(cid_font_id);
        font.to_unicode(to_unicode_id);
    }
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Font").field("name", &self.name).finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn garbage_bytes_are_not_a_font() {
        let err = Font::load(b"definitely not a font".to_vec()).unwrap_err();
        assert!(matches!(err, LabelError::FaceParsing(_)));
    }

    #[test]
    fn missing_font_file_is_an_io_error() {
        let err = Font::load_file("/nonexistent/fonts/Nope.ttf").unwrap_err();
        assert!(matches!(err, LabelError::Io(_)));
    }
}
