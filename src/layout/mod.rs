//! Laying address labels out on sticker sheets.
//!
//! The pieces build on each other:
//!
//! - [`wrap_text`](crate::layout::wrap_text) breaks a string into lines that fit a width
//! - [`LineWriter`](crate::layout::LineWriter) draws wrapped, centred lines onto a [Canvas](crate::Canvas)
//! - [`GridCursor`](crate::layout::GridCursor) walks the cells of a [`GridGeometry`](crate::layout::GridGeometry), page by page
//! - [`LabelRenderer`](crate::layout::LabelRenderer) fills one cell with one address
//! - [`render_labels`](crate::layout::render_labels) puts a whole list of addresses on as many pages as needed
//!
//! None of this knows about PDF: everything is drawn through the [Canvas](crate::Canvas)
//! trait, so the same layout can be checked against a recording canvas in tests.
//!
//! # Example
//!
//! ```no_run
//! use address_labels::layout::{render_labels, FontStyles, GridGeometry, LabelRenderer};
//! use address_labels::{pagesize, FontState, PdfCanvas, Pt, Record};
//!
//! let mut canvas = PdfCanvas::new(pagesize::A4);
//! let regular = canvas.install_font("DejaVuSans", "fonts").expect("font is installed");
//! let bold = canvas.install_font("DejaVuSans-Bold", "fonts").expect("font is installed");
//!
//! let geometry = GridGeometry {
//!     label_width: Pt(198.4),
//!     label_height: Pt(107.7),
//!     page_width: pagesize::A4.0,
//!     page_height: pagesize::A4.1,
//!     ..GridGeometry::default()
//! };
//! let renderer = LabelRenderer::new(
//!     geometry,
//!     FontStyles {
//!         name: FontState::new(bold, Pt(11.0)),
//!         address: FontState::new(regular, Pt(10.0)),
//!     },
//!     0.2,
//!     false,
//! );
//!
//! let records = vec![Record::new("Jane Doe", "Main Street 1", "1000", "Brussels", "")];
//! render_labels(&mut canvas, &renderer, &records);
//!
//! let mut out = std::fs::File::create("labels.pdf").expect("can create file");
//! canvas.finish().write(&mut out).expect("can write PDF");
//! ```

mod grid;
mod label;
mod sheet;
mod text;
mod writer;

#[cfg(test)]
pub(crate) mod testing;

pub use grid::*;
pub use label::*;
pub use sheet::*;
pub use text::*;
pub use writer::*;
