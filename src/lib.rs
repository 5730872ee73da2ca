//! Lay address records out onto printable sticker-sheet PDFs.
//!
//! Records are read from CSV ([load_records_file]), the sheet is described by a
//! [Config], and [layout::render_labels] draws one label per record through the
//! [Canvas] trait. [PdfCanvas] is the canvas that produces the actual PDF.

mod canvas;
pub use canvas::*;

pub mod config;
pub use config::Config;

mod content;

mod document;
pub use document::*;

mod font;
pub use font::*;

mod info;
pub use info::*;

/// Placing labels on the pages of a sticker sheet
pub mod layout;

mod page;
pub use page::*;

/// Common page sizes
pub mod pagesize;

mod pdf_canvas;
pub use pdf_canvas::*;

mod record;
pub use record::*;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality, mostly for custom [pdf_writer::Content] generation
pub use pdf_writer;
