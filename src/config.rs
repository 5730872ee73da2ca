//! Run configuration, read from a TOML file.
//!
//! ```toml
//! [labels]
//! input = "addresses.csv"
//! output = "labels.pdf"
//! unit = "mm"
//! page_size = "A4"
//! draw_borders = true
//! extra_line_spacing = 0.2
//!
//! [dimensions]
//! label_width = 63.5
//! label_height = 37
//!
//! [fonts]
//! directory = "fonts"
//! name = { face = "DejaVuSans-Bold", size = 11 }
//! address = { face = "DejaVuSans", size = 10 }
//! ```
//!
//! A second, local file may override any subset of these keys; it is merged over the
//! main file table by table before anything is interpreted. Dimensions are in `unit`,
//! font sizes are always in points.

use crate::layout::GridGeometry;
use crate::pagesize::{self, PageOrientation, PageSize};
use crate::units::{LengthUnit, Pt};
use crate::LabelError;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use toml::{Table, Value};

/// The name of the local override file looked for next to the main configuration
pub const LOCAL_FILE_NAME: &str = "config.local.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub labels: LabelsConfig,
    #[serde(default)]
    pub dimensions: Dimensions,
    pub fonts: FontsConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LabelsConfig {
    /// The CSV file to read addresses from
    pub input: PathBuf,
    /// Where to write the PDF
    pub output: PathBuf,
    /// The unit every value in `[dimensions]` is given in
    pub unit: String,
    pub page_size: String,
    pub landscape: bool,
    pub draw_borders: bool,
    /// Blank space between blocks of text, as a fraction of a line
    pub extra_line_spacing: f32,
    /// Rows whose first field starts with this are skipped
    pub ignore_prefix: String,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        LabelsConfig {
            input: PathBuf::from("addresses.csv"),
            output: PathBuf::from("labels.pdf"),
            unit: "mm".to_string(),
            page_size: "A4".to_string(),
            landscape: false,
            draw_borders: false,
            extra_line_spacing: 0.0,
            ignore_prefix: "#".to_string(),
        }
    }
}

/// Sheet dimensions, in the configured unit. Anything left out is 0
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Dimensions {
    pub label_width: f32,
    pub label_height: f32,
    pub page_margin_left: f32,
    pub page_margin_top: f32,
    pub label_margin_right: f32,
    pub label_margin_top: f32,
    pub label_padding: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FontsConfig {
    /// Where font files are looked up
    #[serde(default = "default_font_directory")]
    pub directory: PathBuf,
    pub name: FontStyleConfig,
    pub address: FontStyleConfig,
}

fn default_font_directory() -> PathBuf {
    PathBuf::from("fonts")
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FontStyleConfig {
    /// The font file name, without extension
    pub face: String,
    /// In points
    pub size: f32,
}

/// Merge `overlay` into `base`: tables merge recursively, any other value in `overlay`
/// replaces the one in `base`
fn merge(base: &mut Table, overlay: Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(Value::Table(existing)), Value::Table(more)) => merge(existing, more),
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

impl Config {
    /// Parse a configuration, optionally with a local override on top of it
    pub fn parse(base: &str, local: Option<&str>) -> Result<Config, LabelError> {
        let mut table: Table = toml::from_str(base)?;
        if let Some(local) = local {
            let overlay: Table = toml::from_str(local)?;
            merge(&mut table, overlay);
        }
        Ok(Value::Table(table).try_into()?)
    }

    /// Read the configuration at `path`.
    ///
    /// An explicitly given `local` override must exist. Without one, a
    /// [LOCAL_FILE_NAME] next to `path` is used when it exists.
    pub fn load<P: AsRef<Path>>(path: P, local: Option<&Path>) -> Result<Config, LabelError> {
        let path = path.as_ref();
        let base = std::fs::read_to_string(path)?;

        let local = match local {
            Some(local) => Some(local.to_path_buf()),
            None => Some(Self::default_local_path(path)).filter(|p| p.is_file()),
        };
        let local = match local {
            Some(local) => {
                debug!("merging local configuration from {}", local.display());
                Some(std::fs::read_to_string(local)?)
            }
            None => None,
        };

        Self::parse(&base, local.as_deref())
    }

    /// Where the local override for the configuration at `path` lives by default
    pub fn default_local_path(path: &Path) -> PathBuf {
        path.with_file_name(LOCAL_FILE_NAME)
    }

    pub fn unit(&self) -> Result<LengthUnit, LabelError> {
        self.labels.unit.parse()
    }

    /// The page size, turned to landscape when asked for
    pub fn page_size(&self) -> Result<PageSize, LabelError> {
        let size = pagesize::by_name(&self.labels.page_size)?;
        Ok(if self.labels.landscape {
            size.landscape()
        } else {
            size.portrait()
        })
    }

    /// The sheet geometry in points, checked to hold at least one label
    pub fn geometry(&self) -> Result<GridGeometry, LabelError> {
        let unit = self.unit()?;
        let (page_width, page_height) = self.page_size()?;
        let d = &self.dimensions;
        let geometry = GridGeometry {
            label_width: unit.to_pt(d.label_width),
            label_height: unit.to_pt(d.label_height),
            page_margin_left: unit.to_pt(d.page_margin_left),
            page_margin_top: unit.to_pt(d.page_margin_top),
            label_margin_right: unit.to_pt(d.label_margin_right),
            label_margin_top: unit.to_pt(d.label_margin_top),
            label_padding: unit.to_pt(d.label_padding),
            page_width,
            page_height,
        };
        geometry.validate()?;
        Ok(geometry)
    }
}

impl FontStyleConfig {
    pub fn size(&self) -> Pt {
        Pt(self.size)
    }
}
