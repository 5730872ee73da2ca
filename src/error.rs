use std::path::PathBuf;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum LabelError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// The address file could not be read as CSV
    Csv(#[from] csv::Error),

    #[error(transparent)]
    /// The configuration file is not valid TOML or is missing keys
    ConfigParse(#[from] toml::de::Error),

    #[error("cannot install font {face}; none of these files exist: {}", display_paths(.paths))]
    /// None of the candidate files for a font face could be found
    FontInstall { face: String, paths: Vec<PathBuf> },

    #[error("unknown unit {0:?}")]
    /// The configured unit name is not one we know of
    UnknownUnit(String),

    #[error("unknown page size {0:?}")]
    /// The configured page size name is not one we know of
    UnknownPageSize(String),

    #[error("invalid label geometry: {0}")]
    /// The sheet dimensions cannot hold a single label
    InvalidGeometry(String),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
