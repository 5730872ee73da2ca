//! Loading address records from CSV files.
//!
//! Every row holds, in order: name, street address, postal code, city and country. The
//! country may be left empty. Malformed rows never abort loading: they are skipped (or
//! kept, for an empty name) and reported as [Diagnostic]s.

use crate::LabelError;
use csv::{ReaderBuilder, StringRecord};
use log::warn;
use std::fmt;
use std::io::Read;
use std::path::Path;

const COLUMNS: usize = 5;

/// One address to print on one label
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    pub name: String,
    pub address: String,
    pub postalcode: String,
    pub city: String,
    /// Empty when the label shouldn't carry a country line
    pub country: String,
}

impl Record {
    pub fn new<S: Into<String>>(name: S, address: S, postalcode: S, city: S, country: S) -> Record {
        Record {
            name: name.into(),
            address: address.into(),
            postalcode: postalcode.into(),
            city: city.into(),
            country: country.into(),
        }
    }

    /// The postal code and city, the way they're printed on one line
    pub fn postal_line(&self) -> String {
        format!("{} {}", self.postalcode, self.city)
    }

    pub fn has_country(&self) -> bool {
        !self.country.is_empty()
    }

    fn from_row(row: &StringRecord) -> Option<Record> {
        if row.len() < COLUMNS {
            return None;
        }
        let field = |i: usize| row.get(i).unwrap_or_default().trim().to_string();
        Some(Record {
            name: field(0),
            address: field(1),
            postalcode: field(2),
            city: field(3),
            country: field(4),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    /// The row has fewer than five columns; it was skipped
    NotEnoughColumns(usize),
    /// The first column is empty; the row was still loaded
    EmptyFirstColumn,
}

/// Something off about one row of the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The 1-based line the row starts on
    pub row: u64,
    /// Where the row came from, usually a file name
    pub source: String,
    pub problem: Problem,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.problem {
            Problem::NotEnoughColumns(found) => write!(
                f,
                "row {} of {}: not enough columns ({found} of {COLUMNS}), skipping",
                self.row, self.source
            ),
            Problem::EmptyFirstColumn => {
                write!(f, "row {} of {}: empty first column", self.row, self.source)
            }
        }
    }
}

/// The records read from an input, plus whatever was wrong with it
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    pub records: Vec<Record>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Read records from CSV data. `source` names the input in diagnostics.
///
/// Rows whose first field starts with `ignore_prefix` are skipped without comment; an
/// empty prefix disables this. Blank lines are skipped too.
pub fn load_records<R: Read>(
    reader: R,
    source: &str,
    ignore_prefix: &str,
) -> Result<RecordSet, LabelError> {
    let mut csv = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut set = RecordSet::default();
    let mut diagnose = |row: u64, problem: Problem| {
        let diagnostic = Diagnostic {
            row,
            source: source.to_string(),
            problem,
        };
        warn!("{diagnostic}");
        set.diagnostics.push(diagnostic);
    };

    let mut records = Vec::new();
    for (index, row) in csv.records().enumerate() {
        let row = row?;
        let line = row
            .position()
            .map(|p| p.line())
            .unwrap_or(index as u64 + 1);

        let first = row.get(0).unwrap_or_default();
        if !ignore_prefix.is_empty() && first.starts_with(ignore_prefix) {
            continue;
        }
        if first.trim().is_empty() {
            diagnose(line, Problem::EmptyFirstColumn);
        }

        match Record::from_row(&row) {
            Some(record) => records.push(record),
            None => diagnose(line, Problem::NotEnoughColumns(row.len())),
        }
    }

    set.records = records;
    Ok(set)
}

/// Read records from a CSV file on disk
pub fn load_records_file<P: AsRef<Path>>(
    path: P,
    ignore_prefix: &str,
) -> Result<RecordSet, LabelError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    load_records(file, &path.display().to_string(), ignore_prefix)
}
