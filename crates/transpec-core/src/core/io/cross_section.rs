use crate::core::io::traits::TabulatedFile;
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::debug;

/// Number of leading commentary lines in a cross-section file.
pub const HEADER_LINES: usize = 15;

const COLUMNS: usize = 3;

/// One body row of a cross-section file, in the file's own units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossSectionRecord {
    /// Wavenumber in cm⁻¹.
    pub wavenumber_cm: f64,
    /// Absorption cross-section in cm²/molecule.
    pub cross_section_cm2: f64,
    /// Third column of the source data (absorption coefficient, m⁻¹). Not used by the model.
    pub absorption_coefficient: f64,
}

#[derive(Debug, Error)]
pub enum CrossSectionFileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: CrossSectionParseErrorKind,
    },
}

#[derive(Debug, Error)]
pub enum CrossSectionParseErrorKind {
    #[error("Expected 3 whitespace-separated columns, found {found}")]
    ColumnCount { found: usize },
    #[error("Invalid number in column {column} (value: '{value}')")]
    InvalidFloat { column: usize, value: String },
    #[error("Wavenumber must be positive and finite (value: {value})")]
    InvalidWavenumber { value: f64 },
    #[error("Cross-section must be non-negative and finite (value: {value})")]
    InvalidCrossSection { value: f64 },
}

/// Whitespace-delimited `wavenumber  cross-section  coefficient` table with a
/// fixed-size header. Text after `#` in the body is a comment.
pub struct CrossSectionFile;

impl TabulatedFile for CrossSectionFile {
    type Record = CrossSectionRecord;
    type Error = CrossSectionFileError;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<Self::Record>, Self::Error> {
        let mut records = Vec::new();
        let mut header_seen = 0;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            if line_num <= HEADER_LINES {
                header_seen += 1;
                continue;
            }
            let data = strip_comment(&line);
            if data.trim().is_empty() {
                continue;
            }

            records.push(parse_record(data).map_err(|kind| CrossSectionFileError::Parse {
                line: line_num,
                kind,
            })?);
        }

        debug!(
            "Skipped {} header lines, read {} data rows.",
            header_seen,
            records.len()
        );
        Ok(records)
    }
}

fn strip_comment(line: &str) -> &str {
    line.split_once('#').map_or(line, |(data, _)| data)
}

fn parse_record(line: &str) -> Result<CrossSectionRecord, CrossSectionParseErrorKind> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != COLUMNS {
        return Err(CrossSectionParseErrorKind::ColumnCount {
            found: fields.len(),
        });
    }

    let mut values = [0.0f64; COLUMNS];
    for (column, (slot, raw)) in values.iter_mut().zip(&fields).enumerate() {
        *slot = raw
            .parse()
            .map_err(|_| CrossSectionParseErrorKind::InvalidFloat {
                column: column + 1,
                value: (*raw).to_string(),
            })?;
    }

    let [wavenumber_cm, cross_section_cm2, absorption_coefficient] = values;
    if !(wavenumber_cm.is_finite() && wavenumber_cm > 0.0) {
        return Err(CrossSectionParseErrorKind::InvalidWavenumber {
            value: wavenumber_cm,
        });
    }
    if !(cross_section_cm2.is_finite() && cross_section_cm2 >= 0.0) {
        return Err(CrossSectionParseErrorKind::InvalidCrossSection {
            value: cross_section_cm2,
        });
    }

    Ok(CrossSectionRecord {
        wavenumber_cm,
        cross_section_cm2,
        absorption_coefficient,
    })
}
