use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Defines the interface for reading row-oriented tabulated data files.
///
/// Implementors handle format-specific parsing and return the rows in file order;
/// unit conversion and ordering are left to the consumer.
pub trait TabulatedFile {
    /// One parsed data row.
    type Record;

    /// The error type for read operations.
    type Error: Error + From<io::Error>;

    /// Reads all data rows from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if a row cannot be parsed or the reader fails.
    fn read_from(reader: &mut impl BufRead) -> Result<Vec<Self::Record>, Self::Error>;

    /// Reads all data rows from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Self::Record>, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}
