use crate::table::Table;
use anyhow::Result;
use std::io::Write;

/// A trait implemented by objects that write tables built from answer sets.
///
/// Such writers are the sinks of the decoding pipeline: they receive finished tables and never take part in decoding.
pub trait TableWriter {
    /// Writes a table.
    ///
    /// # Example
    ///
    /// ```
    /// # use asptab::io::{CsvTableWriter, TableWriter};
    /// # use asptab::table::Table;
    /// let mut buffer = Vec::new();
    /// CsvTableWriter::default()
    ///     .write_table(&mut buffer, &Table::from_answer_sets(&[]))
    ///     .unwrap();
    /// assert_eq!("sequence,cost\n", String::from_utf8(buffer).unwrap());
    /// ```
    fn write_table(&self, writer: &mut dyn Write, table: &Table) -> Result<()>;
}
