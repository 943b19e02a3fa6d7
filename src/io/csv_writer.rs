use super::TableWriter;
use crate::table::{Cell, Table};
use anyhow::{Context, Result};
use std::{borrow::Cow, io::Write};

/// A writer for delimiter-separated values.
///
/// The first line contains the column names; each following line is a row of the table.
/// Fields containing the delimiter, double quotes or line breaks are enclosed in double quotes, as defined in RFC 4180.
/// Integers are written in decimal notation, missing costs are written as empty fields.
///
/// The default writer uses commas as delimiters.
pub struct CsvTableWriter {
    delimiter: char,
}

impl Default for CsvTableWriter {
    fn default() -> Self {
        CsvTableWriter { delimiter: ',' }
    }
}

impl CsvTableWriter {
    /// Builds a writer using tabulations as delimiters.
    pub fn new_tab_separated() -> Self {
        CsvTableWriter { delimiter: '\t' }
    }

    fn escape<'a>(&self, field: &'a str) -> Cow<'a, str> {
        if field.contains(|c: char| c == self.delimiter || c == '"' || c == '\n' || c == '\r') {
            Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
        } else {
            Cow::Borrowed(field)
        }
    }

    fn write_record<'a, I>(&self, writer: &mut dyn Write, fields: I) -> Result<()>
    where
        I: Iterator<Item = Cow<'a, str>>,
    {
        for (i, field) in fields.enumerate() {
            if i > 0 {
                write!(writer, "{}", self.delimiter)?;
            }
            write!(writer, "{}", self.escape(&field))?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

fn cell_text(cell: &Cell) -> Cow<'_, str> {
    match cell {
        Cell::Int(i) => Cow::Owned(i.to_string()),
        Cell::Literal(s) => Cow::Borrowed(s),
        Cell::Empty => Cow::Borrowed(""),
    }
}

impl TableWriter for CsvTableWriter {
    fn write_table(&self, writer: &mut dyn Write, table: &Table) -> Result<()> {
        let context = "while writing a table";
        self.write_record(writer, table.columns().iter().map(|c| Cow::Borrowed(c.as_str())))
            .context(context)?;
        for row in table.rows() {
            self.write_record(writer, row.iter().map(cell_text))
                .context(context)?;
        }
        writer.flush().context(context)
    }
}
