use super::TableWriter;
use crate::table::Table;
use anyhow::{Context, Result};
use std::io::Write;

/// A writer for the JSON format.
///
/// The table is written as an object with two fields:
/// `columns`, the list of the column names, and `rows`, the list of the rows.
/// Integers are written as JSON numbers, literals as JSON strings, and missing costs as `null`.
///
/// ```text
/// {"columns":["sequence","cost","a","action(x)"],"rows":[[1,3,1,0],[2,null,0,2]]}
/// ```
#[derive(Default)]
pub struct JsonTableWriter {
    pretty: bool,
}

impl JsonTableWriter {
    /// Builds a writer producing indented JSON.
    pub fn new_pretty() -> Self {
        JsonTableWriter { pretty: true }
    }
}

impl TableWriter for JsonTableWriter {
    fn write_table(&self, writer: &mut dyn Write, table: &Table) -> Result<()> {
        let context = "while writing a table";
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, table).context(context)?;
        } else {
            serde_json::to_writer(&mut *writer, table).context(context)?;
        }
        writeln!(writer).context(context)?;
        writer.flush().context(context)
    }
}
