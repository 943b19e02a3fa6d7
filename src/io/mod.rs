//! Objects used to write the tables built from answer sets.

mod csv_writer;
pub use csv_writer::CsvTableWriter;

mod json_writer;
pub use json_writer::JsonTableWriter;

mod output_format;
pub use output_format::OutputFormat;

mod specs;
pub use specs::TableWriter;
