use super::{CsvTableWriter, JsonTableWriter, TableWriter};
use std::{path::Path, str::FromStr};
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

/// The formats tables can be written in.
///
/// The string representation of a format is also the file extension associated with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Comma-separated values
    Csv,
    /// Tab-separated values
    Tsv,
    /// JSON object with columns and rows
    Json,
}

impl OutputFormat {
    /// Returns the format associated with the extension of a file path, if any.
    ///
    /// Extensions are not case sensitive.
    ///
    /// # Example
    ///
    /// ```
    /// # use asptab::io::OutputFormat;
    /// # use std::path::Path;
    /// assert_eq!(Some(OutputFormat::Json), OutputFormat::from_path(Path::new("out.JSON")));
    /// assert_eq!(None, OutputFormat::from_path(Path::new("out.xlsx")));
    /// ```
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(|e| OutputFormat::from_str(&e.to_ascii_lowercase()).ok())
    }

    /// Returns the file extension associated with this format.
    pub fn extension(&self) -> &'static str {
        (*self).into()
    }

    /// Returns a writer for this format.
    pub fn table_writer(&self) -> Box<dyn TableWriter> {
        match self {
            OutputFormat::Csv => Box::<CsvTableWriter>::default(),
            OutputFormat::Tsv => Box::new(CsvTableWriter::new_tab_separated()),
            OutputFormat::Json => Box::<JsonTableWriter>::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_from_str() {
        assert_eq!(OutputFormat::Csv, OutputFormat::from_str("csv").unwrap());
        assert_eq!(OutputFormat::Tsv, OutputFormat::from_str("tsv").unwrap());
        assert_eq!(OutputFormat::Json, OutputFormat::from_str("json").unwrap());
        assert!(OutputFormat::from_str("xlsx").is_err());
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            Some(OutputFormat::Csv),
            OutputFormat::from_path(Path::new("dir/out.csv"))
        );
        assert_eq!(
            Some(OutputFormat::Tsv),
            OutputFormat::from_path(Path::new("out.TSV"))
        );
        assert_eq!(None, OutputFormat::from_path(Path::new("out.xlsx")));
        assert_eq!(None, OutputFormat::from_path(Path::new("out")));
    }

    #[test]
    fn test_extensions_round_trip() {
        for format in OutputFormat::iter() {
            let path = format!("out.{}", format.extension());
            assert_eq!(Some(format), OutputFormat::from_path(Path::new(&path)));
        }
    }
}
