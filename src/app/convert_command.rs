use super::{app_helper, command::Command, common};
use anyhow::{Context, Result};
use asptab::{
    io::{JsonTableWriter, OutputFormat, TableWriter},
    table::Table,
};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::{info, warn};
use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
    str::FromStr,
};
use strum::IntoEnumIterator;

const CMD_NAME: &str = "convert";

const ARG_OUTPUT: &str = "OUTPUT";
const ARG_FORMAT: &str = "FORMAT";
const ARG_PRETTY: &str = "PRETTY";

pub(crate) struct ConvertCommand;

impl ConvertCommand {
    pub(crate) fn new() -> Self {
        ConvertCommand
    }
}

impl<'a> Command<'a> for ConvertCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        let formats = OutputFormat::iter()
            .map(|f| f.extension())
            .collect::<Vec<&'static str>>();
        SubCommand::with_name(CMD_NAME)
            .about("Converts the answer sets of a solver output into a table")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_arg())
            .args(&common::decoding_args())
            .arg(
                Arg::with_name(ARG_OUTPUT)
                    .short("o")
                    .long("output")
                    .takes_value(true)
                    .empty_values(false)
                    .multiple(false)
                    .help("the output file (the table is written on stdout if absent)")
                    .required(false),
            )
            .arg(
                Arg::with_name(ARG_FORMAT)
                    .long("format")
                    .takes_value(true)
                    .multiple(false)
                    .possible_values(&formats)
                    .help("the output format (guessed from the output file extension if absent)")
                    .required(false),
            )
            .arg(
                Arg::with_name(ARG_PRETTY)
                    .long("pretty")
                    .takes_value(false)
                    .help("indent the JSON output"),
            )
            .arg(app_helper::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let answer_sets = common::decode_input(arg_matches)?;
        let table = Table::from_answer_sets(&answer_sets);
        info!(
            "the table has {} row(s), {} atom column(s) and {} action column(s)",
            table.n_rows(),
            table.atom_columns().len(),
            table.action_columns().len(),
        );
        let explicit_format = arg_matches
            .value_of(ARG_FORMAT)
            .map(OutputFormat::from_str)
            .transpose()
            .context("while reading the output format")?;
        let pretty = arg_matches.is_present(ARG_PRETTY);
        match arg_matches.value_of(ARG_OUTPUT) {
            Some(path) => {
                let (format, path) = output_format_and_path(explicit_format, Path::new(path));
                let file = File::create(&path)
                    .with_context(|| format!("while creating output file {:?}", path))?;
                let mut writer = BufWriter::new(file);
                table_writer(format, pretty).write_table(&mut writer, &table)?;
                info!(
                    "wrote {} answer set(s) to {:?} ({} format)",
                    table.n_rows(),
                    path,
                    format.extension()
                );
            }
            None => {
                let format = explicit_format.unwrap_or(OutputFormat::Csv);
                let mut out = std::io::stdout();
                table_writer(format, pretty).write_table(&mut out, &table)?;
            }
        }
        Ok(())
    }
}

fn table_writer(format: OutputFormat, pretty: bool) -> Box<dyn TableWriter> {
    match format {
        OutputFormat::Json if pretty => Box::new(JsonTableWriter::new_pretty()),
        _ => format.table_writer(),
    }
}

/// Returns the output format and the output path.
///
/// An explicit format always wins.
/// Else, the format is given by the file extension; unknown extensions fall back to CSV, with a `.csv` path.
fn output_format_and_path(explicit_format: Option<OutputFormat>, path: &Path) -> (OutputFormat, PathBuf) {
    if let Some(f) = explicit_format {
        return (f, path.to_path_buf());
    }
    match OutputFormat::from_path(path) {
        Some(f) => (f, path.to_path_buf()),
        None => {
            let csv_path = path.with_extension(OutputFormat::Csv.extension());
            warn!(
                "no writer available for {:?}; writing CSV to {:?} instead",
                path, csv_path
            );
            (OutputFormat::Csv, csv_path)
        }
    }
}
