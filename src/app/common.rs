use super::{
    app_helper::AppHelper, command::Command, AuthorsCommand, CheckCommand, ConvertCommand,
};
use anyhow::{anyhow, Context, Result};
use asptab::parsing::{AnswerSet, AnswerSetDecoder, DecodingError, MalformedRecordPolicy};
use clap::{Arg, ArgMatches};
use log::{info, warn};
use std::{
    fs::{self, File},
    io::{BufReader, Read},
    path::PathBuf,
    str::FromStr,
};
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

pub(crate) fn create_app_helper() -> AppHelper<'static> {
    let app_name = option_env!("CARGO_PKG_NAME").unwrap_or("unknown app name");
    let app_version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown version");
    let authors = option_env!("CARGO_PKG_AUTHORS").unwrap_or("unknown authors");
    let mut app = AppHelper::new(
        app_name,
        app_version,
        authors,
        "asptab, a converter from ASP solver answer sets to tables.",
    );
    let commands: Vec<Box<dyn Command>> = vec![
        Box::new(AuthorsCommand::new(app_name, app_version, authors)),
        Box::new(CheckCommand::new()),
        Box::new(ConvertCommand::new()),
    ];
    for c in commands {
        app.add_command(c);
    }
    app
}

pub(crate) const ARG_INPUT: &str = "INPUT";

pub(crate) fn input_arg() -> Arg<'static, 'static> {
    Arg::with_name(ARG_INPUT)
        .short("f")
        .long("input")
        .takes_value(true)
        .empty_values(false)
        .multiple(false)
        .help("the file containing the solver output (read from stdin if absent)")
        .required(false)
}

/// The way answer sets are delimited in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum InputMode {
    /// A solver transcript with `Answer:` markers
    Block,
    /// One answer set per line
    Flat,
}

pub(crate) const ARG_MODE: &str = "MODE";
const ARG_STRICT: &str = "STRICT";
const ARG_SKIP_MALFORMED: &str = "SKIP_MALFORMED";
const ARG_WEIGHT_PREDICATE: &str = "WEIGHT_PREDICATE";

pub(crate) fn decoding_args() -> Vec<Arg<'static, 'static>> {
    let modes = InputMode::iter()
        .map(|m| m.into())
        .collect::<Vec<&'static str>>();
    vec![
        Arg::with_name(ARG_MODE)
            .short("m")
            .long("mode")
            .takes_value(true)
            .multiple(false)
            .possible_values(&modes)
            .default_value("block")
            .help("the input shape (a solver transcript or one answer set per line)")
            .required(false),
        Arg::with_name(ARG_STRICT)
            .long("strict")
            .takes_value(false)
            .help("emit a warning each time a cost, a weight or a weighted term is read leniently"),
        Arg::with_name(ARG_SKIP_MALFORMED)
            .long("skip-malformed")
            .takes_value(false)
            .help("skip the answer sets containing malformed terms instead of failing"),
        Arg::with_name(ARG_WEIGHT_PREDICATE)
            .long("weight-predicate")
            .takes_value(true)
            .empty_values(false)
            .multiple(true)
            .number_of_values(1)
            .help("an additional predicate giving action weights (e.g. weight_of_atom)")
            .required(false),
    ]
}

pub(crate) fn read_input(arg_matches: &ArgMatches<'_>) -> Result<String> {
    match arg_matches.value_of(ARG_INPUT) {
        Some(file_path) => read_file_path_with(file_path, &|r| {
            let mut content = String::new();
            r.read_to_string(&mut content)
                .context("while reading the input file")?;
            Ok(content)
        }),
        None => {
            info!("reading solver output from the standard input");
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("while reading the standard input")?;
            Ok(content)
        }
    }
}

pub(crate) fn read_file_path_with<F, R>(file_path: &str, reader: &F) -> Result<R>
where
    F: Fn(&mut dyn Read) -> Result<R>,
{
    let canonicalized = canonicalize_file_path(file_path)?;
    info!("reading input file {:?}", canonicalized);
    let mut file_reader = BufReader::new(
        File::open(&canonicalized)
            .with_context(|| format!(r#"while opening file "{}""#, file_path))?,
    );
    (reader)(&mut file_reader)
}

/// Canonicalize a path given by the user.
pub(crate) fn canonicalize_file_path(file_path: &str) -> Result<PathBuf> {
    fs::canonicalize(PathBuf::from(file_path))
        .with_context(|| format!(r#"while opening file "{}""#, file_path))
}

pub(crate) fn create_decoder(arg_matches: &ArgMatches<'_>) -> AnswerSetDecoder {
    let mut decoder = AnswerSetDecoder::default();
    if arg_matches.is_present(ARG_STRICT) {
        info!("strict mode enabled");
        decoder.set_strict(true);
    }
    if let Some(predicates) = arg_matches.values_of(ARG_WEIGHT_PREDICATE) {
        for p in predicates {
            info!("reading action weights from {} terms", p);
            decoder.add_weight_predicate(p);
        }
    }
    decoder.add_warning_handler(Box::new(|sequence, msg| {
        warn!("in answer set {}: {}", sequence, msg)
    }));
    decoder
}

/// Reads the input and decodes its answer sets according to the CLI arguments.
pub(crate) fn decode_input(arg_matches: &ArgMatches<'_>) -> Result<Vec<AnswerSet>> {
    let text = read_input(arg_matches)?;
    let decoder = create_decoder(arg_matches);
    let policy = if arg_matches.is_present(ARG_SKIP_MALFORMED) {
        MalformedRecordPolicy::Skip
    } else {
        MalformedRecordPolicy::Abort
    };
    let mode = arg_matches
        .value_of(ARG_MODE)
        .map(InputMode::from_str)
        .transpose()
        .map_err(|e| anyhow!("{}", e))?
        .unwrap_or(InputMode::Block);
    let result = match mode {
        InputMode::Block => decoder.decode_transcript(&text, policy),
        InputMode::Flat => decoder.decode_lines(&text, policy),
    };
    let answer_sets = match result {
        Err(DecodingError::NoAnswerBlocksFound) => {
            warn!("no data: the input does not contain any answer set");
            return Err(anyhow!(DecodingError::NoAnswerBlocksFound))
                .context("while decoding the solver output");
        }
        r => r.context("while decoding the solver output")?,
    };
    if answer_sets.is_empty() {
        warn!("no data: no answer set could be decoded");
    } else {
        info!("decoded {} answer set(s)", answer_sets.len());
    }
    Ok(answer_sets)
}
