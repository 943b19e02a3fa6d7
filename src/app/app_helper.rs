// crusti_app_helper
// Copyright (C) 2020  Univ. Artois & CNRS
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use super::command::Command;
use anyhow::{anyhow, Result};
use clap::{App, AppSettings, Arg, ErrorKind};
use log::{error, info, LevelFilter};
use std::{ffi::OsString, str::FromStr, sync::Once, time::SystemTime};
use sysinfo::System;

static LOGGER_INIT: Once = Once::new();

const ARG_LOGGING_LEVEL: &str = "LOGGING_LEVEL";

/// The `--logging-level` argument shared by all the commands.
pub(crate) fn logging_level_cli_arg<'a>() -> Arg<'a, 'a> {
    Arg::with_name(ARG_LOGGING_LEVEL)
        .long("logging-level")
        .multiple(false)
        .default_value("info")
        .possible_values(&["trace", "debug", "info", "warn", "error", "off"])
        .help("set the minimal logging level")
}

/// Dispatches the command line to the registered commands.
///
/// If the selected command fails, its error chain is logged and the process exits with status 1.
pub(crate) struct AppHelper<'a> {
    name: &'a str,
    version: &'a str,
    author: &'a str,
    about: &'a str,
    commands: Vec<Box<dyn Command<'a>>>,
}

impl<'a> AppHelper<'a> {
    pub(crate) fn new(name: &'a str, version: &'a str, author: &'a str, about: &'a str) -> Self {
        AppHelper {
            name,
            version,
            author,
            about,
            commands: vec![],
        }
    }

    pub(crate) fn add_command(&mut self, command: Box<dyn Command<'a>>) {
        self.commands.push(command);
    }

    /// Runs the app on `std::env::args_os()`.
    pub(crate) fn launch_app(self) {
        if let Err(e) = self.execute_app(std::env::args_os()) {
            error!("an error occurred: {}", e);
            e.chain()
                .skip(1)
                .for_each(|err| error!("caused by: {}", err));
            std::process::exit(1);
        }
    }

    fn execute_app<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let start_time = SystemTime::now();
        let app = self.commands.iter().fold(
            App::new(self.name)
                .global_setting(AppSettings::DisableVersion)
                .global_setting(AppSettings::VersionlessSubcommands)
                .setting(AppSettings::SubcommandRequired)
                .version(self.version)
                .author(self.author)
                .about(self.about),
            |app, c| app.subcommand(c.clap_subcommand()),
        );
        let matches = match app.get_matches_from_safe(args) {
            Ok(m) => m,
            Err(e) if e.kind == ErrorKind::HelpDisplayed => {
                init_logger(LevelFilter::Info);
                e.message.lines().for_each(|l| info!("{}", l));
                return Ok(());
            }
            Err(e) => {
                init_logger(LevelFilter::Info);
                return Err(anyhow!("{}", e));
            }
        };
        let (name, sub_matches) = matches.subcommand();
        let sub_matches = sub_matches.ok_or_else(|| anyhow!("no command given"))?;
        let command = self
            .commands
            .iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| anyhow!(r#"unknown command "{}""#, name))?;
        let level = sub_matches
            .value_of(ARG_LOGGING_LEVEL)
            .and_then(|l| LevelFilter::from_str(l).ok())
            .unwrap_or(LevelFilter::Info);
        init_logger(level);
        info!("{} {}", self.name, self.version);
        log_system_summary();
        command.execute(sub_matches)?;
        info!(
            "exiting successfully after {:?}",
            start_time.elapsed().unwrap_or_default()
        );
        Ok(())
    }
}

/// Initializes the logger; only the first call has an effect.
///
/// Logs are written on the standard error, leaving the standard output to the tables.
pub(crate) fn init_logger(level: LevelFilter) {
    LOGGER_INIT.call_once(|| {
        let colors = fern::colors::ColoredLevelConfig::new().info(fern::colors::Color::Cyan);
        fern::Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "![{:5}] {} {}",
                    colors.color(record.level()),
                    chrono::Local::now().format("[%Y-%m-%d %H:%M:%S]"),
                    message
                ))
            })
            .level(level)
            .chain(std::io::stderr())
            .apply()
            .unwrap_or(());
    });
}

fn log_system_summary() {
    let sys = System::new_all();
    let unknown = || "[unknown]".to_string();
    let mut cpu_brands = sys.cpus().iter().map(|c| c.brand()).collect::<Vec<_>>();
    cpu_brands.sort_unstable();
    cpu_brands.dedup();
    info!(
        "host {} running {} {} (kernel {}), {} logical core(s) {:?}, {} KB of memory",
        System::host_name().unwrap_or_else(unknown),
        System::name().unwrap_or_else(unknown),
        System::os_version().unwrap_or_else(unknown),
        System::kernel_version().unwrap_or_else(unknown),
        sys.cpus().len(),
        cpu_brands,
        sys.total_memory() / 1024
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{ArgMatches, SubCommand};

    struct FailingCommand;

    impl<'a> Command<'a> for FailingCommand {
        fn name(&self) -> &str {
            "run"
        }

        fn clap_subcommand(&self) -> App<'a, 'a> {
            SubCommand::with_name("run")
                .about("runs")
                .arg(Arg::with_name("fail").short("x"))
                .arg(logging_level_cli_arg())
        }

        fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
            if arg_matches.is_present("fail") {
                Err(anyhow!("failed on request"))
            } else {
                Ok(())
            }
        }
    }

    fn helper() -> AppHelper<'static> {
        let mut h = AppHelper::new("app", "0.0.0", "author", "about");
        h.add_command(Box::new(FailingCommand));
        h
    }

    #[test]
    fn test_no_args() {
        helper()
            .execute_app(vec![] as Vec<&'static str>)
            .unwrap_err();
    }

    #[test]
    fn test_no_subcommand() {
        helper().execute_app(vec!["app"]).unwrap_err();
    }

    #[test]
    fn test_unknown_subcommand() {
        helper().execute_app(vec!["app", "foo"]).unwrap_err();
    }

    #[test]
    fn test_subcommand_ok() {
        helper().execute_app(vec!["app", "run"]).unwrap();
    }

    #[test]
    fn test_subcommand_err() {
        let err = helper().execute_app(vec!["app", "run", "-x"]).unwrap_err();
        assert_eq!("failed on request", err.to_string());
    }

    #[test]
    fn test_logging_level_arg() {
        helper()
            .execute_app(vec!["app", "run", "--logging-level", "off"])
            .unwrap();
        helper()
            .execute_app(vec!["app", "run", "--logging-level", "loud"])
            .unwrap_err();
    }

    #[test]
    fn test_help() {
        helper().execute_app(vec!["app", "-h"]).unwrap();
        helper().execute_app(vec!["app", "help", "run"]).unwrap();
        helper().execute_app(vec!["app", "run", "-h"]).unwrap();
    }
}
