use super::{app_helper, command::Command, common};
use anyhow::Result;
use asptab::{parsing::Value, table::Table};
use clap::{App, AppSettings, ArgMatches, SubCommand};
use log::{debug, info};

const CMD_NAME: &str = "check";

pub(crate) struct CheckCommand;

impl CheckCommand {
    pub(crate) fn new() -> Self {
        CheckCommand
    }
}

impl<'a> Command<'a> for CheckCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Checks a solver output for errors")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_arg())
            .args(&common::decoding_args())
            .arg(app_helper::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let answer_sets = common::decode_input(arg_matches)?;
        for a in answer_sets.iter() {
            debug!(
                "answer set {} has {} atom(s), {} weighted action(s) and cost {}",
                a.sequence(),
                a.n_included(),
                a.iter_action_weights().count(),
                a.cost()
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "[none]".to_string()),
            );
        }
        let table = Table::from_answer_sets(&answer_sets);
        info!(
            "the solver output has {} answer set(s), {} distinct atom(s) and {} distinct action(s)",
            table.n_rows(),
            table.atom_columns().len(),
            table.action_columns().len(),
        );
        let lowest_cost = answer_sets
            .iter()
            .filter_map(|a| a.cost().and_then(Value::as_int))
            .min();
        if let Some(c) = lowest_cost {
            info!("the lowest integer cost is {}", c);
        }
        Ok(())
    }
}
