pub(crate) mod app_helper;

mod authors_command;
pub(crate) use authors_command::AuthorsCommand;

mod check_command;
pub(crate) use check_command::CheckCommand;

pub(crate) mod command;

pub(crate) mod common;

mod convert_command;
pub(crate) use convert_command::ConvertCommand;
