//! asptab converts the answer sets printed by ASP solvers into tables.
//!
//! The decoding pipeline is made of three steps:
//!   * the terms of a solver output line are split by [`split_terms`](parsing::split_terms),
//!   * answer sets are decoded by an [`AnswerSetDecoder`](parsing::AnswerSetDecoder), either from flat lines or from solver transcripts,
//!   * a [`Table`](table::Table) is built from the decoded answer sets.
//!
//! Tables are then given to a [`TableWriter`](io::TableWriter).

#![warn(missing_docs)]

pub mod io;

pub mod parsing;

pub mod table;
