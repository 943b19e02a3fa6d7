//! Objects used to decode the answer sets printed by ASP solvers.

mod answer_set;
pub use answer_set::AnswerSet;

mod blocks;
pub use blocks::extract_answer_blocks;
pub use blocks::AnswerBlock;

mod decoder;
pub use decoder::AnswerSetDecoder;
pub use decoder::MalformedRecordPolicy;
pub use decoder::WarningHandler;
pub use decoder::ACTION_NAME;
pub use decoder::COST_PREDICATE;
pub use decoder::DEFAULT_WEIGHT_PREDICATE;
pub use decoder::INCLUDED_PREDICATE;

mod error;
pub use error::DecodingError;

mod term;
pub use term::split_at_top_level_comma;
pub use term::split_terms;
pub use term::Term;

mod value;
pub use value::Value;
pub use value::INFINITY_SENTINEL;

mod warning_result;
