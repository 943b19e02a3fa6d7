//! The tables built from decoded answer sets.

mod answer_table;
pub use answer_table::Cell;
pub use answer_table::Table;
pub use answer_table::COST_COLUMN;
pub use answer_table::SEQUENCE_COLUMN;
