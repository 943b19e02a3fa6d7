use crate::parsing::{AnswerSet, Value, INCLUDED_PREDICATE};
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

/// The name of the column holding the sequence numbers of the answer sets.
pub const SEQUENCE_COLUMN: &str = "sequence";

/// The name of the column holding the costs of the answer sets.
pub const COST_COLUMN: &str = "cost";

/// A cell of a [`Table`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    /// An integer
    Int(i64),
    /// A literal that could not be read as an integer
    Literal(String),
    /// No value, as for the cost of answer sets without an `extension_cost` term
    Empty,
}

impl From<&Value> for Cell {
    fn from(value: &Value) -> Self {
        match value {
            Value::Int(i) => Cell::Int(*i),
            Value::Literal(s) => Cell::Literal(s.clone()),
        }
    }
}

/// A row-oriented table built from a list of answer sets.
///
/// The columns are, in this order:
///   * the sequence number of the answer set,
///   * its cost,
///   * one column per atom included in at least one answer set, sorted in lexicographic order,
///   * one column per action weighted in at least one answer set, sorted in lexicographic order.
///
/// Column names are unique.
/// An atom whose name is already used by another column is named `in(<atom>)` instead, as many times as needed.
///
/// There is one row per answer set, sorted by sequence number.
/// Sequence numbers that do not fit in an `i64` are written as literals.
/// Atom cells are `1` if the answer set includes the atom, `0` otherwise.
/// Action cells hold the weight of the action in the answer set, or `0` if it has none.
///
/// # Example
///
/// ```
/// # use asptab::parsing::{AnswerSetDecoder, MalformedRecordPolicy};
/// # use asptab::table::{Cell, Table};
/// let decoder = AnswerSetDecoder::default();
/// let answer_sets = decoder
///     .decode_lines("in(b) extension_cost(1)\nin(a) supported_with_weight(action(x), 2)", MalformedRecordPolicy::Abort)
///     .unwrap();
/// let table = Table::from_answer_sets(&answer_sets);
/// assert_eq!(vec!["sequence", "cost", "a", "b", "action(x)"], table.columns());
/// assert_eq!(
///     vec![Cell::Int(2), Cell::Empty, Cell::Int(1), Cell::Int(0), Cell::Int(2)],
///     table.rows()[1]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
    #[serde(skip)]
    n_atoms: usize,
}

impl Table {
    /// Builds the table associated with a list of answer sets.
    ///
    /// The result only depends on the answer sets, not on their order in the slice.
    pub fn from_answer_sets(answer_sets: &[AnswerSet]) -> Self {
        let atoms = answer_sets
            .iter()
            .flat_map(|a| a.iter_included())
            .collect::<BTreeSet<&str>>();
        let actions = answer_sets
            .iter()
            .flat_map(|a| a.iter_action_weights().map(|(action, _)| action))
            .collect::<BTreeSet<&str>>();
        let mut sorted = answer_sets.iter().collect::<Vec<&AnswerSet>>();
        sorted.sort_by_key(|a| a.sequence());
        let rows = sorted
            .iter()
            .map(|a| {
                let mut row = Vec::with_capacity(2 + atoms.len() + actions.len());
                row.push(sequence_cell(a.sequence()));
                row.push(a.cost().map(Cell::from).unwrap_or(Cell::Empty));
                row.extend(atoms.iter().map(|atom| Cell::Int(a.includes(atom) as i64)));
                row.extend(actions.iter().map(|action| {
                    a.action_weight(action)
                        .map(Cell::from)
                        .unwrap_or(Cell::Int(0))
                }));
                row
            })
            .collect();
        let mut taken = [SEQUENCE_COLUMN, COST_COLUMN]
            .iter()
            .chain(actions.iter())
            .map(|s| s.to_string())
            .collect::<HashSet<String>>();
        let mut columns = vec![SEQUENCE_COLUMN.to_string(), COST_COLUMN.to_string()];
        for atom in atoms.iter() {
            let mut name = atom.to_string();
            while taken.contains(&name) {
                name = format!("{}({})", INCLUDED_PREDICATE, name);
            }
            taken.insert(name.clone());
            columns.push(name);
        }
        columns.extend(actions.iter().map(|s| s.to_string()));
        Table {
            columns,
            rows,
            n_atoms: atoms.len(),
        }
    }

    /// Returns the column names.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the names of the atom columns.
    pub fn atom_columns(&self) -> &[String] {
        &self.columns[2..2 + self.n_atoms]
    }

    /// Returns the names of the action columns.
    pub fn action_columns(&self) -> &[String] {
        &self.columns[2 + self.n_atoms..]
    }

    /// Returns the rows.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Returns the number of rows.
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

}

fn sequence_cell(sequence: usize) -> Cell {
    i64::try_from(sequence)
        .map(Cell::Int)
        .unwrap_or_else(|_| Cell::Literal(sequence.to_string()))
}
