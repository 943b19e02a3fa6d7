use super::Value;
use std::collections::{BTreeMap, BTreeSet};

/// A decoded answer set.
///
/// An answer set is made of:
///   * its sequence number, given by its position in the solver output,
///   * the set of included atoms, that is the arguments of the `in/1` terms,
///   * an optional cost, given by the `extension_cost/1` term,
///   * the weights of the actions, given by the `supported_with_weight/2` terms.
///
/// Answer sets are immutable once decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSet {
    sequence: usize,
    included: BTreeSet<String>,
    cost: Option<Value>,
    action_weights: BTreeMap<String, Value>,
}

impl AnswerSet {
    /// Builds an answer set from its components.
    ///
    /// # Example
    ///
    /// ```
    /// # use asptab::parsing::{AnswerSet, Value};
    /// let answer_set = AnswerSet::new(
    ///     1,
    ///     ["a".to_string()].into_iter().collect(),
    ///     Some(Value::Int(2)),
    ///     [("action(x)".to_string(), Value::Int(3))].into_iter().collect(),
    /// );
    /// assert!(answer_set.includes("a"));
    /// ```
    pub fn new(
        sequence: usize,
        included: BTreeSet<String>,
        cost: Option<Value>,
        action_weights: BTreeMap<String, Value>,
    ) -> Self {
        AnswerSet {
            sequence,
            included,
            cost,
            action_weights,
        }
    }

    pub(crate) fn new_empty(sequence: usize) -> Self {
        AnswerSet::new(sequence, BTreeSet::new(), None, BTreeMap::new())
    }

    pub(crate) fn add_included(&mut self, atom: &str) {
        self.included.insert(atom.to_string());
    }

    pub(crate) fn set_cost(&mut self, cost: Value) {
        self.cost = Some(cost);
    }

    pub(crate) fn set_action_weight(&mut self, action: &str, weight: Value) {
        self.action_weights.insert(action.to_string(), weight);
    }

    /// Returns the sequence number of this answer set.
    pub fn sequence(&self) -> usize {
        self.sequence
    }

    /// Iterates over the included atoms, in lexicographic order.
    pub fn iter_included(&self) -> impl Iterator<Item = &str> + '_ {
        self.included.iter().map(|s| s.as_str())
    }

    /// Returns `true` iff the atom is included in this answer set.
    pub fn includes(&self, atom: &str) -> bool {
        self.included.contains(atom)
    }

    /// Returns the number of included atoms.
    pub fn n_included(&self) -> usize {
        self.included.len()
    }

    /// Returns the cost, if any.
    pub fn cost(&self) -> Option<&Value> {
        self.cost.as_ref()
    }

    /// Iterates over the actions and their weights, in lexicographic order of the actions.
    pub fn iter_action_weights(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.action_weights.iter().map(|(a, w)| (a.as_str(), w))
    }

    /// Returns the weight of an action, if this answer set gives one.
    pub fn action_weight(&self, action: &str) -> Option<&Value> {
        self.action_weights.get(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_semantics() {
        let mut a = AnswerSet::new_empty(1);
        a.add_included("p");
        a.add_included("q");
        a.add_included("p");
        assert_eq!(2, a.n_included());
        assert_eq!(vec!["p", "q"], a.iter_included().collect::<Vec<_>>());
        assert!(a.includes("q"));
        assert!(!a.includes("r"));
    }

    #[test]
    fn test_last_weight_wins() {
        let mut a = AnswerSet::new_empty(1);
        a.set_action_weight("action(a)", Value::Int(1));
        a.set_action_weight("action(a)", Value::Int(2));
        assert_eq!(Some(&Value::Int(2)), a.action_weight("action(a)"));
        assert_eq!(None, a.action_weight("action(b)"));
    }

    #[test]
    fn test_no_cost() {
        let a = AnswerSet::new_empty(3);
        assert_eq!(3, a.sequence());
        assert_eq!(None, a.cost());
    }
}
