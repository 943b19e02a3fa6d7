use super::{
    blocks::extract_answer_blocks,
    term::{leading_name, split_at_top_level_comma, split_terms},
    value::read_value,
    warning_result::WarningResult,
    AnswerSet, DecodingError, Term, Value,
};

/// The type of callback functions to call when warnings are raised while decoding answer sets.
///
/// The first parameter is the sequence number of the answer set, the second one is the warning message.
pub type WarningHandler = Box<dyn Fn(usize, String)>;

/// The predicate giving the atoms included in an answer set.
pub const INCLUDED_PREDICATE: &str = "in";

/// The predicate giving the cost of an answer set.
pub const COST_PREDICATE: &str = "extension_cost";

/// The default predicate giving the weight of an action.
pub const DEFAULT_WEIGHT_PREDICATE: &str = "supported_with_weight";

/// The name of the terms considered as actions by weight predicates.
pub const ACTION_NAME: &str = "action";

/// What to do with an answer set containing a malformed term.
///
/// There is no default policy: it must be chosen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedRecordPolicy {
    /// Stop decoding and return the error.
    Abort,
    /// Report the error to the warning handlers and go on with the next answer set.
    Skip,
}

/// A decoder for the answer sets produced by ASP solvers.
///
/// Two input shapes are handled:
///   * flat lines, in which each line is an answer set ([`decode_answer_set`](Self::decode_answer_set), [`decode_lines`](Self::decode_lines)),
///   * solver transcripts, in which answer sets follow `Answer:` markers ([`decode_transcript`](Self::decode_transcript)).
///
/// The terms of an answer set are interpreted this way:
///   * `in(x)` adds `x` to the included atoms,
///   * `extension_cost(c)` sets the cost,
///   * `supported_with_weight(action(...), w)` sets the weight of an action.
///
/// Other terms are ignored.
/// Costs and weights equal to `#inf` are read as `0`; the other ones that are not integers are kept as literals.
/// Weighted terms with no top-level comma or whose first argument is not an action are dropped.
///
/// These lenient behaviors are silent by default.
/// In strict mode, each of them raises a warning that is given to the registered warning handlers.
///
/// # Example
///
/// ```
/// # use asptab::parsing::{AnswerSetDecoder, Value};
/// let decoder = AnswerSetDecoder::default();
/// let answer_set = decoder
///     .decode_answer_set("in(p) in(q) extension_cost(#inf) supported_with_weight(action(a1), 5)", 1)
///     .unwrap();
/// assert_eq!(vec!["p", "q"], answer_set.iter_included().collect::<Vec<_>>());
/// assert_eq!(Some(&Value::Int(0)), answer_set.cost());
/// assert_eq!(Some(&Value::Int(5)), answer_set.action_weight("action(a1)"));
/// ```
pub struct AnswerSetDecoder {
    strict: bool,
    weight_predicates: Vec<String>,
    warning_handlers: Vec<WarningHandler>,
}

impl Default for AnswerSetDecoder {
    fn default() -> Self {
        AnswerSetDecoder {
            strict: false,
            weight_predicates: vec![DEFAULT_WEIGHT_PREDICATE.to_string()],
            warning_handlers: vec![],
        }
    }
}

impl AnswerSetDecoder {
    /// Sets the strict mode, in which lenient behaviors raise warnings.
    pub fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
    }

    /// Adds a predicate whose terms give the weight of an action, in addition to `supported_with_weight`.
    ///
    /// The terms of this predicate must follow the same pattern, e.g. `weight_of_atom(action(a), 3)`.
    pub fn add_weight_predicate(&mut self, predicate: &str) {
        if !self.weight_predicates.iter().any(|p| p == predicate) {
            self.weight_predicates.push(predicate.to_string());
        }
    }

    /// Adds a callback function to call when warnings are raised.
    pub fn add_warning_handler(&mut self, h: WarningHandler) {
        self.warning_handlers.push(h);
    }

    /// Decodes a single answer set given as a flat line of terms.
    ///
    /// An error is returned if the line contains a malformed term.
    pub fn decode_answer_set(&self, line: &str, sequence: usize) -> Result<AnswerSet, DecodingError> {
        let mut answer_set = AnswerSet::new_empty(sequence);
        for term in split_terms(line)? {
            match (term.name(), term.args()) {
                (_, None) => {}
                (INCLUDED_PREDICATE, Some(atom)) => answer_set.add_included(atom),
                (COST_PREDICATE, Some(cost)) => {
                    let value = self.consume_warnings(sequence, read_value(cost));
                    answer_set.set_cost(value);
                }
                (name, Some(inner)) if self.is_weight_predicate(name) => {
                    let weighted_action =
                        self.consume_warnings(sequence, read_weighted_action(&term, inner));
                    if let Some((action, weight)) = weighted_action {
                        answer_set.set_action_weight(action, weight);
                    }
                }
                _ => {}
            }
        }
        Ok(answer_set)
    }

    /// Decodes a text in which each non-blank line is an answer set.
    ///
    /// Answer sets are numbered from 1, in the order of the non-blank lines.
    pub fn decode_lines(
        &self,
        text: &str,
        policy: MalformedRecordPolicy,
    ) -> Result<Vec<AnswerSet>, DecodingError> {
        let lines = text.lines().filter(|l| !l.trim().is_empty());
        self.decode_all(lines.enumerate().map(|(i, l)| (1 + i, l)), policy)
    }

    /// Decodes a solver transcript, in which answer sets are introduced by `Answer:` markers.
    ///
    /// See [`extract_answer_blocks`](crate::parsing::extract_answer_blocks) for the way blocks are delimited.
    /// Answer sets are numbered by the ordinal following their `Answer:` marker, or by their position if it is missing.
    /// They are returned in the order they appear in the transcript.
    ///
    /// An error is returned if the transcript contains no `Answer:` block.
    pub fn decode_transcript(
        &self,
        text: &str,
        policy: MalformedRecordPolicy,
    ) -> Result<Vec<AnswerSet>, DecodingError> {
        let blocks = extract_answer_blocks(text);
        if blocks.is_empty() {
            return Err(DecodingError::NoAnswerBlocksFound);
        }
        self.decode_all(
            blocks
                .iter()
                .enumerate()
                .map(|(i, b)| (b.ordinal().unwrap_or(1 + i), b.content())),
            policy,
        )
    }

    fn decode_all<'a, I>(
        &self,
        sources: I,
        policy: MalformedRecordPolicy,
    ) -> Result<Vec<AnswerSet>, DecodingError>
    where
        I: Iterator<Item = (usize, &'a str)>,
    {
        let mut answer_sets = Vec::new();
        for (sequence, text) in sources {
            match (self.decode_answer_set(text, sequence), policy) {
                (Ok(a), _) => answer_sets.push(a),
                (Err(e), MalformedRecordPolicy::Abort) => return Err(e),
                (Err(e), MalformedRecordPolicy::Skip) => {
                    self.notify(sequence, format!("skipping answer set: {}", e))
                }
            }
        }
        Ok(answer_sets)
    }

    fn is_weight_predicate(&self, name: &str) -> bool {
        self.weight_predicates.iter().any(|p| p == name)
    }

    fn consume_warnings<T>(&self, sequence: usize, result: WarningResult<T, String>) -> T {
        result.consume_warnings(|warnings| {
            if self.strict {
                warnings.into_iter().for_each(|w| self.notify(sequence, w));
            }
        })
    }

    fn notify(&self, sequence: usize, message: String) {
        self.warning_handlers
            .iter()
            .for_each(|h| (h)(sequence, message.clone()));
    }
}

fn read_weighted_action<'a>(
    term: &Term,
    inner: &'a str,
) -> WarningResult<Option<(&'a str, Value)>, String> {
    let (action, weight) = match split_at_top_level_comma(inner) {
        Some((a, w)) => (a.trim(), w),
        None => {
            return WarningResult::Warned(
                None,
                vec![format!(r#"no top-level comma in "{}"; ignoring it"#, term)],
            )
        }
    };
    if leading_name(action) != ACTION_NAME || !action[ACTION_NAME.len()..].starts_with('(') {
        return WarningResult::Ok(None);
    }
    read_value(weight).map(|w| Some((action, w)))
}
