use super::warning_result::WarningResult;
use std::fmt::Display;

/// The literal used by solvers to denote an unbounded cost or weight.
pub const INFINITY_SENTINEL: &str = "#inf";

/// A cost or a weight read from an answer set.
///
/// Values are expected to be integers.
/// The infinity sentinel [`INFINITY_SENTINEL`] is read as the integer `0`.
/// Values that cannot be read as integers are kept as their raw literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// An integer value
    Int(i64),
    /// A literal that could not be read as an integer
    Literal(String),
}

impl Value {
    /// Returns the integer held by this value, if any.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            Value::Literal(_) => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Literal(s) => write!(f, "{}", s),
        }
    }
}

pub(crate) fn read_value(text: &str) -> WarningResult<Value, String> {
    let trimmed = text.trim();
    if trimmed == INFINITY_SENTINEL {
        return WarningResult::Ok(Value::Int(0));
    }
    match trimmed.parse::<i64>() {
        Ok(i) => WarningResult::Ok(Value::Int(i)),
        Err(_) => WarningResult::Warned(
            Value::Literal(trimmed.to_string()),
            vec![format!(
                r#"value "{}" is not an integer; keeping it as a literal"#,
                trimmed
            )],
        ),
    }
}
