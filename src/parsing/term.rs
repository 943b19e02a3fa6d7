use super::DecodingError;
use std::{fmt::Display, iter::Peekable, str::CharIndices};

/// A predicate occurrence read from a solver output line.
///
/// A term is written `name` or `name(args)`, where `args` is the untouched text between the outermost matching parentheses.
/// Terms borrow their text from the line they were read from.
///
/// # Example
///
/// ```
/// # use asptab::parsing::split_terms;
/// let terms = split_terms("in(a) supported_with_weight(action(move(x,y)), 3)").unwrap();
/// assert_eq!("in", terms[0].name());
/// assert_eq!(Some("a"), terms[0].args());
/// assert_eq!(Some("action(move(x,y)), 3"), terms[1].args());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Term<'a> {
    text: &'a str,
    name_len: usize,
}

impl<'a> Term<'a> {
    fn new(text: &'a str, name_len: usize) -> Self {
        Term { text, name_len }
    }

    /// Returns the name of the predicate.
    pub fn name(&self) -> &'a str {
        &self.text[..self.name_len]
    }

    /// Returns the text between the outermost parentheses, or `None` for a bare term.
    pub fn args(&self) -> Option<&'a str> {
        if self.text.len() == self.name_len {
            None
        } else {
            Some(&self.text[1 + self.name_len..self.text.len() - 1])
        }
    }

    /// Returns the whole text of the term.
    pub fn as_str(&self) -> &'a str {
        self.text
    }
}

impl Display for Term<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Tracks the parenthesis depth of a text read character by character.
///
/// Parentheses appearing inside double-quoted string constants are not counted.
#[derive(Default)]
struct Nesting {
    depth: usize,
    in_string: bool,
    escaped: bool,
}

impl Nesting {
    /// Updates the state with the next character.
    ///
    /// A closing parenthesis at depth zero leaves the depth unchanged.
    fn feed(&mut self, c: char) {
        if self.in_string {
            if self.escaped {
                self.escaped = false;
            } else if c == '\\' {
                self.escaped = true;
            } else if c == '"' {
                self.in_string = false;
            }
            return;
        }
        match c {
            '"' => self.in_string = true,
            '(' => self.depth += 1,
            ')' => self.depth = self.depth.saturating_sub(1),
            _ => {}
        }
    }

    fn is_top_level(&self) -> bool {
        self.depth == 0 && !self.in_string
    }
}

/// Splits a line of solver output into its top-level terms, from left to right.
///
/// Whitespace separates terms.
/// A term name is a maximal run of alphanumeric characters and underscores, possibly preceded by a `-` for classical negation;
/// if an opening parenthesis immediately follows the name, the argument list is captured up to the matching closing parenthesis, nested parentheses included.
/// Characters that can neither start a name nor an argument list (such as the final period of a line) are treated as separators.
///
/// An error is returned if an argument list is not closed before the end of the text, or if a closing parenthesis appears outside any term.
///
/// # Example
///
/// ```
/// # use asptab::parsing::split_terms;
/// let terms = split_terms("in(a) in(b).").unwrap();
/// assert_eq!(
///     vec!["in(a)", "in(b)"],
///     terms.iter().map(|t| t.as_str()).collect::<Vec<_>>()
/// );
/// assert!(split_terms("foo(bar, baz").is_err());
/// ```
pub fn split_terms(text: &str) -> Result<Vec<Term<'_>>, DecodingError> {
    let mut terms = Vec::new();
    let mut chars = text.char_indices().peekable();
    while let Some(&(start, c)) = chars.peek() {
        if c == ')' {
            return Err(malformed_term(text, start));
        }
        let negated = c == '-' && text[start + 1..].starts_with(is_name_char);
        if !negated && !is_name_char(c) && c != '(' {
            chars.next();
            continue;
        }
        let mut end = start;
        if negated {
            chars.next();
            end += 1;
        }
        while let Some(&(i, c)) = chars.peek() {
            if !is_name_char(c) {
                break;
            }
            end = i + c.len_utf8();
            chars.next();
        }
        let name_len = end - start;
        if let Some(&(_, '(')) = chars.peek() {
            end = read_argument_list(text, start, &mut chars)?;
        }
        terms.push(Term::new(&text[start..end], name_len));
    }
    Ok(terms)
}

fn read_argument_list(
    text: &str,
    term_start: usize,
    chars: &mut Peekable<CharIndices>,
) -> Result<usize, DecodingError> {
    let mut nesting = Nesting::default();
    for (i, c) in chars.by_ref() {
        nesting.feed(c);
        if nesting.is_top_level() {
            return Ok(i + c.len_utf8());
        }
    }
    Err(malformed_term(text, term_start))
}

fn malformed_term(text: &str, offset: usize) -> DecodingError {
    DecodingError::MalformedTerm {
        offset,
        term: text[offset..].to_string(),
    }
}

/// Splits a text at its first top-level comma, that is the first comma which is not nested in parentheses or in a string constant.
///
/// Returns the parts before and after the comma, or `None` if there is no such comma.
///
/// # Example
///
/// ```
/// # use asptab::parsing::split_at_top_level_comma;
/// assert_eq!(
///     Some(("action(move(x,y))", " 3")),
///     split_at_top_level_comma("action(move(x,y)), 3")
/// );
/// assert_eq!(None, split_at_top_level_comma("action(move(x,y))"));
/// ```
pub fn split_at_top_level_comma(text: &str) -> Option<(&str, &str)> {
    let mut nesting = Nesting::default();
    for (i, c) in text.char_indices() {
        if c == ',' && nesting.is_top_level() {
            return Some((&text[..i], &text[i + 1..]));
        }
        nesting.feed(c);
    }
    None
}

/// Returns the leading name of a term text, that is its longest prefix made of alphanumeric characters and underscores.
pub(crate) fn leading_name(text: &str) -> &str {
    let end = text.find(|c| !is_name_char(c)).unwrap_or(text.len());
    &text[..end]
}
