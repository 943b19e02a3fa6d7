use lazy_static::lazy_static;
use regex::Regex;

const ANSWER_MARKER: &str = "Answer:";
const END_MARKERS: [&str; 2] = ["SATISFIABLE", "UNSATISFIABLE"];

lazy_static! {
    static ref ANSWER_LINE_PATTERN: Regex = Regex::new(r"^Answer:\s*(\d+)?\s*(.*)$").unwrap();
}

/// The text of an answer set, as found in a solver transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerBlock {
    ordinal: Option<usize>,
    content: String,
}

impl AnswerBlock {
    /// Returns the number written after the `Answer:` marker, if it could be read.
    pub fn ordinal(&self) -> Option<usize> {
        self.ordinal
    }

    /// Returns the content of the block, its lines being joined by spaces.
    pub fn content(&self) -> &str {
        &self.content
    }

    fn push_line(&mut self, line: &str) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return;
        }
        if !self.content.is_empty() {
            self.content.push(' ');
        }
        self.content.push_str(trimmed);
    }
}

/// Extracts the answer blocks of a solver transcript.
///
/// A block begins at a line starting with `Answer:`, optionally followed by the ordinal of the answer set.
/// It ends at the next such line or at the end of the input.
/// The first line starting with `SATISFIABLE` or `UNSATISFIABLE` ends the transcript: nothing after it is read.
/// Lines preceding the first block are ignored.
/// Blank lines inside a block do not end it: the content of a block is the concatenation of its lines.
///
/// # Example
///
/// ```
/// # use asptab::parsing::extract_answer_blocks;
/// let transcript = "clingo version 5.6.2\nSolving...\nAnswer: 1\nin(a)\nAnswer: 2\nin(b) in(c)\nSATISFIABLE\n";
/// let blocks = extract_answer_blocks(transcript);
/// assert_eq!(2, blocks.len());
/// assert_eq!(Some(2), blocks[1].ordinal());
/// assert_eq!("in(b) in(c)", blocks[1].content());
/// ```
pub fn extract_answer_blocks(text: &str) -> Vec<AnswerBlock> {
    let mut blocks: Vec<AnswerBlock> = Vec::new();
    for line in text.lines() {
        if END_MARKERS.iter().any(|m| line.starts_with(m)) {
            break;
        }
        if line.starts_with(ANSWER_MARKER) {
            let captures = ANSWER_LINE_PATTERN.captures(line);
            let ordinal = captures
                .as_ref()
                .and_then(|c| c.get(1))
                .and_then(|m| m.as_str().parse::<usize>().ok());
            let mut block = AnswerBlock {
                ordinal,
                content: String::new(),
            };
            if let Some(rest) = captures.as_ref().and_then(|c| c.get(2)) {
                block.push_line(rest.as_str());
            }
            blocks.push(block);
            continue;
        }
        if let Some(block) = blocks.last_mut() {
            block.push_line(line);
        }
    }
    blocks
}
