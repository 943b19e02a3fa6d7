use thiserror::Error;

/// The errors raised while decoding solver outputs.
///
/// Lenient conditions (non-numeric costs or weights, weighted terms without a top-level comma) are never reported as errors;
/// see [`AnswerSetDecoder`](crate::parsing::AnswerSetDecoder) for the way they are handled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodingError {
    /// A term has unbalanced parentheses (or an unterminated string constant).
    ///
    /// The offset is the byte index of the beginning of the faulty term in the decoded text,
    /// and `term` is the text of the term from this offset.
    #[error("malformed term at offset {offset}: \"{term}\"")]
    MalformedTerm {
        /// the byte offset of the term
        offset: usize,
        /// the text of the faulty term
        term: String,
    },
    /// A solver transcript contains no `Answer:` block.
    #[error("no Answer blocks found")]
    NoAnswerBlocksFound,
}
