//! Parse error types for the script boundary

/// Errors raised while turning script source into a syntax tree.
///
/// These are fatal to the analysis pass that triggered them and are
/// surfaced to the caller unchanged.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ParseError {
    /// Parser could not be initialized with the script grammar
    #[error("parser initialization failed: {0}")]
    ParserInit(String),

    /// Parser returned no tree at all
    #[error("parse failed")]
    ParseFailed,

    /// Source text is not syntactically valid
    #[error("syntax error at {line}:{column}")]
    Syntax {
        /// 1-based line of the first error node
        line: usize,
        /// 0-based column of the first error node
        column: usize,
    },
}
