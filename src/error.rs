use thiserror::Error;

/// Malformed input detected while turning text into an [`ASTNode`](crate::ast::ASTNode).
///
/// Positions are byte offsets into the source string.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("unexpected end of input at position {position}")]
    UnexpectedEnd { position: usize },

    #[error("unexpected token `{found}` at position {position}")]
    UnexpectedToken { found: String, position: usize },

    #[error("unmatched parenthesis at position {position}")]
    UnmatchedParenthesis { position: usize },

    #[error("malformed number literal `{0}`")]
    MalformedNumber(String),

    #[error("unsupported expression: {0}")]
    Unsupported(String),
}

/// Failures raised while folding a parsed tree into a value.
///
/// Names are reported lowercased, the form they were looked up in.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("unknown identifier `{0}`")]
    UnknownIdentifier(String),

    #[error("unknown function `{0}`")]
    UnknownFunction(String),

    #[error("function `{0}` expects {1} argument(s), but {2} were provided")]
    ArityMismatch(String, usize, usize),

    #[error("unknown operator `{0}`")]
    UnknownOperator(String),
}

/// Error returned by [`calculate`](crate::calculate): whichever phase failed first.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}
