use crate::token::Pos;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unrecognized character `{}` at offset {}", .ch.escape_debug(), .pos.offset)]
pub struct LexError {
    pub ch: char,
    pub pos: Pos,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Expected a valid instruction")]
    InvalidInstruction(usize),

    #[error("Missing label: `{0}`")]
    MissingLabel(String),

    #[error("Re-defined label: `{0}`")]
    DuplicateLabel(String, usize),
}

/// Broken invariant between the parser and the code generator.
/// Never caused by user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Fault {
    #[error("Backpatch target `{0}` has no address")]
    UnresolvedLabel(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Internal error: {0}")]
    Internal(#[from] Fault),

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),

    #[error("Failed to serialize symbols")]
    Symbols(#[from] serde_yaml::Error),
}

impl Error {
    /// 1-based source line the error points at, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Lex(e) => Some(e.pos.line),
            Error::Parse(ParseError::InvalidInstruction(line)) => Some(*line),
            Error::Parse(ParseError::DuplicateLabel(_, line)) => Some(*line),
            _ => None,
        }
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, Error::Internal(_))
    }

    /// Process exit status: 101 for an internal fault, 1 for everything else.
    pub fn status(&self) -> i32 {
        if self.is_internal() {
            101
        } else {
            1
        }
    }
}
