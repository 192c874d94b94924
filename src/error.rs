//! INI codec error types

use thiserror::Error;

/// Malformed input text
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// Section header not closed by `]` or with an empty name
    #[error("invalid section header")]
    InvalidSection,

    /// Item line before any resolved section header
    #[error("item outside of any known section")]
    NoActiveSection,

    /// Item line without `=`
    #[error("missing '=' in item")]
    MissingEquals,

    /// Item line with nothing before `=`
    #[error("empty key")]
    EmptyKey,

    /// Value of an integer field is not a base-10 signed 64-bit number
    #[error("value must be a signed 64-bit integer")]
    NotAnInteger,

    /// Section header with no matching field (strict decoding only)
    #[error("unknown section")]
    UnknownSection,

    /// Item key with no matching field (strict decoding only)
    #[error("unknown key")]
    UnknownKey,
}

/// Target structure does not fit the two-level record contract
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeErrorKind {
    /// Level-1 field addressed by a section header is not a record
    #[error("section field must be a record")]
    SectionNotStruct,

    /// Item field is neither text nor a 64-bit integer
    #[error("unsupported field type")]
    UnsupportedFieldType,
}

/// INI decoding and encoding errors
#[derive(Error, Debug)]
pub enum IniError {
    /// Bad input text, with the 1-based line it was found on
    #[error("syntax error on line {line}: {kind}")]
    Syntax {
        /// What was wrong with the line
        kind: SyntaxErrorKind,
        /// 1-based line number
        line: usize,
    },

    /// The target structure cannot hold the value on this line
    #[error("type error on line {line}: {kind}")]
    Type {
        /// Which part of the contract was broken
        kind: TypeErrorKind,
        /// 1-based line number
        line: usize,
    },

    /// IO error while reading or writing a configuration file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IniError {
    pub(crate) fn syntax(kind: SyntaxErrorKind, line: usize) -> Self {
        Self::Syntax { kind, line }
    }

    pub(crate) fn type_error(kind: TypeErrorKind, line: usize) -> Self {
        Self::Type { kind, line }
    }

    /// Line the error was raised on, if it came from decoding text
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Syntax { line, .. } | Self::Type { line, .. } => Some(*line),
            Self::Io(_) => None,
        }
    }

    /// The syntax error kind, if this is a syntax error
    pub fn syntax_kind(&self) -> Option<SyntaxErrorKind> {
        match self {
            Self::Syntax { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// The type error kind, if this is a type error
    pub fn type_kind(&self) -> Option<TypeErrorKind> {
        match self {
            Self::Type { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Bad user input rather than a caller bug
    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax { .. })
    }

    /// Caller's structure does not fit the format
    pub fn is_type(&self) -> bool {
        matches!(self, Self::Type { .. })
    }
}

/// Result type alias using IniError
pub type Result<T> = std::result::Result<T, IniError>;
