use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    NoArguments,
    PlaceholderCountMismatch { clauses: usize, arguments: usize },
    ConditionFormat { position: usize, clause: String },
    PlaceholderFormat { position: usize, placeholder: String },
    UnsupportedType { position: usize, type_name: &'static str },
    ExactlyOneKeyCondition { count: usize },
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::NoArguments => ErrorKind::NoArguments,
            ParseError::PlaceholderCountMismatch { .. } => ErrorKind::PlaceholderCountMismatch,
            ParseError::ConditionFormat { .. } => ErrorKind::ConditionFormat,
            ParseError::PlaceholderFormat { .. } => ErrorKind::PlaceholderFormat,
            ParseError::UnsupportedType { .. } => ErrorKind::UnsupportedType,
            ParseError::ExactlyOneKeyCondition { .. } => ErrorKind::ExactlyOneKeyCondition,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::NoArguments => write!(f, "no arguments provided for query"),
            ParseError::PlaceholderCountMismatch { clauses, arguments } => {
                write!(
                    f,
                    "number of placeholders ({}) does not match number of arguments ({})",
                    clauses, arguments
                )
            }
            ParseError::ConditionFormat { position, clause } => {
                write!(
                    f,
                    "condition {} ('{}') must be in the format 'attribute = ${}'",
                    position, clause, position
                )
            }
            ParseError::PlaceholderFormat {
                position,
                placeholder,
            } => {
                write!(
                    f,
                    "placeholder '{}' in condition {} must be '${}'",
                    placeholder, position, position
                )
            }
            ParseError::UnsupportedType {
                position,
                type_name,
            } => {
                write!(
                    f,
                    "unsupported argument type {} for placeholder ${}",
                    type_name, position
                )
            }
            ParseError::ExactlyOneKeyCondition { count } => {
                write!(
                    f,
                    "GetItem requires exactly one key condition, got {}",
                    count
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}
