use std::fmt;

use aws_sdk_dynamodb::error::BuildError;

use crate::dynamodb::{CodecError, EngineError};
use crate::expr::ParseError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// DynamoDB operation a request failed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    GetItem,
    Query,
    PutItem,
    UpdateItem,
    DeleteItem,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::GetItem => "GetItem",
            Stage::Query => "Query",
            Stage::PutItem => "PutItem",
            Stage::UpdateItem => "UpdateItem",
            Stage::DeleteItem => "DeleteItem",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NoArguments,
    PlaceholderCountMismatch,
    ConditionFormat,
    PlaceholderFormat,
    UnsupportedType,
    ExactlyOneKeyCondition,
    MarshalFailure,
    UnmarshalFailure,
    EmptyUpdate,
    InvalidRequest(Stage),
    Engine(Stage),
}

#[derive(Debug)]
pub enum Error {
    Parse(ParseError),
    Marshal {
        context: String,
        source: CodecError,
    },
    Unmarshal {
        stage: Stage,
        source: CodecError,
    },
    EmptyUpdate,
    /// The SDK rejected the request input before anything was sent.
    InvalidRequest {
        stage: Stage,
        source: BuildError,
    },
    Engine {
        stage: Stage,
        source: EngineError,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Parse(err) => err.kind(),
            Error::Marshal { .. } => ErrorKind::MarshalFailure,
            Error::Unmarshal { .. } => ErrorKind::UnmarshalFailure,
            Error::EmptyUpdate => ErrorKind::EmptyUpdate,
            Error::InvalidRequest { stage, .. } => ErrorKind::InvalidRequest(*stage),
            Error::Engine { stage, .. } => ErrorKind::Engine(*stage),
        }
    }

    pub(crate) fn engine(stage: Stage, source: impl Into<EngineError>) -> Self {
        Error::Engine {
            stage,
            source: source.into(),
        }
    }

    pub(crate) fn invalid_request(stage: Stage, source: BuildError) -> Self {
        Error::InvalidRequest { stage, source }
    }

    pub(crate) fn marshal(context: impl Into<String>, source: CodecError) -> Self {
        Error::Marshal {
            context: context.into(),
            source,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(err) => write!(f, "{err}"),
            Error::Marshal { context, source } => write!(f, "marshalling {context}: {source}"),
            Error::Unmarshal { stage, source } => {
                write!(f, "unmarshalling {stage} result: {source}")
            }
            Error::EmptyUpdate => write!(f, "update requires at least one field"),
            Error::InvalidRequest { stage, source } => {
                write!(f, "building {stage} request: {source}")
            }
            Error::Engine { stage, .. } => write!(f, "error in DynamoDB {stage}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(err) => Some(err),
            Error::Marshal { source, .. } | Error::Unmarshal { source, .. } => Some(source),
            Error::EmptyUpdate => None,
            Error::InvalidRequest { source, .. } => Some(source),
            Error::Engine { source, .. } => Some(source.as_ref()),
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}
