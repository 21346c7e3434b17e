//! Error types for network parsing and counting runs.

use std::path::PathBuf;
use thiserror::Error;

/// Why a line could not be read as an IPv4 network.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseReason {
    #[error("empty input")]
    Empty,

    #[error("expected 4 dot separated octets, found {0}")]
    OctetCount(usize),

    #[error("octet '{0}' is not a decimal number")]
    InvalidOctet(String),

    #[error("octet '{0}' is out of range 0-255")]
    OctetOutOfRange(String),

    #[error("prefix length '{0}' is not a decimal number")]
    InvalidPrefix(String),

    #[error("prefix length '{0}' is out of range 0-32")]
    PrefixOutOfRange(String),
}

/// A CIDR string that failed to parse, with the original text kept for reporting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{input:?} is not a valid ipv4 network: {reason}")]
pub struct ParseError {
    pub input: String,
    pub reason: ParseReason,
}

impl ParseError {
    pub fn new(input: &str, reason: ParseReason) -> Self {
        ParseError {
            input: input.to_string(),
            reason,
        }
    }
}

/// Failures that end a counting run.
#[derive(Error, Debug)]
pub enum IpCountError {
    #[error("no input file given")]
    MissingArgument,

    #[error("unable to read input file {path:?}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },

    #[error("unable to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl IpCountError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            IpCountError::MissingArgument => 1,
            IpCountError::FileRead { .. } => 2,
            IpCountError::Parse { .. } => 3,
            IpCountError::Output(_) => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, IpCountError>;
