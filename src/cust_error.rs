//! This module contains all custom errors used in this library.

use std::fmt;
use std::error::Error;

#[derive(Debug)]
pub enum ImportError {
    IoError(std::io::Error),
    InputMalformedError,
    BadIntError(std::num::ParseIntError),
    /// The declared edge count does not match the adjacency data.
    EdgeCountMismatch { declared: usize, found: usize },
}

impl From<std::io::Error> for ImportError {
    fn from(e: std::io::Error) -> ImportError {
        ImportError::IoError(e)
    }
}

impl From<std::num::ParseIntError> for ImportError {
    fn from(e: std::num::ParseIntError) -> ImportError {
        ImportError::BadIntError(e)
    }
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IoError(_) => write!(f, "Import: IoError"),
            Self::InputMalformedError => write!(f, "Import: Input is malformed."),
            Self::BadIntError(_) => write!(f, "Import: Integer is malformed."),
            Self::EdgeCountMismatch { declared, found } =>
                write!(f, "Import: Declared {} edges but the adjacency lists hold {}.", declared, found),
        }
    }
}

impl Error for ImportError {}

#[derive(Debug, Eq, PartialEq)]
pub enum ProcessingError {
    /// A degree or neighbor query named a vertex that is not in the graph.
    UnknownVertex(usize),
    /// A removal named a vertex that is not in the graph.
    InconsistentRemoval(usize),
    InvalidParameter(String),
    /// The search ran out of its explored-node budget. Carries the number of
    /// nodes explored up to that point.
    BudgetExhausted(u64),
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownVertex(v) => write!(f, "Unknown vertex: {}", v),
            Self::InconsistentRemoval(v) => write!(f, "Inconsistent removal of vertex: {}", v),
            Self::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Self::BudgetExhausted(nodes) => write!(f, "Search budget exhausted after {} explored nodes", nodes),
        }
    }
}

impl Error for ProcessingError {}
