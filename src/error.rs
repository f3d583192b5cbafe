use core::fmt;

use thiserror::Error;

use crate::CellPosition;

/// Convenient result alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Which of the two search endpoints an input error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::End => f.write_str("end"),
        }
    }
}

/// Coarse classification of an [Error], used by the request boundary to pick a status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    UnsupportedAlgorithm,
    Internal,
}

/// Top-level error type. Searches themselves never fail; every variant is raised either while
/// validating input or by the request boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// The grid has no rows, or its first row has no cells.
    #[error("grid must contain at least one row and one column")]
    EmptyGrid,

    /// A row's length differs from the first row's length.
    #[error("grid row {row} has {found} cells, expected {expected}")]
    NonRectangularGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("{endpoint} cell {position} lies outside the {rows}x{cols} grid")]
    OutOfBounds {
        endpoint: Endpoint,
        position: CellPosition,
        rows: usize,
        cols: usize,
    },

    #[error("{endpoint} cell {position} is blocked")]
    BlockedEndpoint {
        endpoint: Endpoint,
        position: CellPosition,
    },

    /// Raised when the algorithm identifier is not one of `dijkstra`, `bfs` or `dfs`.
    #[error("unsupported algorithm: {name}")]
    UnsupportedAlgorithm { name: String },

    /// The request body could not be decoded.
    #[error("malformed request: {0}")]
    Json(#[from] serde_json::Error),

    /// Something went wrong that well-formed input should never trigger.
    #[error("internal pathfinding failure: {message}")]
    Internal { message: String },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnsupportedAlgorithm { .. } => ErrorKind::UnsupportedAlgorithm,
            Error::Internal { .. } => ErrorKind::Internal,
            _ => ErrorKind::InvalidInput,
        }
    }

    /// Whether the caller is at fault, as opposed to the engine.
    pub fn is_client_error(&self) -> bool {
        self.kind() != ErrorKind::Internal
    }
}
