//! Request/response types for a transport that serves the engine, together with the validation
//! order and error-to-status mapping it applies.
use std::panic::{self, AssertUnwindSafe};

use log::{debug, error, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::{find_path, Algorithm, CellPosition, DistanceMatrix, PathingGrid};

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// Message returned for internal failures in place of their details.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathfindingRequest {
    /// Rows of cell markers, see [BLOCKED](crate::BLOCKED).
    pub grid: Vec<Vec<i32>>,
    pub start: CellPosition,
    pub end: CellPosition,
    /// One of `dijkstra`, `bfs` or `dfs`. Kept as a string so that an unknown name can be
    /// reported as such rather than as a decoding failure.
    pub algorithm: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathfindingResponse {
    pub path: Vec<CellPosition>,
    pub distances: DistanceMatrix,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    /// Client errors keep their message; internal ones are replaced by a generic message.
    pub fn from_error(err: &Error) -> ErrorResponse {
        let error = if err.is_client_error() {
            err.to_string()
        } else {
            INTERNAL_ERROR_MESSAGE.to_owned()
        };
        ErrorResponse { error }
    }
}

/// The HTTP status a transport should answer `err` with.
pub fn status_code(err: &Error) -> u16 {
    if err.is_client_error() {
        STATUS_BAD_REQUEST
    } else {
        STATUS_INTERNAL_ERROR
    }
}

/// Validates a decoded request and runs the requested search. The grid shape is checked first,
/// then the algorithm name, then the endpoints, so that no search starts on bad input.
pub fn handle_request(request: &PathfindingRequest) -> Result<PathfindingResponse> {
    let grid = PathingGrid::from_rows(&request.grid)?;
    let algorithm: Algorithm = request.algorithm.parse()?;
    grid.validate_endpoints(&request.start, &request.end)?;
    debug!(
        "Running {} from {} to {}",
        algorithm, request.start, request.end
    );
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        find_path(&grid, request.start, request.end, algorithm)
    }))
    .map_err(|payload| Error::Internal {
        message: panic_message(payload.as_ref()),
    })??;
    Ok(PathfindingResponse {
        path: result.path,
        distances: result.distances,
    })
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "search panicked".to_owned()
    }
}

/// Decodes a JSON request body, handles it and encodes the reply. Returns the status code and
/// the JSON body a transport should send back.
pub fn handle_json(body: &str) -> (u16, String) {
    let outcome = serde_json::from_str::<PathfindingRequest>(body)
        .map_err(Error::from)
        .and_then(|request| handle_request(&request))
        .and_then(|response| serde_json::to_string(&response).map_err(Error::from));
    match outcome {
        Ok(json) => (STATUS_OK, json),
        Err(err) => {
            if err.is_client_error() {
                warn!("Rejected request: {}", err);
            } else {
                error!("Request failed: {}", err);
            }
            let reply = ErrorResponse::from_error(&err);
            // Serialising a single string field cannot fail.
            let json = serde_json::to_string(&reply)
                .unwrap_or_else(|_| format!(r#"{{"error":"{}"}}"#, INTERNAL_ERROR_MESSAGE));
            (status_code(&err), json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{UNREACHED, UNVISITED};

    fn request(algorithm: &str) -> PathfindingRequest {
        PathfindingRequest {
            grid: vec![vec![0, 0, 0], vec![0, 1, 0], vec![0, 0, 0]],
            start: CellPosition::new(0, 0),
            end: CellPosition::new(2, 2),
            algorithm: algorithm.to_owned(),
        }
    }

    #[test]
    fn bfs_request() {
        let response = handle_request(&request("bfs")).unwrap();
        assert_eq!(response.path.len(), 5);
        assert_eq!(response.distances.get(&CellPosition::new(1, 1)), UNVISITED);
    }

    #[test]
    fn dijkstra_request() {
        let response = handle_request(&request("dijkstra")).unwrap();
        assert_eq!(response.path.len(), 5);
        assert_eq!(response.distances.get(&CellPosition::new(2, 2)), 4);
        assert_eq!(response.distances.get(&CellPosition::new(1, 1)), UNREACHED);
    }

    #[test]
    fn grid_is_checked_before_algorithm() {
        let mut req = request("astar");
        req.grid = vec![];
        assert!(matches!(handle_request(&req), Err(Error::EmptyGrid)));
        req.grid = vec![vec![0, 0], vec![0]];
        assert!(matches!(
            handle_request(&req),
            Err(Error::NonRectangularGrid { .. })
        ));
    }

    #[test]
    fn algorithm_is_checked_before_endpoints() {
        let mut req = request("astar");
        req.end = CellPosition::new(9, 9);
        assert!(matches!(
            handle_request(&req),
            Err(Error::UnsupportedAlgorithm { .. })
        ));
    }

    #[test]
    fn json_round_trip() {
        let body = r#"{
            "grid": [[0, 1], [1, 0]],
            "start": {"row": 0, "col": 0},
            "end": {"row": 1, "col": 1},
            "algorithm": "bfs"
        }"#;
        let (status, reply) = handle_json(body);
        assert_eq!(status, STATUS_OK);
        assert_eq!(reply, r#"{"path":[],"distances":[[0,-1],[-1,-1]]}"#);
    }

    #[test]
    fn json_success_lists_cells() {
        let body = r#"{"grid":[[0,0]],"start":{"row":0,"col":0},"end":{"row":0,"col":1},"algorithm":"dfs"}"#;
        let (status, reply) = handle_json(body);
        assert_eq!(status, STATUS_OK);
        assert_eq!(
            reply,
            r#"{"path":[{"row":0,"col":0},{"row":0,"col":1}],"distances":[[0,1]]}"#
        );
    }

    #[test]
    fn client_errors_map_to_bad_request() {
        let bodies = [
            "not json",
            r#"{"grid":[],"start":{"row":0,"col":0},"end":{"row":0,"col":0},"algorithm":"bfs"}"#,
            r#"{"grid":[[0]],"start":{"row":0,"col":0},"end":{"row":0,"col":0},"algorithm":"astar"}"#,
            r#"{"grid":[[1]],"start":{"row":0,"col":0},"end":{"row":0,"col":0},"algorithm":"bfs"}"#,
            r#"{"grid":[[0]],"start":{"row":-1,"col":0},"end":{"row":0,"col":0},"algorithm":"bfs"}"#,
        ];
        for body in bodies {
            let (status, reply) = handle_json(body);
            assert_eq!(status, STATUS_BAD_REQUEST, "{body}");
            let reply: ErrorResponse = serde_json::from_str(&reply).unwrap();
            assert!(!reply.error.is_empty());
        }
    }

    #[test]
    fn internal_errors_hide_details() {
        let err = Error::Internal {
            message: "index out of bounds".to_owned(),
        };
        assert_eq!(status_code(&err), STATUS_INTERNAL_ERROR);
        assert_eq!(ErrorResponse::from_error(&err).error, INTERNAL_ERROR_MESSAGE);
    }

    #[test]
    fn panic_payloads_become_messages() {
        let payload = panic::catch_unwind(|| panic!("bad cell")).unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "bad cell");
    }
}
