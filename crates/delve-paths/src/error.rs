use delve_core::{Point, Range};
use thiserror::Error;

/// Rejected search requests.
///
/// An unreachable goal is not an error; searches report it as "no path".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("start cell {point} lies outside room grid {bounds}")]
    StartOutOfBounds { point: Point, bounds: Range },
    #[error("end cell {point} lies outside room grid {bounds}")]
    EndOutOfBounds { point: Point, bounds: Range },
}
